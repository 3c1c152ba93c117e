//! `.kicad_sym` symbol library generation
//!
//! Every CSV row becomes one top-level symbol: a header, the row's
//! properties in the library-wide column order, then the drawing units of
//! the strategy its discriminator column selects. A row whose discriminator
//! has no strategy fails the whole library instead of producing a symbol
//! without a body.

pub mod discrete;
pub mod drawing;
pub mod electromech;
pub mod magnetic;
pub mod passive;

use std::fmt::Write;

use crate::parts::{property_order, ComponentRow};
use crate::units::num;
use crate::{Catalog, Family, GenError};

use discrete::{DiodeDrawing, TransistorDrawing};
use drawing::{emit_unit, Unit};
use electromech::{
    extra_offset, ConnectorDrawing, DipDrawing, DisplayDrawing, SlideDrawing, TactileDrawing,
};
use magnetic::{CoupledInductorDrawing, InductorDrawing, TransformerDrawing};
use passive::{CapacitorDrawing, ResistorDrawing};

const GRID: f64 = 2.54;

/// The drawing strategy selected for one part
#[derive(Debug, Clone)]
pub enum SymbolDrawing<'a> {
    Resistor(ResistorDrawing),
    Capacitor(CapacitorDrawing),
    Diode(DiodeDrawing),
    Transistor(TransistorDrawing),
    Connector(ConnectorDrawing<'a>),
    Tactile(TactileDrawing<'a>),
    Dip(DipDrawing<'a>),
    Inductor(InductorDrawing),
    CoupledInductor(CoupledInductorDrawing<'a>),
    Transformer(TransformerDrawing<'a>),
    Slide(SlideDrawing<'a>),
    Display(DisplayDrawing<'a>),
}

impl<'a> SymbolDrawing<'a> {
    pub fn select(catalog: &'a Catalog, family: Family, row: &ComponentRow) -> Result<Self, GenError> {
        Ok(match family {
            Family::Resistor => Self::Resistor(ResistorDrawing::from_row(row)?),
            Family::Capacitor => Self::Capacitor(CapacitorDrawing::from_row(row)?),
            Family::Diode => Self::Diode(DiodeDrawing::from_row(row)?),
            Family::Transistor => Self::Transistor(TransistorDrawing::from_row(row)?),
            Family::Connector => Self::Connector(ConnectorDrawing::from_row(catalog, row)?),
            Family::TactileSwitch => Self::Tactile(TactileDrawing::from_row(catalog, row)?),
            Family::DipSwitch => Self::Dip(DipDrawing::from_row(catalog, row)?),
            Family::Inductor => Self::Inductor(InductorDrawing::from_row(row)?),
            Family::CoupledInductor => {
                Self::CoupledInductor(CoupledInductorDrawing::from_row(catalog, row)?)
            }
            Family::Transformer => Self::Transformer(TransformerDrawing::from_row(catalog, row)?),
            Family::SlideSwitch => Self::Slide(SlideDrawing::from_row(catalog, row)?),
            Family::SevenSegmentDisplay => Self::Display(DisplayDrawing::from_row(catalog, row)?),
        })
    }

    /// Property text anchor `(x, y)` in grid units.
    ///
    /// Pin-count dependent drawings push the text outwards so it clears the
    /// pin column.
    pub fn text_offset(&self) -> (f64, f64) {
        match self {
            Self::Resistor(_) | Self::Inductor(InductorDrawing::Inductor) => (0.0, 1.0),
            Self::Capacitor(_) | Self::Diode(_) | Self::Inductor(InductorDrawing::FerriteBead) => {
                (0.0, 2.0)
            }
            Self::Transistor(_) | Self::CoupledInductor(_) | Self::Transformer(_) => (0.0, 3.0),
            Self::Connector(c) => (
                (c.spec.rectangle_width / 2.0 + GRID) / GRID,
                1.0 + extra_offset(c.pin_count, c.rows),
            ),
            Self::Tactile(t) => (2.0, 1.0 + extra_offset(t.pin_count, t.rows)),
            Self::Dip(d) => (0.0, 0.5 + extra_offset(d.switch_count, d.rows)),
            Self::Slide(s) => (2.0, 1.0 + extra_offset(s.pin_count, s.rows)),
            Self::Display(_) => (13.0, 8.0),
        }
    }

    pub fn units(&self) -> Vec<Unit> {
        match self {
            Self::Resistor(d) => d.units(),
            Self::Capacitor(d) => d.units(),
            Self::Diode(d) => d.units(),
            Self::Transistor(d) => d.units(),
            Self::Connector(d) => d.units(),
            Self::Tactile(d) => d.units(),
            Self::Dip(d) => d.units(),
            Self::Inductor(d) => d.units(),
            Self::CoupledInductor(d) => d.units(),
            Self::Transformer(d) => d.units(),
            Self::Slide(d) => d.units(),
            Self::Display(d) => d.units(),
        }
    }
}

// =============================================================================
// Serialisation
// =============================================================================

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn emit_property(out: &mut String, name: &str, value: &str, (x, y): (f64, f64), hidden: bool) {
    writeln!(out, "        (property \"{}\" \"{}\"", escape(name), escape(value)).unwrap();
    writeln!(out, "            (at {} {} 0)", num(x), num(y)).unwrap();
    if hidden {
        writeln!(out, "            (show_name)").unwrap();
    }
    writeln!(out, "            (effects").unwrap();
    writeln!(out, "                (font (size 1.27 1.27))").unwrap();
    writeln!(out, "                (justify left)").unwrap();
    if hidden {
        writeln!(out, "                (hide yes)").unwrap();
    }
    writeln!(out, "            )").unwrap();
    writeln!(out, "        )").unwrap();
}

/// Reference above the body and Value below it, both visible. Footprint,
/// Datasheet and Description follow hidden, then every other column one
/// grid step apart.
fn emit_properties(out: &mut String, row: &ComponentRow, order: &[String], (tx, ty): (f64, f64)) {
    let x = tx * GRID;
    let mut next_y = -(ty + 4.0) * GRID;
    for name in order {
        let Some(value) = row.get(name) else {
            continue;
        };
        let (y, hidden) = match name.as_str() {
            "Reference" => (ty * GRID, false),
            "Value" => (-ty * GRID, false),
            "Footprint" => (-(ty + 1.0) * GRID, true),
            "Datasheet" => (-(ty + 2.0) * GRID, true),
            "Description" => (-(ty + 3.0) * GRID, true),
            _ => {
                let y = next_y;
                next_y -= GRID;
                (y, true)
            }
        };
        emit_property(out, name, value, (x, y), hidden);
    }
}

/// Render the symbol of one row; `order` is the library-wide column order
pub fn render_symbol(
    catalog: &Catalog,
    family: Family,
    row: &ComponentRow,
    order: &[String],
) -> Result<String, GenError> {
    let name = row.require("Symbol Name")?;
    let drawing = SymbolDrawing::select(catalog, family, row)?;

    let mut out = String::new();
    writeln!(out, "    (symbol \"{}\"", escape(name)).unwrap();
    writeln!(out, "        (pin_names (offset 0.254))").unwrap();
    writeln!(out, "        (exclude_from_sim no)").unwrap();
    writeln!(out, "        (in_bom yes)").unwrap();
    writeln!(out, "        (on_board yes)").unwrap();
    emit_properties(&mut out, row, order, drawing.text_offset());
    for unit in drawing.units() {
        emit_unit(&mut out, name, &unit);
    }
    writeln!(out, "    )").unwrap();
    Ok(out)
}

/// Render a whole library, one symbol per row
pub fn render_library(catalog: &Catalog, family: Family, rows: &[ComponentRow]) -> Result<String, GenError> {
    let order = property_order(rows);
    let mut out = String::new();
    writeln!(out, "(kicad_symbol_lib").unwrap();
    writeln!(out, "    (version 20231120)").unwrap();
    writeln!(out, "    (generator kicad_symbol_editor)").unwrap();
    writeln!(out, "    (generator_version 8.0)").unwrap();
    for row in rows {
        out.push_str(&render_symbol(catalog, family, row, &order)?);
    }
    writeln!(out, ")").unwrap();
    log::debug!("Rendered {} {family} symbols", rows.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::expand;

    fn rows_for(catalog: &Catalog, family: Family, series: &str) -> Vec<ComponentRow> {
        expand(catalog, family, series)
            .unwrap()
            .iter()
            .map(ComponentRow::from)
            .collect()
    }

    #[test]
    fn test_every_family_renders() {
        let catalog = Catalog::load();
        for family in Family::ALL {
            let key = catalog.series_keys(family)[0].to_string();
            let rows = rows_for(&catalog, family, &key);
            let text = render_library(&catalog, family, &rows).unwrap();
            assert!(text.starts_with("(kicad_symbol_lib\n    (version 20231120)"), "{family}");
            assert!(text.ends_with("    )\n)\n"), "{family}");
            assert_eq!(text.matches("(pin_names (offset 0.254))").count(), rows.len(), "{family}");
            assert!(text.contains("(pin unspecified line"), "{family}");
        }
    }

    #[test]
    fn test_resistor_property_layout() {
        let row = ComponentRow::from_pairs(vec![
            ("Symbol Name", "R_TEST"),
            ("Reference", "R"),
            ("Value", "10 kΩ"),
            ("Footprint", "resistor_footprints:R_0402_1005Metric"),
            ("Datasheet", "https://example.com/r.pdf"),
            ("Description", "RES SMD 10 kΩ"),
            ("Tolerance", "1%"),
            ("Series", "ERJ-2RKF"),
            ("Component Type", "Resistor"),
        ]);
        let order: Vec<String> = row.keys().map(str::to_string).collect();
        let text = render_symbol(&Catalog::load(), Family::Resistor, &row, &order).unwrap();

        assert!(text.starts_with("    (symbol \"R_TEST\"\n"));
        assert!(text.contains("(property \"Reference\" \"R\"\n            (at 0 2.54 0)\n            (effects"));
        assert!(text.contains("(property \"Value\" \"10 kΩ\"\n            (at 0 -2.54 0)\n"));
        assert!(text.contains(
            "(property \"Footprint\" \"resistor_footprints:R_0402_1005Metric\"\n            (at 0 -5.08 0)\n            (show_name)"
        ));
        assert!(text.contains("(property \"Description\" \"RES SMD 10 kΩ\"\n            (at 0 -10.16 0)"));
        // remaining columns stack below in column order, Symbol Name first
        assert!(text.contains("(property \"Symbol Name\" \"R_TEST\"\n            (at 0 -12.7 0)"));
        assert!(text.contains("(property \"Tolerance\" \"1%\"\n            (at 0 -15.24 0)"));
        assert!(text.contains("(property \"Series\" \"ERJ-2RKF\"\n            (at 0 -17.78 0)"));
        assert!(text.contains("(symbol \"R_TEST_0_1\""));
    }

    #[test]
    fn test_unknown_discriminator_fails_library() {
        let catalog = Catalog::load();
        let rows = vec![ComponentRow::from_pairs(vec![
            ("Symbol Name", "D_TEST"),
            ("Reference", "D"),
            ("Diode Type", "Varactor"),
        ])];
        let err = render_library(&catalog, Family::Diode, &rows).unwrap_err();
        assert!(matches!(
            err,
            GenError::UnknownDiscriminator { ref property, ref value }
                if property == "Diode Type" && value == "Varactor"
        ));
    }

    #[test]
    fn test_connector_text_clears_pins() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![
            ("Symbol Name", "J_TB004-508-04BE"),
            ("Reference", "J"),
            ("Series", "TB004-508"),
            ("Pin Count", "4"),
            ("Number of Rows", "1"),
        ]);
        let drawing = SymbolDrawing::select(&catalog, Family::Connector, &row).unwrap();
        let (x, y) = drawing.text_offset();
        assert!((x * GRID - 5.08).abs() < 1e-9);
        assert!((y - 3.0).abs() < 1e-9);

        let order: Vec<String> = row.keys().map(str::to_string).collect();
        let text = render_symbol(&catalog, Family::Connector, &row, &order).unwrap();
        assert!(text.contains("(property \"Reference\" \"J\"\n            (at 5.08 7.62 0)"));
    }

    #[test]
    fn test_transformer_symbol_hides_taps() {
        let catalog = Catalog::load();
        let rows = rows_for(&catalog, Family::Transformer, "ZA9384");
        let text = render_library(&catalog, Family::Transformer, &rows).unwrap();
        assert!(text.contains("(symbol \"T_ZA9384-ALD_0_1\""));
        assert_eq!(text.matches("(pin no_connect line").count(), 6);
    }

    #[test]
    fn test_display_text_offset() {
        let catalog = Catalog::load();
        let rows = rows_for(&catalog, Family::SevenSegmentDisplay, "157143V12800");
        let drawing = SymbolDrawing::select(&catalog, Family::SevenSegmentDisplay, &rows[0]).unwrap();
        assert_eq!(drawing.text_offset(), (13.0, 8.0));
        let order = property_order(&rows);
        let text = render_symbol(&catalog, Family::SevenSegmentDisplay, &rows[0], &order).unwrap();
        assert!(text.contains("(text \"g\"\n                (at 0 0 0)"));
    }

    #[test]
    fn test_row_count_is_checked() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![
            ("Symbol Name", "S_TEST"),
            ("Series", "TS21-34-035-BK-260-SMT-TR"),
            ("Pin Count", "2"),
            ("Number of Rows", "3"),
        ]);
        assert!(matches!(
            SymbolDrawing::select(&catalog, Family::TactileSwitch, &row),
            Err(GenError::UnsupportedRowCount(3))
        ));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let row = ComponentRow::from_pairs(vec![
            ("Symbol Name", "C_TEST"),
            ("Description", "CAP 0.1\" lead"),
            ("Capacitor Type", "Ceramic"),
        ]);
        let order: Vec<String> = row.keys().map(str::to_string).collect();
        let text = render_symbol(&Catalog::load(), Family::Capacitor, &row, &order).unwrap();
        assert!(text.contains("\"CAP 0.1\\\" lead\""));
    }
}
