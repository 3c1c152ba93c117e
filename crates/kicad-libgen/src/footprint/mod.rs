//! `.kicad_mod` footprint generation
//!
//! [`render`] resolves the footprint spec a part row points at and hands it
//! to the package renderers in [`chip`], [`header`] and [`magnetic`].

pub mod chip;
pub mod header;
pub mod magnetic;
pub mod primitives;

use crate::parts::ComponentRow;
use crate::symbol::passive::CapacitorDrawing;
use crate::{Catalog, Family, GenError};

pub use chip::PassiveModel;
pub use header::HeaderOptions;

const CONNECTOR_MODELS: &str = "${KICAD9_3D_MODELS_VAULT}/3D_models/connectors";
const TACTILE_MODELS: &str = "${KICAD9_3D_MODELS_VAULT}/3D_models/tactile_switches";
const SLIDE_MODELS: &str = "${KICAD9_3D_MODELS_VAULT}/3D_models/slide_switches";
const INDUCTOR_MODELS: &str = "${KICAD9_3D_MODELS_VAULT}/3D_models/inductors";
const COUPLED_INDUCTOR_MODELS: &str = "${KICAD9_3D_MODELS_VAULT}/3D_models/coupled_inductors";
const TRANSFORMER_MODELS: &str = "${KICAD9_3D_MODELS_VAULT}/3D_models/transformers";

/// One rendered footprint, ready to be written as `<name>.kicad_mod`
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub name: String,
    pub text: String,
}

/// Library-local part of a footprint reference.
///
/// Examples:
/// - `"resistor_footprints:R_0402_1005Metric"` → `"R_0402_1005Metric"`
/// - `"SOD_123"` → `"SOD_123"`
pub fn footprint_name(footprint: &str) -> &str {
    footprint
        .split_once(':')
        .map(|(_, name)| name)
        .unwrap_or(footprint)
}

fn pin_count(row: &ComponentRow) -> Result<usize, GenError> {
    let text = row.require("Pin Count")?;
    text.trim()
        .parse()
        .map_err(|_| GenError::MalformedValue(text.to_string()))
}

/// Render the footprint of the part described by `row`
pub fn render(catalog: &Catalog, family: Family, row: &ComponentRow) -> Result<String, GenError> {
    let name = footprint_name(row.require("Footprint")?);

    match family {
        Family::Resistor => {
            let case = row.require("Case Code - in")?;
            let spec = catalog.resistor_footprints.get(case)?;
            let step = format!("{}_{}", row.require("Reference")?, case);
            let model = PassiveModel {
                vault_dir: "resistors",
                step: &step,
            };
            chip::passive(name, spec, model, false)
        }
        Family::Capacitor => {
            let case = row.require("Case Code - in")?;
            let spec = catalog.capacitor_footprints.get(case)?;
            let polarised = CapacitorDrawing::from_row(row)? == CapacitorDrawing::Polarised;
            let step = format!("C_{case}");
            let model = PassiveModel {
                vault_dir: "capacitors",
                step: &step,
            };
            chip::passive(name, spec, model, polarised)
        }
        Family::Diode => {
            let spec = catalog.diode_footprints.get(name)?;
            Ok(chip::diode(name, name, spec))
        }
        Family::Transistor => {
            let spec = catalog.transistor_footprints.get(name)?;
            chip::transistor(name, name, spec)
        }
        Family::Connector => {
            let series = row.require("Series")?;
            let spec = catalog.connector_footprints.get(series)?;
            let options = HeaderOptions {
                model_dir: CONNECTOR_MODELS,
                model_file: row.require("MPN")?,
                pin_1_marker: true,
            };
            Ok(header::header(name, series, pin_count(row)?, spec, options))
        }
        Family::TactileSwitch => {
            let series = catalog.tactile_switches.get(row.require("Series")?)?;
            let spec = catalog.tactile_footprints.get(series.footprint_key)?;
            let options = HeaderOptions {
                model_dir: TACTILE_MODELS,
                model_file: spec.model_name.unwrap_or(series.footprint_key),
                pin_1_marker: false,
            };
            Ok(header::header(name, row.require("Value")?, pin_count(row)?, spec, options))
        }
        Family::SlideSwitch => {
            let series = catalog.slide_switches.get(row.require("Series")?)?;
            let spec = catalog.slide_footprints.get(series.footprint_key)?;
            let options = HeaderOptions {
                model_dir: SLIDE_MODELS,
                model_file: spec.model_name.unwrap_or(series.footprint_key),
                pin_1_marker: false,
            };
            Ok(header::header(name, row.require("Value")?, pin_count(row)?, spec, options))
        }
        Family::Inductor => {
            let spec = catalog.inductor_footprints.get(row.require("Series")?)?;
            magnetic::side_pad(name, spec, INDUCTOR_MODELS)
        }
        Family::CoupledInductor => {
            let spec = catalog.coupled_inductor_footprints.get(row.require("Series")?)?;
            magnetic::side_pad(name, spec, COUPLED_INDUCTOR_MODELS)
        }
        Family::Transformer => {
            let spec = catalog.transformer_footprints.get(row.require("Series")?)?;
            magnetic::side_pad(name, spec, TRANSFORMER_MODELS)
        }
        // symbol-only families
        Family::DipSwitch | Family::SevenSegmentDisplay => Err(GenError::UnknownFootprint {
            family,
            key: row.require("Series")?.to_string(),
        }),
    }
}

/// One footprint per CSV row, named after the row's symbol
pub fn render_rows(
    catalog: &Catalog,
    family: Family,
    rows: &[ComponentRow],
) -> Result<Vec<Footprint>, GenError> {
    rows.iter()
        .map(|row| {
            Ok(Footprint {
                name: row.require("Symbol Name")?.to_string(),
                text: render(catalog, family, row)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor_row(symbol: &str, value: &str) -> ComponentRow {
        ComponentRow::from_pairs(vec![
            ("Symbol Name", symbol),
            ("Reference", "R"),
            ("Value", value),
            ("Footprint", "resistor_footprints:R_0402_1005Metric"),
            ("Case Code - in", "0402"),
        ])
    }

    #[test]
    fn test_footprint_name() {
        assert_eq!(footprint_name("resistor_footprints:R_0402_1005Metric"), "R_0402_1005Metric");
        assert_eq!(footprint_name("SOD_123"), "SOD_123");
    }

    #[test]
    fn test_resistor_rows_give_one_file_each() {
        let catalog = Catalog::load();
        let rows = vec![
            resistor_row("R_ERJ-2RKF1001X", "1 kΩ"),
            resistor_row("R_ERJ-2RKF1002X", "10 kΩ"),
            resistor_row("R_ERJ-2RKF1003X", "100 kΩ"),
        ];
        let footprints = render_rows(&catalog, Family::Resistor, &rows).unwrap();
        assert_eq!(footprints.len(), 3);

        let mut names: Vec<&str> = footprints.iter().map(|f| f.name.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 3);

        for footprint in &footprints {
            let text = &footprint.text;
            assert!(text.starts_with("(footprint \"R_0402_1005Metric\""));
            assert_eq!(text.matches("smd roundrect").count(), 2);
            assert!(text.contains("(at -0.51 0)"));
            assert!(text.contains("(at 0.51 0)"));
            // 1.86 x 0.94 courtyard
            assert!(text.contains(
                "(start -0.93 -0.47)\n        (end 0.93 0.47)\n        (stroke (width 0.00635) (type solid))\n        (fill none)\n        (layer \"F.CrtYd\")"
            ));
            assert!(text.contains("3D_models/resistors/R_0402.step"));
        }
    }

    #[test]
    fn test_connector_footprint_follows_pin_count() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![
            ("Footprint", "connector_footprints:TB004-508-04BE"),
            ("Series", "TB004-508"),
            ("MPN", "TB004-508-04BE"),
            ("Pin Count", "4"),
        ]);
        let text = render(&catalog, Family::Connector, &row).unwrap();
        assert!(text.starts_with("(footprint \"TB004-508-04BE\""));
        assert_eq!(text.matches("thru_hole").count(), 4);
        assert!(text.contains("3D_models/connectors/TB004-508-04BE.step"));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![("Footprint", "diode_footprints:SOD_123")]);
        assert!(render(&catalog, Family::Diode, &row).is_ok());

        let err = render(&catalog, Family::Resistor, &row).unwrap_err();
        assert!(matches!(err, GenError::MissingProperty(ref p) if p == "Case Code - in"));
    }

    #[test]
    fn test_unknown_package_is_an_error() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![("Footprint", "transistor_footprints:TO-220")]);
        let err = render(&catalog, Family::Transistor, &row).unwrap_err();
        assert_eq!(err.to_string(), "No transistor footprint specs found for TO-220");
    }

    #[test]
    fn test_dip_switches_have_no_footprint() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![
            ("Footprint", "dip_switches_footprints:416131160802"),
            ("Series", "416131160802"),
        ]);
        assert!(matches!(
            render(&catalog, Family::DipSwitch, &row),
            Err(GenError::UnknownFootprint { family: Family::DipSwitch, .. })
        ));
    }

    #[test]
    fn test_inductor_rows_share_series_footprint() {
        let catalog = Catalog::load();
        let parts = crate::parts::expand(&catalog, Family::Inductor, "XAL4020").unwrap();
        let row = ComponentRow::from(&parts[0]);
        let text = render(&catalog, Family::Inductor, &row).unwrap();
        assert!(text.starts_with("(footprint \"XAL4020\""));
        assert!(text.contains("3D_models/inductors/XAL4020.step"));
    }

    #[test]
    fn test_slide_switch_footprint() {
        let catalog = Catalog::load();
        let parts = crate::parts::expand(&catalog, Family::SlideSwitch, "8SS1012-Z").unwrap();
        let row = ComponentRow::from(&parts[0]);
        let text = render(&catalog, Family::SlideSwitch, &row).unwrap();
        assert!(text.starts_with("(footprint \"8SS1012-Z\""));
        assert_eq!(text.matches("(pad \"").count(), 5);
        assert!(text.contains("(pad \"3\" thru_hole circle\n        (at 2.000 0.000)"));
        assert!(text.contains("3D_models/slide_switches/8SS1012-Z.step"));
    }

    #[test]
    fn test_displays_have_no_footprint() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![
            ("Footprint", "seven_segm_display_footprints:157143B12800"),
            ("Series", "157143B12800"),
        ]);
        assert!(matches!(
            render(&catalog, Family::SevenSegmentDisplay, &row),
            Err(GenError::UnknownFootprint { family: Family::SevenSegmentDisplay, .. })
        ));
    }

    #[test]
    fn test_unknown_capacitor_type_is_an_error() {
        let catalog = Catalog::load();
        let row = ComponentRow::from_pairs(vec![
            ("Footprint", "capacitor_footprints:C_0402_1005Metric"),
            ("Case Code - in", "0402"),
            ("Capacitor Type", "Film"),
        ]);
        assert!(matches!(
            render(&catalog, Family::Capacitor, &row),
            Err(GenError::UnknownDiscriminator { ref value, .. }) if value == "Film"
        ));
    }
}
