//! Inductor, ferrite bead, coupled inductor and transformer drawings

use crate::parts::ComponentRow;
use crate::specs::{CoupledInductorSeries, TransformerSeries, WindingPin};
use crate::{Catalog, GenError};

use super::drawing::{Fill, Graphic, Pin, Stroke, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InductorDrawing {
    Inductor,
    FerriteBead,
}

impl InductorDrawing {
    /// Beads share the inductor CSV and are told apart by their reference
    pub fn from_row(row: &ComponentRow) -> Result<Self, GenError> {
        match row.require("Reference")? {
            "L" => Ok(Self::Inductor),
            "E" => Ok(Self::FerriteBead),
            other => Err(GenError::UnknownDiscriminator {
                property: "Reference".to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn units(self) -> Vec<Unit> {
        match self {
            Self::Inductor => {
                let graphics = [
                    (-2.54, -3.81, -5.08),
                    (0.0, -1.27, -2.54),
                    (2.54, 1.27, 0.0),
                    (5.08, 3.81, 2.54),
                ]
                .into_iter()
                .map(|(start, mid, end)| Graphic::Arc {
                    start: (start, 0.0056),
                    mid: (mid, 1.27),
                    end: (end, 0.0056),
                    stroke: Stroke::default_type(0.2032),
                })
                .collect();
                let pins = vec![Pin::new(-7.62, 0.0, 0, "1"), Pin::new(7.62, 0.0, 180, "2")];
                vec![Unit::with("0_1", graphics, pins)]
            }
            Self::FerriteBead => {
                let graphics = vec![
                    Graphic::line(&[(-1.27, 0.0), (-2.54, 0.0)]),
                    Graphic::line(&[(1.27, 0.0), (2.54, 0.0)]),
                    Graphic::polyline(
                        &[(0.0, 2.54), (2.54, 2.54), (0.0, -2.54), (-2.54, -2.54), (0.0, 2.54)],
                        0.2032,
                        Fill::None,
                    ),
                ];
                let pins = vec![Pin::new(-5.08, 0.0, 0, "1"), Pin::new(5.08, 0.0, 180, "2")];
                vec![Unit::with("0_1", graphics, pins)]
            }
        }
    }
}

// =============================================================================
// Windings
// =============================================================================

/// Four half-turns stacked along x = `x`, bulging towards the core
fn winding(x: f64) -> impl Iterator<Item = Graphic> {
    let bulge = if x < 0.0 { x + 1.27 } else { x - 1.27 };
    (0..4).map(move |turn| {
        let y = -5.08 + f64::from(turn) * 2.54;
        Graphic::Arc {
            start: (x, y),
            mid: (bulge, y + 1.27),
            end: (x, y + 2.54),
            stroke: Stroke::default_type(0.0),
        }
    })
}

/// Polarity dot next to the winding start
fn polarity_dot(center: (f64, f64)) -> Graphic {
    Graphic::Circle {
        center,
        radius: 0.508,
        stroke: Stroke::default_type(0.0),
        fill: Fill::None,
    }
}

/// Two core lines between `top` and `bottom`
fn core(top: f64, bottom: f64) -> [Graphic; 2] {
    [-0.254, 0.254].map(|x| Graphic::line(&[(x, top), (x, bottom)]))
}

fn winding_pins(pins: &[WindingPin], x: f64, angle: u32) -> impl Iterator<Item = Pin> + '_ {
    pins.iter().map(move |p| {
        let pin = Pin::new(x, p.y, angle, p.number).length(p.length);
        if p.no_connect {
            pin.no_connect()
        } else {
            pin
        }
    })
}

fn two_windings(
    suffix: &'static str,
    left: &[WindingPin],
    right: &[WindingPin],
    dots: [(f64, f64); 2],
    core_span: (f64, f64),
) -> Unit {
    let mut graphics: Vec<Graphic> = winding(-2.54).chain(winding(2.54)).collect();
    graphics.extend(dots.map(polarity_dot));
    graphics.extend(core(core_span.0, core_span.1));
    let pins = winding_pins(left, -7.62, 0)
        .chain(winding_pins(right, 7.62, 180))
        .collect();
    Unit::with(suffix, graphics, pins)
}

// =============================================================================
// Coupled inductors
// =============================================================================

/// Two alternative units: the second swaps the sense of the right winding
#[derive(Debug, Clone)]
pub struct CoupledInductorDrawing<'a> {
    pub spec: &'a CoupledInductorSeries,
}

impl<'a> CoupledInductorDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.coupled_inductors.get(row.require("Series")?)?;
        Ok(Self { spec })
    }

    pub fn units(&self) -> Vec<Unit> {
        let pins = &self.spec.pins;
        vec![
            two_windings(
                "1_1",
                &pins.left,
                &pins.right,
                [(-2.54, 3.81), (2.54, -3.81)],
                (5.08, -5.08),
            ),
            two_windings(
                "1_2",
                &pins.left,
                &pins.right_alternative,
                [(-2.54, 3.81), (2.54, 3.81)],
                (5.08, -5.08),
            ),
        ]
    }
}

// =============================================================================
// Transformers
// =============================================================================

#[derive(Debug, Clone)]
pub struct TransformerDrawing<'a> {
    pub spec: &'a TransformerSeries,
}

impl<'a> TransformerDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.transformers.get(row.require("Series")?)?;
        Ok(Self { spec })
    }

    pub fn units(&self) -> Vec<Unit> {
        let pins = &self.spec.pins;
        let ys = pins.left.iter().chain(&pins.right).map(|p| p.y);
        let top = ys.clone().fold(f64::MIN, f64::max);
        let bottom = ys.fold(f64::MAX, f64::min);
        vec![two_windings(
            "0_1",
            &pins.left,
            &pins.right,
            [(-2.54, 3.81), (2.54, -3.81)],
            (top, bottom),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::drawing::PinKind;

    #[test]
    fn test_reference_selects_drawing() {
        let row = ComponentRow::from_pairs(vec![("Reference", "E")]);
        assert_eq!(InductorDrawing::from_row(&row).unwrap(), InductorDrawing::FerriteBead);

        let row = ComponentRow::from_pairs(vec![("Reference", "FB")]);
        assert!(matches!(
            InductorDrawing::from_row(&row),
            Err(GenError::UnknownDiscriminator { ref property, .. }) if property == "Reference"
        ));
    }

    #[test]
    fn test_inductor_is_four_arcs() {
        let units = InductorDrawing::Inductor.units();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].graphics.len(), 4);
        assert!(units[0].graphics.iter().all(|g| matches!(g, Graphic::Arc { .. })));
        assert_eq!(units[0].pins[0].x, -7.62);

        let bead = InductorDrawing::FerriteBead.units();
        assert_eq!(bead[0].pins[1].x, 5.08);
    }

    #[test]
    fn test_coupled_units_swap_right_winding() {
        let catalog = Catalog::load();
        let drawing = CoupledInductorDrawing {
            spec: catalog.coupled_inductors.get("MSD7342").unwrap(),
        };
        let units = drawing.units();
        assert_eq!(units.len(), 2);
        // eight arcs, two dots, two core lines
        assert_eq!(units[0].graphics.len(), 12);

        let right = |unit: &Unit| -> Vec<(String, f64)> {
            unit.pins
                .iter()
                .filter(|p| p.angle == 180)
                .map(|p| (p.number.clone(), p.y))
                .collect()
        };
        assert_eq!(right(&units[0]), vec![("2".to_string(), 5.08), ("4".to_string(), -5.08)]);
        assert_eq!(right(&units[1]), vec![("2".to_string(), -5.08), ("4".to_string(), 5.08)]);
    }

    #[test]
    fn test_transformer_taps_are_hidden() {
        let catalog = Catalog::load();
        let drawing = TransformerDrawing {
            spec: catalog.transformers.get("ZA9384").unwrap(),
        };
        let units = drawing.units();
        assert_eq!(units[0].pins.len(), 10);
        let hidden: Vec<&str> = units[0]
            .pins
            .iter()
            .filter(|p| p.hidden)
            .map(|p| p.number.as_str())
            .collect();
        assert_eq!(hidden, vec!["5", "3", "1", "7", "8", "9"]);
        assert!(units[0]
            .pins
            .iter()
            .all(|p| p.hidden == (p.kind == PinKind::NoConnect)));
    }
}
