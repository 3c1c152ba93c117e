//! Resistor, thermistor and capacitor drawings

use crate::parts::ComponentRow;
use crate::GenError;

use super::drawing::{Fill, Graphic, Pin, Point, Stroke, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistorDrawing {
    Resistor,
    Thermistor,
}

impl ResistorDrawing {
    pub fn from_row(row: &ComponentRow) -> Result<Self, GenError> {
        match row.require("Component Type")? {
            "Resistor" => Ok(Self::Resistor),
            "Thermistor" => Ok(Self::Thermistor),
            other => Err(GenError::UnknownDiscriminator {
                property: "Component Type".to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn units(self) -> Vec<Unit> {
        let mut graphics = vec![
            Graphic::line(&[(-2.286, 0.0), (-2.54, 0.0)]),
            Graphic::line(&[(2.286, 0.0), (2.54, 0.0)]),
        ];
        if self == Self::Thermistor {
            graphics.push(Graphic::line(&[
                (2.54, 1.778),
                (1.524, 1.778),
                (-1.524, -1.778),
                (-2.54, -1.778),
            ]));
        }
        graphics.extend([-2.286, -0.762, 0.762].map(|x| Graphic::line(&zig_zag(x))));
        if self == Self::Thermistor {
            let arrow = |points: &[Point]| Graphic::polyline(points, 0.0, Fill::Outline);
            graphics.push(arrow(&[
                (-3.302, 2.54),
                (-1.016, 2.54),
                (-1.778, 2.794),
                (-1.778, 2.286),
                (-1.016, 2.54),
                (-1.27, 2.54),
            ]));
            graphics.push(arrow(&[
                (-1.016, 1.778),
                (-3.302, 1.778),
                (-2.54, 2.032),
                (-2.54, 1.524),
                (-3.302, 1.778),
                (-3.048, 1.778),
            ]));
        }

        let pins = vec![Pin::new(-5.08, 0.0, 0, "1"), Pin::new(5.08, 0.0, 180, "2")];
        vec![Unit::with("0_1", graphics, pins)]
    }
}

/// One 1.524 mm wide period of the resistor zig-zag starting at `x`
fn zig_zag(x: f64) -> [Point; 5] {
    [
        (x, 0.0),
        (x + 0.381, 1.016),
        (x + 0.762, 0.0),
        (x + 1.143, -1.016),
        (x + 1.524, 0.0),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitorDrawing {
    NonPolarised,
    Polarised,
}

impl CapacitorDrawing {
    /// Ceramic parts get plates on both sides; electrolytic, tantalum and
    /// polymer parts get a curved negative plate and a `+` mark
    pub fn from_row(row: &ComponentRow) -> Result<Self, GenError> {
        match row.require("Capacitor Type")? {
            "Ceramic" => Ok(Self::NonPolarised),
            "Aluminum Electrolytic" | "Tantalum" | "Polymer" => Ok(Self::Polarised),
            other => Err(GenError::UnknownDiscriminator {
                property: "Capacitor Type".to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn units(self) -> Vec<Unit> {
        let plate = |x: f64| Graphic::polyline(&[(x, -2.032), (x, 2.032)], 0.508, Fill::None);
        let graphics = match self {
            Self::NonPolarised => vec![plate(-0.762), plate(0.762)],
            Self::Polarised => vec![
                plate(-0.762),
                Graphic::polyline(&[(-2.54, -1.016), (-2.54, -2.032)], 0.508, Fill::None),
                Graphic::polyline(&[(-2.032, -1.524), (-3.048, -1.524)], 0.508, Fill::None),
                Graphic::Arc {
                    start: (1.524, 2.032),
                    mid: (0.9088, 0.0),
                    end: (1.524, -2.032),
                    stroke: Stroke::default_type(0.508),
                },
            ],
        };
        let pins = vec![
            Pin::new(-3.81, 0.0, 0, "1").length(2.8),
            Pin::new(3.81, 0.0, 180, "2").length(2.8),
        ];
        vec![Unit::with("0_1", graphics, pins)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_selection() {
        let row = ComponentRow::from_pairs(vec![("Component Type", "Thermistor")]);
        assert_eq!(ResistorDrawing::from_row(&row).unwrap(), ResistorDrawing::Thermistor);

        let row = ComponentRow::from_pairs(vec![("Component Type", "Varistor")]);
        let err = ResistorDrawing::from_row(&row).unwrap_err();
        assert!(matches!(err, GenError::UnknownDiscriminator { ref value, .. } if value == "Varistor"));

        let row = ComponentRow::from_pairs(vec![("Value", "1 kΩ")]);
        assert!(matches!(
            ResistorDrawing::from_row(&row),
            Err(GenError::MissingProperty(_))
        ));
    }

    #[test]
    fn test_thermistor_adds_slash_and_arrows() {
        let resistor = &ResistorDrawing::Resistor.units()[0];
        let thermistor = &ResistorDrawing::Thermistor.units()[0];
        assert_eq!(resistor.graphics.len(), 5);
        assert_eq!(thermistor.graphics.len(), 8);
        assert_eq!(resistor.pins, thermistor.pins);
    }

    #[test]
    fn test_capacitor_polarity_follows_type() {
        let ceramic = ComponentRow::from_pairs(vec![("Capacitor Type", "Ceramic")]);
        let tantalum = ComponentRow::from_pairs(vec![("Capacitor Type", "Tantalum")]);
        assert_eq!(CapacitorDrawing::from_row(&ceramic).unwrap(), CapacitorDrawing::NonPolarised);
        assert_eq!(CapacitorDrawing::from_row(&tantalum).unwrap(), CapacitorDrawing::Polarised);

        let film = ComponentRow::from_pairs(vec![("Capacitor Type", "Film")]);
        assert!(matches!(
            CapacitorDrawing::from_row(&film),
            Err(GenError::UnknownDiscriminator { ref property, ref value })
                if property == "Capacitor Type" && value == "Film"
        ));

        let unit = &CapacitorDrawing::Polarised.units()[0];
        assert!(unit.graphics.iter().any(|g| matches!(g, Graphic::Arc { .. })));
        assert!(unit.pins.iter().all(|p| p.length == 2.8));
    }
}
