//! Diode and MOSFET drawings

use crate::parts::ComponentRow;
use crate::GenError;

use super::drawing::{Fill, Graphic, Pin, Point, Stroke, Unit};

const DIODE_STROKE: f64 = 0.2032;

// =============================================================================
// Diodes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiodeDrawing {
    Schottky,
    Zener,
    Rectifier,
    UnidirectionalTvs,
    BidirectionalTvs,
    DualSwitching,
    DualSchottky,
    RedLed,
    GreenLed,
}

impl DiodeDrawing {
    pub fn from_row(row: &ComponentRow) -> Result<Self, GenError> {
        let value = row.require("Diode Type")?;
        Ok(match value {
            "Schottky" => Self::Schottky,
            "Zener" => Self::Zener,
            "Rectifier" => Self::Rectifier,
            "Unidirectional TVS" => Self::UnidirectionalTvs,
            "Bidirectional TVS" => Self::BidirectionalTvs,
            "Dual Small Signal Switching Diodes" => Self::DualSwitching,
            "Small Signal Schottky Diodes" => Self::DualSchottky,
            "Red LED" => Self::RedLed,
            "Green LED" => Self::GreenLed,
            _ => {
                return Err(GenError::UnknownDiscriminator {
                    property: "Diode Type".to_string(),
                    value: value.to_string(),
                })
            }
        })
    }

    fn body(points: &[Point]) -> Graphic {
        Graphic::polyline(points, DIODE_STROKE, Fill::None)
    }

    pub fn units(self) -> Vec<Unit> {
        const TRIANGLE: [Point; 6] = [
            (1.27, 1.905),
            (1.27, 0.0),
            (-1.27, 1.905),
            (-1.27, -1.905),
            (1.27, 0.0),
            (1.27, -1.905),
        ];
        // cathode on the right
        let axial = |length: f64| {
            vec![
                Pin::new(5.08, 0.0, 180, "1").length(length),
                Pin::new(-5.08, 0.0, 0, "2").length(length),
            ]
        };
        // common node on top, pin 3
        let dual = || {
            vec![
                Pin::new(-10.16, 0.0, 0, "1").length(3.81),
                Pin::new(10.16, 0.0, 180, "2").length(3.81),
                Pin::new(0.0, 5.08, 270, "3").length(3.81),
            ]
        };
        let junction = Graphic::dot((0.0, 0.0), 0.254, Stroke::default_type(0.0));

        let (graphics, pins) = match self {
            Self::Schottky => (
                vec![Self::body(&[
                    (0.635, 1.27),
                    (0.635, 1.905),
                    (1.27, 1.905),
                    (1.27, 0.0),
                    (-1.27, 1.905),
                    (-1.27, -1.905),
                    (1.27, 0.0),
                    (1.27, -1.905),
                    (1.905, -1.905),
                    (1.905, -1.27),
                ])],
                axial(3.81),
            ),
            Self::Zener => (
                vec![Self::body(&[
                    (0.635, 1.905),
                    (1.27, 1.27),
                    (1.27, 0.0),
                    (-1.27, 1.905),
                    (-1.27, -1.905),
                    (1.27, 0.0),
                    (1.27, -1.27),
                    (1.905, -1.905),
                ])],
                axial(3.81),
            ),
            Self::Rectifier => (vec![Self::body(&TRIANGLE)], axial(3.81)),
            Self::UnidirectionalTvs => {
                let mut points = TRIANGLE.to_vec();
                points.push((0.635, -1.905));
                (vec![Self::body(&points)], axial(3.81))
            }
            Self::BidirectionalTvs => (
                vec![Self::body(&[
                    (3.81, 0.0),
                    (2.54, 0.0),
                    (2.54, 1.905),
                    (0.0, 0.0),
                    (0.0, 1.27),
                    (-0.635, 1.905),
                    (0.0, 1.27),
                    (0.0, 0.0),
                    (-2.54, 1.905),
                    (-2.54, 0.0),
                    (-3.81, 0.0),
                    (-2.54, 0.0),
                    (-2.54, -1.905),
                    (0.0, 0.0),
                    (0.0, -1.27),
                    (0.635, -1.905),
                    (0.0, -1.27),
                    (0.0, 0.0),
                    (2.54, -1.905),
                    (2.54, 0.0),
                ])],
                axial(1.27),
            ),
            Self::DualSwitching => (
                vec![
                    Self::body(&[
                        (6.35, 1.905),
                        (6.35, 0.0),
                        (3.81, 1.905),
                        (3.81, 0.0),
                        (0.0, 0.0),
                        (0.0, 1.27),
                        (0.0, 0.0),
                        (-3.81, 0.0),
                        (-3.81, 1.905),
                        (-3.81, 0.0),
                        (-6.35, 1.905),
                        (-6.35, -1.905),
                        (-3.81, 0.0),
                        (-3.81, -1.905),
                        (-3.81, 0.0),
                        (3.81, 0.0),
                        (3.81, -1.905),
                        (6.35, 0.0),
                        (6.35, -1.905),
                    ]),
                    junction,
                ],
                dual(),
            ),
            Self::DualSchottky => (
                vec![
                    Self::body(&[
                        (6.35, 1.905),
                        (6.35, 0.0),
                        (3.81, 1.905),
                        (3.81, 0.0),
                        (0.0, 0.0),
                        (0.0, 1.27),
                        (0.0, 0.0),
                        (-3.81, 0.0),
                        (-3.81, 1.905),
                        (-6.35, 0.0),
                        (-6.35, 1.905),
                        (-6.35, -1.905),
                        (-6.35, 0.0),
                        (-3.81, -1.905),
                        (-3.81, 0.0),
                        (3.81, 0.0),
                        (3.81, -1.905),
                        (6.35, 0.0),
                        (6.35, -1.905),
                    ]),
                    junction,
                ],
                dual(),
            ),
            Self::RedLed | Self::GreenLed => {
                let color = match self {
                    Self::RedLed => Fill::Color(255, 0, 0),
                    _ => Fill::Color(204, 255, 0),
                };
                let ray = |x: f64, y: f64| {
                    Self::body(&[
                        (x, y),
                        (x + 1.524, y + 1.524),
                        (x + 0.762, y + 1.524),
                        (x + 1.524, y + 1.524),
                        (x + 1.524, y + 0.762),
                    ])
                };
                (
                    vec![
                        Graphic::polyline(&TRIANGLE, DIODE_STROKE, color),
                        ray(1.778, 2.54),
                        ray(3.048, 2.54),
                    ],
                    axial(3.81),
                )
            }
        };
        vec![Unit::with("1_0", graphics, pins)]
    }
}

// =============================================================================
// MOSFETs
// =============================================================================

/// Gate lead and gate plate, drawn from the gate pin up to the channel
const GATE: [Point; 6] = [
    (0.0, -6.35),
    (0.0, -2.54),
    (-2.54, -2.54),
    (2.54, -2.54),
    (0.0, -2.54),
    (0.0, -6.35),
];

#[rustfmt::skip]
const P_CHANNEL_BODY: [Point; 50] = [
    (-5.08, 1.27), (-5.08, 0.0), (-2.54, 0.0), (-2.032, 0.0),
    (-2.032, -2.032), (-2.54, -2.032), (-1.524, -2.032), (-2.032, -2.032),
    (-2.032, 0.0), (-2.54, 0.0), (-2.54, 1.27), (-0.508, 1.27),
    (-0.508, 0.762), (0.508, 1.27), (0.508, 0.762), (0.508, 1.27),
    (2.54, 1.27), (2.54, 0.0), (0.0, 0.0), (-0.508, -1.016),
    (0.0, -1.016), (0.0, -2.032), (-0.508, -2.032), (0.508, -2.032),
    (0.0, -2.032), (0.0, -1.016), (0.508, -1.016), (0.0, 0.0),
    (2.032, 0.0), (2.032, -2.032), (1.524, -2.032), (2.54, -2.032),
    (2.032, -2.032), (2.032, 0.0), (2.54, 0.0), (5.08, 0.0),
    (5.08, -3.81), (5.08, 1.27), (5.08, 0.0), (2.54, 0.0),
    (2.54, 1.27), (0.508, 1.27), (0.508, 1.778), (0.508, 1.27),
    (-0.508, 1.778), (-0.508, 1.27), (-2.54, 1.27), (-2.54, 0.0),
    (-5.08, 0.0), (-5.08, 1.27),
];

/// Drain rail runs down the left side to the four drain pins
#[rustfmt::skip]
const P_CHANNEL_SOT26_BODY: [Point; 49] = [
    (-5.08, 1.27), (-5.08, -6.35), (-5.08, 0.0), (-2.54, 0.0),
    (-2.032, 0.0), (-2.032, -2.032), (-2.54, -2.032), (-1.524, -2.032),
    (-2.032, -2.032), (-2.032, 0.0), (-2.54, 0.0), (-2.54, 1.27),
    (-0.508, 1.27), (-0.508, 0.762), (0.508, 1.27), (0.508, 0.762),
    (0.508, 1.27), (2.54, 1.27), (2.54, 0.0), (0.0, 0.0),
    (-0.508, -1.016), (0.0, -1.016), (0.0, -2.032), (-0.508, -2.032),
    (0.508, -2.032), (0.0, -2.032), (0.0, -1.016), (0.508, -1.016),
    (0.0, 0.0), (2.032, 0.0), (2.032, -2.032), (1.524, -2.032),
    (2.54, -2.032), (2.032, -2.032), (2.032, 0.0), (2.54, 0.0),
    (5.08, 0.0), (5.08, 1.27), (5.08, 0.0), (2.54, 0.0),
    (2.54, 1.27), (0.508, 1.27), (0.508, 1.778), (0.508, 1.27),
    (-0.508, 1.778), (-0.508, 1.27), (-2.54, 1.27), (-2.54, 0.0),
    (-5.08, 0.0),
];

/// The source rail ends at (5.08, -3.81) where the outer source pins join;
/// the three-pin variant stops at (5.08, 0).
#[rustfmt::skip]
const N_CHANNEL_BODY: [Point; 47] = [
    (5.08, 1.27), (5.08, 0.0), (2.54, 0.0), (2.54, 1.27),
    (0.508, 1.27), (0.508, 1.778), (-0.508, 1.27), (-0.508, 1.778),
    (-0.508, 1.27), (-2.54, 1.27), (-2.54, 0.0), (-5.08, 0.0),
    (-5.08, 1.27), (-5.08, 0.0), (-2.032, 0.0), (-2.032, -2.032),
    (-2.54, -2.032), (-1.524, -2.032), (-2.032, -2.032), (-2.032, 0.0),
    (-2.54, 0.0), (-2.54, 1.27), (-0.508, 1.27), (-0.508, 0.762),
    (-0.508, 1.27), (0.508, 0.762), (0.508, 1.27), (2.54, 1.27),
    (2.54, 0.0), (0.0, 0.0), (0.0, -1.016), (-0.508, -1.016),
    (0.0, -2.032), (-0.508, -2.032), (0.508, -2.032), (0.0, -2.032),
    (0.508, -1.016), (0.0, -1.016), (0.0, 0.0), (2.032, 0.0),
    (2.032, -2.032), (1.524, -2.032), (2.54, -2.032), (2.032, -2.032),
    (2.032, 0.0), (5.08, 0.0), (5.08, -3.81),
];

const DUAL_GATE: [Point; 6] = [
    (0.0, -5.08),
    (0.0, -1.27),
    (-2.54, -1.27),
    (2.54, -1.27),
    (0.0, -1.27),
    (0.0, -5.08),
];

#[rustfmt::skip]
const N_CHANNEL_DUAL_BODY: [Point; 47] = [
    (7.62, 2.54), (7.62, 1.27), (2.54, 1.27), (2.54, 2.54),
    (0.508, 2.54), (0.508, 3.048), (-0.508, 2.54), (-0.508, 3.048),
    (-0.508, 2.54), (-2.54, 2.54), (-2.54, 1.27), (-7.62, 1.27),
    (-7.62, 2.54), (-7.62, 1.27), (-2.032, 1.27), (-2.032, -0.762),
    (-2.54, -0.762), (-1.524, -0.762), (-2.032, -0.762), (-2.032, 1.27),
    (-2.54, 1.27), (-2.54, 2.54), (-0.508, 2.54), (-0.508, 2.032),
    (-0.508, 2.54), (0.508, 2.032), (0.508, 2.54), (2.54, 2.54),
    (2.54, 1.27), (0.0, 1.27), (0.0, 0.254), (-0.508, 0.254),
    (0.0, -0.762), (-0.508, -0.762), (0.508, -0.762), (0.0, -0.762),
    (0.508, 0.254), (0.0, 0.254), (0.0, 1.27), (2.032, 1.27),
    (2.032, -0.762), (1.524, -0.762), (2.54, -0.762), (2.032, -0.762),
    (2.032, 1.27), (7.62, 1.27), (7.62, 2.54),
];

#[rustfmt::skip]
const P_CHANNEL_DUAL_BODY: [Point; 50] = [
    (-7.62, 2.54), (-7.62, 1.27), (-2.54, 1.27), (-2.032, 1.27),
    (-2.032, -0.762), (-2.54, -0.762), (-1.524, -0.762), (-2.032, -0.762),
    (-2.032, 1.27), (-2.54, 1.27), (-2.54, 2.54), (-0.508, 2.54),
    (-0.508, 2.032), (0.508, 2.54), (0.508, 2.032), (0.508, 2.54),
    (2.54, 2.54), (2.54, 1.27), (0.0, 1.27), (-0.508, 0.254),
    (0.0, 0.254), (0.0, -0.762), (-0.508, -0.762), (0.508, -0.762),
    (0.0, -0.762), (0.0, 0.254), (0.508, 0.254), (0.0, 1.27),
    (2.032, 1.27), (2.032, -0.762), (1.524, -0.762), (2.54, -0.762),
    (2.032, -0.762), (2.032, 1.27), (2.54, 1.27), (7.62, 1.27),
    (7.62, 2.54), (7.62, 2.54), (7.62, 1.27), (2.54, 1.27),
    (2.54, 2.54), (0.508, 2.54), (0.508, 3.048), (0.508, 2.54),
    (-0.508, 3.048), (-0.508, 2.54), (-2.54, 2.54), (-2.54, 1.27),
    (-7.62, 1.27), (-7.62, 2.54),
];

/// Vertical shift applied to both halves of a dual MOSFET
const DUAL_OFFSET: f64 = 1.27;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransistorDrawing {
    PChannel,
    /// SOT-26 P-channel parts with four drain pins
    PChannelSot26,
    NChannel,
    /// Three-pin N-channel parts (gate, source, drain)
    NChannelBasic,
    NChannelDual,
    PChannelDual,
}

/// Series whose package needs a pinout other than the type's default
const SERIES_VARIANTS: [(&str, TransistorDrawing); 2] = [
    ("ZXMP6A17E6TA", TransistorDrawing::PChannelSot26),
    ("BSS123WQ-7-F", TransistorDrawing::NChannelBasic),
];

impl TransistorDrawing {
    pub fn from_row(row: &ComponentRow) -> Result<Self, GenError> {
        let value = row.require("Transistor Type")?;
        let by_type = match value {
            "P-Channel" => Self::PChannel,
            "N-Channel" => Self::NChannel,
            "N-Channel Dual" => Self::NChannelDual,
            "P-Channel Dual" => Self::PChannelDual,
            _ => {
                return Err(GenError::UnknownDiscriminator {
                    property: "Transistor Type".to_string(),
                    value: value.to_string(),
                })
            }
        };
        let series = row.get("Series").unwrap_or_default();
        let variant = SERIES_VARIANTS
            .iter()
            .find(|(name, variant)| *name == series && variant.channel() == by_type)
            .map(|(_, variant)| *variant);
        Ok(variant.unwrap_or(by_type))
    }

    /// The generic drawing a package variant specialises
    fn channel(self) -> Self {
        match self {
            Self::PChannelSot26 => Self::PChannel,
            Self::NChannelBasic => Self::NChannel,
            other => other,
        }
    }

    fn junction_dots(dy: f64) -> Vec<Graphic> {
        [-2.54, 2.032, 2.54]
            .into_iter()
            .map(|x| Graphic::Circle {
                center: (x, dy),
                radius: 0.0254,
                stroke: Stroke::default_type(0.381),
                fill: Fill::None,
            })
            .collect()
    }

    fn single(gate_fill: Fill, body: &[Point], pins: Vec<Pin>) -> Vec<Unit> {
        let mut graphics = vec![
            Graphic::polyline(&GATE, 0.0, gate_fill),
            Graphic::polyline(body, 0.0, Fill::Outline),
        ];
        graphics.extend(Self::junction_dots(0.0));
        vec![Unit::with("1_0", graphics, pins)]
    }

    fn dual(gate_fill: Fill, body: &[Point]) -> Vec<Unit> {
        const HALVES: [(&str, [(&str, &str); 3]); 2] = [
            ("1_0", [("1", "S1"), ("2", "G1"), ("6", "D1")]),
            ("2_0", [("3", "S2"), ("4", "G2"), ("5", "D2")]),
        ];
        HALVES
            .iter()
            .map(|(suffix, [source, gate, drain])| {
                let mut graphics = vec![
                    Graphic::polyline(&DUAL_GATE, 0.0, gate_fill).shifted(DUAL_OFFSET),
                    Graphic::polyline(body, 0.0, Fill::Outline).shifted(DUAL_OFFSET),
                ];
                graphics.extend(Self::junction_dots(1.27 + DUAL_OFFSET));
                let pins = vec![
                    Pin::new(10.16, 2.54 + DUAL_OFFSET, 180, source.0).named(source.1),
                    Pin::new(2.54, -5.08 + DUAL_OFFSET, 180, gate.0).named(gate.1),
                    Pin::new(-10.16, 2.54 + DUAL_OFFSET, 0, drain.0).named(drain.1),
                ];
                Unit::with(*suffix, graphics, pins)
            })
            .collect()
    }

    pub fn units(self) -> Vec<Unit> {
        // drain 5 on the left, sources 1-3 on the right, gate 4 below
        let eight_pin = || {
            vec![
                Pin::new(-7.62, 1.27, 0, "5").named("D"),
                Pin::new(7.62, 1.27, 180, "1").named("S"),
                Pin::new(7.62, -1.27, 180, "2").named("S"),
                Pin::new(7.62, -3.81, 180, "3").named("S"),
                Pin::new(2.54, -6.35, 180, "4").named("G"),
            ]
        };

        match self {
            Self::PChannel => Self::single(Fill::Outline, &P_CHANNEL_BODY, eight_pin()),
            Self::PChannelSot26 => Self::single(
                Fill::Outline,
                &P_CHANNEL_SOT26_BODY,
                vec![
                    Pin::new(-7.62, 1.27, 0, "1").named("D"),
                    Pin::new(-7.62, -1.27, 0, "2").named("D"),
                    Pin::new(-7.62, -3.81, 0, "5").named("D"),
                    Pin::new(-7.62, -6.35, 0, "6").named("D"),
                    Pin::new(7.62, 1.27, 180, "4").named("S"),
                    Pin::new(2.54, -6.35, 180, "3").named("G"),
                ],
            ),
            Self::NChannel => Self::single(Fill::None, &N_CHANNEL_BODY, eight_pin()),
            Self::NChannelBasic => Self::single(
                Fill::None,
                &N_CHANNEL_BODY[..N_CHANNEL_BODY.len() - 1],
                vec![
                    Pin::new(2.54, -6.35, 180, "1").named("G"),
                    Pin::new(7.62, 1.27, 180, "2").named("S"),
                    Pin::new(-7.62, 1.27, 0, "3").named("D"),
                ],
            ),
            Self::NChannelDual => Self::dual(Fill::None, &N_CHANNEL_DUAL_BODY),
            Self::PChannelDual => Self::dual(Fill::Outline, &P_CHANNEL_DUAL_BODY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: Vec<(&str, &str)>) -> ComponentRow {
        ComponentRow::from_pairs(pairs)
    }

    #[test]
    fn test_every_diode_type_has_a_drawing() {
        let types = [
            "Schottky",
            "Zener",
            "Rectifier",
            "Unidirectional TVS",
            "Bidirectional TVS",
            "Dual Small Signal Switching Diodes",
            "Small Signal Schottky Diodes",
            "Red LED",
            "Green LED",
        ];
        for diode_type in types {
            let drawing = DiodeDrawing::from_row(&row(vec![("Diode Type", diode_type)])).unwrap();
            let units = drawing.units();
            assert_eq!(units.len(), 1);
            assert_eq!(units[0].suffix, "1_0");
        }
    }

    #[test]
    fn test_unknown_diode_type_is_reported() {
        let err = DiodeDrawing::from_row(&row(vec![("Diode Type", "Varactor")])).unwrap_err();
        assert_eq!(err.to_string(), "No drawing for Diode Type = \"Varactor\"");
    }

    #[test]
    fn test_dual_diodes_have_common_pin() {
        let units = DiodeDrawing::DualSwitching.units();
        let numbers: Vec<&str> = units[0].pins.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
        assert_eq!(units[0].pins[2].angle, 270);
    }

    #[test]
    fn test_led_body_colour() {
        let units = DiodeDrawing::GreenLed.units();
        assert!(matches!(
            units[0].graphics[0],
            Graphic::Polyline { fill: Fill::Color(204, 255, 0), .. }
        ));
    }

    #[test]
    fn test_transistor_series_variants() {
        let pick = |kind: &str, series: &str| {
            TransistorDrawing::from_row(&row(vec![("Transistor Type", kind), ("Series", series)]))
                .unwrap()
        };
        assert_eq!(pick("P-Channel", "SI7309DN-T1-GE3"), TransistorDrawing::PChannel);
        assert_eq!(pick("P-Channel", "ZXMP6A17E6TA"), TransistorDrawing::PChannelSot26);
        assert_eq!(pick("N-Channel", "BSS123WQ-7-F"), TransistorDrawing::NChannelBasic);
        assert_eq!(pick("N-Channel", "PSMN040-100MSEX"), TransistorDrawing::NChannel);
        assert_eq!(pick("P-Channel Dual", "SI7997DP-T1-GE3"), TransistorDrawing::PChannelDual);
        // a variant never overrides a mismatched channel type
        assert_eq!(pick("N-Channel", "ZXMP6A17E6TA"), TransistorDrawing::NChannel);
    }

    #[test]
    fn test_basic_n_channel_pinout() {
        let units = TransistorDrawing::NChannelBasic.units();
        let pins: Vec<(&str, &str)> = units[0]
            .pins
            .iter()
            .map(|p| (p.number.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(pins, vec![("1", "G"), ("2", "S"), ("3", "D")]);
    }

    #[test]
    fn test_dual_mosfet_has_two_units() {
        let units = TransistorDrawing::NChannelDual.units();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].suffix, "1_0");
        assert_eq!(units[1].suffix, "2_0");
        let second: Vec<&str> = units[1].pins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(second, vec!["S2", "G2", "D2"]);
        assert!((units[0].pins[0].y - 3.81).abs() < 1e-9);
        assert!((units[0].pins[1].y - -3.81).abs() < 1e-9);
    }
}
