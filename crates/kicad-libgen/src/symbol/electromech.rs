//! Connector, switch and display drawings
//!
//! These layouts depend on the part's pin and row counts rather than on a
//! fixed shape. Only one- and two-row parts are supported.

use crate::parts::ComponentRow;
use crate::specs::{ConnectorSeries, DipSwitchSeries, DisplaySeries, PinOverride, SwitchSeries};
use crate::{Catalog, GenError};

use super::drawing::{Fill, Graphic, Pin, Point, Stroke, Unit};

const PIN_SPACING: f64 = 2.54;

fn count(row: &ComponentRow, column: &str) -> Result<u32, GenError> {
    let text = row.require(column)?;
    text.trim()
        .parse()
        .map_err(|_| GenError::MalformedValue(text.to_string()))
}

/// `(pin count, row count)` of a row, with the row count checked
pub(crate) fn pin_layout(row: &ComponentRow) -> Result<(u32, u32), GenError> {
    let pins = count(row, "Pin Count")?;
    let rows = count(row, "Number of Rows")?;
    match rows {
        1 | 2 => Ok((pins, rows)),
        other => Err(GenError::UnsupportedRowCount(other)),
    }
}

/// Extra property offset that keeps the text clear of the pin column
pub(crate) fn extra_offset(pins: u32, rows: u32) -> f64 {
    let per_row = f64::from(pins) / f64::from(rows);
    if rows == 1 {
        per_row / 2.0
    } else {
        per_row
    }
}

fn override_pins(pins: &[PinOverride]) -> Vec<Pin> {
    pins.iter()
        .map(|p| Pin::new(p.x, p.y, p.angle, p.number))
        .collect()
}

// =============================================================================
// Connectors
// =============================================================================

#[derive(Debug, Clone)]
pub struct ConnectorDrawing<'a> {
    pub spec: &'a ConnectorSeries,
    pub pin_count: u32,
    pub rows: u32,
}

impl<'a> ConnectorDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.connectors.get(row.require("Series")?)?;
        let (pin_count, rows) = pin_layout(row)?;
        Ok(Self {
            spec,
            pin_count,
            rows,
        })
    }

    fn pin_name(&self, number: &str) -> &'static str {
        self.spec
            .pin_names
            .as_ref()
            .and_then(|names| names.iter().find(|(n, _)| *n == number))
            .map(|(_, name)| *name)
            .unwrap_or("")
    }

    fn pin(&self, x: f64, y: f64, angle: u32, number: String) -> Pin {
        let name = self.pin_name(&number);
        Pin::new(x, y, angle, number)
            .named(name)
            .length(self.spec.pin_length)
    }

    pub fn units(&self) -> Vec<Unit> {
        let half_width = self.spec.rectangle_width / 2.0;
        let pin_x = half_width + self.spec.pin_length;
        let height = (f64::from(self.pin_count) * PIN_SPACING + 2.54).max(7.62);
        let start_y = f64::from(self.pin_count.saturating_sub(1)) * PIN_SPACING / 2.0;
        let keys: Vec<&str> = self
            .spec
            .pin_names
            .as_ref()
            .map(|names| names.iter().map(|(n, _)| *n).collect())
            .unwrap_or_default();

        let mut pins = Vec::new();
        if self.rows == 2 {
            // a full name table is split in half: left side top-down, right
            // side bottom-up
            let per_side = self.pin_count as usize;
            let (left, right) = if keys.len() == per_side * 2 {
                keys.split_at(per_side)
            } else {
                (&[][..], &[][..])
            };
            for index in 0..per_side {
                let y = start_y - index as f64 * PIN_SPACING;
                let pin_num = index * 2 + 1;
                let left_id = left.get(index).map_or(pin_num.to_string(), |k| k.to_string());
                let right_id = right
                    .len()
                    .checked_sub(index + 1)
                    .and_then(|i| right.get(i))
                    .map_or((pin_num + 1).to_string(), |k| k.to_string());
                pins.push(self.pin(-pin_x, y, 0, left_id));
                pins.push(self.pin(pin_x, y, 180, right_id));
            }
        } else {
            let numbers: Vec<String> = if keys.is_empty() {
                (1..=self.pin_count).map(|n| n.to_string()).collect()
            } else {
                keys.iter().map(|k| k.to_string()).collect()
            };
            for (index, number) in numbers.into_iter().enumerate() {
                let y = start_y - index as f64 * PIN_SPACING;
                pins.push(self.pin(-pin_x, y, 0, number));
            }
        }

        let body = Graphic::Rectangle {
            start: (-half_width, height / 2.0),
            end: (half_width, -height / 2.0),
            stroke: Stroke::solid(0.254),
        };
        vec![
            Unit::with("0_0", Vec::new(), pins),
            Unit::with("1_0", vec![body], Vec::new()),
        ]
    }
}

// =============================================================================
// Tactile switches
// =============================================================================

#[derive(Debug, Clone)]
pub struct TactileDrawing<'a> {
    pub spec: &'a SwitchSeries,
    pub pin_count: u32,
    pub rows: u32,
}

impl<'a> TactileDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.tactile_switches.get(row.require("Series")?)?;
        let (pin_count, rows) = pin_layout(row)?;
        Ok(Self {
            spec,
            pin_count,
            rows,
        })
    }

    pub fn units(&self) -> Vec<Unit> {
        // pairs of contacts sit one actuator height apart
        let spacing = 5.08 * 2.0;
        let start_y = f64::from(self.pin_count.saturating_sub(1)) * spacing / 2.0;

        let pins = match &self.spec.override_pins {
            Some(pins) => override_pins(pins),
            None if self.rows == 2 => {
                let mut pins = Vec::new();
                let mut angle = 270;
                for pin_num in (1..self.pin_count * 2).step_by(2) {
                    let y = start_y - f64::from(pin_num - 1) * spacing / 2.0;
                    pins.push(Pin::new(-1.27, y, angle, pin_num.to_string()));
                    pins.push(Pin::new(1.27, y, angle, (pin_num + 1).to_string()));
                    angle = if angle == 270 { 90 } else { 270 };
                }
                pins
            }
            None => (1..=self.pin_count)
                .map(|n| Pin::new(-5.08, start_y - f64::from(n - 1) * spacing, 0, n.to_string()))
                .collect(),
        };

        let graphics = vec![
            Graphic::dot((0.0, 1.27), 0.254, Stroke::solid(0.0)),
            Graphic::dot((0.0, -1.27), 0.254, Stroke::solid(0.0)),
            Graphic::line(&[(1.27, 2.54), (-1.27, 2.54), (0.0, 2.54), (0.0, 1.27), (1.27, -1.27)]),
            Graphic::line(&[(1.27, -2.54), (-1.27, -2.54), (0.0, -2.54), (0.0, -1.27)]),
        ];
        vec![Unit::with("0_0", graphics, pins), Unit::new("1_0")]
    }
}

// =============================================================================
// Slide switches
// =============================================================================

#[derive(Debug, Clone)]
pub struct SlideDrawing<'a> {
    pub spec: &'a SwitchSeries,
    pub pin_count: u32,
    pub rows: u32,
}

impl<'a> SlideDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.slide_switches.get(row.require("Series")?)?;
        let (pin_count, rows) = pin_layout(row)?;
        Ok(Self {
            spec,
            pin_count,
            rows,
        })
    }

    pub fn units(&self) -> Vec<Unit> {
        let start_y = f64::from(self.pin_count.saturating_sub(1)) * PIN_SPACING / 2.0;
        let pins = match &self.spec.override_pins {
            Some(pins) => override_pins(pins),
            None => (1..=self.pin_count)
                .map(|n| Pin::new(-5.08, start_y - f64::from(n - 1) * PIN_SPACING, 0, n.to_string()))
                .collect(),
        };

        // lever from the common contact towards the upper throw
        let mut graphics = vec![Graphic::Polyline {
            points: vec![(-2.54, 0.0), (0.0, 0.0), (2.032, 2.286)],
            stroke: Stroke::solid(0.2032),
            fill: Fill::None,
        }];
        graphics.extend([2.54, -2.54].map(|y| Graphic::Circle {
            center: (2.286, y),
            radius: 0.254,
            stroke: Stroke::solid(0.2032),
            fill: Fill::None,
        }));
        vec![Unit::with("0_0", graphics, pins), Unit::new("1_0")]
    }
}

// =============================================================================
// Seven-segment displays
// =============================================================================

/// Segment outlines `a` to `g`, each closed back to its first point
#[rustfmt::skip]
const SEGMENTS: [[Point; 6]; 7] = [
    [(-3.9624, 12.446), (-1.8034, 14.351), (5.8166, 14.351), (7.4676, 12.446), (5.2832, 10.541), (-2.3368, 10.541)],
    [(6.2992, 0.508), (8.4582, 2.413), (9.5504, 10.033), (7.8994, 11.938), (5.7404, 10.033), (4.6482, 2.413)],
    [(4.5466, -11.938), (6.7056, -10.033), (7.7978, -2.413), (6.1468, -0.508), (3.9878, -2.413), (2.8956, -10.033)],
    [(-7.4676, -12.446), (-5.2832, -10.541), (2.3368, -10.541), (3.9624, -12.446), (1.8034, -14.351), (-5.8166, -14.351)],
    [(-7.8994, -11.938), (-5.7404, -10.033), (-4.6482, -2.413), (-6.2992, -0.508), (-8.4582, -2.413), (-9.5504, -10.033)],
    [(-6.1468, 0.508), (-3.9878, 2.413), (-2.8956, 10.033), (-4.5466, 11.938), (-6.7056, 10.033), (-7.7978, 2.413)],
    [(-5.715, 0.0), (-3.5306, 1.905), (4.0894, 1.905), (5.715, 0.0), (3.5306, -1.905), (-4.0894, -1.905)],
];

const SEGMENT_LABELS: [(&str, Point); 7] = [
    ("a", (1.7526, 12.446)),
    ("b", (7.0866, 6.223)),
    ("c", (5.3594, -6.223)),
    ("d", (-1.7526, -12.446)),
    ("e", (-7.0866, -6.223)),
    ("f", (-5.3594, 6.223)),
    ("g", (0.0, 0.0)),
];

#[derive(Debug, Clone)]
pub struct DisplayDrawing<'a> {
    pub spec: &'a DisplaySeries,
}

impl<'a> DisplayDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.displays.get(row.require("Series")?)?;
        Ok(Self { spec })
    }

    pub fn units(&self) -> Vec<Unit> {
        let pins = self
            .spec
            .pins
            .iter()
            .map(|p| Pin::new(p.x, p.y, p.angle, p.number).named(self.spec.pin_name(p.number)))
            .collect();

        let half_w = self.spec.rectangle_width / 2.0;
        let half_h = self.spec.rectangle_height / 2.0;
        let mut graphics = vec![Graphic::Rectangle {
            start: (-half_w, half_h),
            end: (half_w, -half_h),
            stroke: Stroke::solid(0.254),
        }];
        for outline in &SEGMENTS {
            let mut points = outline.to_vec();
            points.push(outline[0]);
            graphics.push(Graphic::line(&points));
        }
        graphics.push(Graphic::Circle {
            center: (8.128, -12.446),
            radius: 1.651,
            stroke: Stroke::default_type(0.0),
            fill: Fill::None,
        });
        graphics.extend(SEGMENT_LABELS.iter().map(|&(text, at)| Graphic::Text {
            text,
            at,
            size: 1.905,
        }));
        vec![Unit::with("0_0", Vec::new(), pins), Unit::with("1_0", graphics, Vec::new())]
    }
}

// =============================================================================
// DIP switches
// =============================================================================

#[derive(Debug, Clone)]
pub struct DipDrawing<'a> {
    pub spec: &'a DipSwitchSeries,
    /// Number of switches
    pub switch_count: u32,
    pub rows: u32,
}

impl<'a> DipDrawing<'a> {
    pub fn from_row(catalog: &'a Catalog, row: &ComponentRow) -> Result<Self, GenError> {
        let spec = catalog.dip_switches.get(row.require("Series")?)?;
        let (switch_count, rows) = pin_layout(row)?;
        Ok(Self {
            spec,
            switch_count,
            rows,
        })
    }

    fn pins(&self, start_y: f64) -> Vec<Pin> {
        if let Some(pins) = &self.spec.override_pins {
            return override_pins(pins);
        }
        let per_side = self.switch_count;
        let total = per_side * 2;
        let y = |i: u32| start_y - f64::from(i) * PIN_SPACING;
        let anticlockwise = self.spec.anticlockwise_numbering;

        if self.rows == 2 {
            let left = (0..per_side).map(|i| {
                let number = if anticlockwise { i * 2 + 1 } else { i + 1 };
                Pin::new(-5.08, y(i), 0, number.to_string())
            });
            let right = (0..per_side).map(|i| {
                let number = if anticlockwise { i * 2 + 2 } else { total - i };
                Pin::new(5.08, y(i), 180, number.to_string())
            });
            left.chain(right).collect()
        } else {
            (0..per_side)
                .map(|i| {
                    let number = if anticlockwise { per_side - i } else { i + 1 };
                    Pin::new(-5.08, y(i), 0, number.to_string())
                })
                .collect()
        }
    }

    pub fn units(&self) -> Vec<Unit> {
        let start_y = f64::from(self.switch_count.saturating_sub(1)) * PIN_SPACING / 2.0;
        let mut graphics = Vec::new();
        for index in 0..self.switch_count {
            let y = start_y - f64::from(index) * PIN_SPACING;
            graphics.push(Graphic::line(&[(-2.54, y), (-1.27, y), (1.27, y + 1.27)]));
            graphics.push(Graphic::dot((-1.27, y), 0.254, Stroke::solid(0.0)));
            graphics.push(Graphic::dot((1.27, y), 0.254, Stroke::solid(0.0)));
            graphics.push(Graphic::line(&[(2.54, y), (1.27, y)]));
        }
        vec![
            Unit::with("0_0", graphics, self.pins(start_y)),
            Unit::new("1_0"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(unit: &Unit) -> Vec<&str> {
        unit.pins.iter().map(|p| p.number.as_str()).collect()
    }

    #[test]
    fn test_extra_offset() {
        assert_eq!(extra_offset(4, 1), 2.0);
        assert_eq!(extra_offset(5, 1), 2.5);
        assert_eq!(extra_offset(2, 2), 1.0);
        assert_eq!(extra_offset(12, 2), 6.0);
    }

    #[test]
    fn test_row_count_is_checked() {
        let row = ComponentRow::from_pairs(vec![("Pin Count", "6"), ("Number of Rows", "3")]);
        assert!(matches!(pin_layout(&row), Err(GenError::UnsupportedRowCount(3))));

        let row = ComponentRow::from_pairs(vec![("Pin Count", "six"), ("Number of Rows", "1")]);
        assert!(matches!(pin_layout(&row), Err(GenError::MalformedValue(_))));
    }

    #[test]
    fn test_single_row_connector() {
        let catalog = Catalog::load();
        let spec = catalog.connectors.get("TB004-508").unwrap();
        let drawing = ConnectorDrawing {
            spec,
            pin_count: 3,
            rows: 1,
        };
        let units = drawing.units();
        assert_eq!(numbers(&units[0]), vec!["1", "2", "3"]);
        let ys: Vec<f64> = units[0].pins.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![2.54, 0.0, -2.54]);
        assert!(units[0].pins.iter().all(|p| p.x == -5.08 && p.angle == 0));
        match &units[1].graphics[0] {
            Graphic::Rectangle { start, end, .. } => {
                assert_eq!(start.0, -2.54);
                assert!((start.1 - 5.08).abs() < 1e-9);
                assert!((end.1 + 5.08).abs() < 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_two_row_connector_interleaves() {
        let catalog = Catalog::load();
        let spec = catalog.connectors.get("TB004-508").unwrap();
        let drawing = ConnectorDrawing {
            spec,
            pin_count: 2,
            rows: 2,
        };
        let units = drawing.units();
        assert_eq!(numbers(&units[0]), vec!["1", "2", "3", "4"]);
        assert_eq!(units[0].pins[1].x, 5.08);
        assert_eq!(units[0].pins[1].angle, 180);
    }

    #[test]
    fn test_connector_pin_name_table() {
        let catalog = Catalog::load();
        let mut spec = catalog.connectors.get("TB004-508").unwrap().clone();
        spec.pin_names = Some(vec![("A1", "VBUS"), ("A2", "CC"), ("B1", "GND"), ("B2", "SBU")]);
        spec.pin_length = 5.08;
        let drawing = ConnectorDrawing {
            spec: &spec,
            pin_count: 2,
            rows: 2,
        };
        let units = drawing.units();
        let pins: Vec<(&str, &str)> = units[0]
            .pins
            .iter()
            .map(|p| (p.number.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(pins, vec![("A1", "VBUS"), ("B2", "SBU"), ("A2", "CC"), ("B1", "GND")]);
        assert!((units[0].pins[0].x + 7.62).abs() < 1e-9);
        assert_eq!(units[0].pins[0].length, 5.08);
    }

    #[test]
    fn test_tactile_two_rows_alternate_direction() {
        let catalog = Catalog::load();
        let spec = catalog.tactile_switches.get("TS21-34-035-BK-260-SMT-TR").unwrap();
        let drawing = TactileDrawing {
            spec,
            pin_count: 2,
            rows: 2,
        };
        let units = drawing.units();
        assert_eq!(units.len(), 2);
        assert!(units[1].graphics.is_empty() && units[1].pins.is_empty());
        let pins: Vec<(f64, f64, u32)> = units[0].pins.iter().map(|p| (p.x, p.y, p.angle)).collect();
        assert_eq!(
            pins,
            vec![(-1.27, 5.08, 270), (1.27, 5.08, 270), (-1.27, -5.08, 90), (1.27, -5.08, 90)]
        );
    }

    #[test]
    fn test_override_pins_replace_layout() {
        let catalog = Catalog::load();
        let mut spec = catalog.tactile_switches.get("TS29-1212-1-R-300-D").unwrap().clone();
        spec.override_pins = Some(vec![
            PinOverride {
                number: "1",
                x: -2.54,
                y: 5.08,
                angle: 270,
            },
            PinOverride {
                number: "2",
                x: -2.54,
                y: -5.08,
                angle: 90,
            },
        ]);
        let drawing = TactileDrawing {
            spec: &spec,
            pin_count: 2,
            rows: 2,
        };
        assert_eq!(numbers(&drawing.units()[0]), vec!["1", "2"]);
    }

    #[test]
    fn test_dip_numbering() {
        let catalog = Catalog::load();
        let spec = catalog.dip_switches.get("416131160803").unwrap();
        let drawing = DipDrawing {
            spec,
            switch_count: 3,
            rows: 2,
        };
        let units = drawing.units();
        assert_eq!(numbers(&units[0]), vec!["1", "2", "3", "6", "5", "4"]);
        // one lever, two contacts and a lead per switch
        assert_eq!(units[0].graphics.len(), 12);

        let mut alternating = spec.clone();
        alternating.anticlockwise_numbering = true;
        let drawing = DipDrawing {
            spec: &alternating,
            switch_count: 3,
            rows: 2,
        };
        assert_eq!(numbers(&drawing.units()[0]), vec!["1", "3", "5", "2", "4", "6"]);

        let drawing = DipDrawing {
            spec: &alternating,
            switch_count: 3,
            rows: 1,
        };
        assert_eq!(numbers(&drawing.units()[0]), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_slide_switch_pins() {
        let catalog = Catalog::load();
        let drawing = SlideDrawing {
            spec: catalog.slide_switches.get("8SS1012-Z").unwrap(),
            pin_count: 3,
            rows: 1,
        };
        let units = drawing.units();
        assert_eq!(numbers(&units[0]), vec!["1", "2", "3"]);
        assert_eq!(units[0].pins[1].x, -5.08);
        // lever and two throw contacts
        assert_eq!(units[0].graphics.len(), 3);
        assert!(units[1].graphics.is_empty());
    }

    #[test]
    fn test_display_pins_are_named() {
        let catalog = Catalog::load();
        let drawing = DisplayDrawing {
            spec: catalog.displays.get("FYS-15011BUHR-21").unwrap(),
        };
        let units = drawing.units();
        assert_eq!(units[0].pins.len(), 10);
        let first = &units[0].pins[0];
        assert_eq!((first.number.as_str(), first.name.as_str()), ("1", "CA"));
        assert_eq!(first.angle, 270);
        // body, seven segments, decimal point and seven labels
        assert_eq!(units[1].graphics.len(), 16);
        match &units[1].graphics[1] {
            Graphic::Polyline { points, .. } => assert_eq!(points.first(), points.last()),
            other => panic!("unexpected {other:?}"),
        }
    }
}
