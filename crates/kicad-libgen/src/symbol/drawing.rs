//! Graphic items and pins of a symbol unit
//!
//! Drawings are built as data first and serialised by [`emit_unit`], so the
//! family modules only describe geometry.

use std::fmt::Write;

use crate::units::num;

pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeType {
    Default,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub kind: StrokeType,
}

impl Stroke {
    pub const fn default_type(width: f64) -> Self {
        Self {
            width,
            kind: StrokeType::Default,
        }
    }

    pub const fn solid(width: f64) -> Self {
        Self {
            width,
            kind: StrokeType::Solid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    None,
    Outline,
    /// Opaque RGB body colour, used by the LED symbols
    Color(u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Graphic {
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
        fill: Fill,
    },
    Circle {
        center: Point,
        radius: f64,
        stroke: Stroke,
        fill: Fill,
    },
    Arc {
        start: Point,
        mid: Point,
        end: Point,
        stroke: Stroke,
    },
    Rectangle {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    /// Free text label, e.g. the segment letters of a display
    Text {
        text: &'static str,
        at: Point,
        size: f64,
    },
}

impl Graphic {
    /// Thin polyline without fill, the most common item
    pub fn line(points: &[Point]) -> Self {
        Graphic::Polyline {
            points: points.to_vec(),
            stroke: Stroke::default_type(0.0),
            fill: Fill::None,
        }
    }

    pub fn polyline(points: &[Point], width: f64, fill: Fill) -> Self {
        Graphic::Polyline {
            points: points.to_vec(),
            stroke: Stroke::default_type(width),
            fill,
        }
    }

    /// Small filled dot marking a contact or a junction
    pub fn dot(center: Point, radius: f64, stroke: Stroke) -> Self {
        Graphic::Circle {
            center,
            radius,
            stroke,
            fill: Fill::Outline,
        }
    }

    /// The same item moved by `dy`
    pub fn shifted(&self, dy: f64) -> Self {
        let mv = |(x, y): Point| (x, y + dy);
        match self {
            Graphic::Polyline {
                points,
                stroke,
                fill,
            } => Graphic::Polyline {
                points: points.iter().copied().map(mv).collect(),
                stroke: *stroke,
                fill: *fill,
            },
            Graphic::Circle {
                center,
                radius,
                stroke,
                fill,
            } => Graphic::Circle {
                center: mv(*center),
                radius: *radius,
                stroke: *stroke,
                fill: *fill,
            },
            Graphic::Arc {
                start,
                mid,
                end,
                stroke,
            } => Graphic::Arc {
                start: mv(*start),
                mid: mv(*mid),
                end: mv(*end),
                stroke: *stroke,
            },
            Graphic::Rectangle { start, end, stroke } => Graphic::Rectangle {
                start: mv(*start),
                end: mv(*end),
                stroke: *stroke,
            },
            Graphic::Text { text, at, size } => Graphic::Text {
                text: *text,
                at: mv(*at),
                size: *size,
            },
        }
    }
}

/// Electrical type written in front of the pin graphic style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKind {
    Unspecified,
    NoConnect,
}

impl PinKind {
    fn as_str(self) -> &'static str {
        match self {
            PinKind::Unspecified => "unspecified",
            PinKind::NoConnect => "no_connect",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub x: f64,
    pub y: f64,
    pub angle: u32,
    pub number: String,
    pub name: String,
    pub length: f64,
    pub kind: PinKind,
    pub hidden: bool,
}

impl Pin {
    pub fn new(x: f64, y: f64, angle: u32, number: impl Into<String>) -> Self {
        Self {
            x,
            y,
            angle,
            number: number.into(),
            name: String::new(),
            length: 2.54,
            kind: PinKind::Unspecified,
            hidden: false,
        }
    }

    /// Unconnected winding tap, drawn but hidden
    pub fn no_connect(mut self) -> Self {
        self.kind = PinKind::NoConnect;
        self.hidden = true;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }
}

/// One `(symbol "<name>_<suffix>" ...)` sub-block.
///
/// The suffix is `<unit>_<body style>`: `0_1` for passives, `1_0` for
/// diodes and transistors, `2_0` for the second half of a dual part.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub suffix: &'static str,
    pub graphics: Vec<Graphic>,
    pub pins: Vec<Pin>,
}

impl Unit {
    pub fn new(suffix: &'static str) -> Self {
        Self {
            suffix,
            graphics: Vec::new(),
            pins: Vec::new(),
        }
    }

    pub fn with(suffix: &'static str, graphics: Vec<Graphic>, pins: Vec<Pin>) -> Self {
        Self {
            suffix,
            graphics,
            pins,
        }
    }
}

// =============================================================================
// Serialisation
// =============================================================================

fn xy((x, y): Point) -> String {
    format!("{} {}", num(x), num(y))
}

fn stroke_text(stroke: &Stroke) -> String {
    let kind = match stroke.kind {
        StrokeType::Default => "default",
        StrokeType::Solid => "solid",
    };
    format!("(stroke (width {}) (type {}))", num(stroke.width), kind)
}

fn fill_text(fill: &Fill) -> String {
    match fill {
        Fill::None => "(fill (type none))".to_string(),
        Fill::Outline => "(fill (type outline))".to_string(),
        Fill::Color(r, g, b) => format!("(fill (type color) (color {r} {g} {b} 1))"),
    }
}

fn emit_graphic(out: &mut String, graphic: &Graphic) {
    const IND: &str = "            ";
    match graphic {
        Graphic::Polyline {
            points,
            stroke,
            fill,
        } => {
            writeln!(out, "{IND}(polyline").unwrap();
            writeln!(out, "{IND}    (pts").unwrap();
            for chunk in points.chunks(4) {
                let line: Vec<String> = chunk.iter().map(|p| format!("(xy {})", xy(*p))).collect();
                writeln!(out, "{IND}        {}", line.join(" ")).unwrap();
            }
            writeln!(out, "{IND}    )").unwrap();
            writeln!(out, "{IND}    {}", stroke_text(stroke)).unwrap();
            writeln!(out, "{IND}    {}", fill_text(fill)).unwrap();
            writeln!(out, "{IND})").unwrap();
        }
        Graphic::Circle {
            center,
            radius,
            stroke,
            fill,
        } => {
            writeln!(out, "{IND}(circle").unwrap();
            writeln!(out, "{IND}    (center {})", xy(*center)).unwrap();
            writeln!(out, "{IND}    (radius {})", num(*radius)).unwrap();
            writeln!(out, "{IND}    {}", stroke_text(stroke)).unwrap();
            writeln!(out, "{IND}    {}", fill_text(fill)).unwrap();
            writeln!(out, "{IND})").unwrap();
        }
        Graphic::Arc {
            start,
            mid,
            end,
            stroke,
        } => {
            writeln!(out, "{IND}(arc").unwrap();
            writeln!(out, "{IND}    (start {})", xy(*start)).unwrap();
            writeln!(out, "{IND}    (mid {})", xy(*mid)).unwrap();
            writeln!(out, "{IND}    (end {})", xy(*end)).unwrap();
            writeln!(out, "{IND}    {}", stroke_text(stroke)).unwrap();
            writeln!(out, "{IND}    {}", fill_text(&Fill::None)).unwrap();
            writeln!(out, "{IND})").unwrap();
        }
        Graphic::Rectangle { start, end, stroke } => {
            writeln!(out, "{IND}(rectangle").unwrap();
            writeln!(out, "{IND}    (start {})", xy(*start)).unwrap();
            writeln!(out, "{IND}    (end {})", xy(*end)).unwrap();
            writeln!(out, "{IND}    {}", stroke_text(stroke)).unwrap();
            writeln!(out, "{IND}    {}", fill_text(&Fill::None)).unwrap();
            writeln!(out, "{IND})").unwrap();
        }
        Graphic::Text { text, at, size } => {
            writeln!(out, "{IND}(text \"{text}\"").unwrap();
            writeln!(out, "{IND}    (at {} 0)", xy(*at)).unwrap();
            writeln!(out, "{IND}    (effects (font (size {} {})))", num(*size), num(*size)).unwrap();
            writeln!(out, "{IND})").unwrap();
        }
    }
}

pub fn emit_pin(out: &mut String, pin: &Pin) {
    const IND: &str = "            ";
    const FONT: &str = "(effects (font (size 1.27 1.27)))";
    writeln!(out, "{IND}(pin {} line", pin.kind.as_str()).unwrap();
    writeln!(out, "{IND}    (at {} {})", xy((pin.x, pin.y)), pin.angle).unwrap();
    writeln!(out, "{IND}    (length {})", num(pin.length)).unwrap();
    writeln!(out, "{IND}    (name \"{}\" {FONT})", pin.name).unwrap();
    writeln!(out, "{IND}    (number \"{}\" {FONT})", pin.number).unwrap();
    if pin.hidden {
        writeln!(out, "{IND}    (hide yes)").unwrap();
    }
    writeln!(out, "{IND})").unwrap();
}

pub fn emit_unit(out: &mut String, symbol_name: &str, unit: &Unit) {
    writeln!(out, "        (symbol \"{}_{}\"", symbol_name, unit.suffix).unwrap();
    for graphic in &unit.graphics {
        emit_graphic(out, graphic);
    }
    for pin in &unit.pins {
        emit_pin(out, pin);
    }
    writeln!(out, "        )").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_wraps_four_points_per_line() {
        let mut out = String::new();
        let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        emit_graphic(&mut out, &Graphic::polyline(&points, 0.2032, Fill::Color(255, 0, 0)));
        assert!(out.contains("(xy 0 0) (xy 1 0) (xy 1 1) (xy 0 1)\n"));
        assert!(out.contains("                (xy 0 0)\n"));
        assert!(out.contains("(stroke (width 0.2032) (type default))"));
        assert!(out.contains("(fill (type color) (color 255 0 0 1))"));
    }

    #[test]
    fn test_unit_block() {
        let unit = Unit::with(
            "1_0",
            vec![Graphic::dot((0.0, 1.27), 0.254, Stroke::solid(0.0))],
            vec![Pin::new(-7.62, 1.27, 0, "5").named("D")],
        );
        let mut out = String::new();
        emit_unit(&mut out, "Q_TEST", &unit);
        assert!(out.starts_with("        (symbol \"Q_TEST_1_0\"\n"));
        assert!(out.contains("(stroke (width 0) (type solid))"));
        assert!(out.contains("(at -7.62 1.27 0)"));
        assert!(out.contains("(length 2.54)"));
        assert!(out.contains("(name \"D\" (effects"));
        assert!(out.trim_end().ends_with(')'));
    }

    #[test]
    fn test_no_connect_pin_is_hidden() {
        let mut out = String::new();
        emit_pin(&mut out, &Pin::new(-7.62, 2.54, 0, "5").length(2.54).no_connect());
        assert!(out.contains("(pin no_connect line\n"));
        assert!(out.contains("    (hide yes)\n"));

        let mut out = String::new();
        emit_pin(&mut out, &Pin::new(-7.62, 5.08, 0, "4"));
        assert!(out.contains("(pin unspecified line\n"));
        assert!(!out.contains("hide"));
    }

    #[test]
    fn test_text_item() {
        let mut out = String::new();
        emit_graphic(&mut out, &Graphic::Text { text: "g", at: (0.0, 0.0), size: 1.905 });
        assert_eq!(
            out,
            "            (text \"g\"\n                (at 0 0 0)\n                (effects (font (size 1.905 1.905)))\n            )\n"
        );
    }

    #[test]
    fn test_shifted_moves_only_y() {
        let line = Graphic::line(&[(1.0, -5.08), (2.0, 0.0)]).shifted(1.27);
        match line {
            Graphic::Polyline { points, .. } => {
                assert_eq!(points[0].0, 1.0);
                assert!((points[0].1 - -3.81).abs() < 1e-9);
                assert!((points[1].1 - 1.27).abs() < 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
