//! Building blocks of a `.kicad_mod` footprint
//!
//! Every emitter appends one s-expression to `out`. Graphic items and pads
//! get a fresh v4 UUID.

use std::fmt::Write;

use uuid::Uuid;

use crate::specs::connector::{
    BodyExtent, MountingHole, MountingPad, NpthRow, OvalHole, ThroughHolePad,
};
use crate::units::{fixed3, num};
use crate::GenError;

const TEXT_EFFECTS: &str = "(effects (font (size 0.762 0.762) (thickness 0.1524)) (justify left))";

fn uuid() -> Uuid {
    Uuid::new_v4()
}

// =============================================================================
// Header, text and 3D model
// =============================================================================

pub fn emit_header(out: &mut String, name: &str) {
    writeln!(out, "(footprint \"{}\"", name).unwrap();
    writeln!(out, "    (version 20240108)").unwrap();
    writeln!(out, "    (generator \"pcbnew\")").unwrap();
    writeln!(out, "    (generator_version \"8.0\")").unwrap();
    writeln!(out, "    (layer \"F.Cu\")").unwrap();
}

/// Reference, value, hidden footprint field and the `${REFERENCE}` fab text.
///
/// The value sits mirrored below the reference unless `value_y` is given.
pub fn emit_properties(out: &mut String, ref_y: f64, value: &str, value_y: Option<f64>) {
    let value_y = value_y.unwrap_or(-ref_y);
    writeln!(out, "    (property \"Reference\" \"REF**\"").unwrap();
    writeln!(out, "        (at 0 {} 0)", num(ref_y)).unwrap();
    writeln!(out, "        (unlocked yes)").unwrap();
    writeln!(out, "        (layer \"F.SilkS\")").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "        {}", TEXT_EFFECTS).unwrap();
    writeln!(out, "    )").unwrap();
    writeln!(out, "    (property \"Value\" \"{}\"", value).unwrap();
    writeln!(out, "        (at 0 {} 0)", num(value_y)).unwrap();
    writeln!(out, "        (unlocked yes)").unwrap();
    writeln!(out, "        (layer \"F.Fab\")").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "        {}", TEXT_EFFECTS).unwrap();
    writeln!(out, "    )").unwrap();
    writeln!(out, "    (property \"Footprint\" \"\"").unwrap();
    writeln!(out, "        (at 0 0 0)").unwrap();
    writeln!(out, "        (layer \"F.Fab\")").unwrap();
    writeln!(out, "        (hide yes)").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "        {}", TEXT_EFFECTS).unwrap();
    writeln!(out, "    )").unwrap();
    writeln!(out, "    (fp_text user \"${{REFERENCE}}\"").unwrap();
    writeln!(out, "        (at 0 {} 0)", num(value_y + 1.27)).unwrap();
    writeln!(out, "        (unlocked yes)").unwrap();
    writeln!(out, "        (layer \"F.Fab\")").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "        {}", TEXT_EFFECTS).unwrap();
    writeln!(out, "    )").unwrap();
}

/// `(model ...)` reference to `<dir>/<file>.step`
pub fn emit_model(out: &mut String, dir: &str, file: &str, hide: bool) {
    writeln!(out, "    (model \"{}/{}.step\"", dir, file).unwrap();
    if hide {
        writeln!(out, "        (hide yes)").unwrap();
    }
    writeln!(out, "        (offset (xyz 0 0 0))").unwrap();
    writeln!(out, "        (scale (xyz 1 1 1))").unwrap();
    writeln!(out, "        (rotate (xyz 0 0 0))").unwrap();
    writeln!(out, "    )").unwrap();
}

pub fn emit_footer(out: &mut String) {
    writeln!(out, ")").unwrap();
}

// =============================================================================
// Outlines
// =============================================================================

fn emit_rect(
    out: &mut String,
    start: (f64, f64),
    end: (f64, f64),
    stroke: f64,
    stroke_type: &str,
    layer: &str,
) {
    writeln!(out, "    (fp_rect").unwrap();
    writeln!(out, "        (start {} {})", num(start.0), num(start.1)).unwrap();
    writeln!(out, "        (end {} {})", num(end.0), num(end.1)).unwrap();
    writeln!(out, "        (stroke (width {}) (type {}))", num(stroke), stroke_type).unwrap();
    writeln!(out, "        (fill none)").unwrap();
    writeln!(out, "        (layer \"{}\")", layer).unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

/// Courtyard centred on the origin
pub fn emit_courtyard(out: &mut String, width: f64, height: f64) {
    let (hw, hh) = (width / 2.0, height / 2.0);
    emit_rect(out, (-hw, -hh), (hw, hh), 0.00635, "solid", "F.CrtYd");
}

/// Fabrication outline centred on the origin
pub fn emit_fab_rect(out: &mut String, width: f64, height: f64) {
    let (hw, hh) = (width / 2.0, height / 2.0);
    emit_rect(out, (-hw, -hh), (hw, hh), 0.0254, "default", "F.Fab");
}

/// Rectangle spanning an asymmetric body extent on `layer`
pub fn emit_extent_rect(out: &mut String, body: &BodyExtent, layer: &str) {
    let stroke = if layer == "F.CrtYd" { 0.00635 } else { 0.1524 };
    emit_rect(
        out,
        (-body.width_left, body.height_bottom),
        (body.width_right, -body.height_top),
        stroke,
        "solid",
        layer,
    );
}

/// Outline with the top-left corner cut, marking the positive terminal
pub fn emit_chamfered(out: &mut String, width: f64, height: f64, layer: &str, stroke: f64) {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let points = [
        (-width / 4.0, -hh),
        (-hw, -height / 5.0),
        (-hw, height / 5.0),
        (-width / 4.0, hh),
        (hw, hh),
        (hw, -hh),
    ];
    writeln!(out, "    (fp_poly").unwrap();
    writeln!(out, "        (pts").unwrap();
    for (x, y) in points {
        writeln!(out, "            (xy {} {})", num(x), num(y)).unwrap();
    }
    writeln!(out, "        )").unwrap();
    writeln!(out, "        (stroke (width {}) (type solid))", num(stroke)).unwrap();
    writeln!(out, "        (fill none)").unwrap();
    writeln!(out, "        (layer \"{}\")", layer).unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

/// Silkscreen strokes above and below the body, between the pads
pub fn emit_silkscreen_lines(out: &mut String, height: f64, pad_center_x: f64, pad_width: f64) {
    let half_height = height / 2.0;
    let x = pad_center_x - pad_width / 2.0;
    for y in [-half_height, half_height] {
        writeln!(out, "    (fp_line").unwrap();
        writeln!(out, "        (start {} {})", num(x), num(y)).unwrap();
        writeln!(out, "        (end {} {})", num(-x), num(y)).unwrap();
        writeln!(out, "        (stroke (width 0.1524) (type solid))").unwrap();
        writeln!(out, "        (layer \"F.SilkS\")").unwrap();
        writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
        writeln!(out, "    )").unwrap();
    }
}

/// Diode glyph on the fab layer, cathode bar on the left
pub fn emit_fab_diode(
    out: &mut String,
    width: f64,
    height: f64,
    anode_center_x: f64,
    cathode_center_x: f64,
) {
    let hh = height / 2.0;
    let points = [
        (width, 0.0),
        (anode_center_x, 0.0),
        (width, 0.0),
        (width, hh),
        (0.0, 0.0),
        (0.0, hh),
        (0.0, 0.0),
        (-cathode_center_x, 0.0),
        (0.0, 0.0),
        (0.0, -hh),
        (0.0, 0.0),
        (width, -hh),
    ];
    writeln!(out, "    (fp_poly").unwrap();
    writeln!(out, "        (pts").unwrap();
    for (x, y) in points {
        writeln!(out, "            (xy {} {})", num(x), num(y)).unwrap();
    }
    writeln!(out, "        )").unwrap();
    writeln!(out, "        (stroke (width 0.1) (type solid))").unwrap();
    writeln!(out, "        (fill solid)").unwrap();
    writeln!(out, "        (layer \"F.Fab\")").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

/// Filled dot next to pin 1
pub fn emit_pin_1_indicator(out: &mut String, x: f64, y: f64, layer: &str) {
    let radius = 0.3;
    writeln!(out, "    (fp_circle").unwrap();
    writeln!(out, "        (center {} {})", num(x), num(y)).unwrap();
    writeln!(out, "        (end {} {})", num(x - radius), num(y)).unwrap();
    writeln!(out, "        (stroke (width 0.1524) (type solid))").unwrap();
    writeln!(out, "        (fill solid)").unwrap();
    writeln!(out, "        (layer \"{}\")", layer).unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

// =============================================================================
// Pads
// =============================================================================

/// One SMD pad; positions are printed as given
#[allow(clippy::too_many_arguments)]
fn emit_smd_pad(
    out: &mut String,
    number: &str,
    x: &str,
    y: &str,
    width: f64,
    height: f64,
    layers: &str,
    roundrect_ratio: f64,
) {
    writeln!(out, "    (pad \"{}\" smd roundrect", number).unwrap();
    writeln!(out, "        (at {} {})", x, y).unwrap();
    writeln!(out, "        (size {} {})", num(width), num(height)).unwrap();
    writeln!(out, "        (layers {})", layers).unwrap();
    writeln!(out, "        (roundrect_rratio {})", num(roundrect_ratio)).unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

const SMD_LAYERS: &str = "\"F.Cu\" \"F.Paste\" \"F.Mask\"";
const SMD_LAYERS_NO_MASK: &str = "\"F.Cu\" \"F.Paste\"";

/// Gull-wing pad positions: down the left side, then up the right side
pub fn side_pad_positions(center_x: f64, pitch_y: f64, pins_per_side: usize) -> Vec<(f64, f64)> {
    let total_height = pitch_y * (pins_per_side as f64 - 1.0);
    let left = (0..pins_per_side).map(|i| (-center_x, -total_height / 2.0 + i as f64 * pitch_y));
    let right = (0..pins_per_side).map(|i| (center_x, total_height / 2.0 - i as f64 * pitch_y));
    left.chain(right).collect()
}

/// SMD pads on two opposite sides, numbered 1..n unless `numbers` is given
pub fn emit_side_pads(
    out: &mut String,
    width: f64,
    height: f64,
    center_x: f64,
    pitch_y: f64,
    pins_per_side: usize,
    numbers: Option<&[String]>,
) -> Result<(), GenError> {
    let positions = side_pad_positions(center_x, pitch_y, pins_per_side);
    let numbers: Vec<String> = match numbers {
        Some(list) => list.to_vec(),
        None => (1..=positions.len()).map(|n| n.to_string()).collect(),
    };
    if numbers.len() != positions.len() {
        return Err(GenError::PadCountMismatch {
            expected: positions.len(),
            got: numbers.len(),
        });
    }
    for ((x, y), number) in positions.into_iter().zip(&numbers) {
        emit_smd_pad(out, number, &num(x), &num(y), width, height, SMD_LAYERS, 0.25);
    }
    Ok(())
}

/// Two-terminal pads: cathode "1" on the left, anode "2" on the right
pub fn emit_terminal_pads(
    out: &mut String,
    cathode: (f64, f64, f64),
    anode: (f64, f64, f64),
    roundrect_ratio: f64,
) {
    let (cw, ch, cx) = cathode;
    let (aw, ah, ax) = anode;
    emit_smd_pad(out, "1", &num(-cx), "0", cw, ch, SMD_LAYERS, roundrect_ratio);
    emit_smd_pad(out, "2", &num(ax), "0", aw, ah, SMD_LAYERS, roundrect_ratio);
}

/// Exposed pads, one per entry of `center_y`
pub fn emit_thermal_pads(
    out: &mut String,
    width: f64,
    height: f64,
    center_x: f64,
    center_y: &[f64],
    numbers: &[String],
) {
    for (y, number) in center_y.iter().zip(numbers) {
        emit_smd_pad(out, number, &num(center_x), &num(*y), width, height, SMD_LAYERS, 0.05);
    }
}

/// Pin numbers taken alternately from the front and the back: 1, n, 2, n-1, ...
pub fn zig_zag_numbers(pin_count: usize) -> Vec<usize> {
    let mut remaining: std::collections::VecDeque<usize> = (1..=pin_count).collect();
    let mut result = Vec::with_capacity(pin_count);
    while let Some(first) = remaining.pop_front() {
        result.push(first);
        if let Some(last) = remaining.pop_back() {
            result.push(last);
        }
    }
    result
}

/// SOT-style pads alternating top and bottom rows, with an odd pin centred
pub fn sot_pad_positions(center_x: f64, center_y: f64, pin_count: usize) -> Vec<(f64, f64)> {
    let hx = center_x / 2.0;
    let hy = center_y / 2.0;
    let half = pin_count / 2;
    (0..pin_count)
        .map(|i| {
            let x = if i < half {
                -hx
            } else if pin_count % 2 == 1 && i == half {
                0.0
            } else {
                hx
            };
            let y = if i % 2 == 0 { hy } else { -hy };
            (x, y)
        })
        .collect()
}

pub fn emit_sot_pads(
    out: &mut String,
    pin_count: usize,
    width: f64,
    height: f64,
    center_x: f64,
    center_y: f64,
    roundrect_ratio: f64,
) {
    let positions = sot_pad_positions(center_x, center_y, pin_count);
    for ((x, y), number) in positions.into_iter().zip(zig_zag_numbers(pin_count)) {
        emit_smd_pad(
            out,
            &number.to_string(),
            &num(x),
            &num(y),
            width,
            height,
            SMD_LAYERS,
            roundrect_ratio,
        );
    }
}

/// Pad X positions along the pitch; with two rows each X holds a pad pair
fn row_x_positions(pin_count: usize, rows: u32, pitch: f64, start_pos: f64) -> Vec<f64> {
    let total = pin_count * rows as usize;
    (0..total)
        .map(|i| {
            let column = if rows == 2 { i / 2 } else { i };
            start_pos + column as f64 * pitch
        })
        .collect()
}

/// Row offset of pad `index`: even pads on the top row, odd on the bottom
fn row_y(index: usize, row_pitch: f64, rows: u32) -> f64 {
    let sign = if index % 2 == 0 { -1.0 } else { 1.0 };
    sign * (row_pitch / 2.0) * (rows as f64 - 1.0)
}

/// Plated through holes; pad 1 is square
#[allow(clippy::too_many_arguments)]
pub fn emit_thru_hole_pads(
    out: &mut String,
    pin_count: usize,
    pitch: f64,
    size: f64,
    drill: f64,
    start_pos: f64,
    row_pitch: f64,
    rows: u32,
) {
    for (index, x) in row_x_positions(pin_count, rows, pitch, start_pos)
        .into_iter()
        .enumerate()
    {
        let shape = if index == 0 { "rect" } else { "circle" };
        let y = row_y(index, row_pitch, rows);
        writeln!(out, "    (pad \"{}\" thru_hole {}", index + 1, shape).unwrap();
        writeln!(out, "        (at {} {})", fixed3(x), fixed3(y)).unwrap();
        writeln!(out, "        (size {} {})", num(size), num(size)).unwrap();
        writeln!(out, "        (drill {})", num(drill)).unwrap();
        writeln!(out, "        (layers \"*.Cu\" \"*.Mask\")").unwrap();
        writeln!(out, "        (remove_unused_layers no)").unwrap();
        writeln!(out, "        (solder_mask_margin 0.102)").unwrap();
        writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
        writeln!(out, "    )").unwrap();
    }
}

/// Plated through holes at explicit positions
pub fn emit_custom_thru_hole_pads(out: &mut String, pads: &[ThroughHolePad]) {
    for pad in pads {
        writeln!(out, "    (pad \"{}\" thru_hole circle", pad.number).unwrap();
        writeln!(out, "        (at {} {})", num(pad.x), num(pad.y)).unwrap();
        writeln!(out, "        (size {} {})", num(pad.size), num(pad.size)).unwrap();
        writeln!(out, "        (drill {})", num(pad.drill)).unwrap();
        writeln!(out, "        (layers \"*.Cu\" \"*.Mask\")").unwrap();
        writeln!(out, "        (remove_unused_layers no)").unwrap();
        writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
        writeln!(out, "    )").unwrap();
    }
}

/// Two parallel SMD rows; `mirror_x` swaps the rows
#[allow(clippy::too_many_arguments)]
pub fn emit_smd_two_row_pads(
    out: &mut String,
    pin_count: usize,
    pitch: f64,
    width: f64,
    height: f64,
    start_pos: f64,
    row_pitch: f64,
    mirror_x: bool,
) {
    for (index, x) in row_x_positions(pin_count, 2, pitch, start_pos)
        .into_iter()
        .enumerate()
    {
        let y = row_y(index, row_pitch, 2);
        let y = if mirror_x { -y } else { y };
        let number = (index + 1).to_string();
        emit_smd_pad(out, &number, &fixed3(x), &fixed3(y), width, height, SMD_LAYERS_NO_MASK, 0.25);
    }
}

/// Single SMD row whose pads alternate above and below the axis
#[allow(clippy::too_many_arguments)]
pub fn emit_zig_zag_pads(
    out: &mut String,
    pin_count: usize,
    pitch: f64,
    width: f64,
    height: f64,
    start_pos: f64,
    row_pitch: f64,
    mirror: bool,
) {
    let sign = if mirror { -1.0 } else { 1.0 };
    for (index, x) in row_x_positions(pin_count, 1, pitch, start_pos)
        .into_iter()
        .enumerate()
    {
        let side = if index % 2 == 0 { -sign } else { sign };
        let y = side * row_pitch / 2.0;
        let number = (index + 1).to_string();
        emit_smd_pad(out, &number, &fixed3(x), &fixed3(y), width, height, SMD_LAYERS_NO_MASK, 0.25);
    }
}

/// Alignment holes that follow the pad row, one per pad
pub fn emit_npth_row(out: &mut String, pin_count: usize, pitch: f64, start_pos: f64, npth: &NpthRow) {
    for (index, x) in row_x_positions(pin_count, npth.rows, pitch, start_pos)
        .into_iter()
        .enumerate()
    {
        let y = if npth.rows == 1 {
            npth.row_pitch
        } else {
            row_y(index, npth.row_pitch, npth.rows)
        };
        emit_npth(out, &fixed3(x), &fixed3(y), npth.size, npth.drill);
    }
}

fn emit_npth(out: &mut String, x: &str, y: &str, size: f64, drill: f64) {
    writeln!(out, "    (pad \"\" np_thru_hole circle").unwrap();
    writeln!(out, "        (at {} {})", x, y).unwrap();
    writeln!(out, "        (size {} {})", num(size), num(size)).unwrap();
    writeln!(out, "        (drill {})", num(drill)).unwrap();
    writeln!(out, "        (layers \"F&B.Cu\" \"*.Mask\")").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

pub fn emit_mounting_hole(out: &mut String, hole: &MountingHole) {
    emit_npth(out, &num(hole.x), &num(hole.y), hole.diameter, hole.diameter);
}

/// Unnumbered plated slot
pub fn emit_oval_thru_hole(out: &mut String, hole: &OvalHole) {
    writeln!(out, "    (pad \"\" thru_hole oval").unwrap();
    writeln!(out, "        (at {} {})", num(hole.x), num(hole.y)).unwrap();
    writeln!(out, "        (size {} {})", num(hole.pad_width), num(hole.pad_height)).unwrap();
    writeln!(
        out,
        "        (drill oval {} {})",
        num(hole.drill_width),
        num(hole.drill_height)
    )
    .unwrap();
    writeln!(out, "        (layers \"F&B.Cu\" \"*.Mask\")").unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

/// Unnumbered copper pad holding the part down
pub fn emit_mounting_pad(out: &mut String, pad: &MountingPad) {
    writeln!(out, "    (pad \"\" smd rect").unwrap();
    writeln!(out, "        (at {} {})", num(pad.x), num(pad.y)).unwrap();
    writeln!(out, "        (size {} {})", num(pad.width), num(pad.height)).unwrap();
    writeln!(out, "        (layers {})", SMD_LAYERS).unwrap();
    writeln!(out, "        (uuid \"{}\")", uuid()).unwrap();
    writeln!(out, "    )").unwrap();
}

// =============================================================================
// Geometry
// =============================================================================

/// Body extent and first pad position of a part laid out along a pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width_left: f64,
    pub width_right: f64,
    pub total_length: f64,
    pub start_pos: f64,
}

/// Grow the body by half a pitch per side for every pin past the second and
/// centre the pad row on the origin.
///
/// Examples:
/// - 2 pins, pitch 2.54 → no growth, `start_pos = -1.27`
/// - 5 pins, pitch 2.54 → each side grows by 3.81, `start_pos = -5.08`
/// - 1 pin → no growth, `start_pos = 0`
pub fn calculate_dimensions(pin_count: usize, pitch: f64, width_left: f64, width_right: f64) -> Dimensions {
    let extra_per_side = pin_count.saturating_sub(2) as f64 * pitch / 2.0;
    let total_length = pin_count.saturating_sub(1) as f64 * pitch;
    Dimensions {
        width_left: width_left + extra_per_side,
        width_right: width_right + extra_per_side,
        total_length,
        start_pos: -total_length / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_dimensions() {
        let d = calculate_dimensions(5, 2.54, 2.7, 2.7);
        assert!((d.start_pos + 5.08).abs() < 1e-9);
        assert!((d.width_left - (2.7 + 3.81)).abs() < 1e-9);
        assert!((d.width_right - d.width_left).abs() < 1e-9);

        let d = calculate_dimensions(4, 5.0, 5.2, 5.2);
        assert!((d.start_pos + 7.5).abs() < 1e-9);
        assert!((d.total_length - 15.0).abs() < 1e-9);

        let single = calculate_dimensions(1, 1.27, 1.45, 1.45);
        assert_eq!(single.start_pos, 0.0);
        assert_eq!(single.width_left, 1.45);
    }

    #[test]
    fn test_pads_follow_pitch_from_start_position() {
        for (pins, pitch) in [(2usize, 5.08), (3, 3.81), (7, 1.27), (12, 2.54)] {
            let d = calculate_dimensions(pins, pitch, 1.0, 1.0);
            let mut out = String::new();
            emit_thru_hole_pads(&mut out, pins, pitch, 1.7, 1.0, d.start_pos, 0.0, 1);
            assert_eq!(out.matches("(pad ").count(), pins);
            for k in 0..pins {
                let x = d.start_pos + k as f64 * pitch;
                assert!(out.contains(&format!("(at {} 0.000)", fixed3(x))), "{pins} pins, pad {k}");
            }
        }
    }

    #[test]
    fn test_two_row_thru_hole_pairs_columns() {
        let mut out = String::new();
        emit_thru_hole_pads(&mut out, 2, 2.54, 1.7, 1.0, -1.27, 2.54, 2);
        assert!(out.contains("(pad \"1\" thru_hole rect\n        (at -1.270 -1.270)"));
        assert!(out.contains("(pad \"2\" thru_hole circle\n        (at -1.270 1.270)"));
        assert!(out.contains("(pad \"4\" thru_hole circle\n        (at 1.270 1.270)"));
    }

    #[test]
    fn test_zig_zag_numbers() {
        assert_eq!(zig_zag_numbers(3), vec![1, 3, 2]);
        assert_eq!(zig_zag_numbers(6), vec![1, 6, 2, 5, 3, 4]);
    }

    #[test]
    fn test_sot_positions() {
        let positions = sot_pad_positions(2.6, 3.8, 3);
        assert_eq!(positions, vec![(-1.3, 1.9), (0.0, -1.9), (1.3, 1.9)]);
    }

    #[test]
    fn test_side_pads_reject_wrong_numbering() {
        let mut out = String::new();
        let numbers: Vec<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
        let err = emit_side_pads(&mut out, 1.0, 0.5, 2.0, 1.27, 4, Some(&numbers)).unwrap_err();
        assert!(matches!(err, GenError::PadCountMismatch { expected: 8, got: 3 }));
    }

    #[test]
    fn test_oval_slot() {
        let mut out = String::new();
        let hole = OvalHole {
            x: -4.3,
            y: 0.0,
            pad_width: 1.6,
            pad_height: 2.6,
            drill_width: 0.9,
            drill_height: 1.9,
        };
        emit_oval_thru_hole(&mut out, &hole);
        assert!(out.starts_with("    (pad \"\" thru_hole oval\n        (at -4.3 0)\n        (size 1.6 2.6)\n"));
        assert!(out.contains("(drill oval 0.9 1.9)"));
        assert!(out.contains("(layers \"F&B.Cu\" \"*.Mask\")"));
    }

    #[test]
    fn test_hidden_model() {
        let mut out = String::new();
        emit_model(&mut out, "${KIPRJMOD}/models", "R_0402", true);
        assert!(out.starts_with("    (model \"${KIPRJMOD}/models/R_0402.step\"\n        (hide yes)"));
    }
}
