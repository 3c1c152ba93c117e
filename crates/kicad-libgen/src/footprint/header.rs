//! Footprints laid out along a pitch: connectors, tactile and slide switches
//!
//! The body outline grows with the pin count (see [`calculate_dimensions`])
//! and is drawn identically on the courtyard, silkscreen and fab layers.

use crate::specs::connector::BodyExtent;
use crate::specs::{HeaderFootprint, PadLayout};

use super::primitives::*;

/// Extra pieces that differ between connector and switch footprints
#[derive(Debug, Clone, Copy)]
pub struct HeaderOptions<'a> {
    /// Directory holding the STEP model
    pub model_dir: &'a str,
    pub model_file: &'a str,
    /// Draw a dot next to pad 1 on silkscreen and fab
    pub pin_1_marker: bool,
}

/// Render a header-style footprint with `pin_count` positions per row
pub fn header(
    name: &str,
    value: &str,
    pin_count: usize,
    spec: &HeaderFootprint,
    options: HeaderOptions<'_>,
) -> String {
    let dims = calculate_dimensions(
        pin_count,
        spec.pitch,
        spec.body.width_left,
        spec.body.width_right,
    );
    let body = BodyExtent {
        width_left: dims.width_left,
        width_right: dims.width_right,
        ..spec.body
    };

    let mut out = String::new();
    emit_header(&mut out, name);
    emit_properties(&mut out, spec.ref_y, value, Some(spec.mpn_y));
    emit_extent_rect(&mut out, &body, "F.CrtYd");
    if let Some(inner) = &spec.internal_courtyard {
        emit_extent_rect(&mut out, inner, "F.CrtYd");
    }
    emit_extent_rect(&mut out, &body, "F.SilkS");
    emit_extent_rect(&mut out, &body, "F.Fab");
    if options.pin_1_marker {
        let x = -(body.width_left + 0.6);
        emit_pin_1_indicator(&mut out, x, 0.0, "F.SilkS");
        emit_pin_1_indicator(&mut out, x, 0.0, "F.Fab");
    }

    match &spec.pads {
        PadLayout::ThroughHole {
            size,
            drill,
            row_pitch,
            rows,
        } => emit_thru_hole_pads(
            &mut out,
            pin_count,
            spec.pitch,
            *size,
            *drill,
            dims.start_pos,
            *row_pitch,
            *rows,
        ),
        PadLayout::CustomThroughHole(pads) => emit_custom_thru_hole_pads(&mut out, pads),
        PadLayout::SmdZigZag {
            width,
            height,
            row_pitch,
            mirror,
        } => emit_zig_zag_pads(
            &mut out,
            pin_count,
            spec.pitch,
            *width,
            *height,
            dims.start_pos,
            *row_pitch,
            *mirror,
        ),
        PadLayout::SmdTwoRow {
            width,
            height,
            row_pitch,
            mirror_x,
        } => emit_smd_two_row_pads(
            &mut out,
            pin_count,
            spec.pitch,
            *width,
            *height,
            dims.start_pos,
            *row_pitch,
            *mirror_x,
        ),
    }

    if let Some(npth) = &spec.npth_row {
        emit_npth_row(&mut out, pin_count, spec.pitch, dims.start_pos, npth);
    }
    for hole in &spec.mounting_holes {
        emit_mounting_hole(&mut out, hole);
    }
    for hole in &spec.plated_oval_holes {
        emit_oval_thru_hole(&mut out, hole);
    }
    for pad in &spec.mounting_pads {
        emit_mounting_pad(&mut out, pad);
    }

    emit_model(&mut out, options.model_dir, options.model_file, false);
    emit_footer(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::Catalog;

    fn options(file: &str) -> HeaderOptions<'_> {
        HeaderOptions {
            model_dir: "${KICAD9_3D_MODELS_VAULT}/3D_models/connectors",
            model_file: file,
            pin_1_marker: true,
        }
    }

    #[test]
    fn test_terminal_block_grows_with_pins() {
        let catalog = Catalog::load();
        let spec = catalog.connector_footprints.get("TB004-508").unwrap();
        let text = header("TB004-508-03BE", "TB004-508", 3, spec, options("TB004-508-03BE"));

        assert_eq!(text.matches("thru_hole").count(), 3);
        assert!(text.contains("(pad \"1\" thru_hole rect\n        (at -5.080 0.000)"));
        assert!(text.contains("(at 5.080 0.000)"));
        // 5.8 + 2.54 on the left, 5.2 + 2.54 on the right
        assert!(text.contains("(start -8.34 5.2)"));
        assert!(text.contains("(end 7.74 -5.2)"));
        assert_eq!(text.matches("(fp_circle").count(), 2);
        assert!(text.contains("(center -8.94 0)"));
        assert!(text.contains("3D_models/connectors/TB004-508-03BE.step"));
    }

    #[test]
    fn test_alignment_holes_follow_pads() {
        let catalog = Catalog::load();
        let spec = catalog.connector_footprints.get("CLP-1xx-02-G-D-BE").unwrap();
        let text = header("CLP-104-02-G-D-BE", "CLP-1xx-02-G-D-BE", 4, spec, options("CLP-104-02-G-D-BE"));
        assert_eq!(text.matches("smd roundrect").count(), 8);
        assert_eq!(text.matches("np_thru_hole").count(), 8);
    }

    #[test]
    fn test_tactile_switch_mounting_pads() {
        let catalog = Catalog::load();
        let spec = catalog.tactile_footprints.get("TS21").unwrap();
        let opts = HeaderOptions {
            model_dir: "${KICAD9_3D_MODELS_VAULT}/3D_models/tactile_switches",
            model_file: "TS21",
            pin_1_marker: false,
        };
        let text = header("TS21", "TS21-34-035-BK-260-SMT-TR", 2, spec, opts);
        assert_eq!(text.matches("smd roundrect").count(), 4);
        assert_eq!(text.matches("(pad \"\" smd rect").count(), 2);
        assert!(!text.contains("fp_circle"));
        assert!(text.ends_with("3D_models/tactile_switches/TS21.step\"\n        (offset (xyz 0 0 0))\n        (scale (xyz 1 1 1))\n        (rotate (xyz 0 0 0))\n    )\n)\n"));
    }

    #[test]
    fn test_custom_pads_ignore_pin_count() {
        let catalog = Catalog::load();
        let spec = catalog.tactile_footprints.get("TS29-R").unwrap();
        let opts = HeaderOptions {
            model_dir: "${KICAD9_3D_MODELS_VAULT}/3D_models/tactile_switches",
            model_file: "TS29-R",
            pin_1_marker: false,
        };
        let text = header("TS29-R", "TS29-1212-1-R-300-D", 2, spec, opts);
        assert_eq!(text.matches("(pad \"").count(), 8);
        assert!(text.contains("(pad \"6\" thru_hole circle\n        (at 0 -6.6)"));
    }

    #[test]
    fn test_slide_switch_slots_and_inner_courtyard() {
        let catalog = Catalog::load();
        let spec = catalog.slide_footprints.get("8SS1012-Z").unwrap();
        let opts = HeaderOptions {
            model_dir: "${KICAD9_3D_MODELS_VAULT}/3D_models/slide_switches",
            model_file: "8SS1012-Z",
            pin_1_marker: false,
        };
        let text = header("8SS1012-Z", "8SS1012-Z", 3, spec, opts);
        assert_eq!(text.matches("(layer \"F.CrtYd\")").count(), 2);
        // inner courtyard keeps its own extent
        assert!(text.contains("(start -1.6 0.8)\n        (end 1.6 -0.8)"));
        assert_eq!(text.matches("(pad \"\" thru_hole oval").count(), 2);
        assert!(text.contains("(at -4.1 0)\n        (size 1.5 2.4)\n        (drill oval 0.8 1.7)"));
    }
}
