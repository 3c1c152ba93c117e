//! Inductor, coupled inductor and transformer footprints
//!
//! All three are SMD bodies with pads down both sides; pad 1 is the top pad
//! of the left column and carries the silkscreen dot.

use crate::specs::SidePadFootprint;
use crate::GenError;

use super::primitives::{
    emit_courtyard, emit_fab_rect, emit_footer, emit_header, emit_model, emit_pin_1_indicator,
    emit_properties, emit_side_pads, emit_silkscreen_lines,
};

pub fn side_pad(name: &str, spec: &SidePadFootprint, model_dir: &str) -> Result<String, GenError> {
    let mut out = String::new();
    emit_header(&mut out, name);
    emit_properties(&mut out, spec.ref_offset_y, name, None);
    emit_courtyard(&mut out, spec.body_width, spec.body_height);
    emit_fab_rect(&mut out, spec.body_width, spec.body_height);
    emit_silkscreen_lines(&mut out, spec.body_height, spec.pad_center_x, spec.pad_width);
    if spec.pin_1_indicator {
        let x = -(spec.body_width / 2.0 + 0.6);
        emit_pin_1_indicator(&mut out, x, spec.pin_1_y(), "F.SilkS");
    }
    emit_side_pads(
        &mut out,
        spec.pad_width,
        spec.pad_height,
        spec.pad_center_x,
        spec.pitch_y,
        spec.pins_per_side,
        None,
    )?;
    emit_model(&mut out, model_dir, name, false);
    emit_footer(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_two_pad_inductor() {
        let catalog = Catalog::load();
        let spec = catalog.inductor_footprints.get("XAL1010").unwrap();
        let text = side_pad("XAL1010", spec, "${KICAD9_3D_MODELS_VAULT}/3D_models/inductors").unwrap();
        assert!(text.starts_with("(footprint \"XAL1010\""));
        assert_eq!(text.matches("smd roundrect").count(), 2);
        assert!(text.contains("(fill solid)\n        (layer \"F.SilkS\")"));
        assert!(text.contains("3D_models/inductors/XAL1010.step"));
    }

    #[test]
    fn test_bead_has_no_dot() {
        let catalog = Catalog::load();
        let spec = catalog.inductor_footprints.get("742792731").unwrap();
        let text = side_pad("742792731", spec, "models").unwrap();
        assert!(!text.contains("fp_circle"));
    }

    #[test]
    fn test_transformer_pads_per_side() {
        let catalog = Catalog::load();
        let spec = catalog.transformer_footprints.get("ZA9384").unwrap();
        let text = side_pad("ZA9384", spec, "models").unwrap();
        assert_eq!(text.matches("smd roundrect").count(), 10);
        assert!(text.contains("(pad \"10\""));
        // pad 1 at the top of the left column
        assert!(text.contains("(pad \"1\" smd roundrect\n        (at -7.75 -5)"));
    }
}
