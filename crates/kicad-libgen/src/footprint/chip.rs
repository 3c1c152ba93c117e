//! SMD package footprints: chip passives, diodes and MOSFETs

use crate::specs::diode::{DiodeOutline, DiodePads};
use crate::specs::transistor::TransistorPads;
use crate::specs::{DiodeFootprint, PassiveFootprint, TransistorFootprint};
use crate::GenError;

use super::primitives::*;

/// Where the visible 3D model of a chip passive lives
#[derive(Debug, Clone, Copy)]
pub struct PassiveModel<'a> {
    /// Library directory under the vault, e.g. `resistors`
    pub vault_dir: &'a str,
    /// STEP file stem, e.g. `R_0402`
    pub step: &'a str,
}

/// Two-pad chip resistor or capacitor.
///
/// Polarised parts get a chamfered outline on the silkscreen, courtyard and
/// fab layers instead of the plain rectangle.
pub fn passive(
    name: &str,
    spec: &PassiveFootprint,
    model: PassiveModel<'_>,
    polarised: bool,
) -> Result<String, GenError> {
    let mut out = String::new();
    emit_header(&mut out, name);
    emit_properties(&mut out, spec.ref_offset_y, name, None);

    if polarised {
        emit_chamfered(&mut out, spec.body_width, spec.body_height, "F.SilkS", 0.1524);
        emit_chamfered(&mut out, spec.body_width, spec.body_height, "F.CrtYd", 0.00635);
        emit_chamfered(&mut out, spec.body_width, spec.body_height, "F.Fab", 0.00635);
    } else {
        emit_courtyard(&mut out, spec.body_width, spec.body_height);
        emit_fab_rect(&mut out, spec.body_width, spec.body_height);
        emit_silkscreen_lines(&mut out, spec.body_height, spec.pad_center_x, spec.pad_width);
    }

    emit_side_pads(&mut out, spec.pad_width, spec.pad_height, spec.pad_center_x, 0.0, 1, None)?;
    emit_model(
        &mut out,
        "${KIPRJMOD}/KiCAD_Symbol_Generator/3D_models",
        model.step,
        true,
    );
    emit_model(
        &mut out,
        &format!("${{3D_MODELS_VAULT}}/3D_models/{}", model.vault_dir),
        model.step,
        false,
    );
    emit_footer(&mut out);
    Ok(out)
}

pub fn diode(name: &str, package: &str, spec: &DiodeFootprint) -> String {
    let mut out = String::new();
    emit_header(&mut out, name);
    emit_properties(&mut out, spec.ref_offset_y, package, None);
    emit_courtyard(&mut out, spec.body_width, spec.body_height);

    match &spec.pads {
        DiodePads::ZigZag {
            pin_count,
            pad_width,
            pad_height,
            center_x,
            center_y,
            roundrect_ratio,
        } => {
            let half_w = spec.body_width / 2.0;
            let half_h = spec.body_height / 2.0;
            let body = crate::specs::connector::BodyExtent {
                width_left: half_w,
                width_right: half_w,
                height_top: half_h,
                height_bottom: half_h,
            };
            emit_extent_rect(&mut out, &body, "F.SilkS");
            emit_sot_pads(
                &mut out,
                *pin_count,
                *pad_width,
                *pad_height,
                *center_x,
                *center_y,
                *roundrect_ratio,
            );
        }
        DiodePads::TwoTerminal {
            cathode,
            anode,
            outline,
        } => {
            emit_fab_rect(&mut out, spec.body_width, spec.body_height);
            if *outline == DiodeOutline::Glyph {
                emit_fab_diode(&mut out, anode.width, anode.height, anode.center_x, cathode.center_x);
            }
            emit_silkscreen_lines(&mut out, spec.body_height, anode.center_x, anode.width);
            emit_terminal_pads(
                &mut out,
                (cathode.width, cathode.height, cathode.center_x),
                (anode.width, anode.height, anode.center_x),
                0.25,
            );
        }
    }

    emit_model(&mut out, "${KICAD9_3D_MODELS_VAULT}/3D_models/diodes", package, false);
    emit_footer(&mut out);
    out
}

pub fn transistor(name: &str, package: &str, spec: &TransistorFootprint) -> Result<String, GenError> {
    let mut out = String::new();
    emit_header(&mut out, name);
    emit_properties(&mut out, spec.ref_offset_y, package, None);
    emit_courtyard(&mut out, spec.body_width, spec.body_height);
    emit_fab_rect(&mut out, spec.body_width, spec.body_height);

    match &spec.pads {
        TransistorPads::TwoSided {
            pad_width,
            pad_height,
            center_x,
            pitch,
            pins_per_side,
            pad_numbers,
            thermal,
        } => {
            emit_side_pads(
                &mut out,
                *pad_width,
                *pad_height,
                *center_x,
                *pitch,
                *pins_per_side,
                pad_numbers.as_deref(),
            )?;
            if let Some(thermal) = thermal {
                emit_thermal_pads(
                    &mut out,
                    thermal.width,
                    thermal.height,
                    thermal.center_x,
                    &thermal.center_y,
                    &thermal.numbers,
                );
            }
        }
        TransistorPads::ZigZag {
            pad_width,
            pad_height,
            center_x,
            center_y,
        } => {
            emit_sot_pads(&mut out, 3, *pad_width, *pad_height, *center_x, *center_y, 0.25);
        }
    }

    emit_model(&mut out, "KiCAD_Symbol_Generator/3D_models", package, false);
    emit_footer(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::Catalog;

    #[test]
    fn test_polarised_capacitor_outline() {
        let catalog = Catalog::load();
        let spec = catalog.capacitor_footprints.get("1206").unwrap();
        let model = PassiveModel {
            vault_dir: "capacitors",
            step: "C_1206",
        };

        let plain = passive("C_1206_3216Metric", spec, model, false).unwrap();
        assert!(!plain.contains("fp_poly"));
        assert_eq!(plain.matches("(fp_line").count(), 2);

        let chamfered = passive("C_1206_3216Metric", spec, model, true).unwrap();
        assert_eq!(chamfered.matches("(fp_poly").count(), 3);
        assert!(chamfered.contains("(xy -1.15 -1.15)"));
        assert!(chamfered.contains("${3D_MODELS_VAULT}/3D_models/capacitors/C_1206.step"));
    }

    #[test]
    fn test_sot_diode_pads_zig_zag() {
        let catalog = Catalog::load();
        let spec = catalog.diode_footprints.get("SC_70").unwrap();
        let text = diode("SC_70", "SC_70", spec);
        let numbers: Vec<&str> = text
            .lines()
            .filter_map(|l| l.trim().strip_prefix("(pad \""))
            .map(|l| &l[..1])
            .collect();
        assert_eq!(numbers, vec!["1", "3", "2"]);
        assert!(text.contains("(at -0.65 0.95)"));
        assert!(!text.contains("fp_poly"));
    }

    #[test]
    fn test_glyph_diode_has_fab_symbol() {
        let catalog = Catalog::load();
        let text = diode("SOD_123", "SOD_123", catalog.diode_footprints.get("SOD_123").unwrap());
        assert_eq!(text.matches("(fp_poly").count(), 1);
        assert!(text.contains("(pad \"1\" smd roundrect\n        (at -1.635 0)"));
        assert!(text.contains("${KICAD9_3D_MODELS_VAULT}/3D_models/diodes/SOD_123.step"));

        let plain = diode("SOD323", "SOD323", catalog.diode_footprints.get("SOD323").unwrap());
        assert!(!plain.contains("fp_poly"));
    }

    #[test]
    fn test_transistor_thermal_pads() {
        let catalog = Catalog::load();
        let spec = catalog.transistor_footprints.get("LFPAK56D-8").unwrap();
        let text = transistor("LFPAK56D-8", "LFPAK56D-8", spec).unwrap();
        assert_eq!(text.matches("(pad ").count(), 10);
        assert_eq!(text.matches("(roundrect_rratio 0.05)").count(), 2);

        let sot26 = catalog.transistor_footprints.get("SOT-26").unwrap();
        let text = transistor("SOT-26", "SOT-26", sot26).unwrap();
        assert_eq!(text.matches("(pad ").count(), 6);
        assert!(!text.contains("(roundrect_rratio 0.05)"));
    }
}
