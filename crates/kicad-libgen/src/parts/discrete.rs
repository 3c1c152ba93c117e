//! Diode and MOSFET part numbers

use crate::specs::{DiodeSeries, TransistorSeries};
use crate::units::float_text;

use super::{viewer_link, PartAttrs, PartInfo};

/// One part per voltage rating.
///
/// Zener-style series with a part-number suffix number their parts from 21
/// upwards, e.g. `MMSZ5221BT1G` for the first voltage.
pub fn expand_diodes(spec: &DiodeSeries) -> Vec<PartInfo> {
    spec.voltage_rating
        .iter()
        .enumerate()
        .map(|(index, &voltage)| {
            let mpn = match spec.part_number_suffix {
                Some(suffix) => format!("{}{}{}", spec.base_series, index + 21, suffix),
                None if spec.manufacturer == "Kingbright" => spec.base_series.replacen('-', "/", 1),
                None => spec.base_series.to_string(),
            };
            let current_rating = match spec.current_rating.get(index) {
                Some(current) => *current,
                None => {
                    log::warn!(
                        "No DC specifications found for value {} V in series {}",
                        float_text(voltage),
                        spec.base_series
                    );
                    0.0
                }
            };
            let value = format!("{} V", float_text(voltage));

            PartInfo {
                symbol_name: format!("{}_{}", spec.reference, mpn.replace('/', "-")),
                reference: spec.reference.to_string(),
                footprint: spec.footprint.to_string(),
                datasheet: spec.datasheet.to_string(),
                description: format!("{} SMD {}", spec.diode_type, value),
                manufacturer: spec.manufacturer.to_string(),
                series: spec.base_series.to_string(),
                trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
                value,
                mpn,
                attrs: PartAttrs::Diode {
                    current_rating,
                    diode_type: spec.diode_type.to_string(),
                },
            }
        })
        .collect()
}

/// One part per drain-source voltage; the MPN is the series code
pub fn expand_transistors(spec: &TransistorSeries) -> Vec<PartInfo> {
    spec.drain_source_voltage
        .iter()
        .enumerate()
        .map(|(index, &voltage)| {
            let mpn = spec.base_series.to_string();
            let value = format!("{} V", float_text(voltage));
            let drain_current = spec.drain_current.get(index).copied().unwrap_or_else(|| {
                log::warn!(
                    "No DC specifications found for value {} V in series {}",
                    float_text(voltage),
                    spec.base_series
                );
                0.0
            });

            PartInfo {
                symbol_name: format!("{}_{}", spec.reference, mpn),
                reference: spec.reference.to_string(),
                footprint: spec.footprint(),
                datasheet: spec.datasheet.to_string(),
                description: format!("Transistor {value}"),
                manufacturer: spec.manufacturer.to_string(),
                series: spec.base_series.to_string(),
                trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
                value,
                mpn,
                attrs: PartAttrs::Transistor {
                    drain_current,
                    transistor_type: spec.transistor_type.to_string(),
                    viewer_link: viewer_link(spec.package),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_zener_numbering() {
        let catalog = Catalog::load();
        let parts = expand_diodes(catalog.diodes.get("MMSZ52").unwrap());
        assert_eq!(parts.len(), 50);
        assert_eq!(parts[0].mpn, "MMSZ5221BT1G");
        assert_eq!(parts[0].value, "2.4 V");
        assert_eq!(parts[0].description, "Zener SMD 2.4 V");
        assert_eq!(parts[49].mpn, "MMSZ5270BT1G");
        assert_eq!(parts[49].value, "91.0 V");
    }

    #[test]
    fn test_kingbright_part_number() {
        let catalog = Catalog::load();
        let parts = expand_diodes(catalog.diodes.get("APHHS1005LSECK-J3-PF").unwrap());
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].mpn, "APHHS1005LSECK/J3-PF");
        assert_eq!(parts[0].symbol_name, "D_APHHS1005LSECK-J3-PF");
        assert_eq!(
            parts[0].trustedparts_link,
            "https://www.trustedparts.com/en/search/APHHS1005LSECK/J3-PF"
        );
        assert_eq!(parts[0].footprint, "diode_footprints:LED_RED_0402_1005Metric");
    }

    #[test]
    fn test_transistor_part() {
        let catalog = Catalog::load();
        let parts = expand_transistors(catalog.transistors.get("SI7309DN-T1-GE3").unwrap());
        assert_eq!(parts.len(), 1);
        let part = &parts[0];
        assert_eq!(part.symbol_name, "Q_SI7309DN-T1-GE3");
        assert_eq!(part.value, "-60.0 V");
        assert_eq!(part.description, "Transistor -60.0 V");
        assert_eq!(part.footprint, "transistor_footprints:PowerPAK 1212-8");
        assert!(matches!(
            &part.attrs,
            PartAttrs::Transistor { drain_current, viewer_link, .. }
                if *drain_current == -8.0 && viewer_link.ends_with("/3D_models/PowerPAK 1212-8.step")
        ));
    }
}
