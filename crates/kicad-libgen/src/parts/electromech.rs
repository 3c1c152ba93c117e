//! Connector, switch and display part numbers
//!
//! Descriptions are assembled from clauses that already end in `", "` and
//! are then joined with a space, so consecutive clauses are separated by a
//! comma and two spaces. Catalog consumers match on this exact text.

use crate::specs::{ConnectorSeries, DipSwitchSeries, DisplaySeries, SwitchSeries};
use crate::units::float_text;

use super::{PartAttrs, PartInfo};

fn connector_description(spec: &ConnectorSeries, pin_count: u32) -> String {
    [
        spec.manufacturer.to_string(),
        format!("{} series, ", spec.base_series),
        format!("{pin_count} positions connector, "),
        format!("{} mm pitch, ", float_text(spec.pitch)),
        format!("{}, ", spec.color),
        format!("{} mounting, ", spec.mounting_angle),
        format!("{} A, ", spec.current_text()),
        format!("{} V, ", spec.voltage_text()),
        format!("{}, ", spec.mounting_style),
        format!("{} plated", spec.contact_plating),
    ]
    .join(" ")
}

/// One part per pin count, ascending
pub fn expand_connector(spec: &ConnectorSeries) -> Vec<PartInfo> {
    spec.pin_counts
        .iter()
        .map(|&pin_count| {
            let mpn = spec.mpn(pin_count);
            PartInfo {
                symbol_name: format!("{}_{}", spec.reference, mpn),
                reference: spec.reference.to_string(),
                value: mpn.clone(),
                footprint: spec.footprint(pin_count),
                datasheet: spec.datasheet().to_string(),
                description: connector_description(spec, pin_count),
                manufacturer: spec.manufacturer.to_string(),
                series: spec.base_series.to_string(),
                trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
                mpn,
                attrs: PartAttrs::Connector {
                    color: spec.color.to_string(),
                    pitch: spec.pitch,
                    pin_count,
                    mounting_angle: spec.mounting_angle.to_string(),
                    current_rating: spec.current_text(),
                    voltage_rating: spec.voltage_text(),
                    mounting_style: spec.mounting_style.to_string(),
                    contact_plating: spec.contact_plating.to_string(),
                    number_of_rows: spec.number_of_rows,
                },
            }
        })
        .collect()
}

pub fn tactile_part(spec: &SwitchSeries) -> PartInfo {
    let mpn = spec.base_series.to_string();
    let description = [
        spec.manufacturer.to_string(),
        format!("{} series, ", spec.base_series),
        format!("{} positions tactile switch, ", spec.pin_count),
        format!("{} mounting, ", spec.mounting_angle),
        format!("{}, ", spec.mounting_style),
    ]
    .join(" ");

    PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: spec.reference.to_string(),
        value: mpn.clone(),
        footprint: spec.footprint(),
        datasheet: spec.datasheet.to_string(),
        description,
        manufacturer: spec.manufacturer.to_string(),
        series: spec.base_series.to_string(),
        trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
        mpn,
        attrs: switch_attrs(spec),
    }
}

fn switch_attrs(spec: &SwitchSeries) -> PartAttrs {
    PartAttrs::Switch {
        pin_count: spec.pin_count,
        mounting_angle: spec.mounting_angle.to_string(),
        mounting_style: spec.mounting_style.to_string(),
        number_of_rows: spec.number_of_rows,
    }
}

pub fn slide_part(spec: &SwitchSeries) -> PartInfo {
    let mpn = spec.base_series.to_string();
    let description = [
        spec.manufacturer.to_string(),
        format!("{} mounting, ", spec.mounting_angle),
        format!("{}, ", spec.mounting_style),
    ]
    .join(" ");

    PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: spec.reference.to_string(),
        value: mpn.clone(),
        footprint: spec.footprint(),
        datasheet: spec.datasheet.to_string(),
        description,
        manufacturer: spec.manufacturer.to_string(),
        series: spec.base_series.to_string(),
        trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
        mpn,
        attrs: switch_attrs(spec),
    }
}

pub fn display_part(spec: &DisplaySeries) -> PartInfo {
    let mpn = spec.base_series.to_string();
    let description = [
        spec.manufacturer.to_string(),
        format!("{} series, ", spec.base_series),
        "Seven Segment Display, ".to_string(),
        format!("{} pins, ", spec.pin_count),
        format!("{}, ", spec.display_type),
        format!("{} segments, ", spec.color),
        format!("{} mounting, ", spec.mounting_angle),
        spec.mounting_style.to_string(),
    ]
    .join(" ");

    PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: spec.reference.to_string(),
        value: mpn.clone(),
        footprint: spec.footprint(),
        datasheet: spec.datasheet.to_string(),
        description,
        manufacturer: spec.manufacturer.to_string(),
        series: spec.base_series.to_string(),
        trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
        mpn,
        attrs: PartAttrs::Display {
            color: spec.color.to_string(),
            pitch: spec.pitch,
            pin_count: spec.pin_count,
            mounting_angle: spec.mounting_angle.to_string(),
            mounting_style: spec.mounting_style.to_string(),
            display_type: spec.display_type.to_string(),
            number_of_rows: spec.number_of_rows,
        },
    }
}

pub fn dip_part(spec: &DipSwitchSeries) -> PartInfo {
    let mpn = spec.base_series.clone();
    let description = [
        spec.manufacturer.to_string(),
        format!("{} mounting, ", spec.mounting_angle),
        format!("{}, ", spec.mounting_style),
    ]
    .join(" ");

    PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: spec.reference.to_string(),
        value: mpn.clone(),
        footprint: spec.footprint(),
        datasheet: spec.datasheet.clone(),
        description,
        manufacturer: spec.manufacturer.to_string(),
        series: spec.base_series.clone(),
        trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
        mpn,
        attrs: PartAttrs::Switch {
            pin_count: spec.pin_count,
            mounting_angle: spec.mounting_angle.to_string(),
            mounting_style: spec.mounting_style.to_string(),
            number_of_rows: spec.number_of_rows,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_terminal_block_parts() {
        let catalog = Catalog::load();
        let spec = catalog.connectors.get("TB004-508").unwrap();
        let parts = expand_connector(spec);
        assert_eq!(parts.len(), spec.pin_counts.len());

        let first = &parts[0];
        let pins = spec.pin_counts[0];
        assert_eq!(first.mpn, format!("TB004-508-{pins:02}BE"));
        assert_eq!(first.value, first.mpn);
        assert_eq!(first.footprint, format!("connector_footprints:{}", first.mpn));
        assert_eq!(
            first.description,
            format!(
                "Same Sky TB004-508 series,  {pins} positions connector,  5.08 mm pitch,  Blue,  \
                 Vertical mounting,  16.0 A,  300 V,  Through Hole,  Tin plated"
            )
        );
    }

    #[test]
    fn test_connector_pin_counts_ascend() {
        let catalog = Catalog::load();
        for (key, spec) in catalog.connectors.iter() {
            let counts: Vec<u32> = expand_connector(spec)
                .iter()
                .map(|p| match p.attrs {
                    PartAttrs::Connector { pin_count, .. } => pin_count,
                    _ => 0,
                })
                .collect();
            assert!(counts.windows(2).all(|w| w[0] < w[1]), "{key}");
        }
    }

    #[test]
    fn test_tactile_description() {
        let catalog = Catalog::load();
        let part = tactile_part(catalog.tactile_switches.get("TS21-34-035-BK-260-SMT-TR").unwrap());
        assert_eq!(part.symbol_name, "S_TS21-34-035-BK-260-SMT-TR");
        assert_eq!(part.footprint, "tactile_switches_footprints:TS21");
        assert_eq!(
            part.description,
            "Same Sky TS21-34-035-BK-260-SMT-TR series,  2 positions tactile switch,  \
             Vertical mounting,  Surface Mount, "
        );
    }

    #[test]
    fn test_dip_description() {
        let catalog = Catalog::load();
        let part = dip_part(catalog.dip_switches.get("416131160803").unwrap());
        assert_eq!(part.value, "416131160803");
        assert_eq!(part.description, "Wurth Elektronik Vertical mounting,  Surface Mount, ");
        assert!(matches!(part.attrs, PartAttrs::Switch { pin_count: 3, number_of_rows: 2, .. }));
    }

    #[test]
    fn test_slide_part() {
        let catalog = Catalog::load();
        let part = slide_part(catalog.slide_switches.get("8SS1012-Z").unwrap());
        assert_eq!(part.symbol_name, "S_8SS1012-Z");
        assert_eq!(part.footprint, "slide_switches_footprints:8SS1012-Z");
        assert_eq!(
            part.description,
            "Nidec Components Corporation Vertical mounting,  Through Hole, "
        );
        assert!(matches!(part.attrs, PartAttrs::Switch { pin_count: 3, number_of_rows: 1, .. }));
    }

    #[test]
    fn test_display_description() {
        let catalog = Catalog::load();
        let part = display_part(catalog.displays.get("157143B12800").unwrap());
        assert_eq!(part.symbol_name, "DS_157143B12800");
        assert_eq!(part.value, "157143B12800");
        assert_eq!(
            part.description,
            "Würth Elektronik 157143B12800 series,  Seven Segment Display,  10 pins,  \
             Common Anode,  Blue segments,  Vertical mounting,  Surface Mount"
        );
    }
}
