//! Tactile, slide and DIP switch series
//!
//! Every switch family produces a single part per series; the series code is
//! the part number.

use super::connector::{HeaderFootprint, PadLayout, ThroughHolePad};
use super::Registry;
use crate::Family;

/// Symbol pin placed explicitly instead of by the row layout
#[derive(Debug, Clone, PartialEq)]
pub struct PinOverride {
    pub number: &'static str,
    pub x: f64,
    pub y: f64,
    pub angle: u32,
}

/// Tactile or slide switch series
#[derive(Debug, Clone)]
pub struct SwitchSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    /// Footprint library the part points at, e.g. `tactile_switches_footprints`
    pub footprint_library: &'static str,
    /// Key into the family's footprint registry
    pub footprint_key: &'static str,
    pub datasheet: &'static str,
    pub pin_count: u32,
    pub trustedparts_link: &'static str,
    pub mounting_angle: &'static str,
    pub mounting_style: &'static str,
    pub reference: &'static str,
    pub number_of_rows: u32,
    pub override_pins: Option<Vec<PinOverride>>,
}

impl SwitchSeries {
    pub fn footprint(&self) -> String {
        format!("{}:{}", self.footprint_library, self.footprint_key)
    }
}

#[derive(Debug, Clone)]
pub struct DipSwitchSeries {
    pub manufacturer: &'static str,
    pub base_series: String,
    pub datasheet: String,
    /// Number of switches; each has two pins
    pub pin_count: u32,
    pub trustedparts_link: &'static str,
    pub mounting_angle: &'static str,
    pub mounting_style: &'static str,
    pub reference: &'static str,
    pub number_of_rows: u32,
    /// Number pins down the left side, then up the right (`false`), or
    /// alternate left and right (`true`)
    pub anticlockwise_numbering: bool,
    pub override_pins: Option<Vec<PinOverride>>,
}

impl DipSwitchSeries {
    pub fn footprint(&self) -> String {
        format!("dip_switches_footprints:{}", self.base_series)
    }
}

const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search";

pub fn tactile_series() -> Registry<SwitchSeries> {
    let same_sky = |base_series, footprint_key, datasheet, mounting_style| {
        (
            base_series,
            SwitchSeries {
                manufacturer: "Same Sky",
                base_series,
                footprint_library: "tactile_switches_footprints",
                footprint_key,
                datasheet,
                pin_count: 2,
                trustedparts_link: TRUSTEDPARTS,
                mounting_angle: "Vertical",
                mounting_style,
                reference: "S",
                number_of_rows: 2,
                override_pins: None,
            },
        )
    };
    let ts21 = "https://www.sameskydevices.com/product/resource/ts21.pdf";
    let ts24 = "https://www.sameskydevices.com/product/resource/ts24.pdf";
    let ts29 = "https://www.sameskydevices.com/product/resource/ts29.pdf";
    let smd = "Surface Mount";

    Registry::series(
        Family::TactileSwitch,
        vec![
            same_sky("TS21-34-035-BK-260-SMT-TR", "TS21", ts21, smd),
            same_sky("TS21-34-035-BK-160-SMT-TR", "TS21", ts21, smd),
            same_sky("TS24-62-14-BL-200-SMT-TR-67", "TS24-BL", ts24, smd),
            same_sky("TS24-62-14-BL-250-SMT-TR-67", "TS24-BL", ts24, smd),
            same_sky("TS24-62-14-CL-250-SMT-TR-67", "TS24-CL", ts24, smd),
            same_sky("TS24-62-14-CL-200-SMT-TR-67", "TS24-CL", ts24, smd),
            same_sky("TS29-1212-1-R-300-D", "TS29-R", ts29, "Through Hole"),
        ],
    )
}

pub fn tactile_footprints() -> Registry<HeaderFootprint> {
    let smd2 = |width, height, row_pitch| PadLayout::SmdTwoRow {
        width,
        height,
        row_pitch,
        mirror_x: true,
    };
    let ts24 = |model| HeaderFootprint {
        model_name: Some(model),
        ..HeaderFootprint::new(4.5, [3.2, 3.2, 5.3, 5.3], smd2(1.4, 1.6, 8.4), 6.096, -6.096)
    };
    let pad = |number, x, y, size, drill| ThroughHolePad {
        number,
        x,
        y,
        size,
        drill,
    };

    let mut ts21 = HeaderFootprint::new(2.0, [2.1, 2.1, 2.5, 2.5], smd2(0.6, 1.25, 3.25), 3.556, -3.556);
    ts21.model_name = Some("TS21");
    ts21.mounting_pads = [(-1.65, 0.0), (1.65, 0.0)]
        .into_iter()
        .map(|(x, y)| super::connector::MountingPad {
            x,
            y,
            width: 0.5,
            height: 1.0,
        })
        .collect();

    let ts29 = HeaderFootprint {
        model_name: Some("TS29-R"),
        ..HeaderFootprint::new(
            6.2,
            [5.0, 5.0, 8.2, 8.2],
            PadLayout::CustomThroughHole(vec![
                pad("1", 6.2, 2.5, 2.4, 1.4),
                pad("2", -6.2, 2.5, 2.4, 1.4),
                pad("3", 6.2, -2.5, 2.4, 1.4),
                pad("4", -6.2, -2.5, 2.4, 1.4),
                pad("5", 0.0, 6.6, 2.3, 1.3),
                pad("6", 0.0, -6.6, 2.3, 1.3),
            ]),
            9.144,
            -9.144,
        )
        .with_mounting_holes(&[[0.0, 4.4, 1.8], [0.0, -4.4, 1.8]])
    };

    Registry::footprints(
        Family::TactileSwitch,
        vec![
            ("TS21", ts21),
            ("TS24-BL", ts24("TS24-BL")),
            ("TS24-CL", ts24("TS24-CL")),
            ("TS29-R", ts29),
        ],
    )
}

pub fn slide_series() -> Registry<SwitchSeries> {
    let pin = |number, x, y, angle| PinOverride { number, x, y, angle };
    Registry::series(
        Family::SlideSwitch,
        vec![(
            "8SS1012-Z",
            SwitchSeries {
                manufacturer: "Nidec Components Corporation",
                base_series: "8SS1012-Z",
                footprint_library: "slide_switches_footprints",
                footprint_key: "8SS1012-Z",
                datasheet: "https://www.nidec-components.com/e/catalog/switch/8ss.pdf",
                pin_count: 3,
                trustedparts_link: TRUSTEDPARTS,
                mounting_angle: "Vertical",
                mounting_style: "Through Hole",
                reference: "S",
                number_of_rows: 1,
                // common contact on the left, throws on the right
                override_pins: Some(vec![
                    pin("1", 5.08, -2.54, 180),
                    pin("2", -5.08, 0.0, 0),
                    pin("3", 5.08, 2.54, 180),
                ]),
            },
        )],
    )
}

/// Single-row SPDT slide switch with two plated anchoring slots
pub fn slide_footprints() -> Registry<HeaderFootprint> {
    let pads = PadLayout::ThroughHole {
        size: 1.5,
        drill: 0.9,
        row_pitch: 0.0,
        rows: 1,
    };
    let ss8 = HeaderFootprint::new(2.0, [3.6, 3.6, 1.8, 1.8], pads, 3.048, -3.048)
        .with_internal_courtyard([1.6, 1.6, 0.8, 0.8])
        .with_oval_holes(&[[-4.1, 0.0, 1.5, 2.4, 0.8, 1.7], [4.1, 0.0, 1.5, 2.4, 0.8, 1.7]]);

    Registry::footprints(Family::SlideSwitch, vec![("8SS1012-Z", ss8)])
}

/// Wurth WS-DISV half-pitch DIP switches, one series per switch count
pub fn dip_series() -> Registry<DipSwitchSeries> {
    const SWITCH_COUNTS: [&str; 9] = ["01", "02", "03", "04", "05", "06", "08", "10", "12"];

    let entries = SWITCH_COUNTS
        .iter()
        .map(|count| {
            let base_series = format!("4161311608{count}");
            let spec = DipSwitchSeries {
                manufacturer: "Wurth Elektronik",
                datasheet: format!(
                    "https://www.we-online.com/components/products/datasheet/{base_series}.pdf"
                ),
                base_series: base_series.clone(),
                pin_count: count.parse().unwrap_or_default(),
                trustedparts_link: TRUSTEDPARTS,
                mounting_angle: "Vertical",
                mounting_style: "Surface Mount",
                reference: "S",
                number_of_rows: 2,
                anticlockwise_numbering: false,
                override_pins: None,
            };
            (base_series, spec)
        })
        .collect();

    Registry::series(Family::DipSwitch, entries)
}
