//! Power inductor, ferrite bead and coupled inductor series
//!
//! Inductance values are in µH. The DC ratings are index-aligned with the
//! values; a missing entry is logged and written as zero.

use super::Registry;
use crate::Family;

#[derive(Debug, Clone)]
pub struct InductorSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub tolerance: &'static str,
    pub datasheet: &'static str,
    pub inductance_values: Vec<f64>,
    pub max_dc_current: Vec<f64>,
    pub max_dc_resistance: Vec<f64>,
    /// Appended to the Coilcraft value code, e.g. `ME`
    pub value_suffix: &'static str,
    pub trustedparts_link: &'static str,
    /// `L` for inductors, `E` for ferrite beads
    pub reference: &'static str,
}

impl InductorSeries {
    pub fn footprint(&self) -> String {
        format!("inductor_footprints:{}", self.base_series)
    }
}

/// Symbol pin of a winding: number, y position and pin length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindingPin {
    pub number: &'static str,
    pub y: f64,
    pub length: f64,
    /// Unused tap, drawn hidden as no-connect
    pub no_connect: bool,
}

impl WindingPin {
    pub(crate) const fn new(number: &'static str, y: f64, length: f64) -> Self {
        Self {
            number,
            y,
            length,
            no_connect: false,
        }
    }

    pub(crate) const fn nc(number: &'static str, y: f64) -> Self {
        Self {
            number,
            y,
            length: 2.54,
            no_connect: true,
        }
    }
}

/// Pins down both sides of a two-winding symbol
#[derive(Debug, Clone, PartialEq)]
pub struct WindingPins {
    pub left: Vec<WindingPin>,
    pub right: Vec<WindingPin>,
    /// Right side of the second unit, with the winding sense reversed
    pub right_alternative: Vec<WindingPin>,
}

#[derive(Debug, Clone)]
pub struct CoupledInductorSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub tolerance: &'static str,
    pub datasheet: String,
    pub inductance_values: Vec<f64>,
    pub max_dc_current: Vec<f64>,
    pub max_dc_resistance: Vec<f64>,
    pub value_suffix: &'static str,
    pub trustedparts_link: &'static str,
    pub reference: &'static str,
    pub pins: WindingPins,
}

impl CoupledInductorSeries {
    pub fn footprint(&self) -> String {
        format!("coupled_inductor_footprints:{}", self.base_series)
    }
}

/// SMD body with pads down the left and right sides, shared by inductors,
/// coupled inductors and transformers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePadFootprint {
    pub body_width: f64,
    pub body_height: f64,
    pub pad_width: f64,
    pub pad_height: f64,
    pub pad_center_x: f64,
    pub pitch_y: f64,
    pub pins_per_side: usize,
    pub ref_offset_y: f64,
    pub pin_1_indicator: bool,
}

impl SidePadFootprint {
    /// Two-terminal part with one pad per side
    pub(crate) const fn two_pad(body: [f64; 2], pad: [f64; 3], ref_offset_y: f64) -> Self {
        Self {
            body_width: body[0],
            body_height: body[1],
            pad_width: pad[0],
            pad_height: pad[1],
            pad_center_x: pad[2],
            pitch_y: 0.0,
            pins_per_side: 1,
            ref_offset_y,
            pin_1_indicator: true,
        }
    }

    pub(crate) const fn multi_pad(
        body: [f64; 2],
        pad: [f64; 3],
        pitch_y: f64,
        pins_per_side: usize,
        ref_offset_y: f64,
    ) -> Self {
        Self {
            pitch_y,
            pins_per_side,
            ..Self::two_pad(body, pad, ref_offset_y)
        }
    }

    /// y of pad 1, the top pad of the left column
    pub fn pin_1_y(&self) -> f64 {
        -(self.pins_per_side as f64 - 1.0) * self.pitch_y / 2.0
    }
}

const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search";
const COILCRAFT_MEDIA: &str = "https://www.coilcraft.com/getmedia";
const WE_DATASHEETS: &str = "https://www.we-online.com/components/products/datasheet/";

#[allow(clippy::too_many_arguments)]
fn inductor(
    manufacturer: &'static str,
    base_series: &'static str,
    tolerance: &'static str,
    datasheet: &'static str,
    inductance_values: Vec<f64>,
    max_dc_current: Vec<f64>,
    max_dc_resistance: Vec<f64>,
    value_suffix: &'static str,
) -> (&'static str, InductorSeries) {
    (
        base_series,
        InductorSeries {
            manufacturer,
            base_series,
            tolerance,
            datasheet,
            inductance_values,
            max_dc_current,
            max_dc_resistance,
            value_suffix,
            trustedparts_link: TRUSTEDPARTS,
            reference: "L",
        },
    )
}

pub fn series() -> Registry<InductorSeries> {
    let xal1010 = "https://www.coilcraft.com/getmedia/dd74e670-e705-456a-9a69-585fe02eaf3c/xal1010.pdf";
    let xal1030 = "https://www.coilcraft.com/getmedia/7b108457-7731-456d-9256-ca72f2e1a551/xal1030.pdf";
    let xal4000 = "https://www.coilcraft.com/getmedia/6adcb47d-8b55-416c-976e-1e22e0d2848c/xal4000.pdf";

    let (bead_key, mut bead) = inductor(
        "Wurth Elektronik",
        "742792731",
        "±25%",
        "https://www.we-online.com/components/products/datasheet/742792731.pdf",
        vec![100.0],
        vec![1.2],
        vec![0.09],
        "",
    );
    bead.reference = "E";

    Registry::series(
        Family::Inductor,
        vec![
            inductor(
                "Coilcraft",
                "XAL1010",
                "±20%",
                xal1010,
                vec![0.22, 0.45, 0.68, 1.0, 1.5, 2.2, 3.3, 4.7, 5.6, 6.8, 8.2, 10.0, 15.0],
                vec![55.5, 53.0, 48.0, 43.5, 40.5, 32.0, 25.0, 24.0, 21.2, 18.5, 17.1, 15.5, 13.8],
                vec![0.5, 0.72, 0.96, 1.1, 1.76, 2.8, 4.1, 5.7, 6.93, 8.9, 12.9, 14.75, 18.6],
                "ME",
            ),
            inductor(
                "Coilcraft",
                "XAL1030",
                "±20%",
                xal1030,
                vec![0.16, 0.3, 0.56, 1.0],
                vec![42.0, 35.0, 32.0, 23.0],
                vec![1.21, 1.7, 2.75, 4.95],
                "ME",
            ),
            inductor(
                "Coilcraft",
                "XAL4020",
                "±20%",
                xal4000,
                vec![0.22, 0.4, 0.6, 1.0, 1.2, 1.5, 2.2],
                vec![16.8, 14.0, 11.7, 9.6, 9.0, 7.5, 5.5],
                vec![6.4, 8.3, 10.45, 14.6, 19.5, 23.6, 38.7],
                "ME",
            ),
            inductor(
                "Coilcraft",
                "XAL4030",
                "±20%",
                xal4000,
                vec![3.3, 4.7, 6.8],
                vec![6.6, 5.1, 3.9],
                vec![28.6, 44.1, 74.1],
                "ME",
            ),
            (bead_key, bead),
            inductor(
                "Taiyo Yuden",
                "LCENA2016MKTR47M0NK",
                "±20%",
                "https://www.cyntec.com/upfile/products/download/HTEH20121T-000%20(A1).pdf",
                vec![0.47],
                vec![4.6],
                vec![0.025],
                "",
            ),
            inductor(
                "Murata",
                "DFE21CCN1R0MELL",
                "±20%",
                "https://search.murata.co.jp/Ceramy/image/img/P02/JETE243A-0052.pdf",
                vec![1.0],
                vec![3.3],
                vec![0.06],
                "",
            ),
            inductor(
                "Murata",
                "LQG15HS47NJ02D",
                "±5%",
                "https://www.murata.com/products/productdetail?partno=LQG15HS47NJ02%23",
                vec![0.047],
                vec![0.3],
                vec![0.72],
                "",
            ),
            inductor(
                "Wurth Elektronik",
                "74404020",
                "±20%",
                WE_DATASHEETS,
                vec![0.16, 0.33, 0.47, 0.68, 1.0, 1.5, 2.2, 3.3, 4.7, 6.8, 10.0],
                vec![3.0, 2.5, 2.1, 1.8, 1.5, 1.2, 0.96, 0.87, 0.72, 0.55, 0.5],
                vec![0.025, 0.034, 0.047, 0.064, 0.094, 0.147, 0.225, 0.275, 0.41, 0.7, 0.86],
                "",
            ),
            inductor(
                "Wurth Elektronik",
                "74404024",
                "±20%",
                WE_DATASHEETS,
                vec![
                    0.16, 0.47, 0.68, 1.0, 1.5, 2.2, 3.3, 4.7, 6.8, 10.0, 15.0, 18.0, 22.0, 33.0,
                    47.0, 68.0,
                ],
                vec![
                    3.7, 2.6, 2.5, 2.3, 1.8, 1.65, 1.35, 1.12, 0.85, 0.65, 0.47, 0.46, 0.45, 0.35,
                    0.33, 0.28,
                ],
                vec![
                    0.016, 0.032, 0.035, 0.036, 0.065, 0.080, 0.120, 0.173, 0.300, 0.430, 0.820,
                    0.830, 0.910, 1.530, 1.650, 2.400,
                ],
                "",
            ),
        ],
    )
}

/// Footprints keyed by series code
pub fn footprints() -> Registry<SidePadFootprint> {
    let two_pad = SidePadFootprint::two_pad;
    let xal10 = two_pad([10.922, 12.192], [2.3876, 8.9916, 3.3274], -6.858);
    let xal40 = two_pad([4.4704, 4.4704], [0.9652, 3.4036, 1.1811], -3.048);
    let bead = SidePadFootprint {
        pin_1_indicator: false,
        ..two_pad([1.7, 1.0], [0.5, 0.6, 0.5], -1.27)
    };

    Registry::footprints(
        Family::Inductor,
        vec![
            ("XAL1010", xal10),
            ("XAL1030", xal10),
            ("XAL4020", xal40),
            ("XAL4030", xal40),
            ("742792731", bead),
            ("LCENA2016MKTR47M0NK", two_pad([2.7, 2.2], [0.8, 1.8, 0.8], -1.778)),
            ("DFE21CCN1R0MELL", two_pad([2.7, 1.8], [0.8, 1.4, 0.8], -1.778)),
            ("LQG15HS47NJ02D", two_pad([1.86, 0.94], [0.54, 0.64, 0.51], -1.27)),
            ("74404020", two_pad([2.8, 1.8], [0.85, 1.2, 0.775], -1.778)),
            ("74404024", two_pad([3.4, 2.4], [1.1, 2.0, 0.95], -2.032)),
        ],
    )
}

// =============================================================================
// Coupled inductors
// =============================================================================

fn pins(entries: &[(&'static str, f64)]) -> Vec<WindingPin> {
    entries
        .iter()
        .map(|&(number, y)| WindingPin::new(number, y, 5.08))
        .collect()
}

/// Left 1/3, right 2/4 with the dotted end on top
fn msd_pins() -> WindingPins {
    WindingPins {
        left: pins(&[("1", 5.08), ("3", -5.08)]),
        right: pins(&[("2", 5.08), ("4", -5.08)]),
        right_alternative: pins(&[("2", -5.08), ("4", 5.08)]),
    }
}

#[allow(clippy::too_many_arguments)]
fn coupled(
    manufacturer: &'static str,
    base_series: &'static str,
    datasheet: String,
    value_suffix: &'static str,
    inductance_values: Vec<f64>,
    max_dc_current: Vec<f64>,
    max_dc_resistance: Vec<f64>,
    pins: WindingPins,
) -> (&'static str, CoupledInductorSeries) {
    (
        base_series,
        CoupledInductorSeries {
            manufacturer,
            base_series,
            tolerance: "±20%",
            datasheet,
            inductance_values,
            max_dc_current,
            max_dc_resistance,
            value_suffix,
            trustedparts_link: TRUSTEDPARTS,
            reference: "L",
            pins,
        },
    )
}

pub fn coupled_series() -> Registry<CoupledInductorSeries> {
    let coilcraft = |id: &str, file: &str| format!("{COILCRAFT_MEDIA}/{id}/{file}.pdf");

    Registry::series(
        Family::CoupledInductor,
        vec![
            coupled(
                "Coilcraft",
                "MSD7342",
                coilcraft("bd00e7ca-3707-4fbb-84fc-c9b381ce0e78", "msd7342"),
                "ML",
                vec![
                    2.5, 3.3, 4.7, 5.6, 6.8, 8.2, 10.0, 12.0, 15.0, 18.0, 22.0, 27.0, 33.0, 39.0,
                    47.0, 56.0, 68.0, 82.0, 100.0, 120.0, 150.0, 180.0, 220.0, 270.0, 330.0, 390.0,
                    470.0, 560.0, 680.0, 820.0, 1000.0,
                ],
                vec![
                    3.06, 2.89, 2.46, 2.22, 2.10, 2.03, 1.76, 1.61, 1.54, 1.35, 1.19, 1.11, 1.07,
                    0.90, 0.86, 0.82, 0.72, 0.67, 0.63, 0.55, 0.48, 0.45, 0.42, 0.36, 0.34, 0.32,
                    0.28, 0.26, 0.25, 0.21, 0.2,
                ],
                vec![
                    0.033, 0.037, 0.051, 0.063, 0.07, 0.075, 0.1, 0.12, 0.13, 0.17, 0.22, 0.25,
                    0.27, 0.38, 0.42, 0.46, 0.6, 0.68, 0.77, 1.03, 1.35, 1.52, 1.72, 2.41, 2.7,
                    3.05, 4.0, 4.43, 5.0, 6.8, 7.8,
                ],
                msd_pins(),
            ),
            coupled(
                "Coilcraft",
                "MSD1048",
                coilcraft("2945f640-8140-48a6-993e-28832f57720a", "msd1048"),
                "ME",
                vec![10.0, 22.0, 47.0, 68.0, 100.0],
                vec![2.1, 1.9, 1.6, 1.4, 1.2],
                vec![0.053, 0.098, 0.208, 0.297, 0.387],
                WindingPins {
                    left: pins(&[("1", 5.08), ("3", -5.08)]),
                    right: pins(&[("4", 5.08), ("2", -5.08)]),
                    right_alternative: pins(&[("4", -5.08), ("2", 5.08)]),
                },
            ),
            coupled(
                "Coilcraft",
                "MSD1260",
                coilcraft("79bacbf1-ec2a-4e20-9b30-12448424231b", "msd1260"),
                "ML",
                vec![
                    4.7, 5.6, 6.8, 8.2, 10.0, 12.0, 15.0, 18.0, 22.0, 27.0, 33.0, 39.0, 47.0, 56.0,
                    68.0, 82.0, 100.0,
                ],
                vec![
                    4.47, 4.24, 3.88, 3.72, 3.46, 3.12, 2.92, 2.73, 2.49, 2.41, 2.32, 2.25, 2.03,
                    1.91, 1.83, 1.62, 1.5,
                ],
                vec![
                    0.036, 0.04, 0.048, 0.052, 0.06, 0.074, 0.085, 0.097, 0.116, 0.124, 0.134,
                    0.142, 0.174, 0.198, 0.216, 0.274, 0.322,
                ],
                msd_pins(),
            ),
            coupled(
                "Bourns",
                "SRF0905A",
                "https://bourns.com/docs/product-datasheets/srf0905a.pdf".to_string(),
                "Y",
                vec![10.0, 25.0, 40.0, 50.0, 250.0, 470.0, 500.0, 1000.0, 2000.0, 4700.0, 6500.0],
                vec![1.6, 1.0, 0.9, 0.8, 1.2, 1.1, 1.0, 0.8, 0.6, 0.4, 0.3],
                vec![0.08, 0.16, 0.25, 0.32, 0.13, 0.14, 0.15, 0.31, 0.42, 0.9, 1.05],
                WindingPins {
                    left: pins(&[("1", 5.08), ("4", -5.08)]),
                    right: pins(&[("2", -5.08), ("3", 5.08)]),
                    right_alternative: pins(&[("2", 5.08), ("3", -5.08)]),
                },
            ),
        ],
    )
}

pub fn coupled_footprints() -> Registry<SidePadFootprint> {
    let fp = SidePadFootprint::multi_pad;
    Registry::footprints(
        Family::CoupledInductor,
        vec![
            ("MSD7342", fp([7.7, 7.7], [2.1, 1.1, 2.7], 1.7, 2, -4.826)),
            ("MSD1048", fp([10.5, 10.5], [2.4, 1.25, 3.9], 2.05, 2, -6.096)),
            ("MSD1260", fp([12.5, 12.5], [4.0, 2.0, 4.25], 3.5, 2, -7.112)),
            ("SRF0905A", fp([10.0, 6.3], [2.0, 1.2, 3.75], 2.54, 2, -3.81)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_align_with_values() {
        for (key, spec) in series().iter() {
            assert_eq!(spec.inductance_values.len(), spec.max_dc_current.len(), "{key}");
            assert_eq!(spec.inductance_values.len(), spec.max_dc_resistance.len(), "{key}");
        }
        for (key, spec) in coupled_series().iter() {
            assert_eq!(spec.inductance_values.len(), spec.max_dc_current.len(), "{key}");
            assert_eq!(spec.inductance_values.len(), spec.max_dc_resistance.len(), "{key}");
        }
    }

    #[test]
    fn test_ferrite_bead_has_no_pin_1_mark() {
        let registry = series();
        let bead = registry.get("742792731").unwrap();
        assert_eq!(bead.reference, "E");
        assert_eq!(bead.footprint(), "inductor_footprints:742792731");
        assert!(!footprints().get("742792731").unwrap().pin_1_indicator);
        assert!(footprints().get("XAL1010").unwrap().pin_1_indicator);
    }

    #[test]
    fn test_coupled_pad_one_is_top_left() {
        let footprints = coupled_footprints();
        let msd = footprints.get("MSD7342").unwrap();
        assert_eq!(msd.pins_per_side, 2);
        assert!((msd.pin_1_y() + 0.85).abs() < 1e-9);
        assert_eq!(SidePadFootprint::two_pad([1.0, 1.0], [0.5, 0.5, 0.5], -1.0).pin_1_y(), 0.0);
        let series = coupled_series();
        assert_eq!(
            series.get("MSD1048").unwrap().footprint(),
            "coupled_inductor_footprints:MSD1048"
        );
    }
}
