//! Power MOSFET series and packages

use super::Registry;
use crate::Family;

#[derive(Debug, Clone)]
pub struct TransistorSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub package: &'static str,
    pub datasheet: &'static str,
    pub drain_source_voltage: Vec<f64>,
    pub drain_current: Vec<f64>,
    pub transistor_type: &'static str,
    pub trustedparts_link: &'static str,
    pub reference: &'static str,
}

impl TransistorSeries {
    pub fn footprint(&self) -> String {
        format!("transistor_footprints:{}", self.package)
    }
}

/// Exposed pad(s) under the package body
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalPad {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: Vec<f64>,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransistorPads {
    /// Gull-wing pins on two opposite sides
    TwoSided {
        pad_width: f64,
        pad_height: f64,
        center_x: f64,
        pitch: f64,
        pins_per_side: usize,
        pad_numbers: Option<Vec<String>>,
        thermal: Option<ThermalPad>,
    },
    /// Three-pin SOT packages
    ZigZag {
        pad_width: f64,
        pad_height: f64,
        center_x: f64,
        center_y: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransistorFootprint {
    pub body_width: f64,
    pub body_height: f64,
    pub pads: TransistorPads,
    pub ref_offset_y: f64,
}

const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search";

fn mosfet(
    manufacturer: &'static str,
    base_series: &'static str,
    package: &'static str,
    datasheet: &'static str,
    voltage: f64,
    current: f64,
    transistor_type: &'static str,
) -> (&'static str, TransistorSeries) {
    (
        base_series,
        TransistorSeries {
            manufacturer,
            base_series,
            package,
            datasheet,
            drain_source_voltage: vec![voltage],
            drain_current: vec![current],
            transistor_type,
            trustedparts_link: TRUSTEDPARTS,
            reference: "Q",
        },
    )
}

pub fn series() -> Registry<TransistorSeries> {
    let nexperia = |series: &'static str, datasheet: &'static str, current: f64| {
        mosfet("Nexperia", series, "LFPAK33-8", datasheet, 100.0, current, "N-Channel")
    };

    Registry::series(
        Family::Transistor,
        vec![
            mosfet(
                "Vishay Semiconductors",
                "SI7309DN-T1-GE3",
                "PowerPAK 1212-8",
                "https://www.vishay.com/docs/73434/si7309dn.pdf",
                -60.0,
                -8.0,
                "P-Channel",
            ),
            nexperia(
                "PSMN040-100MSEX",
                "https://assets.nexperia.com/documents/data-sheet/PSMN040-100MSE.pdf",
                30.0,
            ),
            nexperia(
                "BUK9M34-100EX",
                "https://assets.nexperia.com/documents/data-sheet/BUK9M34-100E.pdf",
                29.0,
            ),
            nexperia(
                "BUK9M43-100EX",
                "https://assets.nexperia.com/documents/data-sheet/BUK9M43-100E.pdf",
                25.0,
            ),
            nexperia(
                "PSMN075-100MSEX",
                "https://assets.nexperia.com/documents/data-sheet/PSMN075-100MSE.pdf",
                18.0,
            ),
            nexperia(
                "BUK9M120-100EX",
                "https://assets.nexperia.com/documents/data-sheet/BUK9M120-100E.pdf",
                11.5,
            ),
            nexperia(
                "BUK9M156-100EX",
                "https://assets.nexperia.com/documents/data-sheet/BUK9M156-100E.pdf",
                9.3,
            ),
            mosfet(
                "Nexperia",
                "BUK9K29-100E",
                "LFPAK56D-8",
                "https://assets.nexperia.com/documents/data-sheet/BUK9K29-100E.pdf",
                100.0,
                30.0,
                "N-Channel Dual",
            ),
            mosfet(
                "Vishay Semiconductors",
                "SI7997DP-T1-GE3",
                "PowerPAK SO-8",
                "https://www.vishay.com/docs/66719/si7997dp.pdf",
                -30.0,
                -60.0,
                "P-Channel Dual",
            ),
            mosfet(
                "Diodes Incorporated",
                "ZXMP6A17E6TA",
                "SOT-26",
                "https://www.diodes.com/assets/Datasheets/ZXMP6A17E6.pdf",
                -60.0,
                -3.0,
                "P-Channel",
            ),
            mosfet(
                "Diodes Incorporated",
                "BSS123WQ-7-F",
                "SOT-323",
                "https://www.diodes.com/assets/Datasheets/BSS123WQ.pdf",
                100.0,
                0.17,
                "N-Channel",
            ),
            mosfet(
                "Onsemi",
                "NVMFS5C460NLWFAFT1G",
                "SO-8FL",
                "https://www.onsemi.com/pdf/datasheet/nvmfs5c460nl-d.pdf",
                40.0,
                78.0,
                "N-Channel",
            ),
        ],
    )
}

fn numbers(list: &[u32]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

pub fn footprints() -> Registry<TransistorFootprint> {
    let thermal = |width, height, center_x, center_y: &[f64], nums: &[u32]| ThermalPad {
        width,
        height,
        center_x,
        center_y: center_y.to_vec(),
        numbers: numbers(nums),
    };
    #[allow(clippy::too_many_arguments)]
    fn two_sided(
        body: (f64, f64),
        pad: (f64, f64),
        center_x: f64,
        pitch: f64,
        pins_per_side: usize,
        pad_numbers: Option<&[u32]>,
        thermal: Option<ThermalPad>,
        ref_offset_y: f64,
    ) -> TransistorFootprint {
        TransistorFootprint {
            body_width: body.0,
            body_height: body.1,
            pads: TransistorPads::TwoSided {
                pad_width: pad.0,
                pad_height: pad.1,
                center_x,
                pitch,
                pins_per_side,
                pad_numbers: pad_numbers.map(numbers),
                thermal,
            },
            ref_offset_y,
        }
    }

    let single_drain: &[u32] = &[1, 2, 3, 4, 5, 5, 5, 5];
    let dual_drain: &[u32] = &[1, 2, 3, 4, 5, 5, 6, 6];
    let so8_dual = two_sided(
        (7.0, 5.0),
        (1.27, 0.66),
        2.67,
        1.27,
        4,
        Some(dual_drain),
        Some(thermal(3.81, 1.93, 0.69, &[1.27, -1.27], &[5, 6])),
        -3.2,
    );

    Registry::footprints(
        Family::Transistor,
        vec![
            (
                "PowerPAK 1212-8",
                two_sided(
                    (4.0, 3.9),
                    (0.99, 0.405),
                    1.435,
                    0.66,
                    4,
                    Some(single_drain),
                    Some(thermal(1.725, 2.385, 0.558, &[0.0], &[5])),
                    -2.5,
                ),
            ),
            (
                "LFPAK33-8",
                two_sided(
                    (4.1, 3.6),
                    (0.83, 0.4),
                    1.535,
                    0.65,
                    4,
                    Some(single_drain),
                    Some(thermal(1.85, 2.35, 0.405, &[0.0], &[5])),
                    -2.5,
                ),
            ),
            (
                "LFPAK56D-8",
                two_sided(
                    (7.3, 5.85),
                    (1.15, 0.7),
                    2.95,
                    1.27,
                    4,
                    Some(dual_drain),
                    Some(thermal(4.4, 1.97, 0.425, &[1.27, -1.27], &[5, 6])),
                    -3.6,
                ),
            ),
            ("PowerPAK SO-8 Dual", so8_dual.clone()),
            ("PowerPAK SO-8", so8_dual),
            (
                "PowerPAK SO-8 Single",
                two_sided(
                    (7.0, 5.0),
                    (1.27, 0.66),
                    2.67,
                    1.27,
                    4,
                    None,
                    Some(thermal(3.81, 4.47, 0.69, &[0.0], &[5])),
                    -3.2,
                ),
            ),
            (
                "SOT-26",
                two_sided((3.4, 3.2), (0.8, 0.55), 1.2, 0.95, 3, None, None, -3.2),
            ),
            (
                "SO-8FL",
                two_sided(
                    (7.0, 5.2),
                    (1.0, 0.75),
                    2.8,
                    1.27,
                    4,
                    Some(single_drain),
                    Some(thermal(4.53, 4.56, 0.935, &[0.0], &[5])),
                    -3.302,
                ),
            ),
            (
                "SOT-323",
                TransistorFootprint {
                    body_width: 2.2,
                    body_height: 2.9,
                    pads: TransistorPads::ZigZag {
                        pad_width: 0.47,
                        pad_height: 0.6,
                        center_x: 1.3,
                        center_y: 1.9,
                    },
                    ref_offset_y: -2.286,
                },
            ),
        ],
    )
}
