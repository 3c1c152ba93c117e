//! Rectifier, Schottky, Zener and LED series plus their SMD packages

use super::Registry;
use crate::Family;

#[derive(Debug, Clone)]
pub struct DiodeSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub footprint: &'static str,
    pub datasheet: &'static str,
    /// One part is generated per voltage
    pub voltage_rating: Vec<f64>,
    /// Maximum DC current, index-aligned with `voltage_rating`
    pub current_rating: Vec<f64>,
    pub trustedparts_link: &'static str,
    pub package: &'static str,
    pub diode_type: &'static str,
    /// Series with a numbered part per voltage, e.g. `MMSZ5221BT1G`
    pub part_number_suffix: Option<&'static str>,
    pub reference: &'static str,
}

/// Terminal pad of a two-terminal diode package
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalPad {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiodeOutline {
    /// Fab body with the diode glyph and silkscreen lines beside the anode
    Glyph,
    /// Fab rectangle and silkscreen lines only
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiodePads {
    TwoTerminal {
        cathode: TerminalPad,
        anode: TerminalPad,
        outline: DiodeOutline,
    },
    /// Three-pin SOT/SC packages, pads alternating top and bottom
    ZigZag {
        pin_count: usize,
        pad_width: f64,
        pad_height: f64,
        center_x: f64,
        center_y: f64,
        roundrect_ratio: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiodeFootprint {
    pub body_width: f64,
    pub body_height: f64,
    pub pads: DiodePads,
    pub ref_offset_y: f64,
}

const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search";

const MMSZ52_VOLTAGES: [f64; 50] = [
    2.4, 2.5, 2.7, 2.8, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6, 6.0, 6.2, 6.8, 7.5, 8.2, 8.7, 9.1,
    10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 22.0, 24.0, 25.0, 27.0,
    28.0, 30.0, 33.0, 36.0, 39.0, 43.0, 47.0, 51.0, 56.0, 60.0, 62.0, 68.0, 75.0, 82.0, 87.0,
    91.0,
];

#[allow(clippy::too_many_arguments)]
fn diode(
    manufacturer: &'static str,
    base_series: &'static str,
    footprint: &'static str,
    package: &'static str,
    datasheet: &'static str,
    voltage_rating: Vec<f64>,
    current_rating: Vec<f64>,
    diode_type: &'static str,
) -> DiodeSeries {
    DiodeSeries {
        manufacturer,
        base_series,
        footprint,
        datasheet,
        voltage_rating,
        current_rating,
        trustedparts_link: TRUSTEDPARTS,
        package,
        diode_type,
        part_number_suffix: None,
        reference: "D",
    }
}

pub fn series() -> Registry<DiodeSeries> {
    Registry::series(
        Family::Diode,
        vec![
            (
                "DFLS1200-7",
                diode(
                    "Diodes Incorporated",
                    "DFLS1200-7",
                    "diode_footprints:PowerDI_123",
                    "PowerDI_123",
                    "https://www.diodes.com/datasheet/download/DFLS1200.pdf",
                    vec![100.0],
                    vec![1.2],
                    "Schottky",
                ),
            ),
            (
                "MMSZ52",
                DiodeSeries {
                    part_number_suffix: Some("BT1G"),
                    ..diode(
                        "Onsemi",
                        "MMSZ52",
                        "diode_footprints:SOD_123",
                        "SOD_123",
                        "https://www.onsemi.com/download/data-sheet/pdf/mmsz5221bt1-d.pdf",
                        MMSZ52_VOLTAGES.to_vec(),
                        vec![0.5; MMSZ52_VOLTAGES.len()],
                        "Zener",
                    )
                },
            ),
            (
                "US1DWF",
                diode(
                    "Diodes Incorporated",
                    "US1DWF",
                    "diode_footprints:SOD_123F",
                    "SOD_123F",
                    "https://www.diodes.com/assets/Datasheets/US1DWF.pdf",
                    vec![200.0],
                    vec![1.0],
                    "Rectifier",
                ),
            ),
            (
                "APHHS1005LSECK-J3-PF",
                diode(
                    "Kingbright",
                    "APHHS1005LSECK-J3-PF",
                    "diode_footprints:LED_RED_0402_1005Metric",
                    "LED_RED_0402_1005Metric",
                    "https://www.kingbrightusa.com/product.asp?catalog_name=LED&product_id=APHHS1005LSECK/J3-PF",
                    vec![1.8],
                    vec![0.03],
                    "Red LED",
                ),
            ),
            (
                "APHHS1005CGCK",
                diode(
                    "Kingbright",
                    "APHHS1005CGCK",
                    "diode_footprints:LED_GREEN_0402_1005Metric",
                    "LED_GREEN_0402_1005Metric",
                    "https://www.kingbrightusa.com/product.asp?catalog_name=LED&product_id=APHHS1005CGCK",
                    vec![1.8],
                    vec![0.03],
                    "Green LED",
                ),
            ),
        ],
    )
}

pub fn footprints() -> Registry<DiodeFootprint> {
    let pad = |width, height, center_x| TerminalPad {
        width,
        height,
        center_x,
    };
    let two = |body: (f64, f64), cathode: TerminalPad, anode: TerminalPad, outline, ref_y| {
        DiodeFootprint {
            body_width: body.0,
            body_height: body.1,
            pads: DiodePads::TwoTerminal {
                cathode,
                anode,
                outline,
            },
            ref_offset_y: ref_y,
        }
    };
    let symmetric = |body: (f64, f64), p: TerminalPad, outline, ref_y| two(body, p, p, outline, ref_y);
    let sot = |pad_width, pad_height, center_y| DiodeFootprint {
        body_width: 2.6,
        body_height: 3.4,
        pads: DiodePads::ZigZag {
            pin_count: 3,
            pad_width,
            pad_height,
            center_x: 1.3,
            center_y,
            roundrect_ratio: 0.25,
        },
        ref_offset_y: -2.54,
    };

    use DiodeOutline::{Glyph, Plain};

    Registry::footprints(
        Family::Diode,
        vec![
            (
                "PowerDI_123",
                two((5.0, 2.6), pad(2.4, 1.5, 0.85), pad(1.05, 1.5, 1.525), Glyph, -2.5),
            ),
            ("SOD_123", symmetric((4.8, 2.0), pad(0.91, 1.22, 1.635), Glyph, -1.778)),
            ("SOD_523", symmetric((2.2, 1.0), pad(0.65, 0.3, 0.675), Glyph, -1.27)),
            ("SOD_123F", symmetric((4.6, 2.2), pad(1.34, 1.8, 1.43), Glyph, -1.778)),
            (
                "LED_RED_0402_1005Metric",
                symmetric((2.0, 0.9), pad(0.7, 0.5, 0.45), Glyph, -1.27),
            ),
            (
                "LED_GREEN_0402_1005Metric",
                symmetric((2.0, 0.9), pad(0.7, 0.5, 0.45), Glyph, -1.27),
            ),
            ("SOD323", symmetric((3.0, 1.5), pad(0.49, 0.45, 1.14), Plain, -1.524)),
            ("SOD_923", symmetric((1.3, 0.8), pad(0.36, 0.25, 0.42), Plain, -1.016)),
            ("DO-214AA", symmetric((7.75, 4.0), pad(2.16, 2.26, 2.45), Plain, -2.794)),
            ("SMA", symmetric((7.0, 2.9), pad(2.5, 1.7, 2.0), Glyph, -2.286)),
            ("SC_70", sot(0.7, 0.9, 1.9)),
            ("SOT-323", sot(0.5, 0.95, 1.95)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_are_index_aligned() {
        for (key, spec) in series().iter() {
            assert_eq!(spec.voltage_rating.len(), spec.current_rating.len(), "{key}");
        }
    }
}
