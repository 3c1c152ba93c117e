//! Seven-segment LED display series
//!
//! Displays ship symbols only; the footprint field names a library that is
//! maintained by hand.

use super::switch::PinOverride;
use super::Registry;
use crate::Family;

#[derive(Debug, Clone)]
pub struct DisplaySeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub datasheet: &'static str,
    pub pin_count: u32,
    pub trustedparts_link: &'static str,
    pub color: &'static str,
    pub pitch: f64,
    pub mounting_angle: &'static str,
    pub mounting_style: &'static str,
    pub display_type: &'static str,
    pub reference: &'static str,
    pub number_of_rows: u32,
    pub rectangle_width: f64,
    pub rectangle_height: f64,
    pub pin_names: Vec<(&'static str, &'static str)>,
    /// Anodes on top, segment pins along the bottom edge
    pub pins: Vec<PinOverride>,
}

impl DisplaySeries {
    pub fn footprint(&self) -> String {
        format!("seven_segm_display_footprints:{}", self.base_series)
    }

    pub fn pin_name(&self, number: &str) -> &'static str {
        self.pin_names
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, name)| *name)
            .unwrap_or("")
    }
}

const GRID: f64 = 2.54;

/// Bottom-edge pin order from left to right; the first two pins are the
/// common anodes on the top edge
fn edge_pins(numbers: [&'static str; 10]) -> Vec<PinOverride> {
    let top = [(-GRID, numbers[0]), (GRID, numbers[1])]
        .into_iter()
        .map(|(x, number)| PinOverride {
            number,
            x,
            y: GRID * 8.0,
            angle: 270,
        });
    let bottom = [-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 4.0]
        .into_iter()
        .zip(&numbers[2..])
        .map(|(step, &number)| PinOverride {
            number,
            x: GRID * step,
            y: -GRID * 8.0,
            angle: 90,
        });
    top.chain(bottom).collect()
}

fn names(list: [&'static str; 10]) -> Vec<(&'static str, &'static str)> {
    const NUMBERS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
    NUMBERS.into_iter().zip(list).collect()
}

pub fn series() -> Registry<DisplaySeries> {
    let default_pins = || edge_pins(["1", "5", "7", "6", "4", "3", "2", "9", "10", "8"]);
    let display = |manufacturer, base_series, datasheet, color, mounting_style, pin_names, pins| {
        (
            base_series,
            DisplaySeries {
                manufacturer,
                base_series,
                datasheet,
                pin_count: 10,
                trustedparts_link: "https://www.trustedparts.com/en/search",
                color,
                pitch: 2.54,
                mounting_angle: "Vertical",
                mounting_style,
                display_type: "Common Anode",
                reference: "DS",
                number_of_rows: 1,
                rectangle_width: GRID * 10.0,
                rectangle_height: GRID * 14.0,
                pin_names,
                pins,
            },
        )
    };
    let we_smd = names(["E", "D", "CA", "C", "DP", "B", "A", "CA", "F", "G"]);

    Registry::series(
        Family::SevenSegmentDisplay,
        vec![
            display(
                "Würth Elektronik",
                "157119B12801",
                "https://www.we-online.com/components/products/datasheet/157119B12801.pdf",
                "Blue",
                "Through Hole",
                names(["G", "F", "CA", "E", "D", "DP", "C", "CA", "B", "A"]),
                edge_pins(["3", "8", "10", "9", "7", "5", "4", "2", "1", "6"]),
            ),
            display(
                "Würth Elektronik",
                "157143B12800",
                "https://www.we-online.com/components/products/datasheet/157143B12800.pdf?srsltid=AfmBOopWIjRtx3PotVrKoA5nX-pDkrLhAJL8G0V-MiBL1VxnND_REzTM",
                "Blue",
                "Surface Mount",
                we_smd.clone(),
                default_pins(),
            ),
            display(
                "Würth Elektronik",
                "157143V12800",
                "https://www.we-online.com/components/products/datasheet/157143V12800.pdf",
                "Bright Green",
                "Surface Mount",
                we_smd,
                default_pins(),
            ),
            display(
                "Foryard",
                "FYS-15011BUHR-21",
                "https://cetest02.cn-bj.ufileos.com/100001_2003185297/83%20FYS-15011A-BX-XX.pdf",
                "Red",
                "Through Hole",
                names(["CA", "E", "D", "C", "CA", "B", "A", "DP", "F", "G"]),
                default_pins(),
            ),
        ],
    )
}
