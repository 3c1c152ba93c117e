//! Signal transformer series with one primary and one secondary winding

use super::inductor::{SidePadFootprint, WindingPin, WindingPins};
use super::Registry;
use crate::Family;

#[derive(Debug, Clone)]
pub struct TransformerSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub tolerance: &'static str,
    pub datasheet: &'static str,
    /// µH
    pub primary_inductance: f64,
    /// Winding name to DC resistance in Ω, in column order
    pub max_dc_resistance: Vec<(&'static str, f64)>,
    /// Appended to the series code to form the part number
    pub part_suffix: &'static str,
    pub turns_ratio: Vec<(&'static str, &'static str)>,
    pub trustedparts_link: &'static str,
    pub reference: &'static str,
    pub pins: WindingPins,
}

impl TransformerSeries {
    pub fn mpn(&self) -> String {
        format!("{}{}", self.base_series, self.part_suffix)
    }

    pub fn footprint(&self) -> String {
        format!("transformer_footprints:{}", self.base_series)
    }
}

pub fn series() -> Registry<TransformerSeries> {
    let datasheet = "https://www.coilcraft.com/getmedia/cc4df0c9-0883-48fa-b8fb-d5dedac2b455/za9384.pdf";
    let end = |number, y| WindingPin::new(number, y, 5.08);
    let nc = WindingPin::nc;
    let transformer = |base_series, dcr: [f64; 2], part_suffix, pins| TransformerSeries {
        manufacturer: "Coilcraft",
        base_series,
        tolerance: "±10%",
        datasheet,
        primary_inductance: 470.0,
        max_dc_resistance: vec![("pri", dcr[0]), ("sec", dcr[1])],
        part_suffix,
        turns_ratio: vec![("pri : sec", "1 : 1")],
        trustedparts_link: "https://www.trustedparts.com/en/search",
        reference: "T",
        pins,
    };

    Registry::series(
        Family::Transformer,
        vec![
            (
                "ZA9384",
                transformer(
                    "ZA9384",
                    [1.1, 1.6],
                    "-ALD",
                    WindingPins {
                        left: vec![
                            end("4", 5.08),
                            nc("5", 2.54),
                            nc("3", 0.0),
                            nc("1", -2.54),
                            end("2", -5.08),
                        ],
                        right: vec![
                            end("6", 5.08),
                            nc("7", 2.54),
                            nc("8", 0.0),
                            nc("9", -2.54),
                            end("10", -5.08),
                        ],
                        right_alternative: Vec::new(),
                    },
                ),
            ),
            (
                "ZA9644",
                transformer(
                    "ZA9644",
                    [1.8, 1.8],
                    "-AED",
                    WindingPins {
                        left: vec![end("1", 5.08), nc("2", 2.54), nc("3", -2.54), end("4", -5.08)],
                        right: vec![end("5", 5.08), nc("6", 2.54), nc("7", -2.54), end("8", -5.08)],
                        right_alternative: Vec::new(),
                    },
                ),
            ),
        ],
    )
}

pub fn footprints() -> Registry<SidePadFootprint> {
    let fp = SidePadFootprint::multi_pad;
    Registry::footprints(
        Family::Transformer,
        vec![
            ("ZA9384", fp([18.5, 15.5], [2.5, 1.75, 7.75], 2.5, 5, -8.89)),
            ("ZA9644", fp([10.5, 10.5], [2.45, 1.6, 3.675], 2.5, 4, -6.096)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_count_matches_symbol_pins() {
        let series = series();
        let footprints = footprints();
        for (key, spec) in series.iter() {
            let fp = footprints.get(key).unwrap();
            let symbol_pins = spec.pins.left.len() + spec.pins.right.len();
            assert_eq!(fp.pins_per_side * 2, symbol_pins, "{key}");
        }
    }

    #[test]
    fn test_part_number() {
        let series = series();
        let za = series.get("ZA9384").unwrap();
        assert_eq!(za.mpn(), "ZA9384-ALD");
        assert_eq!(za.footprint(), "transformer_footprints:ZA9384");
        assert_eq!(za.pins.left.iter().filter(|p| p.no_connect).count(), 3);
    }
}
