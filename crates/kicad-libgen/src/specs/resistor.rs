//! Thick-film, thin-film and NTC chip resistor series

use super::Registry;
use crate::Family;

/// E96 base values, one decade
pub const E96_BASE_VALUES: [f64; 96] = [
    10.0, 10.2, 10.5, 10.7, 11.0, 11.3, 11.5, 11.8, 12.1, 12.4, 12.7, 13.0, 13.3, 13.7, 14.0, 14.3,
    14.7, 15.0, 15.4, 15.8, 16.2, 16.5, 16.9, 17.4, 17.8, 18.2, 18.7, 19.1, 19.6, 20.0, 20.5, 21.0,
    21.5, 22.1, 22.6, 23.2, 23.7, 24.3, 24.9, 25.5, 26.1, 26.7, 27.4, 28.0, 28.7, 29.4, 30.1, 30.9,
    31.6, 32.4, 33.2, 34.0, 34.8, 35.7, 36.5, 37.4, 38.3, 39.2, 40.2, 41.2, 42.2, 43.2, 44.2, 45.3,
    46.4, 47.5, 48.7, 49.9, 51.1, 52.3, 53.6, 54.9, 56.2, 57.6, 59.0, 60.4, 61.9, 63.4, 64.9, 66.5,
    68.1, 69.8, 71.5, 73.2, 75.0, 76.8, 78.7, 80.6, 82.5, 84.5, 86.6, 88.7, 90.9, 93.1, 95.3, 97.6,
];

/// E24 base values, one decade
pub const E24_BASE_VALUES: [f64; 24] = [
    10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 43.0,
    47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0,
];

/// Standard value series a tolerance applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSeries {
    E96,
    E24,
}

impl ValueSeries {
    pub fn base_values(self) -> &'static [f64] {
        match self {
            ValueSeries::E96 => &E96_BASE_VALUES,
            ValueSeries::E24 => &E24_BASE_VALUES,
        }
    }
}

/// How a manufacturer encodes the resistance inside the part number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistanceCode {
    /// Panasonic ERJ thick film: `NNRN` below 100 Ω, else 3 digits + multiplier
    Panasonic,
    /// Panasonic ERJ 5% jumper-capable series: 2 digits + multiplier
    PanasonicTwoDigit,
    /// Panasonic ERA thin film
    PanasonicPrecision,
    /// Yageo `R`/`K`/`M` letter notation
    Yageo,
    /// 2 significant digits + power of ten (Murata, Bourns)
    Decade,
}

#[derive(Debug, Clone)]
pub struct ResistorSeries {
    pub manufacturer: &'static str,
    pub mpn_prefix: &'static str,
    pub mpn_suffix: &'static str,
    pub code: ResistanceCode,
    pub footprint: String,
    pub voltage_rating: &'static str,
    pub case_code_in: &'static str,
    pub case_code_mm: &'static str,
    pub power_rating: &'static str,
    pub temperature_coefficient: &'static str,
    /// Tolerance per value series, in generation order
    pub tolerances: Vec<(ValueSeries, &'static str)>,
    pub datasheet: &'static str,
    pub trustedparts_url: &'static str,
    pub resistance_range: (f64, f64),
    pub reference: &'static str,
    pub component_type: &'static str,
    pub excluded_values: Option<Vec<f64>>,
    pub specified_values: Option<Vec<f64>>,
    pub extra_values: Option<Vec<f64>>,
}

/// Two-terminal chip footprint shared by resistors and capacitors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassiveFootprint {
    pub body_width: f64,
    pub body_height: f64,
    pub pad_width: f64,
    pub pad_height: f64,
    pub pad_center_x: f64,
    pub ref_offset_y: f64,
}

const YAGEO_SEARCH: &str = "https://www.yageo.com/en/ProductSearch/PartNumberSearch?part_number=";
const MURATA_SEARCH: &str = "https://www.murata.com/products/productdetail?partno=";
const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search/";

#[allow(clippy::too_many_arguments)]
fn chip(
    manufacturer: &'static str,
    mpn_prefix: &'static str,
    mpn_suffix: &'static str,
    code: ResistanceCode,
    case: (&'static str, &'static str),
    voltage_rating: &'static str,
    power_rating: &'static str,
    temperature_coefficient: &'static str,
    tolerances: Vec<(ValueSeries, &'static str)>,
    datasheet: &'static str,
    resistance_range: (f64, f64),
) -> ResistorSeries {
    ResistorSeries {
        manufacturer,
        mpn_prefix,
        mpn_suffix,
        code,
        footprint: String::new(),
        voltage_rating,
        case_code_in: case.0,
        case_code_mm: case.1,
        power_rating,
        temperature_coefficient,
        tolerances,
        datasheet,
        trustedparts_url: TRUSTEDPARTS,
        resistance_range,
        reference: "R",
        component_type: "Resistor",
        excluded_values: None,
        specified_values: None,
        extra_values: None,
    }
    .with_footprint()
}

impl ResistorSeries {
    fn with_footprint(mut self) -> Self {
        self.footprint = footprint_name(self.reference, self.case_code_in, self.case_code_mm);
        self
    }
}

/// `resistor_footprints:R_0402_1005Metric` style library reference
fn footprint_name(reference: &str, case_in: &str, case_mm: &str) -> String {
    format!("resistor_footprints:{reference}_{case_in}_{case_mm}Metric")
}

pub fn series() -> Registry<ResistorSeries> {
    use ResistanceCode::*;
    use ValueSeries::*;

    let c304 = "https://industrial.panasonic.com/cdbs/www-data/pdf/RDA0000/AOA0000C304.pdf";
    let c301 = "https://industrial.panasonic.com/cdbs/www-data/pdf/RDA0000/AOA0000C301.pdf";
    let c307 = "https://industrial.panasonic.com/cdbs/www-data/pdf/RDM0000/AOA0000C307.pdf";

    let ncp15xh = ResistorSeries {
        reference: "RT",
        component_type: "Thermistor",
        ..chip(
            "Murata",
            "NCP15XH",
            "F03RC",
            Decade,
            ("0402_RT", "1005"),
            "50V",
            "0.1W",
            "5 ppm/°C",
            vec![(E24, "1%")],
            MURATA_SEARCH,
            (10_000.0, 10_000.0),
        )
    }
    .with_footprint();

    let chv2010 = ResistorSeries {
        specified_values: Some(vec![100_000.0, 4_700_000.0, 51_000_000.0]),
        ..chip(
            "Bourns",
            "CHV2010-JW-",
            "ELF",
            Decade,
            ("2010", "5025"),
            "2kV",
            "0.5W",
            "200 ppm/°C",
            vec![(E24, "1%")],
            MURATA_SEARCH,
            (100_000.0, 51_000_000.0),
        )
    };

    let rc0402 = ResistorSeries {
        extra_values: Some(vec![2710.0, 35_000.0]),
        ..chip(
            "Yageo",
            "RC0402FR-07",
            "L",
            Yageo,
            ("0402", "1005"),
            "50V",
            "0.063W",
            "200 ppm/°C",
            vec![(E96, "1%"), (E24, "1%")],
            YAGEO_SEARCH,
            (1.0, 10_000_000.0),
        )
    };

    Registry::series(
        Family::Resistor,
        vec![
            (
                "ERJ-2RKF",
                chip(
                    "Panasonic",
                    "ERJ-2RKF",
                    "X",
                    Panasonic,
                    ("0402", "1005"),
                    "50V",
                    "0.1W",
                    "100 ppm/°C",
                    vec![(E96, "1%"), (E24, "1%")],
                    c304,
                    (10.0, 1_000_000.0),
                ),
            ),
            (
                "ERA-2AEB",
                chip(
                    "Panasonic",
                    "ERA-2AEB",
                    "X",
                    PanasonicPrecision,
                    ("0402", "1005"),
                    "50V",
                    "0.1W",
                    "25 ppm/°C",
                    vec![(E96, "0.1%"), (E24, "0.1%")],
                    c307,
                    (47.0, 100_000.0),
                ),
            ),
            (
                "ERJ-3EKF",
                chip(
                    "Panasonic",
                    "ERJ-3EKF",
                    "V",
                    Panasonic,
                    ("0603", "1608"),
                    "75V",
                    "0.1W",
                    "100 ppm/°C",
                    vec![(E96, "1%"), (E24, "1%")],
                    c304,
                    (10.0, 1_000_000.0),
                ),
            ),
            (
                "ERJ-6ENF",
                chip(
                    "Panasonic",
                    "ERJ-6ENF",
                    "V",
                    Panasonic,
                    ("0805", "2012"),
                    "150V",
                    "0.125W",
                    "100 ppm/°C",
                    vec![(E96, "1%"), (E24, "1%")],
                    c304,
                    (10.0, 2_200_000.0),
                ),
            ),
            (
                "ERJ-2GEJ",
                chip(
                    "Panasonic",
                    "ERJ-2GEJ",
                    "X",
                    PanasonicTwoDigit,
                    ("0402", "1005"),
                    "50V",
                    "0.1W",
                    "200 ppm/°C",
                    vec![(E24, "5%")],
                    c301,
                    (1.0, 1_000_000.0),
                ),
            ),
            ("RC0402FR-07", rc0402),
            (
                "RC0603FR-07",
                chip(
                    "Yageo",
                    "RC0603FR-07",
                    "L",
                    Yageo,
                    ("0603", "1608"),
                    "75V",
                    "0.125W",
                    "200 ppm/°C",
                    vec![(E96, "1%"), (E24, "1%")],
                    YAGEO_SEARCH,
                    (1.0, 10_000_000.0),
                ),
            ),
            ("NCP15XH", ncp15xh),
            ("CHV2010-JW-", chv2010),
        ],
    )
}

pub fn footprints() -> Registry<PassiveFootprint> {
    let fp = |body_width, body_height, pad_width, pad_height, pad_center_x, ref_offset_y| {
        PassiveFootprint {
            body_width,
            body_height,
            pad_width,
            pad_height,
            pad_center_x,
            ref_offset_y,
        }
    };

    Registry::footprints(
        Family::Resistor,
        vec![
            ("0402", fp(1.86, 0.94, 0.54, 0.64, 0.51, -1.27)),
            ("0402_RT", fp(1.86, 0.94, 0.54, 0.64, 0.51, -1.27)),
            ("0603", fp(2.96, 1.46, 0.8, 0.95, 0.825, -1.524)),
            ("0805", fp(3.36, 1.9, 1.025, 1.4, 0.912, -1.778)),
            ("0805_RT", fp(3.36, 1.9, 1.025, 1.4, 0.912, -1.778)),
            ("1206", fp(4.56, 2.24, 1.125, 1.75, 1.462, -2.032)),
            ("1210", fp(4.56, 3.16, 1.125, 2.65, 1.462, -2.286)),
            ("2010", fp(6.36, 3.16, 1.225, 2.65, 2.312, -2.286)),
            ("2512", fp(7.64, 3.84, 1.225, 3.35, 2.962, -2.794)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_names() {
        let registry = series();
        assert_eq!(
            registry.get("ERJ-2RKF").unwrap().footprint,
            "resistor_footprints:R_0402_1005Metric"
        );
        assert_eq!(
            registry.get("NCP15XH").unwrap().footprint,
            "resistor_footprints:RT_0402_RT_1005Metric"
        );
    }

    #[test]
    fn test_value_series_sizes() {
        assert_eq!(ValueSeries::E96.base_values().len(), 96);
        assert_eq!(ValueSeries::E24.base_values().len(), 24);
    }
}
