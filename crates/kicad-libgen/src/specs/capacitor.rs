//! Multilayer ceramic capacitor series

use super::{PassiveFootprint, Registry};
use crate::Family;

/// How the part number is assembled from value, tolerance and packaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitorMpn {
    /// `base + code + tolerance + characteristic + packaging`
    Murata,
    /// `base + code + tolerance + packaging`
    Plain,
}

/// Temperature characteristic code inserted in Murata part numbers
#[derive(Debug, Clone, PartialEq)]
pub enum Characteristic {
    None,
    Fixed(&'static str),
    /// `(threshold farads, code)`: the code of the highest threshold the
    /// capacitance exceeds, else the code of the last entry
    Thresholds(Vec<(f64, &'static str)>),
}

#[derive(Debug, Clone)]
pub struct CapacitorSeries {
    pub base_series: &'static str,
    pub manufacturer: &'static str,
    pub mpn_scheme: CapacitorMpn,
    pub footprint: &'static str,
    pub voltage_rating: &'static str,
    pub case_code_in: &'static str,
    pub case_code_mm: &'static str,
    pub packaging_options: Vec<&'static str>,
    /// Per dielectric: `(tolerance code, tolerance)` pairs
    pub tolerance_map: Vec<(&'static str, Vec<(&'static str, &'static str)>)>,
    /// Per dielectric: inclusive value range in farads
    pub value_range: Vec<(&'static str, (f64, f64))>,
    pub datasheet_url: &'static str,
    pub trustedparts_url: &'static str,
    pub characteristic: Characteristic,
    pub excluded_values: Vec<f64>,
    pub specified_values: Option<Vec<f64>>,
    pub reference: &'static str,
    pub capacitor_type: &'static str,
}

impl CapacitorSeries {
    pub fn value_range(&self, dielectric: &str) -> Option<(f64, f64)> {
        self.value_range
            .iter()
            .find(|(d, _)| *d == dielectric)
            .map(|(_, range)| *range)
    }

    pub fn tolerances(&self, dielectric: &str) -> &[(&'static str, &'static str)] {
        self.tolerance_map
            .iter()
            .find(|(d, _)| *d == dielectric)
            .map(|(_, t)| t.as_slice())
            .unwrap_or(&[])
    }
}

/// Dielectrics in generation order
pub const DIELECTRICS: [&str; 2] = ["X7R", "X7S"];

const MURATA_PDF: &str = "https://search.murata.co.jp/Ceramy/image/img/A01X/G101/ENG/";
const TDK_INFO: &str = "https://product.tdk.com/en/search/capacitor/ceramic/mlcc/info?part_no=";
const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search";

#[allow(clippy::too_many_arguments)]
fn murata(
    base_series: &'static str,
    case: (&'static str, &'static str),
    voltage_rating: &'static str,
    packaging_options: Vec<&'static str>,
    dielectric: &'static str,
    value_range: (f64, f64),
    characteristic_codes: Vec<(f64, &'static str)>,
    excluded_values: Vec<f64>,
) -> CapacitorSeries {
    CapacitorSeries {
        base_series,
        manufacturer: "Murata Electronics",
        mpn_scheme: CapacitorMpn::Murata,
        footprint: footprint_for(case.0),
        voltage_rating,
        case_code_in: case.0,
        case_code_mm: case.1,
        packaging_options,
        tolerance_map: vec![(dielectric, vec![("K", "10%")])],
        value_range: vec![(dielectric, value_range)],
        datasheet_url: MURATA_PDF,
        trustedparts_url: TRUSTEDPARTS,
        characteristic: Characteristic::Thresholds(characteristic_codes),
        excluded_values,
        specified_values: None,
        reference: "C",
        capacitor_type: "Ceramic",
    }
}

fn tdk(
    base_series: &'static str,
    case: (&'static str, &'static str),
    packaging: &'static str,
    tolerance: (&'static str, &'static str),
    value_range: (f64, f64),
    excluded_values: Vec<f64>,
    specified_values: Option<Vec<f64>>,
) -> CapacitorSeries {
    CapacitorSeries {
        base_series,
        manufacturer: "TDK",
        mpn_scheme: CapacitorMpn::Plain,
        footprint: footprint_for(case.0),
        voltage_rating: "10V",
        case_code_in: case.0,
        case_code_mm: case.1,
        packaging_options: vec![packaging],
        tolerance_map: vec![("X7S", vec![tolerance])],
        value_range: vec![("X7S", value_range)],
        datasheet_url: TDK_INFO,
        trustedparts_url: TRUSTEDPARTS,
        characteristic: Characteristic::None,
        excluded_values,
        specified_values,
        reference: "C",
        capacitor_type: "Ceramic",
    }
}

fn footprint_for(case_in: &str) -> &'static str {
    match case_in {
        "0402" => "capacitor_footprints:C_0402_1005Metric",
        "0603" => "capacitor_footprints:C_0603_1608Metric",
        "0805" => "capacitor_footprints:C_0805_2012Metric",
        "1206" => "capacitor_footprints:C_1206_3216Metric",
        "1210" => "capacitor_footprints:C_1210_3225Metric",
        _ => "capacitor_footprints:C_1812_4532Metric",
    }
}

pub fn series() -> Registry<CapacitorSeries> {
    Registry::series(
        Family::Capacitor,
        vec![
            (
                "GCM155R71H",
                murata(
                    "GCM155R71H",
                    ("0402", "1005"),
                    "50V",
                    vec!["D", "J"],
                    "X7R",
                    (2.2e-10, 1e-7),
                    vec![(2.2e-8, "E02"), (4.7e-9, "A55"), (0.0, "A37")],
                    vec![2.7e-8, 3.9e-8, 5.6e-8, 8.2e-8],
                ),
            ),
            (
                "GCM188R71H",
                murata(
                    "GCM188R71H",
                    ("0603", "1608"),
                    "50V",
                    vec!["D", "J"],
                    "X7R",
                    (1e-9, 2.2e-7),
                    vec![(1e-7, "A64"), (4.7e-8, "A57"), (2.2e-8, "A55"), (0.0, "A37")],
                    vec![1.2e-7, 1.8e-7],
                ),
            ),
            (
                "GCM216R71H",
                murata(
                    "GCM216R71H",
                    ("0805", "2012"),
                    "50V",
                    vec!["D", "J"],
                    "X7R",
                    (1e-9, 2.2e-8),
                    vec![(2.2e-8, "A55"), (0.0, "A37")],
                    vec![],
                ),
            ),
            (
                "GCM31MR71H",
                murata(
                    "GCM31MR71H",
                    ("1206", "3216"),
                    "50V",
                    vec!["K", "L"],
                    "X7R",
                    (1e-7, 1e-6),
                    vec![(5.6e-7, "A55"), (1e-7, "A37"), (0.0, "A37")],
                    vec![1.8e-7, 5.6e-7],
                ),
            ),
            (
                "GCM31CR71E",
                murata(
                    "GCM31CR71E",
                    ("1206", "3216"),
                    "25V",
                    vec!["K", "L"],
                    "X7R",
                    (4.7e-6, 4.7e-6),
                    vec![(0.0, "A55")],
                    vec![],
                ),
            ),
            (
                "GRM188C71A",
                murata(
                    "GRM188C71A",
                    ("0603", "1608"),
                    "10V",
                    vec!["D"],
                    "X7S",
                    (4.7e-6, 4.7e-6),
                    vec![(0.0, "E11")],
                    vec![],
                ),
            ),
            (
                "GCM32DC72A",
                murata(
                    "GCM32DC72A",
                    ("1210", "3225"),
                    "100V",
                    vec!["K"],
                    "X7S",
                    (4.7e-6, 4.7e-6),
                    vec![(0.0, "E02")],
                    vec![],
                ),
            ),
            (
                "CL31B",
                CapacitorSeries {
                    base_series: "CL31B",
                    manufacturer: "Samsung Electro-Mechanics",
                    mpn_scheme: CapacitorMpn::Plain,
                    footprint: footprint_for("1206"),
                    voltage_rating: "50V",
                    case_code_in: "1206",
                    case_code_mm: "3216",
                    packaging_options: vec!["BHNNN#"],
                    tolerance_map: vec![("X7R", vec![("K", "10%")])],
                    value_range: vec![("X7R", (4.7e-7, 1e-5))],
                    datasheet_url: "https://weblib.samsungsem.com/mlcc/mlcc-ec-data-sheet.do?partNumber=",
                    trustedparts_url: "https://www.trustedparts.com/en/search/CL31",
                    characteristic: Characteristic::Fixed("X7R"),
                    excluded_values: vec![],
                    specified_values: Some(vec![4.7e-7, 1e-6, 2.2e-6, 4.7e-6, 1e-5]),
                    reference: "C",
                    capacitor_type: "Ceramic",
                },
            ),
            (
                "C1005X7S1A",
                tdk(
                    "C1005X7S1A",
                    ("0402", "1005"),
                    "050BC",
                    ("K", "10%"),
                    (3.3e-7, 2.2e-6),
                    vec![3.9e-7, 5.6e-7, 8.2e-7, 1.2e-6, 1.8e-6],
                    None,
                ),
            ),
            (
                "C1608X7S1A",
                tdk(
                    "C1608X7S1A",
                    ("0603", "1608"),
                    "080AC",
                    ("K", "10%"),
                    (2.2e-6, 4.7e-6),
                    vec![],
                    Some(vec![2.2e-6, 4.7e-6]),
                ),
            ),
            (
                "C2012X7S1A",
                tdk(
                    "C2012X7S1A",
                    ("0805", "2012"),
                    "125AC",
                    ("M", "20%"),
                    (1.5e-5, 2.2e-5),
                    vec![1.8e-5],
                    None,
                ),
            ),
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
        Family::Capacitor,
        vec![
            ("0402", fp(1.82, 0.92, 0.56, 0.62, 0.48, -1.27)),
            ("0603", fp(2.96, 1.46, 0.9, 0.95, 0.775, -1.524)),
            ("0805", fp(3.4, 1.96, 1.0, 1.45, 0.95, -1.778)),
            ("1206", fp(4.6, 2.3, 1.15, 1.8, 1.475, -2.032)),
            ("1210", fp(4.6, 3.2, 1.15, 2.7, 1.475, -2.286)),
            ("1812", fp(6.0, 3.9, 1.4, 3.5, 2.05, -2.794)),
        ],
    )
}
