//! Concrete orderable parts
//!
//! A series spec expands into one or more [`PartInfo`] records. Those are
//! written to the per-series CSV, and everything downstream (symbols,
//! footprints, the unified library) reads them back as [`ComponentRow`]s.

pub mod capacitor;
pub mod discrete;
pub mod electromech;
pub mod magnetic;
pub mod resistor;

use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::{Catalog, Family, GenError};

/// Columns every part CSV starts with
pub const COMMON_COLUMNS: [&str; 8] = [
    "Symbol Name",
    "Reference",
    "Value",
    "Footprint",
    "Datasheet",
    "Description",
    "Manufacturer",
    "MPN",
];

const VIEWER_BASE: &str = "https://3dviewer.net/index.html#model=https://github.com/ionutms/KiCAD_Symbols_Generator/blob/main/3D_models";

/// Online viewer link for a STEP model stem
pub fn viewer_link(step: &str) -> String {
    format!("{VIEWER_BASE}/{step}.step")
}

/// One concrete part
#[derive(Debug, Clone, PartialEq)]
pub struct PartInfo {
    pub symbol_name: String,
    pub reference: String,
    /// Display value, e.g. `4.7 kΩ`, `100 nF`, `30.0 V`
    pub value: String,
    pub footprint: String,
    pub datasheet: String,
    pub description: String,
    pub manufacturer: String,
    pub mpn: String,
    pub series: String,
    pub trustedparts_link: String,
    pub attrs: PartAttrs,
}

/// Family-specific part attributes
#[derive(Debug, Clone, PartialEq)]
pub enum PartAttrs {
    Resistor {
        resistance: f64,
        tolerance: String,
        temperature_coefficient: String,
        voltage_rating: String,
        case_code_in: String,
        case_code_mm: String,
        viewer_link: String,
        component_type: String,
    },
    Capacitor {
        capacitance: f64,
        dielectric: String,
        tolerance: String,
        voltage_rating: String,
        case_code_in: String,
        case_code_mm: String,
        capacitor_type: String,
        viewer_link: String,
    },
    Diode {
        current_rating: f64,
        diode_type: String,
    },
    Transistor {
        drain_current: f64,
        transistor_type: String,
        viewer_link: String,
    },
    Connector {
        color: String,
        pitch: f64,
        pin_count: u32,
        mounting_angle: String,
        current_rating: String,
        voltage_rating: String,
        mounting_style: String,
        contact_plating: String,
        number_of_rows: u32,
    },
    Inductor {
        inductance: f64,
        tolerance: String,
        max_dc_current: f64,
        /// mΩ
        max_dc_resistance: f64,
    },
    CoupledInductor {
        inductance: f64,
        tolerance: String,
        max_dc_current: f64,
        /// Ω
        max_dc_resistance: f64,
    },
    Transformer {
        primary_inductance: f64,
        tolerance: String,
        /// Per winding, e.g. `pri = 1.1; sec = 1.6`
        max_dc_resistance: String,
        turns_ratio: String,
    },
    Display {
        color: String,
        pitch: f64,
        pin_count: u32,
        mounting_angle: String,
        mounting_style: String,
        display_type: String,
        number_of_rows: u32,
    },
    /// Tactile, slide and DIP switches
    Switch {
        pin_count: u32,
        mounting_angle: String,
        mounting_style: String,
        number_of_rows: u32,
    },
}

/// Full CSV header of `family`, common columns first
pub fn csv_headers(family: Family) -> Vec<&'static str> {
    let extra: &[&str] = match family {
        Family::Resistor => &[
            "Tolerance",
            "Temperature Coefficient",
            "Voltage Rating",
            "Case Code - in",
            "Case Code - mm",
            "Series",
            "Trustedparts Search",
            "3dviewer Link",
            "Component Type",
        ],
        Family::Capacitor => &[
            "Dielectric",
            "Tolerance",
            "Voltage Rating",
            "Case Code - in",
            "Case Code - mm",
            "Series",
            "Trustedparts Search",
            "Capacitor Type",
            "3dviewer Link",
        ],
        Family::Diode => &[
            "Series",
            "Trustedparts Search",
            "Maximum DC Current (A)",
            "Diode Type",
        ],
        Family::Transistor => &[
            "Series",
            "Trustedparts Search",
            "Drain Current (A)",
            "Transistor Type",
            "3dviewer Link",
        ],
        Family::Connector => &[
            "Series",
            "Trustedparts Search",
            "Color",
            "Pitch (mm)",
            "Pin Count",
            "Mounting Angle",
            "Current Rating (A)",
            "Voltage Rating (V)",
            "Mounting Style",
            "Contact Plating",
            "Number of Rows",
        ],
        Family::Inductor => &[
            "Tolerance",
            "Series",
            "Trustedparts Search",
            "Maximum DC Current (A)",
            "Maximum DC Resistance (mΩ)",
        ],
        Family::CoupledInductor => &[
            "Tolerance",
            "Series",
            "Trustedparts Search",
            "Maximum DC Current (A)",
            "Maximum DC Resistance (Ω)",
        ],
        Family::Transformer => &[
            "Primary Inductance (µH)",
            "Tolerance",
            "Series",
            "Trustedparts Search",
            "Maximum DC Resistance (Ω)",
            "Turns Ratio",
        ],
        Family::SevenSegmentDisplay => &[
            "Series",
            "Trustedparts Search",
            "Color",
            "Pitch (mm)",
            "Pin Count",
            "Mounting Angle",
            "Mounting Style",
            "Display Type",
            "Number of Rows",
        ],
        Family::TactileSwitch | Family::SlideSwitch | Family::DipSwitch => &[
            "Series",
            "Trustedparts Search",
            "Pin Count",
            "Mounting Angle",
            "Mounting Style",
            "Number of Rows",
        ],
    };
    COMMON_COLUMNS.iter().chain(extra).copied().collect()
}

impl PartInfo {
    /// Numeric value used to order resistors, capacitors and inductors
    pub fn sort_value(&self) -> Option<f64> {
        match self.attrs {
            PartAttrs::Resistor { resistance, .. } => Some(resistance),
            PartAttrs::Capacitor { capacitance, .. } => Some(capacitance),
            PartAttrs::Inductor { inductance, .. }
            | PartAttrs::CoupledInductor { inductance, .. } => Some(inductance),
            _ => None,
        }
    }

    /// Column name and cell text, in [`csv_headers`] order
    pub fn record(&self) -> Vec<(&'static str, String)> {
        let mut cells = vec![
            ("Symbol Name", self.symbol_name.clone()),
            ("Reference", self.reference.clone()),
            ("Value", self.value.clone()),
            ("Footprint", self.footprint.clone()),
            ("Datasheet", self.datasheet.clone()),
            ("Description", self.description.clone()),
            ("Manufacturer", self.manufacturer.clone()),
            ("MPN", self.mpn.clone()),
        ];
        let series = ("Series", self.series.clone());
        let search = ("Trustedparts Search", self.trustedparts_link.clone());

        match &self.attrs {
            PartAttrs::Resistor {
                tolerance,
                temperature_coefficient,
                voltage_rating,
                case_code_in,
                case_code_mm,
                viewer_link,
                component_type,
                ..
            } => cells.extend([
                ("Tolerance", tolerance.clone()),
                ("Temperature Coefficient", temperature_coefficient.clone()),
                ("Voltage Rating", voltage_rating.clone()),
                ("Case Code - in", case_code_in.clone()),
                ("Case Code - mm", case_code_mm.clone()),
                series,
                search,
                ("3dviewer Link", viewer_link.clone()),
                ("Component Type", component_type.clone()),
            ]),
            PartAttrs::Capacitor {
                dielectric,
                tolerance,
                voltage_rating,
                case_code_in,
                case_code_mm,
                capacitor_type,
                viewer_link,
                ..
            } => cells.extend([
                ("Dielectric", dielectric.clone()),
                ("Tolerance", tolerance.clone()),
                ("Voltage Rating", voltage_rating.clone()),
                ("Case Code - in", case_code_in.clone()),
                ("Case Code - mm", case_code_mm.clone()),
                series,
                search,
                ("Capacitor Type", capacitor_type.clone()),
                ("3dviewer Link", viewer_link.clone()),
            ]),
            PartAttrs::Diode {
                current_rating,
                diode_type,
            } => cells.extend([
                series,
                search,
                ("Maximum DC Current (A)", crate::units::float_text(*current_rating)),
                ("Diode Type", diode_type.clone()),
            ]),
            PartAttrs::Transistor {
                drain_current,
                transistor_type,
                viewer_link,
            } => cells.extend([
                series,
                search,
                ("Drain Current (A)", format!("{drain_current:.1}")),
                ("Transistor Type", transistor_type.clone()),
                ("3dviewer Link", viewer_link.clone()),
            ]),
            PartAttrs::Connector {
                color,
                pitch,
                pin_count,
                mounting_angle,
                current_rating,
                voltage_rating,
                mounting_style,
                contact_plating,
                number_of_rows,
            } => cells.extend([
                series,
                search,
                ("Color", color.clone()),
                ("Pitch (mm)", crate::units::float_text(*pitch)),
                ("Pin Count", pin_count.to_string()),
                ("Mounting Angle", mounting_angle.clone()),
                ("Current Rating (A)", current_rating.clone()),
                ("Voltage Rating (V)", voltage_rating.clone()),
                ("Mounting Style", mounting_style.clone()),
                ("Contact Plating", contact_plating.clone()),
                ("Number of Rows", number_of_rows.to_string()),
            ]),
            PartAttrs::Inductor {
                tolerance,
                max_dc_current,
                max_dc_resistance,
                ..
            } => cells.extend([
                ("Tolerance", tolerance.clone()),
                series,
                search,
                ("Maximum DC Current (A)", crate::units::float_text(*max_dc_current)),
                ("Maximum DC Resistance (mΩ)", crate::units::float_text(*max_dc_resistance)),
            ]),
            PartAttrs::CoupledInductor {
                tolerance,
                max_dc_current,
                max_dc_resistance,
                ..
            } => cells.extend([
                ("Tolerance", tolerance.clone()),
                series,
                search,
                ("Maximum DC Current (A)", format!("{max_dc_current:.1}")),
                ("Maximum DC Resistance (Ω)", format!("{max_dc_resistance:.3}")),
            ]),
            PartAttrs::Transformer {
                primary_inductance,
                tolerance,
                max_dc_resistance,
                turns_ratio,
            } => cells.extend([
                ("Primary Inductance (µH)", crate::units::num(*primary_inductance)),
                ("Tolerance", tolerance.clone()),
                series,
                search,
                ("Maximum DC Resistance (Ω)", max_dc_resistance.clone()),
                ("Turns Ratio", turns_ratio.clone()),
            ]),
            PartAttrs::Display {
                color,
                pitch,
                pin_count,
                mounting_angle,
                mounting_style,
                display_type,
                number_of_rows,
            } => cells.extend([
                series,
                search,
                ("Color", color.clone()),
                ("Pitch (mm)", crate::units::float_text(*pitch)),
                ("Pin Count", pin_count.to_string()),
                ("Mounting Angle", mounting_angle.clone()),
                ("Mounting Style", mounting_style.clone()),
                ("Display Type", display_type.clone()),
                ("Number of Rows", number_of_rows.to_string()),
            ]),
            PartAttrs::Switch {
                pin_count,
                mounting_angle,
                mounting_style,
                number_of_rows,
            } => cells.extend([
                series,
                search,
                ("Pin Count", pin_count.to_string()),
                ("Mounting Angle", mounting_angle.clone()),
                ("Mounting Style", mounting_style.clone()),
                ("Number of Rows", number_of_rows.to_string()),
            ]),
        }
        cells
    }
}

/// Expand one series of `family` into its parts
pub fn expand(catalog: &Catalog, family: Family, series: &str) -> Result<Vec<PartInfo>, GenError> {
    match family {
        Family::Resistor => resistor::expand(catalog.resistors.get(series)?),
        Family::Capacitor => capacitor::expand(catalog.capacitors.get(series)?),
        Family::Diode => Ok(discrete::expand_diodes(catalog.diodes.get(series)?)),
        Family::Transistor => Ok(discrete::expand_transistors(catalog.transistors.get(series)?)),
        Family::Connector => Ok(electromech::expand_connector(catalog.connectors.get(series)?)),
        Family::TactileSwitch => Ok(vec![electromech::tactile_part(
            catalog.tactile_switches.get(series)?,
        )]),
        Family::DipSwitch => Ok(vec![electromech::dip_part(catalog.dip_switches.get(series)?)]),
        Family::Inductor => Ok(magnetic::expand_inductors(catalog.inductors.get(series)?)),
        Family::CoupledInductor => Ok(magnetic::expand_coupled(
            catalog.coupled_inductors.get(series)?,
        )),
        Family::Transformer => Ok(vec![magnetic::transformer_part(
            catalog.transformers.get(series)?,
        )]),
        Family::SlideSwitch => Ok(vec![electromech::slide_part(
            catalog.slide_switches.get(series)?,
        )]),
        Family::SevenSegmentDisplay => Ok(vec![electromech::display_part(
            catalog.displays.get(series)?,
        )]),
    }
}

/// Stable sort by value; families without a numeric value keep their order
pub fn sort_by_value(parts: &mut [PartInfo]) {
    parts.sort_by(|a, b| {
        let a = a.sort_value().unwrap_or(0.0);
        let b = b.sort_value().unwrap_or(0.0);
        a.total_cmp(&b)
    });
}

// =============================================================================
// CSV rows
// =============================================================================

/// One CSV row as an ordered property dictionary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRow {
    fields: Vec<(String, String)>,
}

impl ComponentRow {
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: Vec<(K, V)>) -> Self {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`](Self::get), but a missing column is an error
    pub fn require(&self, key: &str) -> Result<&str, GenError> {
        self.get(key)
            .ok_or_else(|| GenError::MissingProperty(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&PartInfo> for ComponentRow {
    fn from(part: &PartInfo) -> Self {
        Self::from_pairs(part.record())
    }
}

/// Union of all row keys in first-seen order
pub fn property_order(rows: &[ComponentRow]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.keys())
        .unique()
        .map(str::to_string)
        .collect()
}

/// Write `parts` under the column set of `family`
pub fn write_parts_csv(path: &Path, family: Family, parts: &[PartInfo]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writer
        .write_record(csv_headers(family))
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    for part in parts {
        let cells = part.record().into_iter().map(|(_, cell)| cell);
        writer
            .write_record(cells)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}

/// Read a CSV with a header row, keeping the header order
pub fn read_rows(path: &Path) -> Result<Vec<ComponentRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        rows.push(ComponentRow { fields });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_records_match_headers() {
        let catalog = Catalog::load();
        for family in Family::ALL {
            let key = catalog.series_keys(family)[0].to_string();
            let parts = expand(&catalog, family, &key).unwrap();
            assert!(!parts.is_empty(), "{family}");
            let names: Vec<&str> = parts[0].record().iter().map(|(name, _)| *name).collect();
            assert_eq!(names, csv_headers(family), "{family}");
        }
    }

    #[test]
    fn test_unknown_series() {
        let catalog = Catalog::load();
        let err = expand(&catalog, Family::Capacitor, "GRM999").unwrap_err();
        assert_eq!(err.to_string(), "Unknown capacitor series: GRM999");
    }

    #[test]
    fn test_property_order_is_first_seen() {
        let rows = vec![
            ComponentRow::from_pairs(vec![("Symbol Name", "a"), ("Value", "1")]),
            ComponentRow::from_pairs(vec![("Value", "2"), ("Color", "Red"), ("Symbol Name", "b")]),
        ];
        assert_eq!(property_order(&rows), vec!["Symbol Name", "Value", "Color"]);
    }

    #[test]
    fn test_require_missing_column() {
        let row = ComponentRow::from_pairs(vec![("Value", "10 kΩ")]);
        assert_eq!(row.require("Value").unwrap(), "10 kΩ");
        let err = row.require("MPN").unwrap_err();
        assert_eq!(err.to_string(), "Missing property: MPN");
    }

    #[test]
    fn test_csv_round_trip_keeps_columns() {
        let catalog = Catalog::load();
        let parts = expand(&catalog, Family::Connector, "TB004-508").unwrap();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TB004-508_part_numbers.csv");

        write_parts_csv(&path, Family::Connector, &parts).unwrap();
        let rows = read_rows(&path).unwrap();

        assert_eq!(rows.len(), parts.len());
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), csv_headers(Family::Connector));
        assert_eq!(rows[0], ComponentRow::from(&parts[0]));
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_rows(&path).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn test_inductor_rating_columns() {
        let catalog = Catalog::load();
        let parts = expand(&catalog, Family::Inductor, "XAL1010").unwrap();
        let row = ComponentRow::from(&parts[0]);
        assert_eq!(row.get("Maximum DC Current (A)"), Some("55.5"));
        assert_eq!(row.get("Maximum DC Resistance (mΩ)"), Some("0.5"));

        let coupled = expand(&catalog, Family::CoupledInductor, "MSD7342").unwrap();
        let row = ComponentRow::from(&coupled[0]);
        assert_eq!(row.get("Maximum DC Current (A)"), Some("3.1"));
        assert_eq!(row.get("Maximum DC Resistance (Ω)"), Some("0.033"));
    }

    #[test]
    fn test_sort_by_value_is_stable() {
        let catalog = Catalog::load();
        let mut parts = expand(&catalog, Family::Capacitor, "GCM155R71H").unwrap();
        parts.reverse();
        sort_by_value(&mut parts);
        let values: Vec<f64> = parts.iter().filter_map(PartInfo::sort_value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
