//! KiCad component library generator
//!
//! Expands manufacturer series tables into orderable part numbers and renders
//! them as KiCad artifacts: a part-number CSV per series, a `.kicad_sym`
//! symbol library per CSV and one `.kicad_mod` footprint per package.

pub mod assembly;
pub mod error;
pub mod footprint;
pub mod manager;
pub mod parts;
pub mod report;
pub mod scrape;
pub mod specs;
pub mod sym_extract;
pub mod symbol;
pub mod units;

use std::fmt;
use std::str::FromStr;

pub use error::GenError;
pub use parts::{ComponentRow, PartInfo};
pub use specs::{Catalog, Registry};

/// The closed set of component families the generator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Resistor,
    Capacitor,
    Diode,
    Transistor,
    Connector,
    TactileSwitch,
    DipSwitch,
    Inductor,
    CoupledInductor,
    Transformer,
    SlideSwitch,
    SevenSegmentDisplay,
}

impl Family {
    pub const ALL: [Family; 12] = [
        Family::Resistor,
        Family::Capacitor,
        Family::Diode,
        Family::Transistor,
        Family::Connector,
        Family::TactileSwitch,
        Family::DipSwitch,
        Family::Inductor,
        Family::CoupledInductor,
        Family::Transformer,
        Family::SlideSwitch,
        Family::SevenSegmentDisplay,
    ];

    /// Prefix of the per-series and unified symbol library names,
    /// e.g. `RESISTORS_ERJ-2RKF_DATA_BASE.kicad_sym`.
    pub fn library_prefix(self) -> &'static str {
        match self {
            Family::Resistor => "RESISTORS",
            Family::Capacitor => "CAPACITORS",
            Family::Diode => "DIODES",
            Family::Transistor => "TRANSISTORS",
            Family::Connector => "CONNECTORS",
            Family::TactileSwitch => "TACTILE_SWITCHES",
            Family::DipSwitch => "DIP_SWITCHES",
            Family::Inductor => "INDUCTORS",
            Family::CoupledInductor => "COUPLED_INDUCTORS",
            Family::Transformer => "TRANSFORMERS",
            Family::SlideSwitch => "SLIDE_SWITCHES",
            Family::SevenSegmentDisplay => "SEVEN_SEGM_DISPLAYS",
        }
    }

    /// Footprint library directory under `footprints/`, if the family
    /// ships footprints at all.
    pub fn footprint_dir(self) -> Option<&'static str> {
        match self {
            Family::Resistor => Some("resistor_footprints.pretty"),
            Family::Capacitor => Some("capacitor_footprints.pretty"),
            Family::Diode => Some("diode_footprints.pretty"),
            Family::Transistor => Some("transistor_footprints.pretty"),
            Family::Connector => Some("connector_footprints.pretty"),
            Family::TactileSwitch => Some("tactile_switches_footprints.pretty"),
            Family::Inductor => Some("inductor_footprints.pretty"),
            Family::CoupledInductor => Some("coupled_inductor_footprints.pretty"),
            Family::Transformer => Some("transformer_footprints.pretty"),
            Family::SlideSwitch => Some("slide_switches_footprints.pretty"),
            Family::DipSwitch | Family::SevenSegmentDisplay => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Resistor => "resistor",
            Family::Capacitor => "capacitor",
            Family::Diode => "diode",
            Family::Transistor => "transistor",
            Family::Connector => "connector",
            Family::TactileSwitch => "tactile",
            Family::DipSwitch => "dip",
            Family::Inductor => "inductor",
            Family::CoupledInductor => "coupled_inductor",
            Family::Transformer => "transformer",
            Family::SlideSwitch => "slide",
            Family::SevenSegmentDisplay => "display",
        };
        f.write_str(name)
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "resistor" | "resistors" => Ok(Family::Resistor),
            "capacitor" | "capacitors" => Ok(Family::Capacitor),
            "diode" | "diodes" => Ok(Family::Diode),
            "transistor" | "transistors" => Ok(Family::Transistor),
            "connector" | "connectors" => Ok(Family::Connector),
            "tactile" | "tactile_switch" | "tactile_switches" => Ok(Family::TactileSwitch),
            "dip" | "dip_switch" | "dip_switches" => Ok(Family::DipSwitch),
            "inductor" | "inductors" => Ok(Family::Inductor),
            "coupled_inductor" | "coupled_inductors" => Ok(Family::CoupledInductor),
            "transformer" | "transformers" => Ok(Family::Transformer),
            "slide" | "slide_switch" | "slide_switches" => Ok(Family::SlideSwitch),
            "display" | "seven_segment" | "seven_segm_displays" => Ok(Family::SevenSegmentDisplay),
            other => Err(format!(
                "unknown family '{other}' (expected one of: {})",
                Family::ALL.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", ")
            )),
        }
    }
}
