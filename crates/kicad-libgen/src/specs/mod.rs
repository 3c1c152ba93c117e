//! Static series and footprint tables
//!
//! Every family owns two registries: one keyed by series name that drives
//! part-number expansion, and one keyed by package or series code that holds
//! the physical footprint dimensions. A [`Catalog`] builds all of them once
//! and is passed explicitly to the generators.

pub mod capacitor;
pub mod connector;
pub mod diode;
pub mod display;
pub mod inductor;
pub mod resistor;
pub mod switch;
pub mod transformer;
pub mod transistor;

use crate::{Family, GenError};

pub use capacitor::CapacitorSeries;
pub use connector::{ConnectorSeries, HeaderFootprint, PadLayout, ThroughHolePad};
pub use diode::{DiodeFootprint, DiodeSeries};
pub use display::DisplaySeries;
pub use inductor::{
    CoupledInductorSeries, InductorSeries, SidePadFootprint, WindingPin, WindingPins,
};
pub use resistor::{PassiveFootprint, ResistorSeries};
pub use switch::{DipSwitchSeries, PinOverride, SwitchSeries};
pub use transformer::TransformerSeries;
pub use transistor::{TransistorFootprint, TransistorSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupKind {
    Series,
    Footprint,
}

/// An ordered, read-only map from a string key to a spec record.
///
/// Insertion order is kept so series are processed in the order they are
/// declared. A miss is always an error; nothing falls back to a default.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    family: Family,
    kind: LookupKind,
    entries: Vec<(String, T)>,
}

impl<T> Registry<T> {
    /// Registry of series specs for `family`
    pub fn series<K: Into<String>>(family: Family, entries: Vec<(K, T)>) -> Self {
        Self::build(family, LookupKind::Series, entries)
    }

    /// Registry of footprint dimension records for `family`
    pub fn footprints<K: Into<String>>(family: Family, entries: Vec<(K, T)>) -> Self {
        Self::build(family, LookupKind::Footprint, entries)
    }

    fn build<K: Into<String>>(family: Family, kind: LookupKind, entries: Vec<(K, T)>) -> Self {
        let entries: Vec<(String, T)> = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        debug_assert!(
            {
                let mut keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                keys.sort_unstable();
                keys.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate key in {family} registry"
        );
        Self {
            family,
            kind,
            entries,
        }
    }

    /// Look up `key`, failing with the family-specific "unknown" error
    pub fn get(&self, key: &str) -> Result<&T, GenError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| match self.kind {
                LookupKind::Series => GenError::UnknownSeries {
                    family: self.family,
                    key: key.to_string(),
                },
                LookupKind::Footprint => GenError::UnknownFootprint {
                    family: self.family,
                    key: key.to_string(),
                },
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every registry the generators read from
#[derive(Debug, Clone)]
pub struct Catalog {
    pub resistors: Registry<ResistorSeries>,
    pub resistor_footprints: Registry<PassiveFootprint>,
    pub capacitors: Registry<CapacitorSeries>,
    pub capacitor_footprints: Registry<PassiveFootprint>,
    pub diodes: Registry<DiodeSeries>,
    pub diode_footprints: Registry<DiodeFootprint>,
    pub transistors: Registry<TransistorSeries>,
    pub transistor_footprints: Registry<TransistorFootprint>,
    pub connectors: Registry<ConnectorSeries>,
    pub connector_footprints: Registry<HeaderFootprint>,
    pub tactile_switches: Registry<SwitchSeries>,
    pub tactile_footprints: Registry<HeaderFootprint>,
    pub dip_switches: Registry<DipSwitchSeries>,
    pub inductors: Registry<InductorSeries>,
    pub inductor_footprints: Registry<SidePadFootprint>,
    pub coupled_inductors: Registry<CoupledInductorSeries>,
    pub coupled_inductor_footprints: Registry<SidePadFootprint>,
    pub transformers: Registry<TransformerSeries>,
    pub transformer_footprints: Registry<SidePadFootprint>,
    pub slide_switches: Registry<SwitchSeries>,
    pub slide_footprints: Registry<HeaderFootprint>,
    pub displays: Registry<DisplaySeries>,
}

impl Catalog {
    /// Build every compiled-in table
    pub fn load() -> Self {
        Self {
            resistors: resistor::series(),
            resistor_footprints: resistor::footprints(),
            capacitors: capacitor::series(),
            capacitor_footprints: capacitor::footprints(),
            diodes: diode::series(),
            diode_footprints: diode::footprints(),
            transistors: transistor::series(),
            transistor_footprints: transistor::footprints(),
            connectors: connector::series(),
            connector_footprints: connector::footprints(),
            tactile_switches: switch::tactile_series(),
            tactile_footprints: switch::tactile_footprints(),
            dip_switches: switch::dip_series(),
            inductors: inductor::series(),
            inductor_footprints: inductor::footprints(),
            coupled_inductors: inductor::coupled_series(),
            coupled_inductor_footprints: inductor::coupled_footprints(),
            transformers: transformer::series(),
            transformer_footprints: transformer::footprints(),
            slide_switches: switch::slide_series(),
            slide_footprints: switch::slide_footprints(),
            displays: display::series(),
        }
    }

    /// Series names of `family`, in declaration order
    pub fn series_keys(&self, family: Family) -> Vec<&str> {
        match family {
            Family::Resistor => self.resistors.keys().collect(),
            Family::Capacitor => self.capacitors.keys().collect(),
            Family::Diode => self.diodes.keys().collect(),
            Family::Transistor => self.transistors.keys().collect(),
            Family::Connector => self.connectors.keys().collect(),
            Family::TactileSwitch => self.tactile_switches.keys().collect(),
            Family::DipSwitch => self.dip_switches.keys().collect(),
            Family::Inductor => self.inductors.keys().collect(),
            Family::CoupledInductor => self.coupled_inductors.keys().collect(),
            Family::Transformer => self.transformers.keys().collect(),
            Family::SlideSwitch => self.slide_switches.keys().collect(),
            Family::SevenSegmentDisplay => self.displays.keys().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup_miss_is_an_error() {
        let registry = Registry::series(Family::Diode, vec![("US1DWF", 1)]);
        assert_eq!(*registry.get("US1DWF").unwrap(), 1);

        let err = registry.get("1N4148").unwrap_err();
        assert!(matches!(err, GenError::UnknownSeries { family: Family::Diode, .. }));
        assert_eq!(err.to_string(), "Unknown diode series: 1N4148");

        let footprints = Registry::footprints(Family::Resistor, vec![("0402", ())]);
        let err = footprints.get("0201").unwrap_err();
        assert_eq!(err.to_string(), "No resistor footprint specs found for 0201");
    }

    #[test]
    fn test_registry_keeps_declaration_order() {
        let registry = Registry::series(Family::Connector, vec![("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_every_series_footprint_resolves() {
        let catalog = Catalog::load();

        for (_, spec) in catalog.resistors.iter() {
            assert!(catalog.resistor_footprints.get(spec.case_code_in).is_ok());
        }
        for (_, spec) in catalog.capacitors.iter() {
            assert!(catalog.capacitor_footprints.get(spec.case_code_in).is_ok());
        }
        for (_, spec) in catalog.diodes.iter() {
            assert!(catalog.diode_footprints.get(spec.package).is_ok());
        }
        for (_, spec) in catalog.transistors.iter() {
            assert!(catalog.transistor_footprints.get(spec.package).is_ok());
        }
        for (key, _) in catalog.connectors.iter() {
            assert!(catalog.connector_footprints.get(key).is_ok(), "{key}");
        }
        for (_, spec) in catalog.tactile_switches.iter() {
            assert!(catalog.tactile_footprints.get(spec.footprint_key).is_ok());
        }
        for (_, spec) in catalog.slide_switches.iter() {
            assert!(catalog.slide_footprints.get(spec.footprint_key).is_ok());
        }
        for (key, _) in catalog.inductors.iter() {
            assert!(catalog.inductor_footprints.get(key).is_ok(), "{key}");
        }
        for (key, _) in catalog.coupled_inductors.iter() {
            assert!(catalog.coupled_inductor_footprints.get(key).is_ok(), "{key}");
        }
        for (key, _) in catalog.transformers.iter() {
            assert!(catalog.transformer_footprints.get(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn test_every_family_has_series() {
        let catalog = Catalog::load();
        for family in Family::ALL {
            assert!(!catalog.series_keys(family).is_empty(), "{family}");
        }
    }
}
