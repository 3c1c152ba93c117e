//! Inductor, ferrite bead, coupled inductor and transformer part numbers
//!
//! Inductances are in µH throughout.

use crate::specs::{CoupledInductorSeries, InductorSeries, TransformerSeries};
use crate::units::num;

use super::{PartAttrs, PartInfo};

/// `470 nH` below 1 µH, `4.7 µH` (one decimal) above
pub fn format_inductance(inductance: f64) -> String {
    if inductance < 1.0 {
        format!("{} nH", (inductance * 1000.0).round())
    } else {
        format!("{inductance:.1} µH")
    }
}

/// Coilcraft value code: two significant digits and a decade digit, then
/// the series suffix.
///
/// Examples:
/// - 0.22 → `221`
/// - 1.0 → `102`
/// - 15.0 → `153`
/// - 100.0 → `104`
pub fn value_code(inductance: f64, suffix: &str) -> String {
    let (digits, decade) = if inductance >= 100.0 {
        (inductance / 10.0, 4)
    } else if inductance >= 10.0 {
        (inductance, 3)
    } else if inductance >= 1.0 {
        (inductance * 10.0, 2)
    } else if inductance >= 0.1 {
        (inductance * 100.0, 1)
    } else {
        (inductance * 1000.0, 0)
    };
    format!("{:02}{decade}{suffix}", digits.round_ties_even() as u32)
}

/// Wurth three-digit code appended to the series: `016` for 0.16 µH, `015`
/// for 1.5 µH, `100` for 10 µH and `101` for 100 µH
pub fn wurth_value_code(inductance: f64) -> String {
    if inductance < 1.0 {
        format!("0{:02}", (inductance * 100.0).round_ties_even() as u32)
    } else if inductance < 10.0 {
        format!("0{:02}", (inductance * 10.0).round_ties_even() as u32)
    } else if inductance < 100.0 {
        format!("{}", (inductance * 10.0).round_ties_even() as u32)
    } else {
        format!("{}1", (inductance / 10.0).round_ties_even() as u32)
    }
}

/// Rating at `index`, or zero with a warning when the table is short
fn rating(values: &[f64], index: usize, inductance: f64, series: &str) -> f64 {
    values.get(index).copied().unwrap_or_else(|| {
        log::warn!(
            "No DC specifications found for inductance {} µH in series {series}",
            num(inductance)
        );
        0.0
    })
}

/// One part per inductance value.
///
/// Coilcraft part numbers carry a value code, Wurth parts a three-digit
/// code that also names the datasheet, and Taiyo Yuden, Murata and ferrite
/// bead series are single parts named after the series.
pub fn expand_inductors(spec: &InductorSeries) -> Vec<PartInfo> {
    let bead = spec.reference == "E";
    spec.inductance_values
        .iter()
        .enumerate()
        .map(|(index, &inductance)| {
            let (mpn, datasheet) = match spec.manufacturer {
                _ if bead => (spec.base_series.to_string(), spec.datasheet.to_string()),
                "Taiyo Yuden" | "Murata" => {
                    (spec.base_series.to_string(), spec.datasheet.to_string())
                }
                "Wurth Elektronik" => {
                    let mpn = format!("{}{}", spec.base_series, wurth_value_code(inductance));
                    let datasheet = format!("{}{mpn}.pdf", spec.datasheet);
                    (mpn, datasheet)
                }
                _ => (
                    format!("{}-{}", spec.base_series, value_code(inductance, spec.value_suffix)),
                    spec.datasheet.to_string(),
                ),
            };

            let formatted = format_inductance(inductance);
            let (value, description) = if bead {
                let ohms = formatted.replace(" µH", " Ω");
                let description = format!(
                    "Ferrite Bead {} {}",
                    formatted.replace(" µH", " Ω @ 100 MHz"),
                    spec.tolerance
                );
                (ohms, description)
            } else {
                let description = format!("INDUCTOR SMD {formatted} {}", spec.tolerance);
                (formatted, description)
            };

            PartInfo {
                symbol_name: format!("{}_{}", spec.reference, mpn),
                reference: spec.reference.to_string(),
                value,
                footprint: spec.footprint(),
                datasheet,
                description,
                manufacturer: spec.manufacturer.to_string(),
                series: spec.base_series.to_string(),
                trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
                mpn,
                attrs: PartAttrs::Inductor {
                    inductance,
                    tolerance: spec.tolerance.to_string(),
                    max_dc_current: rating(&spec.max_dc_current, index, inductance, spec.base_series),
                    max_dc_resistance: rating(
                        &spec.max_dc_resistance,
                        index,
                        inductance,
                        spec.base_series,
                    ),
                },
            }
        })
        .collect()
}

// =============================================================================
// Coupled inductors
// =============================================================================

/// Coupled inductor value code. Coilcraft keeps counting decades up to `5`;
/// other vendors shift the decade digit down by three.
///
/// Examples:
/// - Coilcraft 1000.0 → `105`
/// - Bourns 1000.0 → `102`, 250.0 → `251`, 25.0 → `250`
pub fn coupled_value_code(inductance: f64, suffix: &str, manufacturer: &str) -> String {
    let coilcraft = manufacturer == "Coilcraft";
    let (digits, decade) = if inductance >= 1000.0 {
        (inductance / 100.0, if coilcraft { 5 } else { 2 })
    } else if inductance >= 100.0 {
        (inductance / 10.0, if coilcraft { 4 } else { 1 })
    } else if inductance >= 10.0 {
        (inductance, if coilcraft { 3 } else { 0 })
    } else {
        return value_code(inductance, suffix);
    };
    format!("{:02}{decade}{suffix}", digits.round_ties_even() as u32)
}

/// `500 nH` below 1 µH, otherwise the value as written, e.g. `2.5 µH`, `10 µH`
pub fn format_coupled_inductance(inductance: f64) -> String {
    if inductance < 1.0 {
        format!("{} nH", (inductance * 1000.0).round())
    } else {
        format!("{} µH", num(inductance))
    }
}

pub fn expand_coupled(spec: &CoupledInductorSeries) -> Vec<PartInfo> {
    spec.inductance_values
        .iter()
        .enumerate()
        .map(|(index, &inductance)| {
            let code = coupled_value_code(inductance, spec.value_suffix, spec.manufacturer);
            let mpn = format!("{}-{code}", spec.base_series);
            let value = format_coupled_inductance(inductance);

            PartInfo {
                symbol_name: format!("{}_{}", spec.reference, mpn),
                reference: spec.reference.to_string(),
                footprint: spec.footprint(),
                datasheet: spec.datasheet.clone(),
                description: format!("COUPLED INDUCTOR SMD {value} {}", spec.tolerance),
                manufacturer: spec.manufacturer.to_string(),
                series: spec.base_series.to_string(),
                trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
                value,
                mpn,
                attrs: PartAttrs::CoupledInductor {
                    inductance,
                    tolerance: spec.tolerance.to_string(),
                    max_dc_current: rating(&spec.max_dc_current, index, inductance, spec.base_series),
                    max_dc_resistance: rating(
                        &spec.max_dc_resistance,
                        index,
                        inductance,
                        spec.base_series,
                    ),
                },
            }
        })
        .collect()
}

// =============================================================================
// Transformers
// =============================================================================

/// `name = value` pairs joined with `"; "`, e.g. `pri = 1.1; sec = 1.6`
fn pairs<V: std::fmt::Display>(entries: &[(&str, V)]) -> String {
    entries
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Transformers are single parts; the value column holds the part number
pub fn transformer_part(spec: &TransformerSeries) -> PartInfo {
    let mpn = spec.mpn();
    let inductance = spec.primary_inductance;
    let formatted = if inductance < 1.0 {
        format!("{} nH", (inductance * 1000.0).round())
    } else if inductance.fract() == 0.0 {
        format!("{inductance:.0} µH")
    } else {
        format!("{inductance:.1} µH")
    };
    let resistance: Vec<(&str, String)> = spec
        .max_dc_resistance
        .iter()
        .map(|(name, ohms)| (*name, num(*ohms)))
        .collect();

    PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: spec.reference.to_string(),
        value: mpn.clone(),
        footprint: spec.footprint(),
        datasheet: spec.datasheet.to_string(),
        description: format!("{formatted} {}", spec.tolerance),
        manufacturer: spec.manufacturer.to_string(),
        series: spec.base_series.to_string(),
        trustedparts_link: format!("{}/{}", spec.trustedparts_link, mpn),
        mpn,
        attrs: PartAttrs::Transformer {
            primary_inductance: inductance,
            tolerance: spec.tolerance.to_string(),
            max_dc_resistance: pairs(&resistance),
            turns_ratio: pairs(&spec.turns_ratio),
        },
    }
}
