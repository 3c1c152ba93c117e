//! Chip resistor part numbers

use crate::specs::resistor::{ResistanceCode, ResistorSeries, ValueSeries};
use crate::units::{float_text, round_to, significant};
use crate::GenError;

use super::{viewer_link, PartAttrs, PartInfo};

/// Decade multipliers applied to every base value. `0` is kept from the
/// catalog tables and never survives the range check.
const MULTIPLIERS: [f64; 12] = [1e-4, 1e-3, 1e-2, 0.1, 0.0, 1.0, 10.0, 100.0, 1e3, 1e4, 1e5, 1e6];

/// Human-readable resistance.
///
/// Examples:
/// - `4700.0` → `"4.7 kΩ"`
/// - `1e6` → `"1 MΩ"`
/// - `49.9` → `"49.9 Ω"`
pub fn format_value(resistance: f64) -> String {
    if resistance >= 1e6 {
        format!("{} MΩ", significant(resistance / 1e6, 6))
    } else if resistance >= 1e3 {
        format!("{} kΩ", significant(resistance / 1e3, 6))
    } else {
        format!("{} Ω", significant(resistance, 6))
    }
}

/// Round to the nearest integer; ties go to the even neighbour
fn round_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// `value` rounded and zero-padded to two digits, trailing zeros stripped
fn two_digit_decimal(value: f64) -> String {
    let text = format!("{:02.0}", value.round_ties_even());
    text.trim_end_matches('0').to_string()
}

fn yageo_code(r: f64) -> String {
    if r < 1e3 {
        let whole = r.trunc();
        format!("{}R{}", whole as i64, two_digit_decimal((r - whole) * 100.0))
    } else if r < 1e6 {
        let whole = (r / 1e3).trunc() as i64;
        format!("{whole}K{}", two_digit_decimal((r % 1e3) / 10.0))
    } else {
        let whole = (r / 1e6).trunc() as i64;
        format!("{whole}M{}", two_digit_decimal((r % 1e6) / 1e4))
    }
}

fn decade_code(r: f64) -> String {
    let power = r.log10().trunc() as i32 - 1;
    let significant = (r / 10f64.powi(power)).trunc() as i64;
    format!("{significant}{power}")
}

fn panasonic_code(r: f64) -> String {
    if r < 100.0 {
        let whole = r.trunc();
        return format!("{:02}R{}", whole as i64, round_even((r - whole) * 10.0));
    }
    let (significant, multiplier) = if r < 1e3 {
        (round_even(r), 0)
    } else if r < 1e4 {
        (round_even(r / 10.0), 1)
    } else if r < 1e5 {
        (round_even(r / 100.0), 2)
    } else if r < 1e6 {
        (round_even(r / 1e3), 3)
    } else {
        (round_even(r / 1e4), 4)
    };
    format!("{significant:03}{multiplier}")
}

fn two_digit_code(r: f64) -> String {
    if r == 0.0 {
        return "R00".to_string();
    }
    let whole = r.trunc();
    if r < 1.0 {
        return format!("R{}", round_even((r - whole) * 100.0));
    }
    if r < 10.0 {
        return format!("{}R{}", whole as i64, round_even((r - whole) * 10.0));
    }
    if r < 100.0 {
        return format!("{}{}", whole as i64, round_even((r - whole) * 10.0));
    }
    let (significant, multiplier) = if r < 1e3 {
        (round_even(r / 10.0), 1)
    } else if r < 1e4 {
        (round_even(r / 100.0), 2)
    } else if r < 1e5 {
        (round_even(r / 1e3), 3)
    } else if r < 1e6 {
        (round_even(r / 1e4), 4)
    } else {
        (round_even(r / 1e5), 5)
    };
    format!("{significant:02}{multiplier}")
}

fn precision_code(r: f64) -> String {
    if r < 100.0 {
        let whole = r.trunc();
        let decimal = round_even((r - whole) * 10.0);
        let marker = if decimal != 0 { "R" } else { "" };
        return format!("{:02}{marker}{decimal}", whole as i64);
    }
    // A zero third digit moves one more digit into the multiplier
    let third_is_zero = float_text(r).chars().nth(2) == Some('0');
    for (i, upper) in [1e3, 1e4, 1e5, 1e6].into_iter().enumerate() {
        if r < upper {
            let i = i as i32;
            let (significant, multiplier) = if third_is_zero {
                (round_even(r / 10f64.powi(i + 1)), i + 1)
            } else {
                (round_even(r / 10f64.powi(i)), i)
            };
            return format!("{significant:02}{multiplier}");
        }
    }
    if third_is_zero {
        format!("{:02}5", round_even(r / 1e5))
    } else {
        format!("{:02}4", round_even(r / 1e4))
    }
}

/// Resistance part of the MPN.
///
/// Examples:
/// - Panasonic `ERJ-2RKF`, 10 kΩ → `"1002"`
/// - Yageo, 4.7 kΩ → `"4K7"`
/// - Murata NTC, 10 kΩ → `"103"`
pub fn resistance_code(resistance: f64, spec: &ResistorSeries) -> Result<String, GenError> {
    let (min, max) = spec.resistance_range;
    if resistance < min || resistance > max {
        return Err(GenError::ValueOutOfRange {
            value: resistance,
            min,
            max,
        });
    }
    Ok(match spec.code {
        ResistanceCode::Yageo => yageo_code(resistance),
        ResistanceCode::Decade => decade_code(resistance),
        ResistanceCode::Panasonic => panasonic_code(resistance),
        ResistanceCode::PanasonicTwoDigit => two_digit_code(resistance),
        ResistanceCode::PanasonicPrecision => precision_code(resistance),
    })
}

fn part(resistance: f64, tolerance: &str, spec: &ResistorSeries) -> Result<PartInfo, GenError> {
    let code = resistance_code(resistance, spec)?;
    let mpn = format!("{}{}{}", spec.mpn_prefix, code, spec.mpn_suffix);
    let value = format_value(resistance);
    let datasheet = if spec.manufacturer == "Yageo" {
        format!("{}{}", spec.datasheet, mpn)
    } else {
        spec.datasheet.to_string()
    };

    Ok(PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: spec.reference.to_string(),
        footprint: spec.footprint.clone(),
        datasheet,
        description: format!(
            "RES SMD {} {} {} {}",
            value, tolerance, spec.case_code_in, spec.voltage_rating
        ),
        manufacturer: spec.manufacturer.to_string(),
        trustedparts_link: format!("{}{}", spec.trustedparts_url, mpn),
        series: spec.mpn_prefix.to_string(),
        value,
        mpn,
        attrs: PartAttrs::Resistor {
            resistance,
            tolerance: tolerance.to_string(),
            temperature_coefficient: spec.temperature_coefficient.to_string(),
            voltage_rating: spec.voltage_rating.to_string(),
            case_code_in: spec.case_code_in.to_string(),
            case_code_mm: spec.case_code_mm.to_string(),
            viewer_link: viewer_link(&format!("{}_{}", spec.reference, spec.case_code_in)),
            component_type: spec.component_type.to_string(),
        },
    })
}

/// Standard values of `series` that pass the range and list filters
fn candidate_values(series: ValueSeries, spec: &ResistorSeries) -> impl Iterator<Item = f64> + '_ {
    let (min, max) = spec.resistance_range;
    series
        .base_values()
        .iter()
        .flat_map(|base| MULTIPLIERS.iter().map(move |m| round_to(base * m, 3)))
        .filter(move |r| *r >= min && *r <= max)
        .filter(move |r| {
            spec.excluded_values
                .as_ref()
                .map_or(true, |excluded| !excluded.contains(r))
        })
        .filter(move |r| {
            spec.specified_values
                .as_ref()
                .map_or(true, |specified| specified.contains(r))
        })
}

/// Every part of a resistor series, one per distinct MPN, sorted by value
pub fn expand(spec: &ResistorSeries) -> Result<Vec<PartInfo>, GenError> {
    let mut parts = Vec::new();
    for (series, tolerance) in &spec.tolerances {
        for resistance in candidate_values(*series, spec) {
            parts.push(part(resistance, tolerance, spec)?);
        }
    }

    if let Some(extra) = &spec.extra_values {
        let tolerance = spec
            .tolerances
            .iter()
            .find(|(series, _)| *series == ValueSeries::E96)
            .or_else(|| spec.tolerances.first())
            .map(|(_, tolerance)| *tolerance)
            .unwrap_or_default();
        let (min, max) = spec.resistance_range;
        for &resistance in extra.iter().filter(|r| **r >= min && **r <= max) {
            parts.push(part(resistance, tolerance, spec)?);
        }
    }

    // First position wins, last occurrence provides the data
    let mut unique: Vec<PartInfo> = Vec::with_capacity(parts.len());
    for part in parts {
        match unique.iter_mut().find(|p| p.mpn == part.mpn) {
            Some(existing) => *existing = part,
            None => unique.push(part),
        }
    }
    super::sort_by_value(&mut unique);
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::resistor;

    fn spec(key: &str) -> ResistorSeries {
        resistor::series().get(key).unwrap().clone()
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(4700.0), "4.7 kΩ");
        assert_eq!(format_value(1e6), "1 MΩ");
        assert_eq!(format_value(49.9), "49.9 Ω");
        assert_eq!(format_value(10.0), "10 Ω");
        assert_eq!(format_value(102_000.0), "102 kΩ");
    }

    #[test]
    fn test_panasonic_codes() {
        let erj = spec("ERJ-2RKF");
        assert_eq!(resistance_code(10.0, &erj).unwrap(), "10R0");
        assert_eq!(resistance_code(49.9, &erj).unwrap(), "49R9");
        assert_eq!(resistance_code(100.0, &erj).unwrap(), "1000");
        assert_eq!(resistance_code(1000.0, &erj).unwrap(), "1001");
        assert_eq!(resistance_code(10_000.0, &erj).unwrap(), "1002");
        assert_eq!(resistance_code(4_990.0, &erj).unwrap(), "4991");
        assert_eq!(resistance_code(1e6, &erj).unwrap(), "1004");
    }

    #[test]
    fn test_two_digit_codes() {
        let erj = spec("ERJ-2GEJ");
        assert_eq!(resistance_code(1.0, &erj).unwrap(), "1R0");
        assert_eq!(resistance_code(2.2, &erj).unwrap(), "2R2");
        assert_eq!(resistance_code(47.0, &erj).unwrap(), "470");
        assert_eq!(resistance_code(100.0, &erj).unwrap(), "101");
        assert_eq!(resistance_code(4_700.0, &erj).unwrap(), "472");
        assert_eq!(resistance_code(1e6, &erj).unwrap(), "105");
    }

    #[test]
    fn test_precision_codes() {
        let era = spec("ERA-2AEB");
        assert_eq!(resistance_code(49.9, &era).unwrap(), "49R9");
        assert_eq!(resistance_code(51.0, &era).unwrap(), "510");
        assert_eq!(resistance_code(102.0, &era).unwrap(), "1020");
        assert_eq!(resistance_code(1000.0, &era).unwrap(), "102");
        assert_eq!(resistance_code(4_990.0, &era).unwrap(), "4991");
    }

    #[test]
    fn test_yageo_codes() {
        let rc = spec("RC0402FR-07");
        assert_eq!(resistance_code(1.0, &rc).unwrap(), "1R");
        assert_eq!(resistance_code(4.7, &rc).unwrap(), "4R7");
        assert_eq!(resistance_code(49.9, &rc).unwrap(), "49R9");
        assert_eq!(resistance_code(4_700.0, &rc).unwrap(), "4K7");
        assert_eq!(resistance_code(10_000.0, &rc).unwrap(), "10K");
        assert_eq!(resistance_code(2_210_000.0, &rc).unwrap(), "2M21");
    }

    #[test]
    fn test_decade_codes() {
        let ncp = spec("NCP15XH");
        assert_eq!(resistance_code(10_000.0, &ncp).unwrap(), "103");
        let chv = spec("CHV2010-JW-");
        assert_eq!(resistance_code(4_700_000.0, &chv).unwrap(), "475");
    }

    #[test]
    fn test_out_of_range_value() {
        let erj = spec("ERJ-2RKF");
        let err = resistance_code(2e6, &erj).unwrap_err();
        assert!(matches!(err, GenError::ValueOutOfRange { max, .. } if max == 1e6));
    }

    #[test]
    fn test_series_expansion() {
        let parts = expand(&spec("ERJ-2RKF")).unwrap();
        let first = &parts[0];
        assert_eq!(first.mpn, "ERJ-2RKF10R0X");
        assert_eq!(first.symbol_name, "R_ERJ-2RKF10R0X");
        assert_eq!(first.value, "10 Ω");
        assert_eq!(first.description, "RES SMD 10 Ω 1% 0402 50V");
        assert_eq!(first.footprint, "resistor_footprints:R_0402_1005Metric");
        assert_eq!(
            first.trustedparts_link,
            "https://www.trustedparts.com/en/search/ERJ-2RKF10R0X"
        );
        assert_eq!(parts.last().unwrap().mpn, "ERJ-2RKF1004X");

        let mut mpns: Vec<&str> = parts.iter().map(|p| p.mpn.as_str()).collect();
        let total = mpns.len();
        mpns.sort_unstable();
        mpns.dedup();
        assert_eq!(mpns.len(), total);

        let values: Vec<f64> = parts.iter().filter_map(PartInfo::sort_value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_specified_and_extra_values() {
        let chv = expand(&spec("CHV2010-JW-")).unwrap();
        let mpns: Vec<&str> = chv.iter().map(|p| p.mpn.as_str()).collect();
        assert_eq!(mpns, vec!["CHV2010-JW-104ELF", "CHV2010-JW-475ELF", "CHV2010-JW-516ELF"]);

        let rc = expand(&spec("RC0402FR-07")).unwrap();
        let extra = rc.iter().find(|p| p.mpn == "RC0402FR-072K71L").unwrap();
        assert_eq!(extra.value, "2.71 kΩ");
        assert_eq!(
            extra.datasheet,
            "https://www.yageo.com/en/ProductSearch/PartNumberSearch?part_number=RC0402FR-072K71L"
        );
    }

    #[test]
    fn test_thermistor_series() {
        let parts = expand(&spec("NCP15XH")).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].symbol_name, "RT_NCP15XH103F03RC");
        assert!(matches!(
            &parts[0].attrs,
            PartAttrs::Resistor { component_type, viewer_link, .. }
                if component_type == "Thermistor" && viewer_link.ends_with("RT_0402_RT.step")
        ));
    }
}
