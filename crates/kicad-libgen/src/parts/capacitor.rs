//! MLCC part numbers

use crate::specs::capacitor::{CapacitorMpn, CapacitorSeries, Characteristic, DIELECTRICS};
use crate::units::significant;
use crate::GenError;

use super::{viewer_link, PartAttrs, PartInfo};

const E12_MULTIPLIERS: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// Snap a value to two significant digits, so `4.7e-7` and `0.47e-6`
/// compare equal
fn normalize(value: f64) -> f64 {
    format!("{value:.1e}").parse().unwrap_or(value)
}

/// Human-readable capacitance.
///
/// Examples:
/// - `1e-7` → `"100 nF"`
/// - `4.7e-6` → `"4.7 µF"`
/// - `2.2e-10` → `"220 pF"`
pub fn format_value(capacitance: f64) -> String {
    let pf = capacitance * 1e12;
    let (value, unit) = if capacitance >= 1e-6 {
        (capacitance / 1e-6, "µF")
    } else if pf >= 1000.0 {
        (pf / 1000.0, "nF")
    } else {
        (pf, "pF")
    };
    if value % 1.0 == 0.0 {
        format!("{} {unit}", value as i64)
    } else {
        format!("{} {unit}", significant(value, 3))
    }
}

/// Three-character capacitance code.
///
/// Examples:
/// - 1 pF → `"1R0"`
/// - 220 pF → `"221"`
/// - 100 nF → `"104"`
pub fn capacitance_code(capacitance: f64) -> String {
    let pf = capacitance * 1e12;
    if pf < 10.0 {
        let whole = pf.trunc();
        return format!("{}R{}", whole as i64, ((pf - whole) * 10.0).trunc() as i64);
    }
    if pf < 1000.0 {
        let mut significant = pf.round_ties_even() as i64;
        if significant % 10 == 0 {
            significant += 1;
        }
        return format!("{significant:03}");
    }

    let sci = format!("{pf:.2e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
    let mantissa: f64 = mantissa.parse().unwrap_or_default();
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let first_two = (mantissa * 10.0).round_ties_even() as i64;
    format!("{first_two}{}", exponent - 1)
}

/// Temperature characteristic code of a Murata part number
pub fn characteristic_code(capacitance: f64, spec: &CapacitorSeries) -> String {
    if spec.base_series.starts_with("CL") {
        return "X7R".to_string();
    }
    match &spec.characteristic {
        Characteristic::None => String::new(),
        Characteristic::Fixed(code) => code.to_string(),
        Characteristic::Thresholds(codes) => {
            let mut sorted = codes.clone();
            sorted.sort_by(|a, b| b.0.total_cmp(&a.0));
            sorted
                .iter()
                .find(|(threshold, _)| capacitance > *threshold)
                .or(codes.last())
                .map(|(_, code)| code.to_string())
                .unwrap_or_default()
        }
    }
}

/// E12 values between `min` and `max` that survive the exclusion and
/// specification lists
pub fn standard_values(
    min: f64,
    max: f64,
    excluded: &[f64],
    specified: Option<&[f64]>,
) -> Vec<f64> {
    let excluded: Vec<f64> = excluded.iter().copied().map(normalize).collect();
    let mut values = Vec::new();
    let mut decade = 1.0e-12;
    while decade <= max {
        for multiplier in E12_MULTIPLIERS {
            let value = normalize(decade * multiplier);
            if value >= min
                && value <= max
                && !excluded.contains(&value)
                && specified.map_or(true, |s| s.contains(&value))
            {
                values.push(value);
            }
        }
        decade *= 10.0;
    }
    values
}

fn datasheet(mpn: &str, spec: &CapacitorSeries) -> String {
    match spec.mpn_scheme {
        CapacitorMpn::Murata => {
            let stem = &mpn[..mpn.len().saturating_sub(1)];
            format!("{}{}-01.pdf", spec.datasheet_url, stem)
        }
        CapacitorMpn::Plain => format!("{}{}", spec.datasheet_url, mpn),
    }
}

fn part(
    capacitance: f64,
    (tolerance_code, tolerance): (&str, &str),
    packaging: &str,
    dielectric: &str,
    spec: &CapacitorSeries,
) -> PartInfo {
    let code = capacitance_code(capacitance);
    let mpn = match spec.mpn_scheme {
        CapacitorMpn::Murata => format!(
            "{}{}{}{}{}",
            spec.base_series,
            code,
            tolerance_code,
            characteristic_code(capacitance, spec),
            packaging
        ),
        CapacitorMpn::Plain => format!("{}{}{}{}", spec.base_series, code, tolerance_code, packaging),
    };
    let value = format_value(capacitance);

    PartInfo {
        symbol_name: format!("{}_{}", spec.reference, mpn),
        reference: "C".to_string(),
        footprint: spec.footprint.to_string(),
        datasheet: datasheet(&mpn, spec),
        description: format!(
            "CAP SMD {} {} {} {} {}",
            value, dielectric, tolerance, spec.case_code_in, spec.voltage_rating
        ),
        manufacturer: spec.manufacturer.to_string(),
        series: spec.base_series.to_string(),
        trustedparts_link: format!("{}/{}", spec.trustedparts_url, mpn),
        value,
        mpn,
        attrs: PartAttrs::Capacitor {
            capacitance,
            dielectric: dielectric.to_string(),
            tolerance: tolerance.to_string(),
            voltage_rating: spec.voltage_rating.to_string(),
            case_code_in: spec.case_code_in.to_string(),
            case_code_mm: spec.case_code_mm.to_string(),
            capacitor_type: spec.capacitor_type.to_string(),
            viewer_link: viewer_link(&format!("C_{}", spec.case_code_in)),
        },
    }
}

/// Every part of a capacitor series, ordered by dielectric then value
pub fn expand(spec: &CapacitorSeries) -> Result<Vec<PartInfo>, GenError> {
    let mut parts = Vec::new();
    for dielectric in DIELECTRICS {
        let Some((min, max)) = spec.value_range(dielectric) else {
            continue;
        };
        let values = standard_values(
            min,
            max,
            &spec.excluded_values,
            spec.specified_values.as_deref(),
        );
        for capacitance in values {
            for &tolerance in spec.tolerances(dielectric) {
                for packaging in &spec.packaging_options {
                    parts.push(part(capacitance, tolerance, packaging, dielectric, spec));
                }
            }
        }
    }

    parts.sort_by(|a, b| {
        let dielectric = |p: &PartInfo| match &p.attrs {
            PartAttrs::Capacitor { dielectric, .. } => dielectric.clone(),
            _ => String::new(),
        };
        dielectric(a)
            .cmp(&dielectric(b))
            .then_with(|| a.sort_value().unwrap_or(0.0).total_cmp(&b.sort_value().unwrap_or(0.0)))
    });
    log::debug!("{}: {} capacitor parts", spec.base_series, parts.len());
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::capacitor;

    fn spec(key: &str) -> CapacitorSeries {
        capacitor::series().get(key).unwrap().clone()
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1e-7), "100 nF");
        assert_eq!(format_value(4.7e-6), "4.7 µF");
        assert_eq!(format_value(2.2e-10), "220 pF");
        assert_eq!(format_value(1e-6), "1 µF");
        assert_eq!(format_value(4.7e-9), "4.7 nF");
    }

    #[test]
    fn test_capacitance_code() {
        assert_eq!(capacitance_code(1e-12), "1R0");
        assert_eq!(capacitance_code(2.2e-10), "221");
        assert_eq!(capacitance_code(4.7e-11), "047");
        assert_eq!(capacitance_code(1e-7), "104");
        assert_eq!(capacitance_code(4.7e-6), "475");
        assert_eq!(capacitance_code(2.2e-5), "226");
    }

    #[test]
    fn test_characteristic_thresholds() {
        let gcm = spec("GCM155R71H");
        assert_eq!(characteristic_code(1e-7, &gcm), "E02");
        assert_eq!(characteristic_code(1e-8, &gcm), "A55");
        assert_eq!(characteristic_code(1e-9, &gcm), "A37");
        assert_eq!(characteristic_code(1e-6, &spec("CL31B")), "X7R");
        assert_eq!(characteristic_code(1e-6, &spec("C1005X7S1A")), "");
    }

    #[test]
    fn test_standard_values() {
        let values = standard_values(1e-9, 1e-8, &[2.2e-9], None);
        assert_eq!(values.len(), 12);
        assert!(!values.contains(&2.2e-9));
        assert_eq!(values[0], 1e-9);
        assert_eq!(*values.last().unwrap(), 1e-8);

        let specified = standard_values(2.2e-6, 4.7e-6, &[], Some(&[2.2e-6, 4.7e-6]));
        assert_eq!(specified, vec![2.2e-6, 4.7e-6]);
    }

    #[test]
    fn test_murata_part_numbers() {
        let parts = expand(&spec("GCM155R71H")).unwrap();
        let first = &parts[0];
        assert_eq!(first.mpn, "GCM155R71H221KA37D");
        assert_eq!(first.symbol_name, "C_GCM155R71H221KA37D");
        assert_eq!(first.value, "220 pF");
        assert_eq!(first.description, "CAP SMD 220 pF X7R 10% 0402 50V");
        assert_eq!(
            first.datasheet,
            "https://search.murata.co.jp/Ceramy/image/img/A01X/G101/ENG/GCM155R71H221KA37-01.pdf"
        );
        assert_eq!(
            first.trustedparts_link,
            "https://www.trustedparts.com/en/search/GCM155R71H221KA37D"
        );
        // two packaging options per value
        assert_eq!(parts[1].mpn, "GCM155R71H221KA37J");
        assert!(parts.iter().all(|p| !p.mpn.starts_with("GCM155R71H273")));
    }

    #[test]
    fn test_plain_part_numbers() {
        let parts = expand(&spec("C1608X7S1A")).unwrap();
        let mpns: Vec<&str> = parts.iter().map(|p| p.mpn.as_str()).collect();
        assert_eq!(mpns, vec!["C1608X7S1A225K080AC", "C1608X7S1A475K080AC"]);
        assert_eq!(
            parts[0].datasheet,
            "https://product.tdk.com/en/search/capacitor/ceramic/mlcc/info?part_no=C1608X7S1A225K080AC"
        );
    }
}
