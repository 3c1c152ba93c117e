//! Number formatting for generated KiCad text and engineering-unit parsing

use regex::Regex;
use std::sync::LazyLock;

use crate::GenError;

/// Plain quantities like "10", "4.7 kΩ", "100nF", "2.2 µH", "100.0 V"
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*([pnuµμmkKMG]?)\s*(?:Ω|[oO]hms?|F|H|V|A)?$").unwrap()
});

/// Shorthand with the prefix as decimal point, like "4k7", "2R2", "1M5"
static SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([RrkKMG])(\d+)$").unwrap());

/// Format a coordinate or dimension the way KiCad files expect it.
///
/// Values are rounded to 6 decimals, trailing zeros are dropped and
/// negative zero prints as `0`.
///
/// Examples:
/// - `num(2.0)` → `"2"`
/// - `num(-0.51)` → `"-0.51"`
/// - `num(0.1 + 0.2)` → `"0.3"`
pub fn num(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Fixed three-decimal formatting used for through-hole and hole positions
pub fn fixed3(value: f64) -> String {
    format!("{:.3}", value + 0.0)
}

/// Round to `digits` significant digits and print without trailing zeros
/// (the `%g` style).
pub fn significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, value);
    match sci.parse::<f64>() {
        Ok(v) => format!("{v}"),
        Err(_) => sci,
    }
}

/// Print a rating the way the catalog CSVs spell it: whole numbers keep a
/// trailing `.0` ("8.0", "100.0"), others use the shortest exact form.
pub fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn prefix_multiplier(prefix: &str) -> f64 {
    match prefix {
        "p" => 1e-12,
        "n" => 1e-9,
        "u" | "µ" | "μ" => 1e-6,
        "m" => 1e-3,
        "k" | "K" => 1e3,
        "M" => 1e6,
        "G" => 1e9,
        _ => 1.0,
    }
}

/// Parse an engineering-unit string into its base-unit value.
///
/// Examples:
/// - `"10k"` → 10000
/// - `"4k7"` → 4700
/// - `"4.7 kΩ"` → 4700
/// - `"100 nF"` → 1e-7
///
/// Anything else fails with [`GenError::MalformedValue`] carrying the input.
pub fn parse_quantity(text: &str) -> Result<f64, GenError> {
    let trimmed = text.trim();

    if let Some(caps) = SHORTHAND.captures(trimmed) {
        let whole = &caps[1];
        let prefix = &caps[2];
        let decimal = &caps[3];
        let base: f64 = format!("{whole}.{decimal}")
            .parse()
            .map_err(|_| GenError::MalformedValue(text.to_string()))?;
        let multiplier = match prefix {
            "R" | "r" => 1.0,
            other => prefix_multiplier(other),
        };
        return Ok(base * multiplier);
    }

    if let Some(caps) = QUANTITY.captures(trimmed) {
        let base: f64 = caps[1]
            .parse()
            .map_err(|_| GenError::MalformedValue(text.to_string()))?;
        let prefix = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        return Ok(base * prefix_multiplier(prefix));
    }

    Err(GenError::MalformedValue(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_num() {
        assert_eq!(num(2.0), "2");
        assert_eq!(num(-0.51), "-0.51");
        assert_eq!(num(0.1 + 0.2), "0.3");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-1.27 * 4.0), "-5.08");
        assert_eq!(num(0.00635), "0.00635");
    }

    #[test]
    fn test_fixed3() {
        assert_eq!(fixed3(-2.54), "-2.540");
        assert_eq!(fixed3(-0.0), "0.000");
        assert_eq!(fixed3(1.905), "1.905");
    }

    #[test]
    fn test_significant() {
        assert_eq!(significant(4.7, 3), "4.7");
        assert_eq!(significant(1000.0, 6), "1000");
        assert_eq!(significant(2.2000000001, 3), "2.2");
        assert_eq!(significant(12.34, 3), "12.3");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(float_text(8.0), "8.0");
        assert_eq!(float_text(-60.0), "-60.0");
        assert_eq!(float_text(0.17), "0.17");
        assert_eq!(float_text(2.4), "2.4");
    }

    #[test]
    fn test_parse_quantity() {
        assert!(close(parse_quantity("10k").unwrap(), 10_000.0));
        assert!(close(parse_quantity("4k7").unwrap(), 4_700.0));
        assert!(close(parse_quantity("2R2").unwrap(), 2.2));
        assert!(close(parse_quantity("4.7 kΩ").unwrap(), 4_700.0));
        assert!(close(parse_quantity("1 MΩ").unwrap(), 1e6));
        assert!(close(parse_quantity("100 nF").unwrap(), 1e-7));
        assert!(close(parse_quantity("2.2 µF").unwrap(), 2.2e-6));
        assert!(close(parse_quantity("100.0 V").unwrap(), 100.0));
        assert!(close(parse_quantity("  47 ").unwrap(), 47.0));
    }

    #[test]
    fn test_parse_quantity_malformed() {
        let err = parse_quantity("ten ohms").unwrap_err();
        assert!(err.to_string().contains("ten ohms"));
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("1.2.3k").is_err());
    }
}
