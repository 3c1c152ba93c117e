//! Part numbers scraped from Würth Elektronik product pages
//!
//! Network failures never propagate: they are logged and the series simply
//! yields no parts.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const TIMEOUT: Duration = Duration::from_secs(30);
const NOT_AVAILABLE: &str = "N/A";

pub const CSV_HEADERS: [&str; 4] = [
    "Part Number",
    "Inductance (uH)",
    "IRP,40K (A)",
    "RDC Max (mOhm)",
];

static ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").unwrap());
/// Data cells only; header cells would shift the column indices
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)").unwrap());

/// One configured product page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSeries {
    pub name: &'static str,
    pub url: &'static str,
    /// Order code pattern; group 1 is the part number
    pub pattern: &'static str,
    pub filename: &'static str,
    pub inductance_col: usize,
    pub current_col: usize,
    pub resistance_col: usize,
}

pub const SERIES: [ScrapeSeries; 3] = [
    ScrapeSeries {
        name: "WE-XHMI",
        url: "https://www.we-online.com/en/components/products/WE-XHMI",
        pattern: r"\b(744393\d+|74439\d+)\b",
        filename: "we_xhmi_parts.csv",
        inductance_col: 5,
        current_col: 6,
        resistance_col: 9,
    },
    ScrapeSeries {
        name: "WE-LHMI",
        url: "https://www.we-online.com/en/components/products/WE-LHMI",
        pattern: r"\b(744373\d+|74437\d+)\b",
        filename: "we_lhmi_parts.csv",
        inductance_col: 5,
        current_col: 6,
        resistance_col: 9,
    },
    ScrapeSeries {
        name: "WE-HCF",
        url: "https://www.we-online.com/en/components/products/WE-HCF",
        pattern: r"\b(74436\d{5}\w*|74437\d{5}\w*)\b",
        filename: "we_hcf_parts.csv",
        inductance_col: 5,
        current_col: 6,
        resistance_col: 9,
    },
];

/// Look up a configured series by name, case-insensitively
pub fn find_series(name: &str) -> Option<&'static ScrapeSeries> {
    SERIES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// One CSV row; field order matches [`CSV_HEADERS`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ScrapedPart {
    #[serde(rename = "Part Number")]
    pub part_number: String,
    #[serde(rename = "Inductance (uH)")]
    pub inductance: String,
    #[serde(rename = "IRP,40K (A)")]
    pub current: String,
    #[serde(rename = "RDC Max (mOhm)")]
    pub resistance: String,
}

/// Text content of an HTML fragment, each text run trimmed and joined
fn text_of(html: &str) -> String {
    TAG.split(html)
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<String>()
        .replace("&nbsp;", "")
        .replace("&amp;", "&")
        .replace("&micro;", "µ")
}

fn number_in(cells: &[String], index: usize) -> String {
    cells
        .get(index)
        .and_then(|cell| NUMBER.captures(cell))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Parts listed on a product page, deduplicated and sorted.
///
/// Table rows need an order code in their first cell. When no row matches,
/// every order code found anywhere in the page text is returned without
/// ratings.
pub fn extract_parts(html: &str, series: &ScrapeSeries) -> Result<Vec<ScrapedPart>> {
    let pattern = Regex::new(series.pattern)
        .with_context(|| format!("Invalid order code pattern for {}", series.name))?;
    let min_cells = series
        .inductance_col
        .max(series.current_col)
        .max(series.resistance_col)
        + 2;

    let mut parts = BTreeMap::new();
    for row in ROW.captures_iter(html) {
        let cells: Vec<String> = CELL
            .captures_iter(&row[1])
            .map(|cell| text_of(&cell[1]))
            .collect();
        if cells.len() < min_cells {
            continue;
        }
        let Some(code) = pattern.captures(&cells[0]) else {
            continue;
        };
        let part_number = code.get(1).map_or(&code[0], |m| m.as_str()).to_string();
        parts.insert(
            part_number.clone(),
            ScrapedPart {
                part_number,
                inductance: number_in(&cells, series.inductance_col),
                current: number_in(&cells, series.current_col),
                resistance: number_in(&cells, series.resistance_col),
            },
        );
    }

    if parts.is_empty() {
        let text = TAG.replace_all(html, " ");
        for caps in pattern.captures_iter(&text) {
            let part_number = caps.get(1).map_or(&caps[0], |m| m.as_str()).to_string();
            parts.insert(
                part_number.clone(),
                ScrapedPart {
                    part_number,
                    inductance: NOT_AVAILABLE.to_string(),
                    current: NOT_AVAILABLE.to_string(),
                    resistance: NOT_AVAILABLE.to_string(),
                },
            );
        }
    }

    Ok(parts.into_values().collect())
}

pub fn fetch_page(url: &str) -> reqwest::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    client.get(url).send()?.error_for_status()?.text()
}

/// Fetch and extract one series; any failure gives an empty list
pub fn scrape(series: &ScrapeSeries) -> Vec<ScrapedPart> {
    log::info!("Fetching {}", series.url);
    let html = match fetch_page(series.url) {
        Ok(html) => html,
        Err(err) => {
            log::error!("Error fetching {}: {err}", series.name);
            return Vec::new();
        }
    };
    match extract_parts(&html, series) {
        Ok(parts) => parts,
        Err(err) => {
            log::error!("Error extracting {}: {err:#}", series.name);
            Vec::new()
        }
    }
}

pub fn write_scraped_csv(path: &Path, parts: &[ScrapedPart]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writer
        .write_record(CSV_HEADERS)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    for part in parts {
        writer
            .serialize(part)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::read_rows;
    use tempfile::TempDir;

    fn row(code: &str, inductance: &str, current: &str, rdc: &str) -> String {
        let mut cells = vec![format!("<a href=\"/p/{code}\">{code}</a>")];
        cells.extend(["SPEC", "x", "x", "x"].map(str::to_string));
        cells.push(format!("{inductance} <span>&micro;H</span>"));
        cells.push(current.to_string());
        cells.extend(["x", "x"].map(str::to_string));
        cells.push(rdc.to_string());
        cells.push("Order".to_string());
        let tds: String = cells.iter().map(|c| format!("<td class=\"c\">{c}</td>")).collect();
        format!("<tr>{tds}</tr>\n")
    }

    #[test]
    fn test_table_rows() {
        let xhmi = find_series("we-xhmi").unwrap();
        let html = format!(
            "<table>{}{}{}<tr><td>short</td></tr></table>",
            row("74439370068", "6.8", "8.5", "12.1"),
            row("744393440015", "0.15", "30", "-"),
            row("74439370068", "6.8", "8.5", "12.1"),
        );
        let parts = extract_parts(&html, xhmi).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].part_number, "744393440015");
        assert_eq!(parts[0].resistance, "N/A");
        assert_eq!(
            parts[1],
            ScrapedPart {
                part_number: "74439370068".to_string(),
                inductance: "6.8".to_string(),
                current: "8.5".to_string(),
                resistance: "12.1".to_string(),
            }
        );
    }

    #[test]
    fn test_header_cells_are_not_data() {
        let xhmi = find_series("WE-XHMI").unwrap();
        let header = row("74439370068", "1.0", "1.0", "1.0")
            .replace("<td", "<th")
            .replace("</td>", "</th>");
        let html = format!("<table>{header}{}</table>", row("744393440015", "0.15", "30", "2.1"));
        let parts = extract_parts(&html, xhmi).unwrap();
        let numbers: Vec<&str> = parts.iter().map(|p| p.part_number.as_str()).collect();
        assert_eq!(numbers, vec!["744393440015"]);
    }

    #[test]
    fn test_fallback_scans_page_text() {
        let hcf = find_series("WE-HCF").unwrap();
        let html = "<p>See 7443630070 and <b>7443631000</b>, also 7443630070.</p>";
        let parts = extract_parts(html, hcf).unwrap();
        let numbers: Vec<&str> = parts.iter().map(|p| p.part_number.as_str()).collect();
        assert_eq!(numbers, vec!["7443630070", "7443631000"]);
        assert!(parts.iter().all(|p| p.inductance == "N/A"));
    }

    #[test]
    fn test_unknown_series() {
        assert!(find_series("WE-PD").is_none());
        assert_eq!(SERIES.len(), 3);
    }

    #[test]
    fn test_csv_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("we_xhmi_parts.csv");
        let parts = vec![ScrapedPart {
            part_number: "74439370068".to_string(),
            inductance: "6.8".to_string(),
            current: "8.5".to_string(),
            resistance: "12.1".to_string(),
        }];
        write_scraped_csv(&path, &parts).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), CSV_HEADERS);
        assert_eq!(rows[0].get("IRP,40K (A)"), Some("8.5"));
    }
}
