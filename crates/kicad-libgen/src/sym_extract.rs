//! Symbol names and properties of a `.kicad_sym` library, as CSV
//!
//! Only the direct children of the library root are symbols; the drawing
//! units nested inside them (`_0_1`, `_1_0`, ...) never show up as records.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::manager::balanced_end;

static SYMBOL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\(symbol\s+"((?:[^"\\]|\\.)*)""#).unwrap());

static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\(property\s+"((?:[^"\\]|\\.)*)"\s+"((?:[^"\\]|\\.)*)""#).unwrap()
});

static SUB_UNIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_\d+_\d+$").unwrap());

/// One top-level symbol
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolRecord {
    pub name: String,
    /// Properties in file order
    pub properties: Vec<(String, String)>,
}

impl SymbolRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn unescape(text: &str) -> String {
    text.replace("\\\"", "\"").replace("\\\\", "\\")
}

/// Direct child lists of the list opening at the start of `text`
fn child_lists(text: &str) -> Vec<&str> {
    let mut children = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut index = 1;
    while index < text.len() {
        let ch = text[index..].chars().next().unwrap_or(')');
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else {
            match ch {
                '"' => in_string = true,
                '(' => match balanced_end(text, index) {
                    Some(end) => {
                        children.push(&text[index..end]);
                        index = end;
                        continue;
                    }
                    None => break,
                },
                ')' => break,
                _ => {}
            }
        }
        index += ch.len_utf8();
    }
    children
}

/// Every top-level symbol of a `.kicad_sym` text
pub fn parse_symbols(content: &str) -> Vec<SymbolRecord> {
    let Some(root) = content.find('(').map(|start| &content[start..]) else {
        return Vec::new();
    };

    child_lists(root)
        .into_iter()
        .filter_map(|child| {
            let name = unescape(&SYMBOL_NAME.captures(child)?[1]);
            if SUB_UNIT.is_match(&name) {
                return None;
            }
            let properties = child_lists(child)
                .into_iter()
                .filter_map(|item| {
                    let caps = PROPERTY.captures(item)?;
                    Some((unescape(&caps[1]), unescape(&caps[2])))
                })
                .collect();
            Some(SymbolRecord { name, properties })
        })
        .collect()
}

/// `Symbol Name` followed by the sorted union of property names
pub fn csv_headers(symbols: &[SymbolRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = symbols
        .iter()
        .flat_map(|s| s.properties.iter().map(|(k, _)| k.as_str()))
        .filter(|name| *name != "Symbol Name")
        .collect();
    std::iter::once("Symbol Name")
        .chain(names)
        .map(str::to_string)
        .collect()
}

pub fn write_symbols_csv(path: &Path, symbols: &[SymbolRecord]) -> Result<()> {
    let headers = csv_headers(symbols);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writer
        .write_record(&headers)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    for symbol in symbols {
        let row = std::iter::once(symbol.name.as_str())
            .chain(headers[1..].iter().map(|h| symbol.get(h).unwrap_or("")));
        writer
            .write_record(row)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}

/// Read `input`, write its symbols to `output`; returns the symbol count
pub fn extract_file(input: &Path, output: &Path) -> Result<usize> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read symbol library: {}", input.display()))?;
    let symbols = parse_symbols(&content);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    write_symbols_csv(output, &symbols)?;
    log::debug!("Extracted {} symbols from {}", symbols.len(), input.display());
    Ok(symbols.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{expand, read_rows, ComponentRow};
    use crate::symbol::render_library;
    use crate::{Catalog, Family};
    use tempfile::TempDir;

    const LIBRARY: &str = r#"(kicad_symbol_lib
    (version 20231120)
    (symbol "TP_1"
        (property "Reference" "TP")
        (property "Value" "Test \"point\"")
        (symbol "TP_1_0_1"
            (property "Hidden" "inner")
        )
    )
    (symbol "JP_A"
        (property "Reference" "JP")
        (property "Footprint" "jumpers:JP (open)")
    )
)
"#;

    #[test]
    fn test_parse_skips_drawing_units() {
        let symbols = parse_symbols(LIBRARY);
        let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["TP_1", "JP_A"]);
        assert_eq!(symbols[0].get("Value"), Some("Test \"point\""));
        assert_eq!(symbols[0].get("Hidden"), None);
        assert_eq!(symbols[1].get("Footprint"), Some("jumpers:JP (open)"));
    }

    #[test]
    fn test_headers_are_sorted_union() {
        let symbols = parse_symbols(LIBRARY);
        assert_eq!(
            csv_headers(&symbols),
            vec!["Symbol Name", "Footprint", "Reference", "Value"]
        );
    }

    #[test]
    fn test_missing_cells_are_empty() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("UNITED_TEST.kicad_sym");
        let output = dir.path().join("data").join("UNITED_TEST.csv");
        fs::write(&input, LIBRARY).unwrap();

        assert_eq!(extract_file(&input, &output).unwrap(), 2);
        let rows = read_rows(&output).unwrap();
        assert_eq!(rows[1].get("Symbol Name"), Some("JP_A"));
        assert_eq!(rows[1].get("Value"), Some(""));
    }

    #[test]
    fn test_generated_library_reads_back() {
        let catalog = Catalog::load();
        let key = catalog.series_keys(Family::Diode)[0].to_string();
        let rows: Vec<ComponentRow> = expand(&catalog, Family::Diode, &key)
            .unwrap()
            .iter()
            .map(ComponentRow::from)
            .collect();
        let text = render_library(&catalog, Family::Diode, &rows).unwrap();

        let symbols = parse_symbols(&text);
        assert_eq!(symbols.len(), rows.len());
        assert_eq!(symbols[0].name, rows[0].get("Symbol Name").unwrap());
        assert_eq!(symbols[0].get("MPN"), rows[0].get("MPN"));
    }
}
