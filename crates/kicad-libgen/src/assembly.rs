//! File assembly: per-series CSV, symbol and footprint files plus the
//! unified family library
//!
//! A series that fails is reported and skipped; the remaining series still
//! run. The unified files are written only after every series of the family
//! has been processed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::footprint::{self, footprint_name};
use crate::parts::{self, read_rows, sort_by_value, write_parts_csv, ComponentRow, PartInfo};
use crate::report::{print_error, print_info, print_success};
use crate::symbol::render_library;
use crate::units::parse_quantity;
use crate::{Catalog, Family, GenError};

/// Directory layout under the output root
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Part-number CSVs, per series and unified
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("app").join("data")
    }

    pub fn series_symbol_dir(&self) -> PathBuf {
        self.root.join("series_kicad_sym")
    }

    /// Unified symbol libraries
    pub fn symbol_dir(&self) -> PathBuf {
        self.root.join("symbols")
    }

    pub fn footprint_dir(&self, family: Family) -> Option<PathBuf> {
        family
            .footprint_dir()
            .map(|dir| self.root.join("footprints").join(dir))
    }

    pub fn series_csv(&self, series: &str) -> PathBuf {
        self.data_dir().join(format!("{series}_part_numbers.csv"))
    }

    pub fn series_symbol(&self, family: Family, series: &str) -> PathBuf {
        self.series_symbol_dir()
            .join(format!("{}_{series}_DATA_BASE.kicad_sym", family.library_prefix()))
    }

    pub fn unified_csv(&self, family: Family) -> PathBuf {
        self.data_dir()
            .join(format!("UNITED_{}_DATA_BASE.csv", family.library_prefix()))
    }

    pub fn unified_symbol(&self, family: Family) -> PathBuf {
        self.symbol_dir()
            .join(format!("UNITED_{}_DATA_BASE.kicad_sym", family.library_prefix()))
    }

    /// Create every directory `family` writes into
    pub fn ensure(&self, family: Family) -> Result<()> {
        let mut dirs = vec![self.data_dir(), self.series_symbol_dir(), self.symbol_dir()];
        dirs.extend(self.footprint_dir(family));
        for dir in dirs {
            ensure_dir(&dir)?;
        }
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Outcome of one `generate` run over a family
#[derive(Debug, Default)]
pub struct FamilyReport {
    pub generated: Vec<String>,
    pub failed: Vec<String>,
    /// Parts written to the unified CSV
    pub parts: usize,
}

// =============================================================================
// Per-series generation
// =============================================================================

/// Expand a series, dropping duplicate part numbers. Resistors, capacitors
/// and inductors come out sorted by value.
pub fn series_parts(catalog: &Catalog, family: Family, series: &str) -> Result<Vec<PartInfo>, GenError> {
    let mut parts: Vec<PartInfo> = parts::expand(catalog, family, series)?
        .into_iter()
        .unique_by(|part| part.mpn.clone())
        .collect();
    if matches!(family, Family::Resistor | Family::Capacitor | Family::Inductor) {
        sort_by_value(&mut parts);
    }
    Ok(parts)
}

/// Write one `.kicad_mod` per distinct footprint among `rows`.
///
/// Files are named after the library-local footprint name, so parts that
/// share a package share one file.
pub fn write_package_footprints(
    catalog: &Catalog,
    family: Family,
    rows: &[ComponentRow],
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for row in rows.iter().unique_by(|row| row.get("Footprint").map(str::to_string)) {
        let name = footprint_name(row.require("Footprint")?);
        let text = footprint::render(catalog, family, row)?;
        let path = dir.join(format!("{name}.kicad_mod"));
        write_file(&path, &text)?;
        written.push(path);
    }
    Ok(written)
}

/// CSV, symbol library and footprints of one series
pub fn generate_series(
    catalog: &Catalog,
    layout: &OutputLayout,
    family: Family,
    series: &str,
) -> Result<Vec<PartInfo>> {
    let parts = series_parts(catalog, family, series)?;

    let csv_path = layout.series_csv(series);
    write_parts_csv(&csv_path, family, &parts)?;
    print_success(&format!(
        "Generated {} part numbers in '{}'",
        parts.len(),
        csv_path.display()
    ));

    let rows = read_rows(&csv_path)?;
    let symbol_path = layout.series_symbol(family, series);
    write_file(&symbol_path, &render_library(catalog, family, &rows)?)?;
    print_success(&format!(
        "KiCad symbol file '{}' generated successfully.",
        symbol_path.display()
    ));

    if let Some(dir) = layout.footprint_dir(family) {
        let written = write_package_footprints(catalog, family, &rows, &dir)?;
        for path in &written {
            log::debug!("Wrote {}", path.display());
        }
        print_success(&format!(
            "Generated {} footprint file(s) in '{}'",
            written.len(),
            dir.display()
        ));
    }

    Ok(parts)
}

/// Unified CSV and symbol library over every part of a family
pub fn generate_unified(
    catalog: &Catalog,
    layout: &OutputLayout,
    family: Family,
    mut parts: Vec<PartInfo>,
) -> Result<usize> {
    if matches!(family, Family::Resistor | Family::Capacitor | Family::Inductor) {
        sort_by_value(&mut parts);
    }

    let csv_path = layout.unified_csv(family);
    write_parts_csv(&csv_path, family, &parts)?;
    print_success(&format!(
        "Generated unified CSV file with {} part numbers at {}",
        parts.len(),
        csv_path.display()
    ));

    let rows = read_rows(&csv_path)?;
    let symbol_path = layout.unified_symbol(family);
    write_file(&symbol_path, &render_library(catalog, family, &rows)?)?;
    print_success(&format!(
        "Unified KiCad symbol file '{}' generated successfully.",
        symbol_path.display()
    ));
    Ok(parts.len())
}

/// Every series of `family`, then the unified files
pub fn generate_family(catalog: &Catalog, layout: &OutputLayout, family: Family) -> Result<FamilyReport> {
    layout.ensure(family)?;

    let mut report = FamilyReport::default();
    let mut unified = Vec::new();
    for series in catalog.series_keys(family) {
        print_info(&format!("\nGenerating files for {series} series:"));
        match generate_series(catalog, layout, family, series) {
            Ok(parts) => {
                unified.extend(parts);
                report.generated.push(series.to_string());
            }
            Err(err) => {
                print_error(&format!("Error generating {series}: {err:#}"));
                report.failed.push(series.to_string());
            }
        }
    }

    if unified.is_empty() {
        print_info(&format!("\nNo {family} parts generated, skipping unified files"));
        return Ok(report);
    }
    print_info("\nGenerating unified files:");
    report.parts = generate_unified(catalog, layout, family, unified)?;
    Ok(report)
}

// =============================================================================
// CSV-driven commands
// =============================================================================

/// One `<Symbol Name>.kicad_mod` per row of a part CSV
pub fn footprints_from_csv(
    catalog: &Catalog,
    family: Family,
    csv_path: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let rows = read_rows(csv_path)?;
    ensure_dir(out_dir)?;

    let mut written = Vec::new();
    for footprint in footprint::render_rows(catalog, family, &rows)? {
        let path = out_dir.join(format!("{}.kicad_mod", footprint.name));
        write_file(&path, &footprint.text)?;
        written.push(path);
    }
    Ok(written)
}

/// Numeric `Value` cells of a part CSV, ascending
pub fn csv_values(csv_path: &Path) -> Result<Vec<f64>> {
    let rows = read_rows(csv_path)?;
    let mut values = rows
        .iter()
        .map(|row| -> Result<f64> { Ok(parse_quantity(row.require("Value")?)?) })
        .collect::<Result<Vec<f64>>>()?;
    values.sort_by(f64::total_cmp);
    Ok(values)
}
