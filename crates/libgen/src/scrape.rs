//! `libgen scrape`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use kicad_libgen::report::{print_error, print_success};
use kicad_libgen::scrape::{find_series, scrape, write_scraped_csv, ScrapeSeries, SERIES};

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Series name (WE-XHMI, WE-LHMI, WE-HCF) or `all`
    #[arg(value_name = "SERIES")]
    pub series: String,
}

fn selected(name: &str) -> Result<Vec<&'static ScrapeSeries>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(SERIES.iter().collect());
    }
    let series = find_series(name).with_context(|| {
        format!(
            "Unknown series '{name}' (expected one of: {}, all)",
            SERIES.iter().map(|s| s.name).collect::<Vec<_>>().join(", ")
        )
    })?;
    Ok(vec![series])
}

/// Network failures are reported per series; only filesystem errors fail
/// the command.
pub fn execute(args: ScrapeArgs, output_dir: &Path) -> Result<()> {
    let series_list = selected(&args.series)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    for series in series_list {
        let parts = scrape(series);
        if parts.is_empty() {
            print_error(&format!("No parts found for {}", series.name));
            continue;
        }
        let path = output_dir.join(series.filename);
        write_scraped_csv(&path, &parts)?;
        print_success(&format!(
            "Found {} {} parts, saved to '{}'",
            parts.len(),
            series.name,
            path.display()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_series() {
        assert_eq!(selected("all").unwrap().len(), SERIES.len());
        assert_eq!(selected("we-lhmi").unwrap()[0].name, "WE-LHMI");
        let err = selected("WE-PD").unwrap_err().to_string();
        assert!(err.contains("WE-XHMI, WE-LHMI, WE-HCF"));
    }
}
