//! `libgen footprints`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use kicad_libgen::assembly::{footprints_from_csv, OutputLayout};
use kicad_libgen::report::print_success;
use kicad_libgen::{Catalog, Family};

#[derive(Args, Debug)]
pub struct FootprintsArgs {
    /// Component family of the rows
    #[arg(value_name = "FAMILY")]
    pub family: Family,

    /// Part CSV with a `Symbol Name` column
    #[arg(value_name = "CSV", value_hint = clap::ValueHint::FilePath)]
    pub csv: PathBuf,

    /// Directory for the footprint files (defaults to the family's
    /// footprint library under the output directory)
    #[arg(long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,
}

pub fn execute(args: FootprintsArgs, output_dir: &Path) -> Result<()> {
    let out_dir = match args.out_dir {
        Some(dir) => dir,
        None => OutputLayout::new(output_dir)
            .footprint_dir(args.family)
            .with_context(|| format!("The {} family has no footprint library", args.family))?,
    };

    let written = footprints_from_csv(&Catalog::load(), args.family, &args.csv, &out_dir)?;
    for path in &written {
        log::debug!("Wrote {}", path.display());
    }
    print_success(&format!(
        "Generated {} footprint file(s) in '{}'",
        written.len(),
        out_dir.display()
    ));
    Ok(())
}
