//! `libgen values`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use kicad_libgen::assembly::csv_values;
use kicad_libgen::units::float_text;

#[derive(Args, Debug)]
pub struct ValuesArgs {
    /// Part CSV with a `Value` column
    #[arg(value_name = "CSV", value_hint = clap::ValueHint::FilePath)]
    pub csv: PathBuf,
}

pub fn execute(args: ValuesArgs) -> Result<()> {
    let values = csv_values(&args.csv)?;
    for value in &values {
        println!("{}", float_text(*value));
    }
    println!("{} values", values.len());
    Ok(())
}
