//! `libgen extract-symbols`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use kicad_libgen::report::print_success;
use kicad_libgen::sym_extract::extract_file;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Symbol library to read
    #[arg(value_name = "KICAD_SYM", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// CSV to write (defaults to the input path with a .csv extension)
    #[arg(value_name = "CSV", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ExtractArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("csv"));
    let count = extract_file(&args.input, &output)?;
    print_success(&format!(
        "Extracted {count} symbols to '{}'",
        output.display()
    ));
    Ok(())
}
