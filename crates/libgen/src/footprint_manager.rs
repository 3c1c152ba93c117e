//! `libgen footprint-manager`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use colored::Colorize;
use kicad_libgen::manager::{hide_model, show_model, PcbFile};
use kicad_libgen::report::{print_info, print_success};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("action").args(["code", "hide", "show"])))]
pub struct FootprintManagerArgs {
    /// Path to the .kicad_pcb file
    #[arg(value_name = "PCB_FILE", value_hint = clap::ValueHint::FilePath)]
    pub pcb_file: PathBuf,

    /// Reference designator of the footprint, e.g. R1
    #[arg(value_name = "REFERENCE")]
    pub reference: Option<String>,

    /// Print the footprint block
    #[arg(long, requires = "reference")]
    pub code: bool,

    /// Hide the footprint's 3D model
    #[arg(long, requires = "reference")]
    pub hide: bool,

    /// Show the footprint's 3D model
    #[arg(long, requires = "reference")]
    pub show: bool,
}

pub fn execute(args: FootprintManagerArgs) -> Result<()> {
    if args.pcb_file.extension().and_then(|ext| ext.to_str()) != Some("kicad_pcb") {
        eprintln!(
            "{} {} does not have a .kicad_pcb extension",
            "Warning:".yellow(),
            args.pcb_file.display()
        );
    }

    let pcb = PcbFile::read(&args.pcb_file)?;
    let Some(reference) = args.reference.as_deref() else {
        println!("Found {} footprints:", pcb.len());
        for reference in pcb.references() {
            println!("  {reference}");
        }
        return Ok(());
    };

    let block = pcb.extract(reference)?;
    let updated = if args.hide {
        hide_model(block)
    } else if args.show {
        show_model(block)
    } else {
        println!("{block}");
        return Ok(());
    };

    if updated == block {
        print_info(&format!("Footprint {reference} left unchanged"));
        return Ok(());
    }
    fs::write(&args.pcb_file, pcb.replace(reference, &updated)?)
        .with_context(|| format!("Failed to write PCB file: {}", args.pcb_file.display()))?;
    print_success(&format!(
        "Updated footprint {reference} in '{}'",
        args.pcb_file.display()
    ));
    Ok(())
}
