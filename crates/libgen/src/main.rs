//! `libgen`: KiCad symbol and footprint libraries from manufacturer series tables

mod extract;
mod footprint_manager;
mod footprints;
mod generate;
mod scrape;
mod values;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(name = "libgen", version)]
#[command(about = "Generate KiCad component libraries from manufacturer series tables", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Root directory for generated files
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        default_value = ".",
        value_hint = clap::ValueHint::DirPath
    )]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate part CSVs, symbol libraries and footprints for a family
    Generate(generate::GenerateArgs),

    /// Write one footprint per row of a part CSV
    Footprints(footprints::FootprintsArgs),

    /// List, print or toggle the 3D model of footprints in a PCB file
    FootprintManager(footprint_manager::FootprintManagerArgs),

    /// Dump the symbols of a .kicad_sym library to CSV
    ExtractSymbols(extract::ExtractArgs),

    /// Scrape part numbers from Würth Elektronik product pages
    Scrape(scrape::ScrapeArgs),

    /// Print the sorted numeric values of a part CSV
    Values(values::ValuesArgs),
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(log::LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "Error:".red());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => generate::execute(args, &cli.output_dir),
        Commands::Footprints(args) => footprints::execute(args, &cli.output_dir),
        Commands::FootprintManager(args) => footprint_manager::execute(args),
        Commands::ExtractSymbols(args) => extract::execute(args),
        Commands::Scrape(args) => scrape::execute(args, &cli.output_dir),
        Commands::Values(args) => values::execute(args),
    }
}
