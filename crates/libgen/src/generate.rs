//! `libgen generate`

use std::path::Path;

use anyhow::Result;
use clap::Args;
use kicad_libgen::assembly::{generate_family, OutputLayout};
use kicad_libgen::report::{print_error, print_info};
use kicad_libgen::{Catalog, Family};

/// A single family or every family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    All,
    Family(Family),
}

fn parse_target(text: &str) -> Result<Target, String> {
    if text.eq_ignore_ascii_case("all") {
        return Ok(Target::All);
    }
    text.parse().map(Target::Family)
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Component family (resistor, capacitor, diode, transistor, connector,
    /// tactile, dip, inductor, coupled_inductor, transformer, slide, display)
    /// or `all`
    #[arg(value_name = "FAMILY", value_parser = parse_target)]
    pub target: Target,
}

pub fn execute(args: GenerateArgs, output_dir: &Path) -> Result<()> {
    let families = match args.target {
        Target::All => Family::ALL.to_vec(),
        Target::Family(family) => vec![family],
    };

    let catalog = Catalog::load();
    let layout = OutputLayout::new(output_dir);
    let mut failed = Vec::new();
    for family in families {
        let report = generate_family(&catalog, &layout, family)?;
        print_info(&format!(
            "\n{}: {} series generated, {} failed, {} parts in the unified library",
            family.library_prefix(),
            report.generated.len(),
            report.failed.len(),
            report.parts
        ));
        failed.extend(report.failed.iter().map(|series| format!("{family}/{series}")));
    }

    if !failed.is_empty() {
        print_error(&format!("Failed series: {}", failed.join(", ")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("ALL").unwrap(), Target::All);
        assert_eq!(parse_target("diodes").unwrap(), Target::Family(Family::Diode));
        assert!(parse_target("inductor").is_err());
    }
}
