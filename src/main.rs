//! kjs-stager - Free classroom data staging for the campus classroom app
//!
//! Copies the per-building free classroom CSV exports into the app's rawfile
//! directory and writes a campus → buildings mapping next to them.

mod config;
mod constants;
mod error;
mod models;
mod stager;
mod walker;

use config::{CliArgs, StagerConfig, USAGE};
use error::Result;
use std::env;

/// Main entry point for the data stager.
///
/// This program:
/// 1. Resolves paths and the campus mapping (defaults, optional config file, flags)
/// 2. Copies free classroom CSV files of mapped campuses into the target tree
/// 3. Writes building_mapping.json covering every campus in the source tree
/// 4. Prints how many files were copied
fn main() -> Result<()> {
    let cli = CliArgs::parse(env::args().skip(1)).map_err(|err| {
        eprintln!("{}", USAGE);
        err
    })?;

    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = StagerConfig::load(&cli)?;
    println!("Preparing free classroom data...");
    println!("Source root: {}", config.source_root.display());

    let report = stager::stage(&config)?;

    println!("\n✓ Done! Free classroom data prepared.");
    println!(
        "Copied {} CSV files from {} campuses",
        report.copied_files, report.campuses_processed
    );
    println!(
        "Mapping covers {} campuses: {}",
        report.building_mapping.len(),
        report.mapping_file.display()
    );
    for campus in report.building_mapping.campus_names() {
        let buildings = report.building_mapping.get(campus).unwrap_or_default();
        println!("  {}: {} buildings", campus, buildings.len());
    }
    println!("Data stored in: {}", report.target_root.display());

    Ok(())
}
