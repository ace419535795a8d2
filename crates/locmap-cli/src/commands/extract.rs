use crate::config::ExtractConfig;
use crate::reporters::JsonReporter;
use anyhow::{Context, Result};
use locmap_core::LocationsParser;
use std::io::Write;
use tracing::info;

/// Converts the locations text file to JSON, printing it to `out` and saving it to the output file
pub fn execute_extract(config: &ExtractConfig, mut out: impl Write) -> Result<()> {
    let locations = LocationsParser::parse_file(&config.input)
        .with_context(|| format!("Failed to extract {}", config.input.display()))?;

    let reporter = JsonReporter;
    let json = reporter.render(&locations)?;
    writeln!(out, "{}", json).context("Failed to print locations")?;
    reporter.write(&json, &config.output)?;

    let powers: usize = locations.values().map(|record| record.powers.len()).sum();
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        locations = locations.len(),
        powers,
        "Locations extracted"
    );

    Ok(())
}
