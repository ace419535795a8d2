use anyhow::{Context, Result};
use locmap_core::codec;
use locmap_core::LocationMap;
use std::path::Path;

/// Writes the extracted locations as pretty-printed JSON
pub struct JsonReporter;

impl JsonReporter {
    /// Renders the JSON document without writing it
    pub fn render(&self, locations: &LocationMap) -> Result<String> {
        codec::to_json_pretty(locations).context("Failed to serialize locations")
    }

    /// Writes the document to `output_path`, replacing any previous content
    pub fn write(&self, json: &str, output_path: &Path) -> Result<()> {
        codec::write_file(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))
    }
}
