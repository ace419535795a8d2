use crate::config::VisualizeConfig;
use anyhow::{Context, Result};
use locmap_core::codec;
use locmap_core::plot::MarkerKind;
use locmap_core::ScatterPlot;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Renders the extracted locations as an SVG scatter plot
pub fn execute_visualize(config: &VisualizeConfig, open: bool) -> Result<()> {
    let locations = codec::read_locations(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    let plot = ScatterPlot::from_locations(&locations)?;
    let svg = plot.render_svg(&config.style);

    codec::write_file(&config.output, &svg)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!(
        output = %config.output.display(),
        tokens = plot.count(MarkerKind::Token),
        powers = plot.count(MarkerKind::Power),
        "Scatter plot rendered"
    );
    println!("Plot saved to {}", config.output.display());

    if open {
        open_in_viewer(&config.output)?;
    }

    Ok(())
}

/// Hands the file to the platform's default opener without waiting for it
fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    match command.arg(path).spawn() {
        Ok(_) => Ok(()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to launch viewer");
            Err(err).with_context(|| format!("Failed to open {}", path.display()))
        }
    }
}
