use crate::config::PlayerConfig;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use locmap_core::player::{HttpTransport, Player, RequestPlan, Transport};
use std::time::Duration;

/// Builds the request plan described by the config
pub fn build_plan(config: &PlayerConfig) -> RequestPlan {
    RequestPlan::new(
        config.base_url.as_str(),
        &config.requests_dir,
        config.steps.as_slice(),
        Duration::from_millis(config.delay_ms),
    )
}

/// Posts every request body to the bot server, in order
pub fn execute_play(config: &PlayerConfig, dry_run: bool) -> Result<()> {
    let plan = build_plan(config);

    if dry_run {
        for step in &plan.steps {
            println!("POST {} <- {}", plan.url_for(step), step.body_path.display());
        }
        return Ok(());
    }

    let transport = HttpTransport::new().context("Failed to create HTTP client")?;
    play_with(transport, &plan)
}

/// Runs the plan over the given transport with a progress bar
pub fn play_with<T: Transport>(transport: T, plan: &RequestPlan) -> Result<()> {
    let pb = ProgressBar::new(plan.steps.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} requests {msg}")
            .expect("Failed to create progress bar template")
            .progress_chars("#>-"),
    );
    pb.set_message("Sending requests...");

    let result = Player::new(transport).run_with_progress(plan, |delivery| {
        pb.set_message(format!("{} -> {}", delivery.step, delivery.status));
        pb.inc(1);
    });

    match result {
        Ok(deliveries) => {
            pb.finish_with_message("Requests sent");
            println!(
                "Replay completed. {} requests sent to {}",
                deliveries.len(),
                plan.base_url
            );
            Ok(())
        }
        Err(err) => {
            pb.abandon_with_message("Replay aborted");
            Err(err.into())
        }
    }
}
