//! Times noise grid generation using the settings in a json5 config file.

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use simplex::throughput::{self, Summary};
use simplex::{DEFAULT_CONFIG_PATH, logger};
use simplex_core::BenchConfig;
use simplex_utils::GradientTable;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init()?;

    let config_path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = BenchConfig::load_or_create(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    info!(
        "Sampling {}³ grid ({} samples), scale {}, seed {}, batch {}, parallel {}",
        config.grid_size,
        config.sample_count(),
        config.noise_scale,
        config.seed,
        config.batch_size,
        config.parallel
    );

    let start = Instant::now();
    let gradients = GradientTable::new();
    info!(
        "Built gradient table in {:.3} ms",
        start.elapsed().as_secs_f64() * 1_000.0
    );

    throughput::warm(&config, &gradients).context("Warm-up generation failed")?;
    let runs = throughput::run(&config, &gradients).context("Timed generation failed")?;
    if let Some(summary) = Summary::from_runs(&runs) {
        info!("{summary}");
    }
    Ok(())
}
