//! Benchmark configuration loaded from a json5 file.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::ConfigError;
use crate::generator::DEFAULT_BATCH_SIZE;
use crate::grid::MAX_GRID_SIZE;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/simplex_config.json5");

/// Settings for a benchmark session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Timed generations after the warm-up run.
    pub generations: u32,
    /// Samples per grid side.
    pub grid_size: u32,
    /// Multiplier applied to grid coordinates.
    pub noise_scale: f32,
    /// Noise seed.
    pub seed: i64,
    /// Samples per rayon task.
    pub batch_size: usize,
    /// Whether to fill grids on the rayon pool.
    pub parallel: bool,
}

impl BenchConfig {
    /// Reads the config at `path`, or writes the bundled default there and
    /// returns it when the file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let config_str = fs::read_to_string(path)?;
            serde_json5::from_str(&config_str)?
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Wrote default config to {}", path.display());
            Self::default()
        };

        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.generations == 0 {
            return Err("Generations must be at least 1");
        }
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err("Grid size must be in range 1..1024");
        }
        if !self.noise_scale.is_finite() {
            return Err("Noise scale must be finite");
        }
        if self.batch_size == 0 {
            return Err("Batch size must be at least 1");
        }
        Ok(())
    }

    /// Samples in one generated grid.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        let n = self.grid_size as usize;
        n * n * n
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            grid_size: 64,
            noise_scale: 0.1,
            seed: 123_456_789,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: true,
        }
    }
}
