//! # Simplex Core
//!
//! Grid sampling on top of the noise kernel: index layout, output buffers,
//! parallel dispatch and the benchmark config.

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;

pub use config::BenchConfig;
pub use error::{ConfigError, GridError};
pub use generator::{DEFAULT_BATCH_SIZE, NoiseGenerator};
pub use grid::{GridIndex, NoiseGrid};
