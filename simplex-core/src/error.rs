//! Error types for grid sampling and configuration.

use std::io;

use thiserror::Error;

/// An error that can occur while setting up a noise grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// The grid has no samples.
    #[error("Grid size must be at least 1")]
    ZeroSize,
    /// The grid has more samples than can be addressed.
    #[error("Grid size {size} is too large to allocate")]
    TooLarge {
        /// The requested side length.
        size: u32,
    },
    /// The noise scale is NaN or infinite.
    #[error("Noise scale must be finite, got {0}")]
    NonFiniteScale(f32),
    /// The batch length is zero.
    #[error("Batch size must be at least 1")]
    ZeroBatch,
    /// The output buffer does not hold exactly one slot per sample.
    #[error("Buffer holds {actual} samples, grid needs {expected}")]
    BufferLength {
        /// Samples in the grid.
        expected: usize,
        /// Slots in the buffer.
        actual: usize,
    },
}

/// An error that can occur while loading the benchmark config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("Config file error: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid json5.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A config value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}
