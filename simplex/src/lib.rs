//! # Simplex
//!
//! Benchmark driver for the simplex noise workspace.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]

/// Logging setup.
pub mod logger;
/// Timed grid generation.
pub mod throughput;

/// Config file used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "simplex_config.json5";
