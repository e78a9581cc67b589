//! # Simplex Utils
//!
//! Numeric primitives for the simplex workspace: the 3D noise kernel and
//! the gradient table it samples.

pub mod noise;

pub use noise::{GradientTable, noise3_fallback};
