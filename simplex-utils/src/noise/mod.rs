//! Noise generation utilities.
//!
//! This module implements 3D `OpenSimplex2` noise evaluated on a
//! body-centered cubic lattice, together with the gradient table it reads.

mod gradients;
mod math;
mod open_simplex2v;

pub use gradients::{
    GRADIENT_STRIDE, GRADIENT_TABLE_LEN, GRADIENT_TABLE_MIN_LEN, GRADIENTS_3D, GradientTable,
};
pub use math::{fast_floor, floor_offset, negative_mask, pow2, pow4};
pub use open_simplex2v::{N_GRADS_3D, N_GRADS_3D_EXPONENT, noise3_fallback};

impl GradientTable {
    /// Samples 3D noise at `(x, y, z)` using this table.
    ///
    /// Equivalent to [`noise3_fallback`] with [`GradientTable::as_slice`].
    #[inline]
    #[must_use]
    pub fn noise3(&self, seed: i64, x: f32, y: f32, z: f32) -> f32 {
        noise3_fallback(seed, x, y, z, self.as_slice())
    }
}
