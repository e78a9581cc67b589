//! Gradient lookup table for 3D `OpenSimplex2` noise.
//!
//! The table is the reference `OpenSimplex2S` gradient set: 48 directions
//! scaled by the inverse of the 3D normalizer, padded to four floats per
//! entry and repeated until all [`N_GRADS_3D`] entries are filled.
//!
//! Build a [`GradientTable`] once and pass it to every sampling call.
//! [`GRADIENTS_3D`] is an opt-in shared instance for callers that have no
//! natural owner for the table.

use std::ops::Deref;
use std::sync::LazyLock;

use super::open_simplex2v::N_GRADS_3D;

/// Floats stored per gradient entry (x, y, z, padding).
pub const GRADIENT_STRIDE: usize = 4;

/// Total length of the flat gradient buffer.
pub const GRADIENT_TABLE_LEN: usize = N_GRADS_3D * GRADIENT_STRIDE;

/// Smallest slice the noise kernel can safely index (256 entries x 3).
pub const GRADIENT_TABLE_MIN_LEN: usize = N_GRADS_3D * 3;

/// Divisor that brings the summed contributions into roughly `[-1, 1]`.
const NORMALIZER_3D: f64 = 0.278_192_611_752_718_6;

const A: f64 = 2.224_744_871_39;
const B: f64 = 3.086_266_468_797_201_7;
const C: f64 = 1.172_151_342_246_497_8;

/// Unnormalized base gradients, in reference order.
#[rustfmt::skip]
const BASE_GRADIENTS: [[f64; 3]; 48] = [
    [ A,  A, -1.0], [ A,  A,  1.0], [ B,  C,  0.0], [ C,  B,  0.0],
    [-A,  A, -1.0], [-A,  A,  1.0], [-C,  B,  0.0], [-B,  C,  0.0],
    [-1.0, -A, -A], [ 1.0, -A, -A], [0.0, -B, -C], [0.0, -C, -B],
    [-1.0, -A,  A], [ 1.0, -A,  A], [0.0, -C,  B], [0.0, -B,  C],
    [-A, -A, -1.0], [-A, -A,  1.0], [-B, -C,  0.0], [-C, -B,  0.0],
    [-A, -1.0, -A], [-A,  1.0, -A], [-C, 0.0, -B], [-B, 0.0, -C],
    [-A, -1.0,  A], [-A,  1.0,  A], [-B, 0.0,  C], [-C, 0.0,  B],
    [-1.0,  A, -A], [ 1.0,  A, -A], [0.0,  C, -B], [0.0,  B, -C],
    [-1.0,  A,  A], [ 1.0,  A,  A], [0.0,  B,  C], [0.0,  C,  B],
    [ A, -A, -1.0], [ A, -A,  1.0], [ C, -B,  0.0], [ B, -C,  0.0],
    [ A, -1.0, -A], [ A,  1.0, -A], [ B, 0.0, -C], [ C, 0.0, -B],
    [ A, -1.0,  A], [ A,  1.0,  A], [ C, 0.0,  B], [ B, 0.0,  C],
];

/// Shared gradient table, built on first access.
pub static GRADIENTS_3D: LazyLock<GradientTable> = LazyLock::new(GradientTable::new);

/// Immutable flat buffer of 3D gradient vectors.
///
/// Build it once and hand out `&GradientTable` (or [`GradientTable::as_slice`])
/// to every noise call.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    values: Box<[f32]>,
}

impl GradientTable {
    /// Builds the table. The result is identical for every seed.
    #[must_use]
    pub fn new() -> Self {
        let mut base = [0.0_f32; BASE_GRADIENTS.len() * GRADIENT_STRIDE];
        for (entry, gradient) in base.chunks_exact_mut(GRADIENT_STRIDE).zip(BASE_GRADIENTS) {
            for (slot, component) in entry.iter_mut().zip(gradient) {
                // Components are single-precision literals normalized in double precision.
                *slot = (f64::from(component as f32) / NORMALIZER_3D) as f32;
            }
        }

        let values = base.iter().copied().cycle().take(GRADIENT_TABLE_LEN).collect();
        Self { values }
    }

    /// Returns the flat buffer passed to the noise kernel.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Returns the gradient stored in entry `entry`.
    ///
    /// # Panics
    /// Panics if `entry >= N_GRADS_3D`.
    #[must_use]
    pub fn gradient(&self, entry: usize) -> [f32; 3] {
        let i = entry * GRADIENT_STRIDE;
        [self.values[i], self.values[i + 1], self.values[i + 2]]
    }
}

impl Default for GradientTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for GradientTable {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
