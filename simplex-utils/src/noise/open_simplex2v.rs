//! 3D `OpenSimplex2` noise on a body-centered cubic lattice.
//!
//! The lattice is evaluated as two interleaved cubic lattices, each keyed by
//! its own seed. Every candidate vertex contributes `a^4 * (g . d)` where
//! `a = R^2 - |d|^2`, and vertices with `a <= 0` are skipped without touching
//! the gradient table.

// Noise code uses mathematical single-letter variables (x, y, z, a)
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]

use super::gradients::GRADIENT_TABLE_MIN_LEN;
use super::math::{fast_floor, floor_offset, negative_mask, pow2, pow4};

const PRIME_X: i64 = 0x5205_402B_9270_C86F;
const PRIME_Y: i64 = 0x598C_D327_0038_17B5;
const PRIME_Z: i64 = 0x5BCC_226E_9FA0_BACB;

/// Doubled primes address the second lattice copy two cells away.
const PRIME_X2: i64 = PRIME_X << 1;
const PRIME_Y2: i64 = PRIME_Y << 1;
const PRIME_Z2: i64 = PRIME_Z << 1;

const HASH_MULTIPLIER: i64 = 0x53A3_F72D_EEC5_46F5;
const SEED_FLIP_3D: i64 = -0x52D5_47B2_E96E_D629;

const FALLBACK_ROTATE_3D: f32 = 2.0 / 3.0;

/// Log2 of the number of gradient slots.
pub const N_GRADS_3D_EXPONENT: u32 = 8;
/// Number of gradient slots addressed by the hash.
pub const N_GRADS_3D: usize = 1 << N_GRADS_3D_EXPONENT;

const RSQUARED_3D: f32 = 3.0 / 4.0;
const GRAD3D_MASK: i32 = ((N_GRADS_3D as i32) - 1) << 1;
const GRAD3D_HASH_SHIFT: u32 = 64 - N_GRADS_3D_EXPONENT + 2;

/// Samples 3D noise at `(x, y, z)`.
///
/// The input is rotated so the cubic lattices are oriented for an isotropic
/// look, then both lattice copies are evaluated. The function is pure: it
/// holds no state, never allocates and is safe to call from any thread.
/// Non-finite inputs propagate through IEEE arithmetic unchecked.
///
/// `gradients` must hold at least [`GRADIENT_TABLE_MIN_LEN`] floats, see
/// [`GradientTable`](super::GradientTable).
#[inline]
#[must_use]
pub fn noise3_fallback(seed: i64, x: f32, y: f32, z: f32, gradients: &[f32]) -> f32 {
    // Orthonormal rotation. Not a skew transform.
    let r = FALLBACK_ROTATE_3D * (x + y + z);
    let xr = r - x;
    let yr = r - y;
    let zr = r - z;

    noise3_unrotated_base(seed, xr, yr, zr, gradients)
}

/// Evaluates both lattice copies at already-rotated coordinates.
#[must_use]
pub(crate) fn noise3_unrotated_base(
    seed: i64,
    xr: f32,
    yr: f32,
    zr: f32,
    gradients: &[f32],
) -> f32 {
    debug_assert!(
        gradients.len() >= GRADIENT_TABLE_MIN_LEN,
        "gradient table too short: {}",
        gradients.len()
    );

    // Base points and offsets.
    let xrb = fast_floor(xr);
    let yrb = fast_floor(yr);
    let zrb = fast_floor(zr);
    let xi = floor_offset(xr, xrb);
    let yi = floor_offset(yr, yrb);
    let zi = floor_offset(zr, zrb);

    // Prime pre-multiplication for the hash.
    let xrbp = xrb.wrapping_mul(PRIME_X);
    let yrbp = yrb.wrapping_mul(PRIME_Y);
    let zrbp = zrb.wrapping_mul(PRIME_Z);
    let seed2 = seed ^ SEED_FLIP_3D;

    // -1 if the offset is at least 0.5, 0 otherwise.
    let x_n_mask = negative_mask(xi);
    let y_n_mask = negative_mask(yi);
    let z_n_mask = negative_mask(zi);
    let x_n_mask_l = i64::from(x_n_mask);
    let y_n_mask_l = i64::from(y_n_mask);
    let z_n_mask_l = i64::from(z_n_mask);

    // First vertex, nearest corner of the first lattice.
    let x0 = xi + x_n_mask as f32;
    let y0 = yi + y_n_mask as f32;
    let z0 = zi + z_n_mask as f32;
    let a0 = RSQUARED_3D - pow2(x0) - pow2(y0) - pow2(z0);
    let xhp = xrbp.wrapping_add(x_n_mask_l & PRIME_X);
    let yhp = yrbp.wrapping_add(y_n_mask_l & PRIME_Y);
    let zhp = zrbp.wrapping_add(z_n_mask_l & PRIME_Z);
    let xhp_flip = xrbp.wrapping_add(!x_n_mask_l & PRIME_X);
    let yhp_flip = yrbp.wrapping_add(!y_n_mask_l & PRIME_Y);
    let zhp_flip = zrbp.wrapping_add(!z_n_mask_l & PRIME_Z);
    let mut sample = pow4(a0) * gradient(seed, xhp, yhp, zhp, x0, y0, z0, gradients);

    // Second vertex, cell center of the second lattice.
    let x1 = xi - 0.5;
    let y1 = yi - 0.5;
    let z1 = zi - 0.5;
    let a1 = RSQUARED_3D - pow2(x1) - pow2(y1) - pow2(z1);
    let xp1 = xrbp.wrapping_add(PRIME_X);
    let yp1 = yrbp.wrapping_add(PRIME_Y);
    let zp1 = zrbp.wrapping_add(PRIME_Z);
    sample += pow4(a1) * gradient(seed2, xp1, yp1, zp1, x1, y1, z1, gradients);

    // Second-lattice neighbours one step further along an axis.
    let xp2 = xrbp.wrapping_add(x_n_mask_l & PRIME_X2);
    let yp2 = yrbp.wrapping_add(y_n_mask_l & PRIME_Y2);
    let zp2 = zrbp.wrapping_add(z_n_mask_l & PRIME_Z2);

    // Falloff deltas derived by subtracting the polynomials with the offsets plugged in.
    let x_mask_flip = x_n_mask | 1;
    let y_mask_flip = y_n_mask | 1;
    let z_mask_flip = z_n_mask | 1;
    let x_flip = x_mask_flip as f32;
    let y_flip = y_mask_flip as f32;
    let z_flip = z_mask_flip as f32;
    let x_a_flip_mask0 = (x_mask_flip << 1) as f32 * x1;
    let y_a_flip_mask0 = (y_mask_flip << 1) as f32 * y1;
    let z_a_flip_mask0 = (z_mask_flip << 1) as f32 * z1;
    let x_a_flip_mask1 = (-2 - (x_n_mask << 2)) as f32 * x1 - 1.0;
    let y_a_flip_mask1 = (-2 - (y_n_mask << 2)) as f32 * y1 - 1.0;
    let z_a_flip_mask1 = (-2 - (z_n_mask << 2)) as f32 * z1 - 1.0;

    let mut skip5 = false;
    let a2 = x_a_flip_mask0 + a0;
    if a2 > 0.0 {
        let x2 = x0 - x_flip;
        sample += pow4(a2) * gradient(seed, xhp_flip, yhp, zhp, x2, y0, z0, gradients);
    } else {
        let a3 = y_a_flip_mask0 + z_a_flip_mask0 + a0;
        if a3 > 0.0 {
            let y3 = y0 - y_flip;
            let z3 = z0 - z_flip;
            sample += pow4(a3) * gradient(seed, xhp, yhp_flip, zhp_flip, x0, y3, z3, gradients);
        }

        let a4 = x_a_flip_mask1 + a1;
        if a4 > 0.0 {
            let x4 = x_flip + x1;
            sample += pow4(a4) * gradient(seed2, xp2, yp1, zp1, x4, y1, z1, gradients);
            skip5 = true;
        }
    }

    let mut skip9 = false;
    let a6 = y_a_flip_mask0 + a0;
    if a6 > 0.0 {
        let y6 = y0 - y_flip;
        sample += pow4(a6) * gradient(seed, xhp, yhp_flip, zhp, x0, y6, z0, gradients);
    } else {
        let a7 = x_a_flip_mask0 + z_a_flip_mask0 + a0;
        if a7 > 0.0 {
            let x7 = x0 - x_flip;
            let z7 = z0 - z_flip;
            sample += pow4(a7) * gradient(seed, xhp, yhp, zhp_flip, x7, y0, z7, gradients);
        }

        let a8 = y_a_flip_mask1 + a1;
        if a8 > 0.0 {
            let y8 = y_flip + y1;
            sample += pow4(a8) * gradient(seed2, xp1, yp2, zp1, x1, y8, z1, gradients);
            skip9 = true;
        }
    }

    let mut skip_d = false;
    let a_a = z_a_flip_mask0 + a0;
    if a_a > 0.0 {
        let z_a = z0 - z_flip;
        sample += pow4(a_a) * gradient(seed, xhp, yhp, zhp_flip, x0, y0, z_a, gradients);
    } else {
        let a_b = x_a_flip_mask0 + y_a_flip_mask0 + a0;
        if a_b > 0.0 {
            let x_b = x0 - x_flip;
            let y_b = y0 - y_flip;
            sample += pow4(a_b) * gradient(seed, xhp, yhp_flip, zhp, x_b, y_b, z0, gradients);
        }

        let a_c = z_a_flip_mask1 + a1;
        if a_c > 0.0 {
            let z_c = z_flip + z1;
            sample += pow4(a_c) * gradient(seed2, xp1, yp1, zp2, x1, y1, z_c, gradients);
            skip_d = true;
        }
    }

    if !skip5 {
        let a5 = y_a_flip_mask1 + z_a_flip_mask1 + a1;
        if a5 > 0.0 {
            let y5 = y_flip + y1;
            let z5 = z_flip + z1;
            sample += pow4(a5) * gradient(seed2, xp1, yp2, zp2, x1, y5, z5, gradients);
        }
    }

    if !skip9 {
        let a9 = x_a_flip_mask1 + z_a_flip_mask1 + a1;
        if a9 > 0.0 {
            let x9 = x_flip + x1;
            let z9 = z_flip + z1;
            sample += pow4(a9) * gradient(seed2, xp2, yp1, zp2, x9, y1, z9, gradients);
        }
    }

    if !skip_d {
        let a_d = x_a_flip_mask1 + y_a_flip_mask1 + a1;
        if a_d > 0.0 {
            let x_d = x_flip + x1;
            let y_d = y_flip + y1;
            sample += pow4(a_d) * gradient(seed2, xp2, yp2, zp1, x_d, y_d, z1, gradients);
        }
    }

    sample
}

/// Hashes a prime-scaled vertex and dots its gradient with the offset.
#[inline]
#[allow(clippy::too_many_arguments)] // Seed, three hash terms and three offsets
fn gradient(
    seed: i64,
    xrvp: i64,
    yrvp: i64,
    zrvp: i64,
    dx: f32,
    dy: f32,
    dz: f32,
    gradients: &[f32],
) -> f32 {
    let mut hash = ((seed ^ xrvp) ^ (yrvp ^ zrvp)).wrapping_mul(HASH_MULTIPLIER);
    hash ^= hash >> GRAD3D_HASH_SHIFT;
    let gi = ((hash as i32) & GRAD3D_MASK) as usize;

    gradients[gi] * dx + gradients[gi + 1] * dy + gradients[gi + 2] * dz
}
