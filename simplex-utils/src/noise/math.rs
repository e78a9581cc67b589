//! Math utilities for noise generation.
//!
//! Small scalar helpers shared by the noise kernel. They are kept as plain
//! functions so the optimizer is free to inline them into the hot path.

/// Floor function returning i64.
///
/// Rounds toward negative infinity, so `-0.5` maps to `-1` rather than `0`.
/// Every `f32` whose magnitude reaches 2^23 is already integral, so the only
/// inexact results are saturated ones beyond the `i64` range.
#[inline]
#[must_use]
pub fn fast_floor(value: f32) -> i64 {
    let i = value as i64;
    if value < i as f32 { i.saturating_sub(1) } else { i }
}

/// Offset of `value` from `floor`, its [`fast_floor`], in `[0, 1)`.
///
/// Past the `i64` range the floor saturates while `value` stays integral, so
/// the offset there is zero. NaN passes through.
#[inline]
#[must_use]
pub fn floor_offset(value: f32, floor: i64) -> f32 {
    let offset = value - floor as f32;
    if offset.abs() >= 1.0 { 0.0 } else { offset }
}

/// Squares a value.
#[inline]
#[must_use]
pub fn pow2(value: f32) -> f32 {
    value * value
}

/// Raises a value to the fourth power as two squarings.
#[inline]
#[must_use]
pub fn pow4(value: f32) -> f32 {
    let sq = value * value;
    sq * sq
}

/// Mask selecting the far vertex along one axis.
///
/// Returns `-1` (all bits set) when `offset >= 0.5` and `0` otherwise, by
/// truncating `-0.5 - offset` toward zero. `offset` must lie in `[0, 1)`.
#[inline]
#[must_use]
pub fn negative_mask(offset: f32) -> i32 {
    (-0.5 - offset) as i32
}
