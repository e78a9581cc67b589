//! Grid sampling regression tests.
//!
//! Exercises the full driver path: index layout, parallel generation and
//! the value range of the generated field.

use simplex_core::{GridIndex, NoiseGenerator, NoiseGrid};
use simplex_utils::noise::{GRADIENTS_3D, GradientTable};

const SEED: i64 = 123_456_789;

#[test]
fn grid_values_stay_bounded() {
    let grid = NoiseGrid::new(64, 0.1, SEED, &GRADIENTS_3D).expect("valid grid");
    assert_eq!(grid.len(), 64 * 64 * 64);

    let (min, max) = grid
        .values()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    assert!(min >= -1.2, "minimum sample {min} below -1.2");
    assert!(max <= 1.2, "maximum sample {max} above 1.2");
    // The field is not flat.
    assert!(max - min > 0.5, "range [{min}, {max}] is suspiciously narrow");
}

#[test]
fn grid_layout_is_x_fastest() {
    let table = GradientTable::new();
    let grid = NoiseGrid::new(4, 0.7, SEED, &table).expect("valid grid");

    // Linear index 21 is (1, 1, 1) in a 4x4x4 grid.
    assert_eq!(grid.index().to_coords(21), (1, 1, 1));
    let expected = table.noise3(SEED, 0.7, 0.7, 0.7);
    assert_eq!(grid.values()[21].to_bits(), expected.to_bits());

    // Index 6 is (2, 1, 0); a transposed mapping would sample (0, 1, 2) instead.
    let expected = table.noise3(SEED, 2.0 * 0.7, 0.7, 0.0);
    assert_eq!(grid.values()[6].to_bits(), expected.to_bits());
}

#[test]
fn seeds_produce_different_grids() {
    let table = GradientTable::new();
    let a = NoiseGrid::new(16, 0.1, SEED, &table).expect("valid grid");
    let b = NoiseGrid::new(16, 0.1, SEED + 1, &table).expect("valid grid");

    let differing = a
        .values()
        .iter()
        .zip(b.values())
        .filter(|(x, y)| x.to_bits() != y.to_bits())
        .count();
    assert!(
        differing > a.len() * 9 / 10,
        "only {differing} of {} samples changed with the seed",
        a.len()
    );
}

#[test]
fn repeated_generation_is_bit_identical() {
    let table = GradientTable::new();
    let generator = NoiseGenerator::new(&table)
        .with_batch_size(37)
        .expect("non-zero batch");
    let first = NoiseGrid::with_generator(&generator, 24, 0.05, -42).expect("valid grid");
    let second = NoiseGrid::with_generator(&generator.with_parallel(false), 24, 0.05, -42)
        .expect("valid grid");

    let first: Vec<u32> = first.values().iter().map(|v| v.to_bits()).collect();
    let second: Vec<u32> = second.values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(first, second);
}

#[test]
fn single_sample_grid() {
    let table = GradientTable::new();
    let grid = NoiseGrid::new(1, 0.1, SEED, &table).expect("valid grid");
    assert_eq!(grid.len(), 1);
    assert_eq!(GridIndex::new(1).map(GridIndex::len).ok(), Some(1));
    // The origin sits on a lattice point where every contribution vanishes.
    assert_eq!(grid.values()[0], 0.0);
}
