//! Cubic sample grids and their index layout.
//!
//! Samples are stored x-fastest: linear index `i` maps to
//! `(i mod N, (i / N) mod N, i / N²)`.

use log::debug;
use simplex_utils::GradientTable;

use crate::error::GridError;
use crate::generator::NoiseGenerator;

/// Largest side length whose sample count fits the coordinate range.
pub(crate) const MAX_GRID_SIZE: u32 = 1 << 10;

/// Maps between linear sample indices and grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    size: u32,
}

impl GridIndex {
    /// Creates the index for a grid with `size` samples per side.
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        if size > MAX_GRID_SIZE {
            return Err(GridError::TooLarge { size });
        }
        Ok(Self { size })
    }

    /// Samples per side.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Total number of samples, `size³`.
    #[must_use]
    pub const fn len(self) -> usize {
        let n = self.size as usize;
        n * n * n
    }

    /// Always false; a grid has at least one sample.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns the `(x, y, z)` coordinates of linear index `index`.
    #[inline]
    #[must_use]
    pub fn to_coords(self, index: usize) -> (u32, u32, u32) {
        let n = self.size as usize;
        let x = index % n;
        let y = (index / n) % n;
        let z = index / (n * n);
        (x as u32, y as u32, z as u32)
    }

    /// Returns the linear index of `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn to_index(self, x: u32, y: u32, z: u32) -> usize {
        let n = self.size as usize;
        (z as usize * n + y as usize) * n + x as usize
    }

    /// Returns the noise-space position sampled for linear index `index`.
    #[inline]
    #[must_use]
    pub fn sample_position(self, index: usize, scale: f32) -> (f32, f32, f32) {
        let (x, y, z) = self.to_coords(index);
        (x as f32 * scale, y as f32 * scale, z as f32 * scale)
    }
}

/// Checks that a noise scale can be used for sampling.
pub(crate) fn check_scale(scale: f32) -> Result<(), GridError> {
    if scale.is_finite() {
        Ok(())
    } else {
        Err(GridError::NonFiniteScale(scale))
    }
}

/// A cubic grid of noise samples.
#[derive(Debug, Clone)]
pub struct NoiseGrid {
    index: GridIndex,
    scale: f32,
    seed: i64,
    values: Vec<f32>,
}

impl NoiseGrid {
    /// Allocates a grid and fills it using the default parallel generator.
    pub fn new(
        size: u32,
        scale: f32,
        seed: i64,
        gradients: &GradientTable,
    ) -> Result<Self, GridError> {
        Self::with_generator(&NoiseGenerator::new(gradients), size, scale, seed)
    }

    /// Allocates a grid and fills it using `generator`.
    pub fn with_generator(
        generator: &NoiseGenerator<'_>,
        size: u32,
        scale: f32,
        seed: i64,
    ) -> Result<Self, GridError> {
        let index = GridIndex::new(size)?;
        check_scale(scale)?;

        debug!(
            "Allocating noise grid of {} samples (size {size}, scale {scale}, seed {seed})",
            index.len()
        );
        let mut values = vec![0.0; index.len()];
        generator.fill(&mut values, index, scale, seed)?;

        Ok(Self {
            index,
            scale,
            seed,
            values,
        })
    }

    /// Refills the existing buffer with a new scale and seed.
    ///
    /// The grid size is fixed at allocation, so no memory is reallocated.
    pub fn regenerate(
        &mut self,
        generator: &NoiseGenerator<'_>,
        scale: f32,
        seed: i64,
    ) -> Result<(), GridError> {
        check_scale(scale)?;
        generator.fill(&mut self.values, self.index, scale, seed)?;
        self.scale = scale;
        self.seed = seed;
        Ok(())
    }

    /// The generated samples in linear index order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Consumes the grid, returning the sample buffer.
    #[must_use]
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Returns the sample at `(x, y, z)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<f32> {
        let size = self.index.size();
        if x >= size || y >= size || z >= size {
            return None;
        }
        self.values.get(self.index.to_index(x, y, z)).copied()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a grid has at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples per side.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.index.size()
    }

    /// The index layout of this grid.
    #[must_use]
    pub fn index(&self) -> GridIndex {
        self.index
    }

    /// Scale used for the current samples.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Seed used for the current samples.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_coords() {
        let index = GridIndex::new(4).expect("valid size");
        // 21 = 1 * 16 + 1 * 4 + 1
        assert_eq!(index.to_coords(21), (1, 1, 1));
        assert_eq!(index.to_coords(0), (0, 0, 0));
        assert_eq!(index.to_coords(1), (1, 0, 0));
        assert_eq!(index.to_coords(4), (0, 1, 0));
        assert_eq!(index.to_coords(16), (0, 0, 1));
        assert_eq!(index.to_coords(63), (3, 3, 3));
        assert_eq!(index.to_coords(27), (3, 2, 1));
    }

    #[test]
    fn test_index_round_trip() {
        let index = GridIndex::new(5).expect("valid size");
        for i in 0..index.len() {
            let (x, y, z) = index.to_coords(i);
            assert_eq!(index.to_index(x, y, z), i);
        }
    }

    #[test]
    fn test_sample_position() {
        let index = GridIndex::new(4).expect("valid size");
        let (x, y, z) = index.sample_position(27, 0.5);
        assert_eq!(x.to_bits(), 1.5_f32.to_bits());
        assert_eq!(y.to_bits(), 1.0_f32.to_bits());
        assert_eq!(z.to_bits(), 0.5_f32.to_bits());
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(GridIndex::new(0), Err(GridError::ZeroSize)));
        assert!(matches!(
            GridIndex::new(MAX_GRID_SIZE + 1),
            Err(GridError::TooLarge { size }) if size == MAX_GRID_SIZE + 1
        ));
        assert_eq!(
            GridIndex::new(MAX_GRID_SIZE).map(GridIndex::len).ok(),
            Some(1 << 30)
        );
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        let table = GradientTable::new();
        assert!(matches!(
            NoiseGrid::new(4, f32::NAN, 1, &table),
            Err(GridError::NonFiniteScale(_))
        ));
        assert!(matches!(
            NoiseGrid::new(4, f32::INFINITY, 1, &table),
            Err(GridError::NonFiniteScale(_))
        ));
    }

    #[test]
    fn test_get_matches_kernel() {
        let table = GradientTable::new();
        let grid = NoiseGrid::new(6, 0.37, 99, &table).expect("valid grid");
        assert_eq!(grid.len(), 216);
        assert_eq!(grid.get(6, 0, 0), None);

        let expected = table.noise3(99, 2.0 * 0.37, 5.0 * 0.37, 1.0 * 0.37);
        let value = grid.get(2, 5, 1).expect("inside grid");
        assert_eq!(value.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_regenerate_in_place() {
        let table = GradientTable::new();
        let generator = NoiseGenerator::new(&table);
        let mut grid = NoiseGrid::with_generator(&generator, 8, 0.1, 1).expect("valid grid");
        let before = grid.values().as_ptr();
        let first = grid.values().to_vec();

        grid.regenerate(&generator, 0.1, 2).expect("valid scale");
        assert_eq!(grid.values().as_ptr(), before);
        assert_eq!(grid.seed(), 2);
        assert_ne!(grid.values(), first.as_slice());

        let fresh = NoiseGrid::with_generator(&generator, 8, 0.1, 2).expect("valid grid");
        assert_eq!(grid.values(), fresh.values());
    }
}
