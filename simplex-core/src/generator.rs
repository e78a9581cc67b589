//! Parallel dispatch of the noise kernel over a sample buffer.
//!
//! The buffer is split into fixed-size batches that rayon hands to its
//! worker threads. Every slot depends only on its own index, so batches
//! share nothing but the read-only gradient table and the output is
//! bit-identical to a sequential fill.

use rayon::prelude::*;
use simplex_utils::GradientTable;

use crate::error::GridError;
use crate::grid::GridIndex;

/// Samples per rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 128;

/// Fills sample buffers with noise.
#[derive(Debug, Clone, Copy)]
pub struct NoiseGenerator<'a> {
    gradients: &'a GradientTable,
    batch_size: usize,
    parallel: bool,
}

impl<'a> NoiseGenerator<'a> {
    /// Creates a parallel generator with the default batch size.
    #[must_use]
    pub fn new(gradients: &'a GradientTable) -> Self {
        Self {
            gradients,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: true,
        }
    }

    /// Sets the number of samples per rayon task.
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self, GridError> {
        if batch_size == 0 {
            return Err(GridError::ZeroBatch);
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Chooses between the rayon pool and the calling thread.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Samples per rayon task.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether [`fill`](Self::fill) uses the rayon pool.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Fills `buffer` with the samples of `index`, in parallel or not
    /// depending on how the generator was configured.
    pub fn fill(
        &self,
        buffer: &mut [f32],
        index: GridIndex,
        scale: f32,
        seed: i64,
    ) -> Result<(), GridError> {
        if self.parallel {
            self.fill_parallel(buffer, index, scale, seed)
        } else {
            self.fill_sequential(buffer, index, scale, seed)
        }
    }

    /// Fills `buffer` on the rayon pool, one batch per task.
    pub fn fill_parallel(
        &self,
        buffer: &mut [f32],
        index: GridIndex,
        scale: f32,
        seed: i64,
    ) -> Result<(), GridError> {
        check_buffer(buffer, index)?;

        let batch_size = self.batch_size;
        buffer
            .par_chunks_mut(batch_size)
            .enumerate()
            .for_each(|(batch, chunk)| {
                let start = batch * batch_size;
                for (offset, slot) in chunk.iter_mut().enumerate() {
                    *slot = self.sample(index, start + offset, scale, seed);
                }
            });
        Ok(())
    }

    /// Fills `buffer` on the calling thread.
    pub fn fill_sequential(
        &self,
        buffer: &mut [f32],
        index: GridIndex,
        scale: f32,
        seed: i64,
    ) -> Result<(), GridError> {
        check_buffer(buffer, index)?;

        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = self.sample(index, i, scale, seed);
        }
        Ok(())
    }

    #[inline]
    fn sample(&self, index: GridIndex, i: usize, scale: f32, seed: i64) -> f32 {
        let (x, y, z) = index.sample_position(i, scale);
        self.gradients.noise3(seed, x, y, z)
    }
}

fn check_buffer(buffer: &[f32], index: GridIndex) -> Result<(), GridError> {
    if buffer.len() == index.len() {
        Ok(())
    } else {
        Err(GridError::BufferLength {
            expected: index.len(),
            actual: buffer.len(),
        })
    }
}
