use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use simplex_core::{BenchConfig, GridError, NoiseGenerator, NoiseGrid};
use simplex_utils::GradientTable;
use tracing::info;

/// Timing of one grid generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    /// Samples generated.
    pub samples: usize,
    /// Wall time spent allocating and filling the grid.
    pub elapsed: Duration,
}

impl Throughput {
    /// Wall time in milliseconds.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Average time per sample in nanoseconds.
    #[must_use]
    pub fn ns_per_sample(&self) -> f64 {
        self.total_ms() / self.samples as f64 * 1_000_000.0
    }

    /// Millions of samples per second. Infinite if no time was measured.
    #[must_use]
    pub fn msamples_per_second(&self) -> f64 {
        let samples_per_second = 1_000_000_000.0 / self.ns_per_sample();
        samples_per_second / 1_000_000.0
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} noise samples in {:.3} ms.",
            self.samples,
            self.total_ms()
        )?;
        writeln!(f, "Time per sample: {:.1} ns.", self.ns_per_sample())?;
        write!(
            f,
            "Samples per second: {:.2} MSamples/s",
            self.msamples_per_second()
        )
    }
}

/// Best and mean throughput over several runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of runs summarized.
    pub runs: usize,
    /// Highest throughput seen, in MSamples/s.
    pub best: f64,
    /// Mean throughput, in MSamples/s.
    pub mean: f64,
}

impl Summary {
    /// Summarizes `runs`, or returns `None` if there are none.
    #[must_use]
    pub fn from_runs(runs: &[Throughput]) -> Option<Self> {
        if runs.is_empty() {
            return None;
        }
        let rates = runs.iter().map(Throughput::msamples_per_second);
        let best = rates.clone().fold(f64::MIN, f64::max);
        let mean = rates.sum::<f64>() / runs.len() as f64;
        Some(Self {
            runs: runs.len(),
            best,
            mean,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} runs: best {:.2} MSamples/s, mean {:.2} MSamples/s",
            self.runs, self.best, self.mean
        )
    }
}

fn generator<'a>(
    config: &BenchConfig,
    gradients: &'a GradientTable,
) -> Result<NoiseGenerator<'a>, GridError> {
    Ok(NoiseGenerator::new(gradients)
        .with_batch_size(config.batch_size)?
        .with_parallel(config.parallel))
}

fn generate_once(
    config: &BenchConfig,
    generator: &NoiseGenerator<'_>,
) -> Result<Throughput, GridError> {
    let start = Instant::now();
    let grid = NoiseGrid::with_generator(
        generator,
        config.grid_size,
        config.noise_scale,
        config.seed,
    )?;
    let elapsed = start.elapsed();

    let samples = black_box(grid).len();
    Ok(Throughput { samples, elapsed })
}

/// Generates one grid so the thread pool and caches are warm before timing.
pub fn warm(config: &BenchConfig, gradients: &GradientTable) -> Result<Duration, GridError> {
    let generator = generator(config, gradients)?;
    let run = generate_once(config, &generator)?;
    info!("Warmed noise generation in {:.3} ms", run.total_ms());
    Ok(run.elapsed)
}

/// Runs `config.generations` timed generations, logging each one.
pub fn run(config: &BenchConfig, gradients: &GradientTable) -> Result<Vec<Throughput>, GridError> {
    let generator = generator(config, gradients)?;
    let mut runs = Vec::with_capacity(config.generations as usize);
    for _ in 0..config.generations {
        let run = generate_once(config, &generator)?;
        info!("{run}");
        runs.push(run);
    }
    Ok(runs)
}
