#![allow(missing_docs)]
//! Benchmarks for grid generation.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use simplex_core::{GridIndex, NoiseGenerator, NoiseGrid};
use simplex_utils::GradientTable;
use std::hint::black_box;

const SEED: i64 = 123_456_789;
const SCALE: f32 = 0.1;

fn bench_grid_allocation(c: &mut Criterion) {
    let table = GradientTable::new();
    let mut group = c.benchmark_group("noise_grid_new");
    group.sample_size(20);

    for size in [16_u32, 32, 64] {
        group.throughput(Throughput::Elements(u64::from(size).pow(3)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let grid = NoiseGrid::new(black_box(size), SCALE, SEED, &table)
                    .expect("valid grid");
                black_box(grid);
            });
        });
    }

    group.finish();
}

fn bench_fill_modes(c: &mut Criterion) {
    let table = GradientTable::new();
    let index = GridIndex::new(64).expect("valid size");
    let mut buffer = vec![0.0; index.len()];

    let mut group = c.benchmark_group("noise_grid_fill");
    group.sample_size(20);
    group.throughput(Throughput::Elements(index.len() as u64));

    for (name, parallel, batch_size) in [
        ("sequential", false, 128),
        ("parallel_128", true, 128),
        ("parallel_4096", true, 4096),
    ] {
        let generator = NoiseGenerator::new(&table)
            .with_batch_size(batch_size)
            .expect("non-zero batch")
            .with_parallel(parallel);
        group.bench_function(name, |b| {
            b.iter(|| {
                generator
                    .fill(black_box(&mut buffer), index, SCALE, SEED)
                    .expect("matching buffer");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid_allocation, bench_fill_modes);
criterion_main!(benches);
