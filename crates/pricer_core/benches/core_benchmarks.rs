//! Criterion benchmarks for pricer_core lookups on the path-generation hot path.
//!
//! Measures bilinear interpolation and local volatility queries across grid
//! sizes, plus per-path seed derivation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::surfaces::LocalVolatilitySurface;
use pricer_core::math::interpolators::BilinearInterpolator;
use pricer_core::rng::derive_path_seed;

/// Generate a smooth grid for 2D benchmarks.
fn generate_grid(nx: usize, ny: usize) -> (Vec<f64>, Vec<f64>, Vec<Vec<f64>>) {
    let xs: Vec<f64> = (0..nx).map(|i| i as f64 / (nx - 1) as f64).collect();
    let ys: Vec<f64> = (0..ny).map(|j| 50.0 + 100.0 * j as f64 / (ny - 1) as f64).collect();
    let zs: Vec<Vec<f64>> = xs
        .iter()
        .map(|&x| ys.iter().map(|&y| 0.2 + 0.05 * x - 0.0005 * (y - 100.0)).collect())
        .collect();
    (xs, ys, zs)
}

/// Benchmark bilinear construction and lookup.
fn bench_bilinear(c: &mut Criterion) {
    let mut group = c.benchmark_group("bilinear");

    for size in [5, 20, 100] {
        let (xs, ys, zs) = generate_grid(size, size);
        let rows: Vec<&[f64]> = zs.iter().map(Vec::as_slice).collect();

        group.bench_with_input(BenchmarkId::new("construction", size), &size, |b, _| {
            b.iter(|| BilinearInterpolator::new(black_box(&xs), black_box(&ys), &rows).unwrap());
        });

        let interp = BilinearInterpolator::new(&xs, &ys, &rows).unwrap();
        group.bench_with_input(BenchmarkId::new("lookup", size), &size, |b, _| {
            b.iter(|| interp.interpolate(black_box(0.37), black_box(103.2)));
        });
    }

    group.finish();
}

/// Benchmark local volatility queries inside and outside the grid.
fn bench_local_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_vol");

    let (times, spots, vols) = generate_grid(12, 40);
    let surface = LocalVolatilitySurface::new(times, spots, vols).unwrap();

    group.bench_function("sigma_interior", |b| {
        b.iter(|| surface.sigma(black_box(0.5), black_box(101.0)));
    });
    group.bench_function("sigma_clamped", |b| {
        b.iter(|| surface.sigma(black_box(3.0), black_box(400.0)));
    });

    group.finish();
}

/// Benchmark per-path seed derivation.
fn bench_seed_derivation(c: &mut Criterion) {
    c.bench_function("derive_path_seed", |b| {
        let mut index = 0u64;
        b.iter(|| {
            index += 1;
            derive_path_seed(black_box(42), index)
        });
    });
}

criterion_group!(benches, bench_bilinear, bench_local_vol, bench_seed_derivation);
criterion_main!(benches);
