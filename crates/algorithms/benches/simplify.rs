//! Benchmarks for geometry simplification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_types::{LineString, Polygon};
use simpligis_algorithms::simplify::{simplify_line, simplify_polygon};

/// A noisy sine polyline with `n` vertices.
fn create_polyline(n: usize) -> LineString<f64> {
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = i as f64;
            // Sine carrier + deterministic noise to keep some vertices alive
            let y = (x * 0.05).sin() * 50.0 + ((i * 7 + 3) % 23) as f64 * 0.1;
            (x, y)
        })
        .collect();
    LineString::from(coords)
}

/// A star polygon with `n` spikes around a 1000-unit radius.
fn create_star(n: usize) -> Polygon<f64> {
    let mut coords: Vec<(f64, f64)> = (0..2 * n)
        .map(|i| {
            let angle = std::f64::consts::PI * i as f64 / n as f64;
            let r = if i % 2 == 0 { 1000.0 } else { 900.0 };
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    coords.push(coords[0]);
    Polygon::new(LineString::from(coords), vec![])
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify/line");
    for size in [100, 1_000, 10_000, 100_000] {
        let line = create_polyline(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| simplify_line(black_box(&line), 1.0))
        });
    }
    group.finish();
}

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify/polygon");
    for spikes in [50, 500, 5_000] {
        let poly = create_star(spikes);
        group.bench_with_input(BenchmarkId::from_parameter(spikes), &spikes, |b, _| {
            b.iter(|| simplify_polygon(black_box(&poly), 5.0))
        });
    }
    group.finish();
}

fn bench_tolerance_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify/tolerance");
    let line = create_polyline(10_000);
    for tol in [0.1, 1.0, 10.0, 100.0] {
        group.bench_with_input(BenchmarkId::from_parameter(tol), &tol, |b, &t| {
            b.iter(|| simplify_line(black_box(&line), t))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line, bench_polygon, bench_tolerance_sweep);
criterion_main!(benches);
