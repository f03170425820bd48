//! Criterion microbenches for hull extraction and the constrained sampler.
//!
//! - hull: monotone chain over cloud sizes 10/100/1000.
//! - sample: the vertical-segment fixture scenario at growing targets.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullgen::hull::{extract_hull, Segment};
use hullgen::sample::{fill_from_segment, FillCfg, Range2, ReplayToken};
use hullgen::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn cloud(n: usize, seed: u64) -> Vec<Vec2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for n in [10usize, 100, 1000] {
        group.bench_function(BenchmarkId::new("extract_hull", n), |b| {
            b.iter_batched(
                || cloud(n, n as u64),
                |pts| {
                    let _ = extract_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let seg = Segment::new(Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.5));
    let range = Range2 {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    };
    for target in [5usize, 50, 500] {
        let cfg = FillCfg {
            target,
            range,
            max_attempts: Some(1000 * target as u64),
        };
        group.bench_function(BenchmarkId::new("fill_from_segment", target), |b| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _ = fill_from_segment(seg, &cfg, &[], tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_sample);
criterion_main!(benches);
