//! Benchmark tests for curve evaluation.
//!
//! Run with: cargo bench --bench curve_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use openaero_curves::{Curve, Keyframe, WrapMode};

fn lift_like_curve() -> Curve {
    let layout = [
        (-180.0, 0.0, 0.0),
        (-170.0, 0.9, -0.05),
        (-160.0, 0.75, 0.0),
        (-135.0, 0.95, 0.0),
        (-90.0, 0.0, -0.02),
        (-45.0, -1.05, 0.0),
        (-25.0, -1.2, 0.0),
        (-15.0, -1.5, 0.0),
        (0.0, 0.0, 0.1),
        (15.0, 1.5, 0.0),
        (25.0, 1.2, 0.0),
        (45.0, 1.05, 0.0),
        (90.0, 0.0, -0.02),
        (135.0, -0.95, 0.0),
        (160.0, -0.75, 0.0),
        (170.0, -0.9, -0.05),
        (180.0, 0.0, 0.0),
    ];
    let keys: Vec<Keyframe> = layout
        .iter()
        .map(|&(x, y, slope)| {
            let mut key = Keyframe::new(x, y);
            key.in_tangent = slope;
            key.out_tangent = slope;
            key.in_weight = 0.4;
            key.out_weight = 0.4;
            key
        })
        .collect();
    match Curve::new(keys, WrapMode::Loop, WrapMode::Loop) {
        Ok(curve) => curve,
        Err(e) => panic!("bench curve must be valid: {:?}", e),
    }
}

fn bench_weighted_evaluate(c: &mut Criterion) {
    let curve = lift_like_curve();
    let inputs: Vec<f64> = (0..=1000).map(|i| f64::from(i) * 0.36 - 180.0).collect();

    c.bench_function("weighted_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(curve.evaluate(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_wrapped_evaluate(c: &mut Criterion) {
    let curve = lift_like_curve();
    let inputs: Vec<f64> = (0..=1000).map(|i| f64::from(i) * 3.6 - 1800.0).collect();

    c.bench_function("wrapped_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(curve.evaluate(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("curve_construction", |b| {
        b.iter(|| std::hint::black_box(lift_like_curve()));
    });
}

criterion_group!(
    benches,
    bench_weighted_evaluate,
    bench_wrapped_evaluate,
    bench_construction
);
criterion_main!(benches);
