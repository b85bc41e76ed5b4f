//! Benchmark tests for curve synthesis.
//!
//! Run with: cargo bench --bench synthesis_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use openaero_airfoil::prelude::*;
use openaero_airfoil::lerx;

fn fighter_wing() -> WingProfile {
    WingProfile {
        root_family: AirfoilFamily::T10Root,
        tip_family: AirfoilFamily::T10Wing,
        root_thickness: 5.0,
        tip_thickness: 4.0,
        leading_edge: Deflection {
            percentage: 40,
            angle: 15.0,
        },
        control_surface: Deflection {
            percentage: 30,
            angle: 20.0,
        },
        washout_angle: 1.5,
        lerx: LerxSettings {
            exists: true,
            negative_efficiency: 0.5,
            positive_efficiency: 1.0,
            critical_angle_raise: lerx::critical_angle_raise(
                AirfoilFamily::T10Root,
                AirfoilFamily::T10Wing,
            ),
            post_critical_efficiency: 0.5,
        },
        ..WingProfile::default()
    }
}

fn bench_lift_synthesis(c: &mut Criterion) {
    let clean = WingProfile::default();
    let loaded = fighter_wing();

    c.bench_function("lift_synthesis_clean", |b| {
        b.iter(|| std::hint::black_box(calculate_lift_curve(std::hint::black_box(&clean))));
    });
    c.bench_function("lift_synthesis_deflected", |b| {
        b.iter(|| std::hint::black_box(calculate_lift_curve(std::hint::black_box(&loaded))));
    });
}

fn bench_drag_synthesis(c: &mut Criterion) {
    let clean = WingProfile::default();
    let loaded = fighter_wing();

    c.bench_function("drag_synthesis_clean", |b| {
        b.iter(|| std::hint::black_box(calculate_drag_curve(std::hint::black_box(&clean))));
    });
    c.bench_function("drag_synthesis_deflected", |b| {
        b.iter(|| std::hint::black_box(calculate_drag_curve(std::hint::black_box(&loaded))));
    });
}

fn bench_full_panel(c: &mut Criterion) {
    let profile = fighter_wing();

    c.bench_function("full_panel_synthesis", |b| {
        b.iter(|| {
            let lift = calculate_lift_curve(std::hint::black_box(&profile));
            let drag = calculate_drag_curve(std::hint::black_box(&profile));
            let center = lift.as_ref().ok().and_then(|lift| {
                let negative = lift.negative_critical_angle()?;
                let positive = lift.positive_critical_angle()?;
                calculate_aerodynamic_center_curve(negative, positive).ok()
            });
            std::hint::black_box((lift, drag, center));
        });
    });
}

criterion_group!(
    benches,
    bench_lift_synthesis,
    bench_drag_synthesis,
    bench_full_panel
);
criterion_main!(benches);
