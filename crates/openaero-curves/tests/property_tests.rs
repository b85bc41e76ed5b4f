//! Property-based tests for keyframe curves.
//!
//! These verify structural properties that must hold for arbitrary key
//! arrays: the two inversions are involutions, merging is index-wise and
//! idempotent, and evaluation respects wrap modes and passes through keys.

use openaero_curves::ops::{invert_x_and_y, invert_y, merge};
use openaero_curves::{Curve, Keyframe, WrapMode};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

const KEY_HIT_TOLERANCE: f64 = 1e-6;

fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("unexpected error: {:?}", e),
    }
}

fn sanitize(v: f64, limit: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-limit, limit)
    }
}

type RawKey = (f64, f64, f64, f64, f64, f64);

/// Builds a keyframe from raw quickcheck input without ordering guarantees.
/// Involution and merge properties do not require sorted keys.
fn loose_key(raw: RawKey) -> Keyframe {
    Keyframe {
        x: sanitize(raw.0, 1000.0),
        y: sanitize(raw.1, 100.0),
        in_tangent: sanitize(raw.2, 10.0),
        out_tangent: sanitize(raw.3, 10.0),
        in_weight: sanitize(raw.4, 1.0).abs(),
        out_weight: sanitize(raw.5, 1.0).abs(),
        weighted: true,
    }
}

/// Builds a strictly increasing key array suitable for `Curve::new`.
fn curve_keys(raw: &[RawKey]) -> Vec<Keyframe> {
    let mut keys: Vec<Keyframe> = raw.iter().map(|&r| loose_key(r)).collect();
    keys.sort_by(|a, b| a.x.total_cmp(&b.x));
    let mut spaced: Vec<Keyframe> = Vec::with_capacity(keys.len());
    for key in keys {
        match spaced.last() {
            Some(last) if key.x - last.x < 1e-3 => {}
            _ => spaced.push(key),
        }
    }
    spaced
}

#[quickcheck]
fn prop_invert_x_and_y_is_involution(raw: Vec<RawKey>) -> bool {
    let original: Vec<Keyframe> = raw.into_iter().map(loose_key).collect();
    let mut keys = original.clone();
    invert_x_and_y(&mut keys);
    invert_x_and_y(&mut keys);
    keys == original
}

#[quickcheck]
fn prop_invert_y_is_involution(raw: Vec<RawKey>) -> bool {
    let original: Vec<Keyframe> = raw.into_iter().map(loose_key).collect();
    let mut keys = original.clone();
    invert_y(&mut keys);
    invert_y(&mut keys);
    keys == original
}

#[quickcheck]
fn prop_inversions_preserve_length(raw: Vec<RawKey>) -> bool {
    let mut keys: Vec<Keyframe> = raw.into_iter().map(loose_key).collect();
    let len = keys.len();
    invert_x_and_y(&mut keys);
    if keys.len() != len {
        return false;
    }
    invert_y(&mut keys);
    keys.len() == len
}

#[quickcheck]
fn prop_merge_with_itself_is_identity(raw: Vec<RawKey>) -> bool {
    let keys: Vec<Keyframe> = raw.into_iter().map(loose_key).collect();
    match merge(&keys, &keys) {
        Ok(merged) => merged == keys,
        Err(_) => false,
    }
}

#[quickcheck]
fn prop_merge_is_symmetric_in_position(raw_a: Vec<RawKey>, raw_b: Vec<RawKey>) -> bool {
    let len = raw_a.len().min(raw_b.len());
    let a: Vec<Keyframe> = raw_a.into_iter().take(len).map(loose_key).collect();
    let b: Vec<Keyframe> = raw_b.into_iter().take(len).map(loose_key).collect();
    let forward = merge(&a, &b);
    let backward = merge(&b, &a);
    match (forward, backward) {
        (Ok(ab), Ok(ba)) => ab
            .iter()
            .zip(&ba)
            .all(|(x, y)| (x.x - y.x).abs() <= f64::EPSILON && (x.y - y.y).abs() <= f64::EPSILON),
        _ => false,
    }
}

#[quickcheck]
fn prop_evaluation_passes_through_keys(raw: Vec<RawKey>) -> bool {
    let keys = curve_keys(&raw);
    if keys.is_empty() {
        return true;
    }
    let curve = must(Curve::new(keys.clone(), WrapMode::Clamp, WrapMode::Clamp));
    keys.iter()
        .all(|key| (curve.evaluate(key.x) - key.y).abs() <= KEY_HIT_TOLERANCE)
}

#[quickcheck]
fn prop_clamp_wrap_holds_boundaries(raw: Vec<RawKey>, probe: f64) -> bool {
    let keys = curve_keys(&raw);
    let (Some(first), Some(last)) = (keys.first().copied(), keys.last().copied()) else {
        return true;
    };
    let curve = must(Curve::new(keys, WrapMode::Clamp, WrapMode::Clamp));
    let offset = sanitize(probe, 1e6).abs() + 1.0;
    (curve.evaluate(first.x - offset) - first.y).abs() <= KEY_HIT_TOLERANCE
        && (curve.evaluate(last.x + offset) - last.y).abs() <= KEY_HIT_TOLERANCE
}

#[quickcheck]
fn prop_loop_wrap_is_periodic(raw: Vec<RawKey>, probe: f64) -> bool {
    let keys = curve_keys(&raw);
    let (Some(first), Some(last)) = (keys.first().copied(), keys.last().copied()) else {
        return true;
    };
    let span = last.x - first.x;
    if span <= 1.0 {
        return true;
    }
    let curve = must(Curve::new(keys, WrapMode::Loop, WrapMode::Loop));
    // Probe strictly inside the domain so wrapping lands on the same segment.
    let x = first.x + sanitize(probe, 1.0).abs() * span * 0.98 + span * 0.01;
    (curve.evaluate(x + span) - curve.evaluate(x)).abs() <= KEY_HIT_TOLERANCE
        && (curve.evaluate(x - span) - curve.evaluate(x)).abs() <= KEY_HIT_TOLERANCE
}

proptest! {
    /// Zero-tangent segments cannot overshoot: the y control polygon
    /// collapses onto the endpoint values.
    #[test]
    fn prop_zero_tangent_curves_stay_in_value_hull(
        xs in proptest::collection::vec(-180.0_f64..180.0, 2..12),
        ys in proptest::collection::vec(-2.0_f64..2.0, 2..12),
        weights in proptest::collection::vec(0.0_f64..1.0, 2..12),
        probe in 0.0_f64..1.0,
    ) {
        let len = xs.len().min(ys.len()).min(weights.len());
        let mut keys: Vec<Keyframe> = (0..len)
            .filter_map(|i| {
                let (x, y, w) = (xs.get(i)?, ys.get(i)?, weights.get(i)?);
                let mut key = Keyframe::new(*x, *y);
                key.in_weight = *w;
                key.out_weight = 1.0 - *w;
                Some(key)
            })
            .collect();
        keys.sort_by(|a, b| a.x.total_cmp(&b.x));
        let curve = must(Curve::new(keys.clone(), WrapMode::Clamp, WrapMode::Clamp));
        let lowest = keys.iter().map(|k| k.y).fold(f64::INFINITY, f64::min);
        let highest = keys.iter().map(|k| k.y).fold(f64::NEG_INFINITY, f64::max);
        let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
            return Ok(());
        };
        let x = first.x + (last.x - first.x) * probe;
        let value = curve.evaluate(x);
        prop_assert!(value >= lowest - KEY_HIT_TOLERANCE);
        prop_assert!(value <= highest + KEY_HIT_TOLERANCE);
    }

    /// Evaluation is total: any finite probe on any well-formed curve
    /// produces a finite value.
    #[test]
    fn prop_evaluation_is_total(
        xs in proptest::collection::vec(-1000.0_f64..1000.0, 1..10),
        tangent in -50.0_f64..50.0,
        probe in -1e6_f64..1e6,
    ) {
        let mut sorted = xs.clone();
        sorted.sort_by(f64::total_cmp);
        let keys: Vec<Keyframe> = sorted
            .iter()
            .map(|&x| {
                let mut key = Keyframe::new(x, x.sin());
                key.in_tangent = tangent;
                key.out_tangent = tangent;
                key.in_weight = 0.5;
                key.out_weight = 0.5;
                key
            })
            .collect();
        let curve = must(Curve::new(keys, WrapMode::Loop, WrapMode::Clamp));
        prop_assert!(curve.evaluate(probe).is_finite());
    }
}
