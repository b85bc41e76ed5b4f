//! Approximate-equality assertions for curves and keyframes.
//!
//! The mirror helpers encode the lateral-symmetry laws of the synthesis
//! pipeline: building a wing inverted (with deflection signs flipped) must
//! produce the mirror image of the normal build. Lift mirrors through the
//! origin (x and y negate), drag mirrors across the y axis (x negates, y
//! stays), and in both cases the tangent/weight sides swap.

use openaero_curves::{Curve, Keyframe};

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use openaero_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f64, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

#[track_caller]
fn check(index: usize, field: &str, left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "key {index}: {field} differs\n  left: `{left:?}`,\n right: `{right:?}`,\n  diff: `{diff:?}`,\n  tolerance: `{tolerance:?}`"
    );
}

fn paired<'c>(a: &'c Curve, b: &'c Curve) -> Vec<(usize, &'c Keyframe, &'c Keyframe)> {
    assert_eq!(
        a.keys().len(),
        b.keys().len(),
        "curves have different key counts"
    );
    a.keys()
        .iter()
        .zip(b.keys())
        .enumerate()
        .map(|(i, (x, y))| (i, x, y))
        .collect()
}

/// Asserts every keyframe field matches between two curves, index by index.
#[track_caller]
pub fn assert_curves_equal(a: &Curve, b: &Curve, tolerance: f64) {
    for (index, left, right) in paired(a, b) {
        check(index, "x", left.x, right.x, tolerance);
        check(index, "y", left.y, right.y, tolerance);
        check(index, "in_tangent", left.in_tangent, right.in_tangent, tolerance);
        check(index, "out_tangent", left.out_tangent, right.out_tangent, tolerance);
        check(index, "in_weight", left.in_weight, right.in_weight, tolerance);
        check(index, "out_weight", left.out_weight, right.out_weight, tolerance);
        assert_eq!(left.weighted, right.weighted, "key {index}: weighted differs");
    }
}

/// Asserts `mirrored` is the origin-mirror of `curve`: pairing each key with
/// the opposite-index key, x and y negate and the tangent/weight sides swap
/// without sign changes.
///
/// The middle key of an odd-length curve pairs with itself, which forces it
/// onto the mirror axis.
#[track_caller]
pub fn assert_lift_mirrored(curve: &Curve, mirrored: &Curve, tolerance: f64) {
    assert_eq!(
        curve.keys().len(),
        mirrored.keys().len(),
        "curves have different key counts"
    );
    let reversed = mirrored.keys().iter().rev();
    for (index, (key, twin)) in curve.keys().iter().zip(reversed).enumerate() {
        check(index, "x", key.x, -twin.x, tolerance);
        check(index, "y", key.y, -twin.y, tolerance);
        check(index, "in_tangent", key.in_tangent, twin.out_tangent, tolerance);
        check(index, "out_tangent", key.out_tangent, twin.in_tangent, tolerance);
        check(index, "in_weight", key.in_weight, twin.out_weight, tolerance);
        check(index, "out_weight", key.out_weight, twin.in_weight, tolerance);
    }
}

/// Asserts `mirrored` is the y-axis mirror of `curve`: pairing each key with
/// the opposite-index key, x negates, y holds, and the tangent sides swap
/// with a sign change (weights swap unchanged).
#[track_caller]
pub fn assert_drag_mirrored(curve: &Curve, mirrored: &Curve, tolerance: f64) {
    assert_eq!(
        curve.keys().len(),
        mirrored.keys().len(),
        "curves have different key counts"
    );
    let reversed = mirrored.keys().iter().rev();
    for (index, (key, twin)) in curve.keys().iter().zip(reversed).enumerate() {
        check(index, "x", key.x, -twin.x, tolerance);
        check(index, "y", key.y, twin.y, tolerance);
        check(index, "in_tangent", key.in_tangent, -twin.out_tangent, tolerance);
        check(index, "out_tangent", key.out_tangent, -twin.in_tangent, tolerance);
        check(index, "in_weight", key.in_weight, twin.out_weight, tolerance);
        check(index, "out_weight", key.out_weight, twin.in_weight, tolerance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openaero_curves::ops::{invert_x_and_y, invert_y};
    use openaero_curves::WrapMode;

    fn sample_keys() -> Vec<Keyframe> {
        vec![
            Keyframe {
                x: -15.0,
                y: -1.4,
                in_tangent: 0.05,
                out_tangent: 0.2,
                in_weight: 0.3,
                out_weight: 0.6,
                weighted: true,
            },
            Keyframe::new(0.5, 0.1),
            Keyframe {
                x: 16.0,
                y: 1.5,
                in_tangent: 0.1,
                out_tangent: -0.02,
                in_weight: 0.4,
                out_weight: 0.2,
                weighted: true,
            },
        ]
    }

    fn curve_of(keys: Vec<Keyframe>) -> Curve {
        Curve::new(keys, WrapMode::Loop, WrapMode::Loop).unwrap()
    }

    #[test]
    fn test_equal_accepts_identical_curves() {
        let a = curve_of(sample_keys());
        let b = curve_of(sample_keys());
        assert_curves_equal(&a, &b, 1e-12);
    }

    #[test]
    #[should_panic(expected = "y differs")]
    fn test_equal_rejects_value_drift() {
        let a = curve_of(sample_keys());
        let mut keys = sample_keys();
        if let Some(key) = keys.get_mut(1) {
            key.y += 0.1;
        }
        let b = curve_of(keys);
        assert_curves_equal(&a, &b, 1e-12);
    }

    #[test]
    fn test_lift_mirror_matches_inversion() {
        let a = curve_of(sample_keys());
        let mut keys = sample_keys();
        invert_x_and_y(&mut keys);
        let b = curve_of(keys);
        assert_lift_mirrored(&a, &b, 1e-12);
    }

    #[test]
    fn test_drag_mirror_matches_inversion() {
        let a = curve_of(sample_keys());
        let mut keys = sample_keys();
        invert_y(&mut keys);
        let b = curve_of(keys);
        assert_drag_mirrored(&a, &b, 1e-12);
    }

    #[test]
    #[should_panic(expected = "x differs")]
    fn test_lift_mirror_rejects_unmirrored_curve() {
        let a = curve_of(sample_keys());
        let b = curve_of(sample_keys());
        assert_lift_mirrored(&a, &b, 1e-12);
    }

    #[test]
    fn test_assert_approx_eq_macro() {
        assert_approx_eq!(1.0_f64, 1.0 + 1e-7, 1e-6);
        assert_approx_eq!(-2.5_f64, -2.5, 1e-12, "context {}", 42);
    }
}
