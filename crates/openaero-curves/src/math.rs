//! Clamped interpolation helpers.
//!
//! The synthesis formulas were tuned against a game engine whose scalar
//! helpers clamp rather than extrapolate. These functions reproduce that
//! behavior exactly so downstream constants keep their calibrated meaning.

/// Linear interpolation from `a` to `b` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Inverse of [`lerp`]: the clamped fraction of `value` between `a` and `b`.
///
/// Returns 0 when the range is degenerate.
#[must_use]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() <= f64::EPSILON {
        0.0
    } else {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    }
}

/// Clamp with the lower bound checked before the upper bound.
///
/// Unlike [`f64::clamp`], an inverted range (`min > max`) is not a
/// precondition violation: a value below `min` is raised to `min` and never
/// lowered again, while a value at or above `min` is capped at `max`. A few
/// synthesis call sites rely on that ordering when their bounds cross.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_clamps_t() {
        assert_abs_diff_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_abs_diff_eq!(lerp(0.0, 10.0, -1.0), 0.0);
        assert_abs_diff_eq!(lerp(0.0, 10.0, 2.0), 10.0);
    }

    #[test]
    fn test_inverse_lerp_clamps_result() {
        assert_abs_diff_eq!(inverse_lerp(10.0, 20.0, 15.0), 0.5);
        assert_abs_diff_eq!(inverse_lerp(10.0, 20.0, 5.0), 0.0);
        assert_abs_diff_eq!(inverse_lerp(10.0, 20.0, 25.0), 1.0);
        // Reversed ranges still work.
        assert_abs_diff_eq!(inverse_lerp(20.0, 10.0, 15.0), 0.5);
    }

    #[test]
    fn test_inverse_lerp_degenerate_range() {
        assert_abs_diff_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
    }

    #[test]
    fn test_clamp_ordinary_range() {
        assert_abs_diff_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_abs_diff_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_abs_diff_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_range() {
        // Below the lower bound it is raised and stays there.
        assert_abs_diff_eq!(clamp(5.0, 8.0, 2.0), 8.0);
        assert_abs_diff_eq!(clamp(1.0, 8.0, 2.0), 8.0);
        // At or above the lower bound the upper bound caps it.
        assert_abs_diff_eq!(clamp(9.0, 8.0, 2.0), 2.0);
        assert_abs_diff_eq!(clamp(8.0, 8.0, 2.0), 2.0);
    }
}
