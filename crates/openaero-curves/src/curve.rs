//! Curve storage, validation, and evaluation.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::keyframe::{DEFAULT_WEIGHT, Keyframe};

/// Newton-Raphson iteration cap for the x-to-parameter solve.
const NEWTON_ITERATIONS: usize = 8;

/// Bisection iteration cap for the fallback solve.
const BISECTION_ITERATIONS: usize = 64;

/// Accepted |x(t) - x| error in normalized segment coordinates.
const SOLVE_TOLERANCE: f64 = 1e-9;

/// Domain extension behavior outside the first or last keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Hold the boundary keyframe's value.
    #[default]
    Clamp,
    /// Repeat the key range with period `last.x - first.x`.
    Loop,
}

/// An immutable piecewise cubic curve over ordered keyframes.
///
/// Construction validates the key array once; evaluation is then total over
/// all finite inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    keys: Vec<Keyframe>,
    pre_wrap: WrapMode,
    post_wrap: WrapMode,
}

impl Curve {
    /// Builds a curve from keyframes and per-end wrap modes.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Empty`] for an empty key array,
    /// [`CurveError::NonFinite`] if any keyframe field is NaN or infinite, and
    /// [`CurveError::DecreasingKeys`] if the x coordinates ever step
    /// backwards. Equal consecutive x coordinates are allowed; the segment
    /// between them is treated as a jump.
    pub fn new(
        keys: Vec<Keyframe>,
        pre_wrap: WrapMode,
        post_wrap: WrapMode,
    ) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }
        let mut previous_x = f64::NEG_INFINITY;
        for (index, key) in keys.iter().enumerate() {
            let fields = [
                ("x", key.x),
                ("y", key.y),
                ("in_tangent", key.in_tangent),
                ("out_tangent", key.out_tangent),
                ("in_weight", key.in_weight),
                ("out_weight", key.out_weight),
            ];
            for (field, value) in fields {
                if !value.is_finite() {
                    return Err(CurveError::NonFinite { index, field, value });
                }
            }
            if key.x < previous_x {
                return Err(CurveError::DecreasingKeys {
                    index,
                    previous: previous_x,
                    current: key.x,
                });
            }
            previous_x = key.x;
        }
        Ok(Self {
            keys,
            pre_wrap,
            post_wrap,
        })
    }

    /// The validated keyframes, in x order.
    #[must_use]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Extension behavior below the first keyframe.
    #[must_use]
    pub fn pre_wrap(&self) -> WrapMode {
        self.pre_wrap
    }

    /// Extension behavior above the last keyframe.
    #[must_use]
    pub fn post_wrap(&self) -> WrapMode {
        self.post_wrap
    }

    /// Evaluates the curve at `x`.
    ///
    /// Inputs outside the key range are first mapped into it per the wrap
    /// modes. A single-key curve is constant.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        let x = if x < first.x {
            wrap(x, first.x, last.x, self.pre_wrap)
        } else if x > last.x {
            wrap(x, first.x, last.x, self.post_wrap)
        } else {
            x
        };
        for (left, right) in self.keys.iter().zip(self.keys.iter().skip(1)) {
            if x <= right.x {
                return evaluate_segment(left, right, x);
            }
        }
        last.y
    }
}

fn wrap(x: f64, start: f64, end: f64, mode: WrapMode) -> f64 {
    match mode {
        WrapMode::Clamp => x.clamp(start, end),
        WrapMode::Loop => {
            let span = end - start;
            if span <= f64::EPSILON {
                start
            } else {
                start + (x - start).rem_euclid(span)
            }
        }
    }
}

fn evaluate_segment(left: &Keyframe, right: &Keyframe, x: f64) -> f64 {
    let dx = right.x - left.x;
    if dx.abs() <= f64::EPSILON {
        return left.y;
    }
    let u = (x - left.x) / dx;
    if !left.weighted && !right.weighted {
        let m0 = left.out_tangent * dx;
        let m1 = right.in_tangent * dx;
        return hermite(left.y, m0, right.y, m1, u);
    }
    let out_weight = if left.weighted {
        left.out_weight.clamp(0.0, 1.0)
    } else {
        DEFAULT_WEIGHT
    };
    let in_weight = if right.weighted {
        right.in_weight.clamp(0.0, 1.0)
    } else {
        DEFAULT_WEIGHT
    };
    let y1 = left.y + left.out_tangent * dx * out_weight;
    let y2 = right.y - right.in_tangent * dx * in_weight;
    let t = solve_segment_t(out_weight, in_weight, u);
    cubic_bezier(left.y, y1, y2, right.y, t)
}

/// Finds `t` with `x(t) = u` for the normalized x polygon
/// `(0, out_weight, 1 - in_weight, 1)`.
///
/// Newton-Raphson first; x(t) is non-decreasing for weights in `[0, 1]`, so
/// bisection is a safe fallback when the derivative flattens.
fn solve_segment_t(out_weight: f64, in_weight: f64, u: f64) -> f64 {
    let x1 = out_weight;
    let x2 = 1.0 - in_weight;
    let mut t = u.clamp(0.0, 1.0);
    for _ in 0..NEWTON_ITERATIONS {
        let error = cubic_bezier(0.0, x1, x2, 1.0, t) - u;
        if error.abs() <= SOLVE_TOLERANCE {
            return t;
        }
        let derivative = cubic_bezier_derivative(0.0, x1, x2, 1.0, t);
        if derivative.abs() <= f64::EPSILON {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }
    let mut low = 0.0_f64;
    let mut high = 1.0_f64;
    for _ in 0..BISECTION_ITERATIONS {
        t = f64::midpoint(low, high);
        let error = cubic_bezier(0.0, x1, x2, 1.0, t) - u;
        if error.abs() <= SOLVE_TOLERANCE {
            return t;
        }
        if error > 0.0 {
            high = t;
        } else {
            low = t;
        }
    }
    t
}

fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

fn cubic_bezier_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

fn hermite(y0: f64, m0: f64, y1: f64, m1: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * y0
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * y1
        + (t3 - t2) * m1
}
