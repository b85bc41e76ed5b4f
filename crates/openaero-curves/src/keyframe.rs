//! Curve knots with per-side tangents and tangent weights.

use serde::{Deserialize, Serialize};

/// Default handle reach for an unweighted tangent side, as a fraction of the
/// segment span. Matches the classic cubic-Hermite-as-Bezier conversion.
pub const DEFAULT_WEIGHT: f64 = 1.0 / 3.0;

/// A single knot of a [`Curve`](crate::Curve).
///
/// `x` is the domain variable (angle of attack in degrees for the aerodynamic
/// curves, sweep angle for the auxiliary ones) and `y` the coefficient at that
/// point. Tangents are slopes in y-per-x units. Weights control how far each
/// tangent handle reaches into the neighboring segment and only take effect
/// when `weighted` is set; they are interpreted clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Domain coordinate of the knot.
    pub x: f64,
    /// Curve value at `x`.
    pub y: f64,
    /// Slope on the incoming (left) side.
    pub in_tangent: f64,
    /// Slope on the outgoing (right) side.
    pub out_tangent: f64,
    /// Handle reach of the incoming tangent, fraction of the segment span.
    pub in_weight: f64,
    /// Handle reach of the outgoing tangent, fraction of the segment span.
    pub out_weight: f64,
    /// Whether the weights participate in evaluation.
    pub weighted: bool,
}

impl Keyframe {
    /// Creates a weighted keyframe at `(x, y)` with zero tangents and zero
    /// weights, the shape the synthesis pipeline starts every knot from.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            weighted: true,
            ..Self::default()
        }
    }
}
