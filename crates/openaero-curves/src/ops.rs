//! Key-array operations used by the synthesis pipelines.
//!
//! These operate on plain keyframe slices rather than on [`Curve`]s because
//! the pipelines shape their key arrays in place and only build a validated
//! curve at the very end.
//!
//! [`Curve`]: crate::Curve

use crate::error::CurveError;
use crate::keyframe::Keyframe;

/// Slope of the chord from `key` towards `target`, scaled by `multiplier`.
///
/// Returns 0 when the two keys (nearly) share an x coordinate.
#[must_use]
pub fn tangent_look_at(key: &Keyframe, target: &Keyframe, multiplier: f64) -> f64 {
    chord_slope(key, target, multiplier)
}

/// Slope of the chord arriving at `key` from `source`, scaled by
/// `multiplier`.
///
/// Numerically identical to [`tangent_look_at`]; the distinct name keeps call
/// sites readable about which side of the segment is being aimed.
#[must_use]
pub fn tangent_look_from(key: &Keyframe, source: &Keyframe, multiplier: f64) -> f64 {
    chord_slope(key, source, multiplier)
}

fn chord_slope(a: &Keyframe, b: &Keyframe, multiplier: f64) -> f64 {
    let dx = a.x - b.x;
    if dx.abs() <= f64::EPSILON {
        return 0.0;
    }
    (a.y - b.y) / dx * multiplier
}

/// Mirrors a key array through the origin: both x and y change sign and the
/// key order reverses.
///
/// Tangent sides and weight sides swap without a sign change; mirroring both
/// axes leaves slopes intact. Applying the operation twice restores the
/// original array. This is the inversion used for lift curves, where flying
/// an inverted section negates the produced coefficient.
pub fn invert_x_and_y(keys: &mut [Keyframe]) {
    keys.reverse();
    for key in keys.iter_mut() {
        key.x = -key.x;
        key.y = -key.y;
        std::mem::swap(&mut key.in_tangent, &mut key.out_tangent);
        std::mem::swap(&mut key.in_weight, &mut key.out_weight);
    }
}

/// Mirrors a key array across the y axis: x changes sign, values stay, and
/// the key order reverses.
///
/// Tangent sides swap with a sign change (only one axis is mirrored); weight
/// sides swap unchanged. Applying the operation twice restores the original
/// array. This is the inversion used for drag curves, which stay positive for
/// an inverted section.
pub fn invert_y(keys: &mut [Keyframe]) {
    keys.reverse();
    for key in keys.iter_mut() {
        key.x = -key.x;
        let in_tangent = key.in_tangent;
        key.in_tangent = -key.out_tangent;
        key.out_tangent = -in_tangent;
        std::mem::swap(&mut key.in_weight, &mut key.out_weight);
    }
}

/// Averages two equally sized key arrays field by field.
///
/// The synthesis pipelines build separate root and tip key arrays and blend
/// them into the single span-averaged curve with this. The `weighted` flag is
/// taken from the first array; both sides always agree in practice.
///
/// # Errors
///
/// Returns [`CurveError::KeyCountMismatch`] when the arrays differ in length.
pub fn merge(first: &[Keyframe], second: &[Keyframe]) -> Result<Vec<Keyframe>, CurveError> {
    if first.len() != second.len() {
        return Err(CurveError::KeyCountMismatch {
            left: first.len(),
            right: second.len(),
        });
    }
    Ok(first
        .iter()
        .zip(second)
        .map(|(a, b)| Keyframe {
            x: f64::midpoint(a.x, b.x),
            y: f64::midpoint(a.y, b.y),
            in_tangent: f64::midpoint(a.in_tangent, b.in_tangent),
            out_tangent: f64::midpoint(a.out_tangent, b.out_tangent),
            in_weight: f64::midpoint(a.in_weight, b.in_weight),
            out_weight: f64::midpoint(a.out_weight, b.out_weight),
            weighted: a.weighted,
        })
        .collect())
}
