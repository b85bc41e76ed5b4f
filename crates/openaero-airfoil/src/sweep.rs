//! Sweep-angle correction for leading-edge flow.

use openaero_curves::{Curve, CurveError, Keyframe, WrapMode};

/// Rotation gain over sweep angle, tabulated every 10° up to 80°.
const ROTATION_COEFFICIENTS: [f64; 9] = [
    1.0, 1.0126, 1.0522, 1.123, 1.2334, 1.3976, 1.6369, 1.9785, 2.4421,
];

/// How much faster the flow rotates around a swept leading edge than a
/// straight one, for a sweep angle in degrees. Symmetric in the sweep
/// direction; sweeps beyond 80° use the 80° value.
///
/// # Errors
///
/// Curve construction is fallible in general; with this fixed table it
/// never fails.
pub fn leading_edge_rotation_coefficient(sweep_angle: f64) -> Result<f64, CurveError> {
    let keys = (0u32..)
        .zip(ROTATION_COEFFICIENTS)
        .map(|(step, coefficient)| Keyframe::new(f64::from(10 * step), coefficient))
        .collect();
    let curve = Curve::new(keys, WrapMode::Clamp, WrapMode::Clamp)?;
    Ok(curve.evaluate(sweep_angle.abs()))
}
