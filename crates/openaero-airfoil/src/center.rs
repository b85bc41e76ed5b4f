//! Aerodynamic center travel over angle of attack.

use openaero_curves::{Curve, CurveError, Keyframe, WrapMode};

/// Build the aerodynamic-center curve for a panel whose lift breaks at the
/// given critical angles.
///
/// The center sits at quarter chord while the flow is attached and walks
/// back to half chord as the panel approaches ±90°. Outside that range the
/// curve clamps, so reversed flow keeps the half-chord center.
///
/// # Errors
///
/// Returns an error for non-finite or out-of-order critical angles.
pub fn calculate_aerodynamic_center_curve(
    negative_critical_angle: f64,
    positive_critical_angle: f64,
) -> Result<Curve, CurveError> {
    let mut keys = [
        Keyframe::new(-90.0, 0.5),
        Keyframe::new(negative_critical_angle, 0.25),
        Keyframe::new(positive_critical_angle, 0.25),
        Keyframe::new(90.0, 0.5),
    ];
    keys[0].out_weight = 0.5;
    keys[1].in_weight = 0.5;
    keys[2].out_weight = 0.5;
    keys[3].in_weight = 0.5;

    Curve::new(keys.to_vec(), WrapMode::Clamp, WrapMode::Clamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => panic!("unexpected error: {error:?}"),
        }
    }

    #[test]
    fn test_quarter_chord_between_critical_angles() {
        let curve = must(calculate_aerodynamic_center_curve(-15.0, 15.0));
        assert_abs_diff_eq!(curve.evaluate(0.0), 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.evaluate(-15.0), 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.evaluate(15.0), 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_half_chord_past_perpendicular() {
        let curve = must(calculate_aerodynamic_center_curve(-15.0, 15.0));
        assert_abs_diff_eq!(curve.evaluate(90.0), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.evaluate(180.0), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.evaluate(-135.0), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_center_walks_back_after_stall() {
        let curve = must(calculate_aerodynamic_center_curve(-15.0, 15.0));
        let mut previous = curve.evaluate(15.0);
        for angle in [30.0, 45.0, 60.0, 75.0, 90.0] {
            let value = curve.evaluate(angle);
            assert!(value >= previous, "retreat reversed at {angle}°");
            previous = value;
        }
    }

    #[test]
    fn test_rejects_crossed_critical_angles() {
        assert!(calculate_aerodynamic_center_curve(15.0, -15.0).is_err());
    }
}
