//! Leading-edge root extension parameters for a wing panel.
//!
//! A panel spans two sections, so each parameter is the mean of the root
//! and tip family values.

use crate::family::AirfoilFamily;

/// How strongly the vortex favors one stall direction over the other.
#[must_use]
pub fn efficiency_asymmetry_multiplier(root: AirfoilFamily, tip: AirfoilFamily) -> f64 {
    f64::midpoint(
        root.lerx_efficiency_asymmetry_multiplier(),
        tip.lerx_efficiency_asymmetry_multiplier(),
    )
}

/// How much of the panel the vortex covers at full efficiency.
#[must_use]
pub fn coverage_multiplier(root: AirfoilFamily, tip: AirfoilFamily) -> f64 {
    f64::midpoint(root.lerx_coverage_multiplier(), tip.lerx_coverage_multiplier())
}

/// Degrees of extra attached flow a fully efficient vortex buys.
#[must_use]
pub fn critical_angle_raise(root: AirfoilFamily, tip: AirfoilFamily) -> f64 {
    f64::midpoint(root.lerx_critical_angle_raise(), tip.lerx_critical_angle_raise())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matching_sections_pass_through() {
        let raise = critical_angle_raise(AirfoilFamily::T10Root, AirfoilFamily::T10Root);
        assert_abs_diff_eq!(raise, 15.0);
        let coverage = coverage_multiplier(AirfoilFamily::T10Wing, AirfoilFamily::T10Wing);
        assert_abs_diff_eq!(coverage, 1.0);
    }

    #[test]
    fn test_mixed_sections_average() {
        let raise = critical_angle_raise(AirfoilFamily::T10Root, AirfoilFamily::T10Wing);
        assert_abs_diff_eq!(raise, 12.5);
        let asymmetry =
            efficiency_asymmetry_multiplier(AirfoilFamily::T10Root, AirfoilFamily::Naca0012);
        assert_abs_diff_eq!(asymmetry, 0.75);
    }
}
