//! Wing panel description consumed by the curve builders.

use serde::{Deserialize, Serialize};

use crate::family::AirfoilFamily;

/// A deflectable surface along the wing chord.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deflection {
    /// Chord coverage in percent. Zero means the surface is absent and the
    /// deflection has no effect on the curves.
    pub percentage: i32,
    /// Current deflection angle in degrees.
    pub angle: f64,
}

/// Influence of a root-attached leading-edge root extension on this panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LerxSettings {
    /// Whether a LERX is attached at the wing root.
    pub exists: bool,
    /// Vortex efficiency at negative angle of attack, `0..=1`.
    pub negative_efficiency: f64,
    /// Vortex efficiency at positive angle of attack, `0..=1`.
    pub positive_efficiency: f64,
    /// Degrees of critical-angle increase at full efficiency.
    pub critical_angle_raise: f64,
    /// How much the vortex stretches the post-critical region, `0..=1`.
    pub post_critical_efficiency: f64,
}

/// Full description of a wing panel for curve synthesis.
///
/// Root and tip sections are synthesized separately and averaged key by
/// key, so a panel can blend two families and taper in thickness. Washout
/// twists the tip, shifting its curves along the angle axis before the
/// blend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WingProfile {
    /// Airfoil family at the wing root.
    pub root_family: AirfoilFamily,
    /// Airfoil family at the wing tip.
    pub tip_family: AirfoilFamily,
    /// Root thickness in percent of chord, `1..=24`.
    pub root_thickness: f64,
    /// Tip thickness in percent of chord, `1..=24`.
    pub tip_thickness: f64,
    /// Leading-edge flap.
    pub leading_edge: Deflection,
    /// Trailing-edge control surface.
    pub control_surface: Deflection,
    /// Whether the airfoil is mounted upside down.
    pub inverted: bool,
    /// Geometric twist of the tip in degrees.
    pub washout_angle: f64,
    /// Root-attached LERX influence.
    pub lerx: LerxSettings,
}

impl Default for WingProfile {
    fn default() -> Self {
        Self {
            root_family: AirfoilFamily::default(),
            tip_family: AirfoilFamily::default(),
            root_thickness: 12.0,
            tip_thickness: 12.0,
            leading_edge: Deflection::default(),
            control_surface: Deflection::default(),
            inverted: false,
            washout_angle: 0.0,
            lerx: LerxSettings::default(),
        }
    }
}
