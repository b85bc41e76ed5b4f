//! Airfoil family tables.
//!
//! Every number here is calibration data, not physics: the tables were
//! fitted so the synthesized curves match published section polars in the
//! linear range and behave plausibly beyond stall. Critical angles come
//! from a per-family thickness-band table and are interpolated inside the
//! band that contains the requested thickness.

use serde::{Deserialize, Serialize};

use openaero_curves::math::{inverse_lerp, lerp};

/// Thickness below which no band data exists, percent of chord.
pub const MIN_THICKNESS: f64 = 1.0;
/// Thickness above which no band data exists, percent of chord.
pub const MAX_THICKNESS: f64 = 24.0;

/// Reference thickness the coefficient tables are normalized to.
pub(crate) const REFERENCE_THICKNESS: f64 = 12.0;

/// Supported airfoil section families.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AirfoilFamily {
    /// Symmetrical reference section. Identical behavior at positive and
    /// negative angle of attack.
    #[default]
    Naca0012,
    /// Flat-bottomed general aviation section with strong camber.
    ClarkY,
    /// Inboard section of a blended-delta fighter wing.
    T10Root,
    /// Outboard section of a blended-delta fighter wing.
    T10Wing,
    /// Laminar-flow section with mild camber.
    Naca64_208,
}

/// One row of a critical-angle table. The positive critical angle is
/// interpolated between `min_critical_angle` and `max_critical_angle` by
/// where the thickness falls inside `[min_thickness, max_thickness]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ThicknessBand {
    min_thickness: f64,
    max_thickness: f64,
    min_critical_angle: f64,
    max_critical_angle: f64,
}

const fn band(
    min_thickness: f64,
    max_thickness: f64,
    min_critical_angle: f64,
    max_critical_angle: f64,
) -> ThicknessBand {
    ThicknessBand {
        min_thickness,
        max_thickness,
        min_critical_angle,
        max_critical_angle,
    }
}

/// Lift calibration for one family.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LiftFamilyData {
    /// Lift coefficient at zero angle of attack. Nonzero for cambered sections.
    pub zero_coefficient: f64,
    /// Linear-range lift slope per degree.
    pub lift_per_degree: f64,
    /// Ratio of the negative critical angle magnitude to the positive one.
    pub critical_asymmetry: f64,
    /// Degrees between the positive critical angle and the post-critical key.
    pub positive_post_critical_length: f64,
    bands: [ThicknessBand; 8],
}

impl LiftFamilyData {
    /// Positive critical angle for a thickness, interpolated inside its band.
    ///
    /// The thickness must already be clamped to
    /// `[MIN_THICKNESS, MAX_THICKNESS]` so exactly one band matches.
    pub fn positive_critical_angle(&self, thickness: f64) -> f64 {
        let mut selected = &self.bands[0];
        for candidate in &self.bands {
            if thickness >= candidate.min_thickness {
                selected = candidate;
            }
        }
        let fraction = inverse_lerp(selected.min_thickness, selected.max_thickness, thickness);
        lerp(
            selected.min_critical_angle,
            selected.max_critical_angle,
            fraction,
        )
    }
}

/// Drag calibration for one family.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DragFamilyData {
    /// Drag slope per degree on the negative side of the minimum.
    pub negative_drag_per_degree: f64,
    /// Drag slope per degree on the positive side of the minimum.
    pub positive_drag_per_degree: f64,
    /// Angle of attack of minimum drag.
    pub minimum_drag_angle: f64,
    /// Minimum drag coefficient at the reference thickness.
    pub base_minimum_coefficient: f64,
}

const NACA_0012_LIFT: LiftFamilyData = LiftFamilyData {
    zero_coefficient: 0.0,
    lift_per_degree: 0.1,
    critical_asymmetry: 1.0,
    positive_post_critical_length: 10.0,
    bands: [
        band(1.0, 6.0, 3.0, 7.0),
        band(6.0, 8.0, 7.0, 12.0),
        band(8.0, 10.0, 12.0, 14.0),
        band(10.0, 12.0, 14.0, 15.0),
        band(12.0, 15.0, 15.0, 17.0),
        band(15.0, 18.0, 17.0, 18.0),
        band(18.0, 21.0, 18.0, 19.0),
        band(21.0, 24.0, 19.0, 20.0),
    ],
};

const CLARK_Y_LIFT: LiftFamilyData = LiftFamilyData {
    zero_coefficient: 0.4,
    lift_per_degree: 0.0733,
    critical_asymmetry: 0.66,
    positive_post_critical_length: 10.0,
    bands: [
        band(1.0, 6.0, 3.0, 9.0),
        band(6.0, 8.0, 9.0, 13.0),
        band(8.0, 10.0, 13.0, 14.0),
        band(10.0, 12.0, 14.0, 15.0),
        band(12.0, 15.0, 15.0, 18.0),
        band(15.0, 18.0, 18.0, 19.0),
        band(18.0, 21.0, 19.0, 20.5),
        band(21.0, 24.0, 20.5, 22.0),
    ],
};

const T_10_ROOT_LIFT: LiftFamilyData = LiftFamilyData {
    zero_coefficient: 0.1,
    lift_per_degree: 0.085,
    critical_asymmetry: 0.5,
    positive_post_critical_length: 15.0,
    bands: [
        band(1.0, 6.0, 3.0, 8.0),
        band(6.0, 8.0, 8.0, 11.0),
        band(8.0, 10.0, 11.0, 13.0),
        band(10.0, 12.0, 13.0, 14.0),
        band(12.0, 15.0, 14.0, 17.0),
        band(15.0, 18.0, 17.0, 18.0),
        band(18.0, 21.0, 18.0, 20.0),
        band(21.0, 24.0, 20.0, 21.0),
    ],
};

const T_10_WING_LIFT: LiftFamilyData = LiftFamilyData {
    zero_coefficient: 0.15,
    lift_per_degree: 0.1,
    critical_asymmetry: 0.25,
    positive_post_critical_length: 5.0,
    bands: [
        band(1.0, 6.0, 2.0, 6.0),
        band(6.0, 8.0, 6.0, 9.0),
        band(8.0, 10.0, 9.0, 11.0),
        band(10.0, 12.0, 11.0, 12.0),
        band(12.0, 15.0, 12.0, 14.0),
        band(15.0, 18.0, 14.0, 16.0),
        band(18.0, 21.0, 16.0, 18.0),
        band(21.0, 24.0, 18.0, 20.0),
    ],
};

const NACA_64_208_LIFT: LiftFamilyData = LiftFamilyData {
    zero_coefficient: 0.2,
    lift_per_degree: 0.1,
    critical_asymmetry: 0.875,
    positive_post_critical_length: 15.0,
    bands: [
        band(1.0, 6.0, 3.0, 6.0),
        band(6.0, 8.0, 6.0, 8.5),
        band(8.0, 10.0, 8.5, 12.0),
        band(10.0, 12.0, 12.0, 13.0),
        band(12.0, 15.0, 13.0, 16.0),
        band(15.0, 18.0, 16.0, 17.0),
        band(18.0, 21.0, 17.0, 19.0),
        band(21.0, 24.0, 19.0, 20.0),
    ],
};

const NACA_0012_DRAG: DragFamilyData = DragFamilyData {
    negative_drag_per_degree: 0.002,
    positive_drag_per_degree: 0.002,
    minimum_drag_angle: 0.0,
    base_minimum_coefficient: 0.006,
};

const CLARK_Y_DRAG: DragFamilyData = DragFamilyData {
    negative_drag_per_degree: 0.002,
    positive_drag_per_degree: 0.003,
    minimum_drag_angle: 1.0,
    base_minimum_coefficient: 0.006,
};

const T_10_ROOT_DRAG: DragFamilyData = DragFamilyData {
    negative_drag_per_degree: 0.002,
    positive_drag_per_degree: 0.00225,
    minimum_drag_angle: 0.0,
    base_minimum_coefficient: 0.005,
};

const T_10_WING_DRAG: DragFamilyData = DragFamilyData {
    negative_drag_per_degree: 0.002,
    positive_drag_per_degree: 0.002,
    minimum_drag_angle: 1.5,
    base_minimum_coefficient: 0.005,
};

const NACA_64_208_DRAG: DragFamilyData = DragFamilyData {
    negative_drag_per_degree: 0.002,
    positive_drag_per_degree: 0.0025,
    minimum_drag_angle: 0.0,
    base_minimum_coefficient: 0.006,
};

/// Curve weights around the critical angles. The inside weight keeps the
/// pre-stall segment close to linear; the outside weight shapes how abrupt
/// the stall break is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalWeights {
    /// Weight on the linear-range side of the critical key.
    pub inside: f64,
    /// Weight on the post-stall side of the critical key.
    pub outside: f64,
    /// Weight on the critical side of the post-critical key.
    pub inside_post: f64,
}

impl AirfoilFamily {
    pub(crate) fn lift_data(self) -> &'static LiftFamilyData {
        match self {
            Self::Naca0012 => &NACA_0012_LIFT,
            Self::ClarkY => &CLARK_Y_LIFT,
            Self::T10Root => &T_10_ROOT_LIFT,
            Self::T10Wing => &T_10_WING_LIFT,
            Self::Naca64_208 => &NACA_64_208_LIFT,
        }
    }

    pub(crate) fn drag_data(self) -> &'static DragFamilyData {
        match self {
            Self::Naca0012 => &NACA_0012_DRAG,
            Self::ClarkY => &CLARK_Y_DRAG,
            Self::T10Root => &T_10_ROOT_DRAG,
            Self::T10Wing => &T_10_WING_DRAG,
            Self::Naca64_208 => &NACA_64_208_DRAG,
        }
    }

    /// Multiplier on the critical Mach number of this section.
    #[must_use]
    pub fn critical_mach_multiplier(self) -> f64 {
        match self {
            Self::T10Wing => 1.5,
            Self::T10Root => 1.25,
            _ => 1.0,
        }
    }

    /// Intensity of post-stall buffet for this section.
    #[must_use]
    pub fn post_critical_shake_multiplier(self) -> f64 {
        match self {
            Self::T10Wing => 0.2,
            Self::T10Root => 0.125,
            _ => 0.1,
        }
    }

    /// Bezier weights at the critical and post-critical lift keys.
    /// These define how stable the section is right after stall.
    #[must_use]
    pub fn critical_weights(self) -> CriticalWeights {
        match self {
            Self::T10Wing => CriticalWeights {
                inside: 0.3,
                outside: 0.25,
                inside_post: 0.75,
            },
            _ => CriticalWeights {
                inside: 0.1,
                outside: 1.0,
                inside_post: 0.25,
            },
        }
    }

    /// How strongly a LERX vortex acts at negative angle of attack compared
    /// to positive, in `(0, 1]`.
    #[must_use]
    pub fn lerx_efficiency_asymmetry_multiplier(self) -> f64 {
        match self {
            Self::T10Root => 0.5,
            Self::T10Wing => 0.25,
            _ => 1.0,
        }
    }

    /// How far the LERX vortex carries over panels built from this section.
    #[must_use]
    pub fn lerx_coverage_multiplier(self) -> f64 {
        match self {
            Self::T10Wing => 1.0,
            Self::T10Root => 0.75,
            _ => 0.5,
        }
    }

    /// Degrees of critical-angle increase a full-efficiency LERX grants.
    #[must_use]
    pub fn lerx_critical_angle_raise(self) -> f64 {
        match self {
            Self::T10Root => 15.0,
            Self::T10Wing => 10.0,
            _ => 5.0,
        }
    }
}

/// Critical Mach number for a wing blending the root and tip sections.
///
/// Thin sections delay compressibility effects: the value falls from 1.0 at
/// 1% thickness to 0.62 at 15% and 0.47 at 24%, scaled by the blended
/// family multiplier.
#[must_use]
pub fn critical_mach_number(
    root: AirfoilFamily,
    tip: AirfoilFamily,
    root_thickness: f64,
    tip_thickness: f64,
) -> f64 {
    let multiplier = f64::midpoint(
        root.critical_mach_multiplier(),
        tip.critical_mach_multiplier(),
    );
    let thickness = f64::midpoint(root_thickness, tip_thickness);
    if thickness <= 15.0 {
        lerp(1.0, 0.62, inverse_lerp(1.0, 15.0, thickness)) * multiplier
    } else {
        lerp(0.62, 0.47, inverse_lerp(15.0, 24.0, thickness)) * multiplier
    }
}

/// Post-stall buffet intensity for a wing blending the root and tip sections.
#[must_use]
pub fn post_critical_shake(root: AirfoilFamily, tip: AirfoilFamily) -> f64 {
    f64::midpoint(
        root.post_critical_shake_multiplier(),
        tip.post_critical_shake_multiplier(),
    )
}
