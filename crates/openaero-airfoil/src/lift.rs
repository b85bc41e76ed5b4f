//! Lift curve synthesis.
//!
//! A lift curve is 17 weighted keyframes spanning -180° to 180°. The
//! landmarks from [`LiftCharacteristics`] fill the key positions, family
//! weights shape the segments between them, and the deflection passes then
//! move the stall keys around while keeping the post-critical keys on the
//! chord between the stall break and the flat-plate peak. Root and tip
//! sections go through the whole pipeline separately and are averaged key
//! by key at the end.
//!
//! Pass order is load-bearing: smoothing weights are assigned before the
//! inversion so they travel with their keys, and the overshoot fix runs
//! after every deflection pass because any of them can push a critical key
//! past its post-critical neighbor.

use serde::{Deserialize, Serialize};

use openaero_curves::math::{clamp, inverse_lerp, lerp};
use openaero_curves::ops::{invert_x_and_y, merge, tangent_look_at, tangent_look_from};
use openaero_curves::{Curve, CurveError, Keyframe, WrapMode};

use crate::characteristics::{Landmark, LiftCharacteristics, post_critical_landmarks};
use crate::family::AirfoilFamily;
use crate::profile::{Deflection, LerxSettings, WingProfile};

// Key layout, negative side mirroring the positive one around ZERO.
const NEG_LAST: usize = 0;
const NEG_REVERTED_CRITICAL: usize = 1;
const NEG_REVERTED_POST: usize = 2;
const NEG_REVERTED_FORTY_FIVE: usize = 3;
const NEG_PERPENDICULAR: usize = 4;
const NEG_FORTY_FIVE: usize = 5;
const NEG_POST_CRITICAL: usize = 6;
const NEG_CRITICAL: usize = 7;
const ZERO: usize = 8;
const POS_CRITICAL: usize = 9;
const POS_POST_CRITICAL: usize = 10;
const POS_FORTY_FIVE: usize = 11;
const POS_PERPENDICULAR: usize = 12;
const POS_REVERTED_FORTY_FIVE: usize = 13;
const POS_REVERTED_POST: usize = 14;
const POS_REVERTED_CRITICAL: usize = 15;
const POS_LAST: usize = 16;

const KEY_COUNT: usize = 17;

/// Result of lift-curve synthesis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiftCurveResult {
    /// Lift coefficient over angle of attack in degrees, looping across
    /// the ±180° seam.
    pub curve: Curve,
    /// Mean linear-range lift slope per degree of the two sections.
    pub lift_per_degree: f64,
    /// Control-surface lift efficiency after the high-deflection falloff,
    /// `0..=1`. Zero when the panel has no control surface.
    pub control_surface_efficiency: f64,
}

impl LiftCurveResult {
    /// Angle of the negative stall break, after all deflection effects.
    #[must_use]
    pub fn negative_critical_angle(&self) -> Option<f64> {
        self.curve.keys().get(NEG_CRITICAL).map(|key| key.x)
    }

    /// Angle of the positive stall break, after all deflection effects.
    #[must_use]
    pub fn positive_critical_angle(&self) -> Option<f64> {
        self.curve.keys().get(POS_CRITICAL).map(|key| key.x)
    }
}

/// Synthesize the lift curve for a wing panel.
///
/// # Errors
///
/// Returns an error if the synthesized keys do not form a valid curve,
/// which only happens for non-finite profile inputs.
pub fn calculate_lift_curve(profile: &WingProfile) -> Result<LiftCurveResult, CurveError> {
    let (root_keys, root_per_degree, control_surface_efficiency) =
        panel_keys(profile.root_family, profile.root_thickness, profile, 0.0);
    let (tip_keys, tip_per_degree, _) = panel_keys(
        profile.tip_family,
        profile.tip_thickness,
        profile,
        profile.washout_angle,
    );

    let keys = merge(&root_keys, &tip_keys)?;
    let curve = Curve::new(keys, WrapMode::Loop, WrapMode::Loop)?;

    Ok(LiftCurveResult {
        curve,
        lift_per_degree: f64::midpoint(root_per_degree, tip_per_degree),
        control_surface_efficiency,
    })
}

/// Run the full pipeline for one section. Returns the keys, the section's
/// lift slope, and the control-surface efficiency (zero without one).
fn panel_keys(
    family: AirfoilFamily,
    thickness: f64,
    profile: &WingProfile,
    washout_angle: f64,
) -> ([Keyframe; KEY_COUNT], f64, f64) {
    let characteristics = LiftCharacteristics::calculate(family, thickness);
    let per_degree = characteristics.lift_per_degree;

    let mut keys = layout_keys(&characteristics);
    smooth_keys(&mut keys, family);

    if profile.inverted {
        invert_x_and_y(&mut keys);
    }

    // Measured after the inversion so the lengths match the key order.
    let negative_length = keys[NEG_CRITICAL].x - keys[NEG_POST_CRITICAL].x;
    let positive_length = keys[POS_POST_CRITICAL].x - keys[POS_CRITICAL].x;

    if profile.leading_edge.percentage > 0 {
        apply_leading_edge(
            &mut keys,
            profile.leading_edge,
            negative_length,
            positive_length,
            per_degree,
        );
    }

    let mut control_surface_efficiency = 0.0;
    if profile.control_surface.percentage > 0 {
        control_surface_efficiency = apply_control_surface(
            &mut keys,
            profile.control_surface,
            negative_length,
            positive_length,
            per_degree,
        );
    }

    if profile.lerx.exists {
        apply_lerx(
            &mut keys,
            &profile.lerx,
            per_degree,
            negative_length,
            positive_length,
        );
    }

    fix_overshoot_smoothing(&mut keys);
    apply_washout(&mut keys, washout_angle);

    (keys, per_degree, control_surface_efficiency)
}

fn layout_keys(characteristics: &LiftCharacteristics) -> [Keyframe; KEY_COUNT] {
    [
        characteristics.negative_last.into(),
        characteristics.negative_reverted_critical.into(),
        characteristics.negative_reverted_post_critical.into(),
        characteristics.negative_reverted_forty_five.into(),
        characteristics.negative_perpendicular.into(),
        characteristics.negative_forty_five.into(),
        characteristics.negative_post_critical.into(),
        characteristics.negative_critical.into(),
        characteristics.zero.into(),
        characteristics.positive_critical.into(),
        characteristics.positive_post_critical.into(),
        characteristics.positive_forty_five.into(),
        characteristics.positive_perpendicular.into(),
        characteristics.positive_reverted_forty_five.into(),
        characteristics.positive_reverted_post_critical.into(),
        characteristics.positive_reverted_critical.into(),
        characteristics.positive_last.into(),
    ]
}

fn smooth_keys(keys: &mut [Keyframe; KEY_COUNT], family: AirfoilFamily) {
    let weights = family.critical_weights();
    keys[NEG_CRITICAL].in_weight = weights.outside;
    keys[NEG_CRITICAL].out_weight = weights.inside;
    keys[POS_CRITICAL].in_weight = weights.inside;
    keys[POS_CRITICAL].out_weight = weights.outside;

    keys[NEG_POST_CRITICAL].in_weight = 0.25;
    keys[NEG_POST_CRITICAL].out_weight = weights.inside_post;
    keys[POS_POST_CRITICAL].in_weight = weights.inside_post;
    keys[POS_POST_CRITICAL].out_weight = 0.25;

    keys[NEG_FORTY_FIVE].in_weight = 0.25;
    keys[NEG_FORTY_FIVE].out_weight = 0.5;
    keys[POS_FORTY_FIVE].in_weight = 0.5;
    keys[POS_FORTY_FIVE].out_weight = 0.25;

    keys[NEG_REVERTED_FORTY_FIVE].in_weight = 0.5;
    keys[NEG_REVERTED_FORTY_FIVE].out_weight = 0.25;
    keys[POS_REVERTED_FORTY_FIVE].in_weight = 0.25;
    keys[POS_REVERTED_FORTY_FIVE].out_weight = 0.5;

    keys[NEG_REVERTED_POST].in_weight = 0.75;
    keys[NEG_REVERTED_POST].out_weight = 0.25;
    keys[POS_REVERTED_POST].in_weight = 0.25;
    keys[POS_REVERTED_POST].out_weight = 0.75;

    keys[NEG_REVERTED_CRITICAL].in_weight = 0.25;
    keys[NEG_REVERTED_CRITICAL].out_weight = 0.1;
    keys[POS_REVERTED_CRITICAL].in_weight = 0.1;
    keys[POS_REVERTED_CRITICAL].out_weight = 0.25;
}

/// A deflected leading edge shifts both stall breaks toward the deflection
/// and adds camber lift, half as much on the side the flap bends away from.
fn apply_leading_edge(
    keys: &mut [Keyframe; KEY_COUNT],
    surface: Deflection,
    negative_length: f64,
    positive_length: f64,
    per_degree: f64,
) {
    let mut positive_multiplier = 0.5;
    let mut negative_multiplier = 1.0;
    if surface.angle < 0.0 {
        std::mem::swap(&mut positive_multiplier, &mut negative_multiplier);
    }

    let angle_increase = surface.angle * f64::from(surface.percentage) / 100.0;
    let negative_increase = angle_increase * per_degree * negative_multiplier;
    let positive_increase = angle_increase * per_degree * positive_multiplier;

    keys[NEG_CRITICAL].x += angle_increase;
    keys[NEG_CRITICAL].y += negative_increase;
    keys[POS_CRITICAL].x += angle_increase;
    keys[POS_CRITICAL].y += positive_increase;

    clamp_critical_keys_to_zero(keys);
    push_forty_five(keys, negative_length, positive_length);
    recompute_post_critical(
        keys,
        Landmark::new(keys[ZERO].x, keys[ZERO].y),
        negative_length,
        positive_length,
    );
}

/// A deflected control surface lifts the whole linear range, narrows the
/// stall margin symmetrically, and loses authority past 45° of deflection.
/// Returns the lift efficiency after that falloff.
fn apply_control_surface(
    keys: &mut [Keyframe; KEY_COUNT],
    surface: Deflection,
    negative_length: f64,
    positive_length: f64,
    per_degree: f64,
) -> f64 {
    const LIFT_INCREASE_LIMIT: f64 = 45.0;
    const ROTATION_LIMIT: f64 = 90.0;
    let efficiency = lerp(
        1.0,
        0.0,
        inverse_lerp(LIFT_INCREASE_LIMIT, ROTATION_LIMIT, surface.angle.abs()),
    );

    let lift_increase =
        surface.angle * per_degree * f64::from(surface.percentage) / 100.0 * efficiency;

    keys[ZERO].y += lift_increase;
    keys[NEG_CRITICAL].y += lift_increase;
    keys[POS_CRITICAL].y += lift_increase;

    let angle_decrease = surface.angle.abs() * f64::from(surface.percentage) / 100.0 * 0.5;
    let coefficient_decrease = angle_decrease * per_degree;
    keys[NEG_CRITICAL].x += angle_decrease;
    keys[NEG_CRITICAL].y += coefficient_decrease;
    keys[POS_CRITICAL].x -= angle_decrease;
    keys[POS_CRITICAL].y -= coefficient_decrease;

    let forty_five_increase = lift_increase * 0.1;
    keys[NEG_FORTY_FIVE].y += forty_five_increase;
    keys[POS_FORTY_FIVE].y += forty_five_increase;

    let forty_five_efficiency = lerp(
        1.0,
        1.0 - f64::from(surface.percentage) / 100.0,
        inverse_lerp(LIFT_INCREASE_LIMIT, ROTATION_LIMIT, surface.angle.abs()),
    );
    keys[NEG_FORTY_FIVE].y *= forty_five_efficiency;
    keys[POS_FORTY_FIVE].y *= forty_five_efficiency;

    clamp_critical_keys_to_zero(keys);
    recompute_post_critical(
        keys,
        Landmark::new(0.0, forty_five_increase),
        negative_length,
        positive_length,
    );

    efficiency
}

/// A LERX vortex delays both stalls in proportion to its efficiency on each
/// side, then flattens the post-stall drop back toward the line between the
/// stall break and the flat-plate peak.
fn apply_lerx(
    keys: &mut [Keyframe; KEY_COUNT],
    lerx: &LerxSettings,
    per_degree: f64,
    mut negative_length: f64,
    mut positive_length: f64,
) {
    let negative_raise = lerx.critical_angle_raise * lerx.negative_efficiency;
    let positive_raise = lerx.critical_angle_raise * lerx.positive_efficiency;

    keys[NEG_CRITICAL].x -= negative_raise;
    keys[NEG_CRITICAL].y -= negative_raise * per_degree;
    keys[POS_CRITICAL].x += positive_raise;
    keys[POS_CRITICAL].y += positive_raise * per_degree;

    negative_length += lerx.critical_angle_raise * lerx.post_critical_efficiency;
    positive_length += lerx.critical_angle_raise * lerx.post_critical_efficiency;
    push_forty_five(keys, negative_length, positive_length);

    recompute_post_critical(
        keys,
        Landmark::new(keys[ZERO].x, keys[ZERO].y),
        negative_length,
        positive_length,
    );

    // Post-critical keys settle onto the critical-to-peak chord, but only
    // as far as the vortex is efficient on that side. The tangents blend
    // toward the chord slopes computed at the fully settled positions.
    let settled_negative = keys[NEG_POST_CRITICAL].y;
    let settled_positive = keys[POS_POST_CRITICAL].y;
    let chord_negative = lerp(
        keys[NEG_CRITICAL].y,
        keys[NEG_FORTY_FIVE].y,
        inverse_lerp(
            keys[NEG_CRITICAL].x,
            keys[NEG_FORTY_FIVE].x,
            keys[NEG_POST_CRITICAL].x,
        ),
    );
    let chord_positive = lerp(
        keys[POS_CRITICAL].y,
        keys[POS_FORTY_FIVE].y,
        inverse_lerp(
            keys[POS_CRITICAL].x,
            keys[POS_FORTY_FIVE].x,
            keys[POS_POST_CRITICAL].x,
        ),
    );
    keys[NEG_POST_CRITICAL].y = chord_negative;
    keys[POS_POST_CRITICAL].y = chord_positive;

    const POST_CRITICAL_TANGENT_MULTIPLIER: f64 = 2.0;
    let tangent = tangent_look_at(
        &keys[NEG_POST_CRITICAL],
        &keys[NEG_CRITICAL],
        POST_CRITICAL_TANGENT_MULTIPLIER,
    );
    keys[NEG_POST_CRITICAL].out_tangent = lerp(
        keys[NEG_POST_CRITICAL].out_tangent,
        tangent,
        lerx.negative_efficiency,
    );
    let tangent = tangent_look_at(
        &keys[POS_POST_CRITICAL],
        &keys[POS_CRITICAL],
        POST_CRITICAL_TANGENT_MULTIPLIER,
    );
    keys[POS_POST_CRITICAL].in_tangent = lerp(
        keys[POS_POST_CRITICAL].in_tangent,
        tangent,
        lerx.positive_efficiency,
    );

    let tangent = tangent_look_at(
        &keys[NEG_POST_CRITICAL],
        &keys[NEG_FORTY_FIVE],
        POST_CRITICAL_TANGENT_MULTIPLIER,
    );
    keys[NEG_POST_CRITICAL].in_tangent = lerp(
        keys[NEG_POST_CRITICAL].in_tangent,
        tangent,
        lerx.negative_efficiency,
    );
    let tangent = tangent_look_at(
        &keys[POS_POST_CRITICAL],
        &keys[POS_FORTY_FIVE],
        POST_CRITICAL_TANGENT_MULTIPLIER,
    );
    keys[POS_POST_CRITICAL].out_tangent = lerp(
        keys[POS_POST_CRITICAL].out_tangent,
        tangent,
        lerx.positive_efficiency,
    );

    const FORTY_FIVE_TANGENT_MULTIPLIER: f64 = 0.5;
    let tangent = tangent_look_at(
        &keys[POS_FORTY_FIVE],
        &keys[POS_POST_CRITICAL],
        FORTY_FIVE_TANGENT_MULTIPLIER,
    );
    keys[POS_FORTY_FIVE].in_tangent = lerp(
        keys[POS_FORTY_FIVE].in_tangent,
        tangent,
        lerx.positive_efficiency,
    );
    let tangent = tangent_look_at(
        &keys[NEG_FORTY_FIVE],
        &keys[NEG_POST_CRITICAL],
        FORTY_FIVE_TANGENT_MULTIPLIER,
    );
    keys[NEG_FORTY_FIVE].out_tangent = lerp(
        keys[NEG_FORTY_FIVE].out_tangent,
        tangent,
        lerx.negative_efficiency,
    );

    let tangent = tangent_look_from(
        &keys[POS_FORTY_FIVE],
        &keys[POS_POST_CRITICAL],
        FORTY_FIVE_TANGENT_MULTIPLIER,
    );
    keys[POS_FORTY_FIVE].out_tangent = lerp(
        keys[POS_FORTY_FIVE].out_tangent,
        tangent,
        lerx.positive_efficiency,
    );
    let tangent = tangent_look_from(
        &keys[NEG_FORTY_FIVE],
        &keys[NEG_POST_CRITICAL],
        FORTY_FIVE_TANGENT_MULTIPLIER,
    );
    keys[NEG_FORTY_FIVE].in_tangent = lerp(
        keys[NEG_FORTY_FIVE].in_tangent,
        tangent,
        lerx.negative_efficiency,
    );

    keys[NEG_POST_CRITICAL].y = lerp(settled_negative, chord_negative, lerx.negative_efficiency);
    keys[POS_POST_CRITICAL].y = lerp(settled_positive, chord_positive, lerx.positive_efficiency);
}

/// Deflections may not move a critical key past the zero key.
fn clamp_critical_keys_to_zero(keys: &mut [Keyframe; KEY_COUNT]) {
    keys[NEG_CRITICAL].x = clamp(keys[NEG_CRITICAL].x, keys[NEG_CRITICAL].x, keys[ZERO].x);
    keys[NEG_CRITICAL].y = clamp(keys[NEG_CRITICAL].y, keys[NEG_CRITICAL].y, keys[ZERO].y);
    keys[POS_CRITICAL].x = clamp(keys[POS_CRITICAL].x, keys[ZERO].x, keys[POS_CRITICAL].x);
    keys[POS_CRITICAL].y = clamp(keys[POS_CRITICAL].y, keys[ZERO].y, keys[POS_CRITICAL].y);
}

/// Keep the flat-plate peaks outside the stall regions.
fn push_forty_five(keys: &mut [Keyframe; KEY_COUNT], negative_length: f64, positive_length: f64) {
    if keys[POS_CRITICAL].x + positive_length > keys[POS_FORTY_FIVE].x {
        keys[POS_FORTY_FIVE].x = keys[POS_CRITICAL].x + positive_length;
    }
    if keys[NEG_CRITICAL].x - negative_length < keys[NEG_FORTY_FIVE].x {
        keys[NEG_FORTY_FIVE].x = keys[NEG_CRITICAL].x - negative_length;
    }
}

fn recompute_post_critical(
    keys: &mut [Keyframe; KEY_COUNT],
    zero: Landmark,
    negative_length: f64,
    positive_length: f64,
) {
    let (negative, positive) = post_critical_landmarks(
        zero,
        keys[NEG_CRITICAL].x,
        keys[POS_CRITICAL].x,
        negative_length,
        positive_length,
        Landmark::new(keys[NEG_FORTY_FIVE].x, keys[NEG_FORTY_FIVE].y),
        Landmark::new(keys[POS_FORTY_FIVE].x, keys[POS_FORTY_FIVE].y),
    );
    keys[NEG_POST_CRITICAL].x = negative.angle;
    keys[NEG_POST_CRITICAL].y = negative.coefficient;
    keys[POS_POST_CRITICAL].x = positive.angle;
    keys[POS_POST_CRITICAL].y = positive.coefficient;
}

/// After the deflection passes a critical key can sit below (or above, on
/// the negative side) its post-critical neighbor, which would make the
/// weighted segment loop back. Drop the weights on the offending key and
/// aim its neighbor's tangents along the surrounding chords instead.
fn fix_overshoot_smoothing(keys: &mut [Keyframe; KEY_COUNT]) {
    if keys[POS_CRITICAL].y < keys[POS_POST_CRITICAL].y {
        keys[POS_CRITICAL].out_weight = 0.0;
        keys[POS_CRITICAL].in_weight = 0.0;

        keys[POS_POST_CRITICAL].in_tangent =
            tangent_look_at(&keys[POS_POST_CRITICAL], &keys[POS_CRITICAL], 1.0);
        let limit = tangent_look_at(&keys[POS_POST_CRITICAL], &keys[POS_FORTY_FIVE], 1.0);
        keys[POS_POST_CRITICAL].out_tangent = clamp(
            tangent_look_from(&keys[POS_POST_CRITICAL], &keys[POS_CRITICAL], 1.0),
            0.0,
            limit,
        );
    }
    if keys[NEG_CRITICAL].y > keys[NEG_POST_CRITICAL].y {
        keys[NEG_CRITICAL].in_weight = 0.0;
        keys[NEG_CRITICAL].out_weight = 0.0;

        keys[NEG_POST_CRITICAL].out_tangent =
            tangent_look_at(&keys[NEG_POST_CRITICAL], &keys[NEG_CRITICAL], 1.0);
        let limit = tangent_look_at(&keys[NEG_POST_CRITICAL], &keys[NEG_FORTY_FIVE], 1.0);
        keys[NEG_POST_CRITICAL].in_tangent = clamp(
            tangent_look_from(&keys[NEG_POST_CRITICAL], &keys[NEG_CRITICAL], 1.0),
            0.0,
            limit,
        );
    }

    if keys[NEG_REVERTED_CRITICAL].y < keys[NEG_REVERTED_POST].y {
        keys[NEG_REVERTED_CRITICAL].out_weight = 0.0;
        keys[NEG_REVERTED_CRITICAL].in_weight = 0.0;

        keys[NEG_REVERTED_POST].in_tangent =
            tangent_look_at(&keys[NEG_REVERTED_POST], &keys[NEG_REVERTED_CRITICAL], 1.0);
        let limit = tangent_look_at(&keys[NEG_REVERTED_POST], &keys[POS_FORTY_FIVE], 1.0);
        keys[NEG_REVERTED_POST].out_tangent = clamp(
            tangent_look_from(&keys[NEG_REVERTED_POST], &keys[NEG_REVERTED_CRITICAL], 1.0),
            0.0,
            limit,
        );
    }
    if keys[POS_REVERTED_CRITICAL].y > keys[POS_REVERTED_POST].y {
        keys[POS_REVERTED_CRITICAL].in_weight = 0.0;
        keys[POS_REVERTED_CRITICAL].out_weight = 0.0;

        keys[POS_REVERTED_POST].out_tangent =
            tangent_look_at(&keys[POS_REVERTED_POST], &keys[POS_REVERTED_CRITICAL], 1.0);
        let limit = tangent_look_at(&keys[POS_REVERTED_POST], &keys[NEG_FORTY_FIVE], 1.0);
        keys[POS_REVERTED_POST].in_tangent = clamp(
            tangent_look_from(&keys[POS_REVERTED_POST], &keys[POS_REVERTED_CRITICAL], 1.0),
            0.0,
            limit,
        );
    }
}

fn apply_washout(keys: &mut [Keyframe; KEY_COUNT], washout_angle: f64) {
    for key in keys.iter_mut() {
        key.x -= washout_angle;
    }
}
