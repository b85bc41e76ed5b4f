//! Drag curve synthesis.
//!
//! A drag curve is 9 weighted keyframes spanning -180° to 180°, anchored at
//! the minimum-drag angle and rising to the flat-plate coefficient at ±90°.
//! The stall keys sit at the same angles as the lift curve's critical keys,
//! which is why [`DragCharacteristics`] takes those angles as inputs.
//!
//! Deflection passes run on the raw landmarks; the linear-overrun
//! correction and the smoothing pass run last because both depend on the
//! final stall positions. The control-surface pass needs a drag response
//! for the surface angle itself, which it reads off a finished copy of the
//! undeflected curve.

use serde::{Deserialize, Serialize};

use openaero_curves::math::{clamp, inverse_lerp, lerp};
use openaero_curves::ops::{invert_y, merge, tangent_look_at, tangent_look_from};
use openaero_curves::{Curve, CurveError, Keyframe, WrapMode};

use crate::characteristics::{DragCharacteristics, LiftCharacteristics};
use crate::family::AirfoilFamily;
use crate::profile::{Deflection, LerxSettings, WingProfile};

const NEG_LAST: usize = 0;
const NEG_REVERTED_CRITICAL: usize = 1;
const NEG_PERPENDICULAR: usize = 2;
const NEG_CRITICAL: usize = 3;
const MINIMUM: usize = 4;
const POS_CRITICAL: usize = 5;
const POS_PERPENDICULAR: usize = 6;
const POS_REVERTED_CRITICAL: usize = 7;
const POS_LAST: usize = 8;

const KEY_COUNT: usize = 9;

/// Attached flow stays roughly linear out to this angle; beyond it the
/// separation bubble adds drag in steps.
const MAX_LINEAR_ANGLE: f64 = 15.0;
const OVERRUN_STEP: f64 = 5.0;
const OVERRUN_STEP_DRAG: f64 = 0.03;

/// Result of drag-curve synthesis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragCurveResult {
    /// Drag coefficient over angle of attack in degrees, looping across
    /// the ±180° seam.
    pub curve: Curve,
    /// Mean linear-range drag slope per degree below the minimum-drag
    /// angle, over the two sections.
    pub negative_drag_per_degree: f64,
    /// Mean linear-range drag slope per degree above the minimum-drag
    /// angle, over the two sections.
    pub positive_drag_per_degree: f64,
}

/// Synthesize the drag curve for a wing panel.
///
/// # Errors
///
/// Returns an error if the synthesized keys do not form a valid curve,
/// which only happens for non-finite profile inputs.
pub fn calculate_drag_curve(profile: &WingProfile) -> Result<DragCurveResult, CurveError> {
    let (root_keys, root_negative, root_positive) =
        panel_keys(profile.root_family, profile.root_thickness, profile, 0.0)?;
    let (tip_keys, tip_negative, tip_positive) = panel_keys(
        profile.tip_family,
        profile.tip_thickness,
        profile,
        profile.washout_angle,
    )?;

    let keys = merge(&root_keys, &tip_keys)?;
    let curve = Curve::new(keys, WrapMode::Loop, WrapMode::Loop)?;

    Ok(DragCurveResult {
        curve,
        negative_drag_per_degree: f64::midpoint(root_negative, tip_negative),
        positive_drag_per_degree: f64::midpoint(root_positive, tip_positive),
    })
}

/// Run the full pipeline for one section. Returns the keys and the two
/// analyzed pre-deflection drag slopes.
fn panel_keys(
    family: AirfoilFamily,
    thickness: f64,
    profile: &WingProfile,
    washout_angle: f64,
) -> Result<([Keyframe; KEY_COUNT], f64, f64), CurveError> {
    let lift = LiftCharacteristics::calculate(family, thickness);
    let characteristics = DragCharacteristics::calculate(
        family,
        thickness,
        lift.negative_critical.angle,
        lift.positive_critical.angle,
        lift.negative_reverted_critical.angle,
        lift.positive_reverted_critical.angle,
    );

    let mut keys = layout_keys(&characteristics);
    if profile.inverted {
        invert_y(&mut keys);
    }

    // The undeflected keys feed the control-surface response curve.
    let settled = keys;

    let negative_per_degree = drag_per_degree(&keys[NEG_CRITICAL]);
    let positive_per_degree = drag_per_degree(&keys[POS_CRITICAL]);

    if profile.leading_edge.percentage > 0 {
        apply_leading_edge(
            &mut keys,
            profile.leading_edge,
            negative_per_degree,
            positive_per_degree,
        );
    }
    if profile.control_surface.percentage > 0 {
        apply_control_surface(
            &mut keys,
            profile.control_surface,
            settled,
            negative_per_degree,
            positive_per_degree,
        )?;
    }
    if profile.lerx.exists {
        apply_lerx(
            &mut keys,
            &profile.lerx,
            negative_per_degree,
            positive_per_degree,
        );
    }

    correct_linear_overrun(&mut keys, negative_per_degree, positive_per_degree);
    smooth_keys(&mut keys, negative_per_degree, positive_per_degree);
    apply_washout(&mut keys, washout_angle);

    Ok((keys, negative_per_degree, positive_per_degree))
}

fn layout_keys(characteristics: &DragCharacteristics) -> [Keyframe; KEY_COUNT] {
    [
        characteristics.negative_last.into(),
        characteristics.negative_reverted_critical.into(),
        characteristics.negative_perpendicular.into(),
        characteristics.negative_critical.into(),
        characteristics.minimum.into(),
        characteristics.positive_critical.into(),
        characteristics.positive_perpendicular.into(),
        characteristics.positive_reverted_critical.into(),
        characteristics.positive_last.into(),
    ]
}

fn drag_per_degree(critical: &Keyframe) -> f64 {
    if critical.x.abs() > f64::EPSILON {
        (critical.y / critical.x).abs()
    } else {
        0.0
    }
}

/// A deflected leading edge moves both stall keys toward the deflection
/// and raises the minimum drag by the camber it adds.
fn apply_leading_edge(
    keys: &mut [Keyframe; KEY_COUNT],
    surface: Deflection,
    negative_per_degree: f64,
    positive_per_degree: f64,
) {
    let angle_increase = (surface.angle * f64::from(surface.percentage) / 100.0).abs();
    let negative_increase = angle_increase * negative_per_degree;
    let positive_increase = angle_increase * positive_per_degree;

    keys[MINIMUM].y += if surface.angle >= 0.0 {
        positive_increase
    } else {
        negative_increase
    };

    let sign = if surface.angle >= 0.0 { 1.0 } else { -1.0 };
    keys[NEG_CRITICAL].x += angle_increase * sign;
    keys[NEG_CRITICAL].y += negative_increase;
    keys[POS_CRITICAL].x += angle_increase * sign;
    keys[POS_CRITICAL].y += positive_increase;

    // The stall keys stay above the minimum and on their own side of the
    // drag bucket, interpolated against the perpendicular keys.
    keys[NEG_CRITICAL].y = clamp(keys[NEG_CRITICAL].y, keys[MINIMUM].y, keys[NEG_CRITICAL].y);
    keys[POS_CRITICAL].y = clamp(keys[POS_CRITICAL].y, keys[MINIMUM].y, keys[POS_CRITICAL].y);
    keys[NEG_CRITICAL].x = clamp(
        keys[NEG_CRITICAL].x,
        keys[NEG_CRITICAL].x,
        lerp(
            keys[NEG_PERPENDICULAR].x,
            keys[MINIMUM].x,
            inverse_lerp(
                keys[NEG_PERPENDICULAR].y,
                keys[MINIMUM].y,
                keys[NEG_CRITICAL].y,
            ),
        ),
    );
    keys[POS_CRITICAL].x = clamp(
        keys[POS_CRITICAL].x,
        lerp(
            keys[POS_PERPENDICULAR].x,
            keys[MINIMUM].x,
            inverse_lerp(
                keys[POS_PERPENDICULAR].y,
                keys[MINIMUM].y,
                keys[POS_CRITICAL].y,
            ),
        ),
        keys[POS_CRITICAL].x,
    );
}

/// A deflected control surface adds the drag the surface itself produces
/// at its deflection angle and narrows the stall margin symmetrically.
fn apply_control_surface(
    keys: &mut [Keyframe; KEY_COUNT],
    surface: Deflection,
    settled: [Keyframe; KEY_COUNT],
    negative_per_degree: f64,
    positive_per_degree: f64,
) -> Result<(), CurveError> {
    let response = control_surface_response(settled, negative_per_degree, positive_per_degree)?;
    let drag_increase =
        response.evaluate(surface.angle) * f64::from(surface.percentage) / 100.0;

    keys[MINIMUM].y += drag_increase;
    keys[NEG_CRITICAL].y += drag_increase;
    keys[POS_CRITICAL].y += drag_increase;

    let angle_decrease = surface.angle.abs() * f64::from(surface.percentage) / 100.0 * 0.5;
    keys[NEG_CRITICAL].x += angle_decrease;
    keys[NEG_CRITICAL].y -= angle_decrease * negative_per_degree;
    keys[POS_CRITICAL].x -= angle_decrease;
    keys[POS_CRITICAL].y -= angle_decrease * positive_per_degree;

    keys[MINIMUM].y = clamp(
        keys[MINIMUM].y,
        keys[MINIMUM].y,
        crate::characteristics::PERPENDICULAR_DRAG_COEFFICIENT,
    );
    keys[NEG_CRITICAL].x = clamp(
        keys[NEG_CRITICAL].x,
        keys[NEG_PERPENDICULAR].x,
        keys[MINIMUM].x,
    );
    keys[NEG_CRITICAL].y = clamp(
        keys[NEG_CRITICAL].y,
        keys[MINIMUM].y,
        keys[NEG_PERPENDICULAR].y,
    );
    keys[POS_CRITICAL].x = clamp(
        keys[POS_CRITICAL].x,
        keys[MINIMUM].x,
        keys[POS_PERPENDICULAR].x,
    );
    keys[POS_CRITICAL].y = clamp(
        keys[POS_CRITICAL].y,
        keys[MINIMUM].y,
        keys[POS_PERPENDICULAR].y,
    );

    Ok(())
}

/// Finish the undeflected keys into the drag curve of the bare surface,
/// re-anchored so zero deflection produces zero extra drag.
fn control_surface_response(
    mut keys: [Keyframe; KEY_COUNT],
    negative_per_degree: f64,
    positive_per_degree: f64,
) -> Result<Curve, CurveError> {
    keys[MINIMUM].x = 0.0;
    keys[MINIMUM].y = 0.0;
    correct_linear_overrun(&mut keys, negative_per_degree, positive_per_degree);
    smooth_keys(&mut keys, negative_per_degree, positive_per_degree);
    Curve::new(keys.to_vec(), WrapMode::Clamp, WrapMode::Clamp)
}

/// A LERX vortex keeps the flow attached longer, moving the stall keys
/// outward along the linear slopes.
fn apply_lerx(
    keys: &mut [Keyframe; KEY_COUNT],
    lerx: &LerxSettings,
    negative_per_degree: f64,
    positive_per_degree: f64,
) {
    let negative_raise = lerx.critical_angle_raise * lerx.negative_efficiency;
    let positive_raise = lerx.critical_angle_raise * lerx.positive_efficiency;

    keys[NEG_CRITICAL].x -= negative_raise;
    keys[NEG_CRITICAL].y += negative_raise * negative_per_degree;
    keys[POS_CRITICAL].x += positive_raise;
    keys[POS_CRITICAL].y += positive_raise * positive_per_degree;
}

/// Stalls delayed past the attached-flow limit trade the linear drag gain
/// for stepped separation drag.
fn correct_linear_overrun(
    keys: &mut [Keyframe; KEY_COUNT],
    negative_per_degree: f64,
    positive_per_degree: f64,
) {
    if keys[POS_CRITICAL].x > MAX_LINEAR_ANGLE {
        let overrun = keys[POS_CRITICAL].x - MAX_LINEAR_ANGLE;
        let steps = (overrun / OVERRUN_STEP).floor();
        let remainder = overrun % OVERRUN_STEP;
        keys[POS_CRITICAL].y += OVERRUN_STEP_DRAG * steps
            + inverse_lerp(0.0, OVERRUN_STEP, remainder) * OVERRUN_STEP_DRAG
            - overrun * positive_per_degree;
    }
    if -keys[NEG_CRITICAL].x > MAX_LINEAR_ANGLE {
        let overrun = -keys[NEG_CRITICAL].x - MAX_LINEAR_ANGLE;
        let steps = (overrun / OVERRUN_STEP).floor();
        let remainder = overrun % OVERRUN_STEP;
        keys[NEG_CRITICAL].y += OVERRUN_STEP_DRAG * steps
            + inverse_lerp(0.0, OVERRUN_STEP, remainder) * OVERRUN_STEP_DRAG
            - overrun * negative_per_degree;
    }
}

/// Smoothing weight for a perpendicular key, from the span between it and
/// the nearest stall key. A degenerate span underflows to the lower bound.
fn perpendicular_weight(span: f64) -> f64 {
    if span.abs() - MAX_LINEAR_ANGLE >= f64::EPSILON {
        0.25 + span.abs() / MAX_LINEAR_ANGLE * 0.25
    } else {
        0.55 - MAX_LINEAR_ANGLE / span.abs() * 0.05
    }
}

fn smooth_keys(
    keys: &mut [Keyframe; KEY_COUNT],
    negative_per_degree: f64,
    positive_per_degree: f64,
) {
    // Where a stall key sits beyond the attached-flow limit, the bucket
    // tangents aim at a virtual key on the linear slope at that limit.
    let negative_anchor = Keyframe::new(
        -MAX_LINEAR_ANGLE,
        clamp(
            negative_per_degree * MAX_LINEAR_ANGLE,
            keys[MINIMUM].y,
            f64::INFINITY,
        ),
    );
    let positive_anchor = Keyframe::new(
        MAX_LINEAR_ANGLE,
        clamp(
            positive_per_degree * MAX_LINEAR_ANGLE,
            keys[MINIMUM].y,
            f64::INFINITY,
        ),
    );

    keys[MINIMUM].in_tangent = if keys[NEG_CRITICAL].x < -MAX_LINEAR_ANGLE {
        tangent_look_at(&keys[MINIMUM], &negative_anchor, 1.0)
    } else {
        tangent_look_at(&keys[MINIMUM], &keys[NEG_CRITICAL], 1.0)
    };
    keys[MINIMUM].in_weight = if keys[NEG_CRITICAL].x.abs() > 0.0 {
        clamp(-MAX_LINEAR_ANGLE / keys[NEG_CRITICAL].x, 0.0, 1.0)
    } else {
        1.0
    };
    keys[MINIMUM].out_tangent = if keys[POS_CRITICAL].x > MAX_LINEAR_ANGLE {
        tangent_look_at(&keys[MINIMUM], &positive_anchor, 1.0)
    } else {
        tangent_look_at(&keys[MINIMUM], &keys[POS_CRITICAL], 1.0)
    };
    keys[MINIMUM].out_weight = if keys[POS_CRITICAL].x.abs() > 0.0 {
        clamp(MAX_LINEAR_ANGLE / keys[POS_CRITICAL].x, 0.0, 1.0)
    } else {
        1.0
    };

    keys[NEG_CRITICAL].out_tangent = tangent_look_from(&keys[NEG_CRITICAL], &negative_anchor, 1.0);
    keys[NEG_CRITICAL].out_weight = if keys[NEG_CRITICAL].x.abs() > 0.0 {
        1.0 - clamp(-MAX_LINEAR_ANGLE / keys[NEG_CRITICAL].x, 0.0, 1.0)
    } else {
        0.0
    };
    keys[POS_CRITICAL].in_tangent = tangent_look_from(&keys[POS_CRITICAL], &positive_anchor, 1.0);
    keys[POS_CRITICAL].in_weight = if keys[POS_CRITICAL].x.abs() > 0.0 {
        1.0 - clamp(MAX_LINEAR_ANGLE / keys[POS_CRITICAL].x, 0.0, 1.0)
    } else {
        0.0
    };

    keys[NEG_CRITICAL].in_tangent = tangent_look_from(&keys[NEG_CRITICAL], &keys[MINIMUM], 1.0);
    keys[NEG_CRITICAL].in_weight = 0.1;
    keys[POS_CRITICAL].out_tangent = tangent_look_from(&keys[POS_CRITICAL], &keys[MINIMUM], 1.0);
    keys[POS_CRITICAL].out_weight = 0.1;

    keys[NEG_REVERTED_CRITICAL].out_tangent =
        tangent_look_from(&keys[NEG_REVERTED_CRITICAL], &keys[NEG_LAST], 1.0);
    keys[NEG_REVERTED_CRITICAL].out_weight = 0.1;
    keys[POS_REVERTED_CRITICAL].in_tangent =
        tangent_look_from(&keys[POS_REVERTED_CRITICAL], &keys[POS_LAST], 1.0);
    keys[POS_REVERTED_CRITICAL].in_weight = 0.1;

    keys[NEG_PERPENDICULAR].in_weight = clamp(
        perpendicular_weight(-180.0 - keys[NEG_REVERTED_CRITICAL].x),
        0.4,
        1.0,
    );
    keys[NEG_PERPENDICULAR].out_weight =
        clamp(perpendicular_weight(keys[NEG_CRITICAL].x), 0.4, 1.0);
    keys[POS_PERPENDICULAR].in_weight =
        clamp(perpendicular_weight(keys[POS_CRITICAL].x), 0.4, 1.0);
    keys[POS_PERPENDICULAR].out_weight = clamp(
        perpendicular_weight(180.0 - keys[POS_REVERTED_CRITICAL].x),
        0.4,
        1.0,
    );

    keys[NEG_LAST].out_tangent =
        tangent_look_at(&keys[NEG_LAST], &keys[NEG_REVERTED_CRITICAL], 1.0);
    keys[NEG_LAST].out_weight = 0.5;
    keys[POS_LAST].in_tangent = tangent_look_at(&keys[POS_LAST], &keys[POS_REVERTED_CRITICAL], 1.0);
    keys[POS_LAST].in_weight = 0.5;
    keys[NEG_REVERTED_CRITICAL].in_tangent =
        tangent_look_from(&keys[NEG_LAST], &keys[NEG_REVERTED_CRITICAL], 1.0);
    keys[NEG_REVERTED_CRITICAL].in_weight = 0.5;
    keys[POS_REVERTED_CRITICAL].out_tangent =
        tangent_look_from(&keys[POS_LAST], &keys[POS_REVERTED_CRITICAL], 1.0);
    keys[POS_REVERTED_CRITICAL].out_weight = 0.5;
}

fn apply_washout(keys: &mut [Keyframe; KEY_COUNT], washout_angle: f64) {
    for key in keys.iter_mut() {
        key.x -= washout_angle;
    }
}
