//! Landmark derivation for lift and drag curves.
//!
//! A landmark is one anchor point of a coefficient curve: the stall break,
//! the flat-plate peak at 45°, the reversed-flow stall near 180°, and so
//! on. [`LiftCharacteristics`] and [`DragCharacteristics`] derive the full
//! landmark set for one airfoil section from its family tables; the curve
//! builders then lay the landmarks out as keyframes.

use serde::{Deserialize, Serialize};

use openaero_curves::Keyframe;
use openaero_curves::math::{clamp, inverse_lerp, lerp};

use crate::family::{AirfoilFamily, MAX_THICKNESS, MIN_THICKNESS, REFERENCE_THICKNESS};

/// Drag coefficient of any section with the flow perpendicular to the chord.
pub(crate) const PERPENDICULAR_DRAG_COEFFICIENT: f64 = 1.8;

/// One anchor point of a coefficient curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Angle of attack in degrees.
    pub angle: f64,
    /// Coefficient value at that angle.
    pub coefficient: f64,
}

impl Landmark {
    /// Landmark at `angle` degrees with the given coefficient.
    #[must_use]
    pub const fn new(angle: f64, coefficient: f64) -> Self {
        Self { angle, coefficient }
    }
}

impl From<Landmark> for Keyframe {
    fn from(landmark: Landmark) -> Self {
        Self::new(landmark.angle, landmark.coefficient)
    }
}

/// Lift landmarks of one airfoil section, covering -180° to 180°.
///
/// `negative_*` landmarks sit left of the zero landmark, `positive_*` right
/// of it; `reverted` landmarks describe tail-first flow beyond ±90°.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[expect(missing_docs, reason = "field names follow the landmark naming above")]
pub struct LiftCharacteristics {
    pub zero: Landmark,
    pub negative_critical: Landmark,
    pub positive_critical: Landmark,
    pub negative_post_critical: Landmark,
    pub positive_post_critical: Landmark,
    pub negative_forty_five: Landmark,
    pub positive_forty_five: Landmark,
    pub negative_perpendicular: Landmark,
    pub positive_perpendicular: Landmark,
    pub negative_reverted_forty_five: Landmark,
    pub positive_reverted_forty_five: Landmark,
    pub negative_reverted_post_critical: Landmark,
    pub positive_reverted_post_critical: Landmark,
    pub negative_reverted_critical: Landmark,
    pub positive_reverted_critical: Landmark,
    pub negative_last: Landmark,
    pub positive_last: Landmark,
    /// Linear-range lift slope per degree of angle of attack.
    pub lift_per_degree: f64,
}

impl LiftCharacteristics {
    /// Derive the lift landmarks for a section of `family` at `thickness`
    /// percent of chord. Thickness is clamped to the tabulated range.
    #[must_use]
    pub fn calculate(family: AirfoilFamily, thickness: f64) -> Self {
        let thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
        let data = family.lift_data();

        let zero = Landmark::new(0.0, data.zero_coefficient);

        let positive_critical_angle = data.positive_critical_angle(thickness);
        let positive_critical = Landmark::new(
            positive_critical_angle,
            positive_critical_angle * data.lift_per_degree + data.zero_coefficient,
        );
        let negative_critical = Landmark::new(
            -positive_critical_angle * data.critical_asymmetry,
            -positive_critical_angle * data.lift_per_degree * data.critical_asymmetry
                + data.zero_coefficient,
        );

        let positive_length = data.positive_post_critical_length;
        let negative_length = positive_length * data.critical_asymmetry;

        // The flat-plate peak sits at 45° unless the stall region would
        // reach past it, in which case it is pushed outward.
        let mut negative_forty_five = Landmark::new(-45.0, -1.05);
        let mut positive_forty_five = Landmark::new(45.0, 1.05);
        if positive_critical.angle + positive_length > positive_forty_five.angle {
            positive_forty_five.angle = positive_critical.angle + positive_length;
        }
        if negative_critical.angle - negative_length < negative_forty_five.angle {
            negative_forty_five.angle = negative_critical.angle - negative_length;
        }

        let (negative_post_critical, positive_post_critical) = post_critical_landmarks(
            zero,
            negative_critical.angle,
            positive_critical.angle,
            negative_length,
            positive_length,
            negative_forty_five,
            positive_forty_five,
        );

        let negative_perpendicular = Landmark::new(-90.0, 0.0);
        let positive_perpendicular = Landmark::new(90.0, 0.0);

        let negative_reverted_forty_five = Landmark::new(-135.0, 0.95);
        let positive_reverted_forty_five = Landmark::new(135.0, -0.95);

        // Tail-first flow stalls much earlier. The reverted critical angle
        // either scales with the forward one or hits a thickness-dependent
        // static limit, whichever is smaller.
        let last_coefficient = data.zero_coefficient / 4.0;
        const REVERTED_PER_DEGREE: f64 = 0.09;
        let static_angle = 9.0 + thickness / REFERENCE_THICKNESS;
        let static_coefficient = 0.81 + thickness / REFERENCE_THICKNESS * REVERTED_PER_DEGREE;
        let dynamic_negative = positive_critical.angle * 0.75;
        let dynamic_positive = negative_critical.angle.abs() * 0.75;

        let negative_reverted_critical = if dynamic_negative > static_angle {
            Landmark::new(-180.0 + static_angle, last_coefficient + static_coefficient)
        } else {
            Landmark::new(
                -180.0 + dynamic_negative,
                last_coefficient + dynamic_negative * REVERTED_PER_DEGREE,
            )
        };
        let positive_reverted_critical = if dynamic_positive > static_angle {
            Landmark::new(180.0 - static_angle, last_coefficient - static_coefficient)
        } else {
            Landmark::new(
                180.0 - dynamic_positive,
                last_coefficient - dynamic_positive * REVERTED_PER_DEGREE,
            )
        };

        let negative_last = Landmark::new(-180.0, last_coefficient);
        let positive_last = Landmark::new(180.0, last_coefficient);

        const REVERTED_POST_CRITICAL_LENGTH: f64 = 10.0;
        let negative_reverted_post_angle = clamp(
            negative_reverted_critical.angle + REVERTED_POST_CRITICAL_LENGTH,
            negative_last.angle,
            negative_reverted_forty_five.angle,
        );
        let negative_reverted_post_critical = Landmark::new(
            negative_reverted_post_angle,
            lerp(
                negative_last.coefficient,
                negative_reverted_forty_five.coefficient,
                inverse_lerp(
                    negative_last.angle,
                    negative_reverted_forty_five.angle,
                    negative_reverted_post_angle,
                ),
            ),
        );
        let positive_reverted_post_angle = clamp(
            positive_reverted_critical.angle - REVERTED_POST_CRITICAL_LENGTH,
            positive_reverted_forty_five.angle,
            positive_last.angle,
        );
        let positive_reverted_post_critical = Landmark::new(
            positive_reverted_post_angle,
            lerp(
                positive_last.coefficient,
                positive_reverted_forty_five.coefficient,
                inverse_lerp(
                    positive_last.angle,
                    positive_reverted_forty_five.angle,
                    positive_reverted_post_angle,
                ),
            ),
        );

        Self {
            zero,
            negative_critical,
            positive_critical,
            negative_post_critical,
            positive_post_critical,
            negative_forty_five,
            positive_forty_five,
            negative_perpendicular,
            positive_perpendicular,
            negative_reverted_forty_five,
            positive_reverted_forty_five,
            negative_reverted_post_critical,
            positive_reverted_post_critical,
            negative_reverted_critical,
            positive_reverted_critical,
            negative_last,
            positive_last,
            lift_per_degree: data.lift_per_degree,
        }
    }

    /// Degrees between the critical and post-critical landmarks, negative
    /// then positive side.
    #[must_use]
    pub fn post_critical_lengths(&self) -> (f64, f64) {
        (
            self.negative_critical.angle - self.negative_post_critical.angle,
            self.positive_post_critical.angle - self.positive_critical.angle,
        )
    }
}

/// Place the post-critical landmarks between the critical angles and the
/// flat-plate peaks. The coefficient interpolates along the chord from the
/// zero landmark to the peak, so the stall recovery stays on that line.
pub(crate) fn post_critical_landmarks(
    zero: Landmark,
    negative_critical_angle: f64,
    positive_critical_angle: f64,
    negative_length: f64,
    positive_length: f64,
    negative_forty_five: Landmark,
    positive_forty_five: Landmark,
) -> (Landmark, Landmark) {
    let negative_angle = clamp(
        negative_critical_angle - negative_length,
        negative_forty_five.angle,
        negative_critical_angle,
    );
    let negative = Landmark::new(
        negative_angle,
        lerp(
            zero.coefficient,
            negative_forty_five.coefficient,
            inverse_lerp(zero.angle, negative_forty_five.angle, negative_angle),
        ),
    );

    let positive_angle = clamp(
        positive_critical_angle + positive_length,
        positive_critical_angle,
        positive_forty_five.angle,
    );
    let positive = Landmark::new(
        positive_angle,
        lerp(
            zero.coefficient,
            positive_forty_five.coefficient,
            inverse_lerp(zero.angle, positive_forty_five.angle, positive_angle),
        ),
    );

    (negative, positive)
}

/// Drag landmarks of one airfoil section.
///
/// The critical and reverted-critical angles are inputs taken from the lift
/// landmarks of the same section, so both curves break at the same angles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[expect(missing_docs, reason = "field names follow the landmark naming above")]
pub struct DragCharacteristics {
    pub minimum: Landmark,
    pub negative_critical: Landmark,
    pub positive_critical: Landmark,
    pub negative_perpendicular: Landmark,
    pub positive_perpendicular: Landmark,
    pub negative_reverted_critical: Landmark,
    pub positive_reverted_critical: Landmark,
    pub negative_last: Landmark,
    pub positive_last: Landmark,
}

impl DragCharacteristics {
    /// Derive the drag landmarks for a section of `family` at `thickness`
    /// percent of chord, breaking at the supplied lift critical angles.
    #[must_use]
    pub fn calculate(
        family: AirfoilFamily,
        thickness: f64,
        negative_critical_angle: f64,
        positive_critical_angle: f64,
        negative_reverted_critical_angle: f64,
        positive_reverted_critical_angle: f64,
    ) -> Self {
        let thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
        let data = family.drag_data();

        let minimum_coefficient =
            data.base_minimum_coefficient * thickness / REFERENCE_THICKNESS;
        let minimum = Landmark::new(data.minimum_drag_angle, minimum_coefficient);

        let negative_critical = Landmark::new(
            negative_critical_angle,
            (negative_critical_angle.abs() * data.negative_drag_per_degree)
                .max(minimum_coefficient),
        );
        let positive_critical = Landmark::new(
            positive_critical_angle,
            (positive_critical_angle.abs() * data.positive_drag_per_degree)
                .max(minimum_coefficient),
        );

        let negative_perpendicular = Landmark::new(-90.0, PERPENDICULAR_DRAG_COEFFICIENT);
        let positive_perpendicular = Landmark::new(90.0, PERPENDICULAR_DRAG_COEFFICIENT);

        const REVERTED_DRAG_PER_DEGREE: f64 = 0.002;
        let last_coefficient = minimum_coefficient * 1.25;
        let negative_reverted_critical = Landmark::new(
            negative_reverted_critical_angle,
            ((-180.0 - negative_reverted_critical_angle).abs() * REVERTED_DRAG_PER_DEGREE)
                .max(last_coefficient),
        );
        let positive_reverted_critical = Landmark::new(
            positive_reverted_critical_angle,
            ((180.0 - positive_reverted_critical_angle).abs() * REVERTED_DRAG_PER_DEGREE)
                .max(last_coefficient),
        );

        let negative_last = Landmark::new(-180.0, last_coefficient);
        let positive_last = Landmark::new(180.0, last_coefficient);

        Self {
            minimum,
            negative_critical,
            positive_critical,
            negative_perpendicular,
            positive_perpendicular,
            negative_reverted_critical,
            positive_reverted_critical,
            negative_last,
            positive_last,
        }
    }
}
