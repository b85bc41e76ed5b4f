//! Convenience re-exports for airfoil consumers.
//!
//! ```
//! use openaero_airfoil::prelude::*;
//!
//! let lift = calculate_lift_curve(&WingProfile::default())?;
//! assert!(lift.lift_per_degree > 0.0);
//! # Ok::<(), openaero_curves::CurveError>(())
//! ```

pub use crate::center::calculate_aerodynamic_center_curve;
pub use crate::characteristics::{DragCharacteristics, Landmark, LiftCharacteristics};
pub use crate::drag::{DragCurveResult, calculate_drag_curve};
pub use crate::family::{
    AirfoilFamily, MAX_THICKNESS, MIN_THICKNESS, critical_mach_number, post_critical_shake,
};
pub use crate::lift::{LiftCurveResult, calculate_lift_curve};
pub use crate::profile::{Deflection, LerxSettings, WingProfile};
pub use crate::sweep::leading_edge_rotation_coefficient;
