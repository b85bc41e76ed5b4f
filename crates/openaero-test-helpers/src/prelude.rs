//! Convenience re-exports for test code.

pub use crate::assert_approx_eq;
pub use crate::assertions::{assert_curves_equal, assert_drag_mirrored, assert_lift_mirrored};
