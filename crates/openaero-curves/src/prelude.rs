//! Convenience re-exports for curve consumers.
//!
//! ```
//! use openaero_curves::prelude::*;
//!
//! let curve = Curve::new(vec![Keyframe::new(0.0, 1.0)], WrapMode::Clamp, WrapMode::Clamp)?;
//! assert!((curve.evaluate(3.0) - 1.0).abs() < 1e-12);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::curve::{Curve, WrapMode};
pub use crate::error::CurveError;
pub use crate::keyframe::Keyframe;
pub use crate::math::{clamp, inverse_lerp, lerp};
pub use crate::ops::{invert_x_and_y, invert_y, merge, tangent_look_at, tangent_look_from};
