//! Keyframe Curves for OpenAero
//!
//! This crate implements the weighted-tangent keyframe curves that the
//! aerodynamic synthesis pipeline produces and consumes: piecewise cubic
//! curves whose knots carry per-side tangents and tangent weights, with
//! clamp/loop extension outside the key range.
//!
//! # Overview
//!
//! - [`Keyframe`]: a knot with value, in/out tangents, and in/out weights
//! - [`Curve`]: validated, ordered keyframes plus per-end [`WrapMode`]s
//! - [`ops`]: tangent aiming, curve inversion, and key-array merging
//! - [`math`]: clamped interpolation helpers shared by curve consumers
//!
//! # Evaluation semantics
//!
//! A segment between two unweighted keyframes is a cubic Hermite spline. If
//! either side is weighted, the segment is a cubic Bezier whose handle
//! x-offsets are the segment span scaled by the side weights (an unweighted
//! side contributes the default 1/3 handle). Bezier segments are solved for
//! the parameter at a given x with Newton-Raphson, falling back to bisection
//! when Newton stalls.
//!
//! # Example
//!
//! ```
//! use openaero_curves::{Curve, Keyframe, WrapMode};
//!
//! let mut rising = Keyframe::new(0.0, 0.0);
//! rising.out_tangent = 0.1;
//! let mut peak = Keyframe::new(15.0, 1.5);
//! peak.in_tangent = 0.1;
//!
//! let curve = Curve::new(vec![rising, peak], WrapMode::Clamp, WrapMode::Clamp)?;
//! let lift = curve.evaluate(7.5);
//! assert!((lift - 0.75).abs() < 1e-9);
//! # Ok::<(), openaero_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod keyframe;
pub mod math;
pub mod ops;
pub mod prelude;

pub use curve::{Curve, WrapMode};
pub use error::CurveError;
pub use keyframe::Keyframe;
