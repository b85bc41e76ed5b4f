//! Airfoil Curve Synthesis for OpenAero
//!
//! This crate turns a wing panel description into the full set of
//! coefficient curves the flight model samples at runtime: lift and drag
//! over the whole -180° to 180° range of angle of attack, the aerodynamic
//! center travel between 25% and 50% of mean aerodynamic chord, and the
//! leading-edge rotation correction for swept planforms.
//!
//! # Overview
//!
//! Synthesis starts from per-family tables in [`family`]: each supported
//! airfoil family carries its zero-lift coefficient, linear lift slope,
//! stall asymmetry, and a thickness-band table that places the positive
//! critical angle. [`characteristics`] expands those into the landmark
//! points of a panel (critical, post-critical, deep-stall, and reversed-flow
//! anchors), and [`lift`] / [`drag`] lay the landmarks out as weighted
//! Bezier keyframes, apply leading-edge, control-surface, and LERX
//! deflection effects, and blend root and tip sections into one curve.
//!
//! Curves come back as [`openaero_curves::Curve`] values and evaluate with
//! the same clamped-interpolation semantics the coefficient tables were
//! tuned against.
//!
//! # Example
//!
//! ```
//! use openaero_airfoil::prelude::*;
//!
//! let profile = WingProfile {
//!     root_family: AirfoilFamily::T10Root,
//!     tip_family: AirfoilFamily::T10Wing,
//!     root_thickness: 5.0,
//!     tip_thickness: 4.0,
//!     ..WingProfile::default()
//! };
//!
//! let lift = calculate_lift_curve(&profile)?;
//! let cruise = lift.curve.evaluate(2.0);
//! assert!(cruise.is_finite());
//! # Ok::<(), openaero_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod center;
pub mod characteristics;
pub mod drag;
pub mod family;
pub mod lerx;
pub mod lift;
pub mod prelude;
pub mod profile;
pub mod sweep;

pub use center::calculate_aerodynamic_center_curve;
pub use characteristics::{DragCharacteristics, Landmark, LiftCharacteristics};
pub use drag::{DragCurveResult, calculate_drag_curve};
pub use family::AirfoilFamily;
pub use lift::{LiftCurveResult, calculate_lift_curve};
pub use profile::{Deflection, LerxSettings, WingProfile};
pub use sweep::leading_edge_rotation_coefficient;
