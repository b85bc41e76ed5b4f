//! Shared test utilities for OpenAero.
//!
//! This crate provides the assertion helpers the curve regression suites are
//! built on, most importantly the key-by-key mirror comparisons used to check
//! that inverted wing sections produce mirrored curves.
//!
//! # Modules
//!
//! - [`assertions`] - Approximate-equality macro and curve comparison helpers
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! openaero-test-helpers = { path = "crates/openaero-test-helpers" }
//! ```
//!
//! Then import the prelude:
//!
//! ```rust,ignore
//! use openaero_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod prelude;
