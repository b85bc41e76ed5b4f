//! Error types for curve construction and key-array operations.

use thiserror::Error;

/// Errors produced when building or combining curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs at least one keyframe.
    #[error("curve has no keyframes")]
    Empty,

    /// A keyframe field was NaN or infinite.
    #[error("keyframe {index}: {field} is not finite ({value})")]
    NonFinite {
        /// Index of the offending keyframe.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Keyframe x coordinates must be non-decreasing.
    #[error("keyframe {index}: x {current} is below the previous x {previous}")]
    DecreasingKeys {
        /// Index of the keyframe that steps backwards.
        index: usize,
        /// x of the preceding keyframe.
        previous: f64,
        /// x of the offending keyframe.
        current: f64,
    },

    /// Merging requires key arrays of identical length.
    #[error("cannot merge key arrays of different lengths ({left} vs {right})")]
    KeyCountMismatch {
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },
}
