//! Error types for the walker-chain crate.

/// Error type for all fallible operations in the walker-chain crate.
///
/// Rejected in-place edits (an invalid weight passed to `set`, a non-finite
/// resize target) are not errors: those mutators signal "ignored" by
/// returning `false`. `ChainError` covers construction from external input
/// and report serialization.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when a weight grid is not square.
    #[error("weight grid is not square: row {row} has {len} columns, expected {size}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of columns in that row.
        len: usize,
        /// Expected number of columns (the number of rows).
        size: usize,
    },

    /// Returned when a weight grid has fewer states than the model minimum.
    #[error("model needs at least {min} states, got {size}")]
    TooSmall {
        /// Number of states provided.
        size: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when a weight is negative or non-finite.
    #[error("invalid weight at ({x}, {y}): {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// Row index of the offending weight.
        x: usize,
        /// Column index of the offending weight.
        y: usize,
        /// The invalid value.
        value: f64,
    },

    /// Returned when the report table cannot be serialized.
    #[error("report serialization failed: {reason}")]
    Serialization {
        /// Description of the problem.
        reason: String,
    },
}
