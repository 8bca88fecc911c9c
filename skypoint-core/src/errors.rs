//! Error types for coordinate calculations.
//!
//! The reduction pipeline itself is total — a bad point is clamped and logged
//! rather than aborting a tracking loop — so errors here surface only at the
//! API boundary: invalid catalog input (non-finite or out-of-range angles)
//! and degenerate vector geometry.

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation (NaN, infinity).
    NotFinite,
    /// Value outside its valid domain (e.g., declination beyond ±90°).
    OutOfRange,
    /// Attempted to normalize a zero or near-zero vector.
    DegenerateVector,
}

/// Unified error type for the coordinate engine.
#[derive(Error, Debug)]
pub enum SkyError {
    /// A coordinate failed validation on construction.
    #[error("Invalid coordinate in {context}: {message}")]
    InvalidCoordinate { context: String, message: String },

    /// Numerical failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Algorithm-level failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, SkyError>`.
pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    /// Creates an [`InvalidCoordinate`](Self::InvalidCoordinate) error.
    pub fn invalid_coordinate(context: &str, message: &str) -> Self {
        Self::InvalidCoordinate {
            context: context.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, message: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: message.to_string(),
        }
    }

    /// Creates a [`CalculationError`](Self::CalculationError).
    pub fn calculation_error(context: &str, message: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the caller can recover by correcting its input. Non-finite
    /// values usually indicate corrupted upstream state rather than a bad
    /// argument.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::MathError {
                kind: MathErrorKind::NotFinite,
                ..
            }
        )
    }
}
