//! Error types for marjani-path

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CoverageError>;

/// Input validation errors.
///
/// The calculator itself is pure arithmetic and cannot fail; these errors
/// occur where untyped wire values become typed move commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// Direction tag is not one of East, West, North, South
    #[error("Unrecognized direction: {0}")]
    InvalidDirection(String),

    /// Step count is negative
    #[error("Invalid step count: {0}")]
    InvalidStepCount(i64),
}
