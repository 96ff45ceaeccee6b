//! Error types for polargeom

use thiserror::Error;

/// Main error type for polargeom operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A non-zero magnitude was required but the input had none
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Two directions (or a ray and a plane) are parallel
    #[error("Parallel input: {0}")]
    ParallelInput(String),

    /// A component, length or angle was NaN or infinite, or a result would be
    #[error("Non-finite input: {0}")]
    NonFinite(String),

    /// A finite value outside its allowed range, such as a negative radius
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for polargeom operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for the degenerate (zero magnitude) kind
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::DegenerateInput(_))
    }

    /// True for the parallel-inputs kind
    pub fn is_parallel(&self) -> bool {
        matches!(self, Error::ParallelInput(_))
    }
}
