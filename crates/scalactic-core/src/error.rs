//! Error types for Scalactic

use thiserror::Error;

/// Core Scalactic errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalacticError {
    // Lazy view errors
    #[error("Unsupported operation: {operation} is not implemented on {view}")]
    UnsupportedOperation {
        operation: &'static str,
        view: &'static str,
    },

    // Construction errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Every must contain at least one element")]
    EmptyEvery,

    #[error("No such element: {0}")]
    NoSuchElement(String),

    // Ordering errors
    #[error("Null comparison: cannot order against an absent value")]
    NullComparison,
}

impl ScalacticError {
    pub fn unsupported(operation: &'static str, view: &'static str) -> Self {
        ScalacticError::UnsupportedOperation { operation, view }
    }
}

/// Result type for Scalactic operations
pub type ScalacticResult<T> = Result<T, ScalacticError>;
