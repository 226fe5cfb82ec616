//! Error types for the crate

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, MlEvalError>;

/// Errors produced by splitters and metric computations
#[derive(Error, Debug)]
pub enum MlEvalError {
    /// Malformed arguments (fraction out of range, mismatched lengths)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A metric denominator summed to zero
    #[error("Metric '{metric}' is undefined: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        reason: String,
    },
}
