//! Error types for momentseg-threshold

use thiserror::Error;

/// Errors that can occur during threshold computation and classification
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error (histogram construction, image geometry)
    #[error("core error: {0}")]
    Core(#[from] momentseg_core::Error),

    /// The histogram moments admit no valid two-point solution
    #[error("degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// Inside and outside classification values are indistinguishable
    #[error("inside and outside output values must differ")]
    InvalidOutputValue,
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
