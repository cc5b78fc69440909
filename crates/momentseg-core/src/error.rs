//! Error types for momentseg-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Momentseg core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length disagrees with the stated geometry
    #[error("pixel buffer length {actual} does not match {expected} for the given dimensions")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinates out of bounds
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Mask geometry disagrees with image geometry
    #[error("mask geometry mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// No pixels contributed to a histogram
    #[error("no pixels contributed to the histogram")]
    EmptyHistogram,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for momentseg-core operations
pub type Result<T> = std::result::Result<T, Error>;
