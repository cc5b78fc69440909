//! Momentseg Threshold - moment-preserving threshold segmentation
//!
//! Computes a single global intensity threshold by matching the first
//! three raw moments of the image's intensity histogram with a two-point
//! (bimodal) distribution, then classifies every pixel against it:
//!
//! - [`moments`]: raw moments of a histogram over bin index
//! - [`solver`]: closed-form two-point moment matching
//! - [`binarize`]: threshold derivation and per-pixel classification
//!
//! The pipeline is strictly forward: image (+ optional mask) →
//! histogram → moments → threshold → classified image. Each stage is a
//! pure function of the data passed in; there is no shared or global
//! state, and concurrent invocations are independent.

pub mod binarize;
pub mod error;
pub mod moments;
pub mod solver;

// Re-export core types
pub use momentseg_core;

// Re-export error types
pub use error::{ThresholdError, ThresholdResult};

// Re-export the moment and solver types
pub use moments::MomentSet;
pub use solver::{MomentSolution, TwoPointFit, fit_two_point, solve};

// Re-export the pipeline surface
pub use binarize::{
    MomentThresholdOptions, MomentThresholdOutcome, ThresholdEstimate, classify,
    compute_moments_threshold, threshold_moments,
};
