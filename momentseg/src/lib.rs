//! Momentseg - moment-preserving image threshold segmentation
//!
//! Computes a single global intensity threshold that separates a
//! grayscale image into two classes by matching the first three raw
//! moments of the image's intensity histogram with a two-point bimodal
//! distribution (Tsai's moment-preserving method), optionally restricted
//! to pixels selected by a mask image, then classifies every pixel
//! against the threshold.
//!
//! # Example
//!
//! ```
//! use momentseg::Image;
//! use momentseg::threshold::{MomentThresholdOptions, threshold_moments};
//!
//! // Half the pixels at 10, half at 200
//! let image = Image::from_fn(4, 4, |x, _| if x < 2 { 10u8 } else { 200 }).unwrap();
//! let options = MomentThresholdOptions::<u8, u8>::default();
//! let outcome = threshold_moments(&image, None, &options).unwrap();
//! assert!(outcome.threshold > 10.0 && outcome.threshold < 200.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use momentseg_core::*;

// Re-export the threshold crate as a module to avoid name conflicts
pub use momentseg_threshold as threshold;
