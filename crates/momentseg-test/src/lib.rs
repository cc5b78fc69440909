//! momentseg-test - Regression test framework for momentseg
//!
//! Provides the `RegParams` harness used by the `tests/*_reg.rs`
//! regression tests (indexed value and image comparisons with a final
//! pass/fail summary) and builders for the synthetic images the tests
//! run on. There is no image file I/O anywhere in the workspace, so all
//! test inputs are synthesized.
//!
//! # Usage
//!
//! ```
//! use momentseg_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("example");
//! let image = synthetic::two_level(4, 4, 10u8, 200);
//! rp.compare_values(16.0, image.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;
pub mod synthetic;

pub use params::RegParams;
