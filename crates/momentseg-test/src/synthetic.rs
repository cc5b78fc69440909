//! Synthetic image builders for testing.
//!
//! All regression inputs are generated; the workspace has no image file
//! I/O. Builders panic on zero dimensions, which test code never passes.

use momentseg_core::{Image, Intensity};
use rand::{RngExt, SeedableRng, rngs::StdRng};

/// Create an image with every pixel at one value.
pub fn constant<T: Intensity>(width: u32, height: u32, value: T) -> Image<T> {
    Image::from_fn(width, height, |_, _| value).expect("valid dimensions")
}

/// Create an image split into two equally-sized intensity populations.
///
/// The left half of each row holds `low`, the right half `high`. With an
/// even width the two populations have exactly equal pixel counts.
pub fn two_level<T: Intensity>(width: u32, height: u32, low: T, high: T) -> Image<T> {
    Image::from_fn(width, height, |x, _| if x < width / 2 { low } else { high })
        .expect("valid dimensions")
}

/// Create a horizontal left-to-right gradient over the u8 range.
pub fn gradient(width: u32, height: u32) -> Image<u8> {
    Image::from_fn(width, height, |x, _| {
        ((u32::from(u8::MAX) * x) / width.max(1)) as u8
    })
    .expect("valid dimensions")
}

/// Create a deterministic pseudo-random u8 image from a seed.
pub fn random(width: u32, height: u32, seed: u64) -> Image<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    Image::from_fn(width, height, |_, _| rng.random_range(0..=u8::MAX)).expect("valid dimensions")
}

/// Create a mask selecting the left half of each row (nonzero inside).
pub fn left_half_mask(width: u32, height: u32) -> Image<u8> {
    two_level(width, height, 1, 0)
}
