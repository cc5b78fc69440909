//! Histogram regression test
//!
//! Masked and unmasked histogram construction, partial-histogram
//! merging, and the rank lookup used by threshold estimation.

use momentseg_core::{Error, GrayHistogram, Image, MaskMode};
use momentseg_test::{RegParams, synthetic};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Unmasked counts ---
    let pixs = synthetic::two_level(8, 4, 10u8, 200);
    let hist = pixs.gray_histogram(256).expect("unmasked histogram");
    rp.compare_values(256.0, hist.bin_count() as f64, 0.0);
    rp.compare_values(32.0, hist.total() as f64, 0.0);
    rp.compare_values(16.0, hist.count(10) as f64, 0.0);
    rp.compare_values(16.0, hist.count(200) as f64, 0.0);
    eprintln!("  unmasked: total={}", hist.total());

    // Total always equals the number of considered pixels
    let noise = synthetic::random(16, 16, 99);
    let noise_hist = noise.gray_histogram(64).expect("random histogram");
    rp.compare_values(256.0, noise_hist.total() as f64, 0.0);
    rp.compare_values(
        256.0,
        noise_hist.counts().iter().sum::<u64>() as f64,
        0.0,
    );

    // --- Masked counts ---
    let mask = synthetic::left_half_mask(8, 4);
    let masked = pixs
        .gray_histogram_masked(Some(&mask), &MaskMode::NonZero, 256)
        .expect("masked histogram");
    rp.compare_values(16.0, masked.total() as f64, 0.0);
    rp.compare_values(16.0, masked.count(10) as f64, 0.0);
    rp.compare_values(0.0, masked.count(200) as f64, 0.0);
    eprintln!("  masked: total={}", masked.total());

    // Label mode selects by exact mask value
    let labels = Image::from_fn(8, 4, |x, _| if x < 2 { 3u8 } else { 1 }).unwrap();
    let labeled = pixs
        .gray_histogram_masked(Some(&labels), &MaskMode::Label(3), 256)
        .expect("label-mode histogram");
    rp.compare_values(8.0, labeled.total() as f64, 0.0);
    rp.compare_values(8.0, labeled.count(10) as f64, 0.0);

    // --- Error surface ---
    let tall_mask = Image::<u8>::new(8, 5).unwrap();
    let shape_err = pixs.gray_histogram_masked(Some(&tall_mask), &MaskMode::NonZero, 256);
    rp.compare_values(
        1.0,
        if matches!(shape_err, Err(Error::ShapeMismatch { .. })) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    let empty_mask = synthetic::constant(8, 4, 0u8);
    let empty_err = pixs.gray_histogram_masked(Some(&empty_mask), &MaskMode::NonZero, 256);
    rp.compare_values(
        1.0,
        if matches!(empty_err, Err(Error::EmptyHistogram)) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    let bins_err = pixs.gray_histogram(1);
    rp.compare_values(
        1.0,
        if matches!(bins_err, Err(Error::InvalidParameter(_))) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Partial-histogram merge matches a whole-image scan ---
    let whole = noise.gray_histogram(64).expect("whole scan");
    let top = Image::from_fn(16, 8, |x, y| noise.get_pixel_unchecked(x, y)).unwrap();
    let bottom = Image::from_fn(16, 8, |x, y| noise.get_pixel_unchecked(x, y + 8)).unwrap();
    let mut merged = top.gray_histogram(64).expect("top scan");
    merged
        .merge(&bottom.gray_histogram(64).expect("bottom scan"))
        .expect("merge");
    rp.compare_values(whole.total() as f64, merged.total() as f64, 0.0);
    let identical = whole == merged;
    rp.compare_values(1.0, if identical { 1.0 } else { 0.0 }, 0.0);

    // --- Rank lookup ---
    let two = GrayHistogram::from_counts(0.0, 255.0, {
        let mut counts = vec![0u64; 256];
        counts[10] = 8;
        counts[200] = 8;
        counts
    })
    .expect("synthetic histogram");
    rp.compare_values(10.0, two.rank_bin(0.5).unwrap() as f64, 0.0);
    rp.compare_values(200.0, two.rank_bin(0.75).unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "histogram regression test failed");
}
