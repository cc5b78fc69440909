//! Threshold estimation and binary classification
//!
//! The public pipeline: build the (optionally masked) histogram, reduce
//! it to moments, solve for the separating bin, map the bin back to an
//! intensity threshold, and classify every pixel against it.
//!
//! The mask only shapes threshold estimation. Classification always
//! covers the full image, so pixels excluded from the histogram are
//! still assigned an output value by the same comparison rule.

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::MomentSet;
use crate::solver::{MomentSolution, solve};
use momentseg_core::{DEFAULT_BIN_COUNT, Image, Intensity, MaskMode};

/// Options for moment-preserving thresholding.
///
/// All parameters are explicit and always effective; the defaults are
/// `DEFAULT_BIN_COUNT` bins, the full output range as inside/outside
/// values, and nonzero mask interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentThresholdOptions<M, O> {
    /// Number of histogram bins (>= 2). Coarser binning changes the
    /// quantization and therefore the exact threshold.
    pub bin_count: usize,
    /// Output value for pixels below the threshold.
    pub inside_value: O,
    /// Output value for pixels at or above the threshold.
    pub outside_value: O,
    /// Which mask values select pixels into the histogram.
    pub mask_mode: MaskMode<M>,
}

impl<M: Intensity, O: Intensity> Default for MomentThresholdOptions<M, O> {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            inside_value: O::MAX_VALUE,
            outside_value: O::default(),
            mask_mode: MaskMode::default(),
        }
    }
}

/// A computed threshold, without classification output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdEstimate {
    /// Threshold in the input image's native intensity domain: the lower
    /// intensity edge of the separating bin.
    pub threshold: f64,
    /// The solver output the threshold was derived from.
    pub solution: MomentSolution,
}

/// Full pipeline output: the threshold and the classified image.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentThresholdOutcome<O> {
    /// Threshold in the input image's native intensity domain.
    pub threshold: f64,
    /// The solver output the threshold was derived from.
    pub solution: MomentSolution,
    /// Classified image; same geometry as the input.
    pub output: Image<O>,
}

/// Compute the moment-preserving threshold of an image.
///
/// Runs histogram construction, moment extraction, and the two-point
/// solve, then maps the separating bin back to the intensity domain.
/// No classification is performed; use [`threshold_moments`] for the
/// full pipeline.
///
/// # Errors
///
/// - Histogram errors ([`momentseg_core::Error::ShapeMismatch`],
///   [`momentseg_core::Error::EmptyHistogram`],
///   [`momentseg_core::Error::InvalidParameter`]) via
///   [`ThresholdError::Core`].
/// - [`ThresholdError::DegenerateDistribution`] when the masked
///   histogram admits no two-point solution.
pub fn compute_moments_threshold<T, M>(
    image: &Image<T>,
    mask: Option<&Image<M>>,
    mask_mode: &MaskMode<M>,
    bin_count: usize,
) -> ThresholdResult<ThresholdEstimate>
where
    T: Intensity,
    M: Intensity,
{
    let hist = image.gray_histogram_masked(mask, mask_mode, bin_count)?;
    let moments = MomentSet::from_histogram(&hist);
    let solution = solve(&hist, &moments)?;
    Ok(ThresholdEstimate {
        threshold: hist.lower_edge(solution.separator_bin),
        solution,
    })
}

/// Classify every pixel of an image against a threshold.
///
/// Pixels with intensity strictly below the threshold receive
/// `inside_value`, all others `outside_value`. The comparison is strict
/// so the lower class owns the bins below the separating edge exactly.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidOutputValue`] if the two output
/// values are equal (the classes would be indistinguishable).
pub fn classify<T, O>(
    image: &Image<T>,
    threshold: f64,
    inside_value: O,
    outside_value: O,
) -> ThresholdResult<Image<O>>
where
    T: Intensity,
    O: Intensity,
{
    if inside_value == outside_value {
        return Err(ThresholdError::InvalidOutputValue);
    }
    let mut data = Vec::with_capacity(image.pixel_count());
    for y in 0..image.height() {
        for &value in image.row(y) {
            data.push(if value.to_f64() < threshold {
                inside_value
            } else {
                outside_value
            });
        }
    }
    Ok(Image::from_vec(image.width(), image.height(), data)?)
}

/// Threshold an image with the moment-preserving method.
///
/// The single entry point for the full pipeline. Configuration is
/// validated before any pixel is touched; the returned outcome retains
/// the computed threshold so callers can read it without re-running
/// anything.
///
/// # Examples
///
/// ```
/// use momentseg_core::Image;
/// use momentseg_threshold::{MomentThresholdOptions, threshold_moments};
///
/// let image = Image::from_fn(4, 4, |x, _| if x < 2 { 10u8 } else { 200 }).unwrap();
/// let options = MomentThresholdOptions::<u8, u8> {
///     bin_count: 256,
///     ..Default::default()
/// };
/// let outcome = threshold_moments(&image, None, &options).unwrap();
/// assert!(outcome.threshold > 10.0 && outcome.threshold < 200.0);
/// assert_eq!(outcome.output.get_pixel(0, 0), Some(255));
/// assert_eq!(outcome.output.get_pixel(3, 0), Some(0));
/// ```
///
/// # Errors
///
/// - [`ThresholdError::InvalidOutputValue`] for an invalid output
///   configuration, before any processing.
/// - The estimation errors of [`compute_moments_threshold`]. No partial
///   result is produced; classification never runs on a failed
///   threshold computation.
pub fn threshold_moments<T, M, O>(
    image: &Image<T>,
    mask: Option<&Image<M>>,
    options: &MomentThresholdOptions<M, O>,
) -> ThresholdResult<MomentThresholdOutcome<O>>
where
    T: Intensity,
    M: Intensity,
    O: Intensity,
{
    if options.inside_value == options.outside_value {
        return Err(ThresholdError::InvalidOutputValue);
    }
    let estimate = compute_moments_threshold(image, mask, &options.mask_mode, options.bin_count)?;
    let output = classify(
        image,
        estimate.threshold,
        options.inside_value,
        options.outside_value,
    )?;
    Ok(MomentThresholdOutcome {
        threshold: estimate.threshold,
        solution: estimate.solution,
        output,
    })
}
