//! Moment-preserving two-point solver
//!
//! Finds the two-point distribution whose raw moments equal those
//! measured from the histogram: class 0 at mean `mu0` with probability
//! `p0`, class 1 at mean `mu1` with probability `1 - p0`. The class
//! means are the roots of a characteristic quadratic derived in closed
//! form from the moments, so the solve is a fixed number of scalar
//! operations with no iteration.
//!
//! With `cd = m2 - m1^2`:
//!
//! ```text
//! mu0 + mu1 = (m3 - m1 * m2) / cd
//! mu0 * mu1 = (m1 * m3 - m2 * m2) / cd
//! p0        = (mu1 - m1) / (mu1 - mu0)
//! ```
//!
//! The separating bin is the probability-mass boundary: the cumulative
//! normalized histogram first reaches `p0` in some bin `k`, and bins
//! `0..=k` form class 0.

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::MomentSet;
use momentseg_core::GrayHistogram;

/// Two-point distribution matching the measured moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPointFit {
    /// Probability of the lower class, in `(0, 1)`.
    pub p0: f64,
    /// Lower class mean, in bin-index units.
    pub mu0: f64,
    /// Upper class mean, in bin-index units; `mu0 < mu1`.
    pub mu1: f64,
}

/// Complete solver output: the two-point fit plus the separating bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentSolution {
    /// Probability of the lower class.
    pub p0: f64,
    /// Lower class mean, in bin-index units.
    pub mu0: f64,
    /// Upper class mean, in bin-index units.
    pub mu1: f64,
    /// First bin of class 1; bins strictly below it form class 0.
    ///
    /// Equals `bin_count()` when the mass boundary only falls after the
    /// last bin, in which case every bin classifies as class 0.
    pub separator_bin: usize,
}

/// Solve the closed-form moment-matching system.
///
/// # Errors
///
/// Returns [`ThresholdError::DegenerateDistribution`] when the moments
/// admit no valid ordered two-point solution: zero variance, negative
/// discriminant, coincident class means, or a mixing probability outside
/// `(0, 1)`. The message names the offending quantity.
pub fn fit_two_point(moments: &MomentSet) -> ThresholdResult<TwoPointFit> {
    let cd = moments.variance();
    if !cd.is_finite() || cd <= 0.0 {
        return Err(ThresholdError::DegenerateDistribution(format!(
            "bin-index variance {cd} is not positive"
        )));
    }

    let mean_sum = (moments.m3 - moments.m1 * moments.m2) / cd;
    let mean_product = (moments.m1 * moments.m3 - moments.m2 * moments.m2) / cd;
    let discriminant = mean_sum * mean_sum - 4.0 * mean_product;
    if !discriminant.is_finite() || discriminant < 0.0 {
        return Err(ThresholdError::DegenerateDistribution(format!(
            "characteristic discriminant {discriminant} has no real roots"
        )));
    }

    let half_gap = 0.5 * discriminant.sqrt();
    let mu0 = 0.5 * mean_sum - half_gap;
    let mu1 = 0.5 * mean_sum + half_gap;
    if mu1 - mu0 <= f64::EPSILON * mu1.abs().max(1.0) {
        return Err(ThresholdError::DegenerateDistribution(format!(
            "class means {mu0} and {mu1} coincide"
        )));
    }

    let p0 = (mu1 - moments.m1) / (mu1 - mu0);
    if p0 <= 0.0 || p0 >= 1.0 {
        return Err(ThresholdError::DegenerateDistribution(format!(
            "mixing probability {p0} is outside (0, 1)"
        )));
    }

    Ok(TwoPointFit { p0, mu0, mu1 })
}

/// Solve the moment system and locate the separating bin.
///
/// # Errors
///
/// Propagates the degeneracy cases of [`fit_two_point`].
pub fn solve(hist: &GrayHistogram, moments: &MomentSet) -> ThresholdResult<MomentSolution> {
    let fit = fit_two_point(moments)?;
    let boundary = hist.rank_bin(fit.p0).ok_or_else(|| {
        ThresholdError::DegenerateDistribution("histogram holds no mass".to_string())
    })?;
    Ok(MomentSolution {
        p0: fit.p0,
        mu0: fit.mu0,
        mu1: fit.mu1,
        separator_bin: boundary + 1,
    })
}
