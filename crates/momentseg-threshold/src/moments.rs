//! Raw moments of an intensity histogram
//!
//! Reduces a histogram to its first four raw moments over bin index,
//! with bin counts normalized to a probability mass. All downstream
//! solving works in bin-index units; the mapping back to intensities
//! happens only when the final threshold is derived.

use momentseg_core::GrayHistogram;

/// Raw moments of orders 0 through 3.
///
/// Bin index `i` is the random variable and `count_i / total` its
/// probability mass, so `m0 == 1` by construction and `m1`, `m2`, `m3`
/// are in bin-index units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentSet {
    /// Zeroth raw moment; 1 after normalization.
    pub m0: f64,
    /// First raw moment (mean bin index).
    pub m1: f64,
    /// Second raw moment.
    pub m2: f64,
    /// Third raw moment.
    pub m3: f64,
}

impl MomentSet {
    /// Compute the normalized raw moments of a histogram.
    ///
    /// The histogram must hold at least one count; builders guarantee
    /// this by rejecting empty histograms before they reach here.
    pub fn from_histogram(hist: &GrayHistogram) -> Self {
        let total = hist.total() as f64;
        let mut m1 = 0.0;
        let mut m2 = 0.0;
        let mut m3 = 0.0;
        for (bin, &count) in hist.counts().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let p = count as f64 / total;
            let x = bin as f64;
            m1 += x * p;
            m2 += x * x * p;
            m3 += x * x * x * p;
        }
        MomentSet {
            m0: 1.0,
            m1,
            m2,
            m3,
        }
    }

    /// Variance of the bin-index distribution (`m2 - m1^2`).
    ///
    /// Non-negative for every well-formed histogram; zero exactly when
    /// all mass sits in one bin.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.m2 - self.m1 * self.m1
    }
}
