//! Mask interpretation
//!
//! A mask image restricts which pixels contribute to histogram
//! construction. The interpretation of mask values is a plain predicate
//! over the mask pixel type, not a strategy hierarchy.

use crate::image::Intensity;

/// Which mask values select a pixel into the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode<M> {
    /// Any nonzero mask value selects the pixel.
    #[default]
    NonZero,
    /// Only the given label value selects the pixel.
    Label(M),
}

impl<M: Intensity> MaskMode<M> {
    /// Check whether a mask value selects its pixel.
    #[inline]
    pub fn is_inside(&self, value: M) -> bool {
        match self {
            MaskMode::NonZero => value != M::default(),
            MaskMode::Label(label) => value == *label,
        }
    }
}
