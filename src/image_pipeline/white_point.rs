//! White-point correction
//!
//! Per-channel gain that maps a chosen neutral pixel to full-scale white.
//! Correction always reads the original `ImageBuffer`, so repeated picks
//! never compound.

mod gain;
mod corrector;


pub use gain::GainVector;
pub use corrector::WhitePointCorrector;

use crate::image_pipeline::buffer::{CorrectedBuffer, ImageBuffer};
use crate::image_pipeline::common::error::Result;

/// Gain derived from the pixel at `(x, y)`, using the default corrector.
pub fn compute_gain(image: &ImageBuffer, x: i64, y: i64) -> Result<GainVector> {
    WhitePointCorrector::default().compute_gain(image, x, y)
}

/// Applies `gain` to every pixel of `image`, using the default corrector.
pub fn apply_gain(image: &ImageBuffer, gain: GainVector) -> CorrectedBuffer {
    WhitePointCorrector::default().apply_gain(image, gain)
}

/// Corrects `image` so the pixel at `(x, y)` becomes white.
pub fn correct(image: &ImageBuffer, x: i64, y: i64) -> Result<CorrectedBuffer> {
    WhitePointCorrector::default().correct(image, x, y)
}
