use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::image_pipeline::buffer::{CHANNELS, CorrectedBuffer, ImageBuffer, ReferencePoint};
use crate::image_pipeline::common::config::DEFAULT_PARALLEL_THRESHOLD;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::white_point::GainVector;

/// Computes and applies white-point gain.
///
/// Holds no image state. The only setting is the pixel count at which the
/// gain pass switches to rayon; both paths produce identical bytes.
#[derive(Debug, Clone, Copy)]
pub struct WhitePointCorrector {
    parallel_threshold: usize,
}

impl Default for WhitePointCorrector {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl WhitePointCorrector {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn compute_gain(&self, image: &ImageBuffer, x: i64, y: i64) -> Result<GainVector> {
        let point = ReferencePoint::within(image, x, y)?;
        self.gain_at(image, point)
    }

    pub fn gain_at(&self, image: &ImageBuffer, point: ReferencePoint) -> Result<GainVector> {
        let reference = image.sample_at(point)?;
        let gain = GainVector::from_reference(reference);
        debug!(
            x = point.x(),
            y = point.y(),
            r = reference[0],
            g = reference[1],
            b = reference[2],
            "Reference pixel sampled, gain = ({:.4}, {:.4}, {:.4})",
            gain.r,
            gain.g,
            gain.b
        );
        Ok(gain)
    }

    /// Builds a new buffer with `gain` applied; `image` is untouched.
    pub fn apply_gain(&self, image: &ImageBuffer, gain: GainVector) -> CorrectedBuffer {
        let mut pixels = image.clone();

        if !gain.is_identity() {
            let samples = pixels.samples_mut();
            if image.pixel_count() >= self.parallel_threshold {
                samples
                    .par_chunks_exact_mut(CHANNELS)
                    .for_each(|pixel| gain.apply_to_pixel(pixel));
            } else {
                samples
                    .chunks_exact_mut(CHANNELS)
                    .for_each(|pixel| gain.apply_to_pixel(pixel));
            }
        }

        CorrectedBuffer::new(pixels, gain)
    }

    /// Corrects `image` so the pixel at `(x, y)` maps to white.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn correct(&self, image: &ImageBuffer, x: i64, y: i64) -> Result<CorrectedBuffer> {
        let point = ReferencePoint::within(image, x, y)?;
        self.correct_at(image, point)
    }

    pub fn correct_at(&self, image: &ImageBuffer, point: ReferencePoint) -> Result<CorrectedBuffer> {
        let gain = {
            let _span = tracing::info_span!("compute_gain").entered();
            self.gain_at(image, point)?
        };

        let _span = tracing::info_span!("apply_gain", pixels = image.pixel_count()).entered();
        Ok(self.apply_gain(image, gain))
    }
}
