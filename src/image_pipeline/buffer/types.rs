//! Pixel buffer types

use crate::image_pipeline::common::error::{CorrectionError, Result};
use crate::image_pipeline::white_point::GainVector;

/// Samples per pixel: R, G, B, A
pub const CHANNELS: usize = 4;

/// Immutable snapshot of a decoded image.
///
/// Samples are RGBA interleaved, row-major, with no padding between rows, so
/// `samples().len() == width * height * 4` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl ImageBuffer {
    /// Wraps RGBA8 samples, rejecting empty dimensions and mismatched lengths.
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidDimensions(width, height));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(CorrectionError::InvalidDimensions(width, height))?;

        if samples.len() != expected {
            return Err(CorrectionError::InvalidBufferLength {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self { width, height, samples })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    // Length-preserving access for producing corrected copies
    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Returns the RGBA sample at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * CHANNELS;
        let px = &self.samples[idx..idx + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Reads the pixel under a reference point.
    pub fn sample_at(&self, point: ReferencePoint) -> Result<[u8; 4]> {
        self.pixel(point.x, point.y).ok_or(CorrectionError::OutOfBounds {
            x: point.x as i64,
            y: point.y as i64,
            width: self.width,
            height: self.height,
        })
    }
}

/// Pixel believed to be neutral under the scene illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferencePoint {
    x: usize,
    y: usize,
}

impl ReferencePoint {
    /// Validates signed buffer coordinates against `image`.
    pub fn within(image: &ImageBuffer, x: i64, y: i64) -> Result<Self> {
        let in_range = |v: i64, limit: usize| usize::try_from(v).ok().filter(|&v| v < limit);

        match (in_range(x, image.width()), in_range(y, image.height())) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(CorrectionError::OutOfBounds {
                x,
                y,
                width: image.width(),
                height: image.height(),
            }),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// Result of applying a gain vector to an `ImageBuffer`.
///
/// Same shape as the source image. Carries the gain it was produced with.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedBuffer {
    pixels: ImageBuffer,
    gain: GainVector,
}

impl CorrectedBuffer {
    pub(crate) fn new(pixels: ImageBuffer, gain: GainVector) -> Self {
        Self { pixels, gain }
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn samples(&self) -> &[u8] {
        self.pixels.samples()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        self.pixels.pixel(x, y)
    }

    pub fn gain(&self) -> GainVector {
        self.gain
    }

    pub fn as_image(&self) -> &ImageBuffer {
        &self.pixels
    }

    pub fn into_image(self) -> ImageBuffer {
        self.pixels
    }
}
