//! Decoder backed by the `image` crate.
//!
//! Accepts any format `image` was built with (PNG, JPEG, TIFF, WebP, ...).
//! Whatever the source color type, pixels are converted to 8-bit RGBA so the
//! correction always sees the same layout.

use tracing::debug;

use crate::image_pipeline::common::error::{CorrectionError, Result};
use crate::image_pipeline::buffer::ImageBuffer;
use crate::image_pipeline::decode::reader::PixelDecoder;

pub struct StandardDecoder;

impl PixelDecoder for StandardDecoder {
    /// Decodes an encoded image from memory.
    ///
    /// # Errors
    ///
    /// * `CorrectionError::DecodeError` - the bytes are not a supported image
    fn decode(&self, data: &[u8]) -> Result<ImageBuffer> {
        debug!("Decoding image, {} bytes", data.len());

        if let Ok(format) = image::guess_format(data) {
            debug!("Detected format: {:?}", format);
        }

        let decoded = image::load_from_memory(data)
            .map_err(|e| CorrectionError::DecodeError(e.to_string()))?;

        debug!("Source color type: {:?}", decoded.color());

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        ImageBuffer::new(width as usize, height as usize, rgba.into_raw())
    }
}
