use crate::image_pipeline::common::error::{CorrectionError, Result};
use crate::image_pipeline::buffer::types::{ImageBuffer, ReferencePoint};

impl ReferencePoint {
    /// Maps a click on a display surface of `display_width` x `display_height`
    /// (which may be scaled relative to the image) onto buffer pixels.
    ///
    /// `buffer_x = floor(display_x * image_width / display_width)`, likewise for y.
    /// Clicks that land outside the image are rejected as out of bounds.
    pub fn from_display(
        image: &ImageBuffer,
        display_x: f64,
        display_y: f64,
        display_width: f64,
        display_height: f64,
    ) -> Result<Self> {
        let valid_extent = |v: f64| v.is_finite() && v > 0.0;
        if !valid_extent(display_width) || !valid_extent(display_height) {
            return Err(CorrectionError::InvalidDimensions(
                display_width.max(0.0) as usize,
                display_height.max(0.0) as usize,
            ));
        }

        if !display_x.is_finite() || !display_y.is_finite() {
            return Err(CorrectionError::InvalidCoordinate { x: display_x, y: display_y });
        }

        Self::from_pixel(
            image,
            display_x * image.width() as f64 / display_width,
            display_y * image.height() as f64 / display_height,
        )
    }

    /// Floors fractional buffer coordinates onto the pixel grid.
    pub fn from_pixel(image: &ImageBuffer, x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CorrectionError::InvalidCoordinate { x, y });
        }

        // Float to int casts saturate, so huge values still land out of range
        Self::within(image, x.floor() as i64, y.floor() as i64)
    }
}
