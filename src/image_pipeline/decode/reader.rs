use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::buffer::ImageBuffer;

pub trait PixelDecoder {
    fn decode(&self, data: &[u8]) -> Result<ImageBuffer>;
}
