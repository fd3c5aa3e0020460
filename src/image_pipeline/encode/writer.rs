use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::buffer::CorrectedBuffer;
use crate::image_pipeline::encode::types::ExportConfig;

pub trait PixelEncoder {
    fn encode(&self, image: &CorrectedBuffer, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
