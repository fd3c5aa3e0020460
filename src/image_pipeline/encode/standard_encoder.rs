use std::io::{Cursor, Write};

use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{CorrectionError, Result};
use crate::image_pipeline::buffer::CorrectedBuffer;
use crate::image_pipeline::encode::types::{ExportConfig, ExportFormat, PngCompression, TiffCompression};
use crate::image_pipeline::encode::writer::PixelEncoder;

pub struct StandardEncoder;

impl StandardEncoder {
    fn encode_png(&self, image: &CorrectedBuffer, buffer: &mut Vec<u8>, compression: PngCompression) -> Result<()> {
        let compression = match compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        PngEncoder::new_with_quality(buffer, compression, FilterType::Adaptive)
            .write_image(
                image.samples(),
                image.width() as u32,
                image.height() as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| CorrectionError::EncodeError(e.to_string()))
    }

    fn encode_tiff(&self, image: &CorrectedBuffer, buffer: &mut Vec<u8>, compression: TiffCompression) -> Result<()> {
        let compression = match compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(buffer))
            .map_err(|e| CorrectionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder.write_image::<tiff::encoder::colortype::RGBA8>(
            image.width() as u32,
            image.height() as u32,
            image.samples(),
        ).map_err(|e| CorrectionError::EncodeError(e.to_string()))
    }
}

impl PixelEncoder for StandardEncoder {
    fn encode(&self, image: &CorrectedBuffer, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", config.format, image.width(), image.height());

        let mut buffer = Vec::new();

        match config.format {
            ExportFormat::Png => self.encode_png(image, &mut buffer, config.png_compression)?,
            ExportFormat::Tiff => self.encode_tiff(image, &mut buffer, config.tiff_compression)?,
        }

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
