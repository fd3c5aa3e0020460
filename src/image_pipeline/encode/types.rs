//! Export configuration types

/// Container format for exported images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG via the `image` crate (default)
    #[default]
    Png,
    /// Baseline RGBA TIFF via the `tiff` crate
    Tiff,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Tiff => "tiff",
        }
    }

    /// File name offered when the user exports without choosing one
    pub fn default_file_name(&self) -> String {
        format!("corrected_image.{}", self.extension())
    }
}

/// PNG deflate effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced (default)
    #[default]
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for exporting a corrected image
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub png_compression: PngCompression,
    pub tiff_compression: TiffCompression,
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Default)]
pub struct ExportConfigBuilder {
    format: Option<ExportFormat>,
    png_compression: Option<PngCompression>,
    tiff_compression: Option<TiffCompression>,
}

impl ExportConfigBuilder {
    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn png_compression(mut self, compression: PngCompression) -> Self {
        self.png_compression = Some(compression);
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            format: self.format.unwrap_or(default.format),
            png_compression: self.png_compression.unwrap_or(default.png_compression),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
        }
    }
}
