//! Session configuration types

use crate::image_pipeline::encode::ExportConfig;

/// Pixel count above which the gain pass is split across the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Configuration for an eyedropper session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether to validate decoded image dimensions before accepting them
    pub validate_dimensions: bool,
    /// Largest accepted width or height, checked only when validating
    pub max_dimension: Option<usize>,
    /// Minimum pixel count for the parallel gain pass
    pub parallel_threshold: usize,
    /// Output format settings used by `export`
    pub export: ExportConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(50_000),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            export: ExportConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for SessionConfig
#[derive(Default)]
pub struct SessionConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    parallel_threshold: Option<usize>,
    export: Option<ExportConfig>,
}

impl SessionConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = Some(pixels);
        self
    }

    pub fn export(mut self, export: ExportConfig) -> Self {
        self.export = Some(export);
        self
    }

    pub fn build(self) -> SessionConfig {
        let default = SessionConfig::default();
        SessionConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
            export: self.export.unwrap_or(default.export),
        }
    }
}
