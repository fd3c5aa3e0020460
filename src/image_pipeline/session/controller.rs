use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    buffer::{CorrectedBuffer, ImageBuffer, ReferencePoint},
    common::{
        config::SessionConfig,
        error::{CorrectionError, Result},
    },
    decode::{PixelDecoder, StandardDecoder},
    encode::{PixelEncoder, StandardEncoder},
    session::types::{Phase, SessionState},
    white_point::{GainVector, WhitePointCorrector},
};

pub struct EyedropperSession<D: PixelDecoder, E: PixelEncoder> {
    decoder: D,
    encoder: E,
    corrector: WhitePointCorrector,
    config: SessionConfig,
    state: SessionState,
}

impl EyedropperSession<StandardDecoder, StandardEncoder> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_custom(StandardDecoder, StandardEncoder, config)
    }
}

impl<D: PixelDecoder, E: PixelEncoder> EyedropperSession<D, E> {
    pub fn with_custom(decoder: D, encoder: E, config: SessionConfig) -> Self {
        Self {
            decoder,
            encoder,
            corrector: WhitePointCorrector::new(config.parallel_threshold),
            config,
            state: SessionState::Empty,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(width, height, max, "Image dimensions exceed maximum");
                return Err(CorrectionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `data` and makes it the current image, dropping any previous
    /// image and correction. On failure the session is unchanged.
    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn load_image(&mut self, data: &[u8]) -> Result<()> {
        let image = {
            let _span = tracing::info_span!("decode").entered();
            self.decoder.decode(data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        info!(width = image.width(), height = image.height(), "Image loaded");
        self.state = SessionState::Loaded { image };
        Ok(())
    }

    #[instrument(skip(self, path))]
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!(input = %path.display(), "Loading file");

        let data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                CorrectionError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        self.load_image(&data)
    }

    /// Corrects the current image so the pixel at `(x, y)` becomes white.
    ///
    /// Always recomputes from the loaded image, replacing any earlier
    /// correction.
    #[instrument(skip(self))]
    pub fn select_reference_point(&mut self, x: i64, y: i64) -> Result<()> {
        let image = self.require_image()?;
        let point = ReferencePoint::within(image, x, y)?;
        self.apply_reference(point)
    }

    /// Like `select_reference_point`, for fractional pixel coordinates.
    /// Non-finite input is rejected rather than cast.
    #[instrument(skip(self))]
    pub fn select_pixel_point(&mut self, x: f64, y: f64) -> Result<()> {
        let image = self.require_image()?;
        let point = ReferencePoint::from_pixel(image, x, y)?;
        self.apply_reference(point)
    }

    /// Like `select_reference_point`, for a click on a scaled display surface.
    #[instrument(skip(self))]
    pub fn select_display_point(
        &mut self,
        display_x: f64,
        display_y: f64,
        display_width: f64,
        display_height: f64,
    ) -> Result<()> {
        let image = self.require_image()?;
        let point = ReferencePoint::from_display(image, display_x, display_y, display_width, display_height)?;
        self.apply_reference(point)
    }

    fn require_image(&self) -> Result<&ImageBuffer> {
        self.state.image().ok_or_else(|| {
            warn!("Reference point selected with no image loaded");
            CorrectionError::NoImage
        })
    }

    fn apply_reference(&mut self, reference: ReferencePoint) -> Result<()> {
        let corrected = {
            let image = self.require_image()?;
            self.corrector.correct_at(image, reference)?
        };

        self.state = match std::mem::take(&mut self.state) {
            SessionState::Loaded { image } | SessionState::Corrected { image, .. } => {
                info!(x = reference.x(), y = reference.y(), "Correction applied");
                SessionState::Corrected { image, reference, corrected }
            }
            SessionState::Empty => SessionState::Empty,
        };
        Ok(())
    }

    /// Discards the image and any correction.
    pub fn reset(&mut self) {
        if self.state.phase() != Phase::Empty {
            info!("Session reset");
        }
        self.state = SessionState::Empty;
    }

    /// Writes the current correction with the configured export settings.
    ///
    /// Only legal once a reference point has been selected.
    #[instrument(skip(self, output))]
    pub fn export(&self, output: &mut dyn Write) -> Result<()> {
        let corrected = self.require_corrected()?;

        let _span = tracing::info_span!("encode", format = ?self.config.export.format).entered();
        self.encoder.encode(corrected, output, &self.config.export)?;

        info!(
            width = corrected.width(),
            height = corrected.height(),
            "Export complete"
        );
        Ok(())
    }

    #[instrument(skip(self, path))]
    pub fn export_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        // Reject before touching the filesystem
        self.require_corrected()?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(path).map_err(|e| {
                CorrectionError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?
        };

        info!(output = %path.display(), "Exporting file");
        self.export(&mut output_file)
    }

    fn require_corrected(&self) -> Result<&CorrectedBuffer> {
        match &self.state {
            SessionState::Empty => Err(CorrectionError::NoImage),
            SessionState::Loaded { .. } => Err(CorrectionError::NothingToExport),
            SessionState::Corrected { corrected, .. } => Ok(corrected),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn image(&self) -> Option<&ImageBuffer> {
        self.state.image()
    }

    pub fn corrected(&self) -> Option<&CorrectedBuffer> {
        self.state.corrected()
    }

    pub fn reference_point(&self) -> Option<ReferencePoint> {
        self.state.reference_point()
    }

    pub fn gain(&self) -> Option<GainVector> {
        self.state.corrected().map(CorrectedBuffer::gain)
    }

    pub fn can_export(&self) -> bool {
        self.phase() == Phase::Corrected
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SessionConfig) {
        self.corrector = WhitePointCorrector::new(config.parallel_threshold);
        self.config = config;
    }
}
