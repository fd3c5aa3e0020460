//! Image encoding module
//!
//! Serialises corrected buffers for export, as PNG or TIFF.

mod writer;
mod standard_encoder;
pub mod types;


pub use writer::PixelEncoder;
pub use standard_encoder::StandardEncoder;
pub use types::{ExportConfig, ExportConfigBuilder, ExportFormat, PngCompression, TiffCompression};
