//! Image decoding module
//!
//! Turns encoded file bytes into RGBA8 `ImageBuffer`s.

mod reader;
mod standard_decoder;

pub use reader::PixelDecoder;
pub use standard_decoder::StandardDecoder;
