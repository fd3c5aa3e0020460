//! Pixel buffer module
//!
//! Row-major RGBA8 buffers exchanged with the decoding and encoding
//! collaborators, plus reference point selection.

pub mod types;
mod coords;

#[cfg(test)]
mod tests;

pub use types::{CorrectedBuffer, ImageBuffer, ReferencePoint, CHANNELS};
