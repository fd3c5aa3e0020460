//! White-point correction pipeline
//!
//! Decoding, gain computation, correction and export are split into their own
//! modules, with `session` owning the image lifecycle on top of them.

pub mod common;
pub mod buffer;
pub mod white_point;
pub mod decode;
pub mod encode;
pub mod session;

pub use common::{
    CorrectionError,
    Result,
    SessionConfig,
    SessionConfigBuilder,
};

pub use buffer::{
    CorrectedBuffer,
    ImageBuffer,
    ReferencePoint,
};

pub use white_point::{
    GainVector,
    WhitePointCorrector,
    apply_gain,
    compute_gain,
    correct,
};

pub use decode::{
    PixelDecoder,
    StandardDecoder,
};

pub use encode::{
    ExportConfig,
    ExportConfigBuilder,
    ExportFormat,
    PixelEncoder,
    PngCompression,
    StandardEncoder,
    TiffCompression,
};

pub use session::{
    EyedropperSession,
    Phase,
    SessionState,
};
