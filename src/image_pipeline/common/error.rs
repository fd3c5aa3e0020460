use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorrectionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample buffer length {actual} does not match expected {expected}")]
    InvalidBufferLength { expected: usize, actual: usize },

    #[error("Reference point ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },

    #[error("Reference point ({x}, {y}) is not a finite coordinate")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("No image loaded")]
    NoImage,

    #[error("Nothing to export: no correction has been applied")]
    NothingToExport,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorrectionError>;
