//! Common utilities module
//!
//! Error type and session configuration shared across the pipeline.

pub mod error;
pub mod config;

pub use error::{CorrectionError, Result};
pub use config::{SessionConfig, SessionConfigBuilder};
