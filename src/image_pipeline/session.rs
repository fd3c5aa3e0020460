//! Image lifecycle
//!
//! `EyedropperSession` owns the current image and correction and moves
//! between the `Empty`, `Loaded` and `Corrected` phases. Failed transitions
//! leave the session exactly as it was.

mod types;
mod controller;


pub use types::{Phase, SessionState};
pub use controller::EyedropperSession;
