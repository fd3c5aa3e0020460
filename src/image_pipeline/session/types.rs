use crate::image_pipeline::buffer::{CorrectedBuffer, ImageBuffer, ReferencePoint};

/// Buffers held by a session. Each variant only carries what may exist in
/// that phase.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Loaded {
        image: ImageBuffer,
    },
    Corrected {
        image: ImageBuffer,
        reference: ReferencePoint,
        corrected: CorrectedBuffer,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Loaded,
    Corrected,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self {
            SessionState::Empty => Phase::Empty,
            SessionState::Loaded { .. } => Phase::Loaded,
            SessionState::Corrected { .. } => Phase::Corrected,
        }
    }

    pub fn image(&self) -> Option<&ImageBuffer> {
        match self {
            SessionState::Empty => None,
            SessionState::Loaded { image } | SessionState::Corrected { image, .. } => Some(image),
        }
    }

    pub fn corrected(&self) -> Option<&CorrectedBuffer> {
        match self {
            SessionState::Corrected { corrected, .. } => Some(corrected),
            _ => None,
        }
    }

    pub fn reference_point(&self) -> Option<ReferencePoint> {
        match self {
            SessionState::Corrected { reference, .. } => Some(*reference),
            _ => None,
        }
    }
}
