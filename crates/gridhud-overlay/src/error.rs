use gridhud_engine::backend::BackendError;
use gridhud_engine::scene::GeometryError;

use crate::overlay::{LifecycleState, Operation};

/// Failure of an overlay lifecycle call.
///
/// Backend failures are passed through unchanged; the overlay never retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverlayError {
    #[error("backend: {0}")]
    Backend(#[from] BackendError),

    #[error("grid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("cannot {operation} while {state}")]
    InvalidState { state: LifecycleState, operation: Operation },

    #[error("invalid configuration: {0}")]
    Config(String),
}
