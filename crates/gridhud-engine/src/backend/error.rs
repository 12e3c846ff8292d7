use std::fmt;

/// Kind of backend handle named in an error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandleKind {
    Brush,
    Font,
    Geometry,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandleKind::Brush => "brush",
            HandleKind::Font => "font",
            HandleKind::Geometry => "geometry",
        })
    }
}

/// Failure reported by a backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    /// Never created, or already released.
    #[error("unknown {kind} handle #{id}")]
    UnknownHandle { kind: HandleKind, id: u64 },

    /// Created on a device that has since been lost.
    #[error("{kind} handle #{id} belongs to a lost device")]
    StaleHandle { kind: HandleKind, id: u64 },

    #[error("invalid font {family:?} at size {size}")]
    InvalidFont { family: String, size: f32 },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid draw command: {0}")]
    InvalidCommand(String),
}
