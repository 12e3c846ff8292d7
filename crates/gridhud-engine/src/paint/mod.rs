//! Paint model shared between the overlay and backends.
//!
//! Scope:
//! - color representation (straight RGBA8)
//! - paint sources (a live brush, optionally recolored for one call)

pub mod color;

use serde::Serialize;

use crate::backend::BrushId;

pub use color::Color;

/// Paint source for a single draw call.
///
/// `Tinted` lets a caller draw with a per-call color without mutating the
/// brush the handle refers to. The brush must still be live.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Paint {
    Brush(BrushId),
    Tinted(BrushId, Color),
}

impl Paint {
    /// Brush handle the paint draws through.
    #[inline]
    pub fn brush(self) -> BrushId {
        match self {
            Paint::Brush(id) | Paint::Tinted(id, _) => id,
        }
    }
}

impl From<BrushId> for Paint {
    #[inline]
    fn from(id: BrushId) -> Self {
        Paint::Brush(id)
    }
}
