//! Coordinate and geometry types shared across the backend and the overlay.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
