//! Rendering backend contract.
//!
//! A backend owns everything device-side: brushes, fonts, uploaded geometry
//! and the actual rasterization. Scene code only holds opaque handles and
//! submits [`DrawCmd`]s that reference them.
//!
//! Handle rules every backend enforces:
//! - a handle is released at most once; a second release is `UnknownHandle`
//! - drawing with a released handle is `UnknownHandle`
//! - after device loss, brushes are `StaleHandle` for drawing but can still be
//!   released so their owner can recreate them

mod error;
mod handles;
mod recording;

pub use error::{BackendError, HandleKind};
pub use handles::{BrushId, FontId, GeometryId};
pub use recording::{FontSpec, RecordingBackend, ResourceStats};

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::{DrawCmd, Geometry};

/// Device-side resource factory and draw sink.
pub trait Backend {
    /// Size of the target the scene is drawn into.
    fn viewport(&self) -> Viewport;

    fn create_solid_brush(&mut self, color: Color) -> Result<BrushId, BackendError>;
    fn release_brush(&mut self, id: BrushId) -> Result<(), BackendError>;

    /// Creates a font from a family name and a size in points.
    fn create_font(&mut self, family: &str, size: f32) -> Result<FontId, BackendError>;
    fn release_font(&mut self, id: FontId) -> Result<(), BackendError>;

    /// Uploads line geometry built with [`GeometryBuilder`](crate::scene::GeometryBuilder).
    fn create_geometry(&mut self, geometry: &Geometry) -> Result<GeometryId, BackendError>;
    fn release_geometry(&mut self, id: GeometryId) -> Result<(), BackendError>;

    /// Draws one command immediately.
    fn submit(&mut self, cmd: DrawCmd) -> Result<(), BackendError>;
}
