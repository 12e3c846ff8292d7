//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - describe renderer-agnostic draw commands that reference backend handles
//! - build immutable line geometry before it is uploaded to a backend
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod geometry;
mod list;
mod painter;

pub mod shapes;

pub use cmd::DrawCmd;
pub use geometry::{Figure, Geometry, GeometryBuilder, GeometryError};
pub use list::DrawList;
pub use painter::Painter;
pub use shapes::{Stroke, StrokeStyle};
