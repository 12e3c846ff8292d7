use serde::Serialize;

use crate::paint::Paint;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::geometry::GeometryCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command.
///
/// Commands reference backend handles (brushes, fonts, geometry); a backend
/// must reject commands whose handles are not live.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement `Painter` helpers inside that shape module
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    /// Fill the whole target, discarding previous contents.
    Clear(Paint),
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Triangle(TriangleCmd),
    Geometry(GeometryCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short variant name, for logs and per-kind tallies.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Clear(_) => "clear",
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Triangle(_) => "triangle",
            DrawCmd::Geometry(_) => "geometry",
            DrawCmd::Text(_) => "text",
        }
    }

    /// Every paint the command draws with (foreground first).
    pub fn paints(&self) -> Vec<Paint> {
        match self {
            DrawCmd::Clear(p) => vec![*p],
            DrawCmd::Rect(c) => vec![c.paint],
            DrawCmd::RoundedRect(c) => vec![c.paint],
            DrawCmd::Circle(c) => vec![c.paint],
            DrawCmd::Triangle(c) => vec![c.paint],
            DrawCmd::Geometry(c) => vec![c.paint],
            DrawCmd::Text(c) => std::iter::once(c.paint).chain(c.background).collect(),
        }
    }
}
