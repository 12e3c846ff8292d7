pub(crate) mod circle;
pub(crate) mod geometry;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod text;
pub(crate) mod triangle;

pub use circle::CircleCmd;
pub use geometry::GeometryCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;
pub use triangle::TriangleCmd;

use serde::Serialize;

/// Line pattern of an outline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum StrokeStyle {
    Solid,
    Dashed,
}

/// Outline drawn along the edge of a shape.
///
/// Shapes carry `Option<Stroke>`: `None` means the interior is filled.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f32,
    pub style: StrokeStyle,
}

impl Stroke {
    #[inline]
    pub const fn solid(width: f32) -> Self {
        Self { width, style: StrokeStyle::Solid }
    }

    #[inline]
    pub const fn dashed(width: f32) -> Self {
        Self { width, style: StrokeStyle::Dashed }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }
}
