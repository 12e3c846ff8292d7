//! Static line grid.

use gridhud_engine::coords::{Rect, Vec2};
use gridhud_engine::scene::{Geometry, GeometryBuilder, GeometryError};

/// Number of grid lines from `start` to `end` inclusive, `spacing` apart.
///
/// An inverted range has no lines.
pub fn line_count(start: f32, end: f32, spacing: f32) -> usize {
    if end < start {
        0
    } else {
        ((end - start) / spacing).floor() as usize + 1
    }
}

/// Builds the grid geometry for a bounding rectangle.
///
/// Every line is its own open figure: vertical lines at
/// `left, left + spacing, ... <= right`, then horizontal lines at
/// `top, top + spacing, ... <= bottom`. Positions are computed from the line
/// index rather than accumulated, so large grids do not drift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridBuilder {
    bounds: Rect,
    spacing: f32,
}

impl GridBuilder {
    pub fn new(bounds: Rect, spacing: f32) -> Self {
        Self { bounds, spacing }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn vertical_lines(&self) -> usize {
        line_count(self.bounds.left(), self.bounds.right(), self.spacing)
    }

    pub fn horizontal_lines(&self) -> usize {
        line_count(self.bounds.top(), self.bounds.bottom(), self.spacing)
    }

    pub fn build(&self) -> Result<Geometry, GeometryError> {
        let (left, top) = (self.bounds.left(), self.bounds.top());
        let (right, bottom) = (self.bounds.right(), self.bounds.bottom());

        let mut builder = GeometryBuilder::new();
        for i in 0..self.vertical_lines() {
            let x = left + i as f32 * self.spacing;
            builder.line(Vec2::new(x, top), Vec2::new(x, bottom))?;
        }
        for j in 0..self.horizontal_lines() {
            let y = top + j as f32 * self.spacing;
            builder.line(Vec2::new(left, y), Vec2::new(right, y))?;
        }
        builder.close()
    }
}
