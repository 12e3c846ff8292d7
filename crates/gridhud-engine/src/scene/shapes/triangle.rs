use serde::Serialize;

use crate::backend::{Backend, BackendError};
use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, Painter};

use super::Stroke;

/// Triangle draw payload. Winding is irrelevant to fill or stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub paint: Paint,
    pub stroke: Option<Stroke>,
}

impl<B: Backend + ?Sized> Painter<'_, B> {
    pub fn draw_triangle(
        &mut self,
        points: [Vec2; 3],
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.triangle(points, paint.into(), Some(Stroke::solid(width)))
    }

    pub fn dashed_triangle(
        &mut self,
        points: [Vec2; 3],
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.triangle(points, paint.into(), Some(Stroke::dashed(width)))
    }

    pub fn fill_triangle(&mut self, points: [Vec2; 3], paint: impl Into<Paint>) -> Result<(), BackendError> {
        self.triangle(points, paint.into(), None)
    }

    fn triangle(&mut self, points: [Vec2; 3], paint: Paint, stroke: Option<Stroke>) -> Result<(), BackendError> {
        self.submit(DrawCmd::Triangle(TriangleCmd { points, paint, stroke }))
    }
}
