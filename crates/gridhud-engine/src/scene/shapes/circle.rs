use serde::Serialize;

use crate::backend::{Backend, BackendError};
use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, Painter};

use super::Stroke;

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub stroke: Option<Stroke>,
}

impl<B: Backend + ?Sized> Painter<'_, B> {
    pub fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.circle(center, radius, paint.into(), Some(Stroke::solid(width)))
    }

    pub fn dashed_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.circle(center, radius, paint.into(), Some(Stroke::dashed(width)))
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) -> Result<(), BackendError> {
        self.circle(center, radius, paint.into(), None)
    }

    fn circle(&mut self, center: Vec2, radius: f32, paint: Paint, stroke: Option<Stroke>) -> Result<(), BackendError> {
        self.submit(DrawCmd::Circle(CircleCmd { center, radius, paint, stroke }))
    }
}
