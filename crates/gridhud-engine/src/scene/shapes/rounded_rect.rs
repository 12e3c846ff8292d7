use serde::Serialize;

use crate::backend::{Backend, BackendError};
use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, Painter};

use super::Stroke;

/// Rounded rectangle draw payload. `radius` applies to all four corners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub paint: Paint,
    pub stroke: Option<Stroke>,
}

impl<B: Backend + ?Sized> Painter<'_, B> {
    pub fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.rounded_rect(rect, radius, paint.into(), Some(Stroke::solid(width)))
    }

    pub fn dashed_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.rounded_rect(rect, radius, paint.into(), Some(Stroke::dashed(width)))
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: impl Into<Paint>) -> Result<(), BackendError> {
        self.rounded_rect(rect, radius, paint.into(), None)
    }

    fn rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: Paint,
        stroke: Option<Stroke>,
    ) -> Result<(), BackendError> {
        self.submit(DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, paint, stroke }))
    }
}
