use serde::Serialize;

use crate::backend::{Backend, BackendError};
use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, Painter};

use super::Stroke;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub stroke: Option<Stroke>,
}

impl<B: Backend + ?Sized> Painter<'_, B> {
    /// Rectangle outline.
    pub fn draw_rect(&mut self, rect: Rect, paint: impl Into<Paint>, width: f32) -> Result<(), BackendError> {
        self.rect(rect, paint.into(), Some(Stroke::solid(width)))
    }

    /// Dashed rectangle outline.
    pub fn dashed_rect(&mut self, rect: Rect, paint: impl Into<Paint>, width: f32) -> Result<(), BackendError> {
        self.rect(rect, paint.into(), Some(Stroke::dashed(width)))
    }

    /// Solid rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) -> Result<(), BackendError> {
        self.rect(rect, paint.into(), None)
    }

    fn rect(&mut self, rect: Rect, paint: Paint, stroke: Option<Stroke>) -> Result<(), BackendError> {
        self.submit(DrawCmd::Rect(RectCmd { rect, paint, stroke }))
    }
}
