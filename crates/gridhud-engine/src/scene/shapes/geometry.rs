use serde::Serialize;

use crate::backend::{Backend, BackendError, GeometryId};
use crate::paint::Paint;
use crate::scene::{DrawCmd, Painter};

use super::Stroke;

/// Stroke of a previously uploaded geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryCmd {
    pub geometry: GeometryId,
    pub paint: Paint,
    pub stroke: Stroke,
}

impl<B: Backend + ?Sized> Painter<'_, B> {
    /// Strokes every figure of `geometry` with a solid line of `width`.
    pub fn draw_geometry(
        &mut self,
        geometry: GeometryId,
        paint: impl Into<Paint>,
        width: f32,
    ) -> Result<(), BackendError> {
        self.submit(DrawCmd::Geometry(GeometryCmd {
            geometry,
            paint: paint.into(),
            stroke: Stroke::solid(width),
        }))
    }
}
