use serde::Serialize;

use crate::backend::{Backend, BackendError, FontId};
use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, Painter};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Size override in logical pixels. `None` = the font's own size.
    pub size: Option<f32>,
    pub paint: Paint,
    /// Plate drawn behind the text block. `None` = no plate.
    pub background: Option<Paint>,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
}

impl<B: Backend + ?Sized> Painter<'_, B> {
    /// Text at `origin`, optionally at a size other than the font's.
    pub fn draw_text(
        &mut self,
        font: FontId,
        size: Option<f32>,
        paint: impl Into<Paint>,
        origin: Vec2,
        text: impl Into<String>,
    ) -> Result<(), BackendError> {
        self.submit(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            paint: paint.into(),
            background: None,
            origin,
        }))
    }

    /// Text on a plate sized by the backend to the laid-out text block.
    pub fn draw_text_with_background(
        &mut self,
        font: FontId,
        paint: impl Into<Paint>,
        background: impl Into<Paint>,
        origin: Vec2,
        text: impl Into<String>,
    ) -> Result<(), BackendError> {
        self.submit(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size: None,
            paint: paint.into(),
            background: Some(background.into()),
            origin,
        }))
    }
}
