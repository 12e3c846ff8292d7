use crate::backend::{Backend, BackendError};
use crate::paint::Paint;

use super::DrawCmd;

/// Drawing surface handed to scene code each frame.
///
/// Wraps a [`Backend`] with one helper per primitive; the helpers live next to
/// their payload types under `scene::shapes`. Every helper submits a single
/// [`DrawCmd`] and returns the backend's verdict unchanged.
pub struct Painter<'a, B: Backend + ?Sized> {
    backend: &'a mut B,
}

impl<'a, B: Backend + ?Sized> Painter<'a, B> {
    #[inline]
    pub fn new(backend: &'a mut B) -> Self {
        Self { backend }
    }

    /// Submits a raw command.
    #[inline]
    pub fn submit(&mut self, cmd: DrawCmd) -> Result<(), BackendError> {
        self.backend.submit(cmd)
    }

    /// Clears the whole target to `paint`.
    #[inline]
    pub fn clear(&mut self, paint: impl Into<Paint>) -> Result<(), BackendError> {
        self.submit(DrawCmd::Clear(paint.into()))
    }
}
