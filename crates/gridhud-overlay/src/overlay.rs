use std::fmt;

use gridhud_engine::backend::Backend;
use gridhud_engine::time::FrameInfo;

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::renderer::{FrameRenderer, FrameReport};
use crate::resources::ResourceSet;

/// Where an [`Overlay`] is in its life.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LifecycleState {
    /// No device resources exist.
    Uninitialized,
    /// Every resource exists; frames can be drawn.
    Ready,
    /// Torn down. Terminal.
    Destroyed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Ready => "ready",
            LifecycleState::Destroyed => "destroyed",
        })
    }
}

/// Lifecycle call named in [`OverlayError::InvalidState`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    Setup,
    Recreate,
    Draw,
    Teardown,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Setup => "set up",
            Operation::Recreate => "recreate",
            Operation::Draw => "draw",
            Operation::Teardown => "tear down",
        })
    }
}

/// The overlay scene, driven by a host through setup, draw and teardown.
///
/// | state         | setup          | setup (recreate) | draw  | teardown  |
/// |---------------|----------------|------------------|-------|-----------|
/// | Uninitialized | Ready          | Ready (full)     | error | Destroyed |
/// | Ready         | Ready (full)   | Ready (brushes)  | Ready | Destroyed |
/// | Destroyed     | error          | error            | error | error     |
///
/// A failed setup releases whatever it created and leaves the overlay
/// `Uninitialized`. A failed draw leaves it `Ready` so the host can recreate.
#[derive(Debug)]
pub struct Overlay {
    state: LifecycleState,
    config: OverlayConfig,
    resources: ResourceSet,
    renderer: FrameRenderer,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Result<Self, OverlayError> {
        config.validate()?;
        Ok(Self {
            state: LifecycleState::Uninitialized,
            renderer: FrameRenderer::new(&config),
            resources: ResourceSet::new(),
            config,
        })
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn resources(&self) -> &ResourceSet {
        &self.resources
    }

    /// Current triangle angle in radians.
    pub fn angle(&self) -> f32 {
        self.renderer.angle()
    }

    /// Creates device resources.
    ///
    /// With `recreate` set on a ready overlay only brushes are replaced, as
    /// after device loss. From `Uninitialized` there is nothing to keep, so
    /// `recreate` is ignored.
    pub fn setup<B: Backend + ?Sized>(&mut self, backend: &mut B, recreate: bool) -> Result<(), OverlayError> {
        let operation = if recreate { Operation::Recreate } else { Operation::Setup };
        if self.state == LifecycleState::Destroyed {
            return Err(self.invalid(operation));
        }

        let recreate = recreate && self.state == LifecycleState::Ready;
        match self.resources.setup(backend, recreate, &self.config) {
            Ok(()) => {
                if recreate {
                    log::debug!("overlay brushes recreated");
                } else {
                    let grid = self.resources.grid().map(|g| (g.vertical_lines, g.horizontal_lines));
                    log::info!("overlay ready on {} (grid lines {grid:?})", backend.viewport());
                }
                self.state = LifecycleState::Ready;
                Ok(())
            }
            Err(e) => {
                log::error!("overlay {operation} failed: {e}");
                if let Err(cleanup) = self.resources.teardown(backend) {
                    log::warn!("release after failed {operation} also failed: {cleanup}");
                }
                self.state = LifecycleState::Uninitialized;
                Err(e)
            }
        }
    }

    /// Draws one frame. Only valid while `Ready`.
    ///
    /// Every frame opens with a clear, so a recording backend keeps only the
    /// latest frame's commands.
    pub fn draw<B: Backend + ?Sized>(&mut self, backend: &mut B, frame: &FrameInfo) -> Result<FrameReport, OverlayError> {
        if self.state != LifecycleState::Ready {
            return Err(self.invalid(Operation::Draw));
        }
        let Some(loaded) = self.resources.loaded() else {
            return Err(self.invalid(Operation::Draw));
        };
        self.renderer.render(backend, &loaded, frame)
    }

    /// Releases every resource. The overlay cannot be used afterwards.
    ///
    /// The state becomes `Destroyed` even when a release fails; the first
    /// failure is returned.
    pub fn teardown<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), OverlayError> {
        if self.state == LifecycleState::Destroyed {
            return Err(self.invalid(Operation::Teardown));
        }

        let result = self.resources.teardown(backend);
        self.state = LifecycleState::Destroyed;
        match &result {
            Ok(()) => log::info!("overlay destroyed"),
            Err(e) => log::warn!("overlay destroyed with release failure: {e}"),
        }
        result
    }

    fn invalid(&self, operation: Operation) -> OverlayError {
        OverlayError::InvalidState { state: self.state, operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridhud_engine::backend::RecordingBackend;
    use gridhud_engine::coords::Viewport;

    fn backend() -> RecordingBackend {
        RecordingBackend::new(Viewport::new(1280.0, 720.0))
    }

    fn frame(n: u64) -> FrameInfo {
        FrameInfo::new(16 * n as i64, n, 16, 60)
    }

    // ── transitions ───────────────────────────────────────────────────────

    #[test]
    fn starts_uninitialized() {
        let overlay = Overlay::new(OverlayConfig::default()).unwrap();
        assert_eq!(overlay.state(), LifecycleState::Uninitialized);
        assert!(overlay.resources().loaded().is_none());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = OverlayConfig { tile_stride: 0.0, ..OverlayConfig::default() };
        assert!(matches!(Overlay::new(config), Err(OverlayError::Config(_))));
    }

    #[test]
    fn new_rejects_sub_pixel_layout_steps() {
        let config = OverlayConfig { grid_spacing: 1e-6, tile_stride: 1e-6, ..OverlayConfig::default() };
        assert!(matches!(Overlay::new(config), Err(OverlayError::Config(_))));
    }

    #[test]
    fn draw_before_setup_is_rejected() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        let err = overlay.draw(&mut b, &frame(1)).unwrap_err();
        assert_eq!(
            err,
            OverlayError::InvalidState { state: LifecycleState::Uninitialized, operation: Operation::Draw }
        );
        assert!(b.draw_list().is_empty());
    }

    #[test]
    fn recreate_from_uninitialized_is_a_full_setup() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        overlay.setup(&mut b, true).unwrap();
        assert_eq!(overlay.state(), LifecycleState::Ready);
        assert!(overlay.resources().loaded().is_some());
    }

    #[test]
    fn repeated_full_setup_does_not_leak() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        overlay.setup(&mut b, false).unwrap();
        let live = b.live_handles();
        overlay.setup(&mut b, false).unwrap();
        assert_eq!(b.live_handles(), live);
    }

    #[test]
    fn destroyed_rejects_everything() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        overlay.setup(&mut b, false).unwrap();
        overlay.teardown(&mut b).unwrap();
        assert_eq!(overlay.state(), LifecycleState::Destroyed);

        let destroyed = |operation| OverlayError::InvalidState { state: LifecycleState::Destroyed, operation };
        assert_eq!(overlay.setup(&mut b, false), Err(destroyed(Operation::Setup)));
        assert_eq!(overlay.setup(&mut b, true), Err(destroyed(Operation::Recreate)));
        assert_eq!(overlay.draw(&mut b, &frame(1)), Err(destroyed(Operation::Draw)));
        assert_eq!(overlay.teardown(&mut b), Err(destroyed(Operation::Teardown)));
        assert_eq!(b.live_handles(), 0);
    }

    #[test]
    fn teardown_from_uninitialized_is_allowed() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        overlay.teardown(&mut b).unwrap();
        assert_eq!(overlay.state(), LifecycleState::Destroyed);
    }

    #[test]
    fn invalid_state_message_names_both_sides() {
        let err = OverlayError::InvalidState { state: LifecycleState::Destroyed, operation: Operation::Draw };
        assert_eq!(err.to_string(), "cannot draw while destroyed");
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn angle_survives_recreate() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        overlay.setup(&mut b, false).unwrap();
        overlay.draw(&mut b, &frame(1)).unwrap();
        overlay.draw(&mut b, &frame(2)).unwrap();
        let before = overlay.angle();

        b.lose_device();
        overlay.setup(&mut b, true).unwrap();
        assert_eq!(overlay.angle(), before);
    }

    #[test]
    fn failed_draw_stays_ready() {
        let mut b = backend();
        let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
        overlay.setup(&mut b, false).unwrap();
        b.lose_device();

        assert!(matches!(overlay.draw(&mut b, &frame(1)), Err(OverlayError::Backend(_))));
        assert_eq!(overlay.state(), LifecycleState::Ready);

        overlay.setup(&mut b, true).unwrap();
        b.begin_frame();
        overlay.draw(&mut b, &frame(2)).unwrap();
    }
}
