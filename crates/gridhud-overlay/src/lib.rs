//! HUD overlay scene for gridhud.
//!
//! The overlay draws, every frame and in this order: a background clear, a
//! HUD text block with frame statistics, a static line grid, a tiled pass of
//! randomly chosen figures, and a triangle rotating around a pivot.
//!
//! Everything device-side is delegated to a [`gridhud_engine::backend::Backend`].
//! The host drives an [`Overlay`] through explicit lifecycle calls:
//!
//! ```
//! use gridhud_engine::backend::RecordingBackend;
//! use gridhud_engine::coords::Viewport;
//! use gridhud_engine::time::FrameInfo;
//! use gridhud_overlay::{Overlay, OverlayConfig};
//!
//! let mut backend = RecordingBackend::new(Viewport::new(1280.0, 720.0));
//! let mut overlay = Overlay::new(OverlayConfig::default()).unwrap();
//! overlay.setup(&mut backend, false).unwrap();
//! overlay.draw(&mut backend, &FrameInfo::new(16, 1, 16, 60)).unwrap();
//! overlay.teardown(&mut backend).unwrap();
//! assert_eq!(backend.live_handles(), 0);
//! ```

pub mod config;
pub mod error;
pub mod figures;
pub mod grid;
pub mod hud;
pub mod overlay;
pub mod renderer;
pub mod resources;
pub mod rotation;

pub use config::{AngleWrap, OverlayConfig, ReseedPolicy};
pub use error::OverlayError;
pub use overlay::{LifecycleState, Operation, Overlay};
pub use renderer::FrameReport;
