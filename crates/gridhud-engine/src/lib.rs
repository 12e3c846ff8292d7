//! gridhud engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the overlay layer:
//! geometry and color types, the draw command stream, the backend contract
//! and a recording backend, plus frame timing and logging setup.

pub mod backend;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
