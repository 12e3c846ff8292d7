//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to a host loop.
//! Intended usage:
//! - one `FrameClock` per overlay window
//! - call `tick()` once per presented frame to obtain `FrameInfo`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameInfo};
