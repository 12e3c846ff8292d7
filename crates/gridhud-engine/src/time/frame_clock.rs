use std::time::{Duration, Instant};

use serde::Serialize;

/// Frame timing snapshot handed to the overlay each frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameInfo {
    /// Milliseconds since the clock started, taken at the tick.
    pub frame_time: i64,

    /// Frames ticked so far, including this one.
    pub frame_count: u64,

    /// Milliseconds since the previous tick (clamped).
    pub delta_time: i64,

    /// Frames counted during the last complete one-second window.
    pub fps: u32,
}

impl FrameInfo {
    #[inline]
    pub const fn new(frame_time: i64, frame_count: u64, delta_time: i64, fps: u32) -> Self {
        Self { frame_time, frame_count, delta_time, fps }
    }
}

/// Frame clock producing `FrameInfo` snapshots.
///
/// Delta time is clamped to avoid pathological values when the host is paused
/// by the debugger, minimized, or stalls. FPS is measured, not derived from
/// delta time: frames are counted per one-second window and the count of the
/// last complete window is reported.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_count: u64,
    dt_min: Duration,
    dt_max: Duration,

    window_start: Instant,
    frames_in_window: u32,
    fps: u32,
}

const FPS_WINDOW: Duration = Duration::from_secs(1);

impl FrameClock {
    /// Creates a new clock with default clamps, starting now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last: start,
            frame_count: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            window_start: start,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        self.frame_count = self.frame_count.wrapping_add(1);

        self.frames_in_window += 1;
        if now.saturating_duration_since(self.window_start) >= FPS_WINDOW {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start = now;
        }

        FrameInfo {
            frame_time: now.saturating_duration_since(self.start).as_millis() as i64,
            frame_count: self.frame_count,
            delta_time: dt.as_millis() as i64,
            fps: self.fps,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
