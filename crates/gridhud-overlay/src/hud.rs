//! HUD text block.

use gridhud_engine::time::FrameInfo;

/// One line of frame statistics, each value left-aligned in a `padding`-wide column.
pub fn hud_text(frame: &FrameInfo, padding: usize) -> String {
    format!(
        "FPS: {:<w$}FrameTime: {:<w$}FrameCount: {:<w$}DeltaTime: {:<w$}",
        frame.fps,
        frame.frame_time,
        frame.frame_count,
        frame.delta_time,
        w = padding
    )
}
