//! Overlay configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration.

use gridhud_engine::coords::{Rect, Vec2, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::OverlayError;

/// `2 * 3.14`, the default angle-wrap threshold.
///
/// Slightly below `TAU`: the triangle resets one frame earlier than it would
/// at a full turn.
pub const APPROX_TAU: f32 = 2.0 * 3.14;

/// Smallest accepted grid spacing and tile stride, in logical pixels.
///
/// Keeps the line and tile counts bounded by the viewport size.
pub const MIN_STEP: f32 = 1.0;

/// When the figure generator gets a new seed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReseedPolicy {
    /// The seed is the frame time at which the current refresh window opened.
    /// The generator is rebuilt every frame from that seed, so figures hold
    /// still for the whole window and change when a new one opens.
    #[default]
    Windowed,
    /// The seed is the current frame time: figures change every frame.
    PerFrame,
}

/// Threshold at which the rotation angle resets to zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleWrap {
    /// [`APPROX_TAU`].
    #[default]
    Approximate,
    /// `std::f32::consts::TAU`.
    Exact,
}

impl AngleWrap {
    #[inline]
    pub fn threshold(self) -> f32 {
        match self {
            AngleWrap::Approximate => APPROX_TAU,
            AngleWrap::Exact => std::f32::consts::TAU,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub reseed: ReseedPolicy,
    /// Refresh window length for [`ReseedPolicy::Windowed`], in milliseconds.
    pub refresh_window_ms: i64,

    /// Top-left corner of the grid.
    pub grid_origin: Vec2,
    /// Distance kept between the grid and the right/bottom viewport edges.
    pub grid_margin: f32,
    pub grid_spacing: f32,

    /// Offset of the first figure cell from the grid's top-left corner.
    pub tile_inset: f32,
    /// Distance between figure cell origins, both axes.
    pub tile_stride: f32,

    /// Radians added to the triangle angle every frame.
    pub angle_step: f32,
    pub angle_wrap: AngleWrap,

    /// Column width each HUD value is padded to.
    pub hud_padding: usize,
    pub hud_origin: Vec2,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            reseed: ReseedPolicy::Windowed,
            refresh_window_ms: 2500,
            grid_origin: Vec2::new(100.0, 200.0),
            grid_margin: 20.0,
            grid_spacing: 20.0,
            tile_inset: 12.0,
            tile_stride: 120.0,
            angle_step: 0.01,
            angle_wrap: AngleWrap::Approximate,
            hud_padding: 16,
            hud_origin: Vec2::new(58.0, 20.0),
        }
    }
}

impl OverlayConfig {
    /// Rejects values that would stall, explode or invert the layout loops.
    ///
    /// Grid spacing and tile stride must be at least [`MIN_STEP`], so one
    /// viewport pixel holds at most one grid line or tile per axis, and the
    /// grid origin must not sit left of or above the viewport.
    pub fn validate(&self) -> Result<(), OverlayError> {
        fn at_least(name: &str, v: f32, min: f32) -> Result<(), OverlayError> {
            if v.is_finite() && v >= min {
                Ok(())
            } else {
                Err(OverlayError::Config(format!("{name} must be at least {min}, got {v}")))
            }
        }

        at_least("grid_spacing", self.grid_spacing, MIN_STEP)?;
        at_least("tile_stride", self.tile_stride, MIN_STEP)?;
        if !(self.angle_step.is_finite() && self.angle_step > 0.0) {
            return Err(OverlayError::Config(format!("angle_step must be positive, got {}", self.angle_step)));
        }
        if self.refresh_window_ms < 0 {
            return Err(OverlayError::Config(format!(
                "refresh_window_ms must not be negative, got {}",
                self.refresh_window_ms
            )));
        }
        if !self.grid_origin.is_finite() || !self.hud_origin.is_finite() || !self.grid_margin.is_finite() {
            return Err(OverlayError::Config("layout values must be finite".to_string()));
        }
        if self.grid_origin.x < 0.0 || self.grid_origin.y < 0.0 {
            return Err(OverlayError::Config(format!(
                "grid_origin must not be negative, got ({}, {})",
                self.grid_origin.x, self.grid_origin.y
            )));
        }
        if !self.tile_inset.is_finite() || self.tile_inset < 0.0 {
            return Err(OverlayError::Config(format!("tile_inset must be finite and not negative, got {}", self.tile_inset)));
        }
        Ok(())
    }

    /// Grid rectangle for a backend viewport.
    pub fn grid_bounds(&self, viewport: Viewport) -> Rect {
        Rect::from_ltrb(
            self.grid_origin.x,
            self.grid_origin.y,
            viewport.width - self.grid_margin,
            viewport.height - self.grid_margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        OverlayConfig::default().validate().unwrap();
    }

    #[test]
    fn grid_bounds_keep_margin() {
        let b = OverlayConfig::default().grid_bounds(Viewport::new(1280.0, 720.0));
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (100.0, 200.0, 1260.0, 700.0));
    }

    #[test]
    fn approximate_wrap_is_not_tau() {
        assert_eq!(AngleWrap::Approximate.threshold(), 6.28);
        assert!(AngleWrap::Exact.threshold() > AngleWrap::Approximate.threshold());
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let cfg = OverlayConfig { grid_spacing: 0.0, ..OverlayConfig::default() };
        assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));
        let cfg = OverlayConfig { tile_stride: -1.0, ..OverlayConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_sub_pixel_spacing_and_stride() {
        let cfg = OverlayConfig { grid_spacing: 1e-6, ..OverlayConfig::default() };
        assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));
        let cfg = OverlayConfig { tile_stride: 0.5, ..OverlayConfig::default() };
        assert!(matches!(cfg.validate(), Err(OverlayError::Config(_))));

        let cfg = OverlayConfig { grid_spacing: MIN_STEP, tile_stride: MIN_STEP, ..OverlayConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_negative_origin_and_inset() {
        let cfg = OverlayConfig { grid_origin: Vec2::new(-1e9, 200.0), ..OverlayConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = OverlayConfig { tile_inset: -5.0, ..OverlayConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_json_is_default() {
        let cfg: OverlayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, OverlayConfig::default());
    }

    #[test]
    fn json_overrides_policy() {
        let cfg: OverlayConfig =
            serde_json::from_str(r#"{ "reseed": "per_frame", "angle_wrap": "exact" }"#).unwrap();
        assert_eq!(cfg.reseed, ReseedPolicy::PerFrame);
        assert_eq!(cfg.angle_wrap, AngleWrap::Exact);
        assert_eq!(cfg.grid_spacing, 20.0);
    }
}
