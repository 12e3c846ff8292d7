//! Per-frame drawing order.

use gridhud_engine::backend::Backend;
use gridhud_engine::coords::Vec2;
use gridhud_engine::scene::Painter;
use gridhud_engine::time::FrameInfo;

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::figures::{FigureKind, RandomCycle, draw_tile, tile_origins};
use crate::hud::hud_text;
use crate::resources::{ColorToken, FontToken, Loaded};
use crate::rotation::{RotationState, TriangleDemo};

const GRID_STROKE: f32 = 1.0;

/// What a frame drew, for hosts and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Seed the figure generator was rebuilt from.
    pub seed: u64,
    /// Figures in tile order.
    pub figures: Vec<FigureKind>,
    /// Triangle angle after this frame's step.
    pub angle: f32,
}

/// Draws a frame and carries the state that evolves between frames.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    random: RandomCycle,
    rotation: RotationState,
    demo: TriangleDemo,

    hud_padding: usize,
    hud_origin: Vec2,
    tile_inset: f32,
    tile_stride: f32,
}

impl FrameRenderer {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            random: RandomCycle::new(config.reseed, config.refresh_window_ms),
            rotation: RotationState::new(config.angle_step, config.angle_wrap.threshold()),
            demo: TriangleDemo::default(),
            hud_padding: config.hud_padding,
            hud_origin: config.hud_origin,
            tile_inset: config.tile_inset,
            tile_stride: config.tile_stride,
        }
    }

    pub fn angle(&self) -> f32 {
        self.rotation.angle()
    }

    /// Draws one frame:
    /// 1. clear to the background brush
    /// 2. HUD statistics on a black plate
    /// 3. grid
    /// 4. reseed, then one random figure per tile
    /// 5. advance the angle, then the rotating triangle
    ///
    /// The first backend error aborts the frame and is returned as is.
    pub fn render<B: Backend + ?Sized>(
        &mut self,
        backend: &mut B,
        res: &Loaded<'_>,
        frame: &FrameInfo,
    ) -> Result<FrameReport, OverlayError> {
        let mut painter = Painter::new(backend);

        painter.clear(res.brush(ColorToken::Background))?;
        painter.draw_text_with_background(
            res.font(FontToken::Consolas),
            res.brush(ColorToken::Green),
            res.brush(ColorToken::Black),
            self.hud_origin,
            hud_text(frame, self.hud_padding),
        )?;
        painter.draw_geometry(res.grid.id, res.brush(ColorToken::Grid), GRID_STROKE)?;

        let seed = self.random.reseed(frame.frame_time);
        let rng = self.random.rng();
        let random_brush = res.brush(ColorToken::Random);
        let origins = tile_origins(res.grid.bounds, self.tile_inset, self.tile_stride);
        let mut figures = Vec::with_capacity(origins.len());
        for origin in origins {
            figures.push(draw_tile(&mut painter, rng, random_brush, origin)?);
        }

        let angle = self.rotation.advance();
        self.demo.draw(&mut painter, res, rng, angle)?;

        Ok(FrameReport { seed, figures, angle })
    }
}
