//! Randomly chosen figures tiled over the grid.
//!
//! Each cell draws one of twelve fixed figures in a random opaque color. The
//! color is a plain value threaded through the draw call as a tint on the
//! `Random` brush; no brush is ever mutated.

use gridhud_engine::backend::{Backend, BackendError, BrushId};
use gridhud_engine::coords::{Rect, Vec2};
use gridhud_engine::paint::{Color, Paint};
use gridhud_engine::scene::Painter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ReseedPolicy;

/// Inset of every figure from its cell origin.
pub const CELL_MARGIN: f32 = 10.0;
/// Side of the square a figure occupies.
pub const FIGURE_SIZE: f32 = 100.0;
pub const CIRCLE_RADIUS: f32 = 48.0;
pub const CORNER_RADIUS: f32 = 8.0;
pub const OUTLINE_WIDTH: f32 = 2.0;

/// The twelve figures, in palette order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FigureKind {
    Rectangle,
    Circle,
    RoundedRectangle,
    Triangle,
    DashedRectangle,
    DashedCircle,
    DashedRoundedRectangle,
    DashedTriangle,
    FilledRectangle,
    FilledCircle,
    FilledRoundedRectangle,
    FilledTriangle,
}

impl FigureKind {
    pub const PALETTE: [FigureKind; 12] = [
        FigureKind::Rectangle,
        FigureKind::Circle,
        FigureKind::RoundedRectangle,
        FigureKind::Triangle,
        FigureKind::DashedRectangle,
        FigureKind::DashedCircle,
        FigureKind::DashedRoundedRectangle,
        FigureKind::DashedTriangle,
        FigureKind::FilledRectangle,
        FigureKind::FilledCircle,
        FigureKind::FilledRoundedRectangle,
        FigureKind::FilledTriangle,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Draws the figure for the cell at `origin`.
    pub fn draw<B: Backend + ?Sized>(
        self,
        painter: &mut Painter<'_, B>,
        paint: Paint,
        origin: Vec2,
    ) -> Result<(), BackendError> {
        let square = Rect::new(origin.x + CELL_MARGIN, origin.y + CELL_MARGIN, FIGURE_SIZE, FIGURE_SIZE);
        let center = square.center();
        let triangle = [
            Vec2::new(square.left(), square.bottom()),
            Vec2::new(square.right(), square.bottom()),
            Vec2::new(center.x, square.top()),
        ];

        match self {
            FigureKind::Rectangle => painter.draw_rect(square, paint, OUTLINE_WIDTH),
            FigureKind::Circle => painter.draw_circle(center, CIRCLE_RADIUS, paint, OUTLINE_WIDTH),
            FigureKind::RoundedRectangle => painter.draw_rounded_rect(square, CORNER_RADIUS, paint, OUTLINE_WIDTH),
            FigureKind::Triangle => painter.draw_triangle(triangle, paint, OUTLINE_WIDTH),
            FigureKind::DashedRectangle => painter.dashed_rect(square, paint, OUTLINE_WIDTH),
            FigureKind::DashedCircle => painter.dashed_circle(center, CIRCLE_RADIUS, paint, OUTLINE_WIDTH),
            FigureKind::DashedRoundedRectangle => {
                painter.dashed_rounded_rect(square, CORNER_RADIUS, paint, OUTLINE_WIDTH)
            }
            FigureKind::DashedTriangle => painter.dashed_triangle(triangle, paint, OUTLINE_WIDTH),
            FigureKind::FilledRectangle => painter.fill_rect(square, paint),
            FigureKind::FilledCircle => painter.fill_circle(center, CIRCLE_RADIUS, paint),
            FigureKind::FilledRoundedRectangle => painter.fill_rounded_rect(square, CORNER_RADIUS, paint),
            FigureKind::FilledTriangle => painter.fill_triangle(triangle, paint),
        }
    }
}

/// Uniform pick from [`FigureKind::PALETTE`].
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> FigureKind {
    FigureKind::PALETTE[rng.gen_range(0..FigureKind::PALETTE.len())]
}

/// Opaque color with independent uniform channels, drawn red, green, blue.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let r = rng.gen_range(0..=255u8);
    let g = rng.gen_range(0..=255u8);
    let b = rng.gen_range(0..=255u8);
    Color::rgb(r, g, b)
}

/// Picks a figure, then its color, and draws it at `origin`.
pub fn draw_tile<B: Backend + ?Sized, R: Rng + ?Sized>(
    painter: &mut Painter<'_, B>,
    rng: &mut R,
    random_brush: BrushId,
    origin: Vec2,
) -> Result<FigureKind, BackendError> {
    let kind = pick(rng);
    let color = random_color(rng);
    kind.draw(painter, Paint::Tinted(random_brush, color), origin)?;
    Ok(kind)
}

/// Cell origins covering `bounds`, row-major.
///
/// Rows start at `top + inset` and continue while `row < bottom - stride`;
/// columns likewise against `left`/`right`.
pub fn tile_origins(bounds: Rect, inset: f32, stride: f32) -> Vec<Vec2> {
    if stride.is_nan() || stride <= 0.0 {
        return Vec::new();
    }

    let steps = |start: f32, limit: f32| -> Vec<f32> {
        let mut out = Vec::new();
        let mut i = 0usize;
        loop {
            let v = start + i as f32 * stride;
            if v >= limit {
                break out;
            }
            out.push(v);
            i += 1;
        }
    };

    let rows = steps(bounds.top() + inset, bounds.bottom() - stride);
    let columns = steps(bounds.left() + inset, bounds.right() - stride);
    rows.iter()
        .flat_map(|&y| columns.iter().map(move |&x| Vec2::new(x, y)))
        .collect()
}

/// Seed bookkeeping and the generator figures are drawn from.
#[derive(Debug, Clone)]
pub struct RandomCycle {
    policy: ReseedPolicy,
    window_ms: i64,
    last_random_set: i64,
    rng: StdRng,
}

impl RandomCycle {
    pub fn new(policy: ReseedPolicy, window_ms: i64) -> Self {
        Self {
            policy,
            window_ms,
            last_random_set: 0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Frame time the current seed was taken from.
    pub fn last_random_set(&self) -> i64 {
        self.last_random_set
    }

    /// Rebuilds the generator for the frame at `frame_time` and returns the seed.
    pub fn reseed(&mut self, frame_time: i64) -> u64 {
        match self.policy {
            ReseedPolicy::Windowed => {
                if self.last_random_set == 0 || frame_time - self.last_random_set > self.window_ms {
                    self.last_random_set = frame_time;
                }
            }
            ReseedPolicy::PerFrame => self.last_random_set = frame_time,
        }

        let seed = self.last_random_set as u64;
        self.rng = StdRng::seed_from_u64(seed);
        log::trace!("figures reseeded from {seed}");
        seed
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
