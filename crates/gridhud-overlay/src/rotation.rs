//! Triangle rotating around one of its own vertices.

use gridhud_engine::backend::{Backend, BackendError};
use gridhud_engine::coords::Vec2;
use gridhud_engine::paint::Paint;
use gridhud_engine::scene::Painter;
use rand::Rng;

use crate::figures::random_color;
use crate::resources::{ColorToken, FontToken, Loaded};

/// Rotates `p` about `pivot` by `angle` radians.
///
/// Convention: `q = (px·cos + py·sin, −px·sin + py·cos) + pivot`, with
/// `(px, py) = p − pivot`. On a y-down screen a positive angle turns the
/// point clockwise.
#[inline]
pub fn rotate_point(p: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = p - pivot;
    Vec2::new(d.x * cos + d.y * sin + pivot.x, -d.x * sin + d.y * cos + pivot.y)
}

/// Monotonic angle that resets to zero at a wrap threshold.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationState {
    angle: f32,
    step: f32,
    wrap: f32,
}

impl RotationState {
    pub fn new(step: f32, wrap: f32) -> Self {
        Self { angle: 0.0, step, wrap }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Adds one step; an angle at or past the threshold becomes zero.
    pub fn advance(&mut self) -> f32 {
        self.angle += self.step;
        if self.angle >= self.wrap {
            self.angle = 0.0;
        }
        self.angle
    }
}

const LABEL_SIZE: f32 = 22.0;
const PIVOT_RADIUS: f32 = 10.0;
const PIVOT_STROKE: f32 = 2.0;
const EDGE_STROKE: f32 = 1.0;

/// Fixed triangle whose first vertex is also the rotation pivot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleDemo {
    pub pivot: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl Default for TriangleDemo {
    fn default() -> Self {
        Self {
            pivot: Vec2::new(100.0, 100.0),
            p2: Vec2::new(80.0, 140.0),
            p3: Vec2::new(120.0, 140.0),
        }
    }
}

impl TriangleDemo {
    /// Vertices at `angle`; the pivot never moves.
    pub fn vertices(&self, angle: f32) -> [Vec2; 3] {
        [
            self.pivot,
            rotate_point(self.p2, self.pivot, angle),
            rotate_point(self.p3, self.pivot, angle),
        ]
    }

    /// Angle label, pivot marker, triangle outline, vertex labels.
    ///
    /// The pivot marker color is drawn from `rng`, after whatever the caller
    /// already consumed this frame.
    pub fn draw<B: Backend + ?Sized, R: Rng + ?Sized>(
        &self,
        painter: &mut Painter<'_, B>,
        res: &Loaded<'_>,
        rng: &mut R,
        angle: f32,
    ) -> Result<(), BackendError> {
        let [p1, p2, p3] = self.vertices(angle);
        let arial = res.font(FontToken::Arial);
        let white = res.brush(ColorToken::White);

        painter.draw_text(arial, Some(LABEL_SIZE), white, p1, format!("angle: {angle}"))?;
        let marker = Paint::Tinted(res.brush(ColorToken::Random), random_color(rng));
        painter.draw_circle(p1, PIVOT_RADIUS, marker, PIVOT_STROKE)?;
        painter.draw_triangle([p1, p2, p3], res.brush(ColorToken::Green), EDGE_STROKE)?;
        painter.draw_text(arial, Some(LABEL_SIZE), white, p2, "p2")?;
        painter.draw_text(arial, Some(LABEL_SIZE), white, p3, "p3")
    }
}
