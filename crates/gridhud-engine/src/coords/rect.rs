use serde::Serialize;

use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Stored as origin + size. Backends that think in edges (left, top, right,
/// bottom) use [`Rect::from_ltrb`] and the edge accessors.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rectangle from its edges. Inverted edges produce a negative size.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin.offset(self.size.x / 2.0, self.size.y / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_ltrb / edges ─────────────────────────────────────────────────

    #[test]
    fn from_ltrb_round_trips_edges() {
        let rect = Rect::from_ltrb(100.0, 200.0, 300.0, 400.0);
        assert_eq!(rect, r(100.0, 200.0, 200.0, 200.0));
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.top(), 200.0);
        assert_eq!(rect.right(), 300.0);
        assert_eq!(rect.bottom(), 400.0);
    }

    #[test]
    fn from_ltrb_inverted_is_empty() {
        let rect = Rect::from_ltrb(100.0, 200.0, 50.0, 100.0);
        assert!(rect.is_empty());
        assert_eq!(rect.right(), 50.0);
    }

    #[test]
    fn center_of_figure_square() {
        assert_eq!(r(122.0, 222.0, 100.0, 100.0).center(), Vec2::new(172.0, 272.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
