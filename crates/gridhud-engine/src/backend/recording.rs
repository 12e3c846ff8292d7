use std::collections::HashMap;

use serde::Serialize;

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, Geometry, Stroke};

use super::{Backend, BackendError, BrushId, FontId, GeometryId, HandleKind};

/// Font as requested from the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

/// Lifetime counters of a [`RecordingBackend`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceStats {
    pub brushes_created: u64,
    pub brushes_released: u64,
    pub fonts_created: u64,
    pub fonts_released: u64,
    pub geometries_created: u64,
    pub geometries_released: u64,
    pub device_losses: u64,
}

#[derive(Debug, Copy, Clone)]
struct BrushEntry {
    color: Color,
    stale: bool,
}

/// In-memory backend that validates and records every draw command.
///
/// Used by headless hosts and tests. It holds no device, but enforces the
/// same handle rules a GPU backend would:
/// - every command's handles must be live
/// - releases happen once
/// - [`lose_device`](Self::lose_device) turns every live brush stale
///
/// The recorded stream holds one frame: an accepted [`DrawCmd::Clear`] or a
/// call to [`begin_frame`](Self::begin_frame) drops whatever came before.
#[derive(Debug)]
pub struct RecordingBackend {
    viewport: Viewport,
    next_id: u64,

    brushes: HashMap<BrushId, BrushEntry>,
    fonts: HashMap<FontId, FontSpec>,
    geometries: HashMap<GeometryId, Geometry>,

    stats: ResourceStats,
    draw_list: DrawList,
}

impl RecordingBackend {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            next_id: 1,
            brushes: HashMap::new(),
            fonts: HashMap::new(),
            geometries: HashMap::new(),
            stats: ResourceStats::default(),
            draw_list: DrawList::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Drops the previous frame's commands.
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
    }

    /// Commands recorded since the last clear or [`begin_frame`](Self::begin_frame).
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Simulates device loss: every live brush becomes unusable for drawing.
    ///
    /// Fonts and geometry are device-independent and survive.
    pub fn lose_device(&mut self) {
        for entry in self.brushes.values_mut() {
            entry.stale = true;
        }
        self.stats.device_losses += 1;
        log::debug!("device lost; {} brush(es) marked stale", self.brushes.len());
    }

    pub fn stats(&self) -> ResourceStats {
        self.stats
    }

    pub fn live_brushes(&self) -> usize {
        self.brushes.len()
    }

    pub fn live_fonts(&self) -> usize {
        self.fonts.len()
    }

    pub fn live_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// Total number of live handles of any kind.
    pub fn live_handles(&self) -> usize {
        self.live_brushes() + self.live_fonts() + self.live_geometries()
    }

    /// Color a live brush was created with.
    pub fn brush_color(&self, id: BrushId) -> Option<Color> {
        self.brushes.get(&id).map(|e| e.color)
    }

    pub fn font(&self, id: FontId) -> Option<&FontSpec> {
        self.fonts.get(&id)
    }

    pub fn geometry(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries.get(&id)
    }

    /// Resolves the effective color of `paint`, checking that its brush is usable.
    pub fn resolve(&self, paint: Paint) -> Result<Color, BackendError> {
        let id = paint.brush();
        let entry = self
            .brushes
            .get(&id)
            .ok_or(BackendError::UnknownHandle { kind: HandleKind::Brush, id: id.raw() })?;
        if entry.stale {
            return Err(BackendError::StaleHandle { kind: HandleKind::Brush, id: id.raw() });
        }
        Ok(match paint {
            Paint::Brush(_) => entry.color,
            Paint::Tinted(_, color) => color,
        })
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn validate(&self, cmd: &DrawCmd) -> Result<(), BackendError> {
        for paint in cmd.paints() {
            self.resolve(paint)?;
        }

        match cmd {
            DrawCmd::Clear(_) => Ok(()),
            DrawCmd::Rect(c) => {
                check_rect(c.rect)?;
                check_stroke(c.stroke)
            }
            DrawCmd::RoundedRect(c) => {
                check_rect(c.rect)?;
                check_radius(c.radius)?;
                check_stroke(c.stroke)
            }
            DrawCmd::Circle(c) => {
                check_point(c.center)?;
                check_radius(c.radius)?;
                check_stroke(c.stroke)
            }
            DrawCmd::Triangle(c) => {
                c.points.iter().try_for_each(|p| check_point(*p))?;
                check_stroke(c.stroke)
            }
            DrawCmd::Geometry(c) => {
                if !self.geometries.contains_key(&c.geometry) {
                    return Err(BackendError::UnknownHandle {
                        kind: HandleKind::Geometry,
                        id: c.geometry.raw(),
                    });
                }
                check_stroke(Some(c.stroke))
            }
            DrawCmd::Text(c) => {
                if !self.fonts.contains_key(&c.font) {
                    return Err(BackendError::UnknownHandle { kind: HandleKind::Font, id: c.font.raw() });
                }
                if let Some(size) = c.size {
                    if !size.is_finite() || size <= 0.0 {
                        return Err(BackendError::InvalidCommand(format!("text size {size}")));
                    }
                }
                check_point(c.origin)
            }
        }
    }
}

fn check_point(p: Vec2) -> Result<(), BackendError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(BackendError::InvalidCommand(format!("non-finite point {p:?}")))
    }
}

fn check_rect(r: Rect) -> Result<(), BackendError> {
    if r.is_finite() {
        Ok(())
    } else {
        Err(BackendError::InvalidCommand(format!("non-finite rect {r:?}")))
    }
}

fn check_radius(radius: f32) -> Result<(), BackendError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(BackendError::InvalidCommand(format!("radius {radius}")))
    }
}

fn check_stroke(stroke: Option<Stroke>) -> Result<(), BackendError> {
    match stroke {
        Some(s) if !s.is_valid() => Err(BackendError::InvalidCommand(format!("stroke width {}", s.width))),
        _ => Ok(()),
    }
}

impl Backend for RecordingBackend {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_solid_brush(&mut self, color: Color) -> Result<BrushId, BackendError> {
        let id = BrushId::from_raw(self.allocate_id());
        self.brushes.insert(id, BrushEntry { color, stale: false });
        self.stats.brushes_created += 1;
        Ok(id)
    }

    fn release_brush(&mut self, id: BrushId) -> Result<(), BackendError> {
        self.brushes
            .remove(&id)
            .ok_or(BackendError::UnknownHandle { kind: HandleKind::Brush, id: id.raw() })?;
        self.stats.brushes_released += 1;
        Ok(())
    }

    fn create_font(&mut self, family: &str, size: f32) -> Result<FontId, BackendError> {
        if family.trim().is_empty() || !size.is_finite() || size <= 0.0 {
            return Err(BackendError::InvalidFont { family: family.to_string(), size });
        }
        let id = FontId::from_raw(self.allocate_id());
        self.fonts.insert(id, FontSpec { family: family.to_string(), size });
        self.stats.fonts_created += 1;
        Ok(id)
    }

    fn release_font(&mut self, id: FontId) -> Result<(), BackendError> {
        self.fonts
            .remove(&id)
            .ok_or(BackendError::UnknownHandle { kind: HandleKind::Font, id: id.raw() })?;
        self.stats.fonts_released += 1;
        Ok(())
    }

    fn create_geometry(&mut self, geometry: &Geometry) -> Result<GeometryId, BackendError> {
        if !geometry.is_finite() {
            return Err(BackendError::InvalidGeometry("non-finite point".to_string()));
        }
        let id = GeometryId::from_raw(self.allocate_id());
        self.geometries.insert(id, geometry.clone());
        self.stats.geometries_created += 1;
        Ok(id)
    }

    fn release_geometry(&mut self, id: GeometryId) -> Result<(), BackendError> {
        self.geometries
            .remove(&id)
            .ok_or(BackendError::UnknownHandle { kind: HandleKind::Geometry, id: id.raw() })?;
        self.stats.geometries_released += 1;
        Ok(())
    }

    fn submit(&mut self, cmd: DrawCmd) -> Result<(), BackendError> {
        self.validate(&cmd)?;
        if matches!(cmd, DrawCmd::Clear(_)) {
            self.draw_list.clear();
        }
        self.draw_list.push(cmd);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{GeometryBuilder, Painter};

    fn backend() -> RecordingBackend {
        RecordingBackend::new(Viewport::new(800.0, 600.0))
    }

    // ── handles ───────────────────────────────────────────────────────────

    #[test]
    fn brush_create_release_counts() {
        let mut b = backend();
        let id = b.create_solid_brush(Color::RED).unwrap();
        assert_eq!(b.brush_color(id), Some(Color::RED));
        assert_eq!(b.live_brushes(), 1);
        b.release_brush(id).unwrap();
        assert_eq!(b.live_brushes(), 0);
        assert_eq!(b.stats().brushes_created, 1);
        assert_eq!(b.stats().brushes_released, 1);
    }

    #[test]
    fn double_release_is_rejected() {
        let mut b = backend();
        let id = b.create_solid_brush(Color::RED).unwrap();
        b.release_brush(id).unwrap();
        assert_eq!(
            b.release_brush(id),
            Err(BackendError::UnknownHandle { kind: HandleKind::Brush, id: id.raw() })
        );
        assert_eq!(b.stats().brushes_released, 1);
    }

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut b = backend();
        let brush = b.create_solid_brush(Color::RED).unwrap();
        let font = b.create_font("Arial", 12.0).unwrap();
        assert_ne!(brush.raw(), font.raw());
    }

    #[test]
    fn invalid_font_is_rejected() {
        let mut b = backend();
        assert!(matches!(b.create_font("", 12.0), Err(BackendError::InvalidFont { .. })));
        assert!(matches!(b.create_font("Arial", 0.0), Err(BackendError::InvalidFont { .. })));
        assert_eq!(b.live_fonts(), 0);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let mut gb = GeometryBuilder::new();
        gb.line(Vec2::new(0.0, 0.0), Vec2::new(f32::NAN, 1.0)).unwrap();
        let g = gb.close().unwrap();
        let mut b = backend();
        assert!(matches!(b.create_geometry(&g), Err(BackendError::InvalidGeometry(_))));
    }

    // ── device loss ───────────────────────────────────────────────────────

    #[test]
    fn lost_device_makes_brushes_stale_but_releasable() {
        let mut b = backend();
        let id = b.create_solid_brush(Color::GREEN).unwrap();
        let font = b.create_font("Consolas", 14.0).unwrap();
        b.lose_device();

        let err = Painter::new(&mut b).clear(id).unwrap_err();
        assert_eq!(err, BackendError::StaleHandle { kind: HandleKind::Brush, id: id.raw() });

        b.release_brush(id).unwrap();
        assert_eq!(b.live_brushes(), 0);
        assert!(b.font(font).is_some());
        assert_eq!(b.stats().device_losses, 1);
    }

    // ── submit ────────────────────────────────────────────────────────────

    #[test]
    fn tinted_paint_resolves_to_tint_without_touching_brush() {
        let mut b = backend();
        let id = b.create_solid_brush(Color::BLACK).unwrap();
        let tint = Color::rgb(10, 20, 30);
        assert_eq!(b.resolve(Paint::Tinted(id, tint)), Ok(tint));
        assert_eq!(b.brush_color(id), Some(Color::BLACK));
    }

    #[test]
    fn submit_records_in_order_and_begin_frame_clears() {
        let mut b = backend();
        let brush = b.create_solid_brush(Color::WHITE).unwrap();
        {
            let mut p = Painter::new(&mut b);
            p.clear(brush).unwrap();
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), brush).unwrap();
        }
        assert_eq!(b.draw_list().len(), 2);
        assert!(matches!(b.draw_list().items()[0], DrawCmd::Clear(_)));
        b.begin_frame();
        assert!(b.draw_list().is_empty());
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut b = backend();
        let brush = b.create_solid_brush(Color::WHITE).unwrap();
        let mut p = Painter::new(&mut b);
        for _ in 0..100 {
            p.clear(brush).unwrap();
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), brush).unwrap();
        }
        assert_eq!(b.draw_list().len(), 2);
        assert!(matches!(b.draw_list().items()[0], DrawCmd::Clear(_)));
    }

    #[test]
    fn rejected_clear_keeps_the_previous_frame() {
        let mut b = backend();
        let brush = b.create_solid_brush(Color::WHITE).unwrap();
        Painter::new(&mut b).clear(brush).unwrap();
        b.lose_device();
        assert!(Painter::new(&mut b).clear(brush).is_err());
        assert_eq!(b.draw_list().len(), 1);
    }

    #[test]
    fn submit_rejects_released_font() {
        let mut b = backend();
        let brush = b.create_solid_brush(Color::WHITE).unwrap();
        let font = b.create_font("Arial", 12.0).unwrap();
        b.release_font(font).unwrap();
        let err = Painter::new(&mut b)
            .draw_text(font, None, brush, Vec2::zero(), "x")
            .unwrap_err();
        assert_eq!(err, BackendError::UnknownHandle { kind: HandleKind::Font, id: font.raw() });
        assert!(b.draw_list().is_empty());
    }

    #[test]
    fn submit_rejects_bad_numbers() {
        let mut b = backend();
        let brush = b.create_solid_brush(Color::WHITE).unwrap();
        let mut p = Painter::new(&mut b);
        assert!(p.draw_circle(Vec2::zero(), -1.0, brush, 1.0).is_err());
        assert!(p.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), brush, 0.0).is_err());
        assert!(p.fill_triangle([Vec2::zero(), Vec2::zero(), Vec2::new(f32::INFINITY, 0.0)], brush).is_err());
    }

    #[test]
    fn text_background_paint_is_validated() {
        let mut b = backend();
        let fg = b.create_solid_brush(Color::GREEN).unwrap();
        let bg = b.create_solid_brush(Color::BLACK).unwrap();
        let font = b.create_font("Consolas", 14.0).unwrap();
        b.release_brush(bg).unwrap();
        let err = Painter::new(&mut b)
            .draw_text_with_background(font, fg, bg, Vec2::zero(), "hud")
            .unwrap_err();
        assert_eq!(err, BackendError::UnknownHandle { kind: HandleKind::Brush, id: bg.raw() });
    }
}
