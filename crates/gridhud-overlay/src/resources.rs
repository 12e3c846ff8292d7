//! Brushes, fonts and grid geometry owned by the overlay.
//!
//! Handles are grouped so that a set is either fully present or absent: a
//! failed creation releases whatever part of the set it already created.

use gridhud_engine::backend::{Backend, BackendError, BrushId, FontId, GeometryId};
use gridhud_engine::coords::Rect;
use gridhud_engine::paint::Color;

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::grid::GridBuilder;

/// Named brush slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorToken {
    Black,
    White,
    Red,
    Green,
    Blue,
    Background,
    Grid,
    /// Carrier for per-call random colors; its own color stays black.
    Random,
}

impl ColorToken {
    pub const ALL: [ColorToken; 8] = [
        ColorToken::Black,
        ColorToken::White,
        ColorToken::Red,
        ColorToken::Green,
        ColorToken::Blue,
        ColorToken::Background,
        ColorToken::Grid,
        ColorToken::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Black => "black",
            ColorToken::White => "white",
            ColorToken::Red => "red",
            ColorToken::Green => "green",
            ColorToken::Blue => "blue",
            ColorToken::Background => "background",
            ColorToken::Grid => "grid",
            ColorToken::Random => "random",
        }
    }

    /// Color the brush is created with.
    pub fn color(self) -> Color {
        match self {
            ColorToken::Black | ColorToken::Random => Color::BLACK,
            ColorToken::White => Color::WHITE,
            ColorToken::Red => Color::RED,
            ColorToken::Green => Color::GREEN,
            ColorToken::Blue => Color::BLUE,
            ColorToken::Background => Color::with_opacity(0x00, 0x27, 0x31, 0.2),
            ColorToken::Grid => Color::with_opacity(255, 255, 255, 0.2),
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Named font slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FontToken {
    Arial,
    Consolas,
}

impl FontToken {
    pub const ALL: [FontToken; 2] = [FontToken::Arial, FontToken::Consolas];

    pub fn family(self) -> &'static str {
        match self {
            FontToken::Arial => "Arial",
            FontToken::Consolas => "Consolas",
        }
    }

    /// Point size the font is created with.
    pub fn size(self) -> f32 {
        match self {
            FontToken::Arial => 12.0,
            FontToken::Consolas => 14.0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// One brush per [`ColorToken`], in [`ColorToken::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<BrushId>);

impl Palette {
    #[inline]
    pub fn get(&self, token: ColorToken) -> BrushId {
        self.0[token.index()]
    }

    pub fn handles(&self) -> &[BrushId] {
        &self.0
    }
}

/// One font per [`FontToken`], in [`FontToken::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fonts(Vec<FontId>);

impl Fonts {
    #[inline]
    pub fn get(&self, token: FontToken) -> FontId {
        self.0[token.index()]
    }

    pub fn handles(&self) -> &[FontId] {
        &self.0
    }
}

/// Uploaded grid and the layout it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub id: GeometryId,
    pub bounds: Rect,
    pub vertical_lines: usize,
    pub horizontal_lines: usize,
}

/// Borrowed view of a fully set-up [`ResourceSet`].
#[derive(Debug, Copy, Clone)]
pub struct Loaded<'a> {
    pub palette: &'a Palette,
    pub fonts: &'a Fonts,
    pub grid: &'a GridGeometry,
}

impl Loaded<'_> {
    #[inline]
    pub fn brush(&self, token: ColorToken) -> BrushId {
        self.palette.get(token)
    }

    #[inline]
    pub fn font(&self, token: FontToken) -> FontId {
        self.fonts.get(token)
    }
}

/// Exclusive owner of every backend handle the overlay uses.
#[derive(Debug, Default)]
pub struct ResourceSet {
    palette: Option<Palette>,
    fonts: Option<Fonts>,
    grid: Option<GridGeometry>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn fonts(&self) -> Option<&Fonts> {
        self.fonts.as_ref()
    }

    pub fn grid(&self) -> Option<&GridGeometry> {
        self.grid.as_ref()
    }

    /// All handles present, or `None` if any group is missing.
    pub fn loaded(&self) -> Option<Loaded<'_>> {
        Some(Loaded {
            palette: self.palette.as_ref()?,
            fonts: self.fonts.as_ref()?,
            grid: self.grid.as_ref()?,
        })
    }

    /// Creates (or recreates) device resources.
    ///
    /// Brushes are always released and recreated. With `recreate` set nothing
    /// else is touched: fonts and geometry survive device loss. A full setup
    /// also replaces fonts and rebuilds the grid for the current viewport.
    pub fn setup<B: Backend + ?Sized>(
        &mut self,
        backend: &mut B,
        recreate: bool,
        config: &OverlayConfig,
    ) -> Result<(), OverlayError> {
        self.release_palette(backend)?;
        self.palette = Some(create_palette(backend)?);
        if recreate {
            return Ok(());
        }

        self.release_fonts(backend)?;
        self.release_grid(backend)?;
        self.fonts = Some(create_fonts(backend)?);
        self.grid = Some(create_grid(backend, config)?);
        Ok(())
    }

    /// Releases every handle. Each group is attempted even if an earlier one
    /// fails; the first error is returned.
    pub fn teardown<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), OverlayError> {
        let brushes = self.release_palette(backend);
        let fonts = self.release_fonts(backend);
        let grid = self.release_grid(backend);
        brushes.and(fonts).and(grid)
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn release_palette<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), OverlayError> {
        match self.palette.take() {
            Some(p) => release_all(p.handles(), |id| backend.release_brush(id)),
            None => Ok(()),
        }
    }

    fn release_fonts<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), OverlayError> {
        match self.fonts.take() {
            Some(f) => release_all(f.handles(), |id| backend.release_font(id)),
            None => Ok(()),
        }
    }

    fn release_grid<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), OverlayError> {
        match self.grid.take() {
            Some(g) => Ok(backend.release_geometry(g.id)?),
            None => Ok(()),
        }
    }
}

/// Releases every handle in `ids`, continuing past failures.
fn release_all<T: Copy>(
    ids: &[T],
    mut release: impl FnMut(T) -> Result<(), BackendError>,
) -> Result<(), OverlayError> {
    let mut first_err = None;
    for &id in ids {
        if let Err(e) = release(id) {
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Creates one handle per item; on failure the handles created so far are released.
fn create_all<B: Backend + ?Sized, I: Copy, T: Copy>(
    backend: &mut B,
    items: &[I],
    create: impl Fn(&mut B, I) -> Result<T, BackendError>,
    release: impl Fn(&mut B, T) -> Result<(), BackendError>,
) -> Result<Vec<T>, OverlayError> {
    let mut created = Vec::with_capacity(items.len());
    for &item in items {
        match create(backend, item) {
            Ok(id) => created.push(id),
            Err(e) => {
                // The creation error is the one reported.
                for id in created {
                    let _ = release(backend, id);
                }
                return Err(e.into());
            }
        }
    }
    Ok(created)
}

fn create_palette<B: Backend + ?Sized>(backend: &mut B) -> Result<Palette, OverlayError> {
    let handles = create_all(
        backend,
        &ColorToken::ALL,
        |b, t| b.create_solid_brush(t.color()),
        |b, id| b.release_brush(id),
    )?;
    Ok(Palette(handles))
}

fn create_fonts<B: Backend + ?Sized>(backend: &mut B) -> Result<Fonts, OverlayError> {
    let handles = create_all(
        backend,
        &FontToken::ALL,
        |b, t| b.create_font(t.family(), t.size()),
        |b, id| b.release_font(id),
    )?;
    Ok(Fonts(handles))
}

fn create_grid<B: Backend + ?Sized>(backend: &mut B, config: &OverlayConfig) -> Result<GridGeometry, OverlayError> {
    let builder = GridBuilder::new(config.grid_bounds(backend.viewport()), config.grid_spacing);
    let geometry = builder.build()?;
    let id = backend.create_geometry(&geometry)?;
    log::debug!(
        "grid built: {} vertical, {} horizontal lines",
        builder.vertical_lines(),
        builder.horizontal_lines()
    );
    Ok(GridGeometry {
        id,
        bounds: builder.bounds(),
        vertical_lines: builder.vertical_lines(),
        horizontal_lines: builder.horizontal_lines(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridhud_engine::backend::RecordingBackend;
    use gridhud_engine::coords::Viewport;
    use gridhud_engine::scene::{DrawCmd, Geometry};

    fn backend() -> RecordingBackend {
        RecordingBackend::new(Viewport::new(320.0, 420.0))
    }

    /// Recording backend that refuses brush creation after `budget` brushes.
    struct BrushBudget {
        inner: RecordingBackend,
        budget: usize,
    }

    impl Backend for BrushBudget {
        fn viewport(&self) -> Viewport { self.inner.viewport() }
        fn create_solid_brush(&mut self, color: Color) -> Result<BrushId, BackendError> {
            if self.budget == 0 {
                return Err(BackendError::InvalidCommand("out of brushes".into()));
            }
            self.budget -= 1;
            self.inner.create_solid_brush(color)
        }
        fn release_brush(&mut self, id: BrushId) -> Result<(), BackendError> { self.inner.release_brush(id) }
        fn create_font(&mut self, family: &str, size: f32) -> Result<FontId, BackendError> {
            self.inner.create_font(family, size)
        }
        fn release_font(&mut self, id: FontId) -> Result<(), BackendError> { self.inner.release_font(id) }
        fn create_geometry(&mut self, g: &Geometry) -> Result<GeometryId, BackendError> {
            self.inner.create_geometry(g)
        }
        fn release_geometry(&mut self, id: GeometryId) -> Result<(), BackendError> {
            self.inner.release_geometry(id)
        }
        fn submit(&mut self, cmd: DrawCmd) -> Result<(), BackendError> { self.inner.submit(cmd) }
    }

    // ── tokens ────────────────────────────────────────────────────────────

    #[test]
    fn token_colors_and_fonts() {
        assert_eq!(ColorToken::Background.color(), Color::rgba(0, 39, 49, 51));
        assert_eq!(ColorToken::Grid.color(), Color::rgba(255, 255, 255, 51));
        assert_eq!(ColorToken::Random.color(), Color::BLACK);
        assert_eq!(FontToken::Arial.size(), 12.0);
        assert_eq!(FontToken::Consolas.family(), "Consolas");
    }

    #[test]
    fn token_index_follows_all_order() {
        for (i, t) in ColorToken::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    // ── setup / teardown ──────────────────────────────────────────────────

    #[test]
    fn full_setup_creates_every_group() {
        let mut b = backend();
        let mut res = ResourceSet::new();
        res.setup(&mut b, false, &OverlayConfig::default()).unwrap();

        let loaded = res.loaded().unwrap();
        assert_eq!(b.live_brushes(), 8);
        assert_eq!(b.live_fonts(), 2);
        assert_eq!(b.live_geometries(), 1);
        assert_eq!(b.brush_color(loaded.brush(ColorToken::Red)), Some(Color::RED));
        assert_eq!(b.font(loaded.font(FontToken::Consolas)).unwrap().size, 14.0);
        // 320x420 viewport: bounds (100, 200, 300, 400).
        assert_eq!((loaded.grid.vertical_lines, loaded.grid.horizontal_lines), (11, 11));
    }

    #[test]
    fn recreate_replaces_brushes_only() {
        let mut b = backend();
        let mut res = ResourceSet::new();
        let cfg = OverlayConfig::default();
        res.setup(&mut b, false, &cfg).unwrap();
        let old_brushes = res.palette().unwrap().clone();
        let old_fonts = res.fonts().unwrap().clone();
        let old_grid = res.grid().unwrap().id;

        b.lose_device();
        res.setup(&mut b, true, &cfg).unwrap();

        for id in old_brushes.handles() {
            assert_eq!(b.brush_color(*id), None);
        }
        assert_eq!(res.palette().unwrap().handles().len(), old_brushes.handles().len());
        assert_eq!(b.live_brushes(), 8);
        assert_eq!(res.fonts().unwrap(), &old_fonts);
        assert_eq!(res.grid().unwrap().id, old_grid);
        assert_eq!(b.stats().fonts_created, 2);
    }

    #[test]
    fn repeated_full_setup_does_not_leak() {
        let mut b = backend();
        let mut res = ResourceSet::new();
        let cfg = OverlayConfig::default();
        res.setup(&mut b, false, &cfg).unwrap();
        res.setup(&mut b, false, &cfg).unwrap();
        assert_eq!(b.live_handles(), 11);
        assert_eq!(b.stats().fonts_released, 2);
        assert_eq!(b.stats().geometries_released, 1);
    }

    #[test]
    fn teardown_releases_everything_once() {
        let mut b = backend();
        let mut res = ResourceSet::new();
        res.setup(&mut b, false, &OverlayConfig::default()).unwrap();
        res.teardown(&mut b).unwrap();
        assert_eq!(b.live_handles(), 0);
        assert!(res.loaded().is_none());

        // Nothing left to release a second time.
        res.teardown(&mut b).unwrap();
        assert_eq!(b.stats().brushes_released, 8);
    }

    #[test]
    fn failed_palette_rolls_back() {
        let mut b = BrushBudget { inner: backend(), budget: 5 };
        let mut res = ResourceSet::new();
        let err = res.setup(&mut b, false, &OverlayConfig::default()).unwrap_err();
        assert!(matches!(err, OverlayError::Backend(_)));
        assert_eq!(b.inner.live_handles(), 0);
        assert!(res.palette().is_none());
    }
}
