use serde::Serialize;

use crate::coords::Vec2;

/// Error raised while building a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("a figure is already open")]
    FigureAlreadyOpen,
    #[error("no figure is open")]
    NoOpenFigure,
    #[error("geometry closed with an unfinished figure")]
    UnfinishedFigure,
}

/// One connected polyline inside a geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub points: Vec<Vec2>,
    /// When set, the backend joins the last point back to the first.
    pub closed: bool,
}

/// Immutable composite path made of one or more figures.
///
/// Built with [`GeometryBuilder`] and uploaded to a backend once; the backend
/// hands back a `GeometryId` that draw commands reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Geometry {
    figures: Vec<Figure>,
}

impl Geometry {
    #[inline]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    #[inline]
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.figures.iter().flat_map(|f| f.points.iter()).all(|p| p.is_finite())
    }
}

/// Incremental builder mirroring the begin/end-figure model of path APIs.
///
/// ```
/// use gridhud_engine::coords::Vec2;
/// use gridhud_engine::scene::GeometryBuilder;
///
/// let mut b = GeometryBuilder::new();
/// b.line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)).unwrap();
/// let geometry = b.close().unwrap();
/// assert_eq!(geometry.figure_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    figures: Vec<Figure>,
    open: Option<Vec<Vec2>>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_figure(&mut self, start: Vec2) -> Result<(), GeometryError> {
        if self.open.is_some() {
            return Err(GeometryError::FigureAlreadyOpen);
        }
        self.open = Some(vec![start]);
        Ok(())
    }

    pub fn line_to(&mut self, p: Vec2) -> Result<(), GeometryError> {
        let points = self.open.as_mut().ok_or(GeometryError::NoOpenFigure)?;
        points.push(p);
        Ok(())
    }

    pub fn end_figure(&mut self, closed: bool) -> Result<(), GeometryError> {
        let points = self.open.take().ok_or(GeometryError::NoOpenFigure)?;
        self.figures.push(Figure { points, closed });
        Ok(())
    }

    /// Adds a single open figure from `a` to `b`.
    pub fn line(&mut self, a: Vec2, b: Vec2) -> Result<(), GeometryError> {
        self.begin_figure(a)?;
        self.line_to(b)?;
        self.end_figure(false)
    }

    /// Finishes the geometry. Every figure must have been ended.
    pub fn close(self) -> Result<Geometry, GeometryError> {
        if self.open.is_some() {
            return Err(GeometryError::UnfinishedFigure);
        }
        Ok(Geometry { figures: self.figures })
    }
}
