//! Core polygon type and basic operations.

use super::predicates::{point_in_polygon, polygon_contains, polygons_intersect};
use super::validate::validate_vertices;
use crate::error::AreaError;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A closed polygon given by its vertex list.
///
/// Edges run between consecutive vertices and wrap around from the last
/// vertex to the first. The winding order is whatever the caller supplied;
/// nothing in this crate depends on it. Holds at least three vertices, all
/// with finite coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Point2<F>>",
        into = "Vec<Point2<F>>",
        bound(
            serialize = "F: Float + serde::Serialize",
            deserialize = "F: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from its vertices.
    ///
    /// Fails with [`AreaError::InvalidPolygon`] for fewer than three vertices
    /// or any NaN/infinite coordinate.
    pub fn new(vertices: Vec<Point2<F>>) -> Result<Self, AreaError> {
        validate_vertices(&vertices)?;
        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Result<Self, AreaError> {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    /// Returns the vertices in their original order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Consumes the polygon and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        self.vertices
    }

    /// Returns the number of vertices (always at least 3).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges, including the closing edge back to the first
    /// vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec2<F>) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        let mut moved = self.clone();
        moved.translate(offset);
        moved
    }

    /// Tests if a point is inside the polygon (ray casting).
    ///
    /// Points on the boundary may return either true or false.
    #[inline]
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        point_in_polygon(point, self)
    }

    /// Tests if this polygon intersects `other`; see [`polygons_intersect`].
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        polygons_intersect(self, other)
    }

    /// Tests if every vertex of `inner` lies inside this polygon; see
    /// [`polygon_contains`].
    #[inline]
    pub fn contains(&self, inner: &Self) -> bool {
        polygon_contains(self, inner)
    }
}

impl<F: Float> TryFrom<Vec<Point2<F>>> for Polygon<F> {
    type Error = AreaError;

    fn try_from(vertices: Vec<Point2<F>>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl<F> From<Polygon<F>> for Vec<Point2<F>> {
    fn from(polygon: Polygon<F>) -> Self {
        polygon.vertices
    }
}

/// A shape whose outer boundary takes part in the geometry predicates.
///
/// The classifier works on anything exposing an outline, so callers can
/// classify their own area records and get references to them back.
pub trait Outline<F> {
    /// The boundary used for intersection and containment tests.
    fn outline(&self) -> &Polygon<F>;
}

impl<F> Outline<F> for Polygon<F> {
    #[inline]
    fn outline(&self) -> &Polygon<F> {
        self
    }
}

impl<F, T: Outline<F> + ?Sized> Outline<F> for &T {
    #[inline]
    fn outline(&self) -> &Polygon<F> {
        (**self).outline()
    }
}
