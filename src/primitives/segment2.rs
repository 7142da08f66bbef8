//! 2D line segment type.

use super::Point2;
use crate::polygon::segments_intersect;
use num_traits::Float;

/// A polygon edge between two consecutive vertices.
///
/// Segments are never stored by a polygon; they are produced on demand by
/// [`Polygon::edges`](crate::polygon::Polygon::edges).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Tests whether this segment crosses or touches `other`.
    ///
    /// Parallel and collinear segments never intersect; see
    /// [`segments_intersect`].
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}
