//! Areas with inner boundaries, filled with the even-odd rule.
//!
//! An erase action punches the eraser polygon into the areas that contain
//! it. Only the outer boundary takes part in intersection and containment
//! tests; the holes matter for filling alone.
//!
//! # Example
//!
//! ```
//! use areamark::{Point2, Polygon, PolygonWithHoles};
//!
//! let outer = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
//! let eraser = Polygon::from_coords(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]).unwrap();
//!
//! let mut area = PolygonWithHoles::new(outer);
//! area.punch_hole(eraser);
//!
//! assert!(area.fill_contains(Point2::new(1.0, 1.0)));
//! assert!(!area.fill_contains(Point2::new(5.0, 5.0)));
//! ```

use super::core::{Outline, Polygon};
use super::predicates::point_in_polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// An outer boundary plus zero or more holes in the same coordinate frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "F: Float + serde::Serialize",
        deserialize = "F: Float + serde::Deserialize<'de>"
    ))
)]
pub struct PolygonWithHoles<F> {
    /// The boundary used by the predicates.
    pub outer: Polygon<F>,
    /// Inner boundaries, in the order they were added.
    #[cfg_attr(feature = "serde", serde(default))]
    pub holes: Vec<Polygon<F>>,
}

impl<F: Float> PolygonWithHoles<F> {
    /// Creates an area without holes.
    pub fn new(outer: Polygon<F>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates an area with the given holes.
    pub fn with_holes(outer: Polygon<F>, holes: Vec<Polygon<F>>) -> Self {
        Self { outer, holes }
    }

    /// Adds an inner boundary.
    pub fn punch_hole(&mut self, hole: Polygon<F>) {
        self.holes.push(hole);
    }

    /// Returns `true` if the area has at least one hole.
    #[inline]
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Iterates over the outer boundary followed by the holes.
    pub fn rings(&self) -> impl Iterator<Item = &Polygon<F>> + '_ {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Tests whether `point` is painted under the even-odd fill rule.
    ///
    /// Counts the rings whose ray cast reports the point inside; an odd
    /// count means filled. Overlapping holes therefore cancel each other.
    pub fn fill_contains(&self, point: Point2<F>) -> bool {
        self.rings()
            .filter(|ring| point_in_polygon(point, ring))
            .count()
            % 2
            == 1
    }

    /// Moves the outer boundary and every hole by `offset`.
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.outer.translate(offset);
        for hole in &mut self.holes {
            hole.translate(offset);
        }
    }
}

impl<F> Outline<F> for PolygonWithHoles<F> {
    #[inline]
    fn outline(&self) -> &Polygon<F> {
        &self.outer
    }
}

impl<F: Float> From<Polygon<F>> for PolygonWithHoles<F> {
    fn from(outer: Polygon<F>) -> Self {
        Self::new(outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{polygon_contains, polygons_intersect};

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        Polygon::from_coords(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
            .unwrap()
    }

    #[test]
    fn test_no_holes_matches_outer() {
        let area = PolygonWithHoles::new(square(0.0, 0.0, 10.0));
        assert!(!area.has_holes());
        assert!(area.fill_contains(Point2::new(5.0, 5.0)));
        assert!(!area.fill_contains(Point2::new(15.0, 5.0)));
    }

    #[test]
    fn test_point_in_hole_not_filled() {
        let mut area = PolygonWithHoles::new(square(0.0, 0.0, 10.0));
        area.punch_hole(square(2.0, 2.0, 3.0));
        assert!(area.has_holes());
        assert!(!area.fill_contains(Point2::new(3.0, 3.0)));
        assert!(area.fill_contains(Point2::new(8.0, 8.0)));
        assert!(!area.fill_contains(Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_overlapping_holes_cancel() {
        let area = PolygonWithHoles::with_holes(
            square(0.0, 0.0, 10.0),
            vec![square(2.0, 2.0, 4.0), square(4.0, 4.0, 4.0)],
        );
        // Inside both holes: three rings, odd, painted again.
        assert!(area.fill_contains(Point2::new(5.0, 5.0)));
        // Inside only the first hole.
        assert!(!area.fill_contains(Point2::new(3.0, 3.0)));
    }

    #[test]
    fn test_rings_order() {
        let outer = square(0.0, 0.0, 10.0);
        let hole = square(1.0, 1.0, 1.0);
        let area = PolygonWithHoles::with_holes(outer.clone(), vec![hole.clone()]);
        let rings: Vec<_> = area.rings().collect();
        assert_eq!(rings, vec![&outer, &hole]);
    }

    #[test]
    fn test_outline_ignores_holes() {
        let mut area = PolygonWithHoles::new(square(0.0, 0.0, 10.0));
        area.punch_hole(square(2.0, 2.0, 6.0));
        let inside_hole = square(4.0, 4.0, 1.0);
        // Sits entirely in the hole, yet the outer boundary still contains it.
        assert!(polygon_contains(area.outline(), &inside_hole));
        assert!(polygons_intersect(area.outline(), &inside_hole));
    }

    #[test]
    fn test_translate_moves_holes() {
        let mut area = PolygonWithHoles::with_holes(square(0.0, 0.0, 10.0), vec![square(2.0, 2.0, 2.0)]);
        area.translate(Vec2::new(3.0, 1.0));
        assert_eq!(area.outer, square(3.0, 1.0, 10.0));
        assert_eq!(area.holes, vec![square(5.0, 3.0, 2.0)]);
    }
}
