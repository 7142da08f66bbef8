//! Vertex list validation.
//!
//! Every [`Polygon`](super::Polygon) passes through [`validate_vertices`] on
//! construction, so the predicates can assume at least three finite
//! vertices.
//!
//! # Example
//!
//! ```
//! use areamark::{Point2, PolygonDefect};
//! use areamark::polygon::validate_vertices;
//!
//! let segment = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
//! assert_eq!(
//!     validate_vertices(&segment),
//!     Err(PolygonDefect::TooFewVertices { count: 2 })
//! );
//! ```

use crate::error::PolygonDefect;
use crate::primitives::Point2;
use num_traits::Float;

/// Minimum number of vertices a polygon needs.
pub const MIN_VERTICES: usize = 3;

/// Checks that a vertex list has at least three vertices and only finite
/// coordinates.
///
/// The vertex count is checked first. Among non-finite vertices the first
/// one is reported.
pub fn validate_vertices<F: Float>(vertices: &[Point2<F>]) -> Result<(), PolygonDefect> {
    if vertices.len() < MIN_VERTICES {
        return Err(PolygonDefect::TooFewVertices {
            count: vertices.len(),
        });
    }

    match vertices.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PolygonDefect::NonFiniteVertex { index }),
        None => Ok(()),
    }
}

/// Returns `true` if the vertex list passes [`validate_vertices`].
#[inline]
pub fn is_valid_outline<F: Float>(vertices: &[Point2<F>]) -> bool {
    validate_vertices(vertices).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_triangle_is_valid() {
        assert_eq!(validate_vertices(&triangle()), Ok(()));
        assert!(is_valid_outline(&triangle()));
    }

    #[test]
    fn test_too_few_vertices() {
        let empty: [Point2<f64>; 0] = [];
        assert_eq!(
            validate_vertices(&empty),
            Err(PolygonDefect::TooFewVertices { count: 0 })
        );
        assert_eq!(
            validate_vertices(&triangle()[..1]),
            Err(PolygonDefect::TooFewVertices { count: 1 })
        );
        assert_eq!(
            validate_vertices(&triangle()[..2]),
            Err(PolygonDefect::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn test_nan_vertex() {
        let mut vertices = triangle();
        vertices[2].y = f64::NAN;
        assert_eq!(
            validate_vertices(&vertices),
            Err(PolygonDefect::NonFiniteVertex { index: 2 })
        );
    }

    #[test]
    fn test_first_non_finite_reported() {
        let mut vertices = triangle();
        vertices[1].x = f64::INFINITY;
        vertices[2].x = f64::NAN;
        assert_eq!(
            validate_vertices(&vertices),
            Err(PolygonDefect::NonFiniteVertex { index: 1 })
        );
    }

    #[test]
    fn test_count_checked_before_finiteness() {
        let vertices = [Point2::new(f64::NAN, 0.0), Point2::new(1.0, 1.0)];
        assert_eq!(
            validate_vertices(&vertices),
            Err(PolygonDefect::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn test_degenerate_but_finite_is_accepted() {
        // Collinear and repeated vertices are valid input; the predicates
        // handle them through the parallel-edge rule.
        let vertices = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert!(is_valid_outline(&vertices));
    }
}
