//! Exact intersection and containment predicates.
//!
//! No tolerance is applied anywhere in this module. The single degenerate
//! rule is that parallel, collinear and zero-length segments never
//! intersect.

use super::core::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Tests whether segment `a1`-`a2` meets segment `b1`-`b2`.
///
/// Both segments are parametrized and the crossing parameters are solved
/// with Cramer's rule:
///
/// - `ua = ((b2 - b1) x (a1 - b1)) / ((a2 - a1) x (b2 - b1))`
/// - `ub = ((a2 - a1) x (a1 - b1)) / ((a2 - a1) x (b2 - b1))`
///
/// The segments intersect iff `0 <= ua <= 1` and `0 <= ub <= 1`, so touching
/// at an endpoint counts. When the denominator is exactly zero the segments
/// are parallel or collinear (or one has zero length) and the result is
/// `false`, even if they overlap.
///
/// Swapping the two segments yields bit-identical parameters, so the test
/// is symmetric.
pub fn segments_intersect<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> bool {
    let da = a2 - a1;
    let db = b2 - b1;
    let w = a1 - b1;

    let denom = da.cross(db);
    if denom == F::zero() {
        return false;
    }

    let ua = db.cross(w) / denom;
    let ub = da.cross(w) / denom;

    let zero = F::zero();
    let one = F::one();
    ua >= zero && ua <= one && ub >= zero && ub <= one
}

/// Tests if a point is inside a polygon using the crossing-number test.
///
/// A horizontal ray is cast from `point` towards `+x`; each edge
/// `(v[j], v[i])` that straddles the ray's height and whose intercept lies
/// strictly to the right of `point` toggles the result.
///
/// Boundary points follow from that formula: for an axis-aligned square
/// the left and bottom edges test inside, the right and top edges outside.
pub fn point_in_polygon<F: Float>(point: Point2<F>, polygon: &Polygon<F>) -> bool {
    let vertices = polygon.vertices();
    let n = vertices.len();

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && ((vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x > point.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if two polygons intersect.
///
/// True if any pair of edges meets (see [`segments_intersect`]), or a
/// vertex of either polygon lies inside the other. One polygon lying
/// entirely inside the other therefore counts as intersecting; use
/// [`polygon_contains`] to tell the two cases apart.
///
/// Cost is `O(|a| * |b|)` segment tests plus `O(|a| + |b|)` point tests.
pub fn polygons_intersect<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    let edges_cross = a.edges().any(|ea| {
        b.edges()
            .any(|eb| segments_intersect(ea.start, ea.end, eb.start, eb.end))
    });

    edges_cross
        || b.vertices().iter().any(|&v| point_in_polygon(v, a))
        || a.vertices().iter().any(|&v| point_in_polygon(v, b))
}

/// Tests if every vertex of `inner` lies inside `outer`.
///
/// Stops at the first vertex found outside. Edges are not checked against
/// each other: with a concave `outer`, an `inner` whose vertices are all
/// inside but whose edges cut across a notch is still reported as
/// contained.
///
/// A polygon is generally not contained in itself: its vertices sit on its
/// own boundary, where the ray cast answers by position (see
/// [`point_in_polygon`]).
pub fn polygon_contains<F: Float>(outer: &Polygon<F>, inner: &Polygon<F>) -> bool {
    inner.vertices().iter().all(|&v| point_in_polygon(v, outer))
}
