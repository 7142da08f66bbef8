//! areamark - Polygon predicates for region annotation
//!
//! Areas drawn over an image are plain vertex lists. This library answers
//! the questions an annotation tool asks about them: does a new region
//! cross an existing one, does it sit inside one, and which of the existing
//! areas should an erase or preset action touch.
//!
//! All predicates are exact (no hidden epsilons) and independent of winding
//! order. Nothing here renders or stores anything.

pub mod classify;
pub mod error;
pub mod nudge;
pub mod polygon;
pub mod primitives;

pub use classify::{
    classify, containment_partition, intersection_partition, Classification,
    ContainmentPartition, IntersectionPartition, Relation,
};
pub use error::{AreaError, PolygonDefect};
pub use nudge::{nudge, Direction, Translate};
pub use polygon::{
    point_in_polygon, polygon_contains, polygons_intersect, segments_intersect, Outline, Polygon,
    PolygonWithHoles,
};
pub use primitives::{Point2, Segment2, Vec2};
