//! Polygons and the predicates relating them.
//!
//! This module provides:
//! - A validated [`Polygon`] vertex-list type and the [`Outline`] trait
//! - Segment intersection and point-in-polygon tests
//! - Polygon-polygon intersection and containment tests
//! - Areas with holes under the even-odd fill rule
//!
//! # Example
//!
//! ```
//! use areamark::polygon::{polygon_contains, polygons_intersect, Polygon};
//!
//! let outer = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
//! let inner = Polygon::from_coords(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]).unwrap();
//!
//! assert!(polygon_contains(&outer, &inner));
//! assert!(polygons_intersect(&outer, &inner)); // containment counts as intersection
//! ```

mod core;
mod holes;
mod predicates;
mod validate;

pub use self::core::{Outline, Polygon};
pub use holes::PolygonWithHoles;
pub use predicates::{point_in_polygon, polygon_contains, polygons_intersect, segments_intersect};
pub use validate::{is_valid_outline, validate_vertices, MIN_VERTICES};
