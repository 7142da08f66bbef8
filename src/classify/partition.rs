//! Partitioning existing areas relative to a target polygon.

use crate::polygon::{polygon_contains, polygons_intersect, Outline};
use num_traits::Float;
use tracing::{debug, trace};

/// Existing areas split by whether they intersect the target.
///
/// Every input lands in exactly one of the two lists, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionPartition<'a, S> {
    /// Areas that intersect the target (containment included).
    pub intersecting: Vec<&'a S>,
    /// Areas that share nothing with the target.
    pub non_intersecting: Vec<&'a S>,
}

/// Existing areas split by containment relative to the target.
///
/// Areas the target contains appear in neither list; `dropped` counts them.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainmentPartition<'a, S> {
    /// Areas whose outline contains the target.
    pub containing: Vec<&'a S>,
    /// Areas with no containment relation to the target either way.
    pub unrelated: Vec<&'a S>,
    /// Number of areas skipped because the target contains them.
    pub dropped: usize,
}

/// Splits `existing` into areas that intersect `target` and areas that
/// don't, using [`polygons_intersect`] on the outlines.
///
/// # Example
///
/// ```
/// use areamark::{intersection_partition, Polygon};
///
/// let sq = |x: f64| Polygon::from_coords(&[(x, 0.0), (x + 10.0, 0.0), (x + 10.0, 10.0), (x, 10.0)]).unwrap();
/// let existing = vec![sq(0.0), sq(30.0), sq(5.0)];
///
/// let split = intersection_partition(&existing, &sq(8.0));
/// assert_eq!(split.intersecting, vec![&existing[0], &existing[2]]);
/// assert_eq!(split.non_intersecting, vec![&existing[1]]);
/// ```
pub fn intersection_partition<'a, F, S, T, I>(existing: I, target: &T) -> IntersectionPartition<'a, S>
where
    F: Float,
    S: Outline<F> + 'a,
    T: Outline<F> + ?Sized,
    I: IntoIterator<Item = &'a S>,
{
    let target = target.outline();
    let mut intersecting = Vec::new();
    let mut non_intersecting = Vec::new();

    for (index, area) in existing.into_iter().enumerate() {
        let hit = polygons_intersect(area.outline(), target);
        trace!(index, intersecting = hit, "classified area by intersection");
        if hit {
            intersecting.push(area);
        } else {
            non_intersecting.push(area);
        }
    }

    debug!(
        intersecting = intersecting.len(),
        non_intersecting = non_intersecting.len(),
        "intersection partition"
    );

    IntersectionPartition {
        intersecting,
        non_intersecting,
    }
}

/// Splits `existing` by containment relative to `target`.
///
/// For each area, in order:
/// 1. its outline contains the target: goes to `containing`;
/// 2. otherwise, the target contains it: skipped and counted in `dropped`;
/// 3. otherwise: goes to `unrelated`.
///
/// Because of rule 2 the two lists do not always cover the input.
/// Containment is the vertex-only test of [`polygon_contains`].
pub fn containment_partition<'a, F, S, T, I>(existing: I, target: &T) -> ContainmentPartition<'a, S>
where
    F: Float,
    S: Outline<F> + 'a,
    T: Outline<F> + ?Sized,
    I: IntoIterator<Item = &'a S>,
{
    let target = target.outline();
    let mut containing = Vec::new();
    let mut unrelated = Vec::new();
    let mut dropped = 0;

    for (index, area) in existing.into_iter().enumerate() {
        let outline = area.outline();
        if polygon_contains(outline, target) {
            trace!(index, "area contains target");
            containing.push(area);
        } else if polygon_contains(target, outline) {
            debug!(index, "area inside target, dropped from containment partition");
            dropped += 1;
        } else {
            trace!(index, "area unrelated to target");
            unrelated.push(area);
        }
    }

    debug!(
        containing = containing.len(),
        unrelated = unrelated.len(),
        dropped,
        "containment partition"
    );

    ContainmentPartition {
        containing,
        unrelated,
        dropped,
    }
}
