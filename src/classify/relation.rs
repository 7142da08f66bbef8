//! Selecting which relationship an action cares about.

use super::partition::{
    containment_partition, intersection_partition, ContainmentPartition, IntersectionPartition,
};
use crate::error::AreaError;
use crate::polygon::Outline;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// The relationship used to pick affected areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Relation {
    /// Areas that intersect the target.
    Intersect,
    /// Areas that contain the target.
    Contain,
}

impl Relation {
    /// The lowercase name, `intersect` or `contain`.
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Intersect => "intersect",
            Relation::Contain => "contain",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intersect" => Ok(Relation::Intersect),
            "contain" => Ok(Relation::Contain),
            other => Err(AreaError::UnknownRelation(other.to_string())),
        }
    }
}

/// The outcome of [`classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<'a, S> {
    /// Result of an intersection partition.
    Intersection(IntersectionPartition<'a, S>),
    /// Result of a containment partition.
    Containment(ContainmentPartition<'a, S>),
}

impl<'a, S> Classification<'a, S> {
    /// The relation that produced this result.
    pub fn relation(&self) -> Relation {
        match self {
            Classification::Intersection(_) => Relation::Intersect,
            Classification::Containment(_) => Relation::Contain,
        }
    }

    /// Areas the action applies to: intersecting or containing ones.
    pub fn affected(&self) -> &[&'a S] {
        match self {
            Classification::Intersection(p) => &p.intersecting,
            Classification::Containment(p) => &p.containing,
        }
    }

    /// Areas left alone: non-intersecting or unrelated ones.
    ///
    /// For containment this excludes the areas the target contains.
    pub fn untouched(&self) -> &[&'a S] {
        match self {
            Classification::Intersection(p) => &p.non_intersecting,
            Classification::Containment(p) => &p.unrelated,
        }
    }
}

/// Runs the partition named by `relation`.
///
/// # Example
///
/// ```
/// use areamark::{classify, Polygon, Relation};
///
/// let outer = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
/// let eraser = Polygon::from_coords(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]).unwrap();
/// let existing = vec![outer];
///
/// let result = classify(&existing, &eraser, "contain".parse().unwrap());
/// assert_eq!(result.relation(), Relation::Contain);
/// assert_eq!(result.affected().len(), 1);
/// ```
pub fn classify<'a, F, S, T, I>(existing: I, target: &T, relation: Relation) -> Classification<'a, S>
where
    F: Float,
    S: Outline<F> + 'a,
    T: Outline<F> + ?Sized,
    I: IntoIterator<Item = &'a S>,
{
    match relation {
        Relation::Intersect => Classification::Intersection(intersection_partition(existing, target)),
        Relation::Contain => Classification::Containment(containment_partition(existing, target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        Polygon::from_coords(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
            .unwrap()
    }

    #[test]
    fn test_relation_names() {
        for relation in [Relation::Intersect, Relation::Contain] {
            assert_eq!(relation.to_string().parse::<Relation>(), Ok(relation));
        }
        assert_eq!(Relation::Intersect.as_str(), "intersect");
        assert_eq!(Relation::Contain.as_str(), "contain");
    }

    #[test]
    fn test_unknown_relation() {
        assert_eq!(
            "Intersect".parse::<Relation>(),
            Err(AreaError::UnknownRelation("Intersect".to_string()))
        );
        assert!("".parse::<Relation>().is_err());
    }

    #[test]
    fn test_classify_intersect() {
        let existing = vec![square(0.0, 0.0, 10.0), square(30.0, 0.0, 10.0), square(2.0, 2.0, 2.0)];
        let result = classify(&existing, &square(1.0, 1.0, 5.0), Relation::Intersect);

        assert_eq!(result.relation(), Relation::Intersect);
        assert_eq!(result.affected(), &[&existing[0], &existing[2]]);
        assert_eq!(result.untouched(), &[&existing[1]]);
    }

    #[test]
    fn test_classify_contain() {
        let existing = vec![square(0.0, 0.0, 10.0), square(30.0, 0.0, 10.0), square(2.0, 2.0, 2.0)];
        let result = classify(&existing, &square(1.0, 1.0, 5.0), Relation::Contain);

        assert_eq!(result.relation(), Relation::Contain);
        assert_eq!(result.affected(), &[&existing[0]]);
        // The small square sits inside the target and is left out.
        assert_eq!(result.untouched(), &[&existing[1]]);
        match result {
            Classification::Containment(p) => assert_eq!(p.dropped, 1),
            Classification::Intersection(_) => panic!("expected containment"),
        }
    }
}
