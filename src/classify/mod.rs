//! Relationship classification of existing areas against a target polygon.
//!
//! An erase or preset action draws a target polygon and asks which of the
//! existing areas it touches. Two questions are supported:
//! - which areas intersect the target ([`intersection_partition`])
//! - which areas contain the target ([`containment_partition`])
//!
//! [`classify`] picks one of them from a [`Relation`].
//!
//! Results borrow from the input collection, so an area is identified by
//! where it lives rather than by its coordinates.

mod partition;
mod relation;

pub use partition::{
    containment_partition, intersection_partition, ContainmentPartition, IntersectionPartition,
};
pub use relation::{classify, Classification, Relation};
