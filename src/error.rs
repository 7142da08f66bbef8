//! Error types for areamark operations.

use thiserror::Error;

/// Errors that can occur when building or moving areas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    /// The vertex list cannot form a polygon.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(PolygonDefect),

    /// A nudge step was negative or not finite.
    #[error("nudge step must be finite and non-negative")]
    InvalidStep,

    /// A relation name other than `intersect` or `contain`.
    #[error("unknown relation `{0}`")]
    UnknownRelation(String),

    /// A direction name other than `top`, `bottom`, `left` or `right`.
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
}

/// The reason a vertex list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolygonDefect {
    /// Fewer than three vertices.
    #[error("need at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        index: usize,
    },
}

impl From<PolygonDefect> for AreaError {
    fn from(defect: PolygonDefect) -> Self {
        AreaError::InvalidPolygon(defect)
    }
}
