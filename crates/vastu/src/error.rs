//! Error types for polygon edits.
//!
//! Only operations that would break a [`Polygon`](crate::Polygon) invariant
//! return an error. Missing labels, parallel segments and empty intersection
//! sets are ordinary outcomes and show up as `None` or as absent entries.

use thiserror::Error;

/// Rejected polygon construction or edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("vertex index {index} is out of range for a polygon with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("no polygon edge within {threshold} of ({x:.2}, {y:.2})")]
    NoEdgeNearby { x: f64, y: f64, threshold: f64 },

    #[error("coordinates must be finite")]
    NonFinite,
}
