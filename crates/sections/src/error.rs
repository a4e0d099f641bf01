//! Errors surfaced by the section mesher.
//!
//! Every variant carries enough context (vertex/edge indices, coordinates or
//! loop areas) to locate the bad part of a shape definition. `MeshError::kind`
//! groups the variants so callers can tell bad input from engine defects.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Coarse failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The edge list does not describe closed boundaries.
    Malformed,
    /// Well-formed but outside what the engine resolves (junction vertices).
    Unsupported,
    /// Loops could not be reduced to a single outer boundary.
    Topology,
    /// A tracer or partition invariant broke. Always an engine bug.
    Internal,
    /// A section generator received an unusable parameter.
    InvalidParameter,
}

/// Errors that can occur while building a [`crate::mesh::Mesh`].
#[derive(Error, Clone, Debug, PartialEq)]
pub enum MeshError {
    /// No edges were supplied.
    #[error("edge list is empty")]
    EmptyInput,

    /// An edge references a vertex that does not exist.
    #[error("edge {edge} references vertex {vertex}, but only {count} vertices exist")]
    InvalidVertexIndex {
        /// Offending edge index.
        edge: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// Number of vertices in the list.
        count: usize,
    },

    /// Both ends of an edge are the same vertex.
    #[error("edge {edge} starts and ends at vertex {vertex}")]
    DegenerateEdge {
        /// Offending edge index.
        edge: usize,
        /// The repeated vertex index.
        vertex: usize,
    },

    /// A vertex cannot sit on a closed boundary (degree 0, 1 or odd).
    #[error("vertex {vertex} at ({x}, {y}) has degree {degree}; closed boundaries need an even degree >= 2")]
    BadDegree {
        /// Vertex index.
        vertex: usize,
        /// Vertex x coordinate.
        x: f64,
        /// Vertex y coordinate.
        y: f64,
        /// Number of incident edges.
        degree: usize,
    },

    /// A vertex joins more than two edges and junctions are disabled.
    #[error("vertex {vertex} at ({x}, {y}) joins {degree} edges; only simple boundaries are supported")]
    Junction {
        /// Vertex index.
        vertex: usize,
        /// Vertex x coordinate.
        x: f64,
        /// Vertex y coordinate.
        y: f64,
        /// Number of incident edges.
        degree: usize,
    },

    /// No counterclockwise loop with non-trivial area was traced.
    #[error("no external loop among {loops} traced loops ({trivial} trivial)")]
    NoExternalLoop {
        /// Number of traced loops.
        loops: usize,
        /// How many of them were below the area threshold.
        trivial: usize,
    },

    /// More than one disjoint counterclockwise boundary was traced.
    #[error("found {} disjoint external loops with areas {areas:?}; expected exactly one", .areas.len())]
    MultipleExternalLoops {
        /// Signed areas of every disjoint candidate, in discovery order.
        areas: Vec<f64>,
    },

    /// Holes were found but the caller asked for a simply-connected region.
    #[error("shape has {count} hole(s) with areas {areas:?}; holes are not enabled")]
    UnexpectedHoles {
        /// Number of hole loops.
        count: usize,
        /// Signed (clockwise, negative) areas of the holes.
        areas: Vec<f64>,
    },

    /// Two boundary edges that share no vertex touch or cross.
    #[error("edges {first} and {second} of the boundary intersect; outlines must be simple")]
    SelfIntersection {
        /// Lower edge index.
        first: usize,
        /// Higher edge index.
        second: usize,
    },

    /// An engine invariant failed (half-edge traced twice, left untraced, ...).
    #[error("internal invariant violated: {0}")]
    Invariant(String),

    /// Invalid generator parameter.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value, formatted.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        MeshError::Invariant(msg.into())
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeshError::EmptyInput
            | MeshError::InvalidVertexIndex { .. }
            | MeshError::DegenerateEdge { .. }
            | MeshError::BadDegree { .. } => ErrorKind::Malformed,
            MeshError::Junction { .. } => ErrorKind::Unsupported,
            MeshError::NoExternalLoop { .. }
            | MeshError::MultipleExternalLoops { .. }
            | MeshError::UnexpectedHoles { .. }
            | MeshError::SelfIntersection { .. } => ErrorKind::Topology,
            MeshError::Invariant(_) => ErrorKind::Internal,
            MeshError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_separate_input_from_defects() {
        assert_eq!(MeshError::EmptyInput.kind(), ErrorKind::Malformed);
        assert_eq!(
            MeshError::invariant("half-edge 3 traced twice").kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            MeshError::MultipleExternalLoops {
                areas: vec![1.0, 2.0]
            }
            .kind(),
            ErrorKind::Topology
        );
        assert_eq!(
            MeshError::SelfIntersection { first: 0, second: 2 }.kind(),
            ErrorKind::Topology
        );
    }

    #[test]
    fn messages_carry_context() {
        let err = MeshError::BadDegree {
            vertex: 4,
            x: 1.5,
            y: -2.0,
            degree: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex 4"));
        assert!(msg.contains("(1.5, -2)"));
        assert!(msg.contains("degree 1"));

        let err = MeshError::invalid_param("tw", -0.1, "must be positive");
        assert_eq!(err.to_string(), "invalid parameter: tw = -0.1 (must be positive)");
    }
}
