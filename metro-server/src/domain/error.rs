//! Domain error types.
//!
//! These errors represent structural misuse of the graph and the evaluation
//! helpers. Absent routes and unknown lines are not errors.

use super::Vertex;

/// Errors raised by the graph model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)`, or an edge insertion on an
    /// empty graph
    #[error("{vertex} is not a valid vertex (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: Vertex, vertex_count: usize },
}

/// Errors raised while evaluating search results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// `choose_best` was called without any candidates
    #[error("cannot choose a best path from an empty candidate set")]
    EmptyCandidateSet,

    /// Consecutive stations of a path have no edge between them
    #[error("stations {from} and {to} are not connected")]
    NotConnected { from: Vertex, to: Vertex },

    /// A vertex of the path is not in the graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}
