//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
///
/// Unreachable vertices are not errors: algorithms report them through
/// sentinel values (`None`, `f64::INFINITY`) in their result maps.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex id that was never registered with the store.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// Edge weight is NaN or infinite.
    #[error("Invalid weight {weight} on edge {from:?} -> {to:?}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Dijkstra reached an edge with a negative weight.
    #[error("Negative weight {weight} on edge {from:?} -> {to:?}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    /// Topological sort found a back edge into this vertex.
    #[error("Graph contains a cycle through vertex {0:?}")]
    CycleDetected(String),

    /// Malformed line in an edge-list file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
