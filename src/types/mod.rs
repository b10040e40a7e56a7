//! All data types for the adjgraph library.

pub mod edge;
pub mod error;

pub use edge::{Edge, TraversalDirection};
pub use error::{GraphError, GraphResult};

/// Distance Dijkstra reports for vertices with no path from the start.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Weight used for edges whose input line carries no weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;
