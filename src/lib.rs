//! adjgraph — in-memory weighted graph engine.
//!
//! Stores a directed or undirected graph as an adjacency list keyed by
//! string vertex ids, and runs BFS, DFS, Dijkstra, topological sort and
//! connected-component labeling over it.

pub mod cli;
pub mod collections;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::{HeapEntry, MinHeap, Queue, Stack};
pub use format::{EdgeListFormat, EdgeListReader, LoadOptions};
pub use graph::{
    bfs, connected_components, dfs, dijkstra, topo_sort, topo_sort_unchecked, ucc, AdjacencyList,
    GraphBuilder,
};
pub use types::{
    Edge, GraphError, GraphResult, TraversalDirection, DEFAULT_WEIGHT, UNREACHABLE,
};
