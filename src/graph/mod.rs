//! The graph store and the algorithms that run over it.

pub mod adjacency_list;
pub mod builder;
pub mod shortest_path;
pub mod topo;
pub mod traversal;

pub use adjacency_list::AdjacencyList;
pub use builder::GraphBuilder;
pub use shortest_path::dijkstra;
pub use topo::{topo_sort, topo_sort_unchecked};
pub use traversal::{bfs, connected_components, dfs, ucc};
