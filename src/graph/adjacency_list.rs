//! Core graph structure: vertex registry plus per-vertex outgoing-edge maps.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::types::{Edge, GraphError, GraphResult, TraversalDirection};

use super::{shortest_path, topo, traversal};

/// Outgoing edges of one vertex, keyed by target vertex index.
#[derive(Debug, Clone, Default)]
pub(crate) struct Vertex {
    pub(crate) edges: IndexMap<usize, f64>,
}

/// A weighted graph stored as an adjacency list.
///
/// Vertices are identified by strings and are never removed, so the
/// insertion position of a vertex is a stable internal index. Both the
/// vertex registry and every edge map keep insertion order, which makes
/// every traversal deterministic for a given sequence of insertions.
///
/// Only forward adjacency is stored: [`successors`](Self::successors) costs
/// O(degree) while [`predecessors`](Self::predecessors) scans every vertex.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    vertices: IndexMap<String, Vertex>,
}

impl AdjacencyList {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(capacity),
        }
    }

    /// Register a vertex. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, id: &str) -> bool {
        if self.vertices.contains_key(id) {
            return false;
        }
        self.vertices.insert(id.to_string(), Vertex::default());
        true
    }

    /// Insert or overwrite the edge `from -> to`.
    ///
    /// `from` must already be registered; otherwise nothing is written and
    /// [`GraphError::VertexNotFound`] is returned. An unregistered `to` is
    /// registered on the spot, so the store never holds a dangling edge.
    pub fn add_directed_edge(&mut self, from: &str, to: &str, weight: f64) -> GraphResult<()> {
        check_weight(from, to, weight)?;
        let source = self.index_of(from)?;
        let target = self.intern(to);
        self.vertices[source].edges.insert(target, weight);
        Ok(())
    }

    /// Insert `a -> b` and `b -> a` with the same weight.
    ///
    /// Same registration rules as two [`add_directed_edge`](Self::add_directed_edge)
    /// calls: `a` must be registered and an unregistered `b` is registered.
    /// `a` is checked before anything is written, so a failed call leaves the
    /// store unchanged.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> GraphResult<()> {
        check_weight(a, b, weight)?;
        let ia = self.index_of(a)?;
        let ib = self.intern(b);
        self.vertices[ia].edges.insert(ib, weight);
        self.vertices[ib].edges.insert(ia, weight);
        Ok(())
    }

    /// Number of registered vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges. An undirected edge counts twice.
    pub fn num_edges(&self) -> usize {
        self.vertices.values().map(|v| v.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Registered vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// Every stored directed edge, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.vertices.iter().flat_map(move |(from, vertex)| {
            vertex
                .edges
                .iter()
                .map(move |(&to, &weight)| Edge::new(from, self.id_at(to), weight))
        })
    }

    /// Weight of `from -> to`, if that edge exists.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        let target = self.vertices.get_index_of(to)?;
        self.vertices.get(from)?.edges.get(&target).copied()
    }

    /// Number of outgoing edges of `id`.
    pub fn out_degree(&self, id: &str) -> GraphResult<usize> {
        let index = self.index_of(id)?;
        Ok(self.vertices[index].edges.len())
    }

    /// Targets of the edges leaving `id`, in insertion order. O(degree).
    pub fn successors(&self, id: &str) -> GraphResult<Vec<&str>> {
        let index = self.index_of(id)?;
        Ok(self.out_edges(index).map(|(t, _)| self.id_at(t)).collect())
    }

    /// Same as [`successors`](Self::successors); for graphs built with
    /// undirected edges these are the neighbors.
    pub fn neighbors(&self, id: &str) -> GraphResult<Vec<&str>> {
        self.successors(id)
    }

    /// Sources of the edges entering `id`.
    ///
    /// There is no reverse index, so this scans every vertex's edge map.
    pub fn predecessors(&self, id: &str) -> GraphResult<Vec<&str>> {
        let target = self.index_of(id)?;
        Ok(self
            .vertices
            .iter()
            .filter(|(_, v)| v.edges.contains_key(&target))
            .map(|(source, _)| source.as_str())
            .collect())
    }

    /// Whether any stored edge has a weight below zero.
    pub fn has_negative_weights(&self) -> bool {
        self.vertices
            .values()
            .any(|v| v.edges.values().any(|&w| w < 0.0))
    }

    /// Hop distances from `start`. See [`traversal::bfs`].
    pub fn bfs(&self, start: &str) -> GraphResult<HashMap<&str, Option<usize>>> {
        traversal::bfs(self, start)
    }

    /// Vertices reachable from `start`. See [`traversal::dfs`].
    pub fn dfs(&self, start: &str) -> GraphResult<HashMap<&str, bool>> {
        traversal::dfs(self, start)
    }

    /// Shortest weighted distances from `start`. See [`shortest_path::dijkstra`].
    pub fn dijkstra(&self, start: &str) -> GraphResult<HashMap<&str, f64>> {
        shortest_path::dijkstra(self, start)
    }

    /// Topological ranks. See [`topo::topo_sort`].
    pub fn topo_sort(&self) -> GraphResult<HashMap<&str, usize>> {
        topo::topo_sort(self)
    }

    /// Component ids over stored edges. See [`traversal::ucc`].
    pub fn ucc(&self) -> HashMap<&str, usize> {
        traversal::ucc(self)
    }

    /// Component ids following edges in `direction`.
    /// See [`traversal::connected_components`].
    pub fn connected_components(&self, direction: TraversalDirection) -> HashMap<&str, usize> {
        traversal::connected_components(self, direction)
    }

    pub(crate) fn index_of(&self, id: &str) -> GraphResult<usize> {
        self.vertices
            .get_index_of(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.to_string()))
    }

    pub(crate) fn id_at(&self, index: usize) -> &str {
        self.vertices
            .get_index(index)
            .map_or("", |(id, _)| id.as_str())
    }

    /// Outgoing `(target index, weight)` pairs of the vertex at `index`.
    pub(crate) fn out_edges(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.vertices
            .get_index(index)
            .into_iter()
            .flat_map(|(_, v)| v.edges.iter().map(|(&t, &w)| (t, w)))
    }

    /// The `position`-th outgoing edge of the vertex at `index`.
    pub(crate) fn out_edge_at(&self, index: usize, position: usize) -> Option<(usize, f64)> {
        let (_, vertex) = self.vertices.get_index(index)?;
        vertex.edges.get_index(position).map(|(&t, &w)| (t, w))
    }

    /// Zip per-index algorithm state with vertex ids into a result map.
    pub(crate) fn label<T>(&self, values: Vec<T>) -> HashMap<&str, T> {
        self.vertices().zip(values).collect()
    }

    fn intern(&mut self, id: &str) -> usize {
        match self.vertices.get_index_of(id) {
            Some(index) => index,
            None => {
                log::trace!("auto-registering edge target {:?}", id);
                self.vertices.insert_full(id.to_string(), Vertex::default()).0
            }
        }
    }
}

fn check_weight(from: &str, to: &str, weight: f64) -> GraphResult<()> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}
