//! Fluent API for building AdjacencyList instances.

use crate::types::{GraphResult, DEFAULT_WEIGHT};

use super::AdjacencyList;

/// Fluent builder for constructing an [`AdjacencyList`].
///
/// Edges are buffered and applied after every vertex is registered, so the
/// order of `vertex` and `edge` calls does not matter. Every edge endpoint
/// is registered as a vertex.
pub struct GraphBuilder {
    vertices: Vec<String>,
    edges: Vec<(String, String, f64, bool)>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register a vertex.
    pub fn vertex(&mut self, id: &str) -> &mut Self {
        self.vertices.push(id.to_string());
        self
    }

    /// Register several vertices.
    pub fn vertices<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.vertices.extend(ids.into_iter().map(str::to_string));
        self
    }

    /// Add a directed edge `from -> to`.
    pub fn edge(&mut self, from: &str, to: &str, weight: f64) -> &mut Self {
        self.edges
            .push((from.to_string(), to.to_string(), weight, false));
        self
    }

    /// Add an undirected edge between `a` and `b`.
    pub fn undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> &mut Self {
        self.edges.push((a.to_string(), b.to_string(), weight, true));
        self
    }

    /// Add a chain of directed edges `ids[0] -> ids[1] -> ...` of unit weight.
    pub fn path(&mut self, ids: &[&str]) -> &mut Self {
        for pair in ids.windows(2) {
            if let [from, to] = pair {
                self.edge(from, to, DEFAULT_WEIGHT);
            }
        }
        self
    }

    /// Build the final graph. Fails on a non-finite weight.
    pub fn build(&self) -> GraphResult<AdjacencyList> {
        let mut graph = AdjacencyList::with_capacity(self.vertices.len());
        for id in &self.vertices {
            graph.add_vertex(id);
        }
        for (from, to, _, _) in &self.edges {
            graph.add_vertex(from);
            graph.add_vertex(to);
        }
        for (from, to, weight, undirected) in &self.edges {
            if *undirected {
                graph.add_undirected_edge(from, to, *weight)?;
            } else {
                graph.add_directed_edge(from, to, *weight)?;
            }
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
