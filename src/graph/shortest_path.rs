//! Single-source shortest paths (Dijkstra) over non-negative weights.

use std::collections::HashMap;

use crate::collections::MinHeap;
use crate::types::{GraphError, GraphResult, UNREACHABLE};

use super::AdjacencyList;

/// Shortest weighted distance from `start` to every registered vertex.
///
/// Vertices with no path from `start` map to [`UNREACHABLE`] (positive
/// infinity). The heap has no decrease-key: a vertex may be pushed several
/// times and entries whose distance is worse than the best known one are
/// dropped when popped.
///
/// Returns [`GraphError::NegativeWeight`] as soon as an edge with a negative
/// weight is relaxed.
pub fn dijkstra<'g>(
    graph: &'g AdjacencyList,
    start: &str,
) -> GraphResult<HashMap<&'g str, f64>> {
    let start = graph.index_of(start)?;
    let mut dist = vec![UNREACHABLE; graph.num_vertices()];
    let mut heap = MinHeap::new();

    dist[start] = 0.0;
    heap.push(start, 0.0);

    let mut pops = 0usize;
    let mut stale = 0usize;
    while let Some(entry) = heap.pop() {
        pops += 1;
        let u = entry.item;
        if entry.dist > dist[u] {
            stale += 1;
            continue;
        }

        for (v, weight) in graph.out_edges(u) {
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: graph.id_at(u).to_string(),
                    to: graph.id_at(v).to_string(),
                    weight,
                });
            }
            let candidate = dist[u] + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(v, candidate);
            }
        }
    }

    log::debug!(
        "dijkstra from {:?}: {} heap pops, {} stale entries discarded",
        graph.id_at(start),
        pops,
        stale
    );
    Ok(graph.label(dist))
}
