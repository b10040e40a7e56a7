//! Unweighted traversals: BFS, DFS and connected-component labeling.

use std::collections::HashMap;

use crate::collections::{Queue, Stack};
use crate::types::{GraphResult, TraversalDirection};

use super::AdjacencyList;

/// Breadth-first hop distances from `start`.
///
/// Every registered vertex appears in the result. Vertices that cannot be
/// reached from `start` map to `None`.
pub fn bfs<'g>(
    graph: &'g AdjacencyList,
    start: &str,
) -> GraphResult<HashMap<&'g str, Option<usize>>> {
    let start = graph.index_of(start)?;
    let mut distances: Vec<Option<usize>> = vec![None; graph.num_vertices()];
    let mut queue = Queue::new();

    distances[start] = Some(0);
    queue.enqueue(start);

    let mut reached = 1usize;
    while let Some(current) = queue.dequeue() {
        let next = distances[current].map_or(0, |d| d + 1);
        for (neighbor, _) in graph.out_edges(current) {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(next);
                queue.enqueue(neighbor);
                reached += 1;
            }
        }
    }

    log::debug!(
        "bfs from {:?}: reached {} of {} vertices",
        graph.id_at(start),
        reached,
        graph.num_vertices()
    );
    Ok(graph.label(distances))
}

/// Iterative depth-first search from `start`.
///
/// Every registered vertex appears in the result; those reachable from
/// `start` map to `true`. Neighbors are pushed in edge insertion order, so
/// the last-inserted edge is explored first.
pub fn dfs<'g>(graph: &'g AdjacencyList, start: &str) -> GraphResult<HashMap<&'g str, bool>> {
    let start = graph.index_of(start)?;
    let mut visited = vec![false; graph.num_vertices()];
    let mut stack = Stack::new();
    stack.push(start);

    let mut reached = 0usize;
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        reached += 1;
        for (neighbor, _) in graph.out_edges(node) {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }

    log::debug!(
        "dfs from {:?}: reached {} of {} vertices",
        graph.id_at(start),
        reached,
        graph.num_vertices()
    );
    Ok(graph.label(visited))
}

/// Component labeling over the stored (directed) edges.
///
/// Vertices are seeded in insertion order and each unvisited seed gets the
/// next id, starting at 0. Only successor edges are followed: for graphs
/// built with [`AdjacencyList::add_undirected_edge`] this yields the
/// undirected connected components, but with one-way edges a vertex lands in
/// the component of the first seed that reaches it. Use
/// [`connected_components`] with [`TraversalDirection::Both`] for weakly
/// connected components of a directed graph.
pub fn ucc(graph: &AdjacencyList) -> HashMap<&str, usize> {
    connected_components(graph, TraversalDirection::Forward)
}

/// Component labeling following edges in `direction`.
///
/// `Forward` is identical to [`ucc`]. `Both` treats every edge as
/// undirected. `Backward` follows edges against their direction.
pub fn connected_components(
    graph: &AdjacencyList,
    direction: TraversalDirection,
) -> HashMap<&str, usize> {
    let n = graph.num_vertices();
    let adjacency = neighbor_lists(graph, direction);
    let mut component: Vec<usize> = vec![0; n];
    let mut visited = vec![false; n];
    let mut queue = Queue::new();
    let mut next_id = 0usize;

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        queue.enqueue(seed);
        while let Some(node) = queue.dequeue() {
            component[node] = next_id;
            for &neighbor in &adjacency[node] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.enqueue(neighbor);
                }
            }
        }
        next_id += 1;
    }

    log::debug!(
        "connected components ({}): {} components over {} vertices",
        direction,
        next_id,
        n
    );
    graph.label(component)
}

/// Per-vertex neighbor lists for `direction`. Forward lists mirror the
/// stored edge maps; the other directions need one pass to invert them.
fn neighbor_lists(graph: &AdjacencyList, direction: TraversalDirection) -> Vec<Vec<usize>> {
    let n = graph.num_vertices();
    let mut lists: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (source, list) in lists.iter_mut().enumerate() {
        if direction != TraversalDirection::Backward {
            list.extend(graph.out_edges(source).map(|(t, _)| t));
        }
    }
    if direction != TraversalDirection::Forward {
        for source in 0..n {
            for (target, _) in graph.out_edges(source) {
                lists[target].push(source);
            }
        }
    }
    lists
}
