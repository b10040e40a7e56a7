//! Topological ordering by depth-first post-order.

use std::collections::HashMap;

use crate::collections::Stack;
use crate::types::{GraphError, GraphResult};

use super::AdjacencyList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the current DFS path.
    Active,
    Finished,
}

/// Topological rank of every vertex, starting at 0.
///
/// Roots are taken in vertex insertion order, so disconnected parts and
/// multiple sources are all covered. A vertex is pushed onto the finish
/// stack once all of its successors are finished; ranks follow the pop
/// order of that stack. For every edge `u -> v`, `rank[u] < rank[v]`.
///
/// Returns [`GraphError::CycleDetected`] naming the vertex a back edge
/// points to.
pub fn topo_sort(graph: &AdjacencyList) -> GraphResult<HashMap<&str, usize>> {
    let finished = post_order(graph, true)?;
    Ok(rank(graph, finished))
}

/// Same traversal as [`topo_sort`] but cycles are not reported.
///
/// On a cyclic graph every vertex still receives a distinct rank, but some
/// edges will point from a higher rank to a lower one.
pub fn topo_sort_unchecked(graph: &AdjacencyList) -> HashMap<&str, usize> {
    // Without cycle checks post_order cannot fail.
    let finished = post_order(graph, false).unwrap_or_default();
    rank(graph, finished)
}

/// Explicit-stack DFS returning vertices in finish order.
///
/// Each frame holds a vertex and the position of the next edge to look at,
/// which replaces native recursion and keeps deep chains off the call stack.
fn post_order(graph: &AdjacencyList, detect_cycles: bool) -> GraphResult<Stack<usize>> {
    let n = graph.num_vertices();
    let mut marks = vec![Mark::Unvisited; n];
    let mut finished = Stack::with_capacity(n);
    let mut frames: Stack<(usize, usize)> = Stack::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::Active;
        frames.push((root, 0));

        while let Some(frame) = frames.peek_mut() {
            let (node, position) = *frame;
            match graph.out_edge_at(node, position) {
                Some((next, _)) => {
                    frame.1 += 1;
                    match marks[next] {
                        Mark::Unvisited => {
                            marks[next] = Mark::Active;
                            frames.push((next, 0));
                        }
                        Mark::Active if detect_cycles => {
                            return Err(GraphError::CycleDetected(graph.id_at(next).to_string()));
                        }
                        _ => {}
                    }
                }
                None => {
                    frames.pop();
                    marks[node] = Mark::Finished;
                    finished.push(node);
                }
            }
        }
    }

    Ok(finished)
}

fn rank(graph: &AdjacencyList, mut finished: Stack<usize>) -> HashMap<&str, usize> {
    let mut ranks = vec![0usize; graph.num_vertices()];
    let mut position = 0usize;
    while let Some(node) = finished.pop() {
        ranks[node] = position;
        position += 1;
    }
    log::debug!("topological sort ranked {} vertices", position);
    graph.label(ranks)
}
