//! 100K vertex performance demo.

use std::time::Instant;

use adjgraph::*;

fn main() -> GraphResult<()> {
    let vertex_count = 100_000;
    let edges_per_vertex = 3;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let ids: Vec<String> = (0..vertex_count).map(|i| i.to_string()).collect();
    let mut graph = AdjacencyList::with_capacity(vertex_count);
    for id in &ids {
        graph.add_vertex(id);
    }
    println!("  Vertices registered in {:?}", start.elapsed());

    // Deterministic pseudo-random edges
    let start = Instant::now();
    for i in 0..vertex_count {
        for j in 1..=edges_per_vertex {
            let target = (i * 31 + j * 7919) % vertex_count;
            let weight = ((i + j) % 10 + 1) as f64;
            graph.add_directed_edge(&ids[i], &ids[target], weight)?;
        }
    }
    println!(
        "  {} edges added in {:?}",
        graph.num_edges(),
        start.elapsed()
    );

    let start = Instant::now();
    let hops = graph.bfs("0")?;
    let reached = hops.values().filter(|h| h.is_some()).count();
    println!("BFS reached {} vertices in {:?}", reached, start.elapsed());

    let start = Instant::now();
    let dist = graph.dijkstra("0")?;
    let farthest = dist
        .values()
        .copied()
        .filter(|d| d.is_finite())
        .fold(0.0f64, f64::max);
    println!(
        "Dijkstra finished in {:?}, farthest reachable distance {}",
        start.elapsed(),
        farthest
    );

    let start = Instant::now();
    let components = graph.connected_components(TraversalDirection::Both);
    let count = components.values().copied().max().map_or(0, |m| m + 1);
    println!(
        "{} weak components found in {:?}",
        count,
        start.elapsed()
    );

    Ok(())
}
