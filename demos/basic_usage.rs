//! Basic build -> query flow.

use adjgraph::*;

fn main() -> GraphResult<()> {
    // Build a small road network
    let mut builder = GraphBuilder::new();
    builder
        .undirected_edge("home", "bakery", 2.0)
        .undirected_edge("bakery", "office", 4.0)
        .undirected_edge("home", "park", 1.0)
        .undirected_edge("park", "office", 7.0)
        .vertex("cabin");
    let graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    // Hops vs. weighted distance
    let hops = graph.bfs("home")?;
    let dist = graph.dijkstra("home")?;
    for id in graph.vertices() {
        match hops[id] {
            Some(h) => println!("  {}: {} hops, distance {}", id, h, dist[id]),
            None => println!("  {}: unreachable", id),
        }
    }

    // Components
    let components = graph.ucc();
    println!("cabin is in component {}", components["cabin"]);
    println!("office is in component {}", components["office"]);

    // A build pipeline as a DAG
    let mut pipeline = GraphBuilder::new();
    pipeline
        .path(&["fetch", "compile", "link", "package"])
        .edge("fetch", "lint", 1.0)
        .edge("lint", "package", 1.0);
    let pipeline = pipeline.build()?;

    let ranks = pipeline.topo_sort()?;
    let mut order: Vec<(&str, usize)> = ranks.into_iter().collect();
    order.sort_by_key(|&(_, rank)| rank);
    println!("\nBuild order:");
    for (step, rank) in order {
        println!("  {}. {}", rank, step);
    }

    Ok(())
}
