//! CLI command implementations.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use crate::format::{EdgeListReader, LoadOptions};
use crate::graph::{topo_sort_unchecked, AdjacencyList};
use crate::types::{Edge, GraphResult, TraversalDirection};

/// Display vertex and edge counts of an edge-list file.
pub fn cmd_info(path: &Path, options: LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let max_out_degree = graph
        .vertices()
        .filter_map(|id| graph.out_degree(id).ok())
        .max()
        .unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "format": options.format,
            "undirected": options.undirected,
            "vertices": graph.num_vertices(),
            "edges": graph.num_edges(),
            "max_out_degree": max_out_degree,
            "negative_weights": graph.has_negative_weights(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Format: {}", options.format);
        println!("Vertices: {}", graph.num_vertices());
        println!("Edges: {}", graph.num_edges());
        println!("Max out-degree: {}", max_out_degree);
        println!("Negative weights: {}", graph.has_negative_weights());
    }
    Ok(())
}

/// Show successors and predecessors of one vertex.
pub fn cmd_neighbors(path: &Path, options: LoadOptions, id: &str, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let successors = graph.successors(id)?;
    let predecessors = graph.predecessors(id)?;

    if json {
        let out: Vec<Edge> = successors
            .iter()
            .filter_map(|&to| graph.edge_weight(id, to).map(|w| Edge::new(id, to, w)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": id,
                "successors": out,
                "predecessors": predecessors,
            }))
            .unwrap_or_default()
        );
    } else {
        println!("Vertex {}", id);
        println!("  Successors ({}):", successors.len());
        for to in &successors {
            println!("    -> {} ({})", to, graph.edge_weight(id, to).unwrap_or_default());
        }
        println!("  Predecessors ({}):", predecessors.len());
        for from in &predecessors {
            println!("    <- {}", from);
        }
    }
    Ok(())
}

/// Breadth-first hop distances from `start`.
pub fn cmd_bfs(path: &Path, options: LoadOptions, start: &str, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let distances = timed("bfs", || graph.bfs(start))?;
    let rows = sorted(&distances);
    let reached = rows.iter().filter(|(_, d)| d.is_some()).count();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = rows
            .iter()
            .map(|(id, d)| (id.to_string(), serde_json::json!(d)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&map).unwrap_or_default()
        );
    } else {
        println!("BFS from {} ({} of {} reached):", start, reached, rows.len());
        for (id, distance) in rows {
            match distance {
                Some(d) => println!("  {}: {}", id, d),
                None => println!("  {}: unreachable", id),
            }
        }
    }
    Ok(())
}

/// Vertices reachable from `start`.
pub fn cmd_dfs(path: &Path, options: LoadOptions, start: &str, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let visited = timed("dfs", || graph.dfs(start))?;
    let reached: Vec<&str> = sorted(&visited)
        .into_iter()
        .filter(|(_, seen)| *seen)
        .map(|(id, _)| id)
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reached).unwrap_or_default()
        );
    } else {
        println!("DFS from {} reached {} vertices:", start, reached.len());
        for id in reached {
            println!("  {}", id);
        }
    }
    Ok(())
}

/// Shortest weighted distances from `start`, optionally restricted to `targets`.
pub fn cmd_dijkstra(
    path: &Path,
    options: LoadOptions,
    start: &str,
    targets: &[String],
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, options)?;
    let distances = timed("dijkstra", || graph.dijkstra(start))?;
    let rows: Vec<(&str, Option<f64>)> = if targets.is_empty() {
        sorted(&distances)
            .into_iter()
            .map(|(id, d)| (id, Some(d)))
            .collect()
    } else {
        targets
            .iter()
            .map(|t| (t.as_str(), distances.get(t.as_str()).copied()))
            .collect()
    };

    if json {
        // serde_json writes non-finite floats as null
        let map: serde_json::Map<String, serde_json::Value> = rows
            .iter()
            .map(|(id, d)| {
                let value = match d {
                    Some(d) => serde_json::json!(d),
                    None => serde_json::json!("unknown vertex"),
                };
                (id.to_string(), value)
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&map).unwrap_or_default()
        );
    } else {
        println!("Shortest distances from {}:", start);
        for (id, distance) in rows {
            match distance {
                Some(d) if d.is_finite() => println!("  {}: {}", id, d),
                Some(_) => println!("  {}: unreachable", id),
                None => println!("  {}: unknown vertex", id),
            }
        }
    }
    Ok(())
}

/// Topological ranks. With `unchecked`, cycles are not reported.
pub fn cmd_topo(path: &Path, options: LoadOptions, unchecked: bool, json: bool) -> GraphResult<()> {
    let graph = load(path, options)?;
    let ranks = if unchecked {
        timed("topo_sort_unchecked", || topo_sort_unchecked(&graph))
    } else {
        timed("topo_sort", || graph.topo_sort())?
    };
    let mut order: Vec<(&str, usize)> = ranks.into_iter().collect();
    order.sort_by_key(|&(_, rank)| rank);

    if json {
        let ids: Vec<&str> = order.iter().map(|&(id, _)| id).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&ids).unwrap_or_default()
        );
    } else {
        println!("Topological order ({} vertices):", order.len());
        for (id, rank) in order {
            println!("  {:>6}  {}", rank, id);
        }
    }
    Ok(())
}

/// Connected-component ids following edges in `direction`.
pub fn cmd_ucc(
    path: &Path,
    options: LoadOptions,
    direction: TraversalDirection,
    json: bool,
) -> GraphResult<()> {
    let graph = load(path, options)?;
    let components = timed("connected_components", || {
        graph.connected_components(direction)
    });

    let mut groups: HashMap<usize, Vec<&str>> = HashMap::new();
    for (id, component) in &components {
        groups.entry(*component).or_default().push(*id);
    }
    let mut groups: Vec<(usize, Vec<&str>)> = groups.into_iter().collect();
    groups.sort_by_key(|(component, _)| *component);
    for (_, members) in &mut groups {
        members.sort_by(|a, b| compare_ids(a, b));
    }

    if json {
        let out: Vec<serde_json::Value> = groups
            .iter()
            .map(|(component, members)| {
                serde_json::json!({"component": component, "size": members.len(), "vertices": members})
            })
            .collect();
        let report = serde_json::json!({"direction": direction, "components": out});
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("{} components ({}):", groups.len(), direction);
        for (component, members) in groups {
            println!("  [{}] size {}: {}", component, members.len(), members.join(" "));
        }
    }
    Ok(())
}

fn load(path: &Path, options: LoadOptions) -> GraphResult<AdjacencyList> {
    timed("load", || EdgeListReader::read_from_file(path, options))
}

fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    log::info!("{} took {:?}", label, start.elapsed());
    out
}

/// Result entries ordered by vertex id, numerically when both ids are numbers.
fn sorted<'g, T: Copy>(map: &HashMap<&'g str, T>) -> Vec<(&'g str, T)> {
    let mut rows: Vec<(&str, T)> = map.iter().map(|(&id, &v)| (id, v)).collect();
    rows.sort_by(|a, b| compare_ids(a.0, b.0));
    rows
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}
