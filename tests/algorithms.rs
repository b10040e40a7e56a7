//! Algorithm tests: BFS, DFS, Dijkstra, topological sort and components.

use std::collections::HashMap;

use adjgraph::graph::{self, AdjacencyList, GraphBuilder};
use adjgraph::types::{GraphError, TraversalDirection, UNREACHABLE};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A -> B -> C -> D, unit weights.
fn build_chain_abcd() -> AdjacencyList {
    let mut graph = AdjacencyList::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.add_directed_edge("A", "B", 1.0).unwrap();
    graph.add_directed_edge("B", "C", 1.0).unwrap();
    graph.add_directed_edge("C", "D", 1.0).unwrap();
    graph
}

/// Eight-vertex weighted digraph with a shortcut through vertex 2.
fn build_weighted_eight() -> AdjacencyList {
    let mut builder = GraphBuilder::new();
    builder
        .edge("1", "2", 2.0)
        .edge("2", "3", 1.0)
        .edge("1", "4", 6.0)
        .edge("4", "3", 2.0)
        .edge("3", "5", 1.0)
        .edge("5", "6", 1.0)
        .edge("6", "7", 1.0)
        .edge("7", "8", 1.0);
    builder.build().unwrap()
}

// ==================== BFS ====================

#[test]
fn test_bfs_chain() {
    init_logging();
    let graph = build_chain_abcd();
    let dist = graph.bfs("A").unwrap();
    let expected: HashMap<&str, Option<usize>> =
        [("A", Some(0)), ("B", Some(1)), ("C", Some(2)), ("D", Some(3))]
            .into_iter()
            .collect();
    assert_eq!(dist, expected);
}

#[test]
fn test_bfs_unreachable_is_none() {
    let graph = build_chain_abcd();
    let dist = graph.bfs("C").unwrap();
    assert_eq!(dist["A"], None);
    assert_eq!(dist["B"], None);
    assert_eq!(dist["C"], Some(0));
    assert_eq!(dist["D"], Some(1));
}

#[test]
fn test_bfs_takes_fewest_hops() {
    let mut builder = GraphBuilder::new();
    builder
        .edge("s", "a", 1.0)
        .edge("a", "b", 1.0)
        .edge("b", "t", 1.0)
        .edge("s", "t", 100.0);
    let graph = builder.build().unwrap();
    assert_eq!(graph.bfs("s").unwrap()["t"], Some(1));
}

#[test]
fn test_bfs_unknown_start() {
    let graph = build_chain_abcd();
    let err = graph.bfs("Z").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(ref id) if id == "Z"));
}

// ==================== DFS ====================

#[test]
fn test_dfs_visits_reachable() {
    let graph = build_chain_abcd();
    let visited = graph.dfs("A").unwrap();
    for v in ["A", "B", "C", "D"] {
        assert!(visited[v], "expected {} to be visited", v);
    }
}

#[test]
fn test_dfs_marks_unreachable_false() {
    let mut graph = build_chain_abcd();
    graph.add_vertex("island");
    let visited = graph.dfs("B").unwrap();
    assert_eq!(visited.len(), 5);
    assert!(!visited["A"]);
    assert!(!visited["island"]);
    assert!(visited["B"] && visited["C"] && visited["D"]);
}

#[test]
fn test_dfs_handles_cycles() {
    let mut builder = GraphBuilder::new();
    builder
        .edge("A", "B", 1.0)
        .edge("B", "C", 1.0)
        .edge("C", "A", 1.0)
        .edge("C", "D", 1.0);
    let graph = builder.build().unwrap();
    let visited = graph.dfs("B").unwrap();
    assert!(visited.values().all(|&v| v));
}

#[test]
fn test_dfs_unknown_start() {
    let graph = build_chain_abcd();
    assert!(matches!(graph.dfs(""), Err(GraphError::VertexNotFound(_))));
}

// ==================== Dijkstra ====================

#[test]
fn test_dijkstra_weighted_eight() {
    init_logging();
    let graph = build_weighted_eight();
    let dist = graph.dijkstra("1").unwrap();
    let expected = [
        ("1", 0.0),
        ("2", 2.0),
        ("3", 3.0),
        ("4", 6.0),
        ("5", 4.0),
        ("6", 5.0),
        ("7", 6.0),
        ("8", 7.0),
    ];
    assert_eq!(dist.len(), expected.len());
    for (v, d) in expected {
        assert_eq!(dist[v], d, "distance to {}", v);
    }
}

#[test]
fn test_dijkstra_isolated_vertex() {
    let mut graph = AdjacencyList::new();
    graph.add_vertex("solo");
    let dist = graph.dijkstra("solo").unwrap();
    assert_eq!(dist.len(), 1);
    assert_eq!(dist["solo"], 0.0);
}

#[test]
fn test_dijkstra_unreachable_is_infinite() {
    let graph = build_weighted_eight();
    let dist = graph.dijkstra("5").unwrap();
    assert_eq!(dist["1"], UNREACHABLE);
    assert!(dist["4"].is_infinite());
    assert_eq!(dist["8"], 3.0);
}

#[test]
fn test_dijkstra_discards_stale_entries() {
    // "t" is pushed at 10 first, then improved to 3 through "a".
    let mut builder = GraphBuilder::new();
    builder
        .edge("s", "t", 10.0)
        .edge("s", "a", 1.0)
        .edge("a", "t", 2.0)
        .edge("t", "u", 1.0);
    let graph = builder.build().unwrap();
    let dist = graph.dijkstra("s").unwrap();
    assert_eq!(dist["t"], 3.0);
    assert_eq!(dist["u"], 4.0);
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let mut builder = GraphBuilder::new();
    builder.edge("a", "b", 0.0).edge("b", "c", 0.0);
    let graph = builder.build().unwrap();
    let dist = graph.dijkstra("a").unwrap();
    assert_eq!(dist["c"], 0.0);
}

#[test]
fn test_dijkstra_rejects_reachable_negative_weight() {
    let mut builder = GraphBuilder::new();
    builder.edge("A", "B", 1.0).edge("B", "C", -5.0);
    let graph = builder.build().unwrap();
    match graph.dijkstra("A") {
        Err(GraphError::NegativeWeight { from, to, weight }) => {
            assert_eq!(from, "B");
            assert_eq!(to, "C");
            assert_eq!(weight, -5.0);
        }
        other => panic!("expected NegativeWeight, got {:?}", other),
    }
}

#[test]
fn test_dijkstra_ignores_unreachable_negative_weight() {
    let mut builder = GraphBuilder::new();
    builder.edge("A", "B", 1.0).edge("X", "Y", -5.0);
    let graph = builder.build().unwrap();
    let dist = graph.dijkstra("A").unwrap();
    assert_eq!(dist["B"], 1.0);
    assert_eq!(dist["Y"], UNREACHABLE);
}

#[test]
fn test_dijkstra_unknown_start() {
    let graph = build_weighted_eight();
    assert!(matches!(
        graph::dijkstra(&graph, "99"),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_dijkstra_undirected() {
    let mut graph = AdjacencyList::new();
    for v in ["a", "b", "c"] {
        graph.add_vertex(v);
    }
    graph.add_undirected_edge("a", "b", 2.0).unwrap();
    graph.add_undirected_edge("b", "c", 3.0).unwrap();
    let dist = graph.dijkstra("c").unwrap();
    assert_eq!(dist["a"], 5.0);
}

// ==================== Topological sort ====================

#[test]
fn test_topo_sort_chain() {
    let graph = build_chain_abcd();
    let rank = graph.topo_sort().unwrap();
    assert_eq!(rank["A"], 0);
    assert_eq!(rank["B"], 1);
    assert_eq!(rank["C"], 2);
    assert_eq!(rank["D"], 3);
}

#[test]
fn test_topo_sort_respects_every_edge() {
    // Two sources, shared sink, and a disconnected pair.
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["shirt", "tie", "jacket", "belt", "pants", "shoes", "socks", "watch"])
        .edge("shirt", "tie", 1.0)
        .edge("tie", "jacket", 1.0)
        .edge("shirt", "belt", 1.0)
        .edge("belt", "jacket", 1.0)
        .edge("pants", "belt", 1.0)
        .edge("pants", "shoes", 1.0)
        .edge("socks", "shoes", 1.0);
    let graph = builder.build().unwrap();
    let rank = graph.topo_sort().unwrap();

    assert_eq!(rank.len(), graph.num_vertices());
    for edge in graph.edges() {
        assert!(
            rank[edge.from] < rank[edge.to],
            "{} -> {} out of order",
            edge.from,
            edge.to
        );
    }
    let mut ranks: Vec<usize> = rank.values().copied().collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (0..graph.num_vertices()).collect::<Vec<_>>());
}

#[test]
fn test_topo_sort_detects_cycle() {
    let mut builder = GraphBuilder::new();
    builder
        .edge("A", "B", 1.0)
        .edge("B", "C", 1.0)
        .edge("C", "A", 1.0);
    let graph = builder.build().unwrap();
    let err = graph.topo_sort().unwrap_err();
    assert!(matches!(err, GraphError::CycleDetected(ref id) if id == "A"));
}

#[test]
fn test_topo_sort_detects_self_loop() {
    let mut graph = AdjacencyList::new();
    graph.add_vertex("x");
    graph.add_directed_edge("x", "x", 1.0).unwrap();
    assert!(matches!(
        graph.topo_sort(),
        Err(GraphError::CycleDetected(_))
    ));
}

#[test]
fn test_topo_sort_unchecked_on_cycle_is_not_a_valid_order() {
    let mut builder = GraphBuilder::new();
    builder
        .edge("A", "B", 1.0)
        .edge("B", "C", 1.0)
        .edge("C", "A", 1.0);
    let graph = builder.build().unwrap();
    let rank = graph::topo_sort_unchecked(&graph);

    assert_eq!(rank.len(), 3);
    assert_eq!(rank["A"], 0);
    assert_eq!(rank["B"], 1);
    assert_eq!(rank["C"], 2);
    let violations = graph
        .edges()
        .filter(|e| rank[e.from] >= rank[e.to])
        .count();
    assert!(violations > 0);
}

#[test]
fn test_topo_sort_unchecked_matches_checked_on_dag() {
    let graph = build_weighted_eight();
    assert_eq!(
        graph.topo_sort().unwrap(),
        graph::topo_sort_unchecked(&graph)
    );
}

#[test]
fn test_topo_sort_deep_chain_does_not_overflow() {
    let ids: Vec<String> = (0..200_000).map(|i| i.to_string()).collect();
    let mut graph = AdjacencyList::with_capacity(ids.len());
    for id in &ids {
        graph.add_vertex(id);
    }
    for pair in ids.windows(2) {
        graph.add_directed_edge(&pair[0], &pair[1], 1.0).unwrap();
    }
    let rank = graph.topo_sort().unwrap();
    assert_eq!(rank["0"], 0);
    assert_eq!(rank["199999"], 199_999);
}

#[test]
fn test_topo_sort_empty_graph() {
    let graph = AdjacencyList::new();
    assert!(graph.topo_sort().unwrap().is_empty());
}

// ==================== Connected components ====================

#[test]
fn test_ucc_disjoint_pairs() {
    let mut graph = AdjacencyList::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    graph.add_undirected_edge("A", "B", 1.0).unwrap();
    graph.add_undirected_edge("C", "D", 1.0).unwrap();

    let ucc = graph.ucc();
    assert_eq!(ucc["A"], ucc["B"]);
    assert_eq!(ucc["C"], ucc["D"]);
    assert_ne!(ucc["A"], ucc["C"]);
    assert_ne!(ucc["E"], ucc["A"]);
    assert_ne!(ucc["E"], ucc["C"]);
    // Ids follow seed order.
    assert_eq!((ucc["A"], ucc["C"], ucc["E"]), (0, 1, 2));
}

#[test]
fn test_ucc_follows_stored_direction_only() {
    // A -> B <- C: forward labeling splits C off, weak labeling does not.
    let mut builder = GraphBuilder::new();
    builder.edge("A", "B", 1.0).edge("C", "B", 1.0);
    let graph = builder.build().unwrap();

    let forward = graph::ucc(&graph);
    assert_eq!(forward["A"], forward["B"]);
    assert_ne!(forward["A"], forward["C"]);

    let weak = graph.connected_components(TraversalDirection::Both);
    assert_eq!(weak["A"], weak["B"]);
    assert_eq!(weak["A"], weak["C"]);
}

#[test]
fn test_components_backward() {
    let mut builder = GraphBuilder::new();
    builder.edge("A", "B", 1.0).edge("C", "B", 1.0);
    let graph = builder.build().unwrap();
    let back = graph::connected_components(&graph, TraversalDirection::Backward);
    // Seed A has no predecessors; seed B pulls in C but A is already taken.
    assert_eq!(back["A"], 0);
    assert_eq!(back["B"], 1);
    assert_eq!(back["C"], 1);
}

#[test]
fn test_ucc_empty_graph() {
    let graph = AdjacencyList::new();
    assert!(graph.ucc().is_empty());
}

// ==================== Idempotence ====================

#[test]
fn test_algorithms_are_repeatable() {
    let graph = build_weighted_eight();
    assert_eq!(graph.bfs("1").unwrap(), graph.bfs("1").unwrap());
    assert_eq!(graph.dfs("1").unwrap(), graph.dfs("1").unwrap());
    assert_eq!(graph.dijkstra("1").unwrap(), graph.dijkstra("1").unwrap());
    assert_eq!(graph.topo_sort().unwrap(), graph.topo_sort().unwrap());
    assert_eq!(graph.ucc(), graph.ucc());
}
