//! Integration tests for centrality algorithms.
//!
//! These tests run both measures on small, hand-checkable graph structures
//! and on the edge-list reader's output.

use netrank_core::algo::centrality::{
    betweenness_centrality, pagerank, pagerank_with_report, top_n_betweenness,
    BetweennessConfig, PageRankConfig,
};
use netrank_core::algo::pagerank::top_n_centrality_nodes;
use netrank_core::formats::{EdgeList, EdgeListConfig};
use netrank_core::{Error, Graph, GraphKind};

/// Create a small social network for testing.
///
/// Structure:
/// ```text
///        Alice
///       /  |  \
///      v   v   v
///    Bob  Carol Dave
///      \   |   /
///       v  v  v
///         Eve
/// ```
fn social_network(kind: GraphKind) -> Graph {
    Graph::from_edges(
        kind,
        [
            ("Alice", "Bob"),
            ("Alice", "Carol"),
            ("Alice", "Dave"),
            ("Bob", "Eve"),
            ("Carol", "Eve"),
            ("Dave", "Eve"),
        ],
    )
    .unwrap()
}

/// Two triangles joined through a single bridge node.
///
/// ```text
///  a1 - a2        b1 - b2
///   \  /          \  /
///    a3 -- hub -- b3
/// ```
fn barbell() -> Graph {
    Graph::from_edges(
        GraphKind::Undirected,
        [
            ("a1", "a2"),
            ("a2", "a3"),
            ("a3", "a1"),
            ("b1", "b2"),
            ("b2", "b3"),
            ("b3", "b1"),
            ("a3", "hub"),
            ("hub", "b3"),
        ],
    )
    .unwrap()
}

/// Create a long chain graph.
fn chain_graph(kind: GraphKind, length: usize) -> Graph {
    let mut g = Graph::new(kind);
    for i in 0..length {
        g.add_edge(format!("N{i}"), format!("N{}", i + 1)).unwrap();
    }
    g
}

// ============================================================================
// Graph Store Tests
// ============================================================================

#[test]
fn test_round_trip_adjacency() {
    let g = Graph::from_edges(GraphKind::Directed, [("a", "b"), ("b", "c")]).unwrap();
    assert_eq!(g.out_adjacency()["a"], vec!["b".to_string()]);
    assert_eq!(g.in_adjacency()["c"], vec!["b".to_string()]);
}

#[test]
fn test_algorithms_leave_graph_untouched() {
    let g = barbell();
    let before = (g.node_count(), g.edge_count(), g.out_adjacency().clone());

    let _ = betweenness_centrality(&g, BetweennessConfig::default());
    let _ = pagerank(&g, PageRankConfig::default()).unwrap();

    assert_eq!(before, (g.node_count(), g.edge_count(), g.out_adjacency().clone()));
}

// ============================================================================
// Betweenness Centrality Tests
// ============================================================================

#[test]
fn test_betweenness_chain() {
    // N0 -> N1 -> N2 -> N3 -> N4
    let g = chain_graph(GraphKind::Directed, 4);
    let scores = betweenness_centrality(&g, BetweennessConfig::without_endpoints());

    assert_eq!(scores["N0"], 0.0);
    assert_eq!(scores["N4"], 0.0);
    // Interior node i sits on i * (4 - i) source/target pairs.
    assert_eq!(scores["N1"], 3.0);
    assert_eq!(scores["N2"], 4.0);
    assert_eq!(scores["N3"], 3.0);
}

#[test]
fn test_betweenness_social_network() {
    let g = social_network(GraphKind::Directed);
    let scores = betweenness_centrality(&g, BetweennessConfig::without_endpoints());

    // Alice -> Eve has three equal paths, one through each middle node.
    for middle in ["Bob", "Carol", "Dave"] {
        assert!((scores[middle] - 1.0 / 3.0).abs() < 1e-12, "{middle}");
    }
    assert_eq!(scores["Alice"], 0.0);
    assert_eq!(scores["Eve"], 0.0);
}

#[test]
fn test_betweenness_bridge_dominates() {
    let g = barbell();
    let scores = betweenness_centrality(&g, BetweennessConfig::without_endpoints());

    let top = top_n_betweenness(&g, &scores, 3, false).unwrap();
    assert_eq!(top[0].node, "hub");
    // The two attachment points tie; ascending id breaks the tie.
    assert_eq!(top[1].node, "a3");
    assert_eq!(top[2].node, "b3");
    assert_eq!(scores["a1"], 0.0);
}

#[test]
fn test_betweenness_is_repeatable() {
    let g = barbell();
    let first = betweenness_centrality(&g, BetweennessConfig::default());
    let second = betweenness_centrality(&g, BetweennessConfig::default());
    assert_eq!(first, second);
}

// ============================================================================
// PageRank Tests
// ============================================================================

#[test]
fn test_pagerank_directed_sink_absorbs_then_drains() {
    // Eve has no out-links: everything eventually drains out of the system.
    let g = social_network(GraphKind::Directed);
    let report = pagerank_with_report(&g, PageRankConfig::default()).unwrap();

    assert!(report.converged);
    let total: f64 = report.scores.values().sum();
    assert!(total < 1.0);
    assert!(report.scores.values().all(|s| s.is_finite() && *s >= 0.0));
}

#[test]
fn test_pagerank_directed_cycle_sums_to_one() {
    let mut g = chain_graph(GraphKind::Directed, 5);
    g.add_edge("N5", "N0").unwrap();
    g.add_edge("N0", "N3").unwrap();

    let scores = pagerank(&g, PageRankConfig::default()).unwrap();
    let total: f64 = scores.values().sum();
    assert!((total - 1.0).abs() < 1e-9, "sum = {total}");
}

#[test]
fn test_pagerank_undirected_hub_ranks_first() {
    let g = social_network(GraphKind::Undirected);
    let config = PageRankConfig {
        max_iterations: 20,
        ..Default::default()
    };
    let scores = pagerank(&g, config).unwrap();

    let top = top_n_centrality_nodes(&g, &scores, 2, true).unwrap();
    let names: Vec<_> = top.iter().map(|r| r.node.as_str()).collect();
    // Alice and Eve each have three neighbours of degree two.
    assert_eq!(names, ["Alice", "Eve"]);
    assert_eq!(top[0].score, top[1].score);
}

#[test]
fn test_top_n_rejects_bad_sizes() {
    let g = barbell();
    let scores = pagerank(&g, PageRankConfig::default()).unwrap();
    assert!(matches!(
        top_n_centrality_nodes(&g, &scores, 0, false),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        top_n_centrality_nodes(&g, &scores, g.node_count() + 1, false),
        Err(Error::InvalidArgument(_))
    ));
    assert!(top_n_centrality_nodes(&g, &scores, g.node_count(), false).is_ok());
}

// ============================================================================
// Edge List Tests
// ============================================================================

#[test]
fn test_edge_list_to_rankings() {
    let input = "\
# barbell
a1 a2
a2 a3
a3 a1
b1 b2
b2 b3
b3 b1
a3 hub
hub b3
";
    let g = EdgeList::read(
        input.as_bytes(),
        GraphKind::Undirected,
        EdgeListConfig::default(),
    )
    .unwrap();

    let expected = barbell();
    assert_eq!(g.node_count(), expected.node_count());
    assert_eq!(
        betweenness_centrality(&g, BetweennessConfig::default()),
        betweenness_centrality(&expected, BetweennessConfig::default())
    );
}
