//! Centrality Demo
//!
//! Ranks a small influence network by PageRank and by betweenness.
//!
//! ```bash
//! cargo run -p netrank-core --example pagerank_demo
//! ```

use netrank_core::algo::centrality::{betweenness_centrality, top_n_betweenness, BetweennessConfig};
use netrank_core::algo::pagerank::{pagerank_with_report, top_n_centrality_nodes, PageRankConfig};
use netrank_core::{Graph, GraphKind};

fn main() -> netrank_core::Result<()> {
    println!("Centrality Demo");
    println!("===============\n");

    let edges = [
        ("Einstein", "Feynman"),
        ("Einstein", "Bohr"),
        ("Bohr", "Heisenberg"),
        ("Bohr", "Pauli"),
        ("Feynman", "Weinberg"),
        ("Heisenberg", "Pauli"),
        ("Pauli", "Feynman"),
        ("Newton", "Einstein"),
        ("Maxwell", "Einstein"),
        ("Planck", "Einstein"),
        ("Planck", "Bohr"),
        ("Weinberg", "Planck"),
    ];

    println!("Edges: influenced-by");
    for (from, to) in &edges {
        println!("  {from} -> {to}");
    }

    let graph = Graph::from_edges(GraphKind::Directed, edges)?;
    println!("\nGraph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    let report = pagerank_with_report(&graph, PageRankConfig::default())?;
    println!(
        "\nPageRank ({} iterations, converged: {})",
        report.iterations, report.converged
    );
    println!("Scientist        | Score");
    println!("-----------------|--------");
    for ranked in top_n_centrality_nodes(&graph, &report.scores, 5, true)? {
        println!("{:16} | {:.4}", ranked.node, ranked.score.unwrap_or_default());
    }

    let betweenness = betweenness_centrality(&graph, BetweennessConfig::without_endpoints());
    println!("\nBetweenness");
    println!("Scientist        | Score");
    println!("-----------------|--------");
    for ranked in top_n_betweenness(&graph, &betweenness, 5, true)? {
        println!("{:16} | {:.4}", ranked.node, ranked.score.unwrap_or_default());
    }

    Ok(())
}
