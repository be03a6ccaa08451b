//! Graph algorithms: centrality measures and ranking.
//!
//! | Algorithm | Question | Complexity |
//! |-----------|----------|------------|
//! | Betweenness | Bridge between communities? | O(VE) |
//! | PageRank | Random walk equilibrium? | O(E × iter) |
//!
//! Every algorithm is a pure function of the graph and its config: it reads
//! the [`Graph`](crate::Graph), never mutates it, and returns a fresh
//! [`Scores`] map with one entry per node.

use std::collections::HashMap;

/// Centrality algorithms for measuring node importance.
pub mod centrality;

/// PageRank centrality algorithm.
pub mod pagerank;

/// Top-N selection shared by every measure.
pub mod ranking;

/// Node id -> score, one entry per node of the graph it was computed on.
pub type Scores = HashMap<String, f64>;
