//! Centrality algorithms for measuring node importance.
//!
//! # Overview
//!
//! | Algorithm | Question Answered | Complexity |
//! |-----------|-------------------|------------|
//! | Betweenness | How often on shortest paths? | O(VE) |
//! | PageRank | Where do random walks end? | O(E × iterations) |
//!
//! PageRank lives in [`crate::algo::pagerank`]; it is re-exported here so
//! both measures can be imported from one place.
//!
//! # References
//!
//! - Freeman (1977). "A set of measures of centrality based on betweenness"
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Page et al. (1999). "The PageRank citation ranking"

mod betweenness;

pub use super::pagerank::{pagerank, pagerank_with_report, PageRankConfig, PageRankReport};
pub use betweenness::{betweenness_centrality, top_n_betweenness, BetweennessConfig};
