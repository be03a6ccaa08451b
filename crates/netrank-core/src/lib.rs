// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

//! Centrality analytics over string-identified graphs.
//!
//! - [`Graph`] - append-only directed or undirected adjacency store
//! - [`algo::centrality`] - betweenness centrality (Brandes)
//! - [`algo::pagerank`] - `PageRank` by power iteration
//! - [`algo::ranking`] - top-N selection shared by both measures
//! - [`formats`] - delimited edge-list reader
//!
//! Algorithms never mutate the graph; each call returns a fresh
//! [`algo::Scores`] map with one entry per node.
//!
//! # Example
//!
//! ```rust
//! use netrank_core::{Graph, GraphKind};
//! use netrank_core::algo::centrality::{betweenness_centrality, BetweennessConfig};
//! use netrank_core::algo::pagerank::{pagerank, PageRankConfig};
//! use netrank_core::algo::ranking::top_n;
//!
//! let edges = [("a", "b"), ("b", "c"), ("c", "d"), ("b", "d")];
//! let g = Graph::from_edges(GraphKind::Undirected, edges).unwrap();
//!
//! let betweenness = betweenness_centrality(&g, BetweennessConfig::without_endpoints());
//! let top = top_n(&betweenness, 1, true).unwrap();
//! assert_eq!(top[0].node, "b");
//!
//! let ranks = pagerank(&g, PageRankConfig::default()).unwrap();
//! assert_eq!(ranks.len(), 4);
//! ```

pub mod algo;
mod error;
pub mod formats;
mod graph;

pub use error::{Error, Result};
pub use graph::{Graph, GraphKind, GraphStats};

// Re-export petgraph for interop with `Graph::to_petgraph`
pub use petgraph;
