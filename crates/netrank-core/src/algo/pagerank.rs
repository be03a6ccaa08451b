//! `PageRank` centrality algorithm.
//!
//! Computes the importance of nodes based on link structure by power
//! iteration. Higher scores indicate more "important" nodes.
//!
//! # Update rules
//!
//! The graph's [`GraphKind`] selects one of two rules. They are deliberately
//! different and are not interchangeable.
//!
//! **Directed.** Scores start at `1/n`. Each iteration:
//!
//! ```text
//! PR'(v) = Σ_{u ∈ in(v)} PR(u) / out_degree(u)
//! ```
//!
//! There is no damping term and no dangling-node redistribution, so mass
//! held by nodes without out-links leaves the system: the total starts at
//! 1.0, never increases, and stays at 1.0 only when every node has an
//! out-link. Reproducing this is intentional.
//!
//! **Undirected.** Scores start at `1.0`. Each iteration:
//!
//! ```text
//! PR'(v) = α · PR(v) · Σ_{m ∈ N(v)} 1/deg(m) + (1 − α)
//! ```
//!
//! The node's own previous score multiplies the neighbour term. On regular
//! graphs (all degrees equal) 1.0 is a fixed point. On irregular graphs hub
//! scores can grow until the iteration cap.
//!
//! Both rules are Jacobi-style: every new score is computed from the previous
//! iteration's full vector.
//!
//! # Termination
//!
//! Stops when `Σ |PR'(v) − PR(v)| < tolerance · n`, or after
//! `max_iterations` iterations. Hitting the cap is not an error; the last
//! vector is returned and a warning is logged.

use crate::algo::ranking::{self, Ranked};
use crate::algo::Scores;
use crate::{Error, Graph, GraphKind, Result};
use log::{debug, warn};
use rayon::prelude::*;

/// `PageRank` configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Only the undirected rule uses it. Typically 0.85.
    pub damping_factor: f64,
    /// Maximum iterations before stopping.
    pub max_iterations: usize,
    /// Convergence tolerance, per node (the L1 change is compared with `tolerance * n`).
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(Error::InvalidArgument(format!(
                "damping_factor must be in [0, 1], got {}",
                self.damping_factor
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Scores plus how the iteration ended.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankReport {
    pub scores: Scores,
    /// Iterations actually run.
    pub iterations: usize,
    /// Whether the tolerance was met before the cap.
    pub converged: bool,
    /// L1 change of the last iteration (0.0 if none ran).
    pub last_delta: f64,
}

/// Compute `PageRank` for all nodes.
///
/// # Example
///
/// ```
/// use netrank_core::Graph;
/// use netrank_core::algo::pagerank::{pagerank, PageRankConfig};
///
/// let mut g = Graph::directed();
/// g.add_edge("A", "B").unwrap();
/// g.add_edge("B", "C").unwrap();
/// g.add_edge("C", "A").unwrap();
///
/// let scores = pagerank(&g, PageRankConfig::default()).unwrap();
/// assert!((scores["A"] - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn pagerank(graph: &Graph, config: PageRankConfig) -> Result<Scores> {
    pagerank_with_report(graph, config).map(|report| report.scores)
}

/// Compute `PageRank` and report convergence.
pub fn pagerank_with_report(graph: &Graph, config: PageRankConfig) -> Result<PageRankReport> {
    config.validate()?;

    let adj = graph.indexed();
    let n = adj.len();
    if n == 0 {
        return Ok(PageRankReport {
            scores: Scores::new(),
            iterations: 0,
            converged: true,
            last_delta: 0.0,
        });
    }

    let out_degree: Vec<usize> = adj.out.iter().map(Vec::len).collect();
    let rule = match graph.kind() {
        GraphKind::Directed => Rule::Directed {
            predecessors: &adj.inc,
            out_degree: &out_degree,
        },
        GraphKind::Undirected => Rule::Undirected {
            // Σ 1/deg(m) over neighbours does not change between iterations.
            inverse_degree_sum: adj
                .out
                .iter()
                .map(|neighbours| {
                    neighbours
                        .iter()
                        .filter(|&&m| out_degree[m] > 0)
                        .map(|&m| 1.0 / out_degree[m] as f64)
                        .sum()
                })
                .collect(),
            damping: config.damping_factor,
        },
    };

    let mut scores = rule.initial(n);
    let mut next = vec![0.0_f64; n];
    let threshold = config.tolerance * n as f64;
    let mut iterations = 0;
    let mut last_delta = 0.0;
    let mut converged = false;

    while iterations < config.max_iterations {
        rule.step(&scores, &mut next);
        iterations += 1;

        last_delta = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);

        if last_delta < threshold {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(
            "pagerank ({}): converged after {} iterations (delta {:.3e})",
            graph.kind(),
            iterations,
            last_delta
        );
    } else if config.max_iterations > 0 {
        warn!(
            "pagerank ({}): stopped at iteration cap {} without converging (delta {:.3e})",
            graph.kind(),
            config.max_iterations,
            last_delta
        );
    }

    let scores = adj
        .ids
        .iter()
        .zip(scores)
        .map(|(id, score)| ((*id).to_string(), score))
        .collect();

    Ok(PageRankReport {
        scores,
        iterations,
        converged,
        last_delta,
    })
}

/// Top-N nodes by `PageRank`.
///
/// Same validation and ordering as
/// [`top_n_betweenness`](crate::algo::centrality::top_n_betweenness).
pub fn top_n_centrality_nodes(
    graph: &Graph,
    scores: &Scores,
    n: usize,
    with_measure: bool,
) -> Result<Vec<Ranked>> {
    ranking::validate_n(n, graph.node_count())?;
    ranking::top_n(scores, n, with_measure)
}

enum Rule<'a> {
    Directed {
        predecessors: &'a [Vec<usize>],
        out_degree: &'a [usize],
    },
    Undirected {
        inverse_degree_sum: Vec<f64>,
        damping: f64,
    },
}

impl Rule<'_> {
    fn initial(&self, n: usize) -> Vec<f64> {
        match self {
            Self::Directed { .. } => vec![1.0 / n as f64; n],
            Self::Undirected { .. } => vec![1.0; n],
        }
    }

    /// Fill `next` from `prev` only.
    fn step(&self, prev: &[f64], next: &mut [f64]) {
        match self {
            Self::Directed {
                predecessors,
                out_degree,
            } => {
                next.par_iter_mut().enumerate().for_each(|(v, slot)| {
                    *slot = predecessors[v]
                        .iter()
                        .filter(|&&u| out_degree[u] > 0)
                        .map(|&u| prev[u] / out_degree[u] as f64)
                        .sum();
                });
            }
            Self::Undirected {
                inverse_degree_sum,
                damping,
            } => {
                next.par_iter_mut().enumerate().for_each(|(v, slot)| {
                    *slot = damping * inverse_degree_sum[v] * prev[v] + (1.0 - damping);
                });
            }
        }
    }
}
