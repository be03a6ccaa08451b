//! Betweenness centrality: measuring brokerage and bridging.
//!
//! # Intuition
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other nodes. High betweenness = broker, bridge, gatekeeper.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! Where:
//! - σ_st = number of shortest paths from s to t
//! - σ_st(v) = number of those paths passing through v
//!
//! # Brandes' Algorithm (2001)
//!
//! For every source s:
//!
//! 1. BFS over outgoing edges, recording σ_sv and the shortest-path
//!    predecessors P_s(v) of every reached node, plus the visit order.
//! 2. Walk the visit order backwards, accumulating dependencies:
//!
//! ```text
//! δ_s(v) = Σ_{w: v∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! # Conventions
//!
//! - **Endpoints.** With [`BetweennessConfig::endpoints`] (the default),
//!   each source also receives `reached − 1`, the number of other nodes it
//!   reaches. Summed over all nodes the scores then equal the sum of all
//!   pairwise shortest-path distances. Turn it off for the textbook measure.
//! - **Undirected graphs.** The sweep runs on the symmetric adjacency, so
//!   every path is seen from both ends and scores are twice the classical
//!   undirected value. That factor is kept unless
//!   [`BetweennessConfig::halve_undirected`] is set.
//! - **Parallel edges** count as distinct shortest paths.
//!
//! # Path counts
//!
//! σ grows exponentially with graph width (a chain of k diamonds has 2^k
//! shortest paths end to end). Counts are `f64`, and each BFS layer carries a
//! power-of-two scale: once the largest count in a finished layer passes
//! 1e100 the whole layer is divided down and the exponent
//! recorded. Counts are exact up to 2^53; past that only the ratios
//! σ_sv/σ_sw are used, and those keep full `f64` relative precision. Counts
//! never overflow to infinity, however deep the graph.
//!
//! # Parallelism
//!
//! Sources are split into fixed-size chunks processed with rayon. Each chunk
//! owns its accumulator; chunk totals are added in chunk order, so results
//! do not depend on the number of worker threads.
//!
//! # References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality"
//! - Freeman (1977). "A set of measures of centrality based on betweenness"

use crate::algo::ranking::{self, Ranked};
use crate::algo::Scores;
use crate::{Graph, Result};
use log::debug;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Sources handled per rayon task.
const SOURCES_PER_TASK: usize = 32;

const UNSEEN: usize = usize::MAX;

/// Largest path count a finished BFS layer may hold before it is rescaled.
const SIGMA_RESCALE_ABOVE: f64 = 1.0e100;

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetweennessConfig {
    /// Credit each source with the number of other nodes it reaches.
    pub endpoints: bool,
    /// Divide undirected scores by two (each path is otherwise counted from both ends).
    pub halve_undirected: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            endpoints: true,
            halve_undirected: false,
        }
    }
}

impl BetweennessConfig {
    /// Classic Brandes scores: no endpoint credit, raw undirected factor.
    pub fn without_endpoints() -> Self {
        Self {
            endpoints: false,
            ..Self::default()
        }
    }
}

/// Compute betweenness centrality using Brandes' algorithm.
///
/// Returns one score per node. Nodes unreachable from a source contribute
/// nothing to that source's sweep.
///
/// # Complexity
///
/// - Time: O(VE)
/// - Space: O(V + E) per worker
///
/// # Example
///
/// ```
/// use netrank_core::Graph;
/// use netrank_core::algo::centrality::{betweenness_centrality, BetweennessConfig};
///
/// let mut g = Graph::directed();
/// // Path: A -> B -> C
/// g.add_edge("A", "B").unwrap();
/// g.add_edge("B", "C").unwrap();
///
/// let scores = betweenness_centrality(&g, BetweennessConfig::without_endpoints());
///
/// // B is on the only path from A to C
/// assert_eq!(scores["B"], 1.0);
/// assert_eq!(scores["A"], 0.0);
/// ```
#[must_use]
pub fn betweenness_centrality(graph: &Graph, config: BetweennessConfig) -> Scores {
    let adj = graph.indexed();
    let n = adj.len();
    if n == 0 {
        return Scores::new();
    }

    let sources: Vec<usize> = (0..n).collect();
    let partials: Vec<Vec<f64>> = sources
        .par_chunks(SOURCES_PER_TASK)
        .map(|chunk| {
            let mut acc = vec![0.0_f64; n];
            let mut sweep = Sweep::new(n);
            for &s in chunk {
                sweep.run(&adj.out, s, config.endpoints, &mut acc);
            }
            acc
        })
        .collect();

    let mut betweenness = vec![0.0_f64; n];
    for partial in partials {
        for (total, p) in betweenness.iter_mut().zip(partial) {
            *total += p;
        }
    }

    if config.halve_undirected && !graph.is_directed() {
        for b in &mut betweenness {
            *b /= 2.0;
        }
    }

    debug!(
        "betweenness: {} nodes, {} edges, {} source chunks",
        n,
        graph.edge_count(),
        n.div_ceil(SOURCES_PER_TASK)
    );

    adj.ids
        .iter()
        .zip(betweenness)
        .map(|(id, score)| ((*id).to_string(), score))
        .collect()
}

/// Top-N nodes by betweenness.
///
/// `n` is validated against the graph's node count; see [`ranking::top_n`]
/// for ordering.
pub fn top_n_betweenness(
    graph: &Graph,
    scores: &Scores,
    n: usize,
    with_measure: bool,
) -> Result<Vec<Ranked>> {
    ranking::validate_n(n, graph.node_count())?;
    ranking::top_n(scores, n, with_measure)
}

/// Per-source working state, reset between sources.
struct Sweep {
    dist: Vec<usize>,
    /// Path counts, relative to the scale of the node's layer.
    sigma: Vec<f64>,
    /// log2 scale per BFS distance: true σ_sv = sigma[v] · 2^scale[dist[v]].
    scale: Vec<i32>,
    pred: Vec<Vec<usize>>,
    delta: Vec<f64>,
    stack: Vec<usize>,
    queue: VecDeque<usize>,
}

impl Sweep {
    fn new(n: usize) -> Self {
        Self {
            dist: vec![UNSEEN; n],
            sigma: vec![0.0; n],
            scale: Vec::new(),
            pred: vec![Vec::new(); n],
            delta: vec![0.0; n],
            stack: Vec::with_capacity(n),
            queue: VecDeque::with_capacity(n),
        }
    }

    fn reset(&mut self) {
        self.dist.fill(UNSEEN);
        self.sigma.fill(0.0);
        self.scale.clear();
        self.delta.fill(0.0);
        for p in &mut self.pred {
            p.clear();
        }
        self.stack.clear();
        self.queue.clear();
    }

    /// Forward BFS then backward accumulation for source `s`, adding into `acc`.
    fn run(&mut self, out: &[Vec<usize>], s: usize, endpoints: bool, acc: &mut [f64]) {
        self.reset();
        self.forward(out, s);

        let Self {
            dist,
            sigma,
            scale,
            pred,
            delta,
            stack,
            ..
        } = self;

        if endpoints {
            acc[s] += (stack.len() - 1) as f64;
        }

        // Reverse BFS order: every node is finished before its predecessors.
        while let Some(w) = stack.pop() {
            if w == s {
                continue;
            }
            // Predecessors sit one layer up; undo the scale difference.
            let layer = dist[w];
            let shift = 2.0_f64.powi(scale[layer - 1] - scale[layer]);
            let coeff = (1.0 + delta[w]) * shift;
            for &v in &pred[w] {
                delta[v] += sigma[v] / sigma[w] * coeff;
            }
            acc[w] += delta[w];
        }
    }

    fn forward(&mut self, out: &[Vec<usize>], s: usize) {
        self.dist[s] = 0;
        self.sigma[s] = 1.0;
        self.queue.push_back(s);

        while let Some(v) = self.queue.pop_front() {
            if self.dist[v] == self.scale.len() {
                self.close_layer(v);
            }
            self.stack.push(v);
            let next = self.dist[v] + 1;

            for &w in &out[v] {
                // First time seeing w?
                if self.dist[w] == UNSEEN {
                    self.dist[w] = next;
                    self.queue.push_back(w);
                }
                // Is this a shortest path to w?
                if self.dist[w] == next {
                    self.sigma[w] += self.sigma[v];
                    self.pred[w].push(v);
                }
            }
        }
    }

    /// Fix the scale of the layer whose first node `first` was just dequeued.
    ///
    /// At that point the queue holds exactly the rest of the layer and every
    /// count in it is final.
    fn close_layer(&mut self, first: usize) {
        let mut scale = self.scale.last().copied().unwrap_or(0);
        let layer = || std::iter::once(first).chain(self.queue.iter().copied());
        let max = layer().map(|w| self.sigma[w]).fold(0.0_f64, f64::max);

        if max > SIGMA_RESCALE_ABOVE {
            let exponent = max.log2().floor() as i32;
            let factor = 2.0_f64.powi(-exponent);
            let members: Vec<usize> = layer().collect();
            for w in members {
                self.sigma[w] *= factor;
            }
            scale += exponent;
        }

        self.scale.push(scale);
    }
}
