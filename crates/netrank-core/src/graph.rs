use crate::{Error, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Whether edges carry a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Edge (u, v) is only traversable from u to v.
    Directed,
    /// Edge (u, v) is traversable both ways.
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "directed" | "digraph" => Ok(Self::Directed),
            "undirected" | "undigraph" => Ok(Self::Undirected),
            other => Err(Error::UnsupportedGraphType(other.to_string())),
        }
    }
}

/// An append-only graph of string-identified nodes.
///
/// Keeps both an outgoing and an incoming adjacency list. Parallel edges are
/// kept (each insertion appends one entry), so degrees count multiplicity.
///
/// For [`GraphKind::Undirected`] both lists are symmetric and identical; a
/// self-loop `(u, u)` is recorded once per list rather than twice.
///
/// # Example
///
/// ```rust
/// use netrank_core::Graph;
///
/// let mut g = Graph::directed();
/// g.add_edge("a", "b").unwrap();
/// g.add_edge("b", "c").unwrap();
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.out_adjacency()["a"], vec!["b".to_string()]);
/// assert_eq!(g.in_adjacency()["c"], vec!["b".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,

    /// Ordered so that iteration (and every algorithm's indexing) is deterministic.
    nodes: BTreeSet<String>,

    out_adj: HashMap<String, Vec<String>>,
    in_adj: HashMap<String, Vec<String>>,

    edge_count: usize,
    self_loops: usize,
}

impl Graph {
    /// Create an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: BTreeSet::new(),
            out_adj: HashMap::new(),
            in_adj: HashMap::new(),
            edge_count: 0,
            self_loops: 0,
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Build a graph from `(source, destination)` pairs, in order.
    pub fn from_edges<I, S, T>(kind: GraphKind, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut graph = Self::new(kind);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Add a node. Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidNode(id));
        }
        self.nodes.insert(id);
        Ok(())
    }

    /// Add an edge, creating either endpoint if it does not exist yet.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) -> Result<()> {
        let (u, v) = (u.into(), v.into());
        if u.is_empty() || v.is_empty() {
            return Err(Error::InvalidEdge { from: u, to: v });
        }

        match self.kind {
            GraphKind::Directed => {
                self.out_adj.entry(u.clone()).or_default().push(v.clone());
                self.in_adj.entry(v.clone()).or_default().push(u.clone());
            }
            GraphKind::Undirected => {
                self.out_adj.entry(u.clone()).or_default().push(v.clone());
                self.in_adj.entry(u.clone()).or_default().push(v.clone());
                // A self-loop is already fully recorded above.
                if u != v {
                    self.out_adj.entry(v.clone()).or_default().push(u.clone());
                    self.in_adj.entry(v.clone()).or_default().push(u.clone());
                }
            }
        }

        if u == v {
            self.self_loops += 1;
        }
        self.edge_count += 1;
        self.nodes.insert(u);
        self.nodes.insert(v);
        Ok(())
    }

    /// All nodes, in ascending identifier order.
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Outgoing adjacency. Nodes without successors may be absent.
    pub fn out_adjacency(&self) -> &HashMap<String, Vec<String>> {
        &self.out_adj
    }

    /// Incoming adjacency. Nodes without predecessors may be absent.
    pub fn in_adjacency(&self) -> &HashMap<String, Vec<String>> {
        &self.in_adj
    }

    /// Successors of `id` (neighbours, for undirected graphs). Empty if unknown.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.out_adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Predecessors of `id`. Empty if unknown.
    pub fn predecessors(&self, id: &str) -> &[String] {
        self.in_adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.predecessors(id).len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of `add_edge` calls that succeeded.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Export to a petgraph `DiGraph` with one edge per insertion, oriented as inserted.
    ///
    /// Node weights are the node identifiers; node indices follow ascending
    /// identifier order. For an undirected store, convert with
    /// `into_edge_type::<petgraph::Undirected>()`.
    pub fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut pg = DiGraph::with_capacity(self.nodes.len(), self.edge_count);
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.nodes.len());
        for id in &self.nodes {
            index.insert(id.as_str(), pg.add_node(id.clone()));
        }

        for u in &self.nodes {
            let ui = index[u.as_str()];
            for v in self.neighbors(u) {
                // Undirected stores list each edge from both ends; keep one.
                if !self.is_directed() && u > v {
                    continue;
                }
                pg.add_edge(ui, index[v.as_str()], ());
            }
        }
        pg
    }

    /// Summary statistics.
    pub fn stats(&self) -> GraphStats {
        let n = self.nodes.len();
        let out_entries: usize = self.out_adj.values().map(Vec::len).sum();
        let isolated_nodes = self
            .nodes
            .iter()
            .filter(|id| self.out_degree(id) == 0 && self.in_degree(id) == 0)
            .count();

        GraphStats {
            kind: self.kind,
            node_count: n,
            edge_count: self.edge_count,
            self_loops: self.self_loops,
            isolated_nodes,
            avg_out_degree: if n > 0 {
                out_entries as f64 / n as f64
            } else {
                0.0
            },
            weak_components: petgraph::algo::connected_components(&self.to_petgraph()),
        }
    }

    /// Dense index view over the store, used by the algorithms.
    pub(crate) fn indexed(&self) -> IndexedAdjacency<'_> {
        let ids: Vec<&str> = self.nodes.iter().map(String::as_str).collect();
        let position: HashMap<&str, usize> =
            ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let resolve = |adj: &HashMap<String, Vec<String>>| -> Vec<Vec<usize>> {
            ids.iter()
                .map(|id| {
                    adj.get(*id)
                        .map(|list| {
                            list.iter()
                                .map(|n| position[n.as_str()])
                                .collect::<Vec<usize>>()
                        })
                        .unwrap_or_default()
                })
                .collect()
        };

        let out = resolve(&self.out_adj);
        let inc = resolve(&self.in_adj);
        IndexedAdjacency { ids, out, inc }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}

/// Integer-indexed snapshot of a [`Graph`]; index `i` is the i-th node in ascending id order.
pub(crate) struct IndexedAdjacency<'a> {
    pub ids: Vec<&'a str>,
    pub out: Vec<Vec<usize>>,
    pub inc: Vec<Vec<usize>>,
}

impl IndexedAdjacency<'_> {
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub kind: GraphKind,
    pub node_count: usize,
    pub edge_count: usize,
    pub self_loops: usize,
    pub isolated_nodes: usize,
    /// Mean length of the outgoing adjacency lists.
    pub avg_out_degree: f64,
    /// Connected components, ignoring edge direction.
    pub weak_components: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn undirected(edges: &[(&str, &str)]) -> Graph {
        Graph::from_edges(GraphKind::Undirected, edges.iter().copied()).unwrap()
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut g = Graph::directed();
        g.add_node("1").unwrap();
        assert_eq!(g.node_count(), 1);
        g.add_node("2").unwrap();
        g.add_node("1").unwrap();
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_add_node_rejects_empty() {
        let mut g = Graph::undirected();
        assert!(matches!(g.add_node(""), Err(Error::InvalidNode(_))));
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_empty_endpoint() {
        let mut g = Graph::directed();
        assert!(matches!(g.add_edge("", "b"), Err(Error::InvalidEdge { .. })));
        assert!(matches!(g.add_edge("a", ""), Err(Error::InvalidEdge { .. })));
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_directed_adjacency() {
        let g = Graph::from_edges(GraphKind::Directed, [("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(g.out_adjacency()["a"], strings(&["b"]));
        assert_eq!(g.in_adjacency()["c"], strings(&["b"]));
        assert!(g.out_adjacency().get("c").is_none());
        assert!(g.neighbors("c").is_empty());
        assert_eq!(g.in_degree("b"), 1);
    }

    #[test]
    fn test_undirected_star() {
        let g = undirected(&[("1", "2"), ("1", "3"), ("1", "4")]);
        assert_eq!(g.neighbors("1"), strings(&["2", "3", "4"]).as_slice());
        assert_eq!(g.neighbors("2"), strings(&["1"]).as_slice());
        assert_eq!(g.neighbors("4"), strings(&["1"]).as_slice());
        assert_eq!(g.out_adjacency(), g.in_adjacency());
    }

    #[test]
    fn test_undirected_triangle_order() {
        let g = undirected(&[("1", "2"), ("2", "3"), ("3", "1")]);
        assert_eq!(g.neighbors("1"), strings(&["2", "3"]).as_slice());
        assert_eq!(g.neighbors("2"), strings(&["1", "3"]).as_slice());
        assert_eq!(g.neighbors("3"), strings(&["2", "1"]).as_slice());
    }

    #[test]
    fn test_undirected_self_loop_recorded_once() {
        let g = undirected(&[("1", "2"), ("1", "3"), ("1", "1")]);
        assert_eq!(g.neighbors("1"), strings(&["2", "3", "1"]).as_slice());
        assert_eq!(g.predecessors("1"), strings(&["2", "3", "1"]).as_slice());
        assert_eq!(g.stats().self_loops, 1);
    }

    #[test]
    fn test_parallel_edges_preserved() {
        let g = Graph::from_edges(GraphKind::Directed, [("a", "b"), ("a", "b")]).unwrap();
        assert_eq!(g.out_degree("a"), 2);
        assert_eq!(g.in_degree("b"), 2);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_graph_kind_from_str() {
        assert_eq!("directed".parse::<GraphKind>().unwrap(), GraphKind::Directed);
        assert_eq!(" Undirected ".parse::<GraphKind>().unwrap(), GraphKind::Undirected);
        assert!(matches!(
            "hypergraph".parse::<GraphKind>(),
            Err(Error::UnsupportedGraphType(_))
        ));
    }

    #[test]
    fn test_stats() {
        let mut g = undirected(&[("a", "b"), ("b", "c"), ("x", "y")]);
        g.add_node("lonely").unwrap();
        let stats = g.stats();
        assert_eq!(stats.node_count, 6);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.isolated_nodes, 1);
        assert_eq!(stats.weak_components, 3);
        assert!((stats.avg_out_degree - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_petgraph_keeps_one_edge_per_insertion() {
        let directed = Graph::from_edges(GraphKind::Directed, [("a", "b"), ("b", "a")]).unwrap();
        assert_eq!(directed.to_petgraph().edge_count(), 2);

        let undirected = undirected(&[("a", "b"), ("b", "c"), ("c", "c")]);
        let pg = undirected.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 3);
    }

    #[test]
    fn test_indexed_follows_id_order() {
        let g = Graph::from_edges(GraphKind::Directed, [("c", "a"), ("b", "c")]).unwrap();
        let idx = g.indexed();
        assert_eq!(idx.ids, vec!["a", "b", "c"]);
        assert_eq!(idx.out[2], vec![0]);
        assert_eq!(idx.inc[2], vec![1]);
        assert!(idx.out[0].is_empty());
    }
}
