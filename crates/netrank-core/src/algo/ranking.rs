//! Top-N selection over a score map.
//!
//! Both centrality measures rank through [`top_n`], so ordering is identical
//! across measures:
//!
//! 1. descending score (IEEE total order, so NaN never panics a sort);
//! 2. equal scores by ascending node identifier.
//!
//! The tie-break does not depend on `HashMap` iteration order, so the same
//! scores always produce the same ranking.

use super::Scores;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked {
    /// Node identifier.
    pub node: String,
    /// The node's score; `None` unless requested with `with_measure`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Return the `n` highest-scoring nodes, best first.
///
/// Fails with [`Error::InvalidArgument`] when `n` is zero or larger than the
/// number of scored nodes.
///
/// # Example
///
/// ```
/// use netrank_core::algo::ranking::top_n;
/// use netrank_core::algo::Scores;
///
/// let scores: Scores = [("a", 0.2), ("b", 0.5), ("c", 0.5)]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v))
///     .collect();
///
/// let top = top_n(&scores, 2, false).unwrap();
/// let names: Vec<_> = top.iter().map(|r| r.node.as_str()).collect();
/// assert_eq!(names, ["b", "c"]);
/// ```
pub fn top_n(scores: &Scores, n: usize, with_measure: bool) -> Result<Vec<Ranked>> {
    validate_n(n, scores.len())?;

    let mut entries: Vec<(&String, f64)> = scores.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(by_score_then_id);

    Ok(entries
        .into_iter()
        .take(n)
        .map(|(node, score)| Ranked {
            node: node.clone(),
            score: with_measure.then_some(score),
        })
        .collect())
}

/// Check a requested ranking size against the number of nodes available.
pub fn validate_n(n: usize, node_count: usize) -> Result<()> {
    if n == 0 || n > node_count {
        return Err(Error::InvalidArgument(format!(
            "n must be in 1..={node_count}, got {n}"
        )));
    }
    Ok(())
}

fn by_score_then_id(a: &(&String, f64), b: &(&String, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
