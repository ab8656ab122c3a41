//! Simple-path enumeration between two nodes.
//!
//! Level-synchronous search over candidate paths rather than nodes: every
//! round extends each candidate by one edge, so all paths of a given edge
//! count surface in the same round. That makes the shortest mode exact
//! (the first successful round holds precisely the minimum-length simple
//! paths, ties included) without a separate distance structure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{Graph, Key};

/// Which paths [`find_paths`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathReturn {
    /// Every simple path from start to end, any length.
    All,
    /// Only the minimum-edge-count simple paths, ties included.
    Shortest,
}

impl PathReturn {
    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PathReturn::All => "all",
            PathReturn::Shortest => "shortest",
        }
    }
}

impl fmt::Display for PathReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathReturn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(PathReturn::All),
            "shortest" => Ok(PathReturn::Shortest),
            other => Err(Error::InvalidReturnMode(other.to_string())),
        }
    }
}

/// Enumerates simple paths from `start` to `end`.
///
/// Returns every accumulated path in discovery order: shorter paths
/// first, and within a round, candidate order follows the neighbor order
/// of the graph. `start == end` returns exactly one single-node path
/// without searching. If no simple path exists, the result is empty.
///
/// `PathReturn::All` is worst-case exponential in graph branching; that
/// is inherent to enumerating all simple paths, not a defect.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start` or `end` is not a key of the graph
/// (except the `start == end` fast path, which performs no lookup), or if
/// expansion reaches an adjacency entry that is not a key.
pub fn find_paths<N: Key>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    return_mode: PathReturn,
) -> Result<Vec<Vec<N>>> {
    if start == end {
        return Ok(vec![vec![start.clone()]]);
    }
    for endpoint in [start, end] {
        if !graph.contains(endpoint) {
            return Err(Error::NodeNotFound(format!("{endpoint:?}")));
        }
    }

    let mut candidates = vec![vec![start.clone()]];
    let mut found: Vec<Vec<N>> = Vec::new();
    let mut rounds = 0_usize;

    while !candidates.is_empty() {
        rounds += 1;
        let mut next_round = Vec::new();
        let mut found_this_round = false;

        for path in &candidates {
            let Some(last) = path.last() else {
                continue;
            };
            for neighbor in graph.neighbors(last)? {
                if path.contains(neighbor) {
                    continue;
                }
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(path);
                extended.push(neighbor.clone());
                if neighbor == end {
                    found_this_round = true;
                    found.push(extended.clone());
                }
                // Dead-end candidates past `end` stay in the round so the
                // all mode keeps exhausting them; they can never reach
                // `end` again on a simple path.
                next_round.push(extended);
            }
        }

        if return_mode == PathReturn::Shortest && found_this_round {
            break;
        }
        candidates = next_round;
    }

    trace!(
        return_mode = %return_mode,
        rounds,
        paths = found.len(),
        "path enumeration complete"
    );
    Ok(found)
}
