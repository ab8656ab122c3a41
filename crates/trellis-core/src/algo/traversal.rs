//! Unified breadth/depth frontier traversal and reachability.
//!
//! One loop serves both disciplines: a deque frontier popped from the front
//! (queue, breadth) or the back (stack, depth). A node enters the frontier
//! at most once, tracked by a seen-set covering output and frontier
//! together, so each reachable node is emitted exactly once. The emitted
//! order is defined purely by the pop policy and each node's neighbor
//! order; it is not required to match recursive DFS preorder.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{Graph, Key};
use crate::hash::FxHashSet;

/// Frontier pop policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stack discipline: pop the most-recently-added node (LIFO).
    Depth,
    /// Queue discipline: pop the earliest-added node (FIFO).
    Breadth,
}

impl Mode {
    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Depth => "depth",
            Mode::Breadth => "breadth",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "depth" => Ok(Mode::Depth),
            "breadth" => Ok(Mode::Breadth),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

fn pop<N>(frontier: &mut VecDeque<N>, mode: Mode) -> Option<N> {
    match mode {
        Mode::Depth => frontier.pop_back(),
        Mode::Breadth => frontier.pop_front(),
    }
}

/// Walks the graph from `start`, returning every reachable node exactly
/// once in discovery order.
///
/// The order is deterministic for identical input: it is fixed by `mode`
/// and by each node's neighbor sequence. `Depth` and `Breadth` visit the
/// same set of nodes in generally different orders.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start`, or any node reached through an
/// adjacency entry, is not a key of the graph.
pub fn traverse<N: Key>(graph: &Graph<N>, start: &N, mode: Mode) -> Result<Vec<N>> {
    let mut frontier = VecDeque::from([start.clone()]);
    let mut seen = FxHashSet::default();
    seen.insert(start.clone());

    let mut order = Vec::new();
    while let Some(node) = pop(&mut frontier, mode) {
        for neighbor in graph.neighbors(&node)? {
            if seen.insert(neighbor.clone()) {
                frontier.push_back(neighbor.clone());
            }
        }
        order.push(node);
    }

    trace!(mode = %mode, visited = order.len(), "traversal complete");
    Ok(order)
}

/// Returns whether any path from `start` to `end` exists.
///
/// `start == end` is trivially `true`, with no graph lookup. Otherwise
/// this runs the same frontier discipline as [`traverse`], but
/// short-circuits as soon as `end` shows up among a popped node's
/// neighbors, without discovering the rest of the reachable set.
///
/// # Errors
///
/// [`Error::NodeNotFound`] under the same conditions as [`traverse`];
/// `end` itself is never looked up.
pub fn path_exists<N: Key>(graph: &Graph<N>, start: &N, end: &N, mode: Mode) -> Result<bool> {
    if start == end {
        return Ok(true);
    }

    let mut frontier = VecDeque::from([start.clone()]);
    let mut seen = FxHashSet::default();
    seen.insert(start.clone());

    while let Some(node) = pop(&mut frontier, mode) {
        let neighbors = graph.neighbors(&node)?;
        if neighbors.contains(end) {
            return Ok(true);
        }
        for neighbor in neighbors {
            if seen.insert(neighbor.clone()) {
                frontier.push_back(neighbor.clone());
            }
        }
    }

    Ok(false)
}
