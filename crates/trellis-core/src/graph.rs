//! Adjacency-list graph representation.
//!
//! [`Graph`] maps each node to its ordered outgoing-neighbor sequence.
//! Neighbor order is preserved exactly as inserted and determines the
//! expansion order of every algorithm in [`crate::algo`]. Key enumeration
//! order is insertion order, which makes component decomposition
//! deterministic and caller-controlled.
//!
//! No implicit symmetry is assumed: a directed edge `u -> v` is exactly one
//! entry of `v` in `u`'s sequence. Undirected graphs insert each edge in
//! both directions at construction time ([`Graph::add_undirected_edge`],
//! [`Graph::from_edges`]).

use crate::error::{Error, Result};
use crate::hash::FxIndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;

/// Bound for node identifiers: any ordered, hashable, cloneable value,
/// typically an integer or a string.
pub trait Key: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Key for T {}

/// Inline neighbor storage; most nodes in small graphs have few neighbors.
type NeighborList<N> = SmallVec<[N; 4]>;

/// An insertion-ordered adjacency-list graph.
///
/// Immutable input to every algorithm in this crate: no operation mutates
/// a graph it is handed, so sharing `&Graph` across threads is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<N: Key> {
    adj: FxIndexMap<N, NeighborList<N>>,
}

impl<N: Key> Graph<N> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adj: FxIndexMap::default(),
        }
    }

    /// Builds an undirected graph from an edge list.
    ///
    /// For each edge `(u, v)`, both endpoints become keys and each is
    /// appended to the other's neighbor sequence, yielding a symmetric
    /// graph. Duplicate directed entries are skipped, so no identifier
    /// appears twice within a single neighbor sequence.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_undirected_edge(u, v);
        }
        graph
    }

    /// Builds a graph directly from `(node, neighbors)` rows.
    ///
    /// Rows are inserted in order; neighbor sequences are taken as given,
    /// including any asymmetry, so this is the way to build directed
    /// graphs.
    pub fn from_adjacency(
        rows: impl IntoIterator<Item = (N, impl IntoIterator<Item = N>)>,
    ) -> Self {
        let mut graph = Self::new();
        for (node, neighbors) in rows {
            let list = graph.adj.entry(node).or_default();
            list.extend(neighbors);
        }
        graph
    }

    /// Ensures `node` exists as a key, with an empty neighbor sequence if
    /// it was absent.
    pub fn add_node(&mut self, node: N) {
        self.adj.entry(node).or_default();
    }

    /// Adds a directed edge `u -> v`, ensuring both endpoints are keys.
    pub fn add_edge(&mut self, u: N, v: N) {
        self.adj.entry(v.clone()).or_default();
        self.adj.entry(u).or_default().push(v);
    }

    /// Adds an undirected edge by inserting it in both directions.
    ///
    /// Directed entries already present are not duplicated.
    pub fn add_undirected_edge(&mut self, u: N, v: N) {
        self.adj.entry(u.clone()).or_default();
        self.adj.entry(v.clone()).or_default();

        let fwd = &mut self.adj[&u];
        if !fwd.contains(&v) {
            fwd.push(v.clone());
        }
        let bwd = &mut self.adj[&v];
        if !bwd.contains(&u) {
            bwd.push(u);
        }
    }

    /// Returns the neighbor sequence of `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `node` is not a key of the graph.
    pub fn neighbors(&self, node: &N) -> Result<&[N]> {
        self.adj
            .get(node)
            .map(SmallVec::as_slice)
            .ok_or_else(|| Error::NodeNotFound(format!("{node:?}")))
    }

    /// Returns `true` if `node` is a key of the graph.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.adj.contains_key(node)
    }

    /// Iterates over the graph's nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adj.keys()
    }

    /// Iterates over `(node, neighbors)` rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.adj.iter().map(|(n, list)| (n, list.as_slice()))
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of directed adjacency entries.
    ///
    /// An undirected edge counts twice, once per direction.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(SmallVec::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }
}

impl<N: Key> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_is_symmetric() {
        let graph = Graph::from_edges([(0, 1), (0, 2), (1, 3)]);

        assert_eq!(graph.neighbors(&0).unwrap(), &[1, 2]);
        assert_eq!(graph.neighbors(&1).unwrap(), &[0, 3]);
        assert_eq!(graph.neighbors(&2).unwrap(), &[0]);
        assert_eq!(graph.neighbors(&3).unwrap(), &[1]);
    }

    #[test]
    fn test_from_edges_skips_duplicates() {
        let graph = Graph::from_edges([(0, 1), (1, 0), (0, 1)]);

        assert_eq!(graph.neighbors(&0).unwrap(), &[1]);
        assert_eq!(graph.neighbors(&1).unwrap(), &[0]);
    }

    #[test]
    fn test_node_order_is_insertion_order() {
        let graph = Graph::from_edges([("c", "a"), ("b", "a")]);

        let nodes: Vec<_> = graph.nodes().collect();
        assert_eq!(nodes, [&"c", &"a", &"b"]);
    }

    #[test]
    fn test_neighbor_order_preserved() {
        let graph = Graph::from_adjacency([(0, vec![3, 1, 2]), (1, vec![]), (2, vec![]), (3, vec![])]);

        assert_eq!(graph.neighbors(&0).unwrap(), &[3, 1, 2]);
    }

    #[test]
    fn test_missing_node() {
        let graph: Graph<u32> = Graph::from_edges([(0, 1)]);

        assert_eq!(
            graph.neighbors(&7),
            Err(Error::NodeNotFound("7".to_string()))
        );
    }

    #[test]
    fn test_counts() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");
        graph.add_node("d");

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_empty());
        assert!(graph.contains(&"d"));
        assert_eq!(graph.neighbors(&"b").unwrap(), &[] as &[&str]);
    }
}
