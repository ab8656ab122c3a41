//! Connected-component decomposition.
//!
//! Assumes symmetric adjacency: every undirected edge is present in both
//! endpoints' neighbor sequences, the shape [`Graph::from_edges`]
//! produces. Only outgoing edges are followed, so handing in an
//! asymmetric directed graph under-counts connectivity; that is a
//! documented precondition, not something this module corrects.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algo::traversal::{traverse, Mode};
use crate::error::Result;
use crate::graph::{Graph, Key};
use crate::hash::FxHashSet;

/// Result of [`largest_component`].
///
/// Callers must branch: a unique maximum comes back unwrapped, while
/// size ties come back as the full list of tying components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LargestComponent<N> {
    /// Exactly one component attains the maximum size.
    One(Vec<N>),
    /// Two or more components tie for the maximum size (or the graph is
    /// empty and there are no components at all).
    Tied(Vec<Vec<N>>),
}

/// Decomposes the graph into connected components.
///
/// Seeds iterate in the graph's own key order; each not-yet-visited seed
/// runs a full [`traverse`] with the given `mode`, and the resulting
/// discovery-order sequence is one component. Components come back in
/// seed-encounter order, each node in exactly one of them.
///
/// # Errors
///
/// [`Error::NodeNotFound`](crate::Error::NodeNotFound) if any adjacency
/// entry references a node that is not a key of the graph.
pub fn connected_components<N: Key>(graph: &Graph<N>, mode: Mode) -> Result<Vec<Vec<N>>> {
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut components = Vec::new();

    for node in graph.nodes() {
        if visited.contains(node) {
            continue;
        }
        let component = traverse(graph, node, mode)?;
        visited.extend(component.iter().cloned());
        components.push(component);
    }

    debug!(
        components = components.len(),
        nodes = graph.node_count(),
        "component decomposition complete"
    );
    Ok(components)
}

/// Returns the largest connected component(s) of the graph.
///
/// Runs [`connected_components`], keeps only the components of maximum
/// size, and unwraps the result when the maximum is unique. An empty
/// graph yields `Tied` of nothing.
///
/// # Errors
///
/// Same conditions as [`connected_components`].
pub fn largest_component<N: Key>(graph: &Graph<N>, mode: Mode) -> Result<LargestComponent<N>> {
    let components = connected_components(graph, mode)?;
    let max_size = components.iter().map(Vec::len).max().unwrap_or(0);

    let mut largest: Vec<Vec<N>> = components
        .into_iter()
        .filter(|c| c.len() == max_size)
        .collect();

    match largest.len() {
        1 => Ok(LargestComponent::One(largest.swap_remove(0))),
        _ => Ok(LargestComponent::Tied(largest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component_covers_all_nodes() {
        let graph = Graph::from_edges([(0, 1), (0, 2), (1, 3)]);

        let components = connected_components(&graph, Mode::Breadth).unwrap();
        assert_eq!(components, [vec![0, 1, 2, 3]]);

        let largest = largest_component(&graph, Mode::Breadth).unwrap();
        assert_eq!(largest, LargestComponent::One(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_components_in_seed_order() {
        let graph = Graph::from_edges([(5, 6), (0, 1), (1, 2), (7, 6)]);

        let components = connected_components(&graph, Mode::Breadth).unwrap();
        assert_eq!(components, [vec![5, 6, 7], vec![0, 1, 2]]);
    }

    #[test]
    fn test_mode_shapes_component_order() {
        // Star plus a tail: 0-1, 0-2, 0-3, 3-4.
        let graph = Graph::from_edges([(0, 1), (0, 2), (0, 3), (3, 4)]);

        let breadth = connected_components(&graph, Mode::Breadth).unwrap();
        let depth = connected_components(&graph, Mode::Depth).unwrap();
        assert_eq!(breadth, [vec![0, 1, 2, 3, 4]]);
        assert_eq!(depth, [vec![0, 3, 4, 2, 1]]);
    }

    #[test]
    fn test_isolated_nodes_are_singletons() {
        let mut graph = Graph::from_edges([(0, 1)]);
        graph.add_node(8);
        graph.add_node(9);

        let components = connected_components(&graph, Mode::Depth).unwrap();
        assert_eq!(components, [vec![0, 1], vec![8], vec![9]]);
    }

    #[test]
    fn test_largest_tie() {
        let graph = Graph::from_edges([(0, 1), (2, 3), (4, 4)]);

        let largest = largest_component(&graph, Mode::Breadth).unwrap();
        assert_eq!(
            largest,
            LargestComponent::Tied(vec![vec![0, 1], vec![2, 3]])
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new();

        assert!(connected_components(&graph, Mode::Depth).unwrap().is_empty());
        assert_eq!(
            largest_component(&graph, Mode::Depth).unwrap(),
            LargestComponent::Tied(Vec::new())
        );
    }
}
