//! # Trellis
//!
//! A small adjacency-list graph toolkit: unified breadth/depth traversal,
//! simple-path enumeration, reachability, and connected-component
//! decomposition.
//!
//! Build a [`Graph`] (undirected via [`Graph::from_edges`], directed via
//! [`Graph::from_adjacency`]) and hand `&Graph` to any algorithm; nothing
//! mutates the graph, and every result order is deterministic given the
//! graph's neighbor ordering and the chosen [`Mode`].
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::{find_paths, traverse, Graph, Mode, PathReturn};
//!
//! // An undirected square with one diagonal: 0-1, 0-2, 1-3.
//! let graph = Graph::from_edges([(0, 1), (0, 2), (1, 3)]);
//!
//! let order = traverse(&graph, &0, Mode::Breadth)?;
//! assert_eq!(order, [0, 1, 2, 3]);
//!
//! let paths = find_paths(&graph, &0, &3, PathReturn::Shortest)?;
//! assert_eq!(paths, [vec![0, 1, 3]]);
//! # Ok::<(), trellis::Error>(())
//! ```

// Re-export the toolkit API
pub use trellis_core::{
    connected_components, find_paths, largest_component, path_exists, traverse, AdjacencyMatrix,
    Error, Graph, Key, LargestComponent, Mode, PathReturn, Result,
};
