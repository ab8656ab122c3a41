//! # trellis-core
//!
//! Core layer for Trellis: the adjacency-list graph type and the
//! traversal/pathfinding algorithms built on it.
//!
//! The graph is an insertion-ordered mapping from node to its ordered
//! outgoing-neighbor sequence. Neighbor order is significant: it fixes the
//! expansion order of every algorithm in [`algo`], so results are
//! deterministic for identical input.
//!
//! ## Modules
//!
//! - [`graph`] - The [`Graph`] adjacency-list type and edge-list import
//! - [`algo`] - Frontier traversal, reachability, simple-path enumeration,
//!   connected components
//! - [`matrix`] - Dense 0/1 matrix conversion and text rendering
//! - [`error`] - Error taxonomy shared by all operations

pub mod algo;
pub mod error;
pub mod graph;
pub mod matrix;

mod hash;

// Re-export commonly used types
pub use algo::components::{connected_components, largest_component, LargestComponent};
pub use algo::paths::{find_paths, PathReturn};
pub use algo::traversal::{path_exists, traverse, Mode};
pub use error::{Error, Result};
pub use graph::{Graph, Key};
pub use matrix::AdjacencyMatrix;
