//! Graph algorithms built on the adjacency-list [`Graph`](crate::Graph).
//!
//! All algorithms share one idea: frontier-based expansion with a pluggable
//! pop policy ([`Mode`]). They take `&Graph`, allocate their own working
//! state, and never mutate their input.
//!
//! - [`traversal`] - unified breadth/depth walk and reachability
//! - [`paths`] - simple-path enumeration between two nodes
//! - [`components`] - connected-component decomposition

pub mod components;
pub mod paths;
pub mod traversal;

pub use components::{connected_components, largest_component, LargestComponent};
pub use paths::{find_paths, PathReturn};
pub use traversal::{path_exists, traverse, Mode};
