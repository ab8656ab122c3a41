//! Error taxonomy for Trellis operations.
//!
//! Every error is a caller-input contract violation: it is detected
//! synchronously at the point of use and propagates immediately, with no
//! retries and no partial results alongside it.

use thiserror::Error;

/// Errors produced by graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A referenced node is not a key of the graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A traversal mode string outside {"depth", "breadth"}.
    #[error("invalid traversal mode: {0:?} (expected \"depth\" or \"breadth\")")]
    InvalidMode(String),

    /// A path-enumeration mode string outside {"all", "shortest"}.
    #[error("invalid return mode: {0:?} (expected \"all\" or \"shortest\")")]
    InvalidReturnMode(String),

    /// A node index too large for a dense matrix of the graph's size.
    #[error("node index {index} out of range for matrix of size {size}")]
    IndexOutOfRange {
        /// The offending node index.
        index: usize,
        /// The matrix dimension (node count).
        size: usize,
    },
}

/// Result alias for Trellis operations.
pub type Result<T> = std::result::Result<T, Error>;
