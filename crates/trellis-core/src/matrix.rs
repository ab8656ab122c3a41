//! Dense 0/1 adjacency-matrix conversion and text rendering.
//!
//! The matrix form requires node identifiers to be the contiguous
//! integers `0..n`; any index at or beyond the node count is rejected.
//! Nothing in [`crate::algo`] depends on this form; it exists for display
//! and for symmetry checks on imported edge lists.

use std::fmt;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A dense square 0/1 adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Converts an integer-keyed graph into its dense matrix form.
    ///
    /// The dimension is the graph's node count; entry `(u, v)` is 1 for
    /// each directed adjacency entry `u -> v`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if any node or neighbor index is not
    /// below the node count, i.e. the keys are not contiguous from zero.
    pub fn from_graph(graph: &Graph<usize>) -> Result<Self> {
        let size = graph.node_count();
        let mut rows = vec![vec![0_u8; size]; size];

        for (&node, neighbors) in graph.iter() {
            if node >= size {
                return Err(Error::IndexOutOfRange { index: node, size });
            }
            for &neighbor in neighbors {
                if neighbor >= size {
                    return Err(Error::IndexOutOfRange {
                        index: neighbor,
                        size,
                    });
                }
                rows[node][neighbor] = 1;
            }
        }

        Ok(Self { rows })
    }

    /// Returns the matrix dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the matrix rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Returns `true` if entry `(u, v)` equals entry `(v, u)` for all
    /// pairs. Undirected edge-list imports always satisfy this.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|u| (0..u).all(|v| self.rows[u][v] == self.rows[v][u]))
    }

    /// Returns `true` if no diagonal entry is set, i.e. no self-loops.
    #[must_use]
    pub fn has_zero_diagonal(&self) -> bool {
        self.rows.iter().enumerate().all(|(i, row)| row[i] == 0)
    }
}

/// Renders the bordered text form:
///
/// ```text
/// /         \
/// | 0 1 1 0 |
/// | 1 0 0 1 |
/// | 1 0 0 0 |
/// | 0 1 0 0 |
/// \         /
/// ```
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = " ".repeat(2 * self.size() + 1);
        writeln!(f, "/{blank}\\")?;
        for row in &self.rows {
            write!(f, "| ")?;
            for element in row {
                write!(f, "{element} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "\\{blank}/")
    }
}
