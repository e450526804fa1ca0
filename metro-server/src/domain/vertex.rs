//! Vertex index type.

use std::fmt;

use serde::Serialize;

/// Index of a station in the graph.
///
/// Identity is purely positional: vertex `n` is the `n`th station added to
/// the graph. A `Vertex` is only meaningful for the graph that issued it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Vertex(pub usize);

impl Vertex {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.0)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Vertex {
    fn from(index: usize) -> Self {
        Vertex(index)
    }
}
