//! Edge identifier implementation for directed graphs.
//!
//! This module provides the [`EdgeId`] type, a strongly-typed identifier for
//! edges within a directed graph. The newtype wrapper prevents accidental
//! confusion between edge indices, vertex indices, and other integer values.

use std::fmt;

/// A strongly-typed identifier for edges within a directed graph.
///
/// `EdgeId` wraps a `usize` index. Edge identifiers are assigned densely and
/// sequentially starting from 0 as edges are added to a graph. A directed
/// edge is identified by its (source, target) endpoints, retrievable through
/// [`GraphBase::edge_endpoints`](crate::graph::GraphBase::edge_endpoints);
/// an edge may additionally carry an opaque label that traversal algorithms
/// never inspect.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, EdgeId};
///
/// let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let edge: EdgeId = graph.add_edge(a, b, "A->B")?;
///
/// assert_eq!(graph.edge_label(edge), Some(&"A->B"));
/// assert_eq!(graph.edge_endpoints(edge), Some((a, b)));
/// # Ok::<(), sccgraph::Error>(())
/// ```
///
/// # Thread Safety
///
/// `EdgeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// This constructor is primarily intended for graph implementations and
    /// testing. Normal usage should obtain `EdgeId` values from a graph's
    /// edge-insertion methods.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw edge index (0-based)
    ///
    /// # Returns
    ///
    /// A new `EdgeId` wrapping the provided index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}
