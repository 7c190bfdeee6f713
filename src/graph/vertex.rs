//! Vertex identifier implementation for directed graphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed identifier for
//! vertices within a directed graph. The newtype wrapper prevents accidental
//! confusion between vertex indices and other integer values, and its total
//! order gives traversals a deterministic tie-breaking rule.

use std::fmt;

/// A strongly-typed identifier for vertices within a directed graph.
///
/// `VertexId` wraps a `usize` index. Vertex identifiers are assigned densely
/// and sequentially starting from 0 as vertices are added to a graph, so they
/// can be used directly to index per-vertex side tables.
///
/// The derived [`Ord`] implementation provides the total order over vertices
/// required for deterministic iteration and for breaking ties when several
/// valid visitation orders exist.
///
/// # Usage
///
/// Vertex IDs are created by
/// [`DirectedGraph::add_vertex`](crate::graph::DirectedGraph::add_vertex) (or
/// by another graph type's construction methods) and should not typically be
/// constructed manually. They are used to:
///
/// - Reference vertices when adding edges
/// - Look up vertex data
/// - Query adjacency relationships
/// - Store per-run traversal metadata out-of-line, keyed by vertex
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, VertexId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a: VertexId = graph.add_vertex("A");
/// let b: VertexId = graph.add_vertex("B");
///
/// assert_ne!(a, b);
/// assert!(a < b); // total order follows insertion order
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// This constructor is primarily intended for graph implementations and
    /// testing. Normal usage should obtain `VertexId` values from a graph's
    /// vertex-insertion methods.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    ///
    /// # Returns
    ///
    /// A new `VertexId` wrapping the provided index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index is a 0-based position usable to index into vectors that
    /// store per-vertex data.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_vertex_id_new_and_index() {
        let vertex = VertexId::new(42);
        assert_eq!(vertex.index(), 42);
    }

    #[test]
    fn test_vertex_id_equality() {
        assert_eq!(VertexId::new(5), VertexId::new(5));
        assert_ne!(VertexId::new(5), VertexId::new(10));
    }

    #[test]
    fn test_vertex_id_total_order() {
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        let v3 = VertexId::new(3);

        assert!(v1 < v2);
        assert!(v2 < v3);

        let mut vertices = vec![v3, v1, v2];
        vertices.sort();
        assert_eq!(vertices, vec![v1, v2, v3]);
    }

    #[test]
    fn test_vertex_id_in_ordered_set() {
        let mut set: BTreeSet<VertexId> = BTreeSet::new();
        set.insert(VertexId::new(2));
        set.insert(VertexId::new(0));
        set.insert(VertexId::new(1));
        set.insert(VertexId::new(0)); // duplicate is absorbed

        let ordered: Vec<VertexId> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]
        );
    }

    #[test]
    fn test_vertex_id_as_map_key() {
        let mut map: HashMap<VertexId, &str> = HashMap::new();
        map.insert(VertexId::new(1), "first");
        map.insert(VertexId::new(2), "second");

        assert_eq!(map.get(&VertexId::new(1)), Some(&"first"));
        assert_eq!(map.get(&VertexId::new(3)), None);
    }

    #[test]
    fn test_vertex_id_conversions() {
        let vertex: VertexId = 123usize.into();
        assert_eq!(vertex.index(), 123);

        let raw: usize = VertexId::new(789).into();
        assert_eq!(raw, 789);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let vertex = VertexId::new(42);
        assert_eq!(format!("{vertex:?}"), "VertexId(42)");
        assert_eq!(format!("{vertex}"), "v42");
    }

    #[test]
    fn test_vertex_id_side_table_indexing() {
        let finish_times = vec![10u64, 20, 30, 40];
        let vertex = VertexId::new(2);
        assert_eq!(finish_times[vertex.index()], 30);
    }
}
