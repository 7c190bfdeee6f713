//! Vertex selection predicate for traversals.

use crate::graph::VertexId;

/// A predicate restricting which vertices a traversal considers.
///
/// A vertex rejected by the chooser is treated as absent for the entire
/// search: it is never selected as a root, never visited, and never
/// traversed into, so the algorithm effectively operates on the induced
/// subgraph of accepted vertices. When no chooser is supplied, every vertex
/// is included.
///
/// Any `Fn(VertexId) -> bool` closure is a chooser via the blanket
/// implementation.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DepthFirstSearch, DirectedGraph, VertexId};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// graph.add_edge(a, b, ())?;
///
/// let only_a = |vertex: VertexId| vertex == a;
/// let mut dfs = DepthFirstSearch::new();
/// dfs.set_vertex_chooser(&only_a);
///
/// let outcome = dfs.search(&graph);
/// assert!(outcome.visited(a));
/// assert!(!outcome.visited(b));
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub trait VertexChooser {
    /// Returns `true` if the given vertex participates in the traversal.
    fn accepts(&self, vertex: VertexId) -> bool;
}

impl<F> VertexChooser for F
where
    F: Fn(VertexId) -> bool,
{
    fn accepts(&self, vertex: VertexId) -> bool {
        self(vertex)
    }
}
