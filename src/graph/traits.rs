//! Trait definitions for graph abstractions.
//!
//! This module defines the capability contract that lets the traversal and
//! component algorithms work against any concrete graph representation. By
//! programming against these traits, the algorithms in [`crate::search`] and
//! [`crate::scc`] never name a concrete graph type.
//!
//! # Architecture
//!
//! The trait hierarchy is minimal and composable:
//!
//! - [`GraphBase`] - Core properties: vertex count, vertex iteration, and
//!   edge endpoint lookup
//! - [`OutgoingEdges`] - Forward adjacency (outgoing edges of a vertex)
//! - [`IncomingEdges`] - Backward adjacency (incoming edges of a vertex)
//! - [`GraphToolkit`] - Construction capability: build a new empty graph of
//!   a given concrete kind and populate it with vertices and edges
//!
//! The toolkit exists because transposition must produce a *new* graph
//! instance of the caller's concrete kind, which the algorithms themselves
//! cannot name.
//!
//! # Identifier Contract
//!
//! Vertex identifiers are dense indices in `0..vertex_count()`, assigned in
//! insertion order; edge identifiers are dense indices in `0..edge_count`.
//! Algorithms rely on this to key per-run side tables by index instead of
//! attaching transient state to the caller's vertex data.
//!
//! # Design Principles
//!
//! ## Iterator-Based Traversal
//!
//! All adjacency queries return iterators rather than collections, enabling
//! lazy evaluation and avoiding allocations for simple traversals.
//!
//! ## Minimal Requirements
//!
//! Each trait requires only what is necessary for its purpose; a graph type
//! that cannot answer predecessor queries simply does not implement
//! [`IncomingEdges`] and remains usable with every forward algorithm.

use crate::{
    graph::{EdgeId, VertexId},
    Result,
};

/// Base trait providing core graph properties.
///
/// # Required Methods
///
/// - [`vertex_count`](GraphBase::vertex_count) - Total number of vertices
/// - [`vertices`](GraphBase::vertices) - Iterator over all vertex IDs
/// - [`edge_endpoints`](GraphBase::edge_endpoints) - Source and target of an edge
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, GraphBase};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.vertices().count(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    ///
    /// The count includes all vertices regardless of their connectivity.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in the graph.
    ///
    /// The iteration order is the graph's natural order: ascending
    /// `VertexId`, i.e. insertion order. Callers that need a different
    /// order supply one explicitly to the traversal engine.
    fn vertices(&self) -> impl Iterator<Item = VertexId>;

    /// Returns the source and target vertices of the given edge.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge to look up
    ///
    /// # Returns
    ///
    /// `Some((source, target))` if the edge exists, `None` otherwise.
    fn edge_endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)>;
}

/// Trait for graphs that support forward edge traversal.
///
/// This is the capability the depth-first engine and the component
/// orchestrator require: for a given vertex, produce its outgoing edges,
/// each yielding a target vertex.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, OutgoingEdges, VertexId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
///
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let successors: Vec<VertexId> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b, c]);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub trait OutgoingEdges: GraphBase {
    /// Returns an iterator over the outgoing edges of the given vertex.
    ///
    /// Edges are yielded in the order they were added, which fixes the
    /// order in which a depth-first search first explores them.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex whose outgoing edges to iterate
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId>;

    /// Returns an iterator over the successor vertices of the given vertex.
    ///
    /// Successors are the targets of outgoing edges. A vertex with parallel
    /// edges to the same target yields that target once per edge.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex whose successors to iterate
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.outgoing_edges(vertex)
            .filter_map(|edge| self.edge_endpoints(edge).map(|(_, target)| target))
    }
}

/// Trait for graphs that support backward edge traversal.
///
/// Graphs that maintain reverse adjacency can run the reverse depth-first
/// engine directly, without materializing a transposed copy first.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, IncomingEdges, VertexId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
///
/// graph.add_edge(a, c, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let predecessors: Vec<VertexId> = graph.predecessors(c).collect();
/// assert_eq!(predecessors, vec![a, b]);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub trait IncomingEdges: GraphBase {
    /// Returns an iterator over the incoming edges of the given vertex.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex whose incoming edges to iterate
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn incoming_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId>;

    /// Returns an iterator over the predecessor vertices of the given vertex.
    ///
    /// Predecessors are the sources of incoming edges.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex whose predecessors to iterate
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.incoming_edges(vertex)
            .filter_map(|edge| self.edge_endpoints(edge).map(|(source, _)| source))
    }
}

/// Construction capability for a concrete graph kind.
///
/// A toolkit is a factory, not a graph instance: it knows how to allocate a
/// new empty graph of its associated kind and how to add vertices and edges
/// to it. Transposition consumes a toolkit because it must build a fresh
/// graph of the caller's kind with every edge reversed.
///
/// # Preconditions
///
/// The toolkit contract defines no error for duplicate vertex or edge
/// insertion. Callers must avoid duplicates, or the toolkit must tolerate
/// them; this is a documented precondition, not a runtime-checked one. The
/// algorithms in this crate only ever insert each vertex and each reversed
/// edge once.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraphToolkit, GraphBase, GraphToolkit};
///
/// let toolkit = DirectedGraphToolkit::<(), ()>::new();
/// let mut graph = toolkit.empty_graph();
///
/// let a = toolkit.add_vertex(&mut graph);
/// let b = toolkit.add_vertex(&mut graph);
/// toolkit.add_edge(&mut graph, a, b)?;
///
/// assert_eq!(graph.vertex_count(), 2);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub trait GraphToolkit {
    /// The concrete graph kind this toolkit constructs.
    type Graph: OutgoingEdges;

    /// Creates a new empty graph of the associated kind.
    ///
    /// The returned graph must contain no vertices and no edges; the
    /// transposition operation verifies this and fails fast otherwise.
    fn empty_graph(&self) -> Self::Graph;

    /// Adds a vertex to the given graph, returning its identifier.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph under construction
    fn add_vertex(&self, graph: &mut Self::Graph) -> VertexId;

    /// Adds a directed edge from `source` to `target` to the given graph.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph under construction
    /// * `source` - The source vertex of the new edge
    /// * `target` - The target vertex of the new edge
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`](crate::Error::VertexNotFound) if
    /// either endpoint is not a vertex of `graph`.
    fn add_edge(
        &self,
        graph: &mut Self::Graph,
        source: VertexId,
        target: VertexId,
    ) -> Result<EdgeId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal edge-list graph for exercising the trait contract without
    // going through DirectedGraph.
    struct EdgeListGraph {
        vertex_count: usize,
        edges: Vec<(VertexId, VertexId)>,
    }

    impl GraphBase for EdgeListGraph {
        fn vertex_count(&self) -> usize {
            self.vertex_count
        }

        fn vertices(&self) -> impl Iterator<Item = VertexId> {
            (0..self.vertex_count).map(VertexId::new)
        }

        fn edge_endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
            self.edges.get(edge.index()).copied()
        }
    }

    impl OutgoingEdges for EdgeListGraph {
        fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> {
            self.edges
                .iter()
                .enumerate()
                .filter(move |(_, (source, _))| *source == vertex)
                .map(|(i, _)| EdgeId::new(i))
        }
    }

    impl IncomingEdges for EdgeListGraph {
        fn incoming_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> {
            self.edges
                .iter()
                .enumerate()
                .filter(move |(_, (_, target))| *target == vertex)
                .map(|(i, _)| EdgeId::new(i))
        }
    }

    fn diamond() -> EdgeListGraph {
        EdgeListGraph {
            vertex_count: 4,
            edges: vec![
                (VertexId::new(0), VertexId::new(1)),
                (VertexId::new(0), VertexId::new(2)),
                (VertexId::new(1), VertexId::new(3)),
                (VertexId::new(2), VertexId::new(3)),
            ],
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = diamond();
        assert_eq!(graph.vertex_count(), 4);

        let ids: Vec<VertexId> = graph.vertices().collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], VertexId::new(0));
        assert_eq!(ids[3], VertexId::new(3));
    }

    #[test]
    fn test_edge_endpoints() {
        let graph = diamond();
        assert_eq!(
            graph.edge_endpoints(EdgeId::new(0)),
            Some((VertexId::new(0), VertexId::new(1)))
        );
        assert_eq!(graph.edge_endpoints(EdgeId::new(9)), None);
    }

    #[test]
    fn test_default_successors() {
        let graph = diamond();

        let succ: Vec<VertexId> = graph.successors(VertexId::new(0)).collect();
        assert_eq!(succ, vec![VertexId::new(1), VertexId::new(2)]);

        let succ: Vec<VertexId> = graph.successors(VertexId::new(3)).collect();
        assert!(succ.is_empty());
    }

    #[test]
    fn test_default_predecessors() {
        let graph = diamond();

        let pred: Vec<VertexId> = graph.predecessors(VertexId::new(3)).collect();
        assert_eq!(pred, vec![VertexId::new(1), VertexId::new(2)]);

        let pred: Vec<VertexId> = graph.predecessors(VertexId::new(0)).collect();
        assert!(pred.is_empty());
    }
}
