//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the reference implementation of
//! the graph capability traits, and [`DirectedGraphToolkit`], its matching
//! construction capability. The implementation uses adjacency lists for
//! efficient traversal while keeping full edge data access.

use std::marker::PhantomData;

use crate::{
    graph::{
        edge::EdgeId,
        traits::{GraphBase, GraphToolkit, IncomingEdges, OutgoingEdges},
        vertex::VertexId,
    },
    Error, Result,
};

/// Internal storage for edge endpoints and label.
#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    /// Source vertex of the edge
    source: VertexId,
    /// Target vertex of the edge
    target: VertexId,
    /// User-provided edge label, opaque to all algorithms
    label: E,
}

/// A directed graph with typed vertex data and edge labels.
///
/// `DirectedGraph` is an adjacency-list multigraph suitable for program
/// analysis tasks such as call graphs and dependency graphs. It supports:
///
/// - Generic vertex data (`V`) - Store any data associated with each vertex
/// - Generic edge labels (`E`) - Store any data associated with each edge;
///   labels are irrelevant to every traversal algorithm
/// - Efficient adjacency queries via outgoing and incoming edge lists
///
/// # Memory Layout
///
/// Vertices and edges live in contiguous vectors indexed by [`VertexId`]
/// and [`EdgeId`]; per-vertex adjacency lists store `EdgeId` references.
/// This gives O(1) vertex/edge access and cheap iteration.
///
/// # Mutation Model
///
/// A graph is built incrementally, then treated as immutable for the
/// duration of any traversal. Operations that conceptually "modify" a graph,
/// like transposition, always construct a fresh instance through a
/// [`GraphToolkit`] instead of mutating in place.
///
/// # Thread Safety
///
/// `DirectedGraph<V, E>` is [`Send`] and [`Sync`] when `V` and `E` are,
/// enabling safe concurrent read access after construction.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, OutgoingEdges};
///
/// let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
///
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
///
/// graph.add_edge(a, b, 10)?;
/// graph.add_edge(b, c, 20)?;
/// graph.add_edge(a, c, 30)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.successors(a).count(), 2);
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, E> {
    /// Vertex data storage
    vertices: Vec<V>,
    /// Edge storage
    edges: Vec<EdgeRecord<E>>,
    /// Outgoing edges per vertex
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edges per vertex
    incoming: Vec<Vec<EdgeId>>,
}

impl<V, E> Default for DirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> DirectedGraph<V, E> {
    /// Creates a new empty directed graph.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use sccgraph::DirectedGraph;
    ///
    /// let graph: DirectedGraph<String, ()> = DirectedGraph::new();
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new directed graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_capacity` - Expected number of vertices
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(vertex_capacity),
            incoming: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Adds a new vertex with the given data to the graph.
    ///
    /// The vertex is assigned the next sequential [`VertexId`], starting
    /// from 0.
    ///
    /// # Arguments
    ///
    /// * `data` - The data to associate with this vertex
    ///
    /// # Returns
    ///
    /// The `VertexId` assigned to the new vertex.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use sccgraph::{DirectedGraph, VertexId};
    ///
    /// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
    /// let first = graph.add_vertex("first");
    /// let second = graph.add_vertex("second");
    ///
    /// assert_eq!(first, VertexId::new(0));
    /// assert_eq!(second, VertexId::new(1));
    /// ```
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Adds a directed edge from `source` to `target` with the given label.
    ///
    /// The edge is assigned the next sequential [`EdgeId`], starting from 0.
    /// Parallel edges between the same vertex pair and self-loops are both
    /// allowed.
    ///
    /// # Arguments
    ///
    /// * `source` - The source vertex of the edge
    /// * `target` - The target vertex of the edge
    /// * `label` - The label to associate with this edge
    ///
    /// # Returns
    ///
    /// The `EdgeId` assigned to the new edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either `source` or `target` is
    /// not a vertex of this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, label: E) -> Result<EdgeId> {
        if source.index() >= self.vertices.len() {
            return Err(Error::VertexNotFound {
                vertex: source,
                vertex_count: self.vertices.len(),
            });
        }
        if target.index() >= self.vertices.len() {
            return Err(Error::VertexNotFound {
                vertex: target,
                vertex_count: self.vertices.len(),
            });
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeRecord {
            source,
            target,
            label,
        });

        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);

        Ok(id)
    }

    /// Returns a reference to the data associated with the given vertex.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex to look up
    ///
    /// # Returns
    ///
    /// `Some(&V)` if the vertex exists, `None` otherwise.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&V> {
        self.vertices.get(vertex.index())
    }

    /// Returns a mutable reference to the data associated with the given
    /// vertex.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(vertex.index())
    }

    /// Returns an iterator over all vertices with their identifiers.
    ///
    /// # Returns
    ///
    /// An iterator yielding `(VertexId, &V)` tuples in insertion order.
    pub fn vertex_data(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, data)| (VertexId::new(i), data))
    }

    /// Returns a reference to the label associated with the given edge.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge to look up
    ///
    /// # Returns
    ///
    /// `Some(&E)` if the edge exists, `None` otherwise.
    #[must_use]
    pub fn edge_label(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.label)
    }

    /// Returns a mutable reference to the label associated with the given
    /// edge.
    pub fn edge_label_mut(&mut self, edge: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(edge.index()).map(|e| &mut e.label)
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all edge identifiers in the graph.
    ///
    /// Edges are yielded in the order they were added (ascending `EdgeId`).
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns the out-degree (number of outgoing edges) of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.outgoing[vertex.index()].len()
    }

    /// Returns the in-degree (number of incoming edges) of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    #[must_use]
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.incoming[vertex.index()].len()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V, E> GraphBase for DirectedGraph<V, E> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges.get(edge.index()).map(|e| (e.source, e.target))
    }
}

impl<V, E> OutgoingEdges for DirectedGraph<V, E> {
    fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> {
        self.outgoing[vertex.index()].iter().copied()
    }

    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.outgoing[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].target)
    }
}

impl<V, E> IncomingEdges for DirectedGraph<V, E> {
    fn incoming_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> {
        self.incoming[vertex.index()].iter().copied()
    }

    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.incoming[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].source)
    }
}

/// Construction capability for [`DirectedGraph`].
///
/// The toolkit is a stateless factory: vertices added through it carry
/// `V::default()` data and edges carry `E::default()` labels, since the
/// algorithms that drive a toolkit (transposition in particular) have no
/// domain data to attach.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraphToolkit, GraphBase, GraphToolkit};
///
/// let toolkit = DirectedGraphToolkit::<(), ()>::new();
/// let mut graph = toolkit.empty_graph();
/// let a = toolkit.add_vertex(&mut graph);
/// let b = toolkit.add_vertex(&mut graph);
/// toolkit.add_edge(&mut graph, b, a)?;
///
/// assert_eq!(graph.vertex_count(), 2);
/// # Ok::<(), sccgraph::Error>(())
/// ```
pub struct DirectedGraphToolkit<V = (), E = ()> {
    _marker: PhantomData<fn() -> (V, E)>,
}

impl<V, E> DirectedGraphToolkit<V, E> {
    /// Creates a new toolkit for `DirectedGraph<V, E>`.
    #[must_use]
    pub const fn new() -> Self {
        DirectedGraphToolkit {
            _marker: PhantomData,
        }
    }
}

impl<V, E> Default for DirectedGraphToolkit<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Clone for DirectedGraphToolkit<V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for DirectedGraphToolkit<V, E> {}

impl<V, E> std::fmt::Debug for DirectedGraphToolkit<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DirectedGraphToolkit")
    }
}

impl<V: Default, E: Default> GraphToolkit for DirectedGraphToolkit<V, E> {
    type Graph = DirectedGraph<V, E>;

    fn empty_graph(&self) -> Self::Graph {
        DirectedGraph::new()
    }

    fn add_vertex(&self, graph: &mut Self::Graph) -> VertexId {
        graph.add_vertex(V::default())
    }

    fn add_edge(
        &self,
        graph: &mut Self::Graph,
        source: VertexId,
        target: VertexId,
    ) -> Result<EdgeId> {
        graph.add_edge(source, target, E::default())
    }
}
