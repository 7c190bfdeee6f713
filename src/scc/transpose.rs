//! Graph transposition.
//!
//! Transposing a directed graph reverses every edge. Because this library
//! never names the caller's concrete graph type, the operation builds the
//! reversed graph through a [`GraphToolkit`] and returns it together with
//! the vertex correspondence between the two graphs: the new graph may use
//! different vertex identifiers, so identity is preserved through the map,
//! not through vertex equality.

use std::collections::HashMap;

use crate::{
    graph::{GraphToolkit, OutgoingEdges, VertexId},
    Error, Result,
};

/// The result of transposing a graph: the reversed graph plus the vertex
/// correspondence in both directions.
///
/// The correspondence lives exactly as long as this value, which ties its
/// lifetime to the transposition that produced it.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{scc::transpose, DirectedGraph, DirectedGraphToolkit, OutgoingEdges};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// graph.add_edge(a, b, ())?;
///
/// let transposed = transpose(&graph, &DirectedGraphToolkit::<(), ()>::new())?;
/// let ta = transposed.transposed_vertex(a).unwrap();
/// let tb = transposed.transposed_vertex(b).unwrap();
///
/// // The only edge now runs b -> a.
/// assert!(transposed.graph().successors(tb).any(|s| s == ta));
/// assert_eq!(transposed.original_vertex(ta), Some(a));
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Debug)]
pub struct Transposed<G> {
    graph: G,
    to_original: HashMap<VertexId, VertexId>,
    from_original: HashMap<VertexId, VertexId>,
}

impl<G> Transposed<G> {
    /// Returns the reversed graph.
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Consumes this value, returning the reversed graph and discarding
    /// the correspondence.
    #[must_use]
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// Maps a vertex of the reversed graph back to the original-graph
    /// vertex it corresponds to.
    #[must_use]
    pub fn original_vertex(&self, transposed: VertexId) -> Option<VertexId> {
        self.to_original.get(&transposed).copied()
    }

    /// Maps an original-graph vertex to its counterpart in the reversed
    /// graph.
    #[must_use]
    pub fn transposed_vertex(&self, original: VertexId) -> Option<VertexId> {
        self.from_original.get(&original).copied()
    }
}

/// Builds a new graph with every edge of `graph` reversed.
///
/// For every vertex of the source a corresponding vertex is created in the
/// toolkit-constructed graph; for every edge `(u, v)` of the source an edge
/// `(v', u')` is added, where `u'`, `v'` are the corresponding vertices.
/// Edge labels are not carried over; they are irrelevant to every algorithm
/// that consumes a transpose.
///
/// # Arguments
///
/// * `graph` - The graph to transpose; not modified
/// * `toolkit` - Construction capability for the result graph's kind
///
/// # Errors
///
/// Fails fast, rather than producing a partial graph, when:
///
/// - [`Error::ToolkitNotEmpty`] - the toolkit's "empty" graph already
///   contains vertices
/// - [`Error::EdgeUnresolvable`] - the source graph reports an outgoing
///   edge it cannot resolve to endpoints
/// - [`Error::VertexNotFound`] - an edge endpoint never appeared in the
///   source graph's vertex iteration
///
/// # Complexity
///
/// O(V + E) plus the toolkit's insertion costs.
pub fn transpose<G, T>(graph: &G, toolkit: &T) -> Result<Transposed<T::Graph>>
where
    G: OutgoingEdges,
    T: GraphToolkit,
{
    use crate::graph::GraphBase;

    let mut reversed = toolkit.empty_graph();
    if reversed.vertex_count() != 0 {
        return Err(Error::ToolkitNotEmpty {
            vertex_count: reversed.vertex_count(),
        });
    }

    let vertex_count = graph.vertex_count();
    let mut to_original = HashMap::with_capacity(vertex_count);
    let mut from_original = HashMap::with_capacity(vertex_count);

    for original in graph.vertices() {
        let counterpart = toolkit.add_vertex(&mut reversed);
        to_original.insert(counterpart, original);
        from_original.insert(original, counterpart);
    }

    for vertex in graph.vertices() {
        for edge in graph.outgoing_edges(vertex) {
            let Some((source, target)) = graph.edge_endpoints(edge) else {
                return Err(Error::EdgeUnresolvable { edge });
            };

            let reversed_source = *from_original.get(&target).ok_or(Error::VertexNotFound {
                vertex: target,
                vertex_count,
            })?;
            let reversed_target = *from_original.get(&source).ok_or(Error::VertexNotFound {
                vertex: source,
                vertex_count,
            })?;

            toolkit.add_edge(&mut reversed, reversed_source, reversed_target)?;
        }
    }

    Ok(Transposed {
        graph: reversed,
        to_original,
        from_original,
    })
}
