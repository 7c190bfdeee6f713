use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// The generic error type covering all failures this library can return.
///
/// Graph inputs that are merely unusual - empty graphs, disconnected graphs,
/// self-loops, fully cyclic graphs - are valid and produce well-defined
/// results; they never surface as errors. The variants below are reserved
/// for precondition violations that indicate a broken graph or toolkit
/// implementation, and the algorithms fail fast on them rather than
/// producing a partial result.
///
/// # Error Categories
///
/// ## Graph Structure Errors
/// - [`Error::VertexNotFound`] - An operation referenced a vertex that is
///   not part of the graph's own vertex set
/// - [`Error::EdgeUnresolvable`] - A graph reported an edge it cannot
///   resolve to endpoints
///
/// ## Toolkit Errors
/// - [`Error::ToolkitNotEmpty`] - A graph toolkit failed to construct a
///   valid empty graph
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, Error, VertexId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
///
/// match graph.add_edge(a, VertexId::new(7), ()) {
///     Err(Error::VertexNotFound { vertex, vertex_count }) => {
///         eprintln!("no vertex {} among {} vertices", vertex, vertex_count);
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An operation referenced a vertex that is not in the graph.
    ///
    /// This occurs when an edge is inserted with an endpoint outside the
    /// graph's vertex set, or when a graph's own edge query yields a vertex
    /// it never reported via vertex iteration. Both cases indicate a
    /// malformed graph rather than a recoverable condition.
    #[error("vertex {vertex} does not exist in a graph with {vertex_count} vertices")]
    VertexNotFound {
        /// The offending vertex identifier
        vertex: VertexId,
        /// Number of vertices actually present in the graph
        vertex_count: usize,
    },

    /// A graph reported an edge it cannot resolve to endpoints.
    ///
    /// Raised when an edge identifier yielded by adjacency iteration has no
    /// endpoints, which means the graph implementation violates its own
    /// capability contract.
    #[error("edge {edge} has no endpoints in its own graph")]
    EdgeUnresolvable {
        /// The offending edge identifier
        edge: EdgeId,
    },

    /// A graph toolkit produced a supposedly empty graph that already
    /// contains vertices.
    ///
    /// Transposition starts from a toolkit-constructed empty graph and
    /// populates it with a vertex per source vertex. A non-empty starting
    /// graph would silently corrupt the vertex correspondence, so this is
    /// checked up front.
    #[error("graph toolkit produced an \"empty\" graph that already contains {vertex_count} vertices")]
    ToolkitNotEmpty {
        /// Number of vertices found in the freshly constructed graph
        vertex_count: usize,
    },
}

/// The result type used throughout this library.
pub type Result<T> = std::result::Result<T, Error>;
