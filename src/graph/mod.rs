//! Generic directed graph infrastructure.
//!
//! This module provides the capability contract that all traversal and
//! component algorithms are written against, together with a reference
//! adjacency-list implementation of it.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`EdgeId`], and [`DirectedGraph`] provide
//!   the fundamental building blocks for graph representation
//! - **Capability Traits**: [`GraphBase`], [`OutgoingEdges`], and
//!   [`IncomingEdges`] describe what a graph can answer;
//!   [`GraphToolkit`] describes how to construct one
//! - **Keyed Wrapper**: [`KeyedGraph`] maps domain keys to vertex
//!   identifiers and back
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Vertex and edge identifiers use newtype wrappers to prevent accidental
//! mixing of indices and to give vertices the total order that traversal
//! determinism relies on.
//!
//! ## Immutable During Traversal
//!
//! Graphs are built incrementally, then treated as immutable while any
//! algorithm runs over them. Derived graphs (the transpose in particular)
//! are always constructed fresh through a [`GraphToolkit`], never by
//! mutating the input in place.
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use sccgraph::{DirectedGraph, OutgoingEdges};
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
//!
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! let d = graph.add_vertex("D");
//!
//! graph.add_edge(a, b, "A->B")?;
//! graph.add_edge(a, c, "A->C")?;
//! graph.add_edge(b, d, "B->D")?;
//! graph.add_edge(c, d, "C->D")?;
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! # Ok::<(), sccgraph::Error>(())
//! ```

mod directed;
mod edge;
mod keyed;
mod traits;
mod vertex;

pub use directed::{DirectedGraph, DirectedGraphToolkit};
pub use edge::EdgeId;
pub use keyed::KeyedGraph;
pub use traits::{GraphBase, GraphToolkit, IncomingEdges, OutgoingEdges};
pub use vertex::VertexId;
