#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # sccgraph
//!
//! A generic directed-graph traversal library that computes strongly
//! connected components (SCCs) with Kosaraju's two-pass depth-first-search
//! algorithm. The algorithms are written against a small capability
//! contract rather than a concrete graph type, so any representation that
//! can enumerate its vertices and the outgoing edges of a vertex can be
//! analyzed as-is.
//!
//! ## Features
//!
//! - **Capability-based genericity** - Algorithms require only the
//!   [`GraphBase`]/[`OutgoingEdges`] traits; a [`GraphToolkit`] supplies
//!   the construction capability transposition needs
//! - **Iterative engine** - Depth-first search with discovery/finish
//!   bookkeeping runs on an explicit work stack, so traversal depth is
//!   never bounded by the call stack
//! - **Run-scoped metadata** - Colors, timestamps, and parent links live in
//!   side tables owned by each run, never on the caller's vertices, making
//!   independent runs over one graph safe
//! - **Arena forests** - Search trees are stored by index in a single
//!   vector; copying and flattening them never recurses
//! - **Restricted traversal** - A [`VertexChooser`] limits any computation
//!   to an induced subgraph
//!
//! ## Quick Start
//!
//! Add `sccgraph` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sccgraph = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust,ignore
//! use sccgraph::prelude::*;
//!
//! // A -> B -> C -> A (cycle), C -> D
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! let d = graph.add_vertex("D");
//! graph.add_edge(a, b, ())?;
//! graph.add_edge(b, c, ())?;
//! graph.add_edge(c, a, ())?;
//! graph.add_edge(c, d, ())?;
//!
//! let mut scc = StronglyConnectedComponents::new();
//! scc.find_strongly_connected_components(&graph, &DirectedGraphToolkit::<&str, ()>::new())?;
//!
//! // Two components: {A, B, C} and {D}.
//! assert_eq!(scc.component_count(), 2);
//! # Ok::<(), sccgraph::Error>(())
//! ```
//!
//! ### Domain Keys
//!
//! Consumers that identify vertices by domain values (pass names, type
//! names) can use [`KeyedGraph`] and skip the identifier round trip:
//!
//! ```rust,ignore
//! use sccgraph::KeyedGraph;
//!
//! let mut deps: KeyedGraph<&str, ()> = KeyedGraph::new();
//! deps.add_edge("resolver", "parser", ())?;
//! deps.add_edge("parser", "resolver", ())?;
//!
//! // The mutual dependency surfaces as one cyclic component.
//! assert_eq!(deps.cyclic_components()?.len(), 1);
//! # Ok::<(), sccgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `sccgraph` is organized into three layers, leaf-first:
//!
//! - [`graph`] - Identifiers, capability traits, the [`DirectedGraph`]
//!   reference implementation, and the [`KeyedGraph`] wrapper
//! - [`search`] - The depth-first engine, search forests, vertex choosers,
//!   and finish-time ordering
//! - [`scc`] - Transposition and the Kosaraju orchestrator composing the
//!   layers below
//!
//! ## Concurrency Model
//!
//! The whole computation is a synchronous pure function of
//! `(graph, chooser, toolkit)`: no I/O, no suspension points, no internal
//! locking. The input graph must not be mutated during a call. Because all
//! traversal metadata is run-scoped, independent computations over the same
//! immutable graph may run on different threads without coordination.

pub mod graph;
pub mod prelude;
pub mod scc;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use graph::{
    DirectedGraph, DirectedGraphToolkit, EdgeId, GraphBase, GraphToolkit, IncomingEdges,
    KeyedGraph, OutgoingEdges, VertexId,
};
pub use scc::{ComponentSets, StronglyConnectedComponents, Transposed};
pub use search::{
    DepthFirstSearch, EdgeKind, FinishTimeOrder, ReverseDepthFirstSearch, SearchForest,
    SearchOutcome, TimeDirection, TreeNodeId, VertexChooser,
};
