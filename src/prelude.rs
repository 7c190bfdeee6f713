//! # sccgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used
//! types and traits of the library. Import it to get the whole working set
//! for building graphs and computing components.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all sccgraph operations
pub use crate::Error;

/// The result type used throughout sccgraph
pub use crate::Result;

// ================================================================================================
// Graph Representation
// ================================================================================================

/// Strongly-typed vertex and edge identifiers
pub use crate::graph::{EdgeId, VertexId};

/// The reference graph implementation and its construction toolkit
pub use crate::graph::{DirectedGraph, DirectedGraphToolkit};

/// Domain-keyed graph wrapper
pub use crate::graph::KeyedGraph;

/// Capability traits any analyzable graph satisfies
pub use crate::graph::{GraphBase, GraphToolkit, IncomingEdges, OutgoingEdges};

// ================================================================================================
// Traversal
// ================================================================================================

/// The depth-first engine, forward and backward
pub use crate::search::{DepthFirstSearch, ReverseDepthFirstSearch};

/// Search results: forests, per-run metadata, and edge classification
pub use crate::search::{EdgeKind, SearchForest, SearchOutcome, TreeNodeId};

/// Traversal restriction and ordering
pub use crate::search::{FinishTimeOrder, TimeDirection, VertexChooser};

// ================================================================================================
// Strongly Connected Components
// ================================================================================================

/// The Kosaraju orchestrator and its lazy component-set iterator
pub use crate::scc::{ComponentSets, StronglyConnectedComponents};

/// Transposition
pub use crate::scc::{transpose, Transposed};
