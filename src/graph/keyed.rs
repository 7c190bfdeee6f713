//! Keyed graph wrapper for domain-typed vertices.
//!
//! This module provides [`KeyedGraph`], a convenience wrapper around
//! [`DirectedGraph`] that maintains the mapping between domain keys (method
//! names, pass identifiers, type names) and internal [`VertexId`] indices.
//!
//! # Motivation
//!
//! Consumers such as a dependency-cycle checker or an analysis-pass
//! scheduler usually hold vertex identity as a domain value, not as an
//! index. Working with the algorithms then means:
//!
//! 1. Build a graph from domain values
//! 2. Run algorithms that speak `VertexId`
//! 3. Map results back to domain values
//!
//! `KeyedGraph` encapsulates that round trip.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sccgraph::KeyedGraph;
//!
//! let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();
//! graph.add_edge("parser", "lexer", ())?;
//! graph.add_edge("lexer", "parser", ())?; // mutual dependency
//! graph.add_edge("codegen", "parser", ())?;
//!
//! let components = graph.strongly_connected_components()?;
//! assert_eq!(components.len(), 2); // {parser, lexer} and {codegen}
//! # Ok::<(), sccgraph::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    graph::{DirectedGraph, DirectedGraphToolkit, OutgoingEdges, VertexId},
    scc::StronglyConnectedComponents,
    Result,
};

/// A graph wrapper providing automatic mapping between domain keys and
/// [`VertexId`].
///
/// `KeyedGraph<K, E>` stores vertices indexed by keys of type `K` (which
/// must be `Hash + Eq + Clone`) and edges labeled with `E`. It maintains
/// bidirectional mappings for lookups in both directions.
///
/// # Type Parameters
///
/// * `K` - The domain key type for vertices
/// * `E` - The edge label type
#[derive(Debug, Clone)]
pub struct KeyedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// The underlying directed graph; keys live in the side maps
    graph: DirectedGraph<(), E>,
    /// Map from domain key to `VertexId`
    key_to_vertex: HashMap<K, VertexId>,
    /// Map from `VertexId` to domain key
    vertex_to_key: HashMap<VertexId, K>,
}

impl<K, E> Default for KeyedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> KeyedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty keyed graph.
    #[must_use]
    pub fn new() -> Self {
        KeyedGraph {
            graph: DirectedGraph::new(),
            key_to_vertex: HashMap::new(),
            vertex_to_key: HashMap::new(),
        }
    }

    /// Creates a new keyed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        KeyedGraph {
            graph: DirectedGraph::with_capacity(vertex_capacity, edge_capacity),
            key_to_vertex: HashMap::with_capacity(vertex_capacity),
            vertex_to_key: HashMap::with_capacity(vertex_capacity),
        }
    }

    /// Adds a vertex with the given key, or returns the existing `VertexId`
    /// if the key is already present.
    ///
    /// This method is idempotent: calling it repeatedly with the same key
    /// always returns the same `VertexId`.
    pub fn add_vertex(&mut self, key: K) -> VertexId {
        if let Some(&vertex) = self.key_to_vertex.get(&key) {
            return vertex;
        }

        let vertex = self.graph.add_vertex(());
        self.key_to_vertex.insert(key.clone(), vertex);
        self.vertex_to_key.insert(vertex, key);
        vertex
    }

    /// Adds a directed edge between two vertices identified by their keys.
    ///
    /// Missing endpoint vertices are created automatically. An edge that
    /// already exists between the pair is not duplicated.
    ///
    /// # Arguments
    ///
    /// * `from` - The source vertex key
    /// * `to` - The target vertex key
    /// * `label` - The edge label
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a new edge was added, `Ok(false)` if the edge already
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the edge.
    pub fn add_edge(&mut self, from: K, to: K, label: E) -> Result<bool> {
        let source = self.add_vertex(from);
        let target = self.add_vertex(to);

        if self.graph.successors(source).any(|s| s == target) {
            return Ok(false);
        }

        self.graph.add_edge(source, target, label)?;
        Ok(true)
    }

    /// Returns the `VertexId` for a given key, if it exists.
    #[must_use]
    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.key_to_vertex.get(key).copied()
    }

    /// Returns the key for a given `VertexId`, if it exists.
    #[must_use]
    pub fn key(&self, vertex: VertexId) -> Option<&K> {
        self.vertex_to_key.get(&vertex)
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.key_to_vertex.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_to_vertex.is_empty()
    }

    /// Returns a reference to the underlying [`DirectedGraph`].
    ///
    /// Useful for passing the graph to algorithms that work with the
    /// capability traits directly.
    #[must_use]
    pub fn inner(&self) -> &DirectedGraph<(), E> {
        &self.graph
    }

    /// Returns an iterator over all keys in the graph.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.key_to_vertex.keys()
    }

    /// Maps a sequence of `VertexId`s back to domain keys.
    ///
    /// Vertices without a corresponding key are skipped.
    pub fn map_vertices_to_keys(&self, vertices: impl IntoIterator<Item = VertexId>) -> Vec<K> {
        vertices
            .into_iter()
            .filter_map(|vertex| self.vertex_to_key.get(&vertex).cloned())
            .collect()
    }
}

// Component convenience methods
impl<K, E> KeyedGraph<K, E>
where
    K: Hash + Eq + Clone,
    E: Default,
{
    /// Computes the strongly connected components of this graph.
    ///
    /// Each component is returned as a vector of domain keys; the keys of
    /// one component are in ascending order of their internal `VertexId`
    /// (insertion order).
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying component computation.
    pub fn strongly_connected_components(&self) -> Result<Vec<Vec<K>>> {
        let toolkit = DirectedGraphToolkit::<(), E>::new();
        let mut scc = StronglyConnectedComponents::new();
        scc.find_strongly_connected_components(&self.graph, &toolkit)?;
        Ok(scc
            .component_sets()
            .map(|set| self.map_vertices_to_keys(set))
            .collect())
    }

    /// Computes strongly connected components among the keys accepted by
    /// `filter`.
    ///
    /// Keys rejected by the filter take no part in the computation, exactly
    /// as if the graph had been rebuilt without them: they are absent from
    /// every component, and edges touching them are ignored.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying component computation.
    pub fn strongly_connected_components_among<F>(&self, filter: F) -> Result<Vec<Vec<K>>>
    where
        F: Fn(&K) -> bool,
    {
        let chooser = |vertex: VertexId| self.key(vertex).is_some_and(|key| filter(key));
        let toolkit = DirectedGraphToolkit::<(), E>::new();
        let mut scc = StronglyConnectedComponents::new();
        scc.set_vertex_chooser(&chooser);
        scc.find_strongly_connected_components(&self.graph, &toolkit)?;
        Ok(scc
            .component_sets()
            .map(|set| self.map_vertices_to_keys(set))
            .collect())
    }

    /// Returns the components that contain a cycle: every component with
    /// more than one vertex, plus every singleton whose vertex carries a
    /// self-loop.
    ///
    /// This is the primitive a dependency-cycle checker wants: an empty
    /// result means the graph is acyclic.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying component computation.
    pub fn cyclic_components(&self) -> Result<Vec<Vec<K>>> {
        let toolkit = DirectedGraphToolkit::<(), E>::new();
        let mut scc = StronglyConnectedComponents::new();
        scc.find_strongly_connected_components(&self.graph, &toolkit)?;

        let mut cyclic = Vec::new();
        for set in scc.component_sets() {
            let is_cycle = set.len() > 1
                || set
                    .iter()
                    .any(|&v| self.graph.successors(v).any(|s| s == v));
            if is_cycle {
                cyclic.push(self.map_vertices_to_keys(set));
            }
        }
        Ok(cyclic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_graph_basic() {
        let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();

        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertex_id(&"A"), Some(a));
        assert_eq!(graph.vertex_id(&"B"), Some(b));
        assert_eq!(graph.key(a), Some(&"A"));
        assert_eq!(graph.key(b), Some(&"B"));
    }

    #[test]
    fn test_keyed_graph_idempotent_add() {
        let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();

        let a1 = graph.add_vertex("A");
        let a2 = graph.add_vertex("A");

        assert_eq!(a1, a2);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_keyed_graph_add_edge() {
        let mut graph: KeyedGraph<&str, i32> = KeyedGraph::new();

        assert!(graph.add_edge("A", "B", 10).unwrap());
        assert!(graph.add_edge("B", "C", 20).unwrap());

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        // Duplicate edge not added.
        assert!(!graph.add_edge("A", "B", 10).unwrap());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_keyed_graph_components() {
        let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();

        graph.add_edge("A", "B", ()).unwrap();
        graph.add_edge("B", "A", ()).unwrap();
        graph.add_edge("B", "C", ()).unwrap();

        let components = graph.strongly_connected_components().unwrap();
        assert_eq!(components.len(), 2);

        let mut sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn test_keyed_graph_components_among() {
        let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();

        // Cycle A -> B -> C -> A, but C is filtered out.
        graph.add_edge("A", "B", ()).unwrap();
        graph.add_edge("B", "C", ()).unwrap();
        graph.add_edge("C", "A", ()).unwrap();

        let components = graph
            .strongly_connected_components_among(|key| *key != "C")
            .unwrap();

        assert_eq!(components.len(), 2);
        for component in &components {
            assert_eq!(component.len(), 1);
            assert_ne!(component[0], "C");
        }
    }

    #[test]
    fn test_keyed_graph_cyclic_components() {
        let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();

        graph.add_edge("A", "B", ()).unwrap();
        graph.add_edge("B", "A", ()).unwrap();
        graph.add_edge("B", "C", ()).unwrap();
        graph.add_edge("D", "D", ()).unwrap(); // self-loop
        graph.add_vertex("E"); // isolated

        let mut cyclic = graph.cyclic_components().unwrap();
        for component in &mut cyclic {
            component.sort_unstable();
        }
        cyclic.sort();

        assert_eq!(cyclic, vec![vec!["A", "B"], vec!["D"]]);
    }

    #[test]
    fn test_keyed_graph_acyclic_has_no_cyclic_components() {
        let mut graph: KeyedGraph<&str, ()> = KeyedGraph::new();

        graph.add_edge("A", "B", ()).unwrap();
        graph.add_edge("B", "C", ()).unwrap();

        assert!(graph.cyclic_components().unwrap().is_empty());
    }

    #[test]
    fn test_keyed_graph_with_integers() {
        let mut graph: KeyedGraph<i32, &str> = KeyedGraph::new();

        graph.add_edge(1, 2, "one-two").unwrap();
        graph.add_edge(2, 3, "two-three").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.strongly_connected_components().unwrap().len(), 3);
    }
}
