//! Strongly connected components via Kosaraju's two-pass algorithm.
//!
//! A strongly connected component (SCC) is a maximal vertex set in which
//! every vertex reaches every other vertex along directed paths. Computing
//! SCCs is the primitive behind recursion detection in call graphs,
//! circular-dependency checks, and ordering analysis passes that depend on
//! one another.
//!
//! # Algorithm
//!
//! [`StronglyConnectedComponents`] composes three operations, in exactly
//! this order (Cormen et al., *Introduction to Algorithms*):
//!
//! 1. Depth-first search the original graph, recording finish times. Root
//!    selection order here affects forest shape only, never correctness.
//! 2. Build the transpose through the caller's [`GraphToolkit`].
//! 3. Order the transpose's vertices by descending first-pass finish time.
//! 4. Depth-first search the transpose using that explicit order for its
//!    outer loop.
//! 5. Each root tree of the second search is exactly one strongly
//!    connected component; translate its vertices back to original-graph
//!    identity through the transpose correspondence.
//!
//! Processing transpose vertices in decreasing first-pass finish time is
//! what guarantees each second-pass tree captures one SCC, no more and no
//! less. Each pass is O(V + E), transposition is O(V + E), and the ordering
//! step is O(V log V).
//!
//! # Examples
//!
//! ```rust,ignore
//! use sccgraph::{
//!     DirectedGraph, DirectedGraphToolkit, StronglyConnectedComponents,
//! };
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
//! let sets: Vec<_> = scc.component_sets().collect();
//! assert_eq!(sets.len(), 2); // {A, B, C} and {D}
//! # Ok::<(), sccgraph::Error>(())
//! ```

mod transpose;

use std::collections::BTreeSet;

use crate::{
    graph::{GraphBase, GraphToolkit, OutgoingEdges, VertexId},
    search::{
        DepthFirstSearch, FinishTimeOrder, SearchForest, SearchOutcome, TimeDirection,
        TreeNodeId, VertexChooser,
    },
    Error, Result,
};

pub use transpose::{transpose, Transposed};

/// Chooser adapter for the second pass: a transposed vertex participates
/// exactly when its original-graph counterpart is accepted.
struct TransposedChooser<'a, G> {
    inner: &'a dyn VertexChooser,
    transposed: &'a Transposed<G>,
}

impl<G> VertexChooser for TransposedChooser<'_, G> {
    fn accepts(&self, vertex: VertexId) -> bool {
        self.transposed
            .original_vertex(vertex)
            .is_some_and(|original| self.inner.accepts(original))
    }
}

/// Kosaraju's algorithm for finding strongly connected components.
///
/// A value of this type is an orchestrator for one graph: configure it with
/// an optional [`VertexChooser`], run
/// [`find_strongly_connected_components`](Self::find_strongly_connected_components)
/// once, then read the results any number of times. Results accumulate
/// across runs rather than reset, so create a fresh instance per graph.
///
/// Reading results before any run yields empty sequences, not an error.
///
/// # Vertex Restriction
///
/// A chooser set before the run restricts participation identically in
/// both search passes; excluded vertices appear in no component, exactly
/// as if the induced subgraph of accepted vertices had been searched
/// unrestricted.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DirectedGraph, DirectedGraphToolkit, StronglyConnectedComponents};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
///
/// let mut scc = StronglyConnectedComponents::new();
/// scc.find_strongly_connected_components(&graph, &DirectedGraphToolkit::<(), ()>::new())?;
///
/// assert_eq!(scc.component_count(), 1);
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Default)]
pub struct StronglyConnectedComponents<'c> {
    chooser: Option<&'c dyn VertexChooser>,
    /// One tree per discovered component, in original-graph identity
    forest: SearchForest,
}

impl<'c> StronglyConnectedComponents<'c> {
    /// Creates an orchestrator with no vertex restriction and no stored
    /// components.
    #[must_use]
    pub fn new() -> Self {
        StronglyConnectedComponents {
            chooser: None,
            forest: SearchForest::new(),
        }
    }

    /// Restricts the computation to vertices accepted by the given chooser.
    ///
    /// Must be called before
    /// [`find_strongly_connected_components`](Self::find_strongly_connected_components);
    /// the restriction applies to both search passes identically.
    pub fn set_vertex_chooser(&mut self, chooser: &'c dyn VertexChooser) {
        self.chooser = Some(chooser);
    }

    /// Finds the strongly connected components of the given graph.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to analyze; treated as immutable for the
    ///   duration of the call
    /// * `toolkit` - Construction capability used to build the temporary
    ///   transposed graph
    ///
    /// # Errors
    ///
    /// Propagates transposition failures ([`Error::ToolkitNotEmpty`],
    /// [`Error::EdgeUnresolvable`], [`Error::VertexNotFound`]); the stored
    /// components are left untouched in that case.
    pub fn find_strongly_connected_components<G, T>(
        &mut self,
        graph: &G,
        toolkit: &T,
    ) -> Result<()>
    where
        G: OutgoingEdges,
        T: GraphToolkit,
    {
        // Pass one: finish times on the original graph.
        let mut initial = DepthFirstSearch::new();
        if let Some(chooser) = self.chooser {
            initial.set_vertex_chooser(chooser);
        }
        let initial = initial.search(graph);

        // Reverse every edge into a toolkit-built graph.
        let transposed = transpose(graph, toolkit)?;

        // Transpose vertices in descending order of first-pass finish time.
        // Vertices the first pass never finished (chooser-excluded) carry
        // no entry and drop out of the order.
        let order = FinishTimeOrder::new(
            transposed.graph().vertices().filter_map(|vertex| {
                transposed
                    .original_vertex(vertex)
                    .and_then(|original| initial.finish_time(original))
                    .map(|finish| (vertex, finish))
            }),
            TimeDirection::Descending,
        );

        // Pass two: every root tree is one component.
        let second = self.run_second_pass(&transposed, &order);

        // Translate each tree from transposed identity back to the
        // original graph before storing it.
        for root in second.forest().roots() {
            self.append_translated(second.forest(), root, &transposed)?;
        }

        Ok(())
    }

    /// Runs the second DFS pass over the transposed graph, reapplying the
    /// configured chooser through the vertex correspondence.
    fn run_second_pass<G>(
        &self,
        transposed: &Transposed<G>,
        order: &FinishTimeOrder,
    ) -> SearchOutcome
    where
        G: OutgoingEdges,
    {
        match self.chooser {
            Some(inner) => {
                let adapted = TransposedChooser { inner, transposed };
                let mut dfs = DepthFirstSearch::new();
                dfs.set_vertex_chooser(&adapted);
                dfs.search_ordered(transposed.graph(), order.vertices())
            }
            None => DepthFirstSearch::new().search_ordered(transposed.graph(), order.vertices()),
        }
    }

    /// Copies one second-pass tree into the stored forest, mapping every
    /// vertex back to original-graph identity. Shape and child order are
    /// preserved; the copy walks an explicit stack.
    fn append_translated<G: GraphBase>(
        &mut self,
        source: &SearchForest,
        root: TreeNodeId,
        transposed: &Transposed<G>,
    ) -> Result<()> {
        let vertex_count = transposed.graph().vertex_count();
        let translate = |vertex: VertexId| -> Result<VertexId> {
            transposed
                .original_vertex(vertex)
                .ok_or(Error::VertexNotFound {
                    vertex,
                    vertex_count,
                })
        };

        let new_root = self.forest.add_node(translate(source.vertex(root))?);
        self.forest.add_root(new_root);

        let mut stack = vec![(root, new_root)];
        while let Some((from, to)) = stack.pop() {
            let children: Vec<TreeNodeId> = source.children(from).collect();
            for child in children {
                let new_child = self.forest.add_node(translate(source.vertex(child))?);
                self.forest.add_child(to, new_child);
                stack.push((child, new_child));
            }
        }

        Ok(())
    }

    /// Returns the stored component forest.
    ///
    /// Each root is the search tree of one strongly connected component,
    /// expressed in original-graph vertices. Tree shape records how the
    /// second pass happened to walk the component; only the vertex
    /// membership is semantically meaningful.
    #[must_use]
    pub fn component_forest(&self) -> &SearchForest {
        &self.forest
    }

    /// Returns an iterator over the component tree roots, in discovery
    /// order.
    ///
    /// Calling this again restarts from the first component.
    pub fn component_forests(&self) -> impl Iterator<Item = TreeNodeId> + '_ {
        self.forest.roots()
    }

    /// Returns a lazy iterator over the vertex set of each component.
    ///
    /// Each set materializes on demand by flattening one stored tree; the
    /// algorithm is not re-run. Calling this again restarts from the first
    /// component.
    #[must_use]
    pub fn component_sets(&self) -> ComponentSets<'_> {
        ComponentSets {
            forest: &self.forest,
            roots: self.forest.roots().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Returns the number of components found so far.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.forest.root_count()
    }
}

/// Lazy iterator over component vertex sets.
///
/// Produced by
/// [`StronglyConnectedComponents::component_sets`]; each call to `next`
/// flattens one stored component tree into an ordered vertex set.
#[derive(Debug)]
pub struct ComponentSets<'a> {
    forest: &'a SearchForest,
    roots: std::vec::IntoIter<TreeNodeId>,
}

impl Iterator for ComponentSets<'_> {
    type Item = BTreeSet<VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.roots.next()?;
        Some(self.forest.vertex_set(root))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.roots.size_hint()
    }
}

impl ExactSizeIterator for ComponentSets<'_> {}
