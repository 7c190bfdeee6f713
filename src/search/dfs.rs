//! Depth-first search engine with discovery/finish bookkeeping.
//!
//! This module provides [`DepthFirstSearch`] and its backward twin
//! [`ReverseDepthFirstSearch`]. A search walks a graph (optionally
//! restricted to a vertex subset, optionally driven by an explicit root
//! order), assigns every visited vertex a discovery and a finish timestamp
//! from a single monotonic counter, and builds the spanning
//! [`SearchForest`].
//!
//! All per-run metadata (colors, timestamps, parent links) lives in side
//! tables owned by the run and returned inside the [`SearchOutcome`];
//! nothing is ever attached to the caller's vertex data, so independent
//! runs over the same graph cannot influence each other.
//!
//! The engine uses an explicit work stack with enter/exit frames instead of
//! recursion: traversal depth is bounded by available memory, not by the
//! call stack, which matters for the deep dependency chains analysis graphs
//! tend to contain.

use crate::{
    graph::{GraphBase, IncomingEdges, OutgoingEdges, VertexId},
    search::{chooser::VertexChooser, forest::SearchForest},
};

/// Classification of a graph edge relative to a finished search.
///
/// Derived from discovery/finish intervals and parent links, per vertex
/// pair: a pair connected by several parallel edges gets a single
/// classification.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EdgeKind {
    /// The edge discovered its target: the target is a child of the source
    /// in the search forest.
    Tree,
    /// The edge points from a vertex to one of its ancestors in the forest
    /// (self-loops included). Back edges are what make a graph cyclic.
    Back,
    /// The edge points from a vertex to a non-child descendant.
    Forward,
    /// The edge connects two vertices with no ancestor relationship.
    Cross,
}

/// Per-vertex visitation state during a run.
#[derive(Clone, Copy, PartialEq)]
enum Color {
    /// Not yet discovered
    White,
    /// Discovered, exploration in progress
    Gray,
    /// Exploration finished
    Black,
}

/// Work stack frame for the iterative engine.
enum Frame {
    /// Discover the vertex (if still undiscovered) and schedule its
    /// neighbors, remembering which vertex reached it
    Enter {
        vertex: VertexId,
        parent: Option<VertexId>,
    },
    /// All neighbors handled; stamp the finish time
    Exit { vertex: VertexId },
}

/// Adjacency direction hook for the engine.
///
/// The forward and reverse searches differ only in which neighbor set they
/// expand; this trait is that single point of variation.
trait Adjacency<G> {
    fn neighbors(graph: &G, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Forward adjacency: follow outgoing edges.
struct Outgoing;

impl<G: OutgoingEdges> Adjacency<G> for Outgoing {
    fn neighbors(graph: &G, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        graph.successors(vertex)
    }
}

/// Backward adjacency: follow incoming edges.
struct Incoming;

impl<G: IncomingEdges> Adjacency<G> for Incoming {
    fn neighbors(graph: &G, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        graph.predecessors(vertex)
    }
}

/// The result of one depth-first search run.
///
/// Owns the spanning forest and the per-vertex side tables recorded during
/// the run. The tables are exclusively this run's: re-running a search on
/// the same graph produces a fresh `SearchOutcome` with no shared state.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DepthFirstSearch, DirectedGraph};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// graph.add_edge(a, b, ())?;
///
/// let outcome = DepthFirstSearch::new().search(&graph);
/// assert!(outcome.discovery_time(a) < outcome.discovery_time(b));
/// assert!(outcome.finish_time(b) < outcome.finish_time(a));
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Debug)]
pub struct SearchOutcome {
    forest: SearchForest,
    discovery: Vec<Option<u64>>,
    finish: Vec<Option<u64>>,
    parent: Vec<Option<VertexId>>,
}

impl SearchOutcome {
    /// Returns the spanning forest built by the search.
    #[must_use]
    pub fn forest(&self) -> &SearchForest {
        &self.forest
    }

    /// Consumes the outcome, returning the spanning forest.
    #[must_use]
    pub fn into_forest(self) -> SearchForest {
        self.forest
    }

    /// Returns the discovery timestamp of the given vertex, or `None` if
    /// the vertex was not visited.
    #[must_use]
    pub fn discovery_time(&self, vertex: VertexId) -> Option<u64> {
        self.discovery.get(vertex.index()).copied().flatten()
    }

    /// Returns the finish timestamp of the given vertex, or `None` if the
    /// vertex was not visited.
    ///
    /// A vertex finishes only after every vertex it reached that was
    /// undiscovered at its discovery has itself finished, so for every
    /// visited vertex `discovery_time < finish_time`.
    #[must_use]
    pub fn finish_time(&self, vertex: VertexId) -> Option<u64> {
        self.finish.get(vertex.index()).copied().flatten()
    }

    /// Returns the parent of the given vertex in its search tree, or `None`
    /// for roots and unvisited vertices.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` if the search visited the given vertex.
    #[must_use]
    pub fn visited(&self, vertex: VertexId) -> bool {
        self.discovery_time(vertex).is_some()
    }

    /// Returns the number of vertices the search visited.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.discovery.iter().filter(|t| t.is_some()).count()
    }

    /// Returns an iterator over `(vertex, finish time)` pairs for every
    /// visited vertex, in ascending vertex order.
    ///
    /// This is the table a
    /// [`FinishTimeOrder`](crate::search::FinishTimeOrder) is built from.
    pub fn finish_times(&self) -> impl Iterator<Item = (VertexId, u64)> + '_ {
        self.finish
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.map(|t| (VertexId::new(i), t)))
    }

    /// Classifies the edge `(source, target)` relative to this search.
    ///
    /// Returns `None` if either endpoint was not visited. Classification is
    /// per vertex pair; parallel edges share one kind.
    #[must_use]
    pub fn edge_kind(&self, source: VertexId, target: VertexId) -> Option<EdgeKind> {
        let source_discovery = self.discovery_time(source)?;
        let source_finish = self.finish_time(source)?;
        let target_discovery = self.discovery_time(target)?;
        let target_finish = self.finish_time(target)?;

        if self.parent(target) == Some(source) {
            Some(EdgeKind::Tree)
        } else if target_discovery <= source_discovery && source_finish <= target_finish {
            // Target is an ancestor of source; covers self-loops.
            Some(EdgeKind::Back)
        } else if source_discovery < target_discovery && target_finish < source_finish {
            Some(EdgeKind::Forward)
        } else {
            Some(EdgeKind::Cross)
        }
    }
}

/// Depth-first search over the outgoing edges of a graph.
///
/// The engine iterates candidate root vertices, either in the graph's
/// natural order ([`search`](DepthFirstSearch::search)) or in a
/// caller-supplied explicit order
/// ([`search_ordered`](DepthFirstSearch::search_ordered)). Each accepted,
/// undiscovered candidate starts a full depth-first exploration that
/// becomes one tree of the resulting forest.
///
/// An optional [`VertexChooser`] restricts the search to an induced
/// subgraph; rejected vertices are treated as absent.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{DepthFirstSearch, DirectedGraph};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(a, b, ())?;
///
/// let outcome = DepthFirstSearch::new().search(&graph);
///
/// // Two trees: {A, B} rooted at A, and {C}.
/// assert_eq!(outcome.forest().root_count(), 2);
/// # Ok::<(), sccgraph::Error>(())
/// ```
#[derive(Default)]
pub struct DepthFirstSearch<'c> {
    chooser: Option<&'c dyn VertexChooser>,
}

impl<'c> DepthFirstSearch<'c> {
    /// Creates a search with no vertex restriction.
    #[must_use]
    pub fn new() -> Self {
        DepthFirstSearch { chooser: None }
    }

    /// Restricts the search to vertices accepted by the given chooser.
    ///
    /// Must be called before [`search`](DepthFirstSearch::search); the
    /// chooser applies to every run started afterwards.
    pub fn set_vertex_chooser(&mut self, chooser: &'c dyn VertexChooser) {
        self.chooser = Some(chooser);
    }

    /// Runs the search with roots taken in the graph's natural vertex
    /// order.
    pub fn search<G: OutgoingEdges>(&self, graph: &G) -> SearchOutcome {
        run::<G, Outgoing>(graph, self.chooser, graph.vertices())
    }

    /// Runs the search with roots taken from `order`.
    ///
    /// The outer loop considers exactly the vertices yielded by `order`, in
    /// that order; vertices of the graph absent from `order` only appear in
    /// the result if some ordered vertex reaches them.
    pub fn search_ordered<G, I>(&self, graph: &G, order: I) -> SearchOutcome
    where
        G: OutgoingEdges,
        I: IntoIterator<Item = VertexId>,
    {
        run::<G, Outgoing>(graph, self.chooser, order)
    }
}

/// Depth-first search over the incoming edges of a graph.
///
/// Identical to [`DepthFirstSearch`] except that exploration follows edges
/// backwards, so it requires a graph with [`IncomingEdges`] capability.
/// Searching a graph in reverse visits the same vertex sets as searching
/// its transpose forwards, without materializing the transpose.
#[derive(Default)]
pub struct ReverseDepthFirstSearch<'c> {
    chooser: Option<&'c dyn VertexChooser>,
}

impl<'c> ReverseDepthFirstSearch<'c> {
    /// Creates a reverse search with no vertex restriction.
    #[must_use]
    pub fn new() -> Self {
        ReverseDepthFirstSearch { chooser: None }
    }

    /// Restricts the search to vertices accepted by the given chooser.
    pub fn set_vertex_chooser(&mut self, chooser: &'c dyn VertexChooser) {
        self.chooser = Some(chooser);
    }

    /// Runs the reverse search with roots taken in the graph's natural
    /// vertex order.
    pub fn search<G: IncomingEdges>(&self, graph: &G) -> SearchOutcome {
        run::<G, Incoming>(graph, self.chooser, graph.vertices())
    }

    /// Runs the reverse search with roots taken from `order`.
    pub fn search_ordered<G, I>(&self, graph: &G, order: I) -> SearchOutcome
    where
        G: IncomingEdges,
        I: IntoIterator<Item = VertexId>,
    {
        run::<G, Incoming>(graph, self.chooser, order)
    }
}

/// The iterative engine shared by both search directions.
fn run<G, A>(
    graph: &G,
    chooser: Option<&dyn VertexChooser>,
    order: impl IntoIterator<Item = VertexId>,
) -> SearchOutcome
where
    G: GraphBase,
    A: Adjacency<G>,
{
    let vertex_count = graph.vertex_count();

    let mut color = vec![Color::White; vertex_count];
    let mut discovery = vec![None; vertex_count];
    let mut finish = vec![None; vertex_count];
    let mut parent = vec![None; vertex_count];
    let mut tree_node = vec![None; vertex_count];
    let mut forest = SearchForest::new();

    // One counter issues both discovery and finish timestamps, so every
    // timestamp across the whole search is distinct.
    let mut clock: u64 = 0;

    let accepts = |vertex: VertexId| chooser.is_none_or(|c| c.accepts(vertex));

    let mut stack: Vec<Frame> = Vec::new();

    for root in order {
        if root.index() >= vertex_count {
            continue;
        }
        if color[root.index()] != Color::White || !accepts(root) {
            continue;
        }

        stack.push(Frame::Enter {
            vertex: root,
            parent: None,
        });

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter {
                    vertex,
                    parent: via,
                } => {
                    let idx = vertex.index();
                    // The vertex may have been discovered through another
                    // path after this frame was pushed.
                    if color[idx] != Color::White {
                        continue;
                    }

                    color[idx] = Color::Gray;
                    discovery[idx] = Some(clock);
                    clock += 1;
                    parent[idx] = via;

                    let node = forest.add_node(vertex);
                    tree_node[idx] = Some(node);
                    match via.and_then(|p| tree_node[p.index()]) {
                        Some(parent_node) => forest.add_child(parent_node, node),
                        None => forest.add_root(node),
                    }

                    stack.push(Frame::Exit { vertex });

                    // Neighbors are pushed in reverse so the first-explored
                    // edge is expanded first, which fixes child order.
                    let neighbors: Vec<VertexId> = A::neighbors(graph, vertex)
                        .filter(|&n| {
                            n.index() < vertex_count
                                && color[n.index()] == Color::White
                                && accepts(n)
                        })
                        .collect();
                    for &neighbor in neighbors.iter().rev() {
                        stack.push(Frame::Enter {
                            vertex: neighbor,
                            parent: Some(vertex),
                        });
                    }
                }
                Frame::Exit { vertex } => {
                    let idx = vertex.index();
                    color[idx] = Color::Black;
                    finish[idx] = Some(clock);
                    clock += 1;
                }
            }
        }
    }

    SearchOutcome {
        forest,
        discovery,
        finish,
        parent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn linear() -> (DirectedGraph<(), ()>, Vec<VertexId>) {
        // 0 -> 1 -> 2
        let mut graph = DirectedGraph::new();
        let v: Vec<VertexId> = (0..3).map(|_| graph.add_vertex(())).collect();
        graph.add_edge(v[0], v[1], ()).unwrap();
        graph.add_edge(v[1], v[2], ()).unwrap();
        (graph, v)
    }

    fn diamond() -> (DirectedGraph<(), ()>, Vec<VertexId>) {
        // 0 -> 1 -> 3, 0 -> 2 -> 3
        let mut graph = DirectedGraph::new();
        let v: Vec<VertexId> = (0..4).map(|_| graph.add_vertex(())).collect();
        graph.add_edge(v[0], v[1], ()).unwrap();
        graph.add_edge(v[0], v[2], ()).unwrap();
        graph.add_edge(v[1], v[3], ()).unwrap();
        graph.add_edge(v[2], v[3], ()).unwrap();
        (graph, v)
    }

    #[test]
    fn test_linear_times() {
        let (graph, v) = linear();
        let outcome = DepthFirstSearch::new().search(&graph);

        // Discovery order 0, 1, 2; finish order 2, 1, 0.
        assert_eq!(outcome.discovery_time(v[0]), Some(0));
        assert_eq!(outcome.discovery_time(v[1]), Some(1));
        assert_eq!(outcome.discovery_time(v[2]), Some(2));
        assert_eq!(outcome.finish_time(v[2]), Some(3));
        assert_eq!(outcome.finish_time(v[1]), Some(4));
        assert_eq!(outcome.finish_time(v[0]), Some(5));
    }

    #[test]
    fn test_discovery_precedes_finish() {
        let (graph, _) = diamond();
        let outcome = DepthFirstSearch::new().search(&graph);

        for vertex in (0..4).map(VertexId::new) {
            let d = outcome.discovery_time(vertex).unwrap();
            let f = outcome.finish_time(vertex).unwrap();
            assert!(d < f);
        }
    }

    #[test]
    fn test_forest_partitions_visited_vertices() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let v: Vec<VertexId> = (0..5).map(|_| graph.add_vertex(())).collect();
        graph.add_edge(v[0], v[1], ()).unwrap();
        graph.add_edge(v[2], v[3], ()).unwrap();

        let outcome = DepthFirstSearch::new().search(&graph);
        let forest = outcome.forest();

        // Three trees: {0,1}, {2,3}, {4}.
        assert_eq!(forest.root_count(), 3);

        let mut seen = std::collections::BTreeSet::new();
        for root in forest.roots() {
            for vertex in forest.preorder(root) {
                assert!(seen.insert(vertex), "vertex in two trees");
            }
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_parents_and_tree_edges() {
        let (graph, v) = linear();
        let outcome = DepthFirstSearch::new().search(&graph);

        assert_eq!(outcome.parent(v[0]), None);
        assert_eq!(outcome.parent(v[1]), Some(v[0]));
        assert_eq!(outcome.parent(v[2]), Some(v[1]));
        assert_eq!(outcome.edge_kind(v[0], v[1]), Some(EdgeKind::Tree));
        assert_eq!(outcome.edge_kind(v[1], v[2]), Some(EdgeKind::Tree));
    }

    #[test]
    fn test_edge_classification() {
        // 0 -> 1 -> 2, 2 -> 0 (back), 0 -> 2 (forward), plus 3 -> 1 (cross
        // when 3 is searched after the first tree).
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let v: Vec<VertexId> = (0..4).map(|_| graph.add_vertex(())).collect();
        graph.add_edge(v[0], v[1], ()).unwrap();
        graph.add_edge(v[1], v[2], ()).unwrap();
        graph.add_edge(v[2], v[0], ()).unwrap();
        graph.add_edge(v[0], v[2], ()).unwrap();
        graph.add_edge(v[3], v[1], ()).unwrap();

        let outcome = DepthFirstSearch::new().search(&graph);

        assert_eq!(outcome.edge_kind(v[0], v[1]), Some(EdgeKind::Tree));
        assert_eq!(outcome.edge_kind(v[1], v[2]), Some(EdgeKind::Tree));
        assert_eq!(outcome.edge_kind(v[2], v[0]), Some(EdgeKind::Back));
        assert_eq!(outcome.edge_kind(v[0], v[2]), Some(EdgeKind::Forward));
        assert_eq!(outcome.edge_kind(v[3], v[1]), Some(EdgeKind::Cross));
    }

    #[test]
    fn test_self_loop_is_back_edge() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_vertex(());
        graph.add_edge(a, a, ()).unwrap();

        let outcome = DepthFirstSearch::new().search(&graph);
        assert_eq!(outcome.visited_count(), 1);
        assert_eq!(outcome.edge_kind(a, a), Some(EdgeKind::Back));
    }

    #[test]
    fn test_chooser_excludes_vertices_entirely() {
        // 0 -> 1 -> 2; rejecting 1 must leave 2 unreached.
        let (graph, v) = linear();
        let rejected = v[1];
        let chooser = move |vertex: VertexId| vertex != rejected;

        let mut dfs = DepthFirstSearch::new();
        dfs.set_vertex_chooser(&chooser);
        let outcome = dfs.search(&graph);

        assert!(outcome.visited(v[0]));
        assert!(!outcome.visited(v[1]));
        assert!(outcome.visited(v[2])); // reached as its own root
        assert_eq!(outcome.parent(v[2]), None);
        assert_eq!(outcome.forest().root_count(), 2);
    }

    #[test]
    fn test_explicit_order_drives_roots() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let v: Vec<VertexId> = (0..3).map(|_| graph.add_vertex(())).collect();
        graph.add_edge(v[2], v[0], ()).unwrap();

        let outcome =
            DepthFirstSearch::new().search_ordered(&graph, vec![v[2], v[1], v[0]]);

        // 2 is the first root and discovers 0; 1 is next.
        let roots: Vec<VertexId> = outcome
            .forest()
            .roots()
            .map(|r| outcome.forest().vertex(r))
            .collect();
        assert_eq!(roots, vec![v[2], v[1]]);
        assert_eq!(outcome.parent(v[0]), Some(v[2]));
    }

    #[test]
    fn test_order_omitting_vertices_leaves_them_unvisited() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let v: Vec<VertexId> = (0..3).map(|_| graph.add_vertex(())).collect();

        let outcome = DepthFirstSearch::new().search_ordered(&graph, vec![v[1]]);

        assert!(outcome.visited(v[1]));
        assert!(!outcome.visited(v[0]));
        assert!(!outcome.visited(v[2]));
    }

    #[test]
    fn test_out_of_range_order_entries_are_skipped() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_vertex(());

        let outcome =
            DepthFirstSearch::new().search_ordered(&graph, vec![VertexId::new(9), a]);

        assert_eq!(outcome.visited_count(), 1);
        assert!(outcome.visited(a));
    }

    #[test]
    fn test_rerun_is_independent() {
        let (graph, _) = diamond();
        let dfs = DepthFirstSearch::new();

        let first = dfs.search(&graph);
        let second = dfs.search(&graph);

        let a: Vec<(VertexId, u64)> = first.finish_times().collect();
        let b: Vec<(VertexId, u64)> = second.finish_times().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reverse_search_follows_predecessors() {
        let (graph, v) = linear();
        let outcome = ReverseDepthFirstSearch::new().search(&graph);

        // From 0, nothing is reachable backwards; 1 reaches 0; the tree
        // rooted at 0 is a singleton.
        assert_eq!(outcome.parent(v[0]), None);
        assert_eq!(outcome.parent(v[1]), None);
        assert_eq!(outcome.parent(v[2]), None);
        assert!(outcome.visited(v[0]) && outcome.visited(v[1]) && outcome.visited(v[2]));
        assert_eq!(outcome.forest().root_count(), 3);
    }

    #[test]
    fn test_reverse_search_on_cycle() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let v: Vec<VertexId> = (0..3).map(|_| graph.add_vertex(())).collect();
        graph.add_edge(v[0], v[1], ()).unwrap();
        graph.add_edge(v[1], v[2], ()).unwrap();
        graph.add_edge(v[2], v[0], ()).unwrap();

        let outcome = ReverseDepthFirstSearch::new().search(&graph);
        assert_eq!(outcome.forest().root_count(), 1);
        assert_eq!(outcome.visited_count(), 3);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A 100_000-vertex path exercises the explicit work stack.
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let n = 100_000;
        let v: Vec<VertexId> = (0..n).map(|_| graph.add_vertex(())).collect();
        for i in 0..n - 1 {
            graph.add_edge(v[i], v[i + 1], ()).unwrap();
        }

        let outcome = DepthFirstSearch::new().search(&graph);
        assert_eq!(outcome.visited_count(), n);
        assert_eq!(outcome.forest().root_count(), 1);
        assert_eq!(outcome.finish_time(v[0]), Some((2 * n - 1) as u64));
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let outcome = DepthFirstSearch::new().search(&graph);

        assert_eq!(outcome.visited_count(), 0);
        assert!(outcome.forest().is_empty());
        assert_eq!(outcome.finish_times().count(), 0);
    }
}
