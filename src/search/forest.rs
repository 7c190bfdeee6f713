//! Arena-backed search trees and forests.
//!
//! A depth-first search produces a spanning forest: one tree per root, with
//! children ordered by discovery. This module stores every tree node of a
//! forest in a single arena vector, referenced by [`TreeNodeId`] index.
//! Nodes are never boxed individually and traversal uses explicit stacks,
//! so tree depth is not bounded by the call stack and dropping a forest is
//! a single deallocation.

use std::collections::BTreeSet;

use crate::graph::VertexId;

/// Index of a tree node within a [`SearchForest`] arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TreeNodeId(usize);

impl TreeNodeId {
    /// Returns the raw arena index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One node of a search tree: the vertex it owns plus its ordered children.
#[derive(Debug, Clone)]
struct TreeNode {
    vertex: VertexId,
    children: Vec<TreeNodeId>,
}

/// A forest of search trees produced by one depth-first search.
///
/// Each root corresponds to one tree, in the order the roots were selected
/// by the search's outer loop; each node owns exactly one vertex, and a
/// node's children appear in the order their connecting edges were first
/// explored. The roots partition the visited vertex set: every visited
/// vertex appears in exactly one tree.
///
/// Read accessors are restartable: [`roots`](SearchForest::roots) and
/// [`preorder`](SearchForest::preorder) produce a fresh iterator on every
/// call, even though a single iterator is not resumable once exhausted.
///
/// # Examples
///
/// ```rust,ignore
/// use sccgraph::{SearchForest, VertexId};
///
/// let mut forest = SearchForest::new();
/// let root = forest.add_node(VertexId::new(0));
/// forest.add_root(root);
/// let child = forest.add_node(VertexId::new(1));
/// forest.add_child(root, child);
///
/// let visited: Vec<VertexId> = forest.preorder(root).collect();
/// assert_eq!(visited, vec![VertexId::new(0), VertexId::new(1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchForest {
    /// Arena storage for every node of every tree
    nodes: Vec<TreeNode>,
    /// Tree roots, in discovery order
    roots: Vec<TreeNodeId>,
}

impl SearchForest {
    /// Creates a new empty forest.
    #[must_use]
    pub fn new() -> Self {
        SearchForest {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Allocates a new tree node owning the given vertex.
    ///
    /// The node starts detached: it belongs to no tree until it is either
    /// registered as a root or attached as a child.
    pub fn add_node(&mut self, vertex: VertexId) -> TreeNodeId {
        let id = TreeNodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            vertex,
            children: Vec::new(),
        });
        id
    }

    /// Registers a node as the root of a new tree.
    ///
    /// Roots keep the order in which they were registered.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this forest.
    pub fn add_root(&mut self, node: TreeNodeId) {
        assert!(node.index() < self.nodes.len());
        self.roots.push(node);
    }

    /// Appends `child` to the child list of `parent`.
    ///
    /// Children keep the order in which they were attached.
    ///
    /// # Panics
    ///
    /// Panics if either identifier is not a node of this forest.
    pub fn add_child(&mut self, parent: TreeNodeId, child: TreeNodeId) {
        assert!(child.index() < self.nodes.len());
        self.nodes[parent.index()].children.push(child);
    }

    /// Returns the vertex owned by the given node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this forest.
    #[must_use]
    pub fn vertex(&self, node: TreeNodeId) -> VertexId {
        self.nodes[node.index()].vertex
    }

    /// Returns an iterator over the children of the given node, in
    /// attachment order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this forest.
    pub fn children(&self, node: TreeNodeId) -> impl Iterator<Item = TreeNodeId> + '_ {
        self.nodes[node.index()].children.iter().copied()
    }

    /// Returns an iterator over the tree roots, in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = TreeNodeId> + '_ {
        self.roots.iter().copied()
    }

    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns the total number of nodes across all trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the forest contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a preorder iterator over the vertices of the tree rooted at
    /// `root`.
    ///
    /// A node's vertex is yielded before any of its descendants; siblings
    /// are visited in attachment order. Calling this again restarts from
    /// the root.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a node of this forest (the panic surfaces on
    /// the first `next()` call).
    #[must_use]
    pub fn preorder(&self, root: TreeNodeId) -> Preorder<'_> {
        Preorder {
            forest: self,
            stack: vec![root],
        }
    }

    /// Returns the set of vertices in the tree rooted at `root`.
    ///
    /// The set is ordered by the vertex total order, independent of tree
    /// shape.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a node of this forest.
    #[must_use]
    pub fn vertex_set(&self, root: TreeNodeId) -> BTreeSet<VertexId> {
        self.preorder(root).collect()
    }

    /// Returns the number of vertices in the tree rooted at `root`.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a node of this forest.
    #[must_use]
    pub fn tree_size(&self, root: TreeNodeId) -> usize {
        self.preorder(root).count()
    }
}

/// Preorder vertex iterator over one tree of a [`SearchForest`].
///
/// Uses an explicit stack, so iteration depth is independent of the call
/// stack.
#[derive(Debug)]
pub struct Preorder<'f> {
    forest: &'f SearchForest,
    stack: Vec<TreeNodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let record = &self.forest.nodes[node.index()];

        // Children pushed in reverse so the first-attached child pops first.
        for &child in record.children.iter().rev() {
            self.stack.push(child);
        }

        Some(record.vertex)
    }
}
