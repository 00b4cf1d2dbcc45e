use std::{
    cmp::Ordering,
    ops::{Index, IndexMut},
};

use tracing::trace;

use super::{Node, NodeId};
use crate::error::RopeError;

/// Handle to one splay tree living in a [`Forest`].
///
/// The handle owns its root: `split` and `merge` take trees by value, so a
/// tree that has been split or merged away cannot be used again.
#[derive(Debug, Default)]
pub struct SplayTree {
    pub(crate) root: Option<NodeId>,
    pub(crate) size: usize,
}

impl SplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Arena of nodes shared by any number of disjoint splay trees.
///
/// Links between nodes are indices into the arena; a node belongs to exactly
/// one [`SplayTree`] at a time.
#[derive(Debug)]
pub struct Forest<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Forest<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<NodeId> for Forest<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self[id]
    }

    fn alloc(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value));
        id
    }

    pub(crate) fn size_of(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self[id].size)
    }

    /// Recompute the cached size of `id` from its direct children.
    pub(crate) fn update_size(&mut self, id: NodeId) {
        let node = &self[id];
        let size = self.size_of(node.left) + self.size_of(node.right) + 1;
        self[id].size = size;
    }

    /// Put `child` where `old` used to hang below `parent`, or make it the
    /// root of `tree` when there is no parent.
    fn replace_child(&mut self, tree: &mut SplayTree, parent: Option<NodeId>, old: NodeId, child: NodeId) {
        self[child].parent = parent;
        match parent {
            Some(parent) if self[parent].left == Some(old) => self[parent].left = Some(child),
            Some(parent) => self[parent].right = Some(child),
            None => tree.root = Some(child),
        }
    }

    /// Rotate `id` down to the right, lifting its left child.
    ///
    /// Returns `false` without touching anything when there is no left child.
    pub(crate) fn rotate_right(&mut self, tree: &mut SplayTree, id: NodeId) -> bool {
        let Some(pivot) = self[id].left else {
            trace!(node = %id, "cannot rotate right, left child absent");
            return false;
        };

        let parent = self[id].parent;
        let inner = self[pivot].right;
        self.replace_child(tree, parent, id, pivot);

        self[id].parent = Some(pivot);
        self[pivot].right = Some(id);
        if let Some(inner) = inner {
            self[inner].parent = Some(id);
        }
        self[id].left = inner;

        self.update_size(id);
        self.update_size(pivot);
        true
    }

    /// Rotate `id` down to the left, lifting its right child.
    ///
    /// Returns `false` without touching anything when there is no right child.
    pub(crate) fn rotate_left(&mut self, tree: &mut SplayTree, id: NodeId) -> bool {
        let Some(pivot) = self[id].right else {
            trace!(node = %id, "cannot rotate left, right child absent");
            return false;
        };

        let parent = self[id].parent;
        let inner = self[pivot].left;
        self.replace_child(tree, parent, id, pivot);

        self[id].parent = Some(pivot);
        self[pivot].left = Some(id);
        if let Some(inner) = inner {
            self[inner].parent = Some(id);
        }
        self[id].right = inner;

        self.update_size(id);
        self.update_size(pivot);
        true
    }

    /// Move `id` to the root of `tree` with zig, zig-zig and zig-zag steps.
    pub(crate) fn splay(&mut self, tree: &mut SplayTree, id: NodeId) {
        while let Some(parent) = self[id].parent {
            let is_left = self[parent].left == Some(id);

            let Some(grand) = self[parent].parent else {
                // zig
                if is_left {
                    self.rotate_right(tree, parent);
                } else {
                    self.rotate_left(tree, parent);
                }
                continue;
            };

            let parent_is_left = self[grand].left == Some(parent);
            match (is_left, parent_is_left) {
                // zig-zig
                (true, true) => {
                    self.rotate_right(tree, grand);
                    self.rotate_right(tree, parent);
                }
                (false, false) => {
                    self.rotate_left(tree, grand);
                    self.rotate_left(tree, parent);
                }
                // zig-zag
                (true, false) => {
                    self.rotate_right(tree, parent);
                    self.rotate_left(tree, grand);
                }
                (false, true) => {
                    self.rotate_left(tree, parent);
                    self.rotate_right(tree, grand);
                }
            }
        }
    }

    /// Find the node of 0-based in-order `rank` and splay it to the root.
    pub fn order_statistic(&mut self, tree: &mut SplayTree, rank: usize) -> Result<NodeId, RopeError> {
        let out_of_bounds = RopeError::RankOutOfBounds { rank, len: tree.size };
        if rank >= tree.size {
            return Err(out_of_bounds);
        }
        let Some(mut id) = tree.root else {
            return Err(out_of_bounds);
        };

        let mut k = rank;
        loop {
            let node = &self[id];
            let s = self.size_of(node.left);
            match (k.cmp(&s), node.left, node.right) {
                (Ordering::Less, Some(left), _) => id = left,
                (Ordering::Greater, _, Some(right)) => {
                    k -= s + 1;
                    id = right;
                }
                _ => break,
            }
        }

        self.splay(tree, id);
        Ok(id)
    }

    /// Add `value` as the new root with the whole current tree as its left
    /// subtree, so it lands after every existing element.
    ///
    /// This is the construction primitive: feeding a sequence in order
    /// rebuilds it exactly.
    pub fn append_as_root(&mut self, tree: &mut SplayTree, value: T) -> NodeId {
        let id = self.alloc(value);
        if let Some(root) = tree.root {
            self[root].parent = Some(id);
            self[id].left = Some(root);
        }
        self.update_size(id);
        tree.root = Some(id);
        tree.size += 1;
        id
    }

    /// Insert `value` so that it ends up at `rank`, `0 <= rank <= len`.
    ///
    /// The new node becomes the root of `tree`.
    pub fn insert(&mut self, tree: &mut SplayTree, rank: usize, value: T) -> Result<NodeId, RopeError> {
        if rank > tree.size {
            return Err(RopeError::RankOutOfBounds { rank, len: tree.size });
        }

        if rank == tree.size {
            if rank > 0 {
                // brings the last node to the root first
                self.order_statistic(tree, rank - 1)?;
            }
            return Ok(self.append_as_root(tree, value));
        }

        let right = self.order_statistic(tree, rank)?;
        let id = self.alloc(value);
        let left = self[right].left.take();
        if let Some(left) = left {
            self[left].parent = Some(id);
        }
        self[id].left = left;
        self[id].right = Some(right);
        self[right].parent = Some(id);

        self.update_size(right);
        self.update_size(id);
        tree.root = Some(id);
        tree.size += 1;
        Ok(id)
    }

    /// Walk right from `id` to the highest-rank node of its subtree and
    /// splay that node to the root of `tree`.
    pub fn subtree_maximum(&mut self, tree: &mut SplayTree, id: NodeId) -> NodeId {
        let mut id = id;
        while let Some(right) = self[id].right {
            id = right;
        }
        self.splay(tree, id);
        id
    }
}
