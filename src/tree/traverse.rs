use std::collections::VecDeque;

use super::{Forest, NodeId, SplayTree};

/// In-order iterator over the values of one tree.
///
/// Uses an explicit stack, so degenerate trees (a fresh build is a single
/// left chain) don't overflow the call stack.
pub struct InOrder<'a, T> {
    forest: &'a Forest<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let forest = self.forest;
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = forest[id].left;
        }

        let id = self.stack.pop()?;
        self.current = forest[id].right;
        Some(&forest[id].value)
    }
}

impl<T> Forest<T> {
    pub fn in_order<'a>(&'a self, tree: &SplayTree) -> InOrder<'a, T> {
        InOrder { forest: self, stack: Vec::new(), current: tree.root }
    }

    /// Breadth-first listing of the nodes of `tree`, for inspection.
    pub fn level_order(&self, tree: &SplayTree) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(tree.size);
        let mut queue: VecDeque<NodeId> = tree.root.into_iter().collect();

        while let Some(id) = queue.pop_front() {
            result.push(id);
            queue.extend(self[id].left);
            queue.extend(self[id].right);
        }

        result
    }

    /// First node, in level order, whose cached size or child back-link
    /// disagrees with its children. A tree whose recorded length differs from
    /// its root's size reports the root.
    pub fn first_inconsistent_node(&self, tree: &SplayTree) -> Option<NodeId> {
        if let Some(root) = tree.root {
            if self[root].parent.is_some() || self[root].size != tree.size {
                return Some(root);
            }
        }

        self.level_order(tree).into_iter().find(|&id| {
            let node = &self[id];
            let links_back = |child: Option<NodeId>| child.map_or(true, |c| self[c].parent == Some(id));
            node.size != self.size_of(node.left) + self.size_of(node.right) + 1
                || !links_back(node.left)
                || !links_back(node.right)
        })
    }
}
