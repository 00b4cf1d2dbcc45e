use tracing::trace;

use super::{Forest, SplayTree};
use crate::error::SplitError;

impl<T> Forest<T> {
    /// Split `tree` after `rank`: the left tree holds ranks `[0, rank]`, the
    /// right tree everything after.
    ///
    /// An out-of-range rank gives `tree` back inside the error.
    pub fn split(&mut self, tree: SplayTree, rank: usize) -> Result<(SplayTree, SplayTree), SplitError> {
        let mut tree = tree;
        let pivot = match self.order_statistic(&mut tree, rank) {
            Ok(pivot) => pivot,
            Err(error) => return Err(SplitError { tree, error }),
        };

        let detached = self[pivot].right.take();
        self.update_size(pivot);
        let left = SplayTree { root: Some(pivot), size: self[pivot].size };

        let right = match detached {
            Some(root) => {
                self[root].parent = None;
                SplayTree { root: Some(root), size: self[root].size }
            }
            None => SplayTree::new(),
        };

        trace!(rank, left = left.size, right = right.size, "split");
        Ok((left, right))
    }

    /// Concatenate two trees of this forest, `left` first.
    ///
    /// An empty side is the identity: the other tree comes back unchanged.
    pub fn merge(&mut self, left: SplayTree, right: SplayTree) -> SplayTree {
        let (Some(left_root), Some(right_root)) = (left.root, right.root) else {
            return if left.is_empty() { right } else { left };
        };

        let mut left = left;
        let max = self.subtree_maximum(&mut left, left_root);
        self[max].right = Some(right_root);
        self[right_root].parent = Some(max);
        self.update_size(max);

        trace!(left = left.size, right = right.size, "merge");
        SplayTree { root: Some(max), size: self[max].size }
    }
}
