use std::fmt;

use tracing::debug;

use crate::error::RopeError;
use crate::tree::{Forest, Node, NodeId, SplayTree};

/// One cut-and-paste request.
///
/// `start` and `end` are 0-based and inclusive. `after` counts characters of
/// the remainder (the document with the cut removed): the cut goes right after
/// the `after`-th of them, and `after == 0` puts it at the very beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutPaste {
    pub start: usize,
    pub end: usize,
    pub after: usize,
}

impl CutPaste {
    pub fn new(start: usize, end: usize, after: usize) -> Self {
        Self { start, end, after }
    }
}

impl fmt::Display for CutPaste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.end, self.after)
    }
}

/// A fixed set of characters whose order can be rearranged cheaply.
#[derive(Debug, Default)]
pub struct Rope {
    forest: Forest<char>,
    tree: SplayTree,
}

impl Rope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Add one character at the end. This is how a document is built.
    pub fn push(&mut self, c: char) {
        self.forest.append_as_root(&mut self.tree, c);
    }

    /// Insert a character so that it ends up at `index`.
    pub fn insert(&mut self, index: usize, c: char) -> Result<(), RopeError> {
        self.forest.insert(&mut self.tree, index, c).map(|_| ())
    }

    /// Character at `index`. Takes `&mut self` because the lookup splays.
    pub fn char_at(&mut self, index: usize) -> Result<char, RopeError> {
        let id = self.forest.order_statistic(&mut self.tree, index)?;
        Ok(self.forest[id].value)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.forest.in_order(&self.tree).copied()
    }

    /// Cut `[start, end]` and paste it after the `after`-th character of what
    /// remains. The rope is untouched when any address is out of range.
    pub fn process(&mut self, start: usize, end: usize, after: usize) -> Result<(), RopeError> {
        let len = self.len();
        if start > end || end >= len {
            return Err(RopeError::InvalidRange { start, end, len });
        }
        let remaining = len - (end - start + 1);
        if after > remaining {
            return Err(RopeError::PasteOutOfBounds { offset: after, len: remaining });
        }

        let tree = std::mem::take(&mut self.tree);
        let forest = &mut self.forest;

        let (middle, right) = forest.split(tree, end)?;
        let (left, middle) = if start > 0 { forest.split(middle, start - 1)? } else { (SplayTree::new(), middle) };
        let remainder = forest.merge(left, right);

        let (left, right) = if after > 0 { forest.split(remainder, after - 1)? } else { (SplayTree::new(), remainder) };
        let left = forest.merge(left, middle);
        self.tree = forest.merge(left, right);

        debug!(start, end, after, len, "processed cut-paste");
        Ok(())
    }

    pub fn apply(&mut self, op: CutPaste) -> Result<(), RopeError> {
        self.process(op.start, op.end, op.after)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    pub fn node(&self, id: NodeId) -> &Node<char> {
        &self.forest[id]
    }

    /// Nodes in breadth-first order from the root.
    pub fn level_order(&self) -> Vec<NodeId> {
        self.forest.level_order(&self.tree)
    }

    /// Whether every node's cached size and parent link agree with its
    /// children.
    pub fn is_consistent(&self) -> bool {
        self.forest.first_inconsistent_node(&self.tree).is_none()
    }
}

impl FromIterator<char> for Rope {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut rope = Self { forest: Forest::with_capacity(iter.size_hint().0), tree: SplayTree::new() };
        for c in iter {
            rope.push(c);
        }
        rope
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result: String = self.chars().collect();
        f.write_str(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processed(text: &str, start: usize, end: usize, after: usize) -> String {
        let mut rope = Rope::from(text);
        rope.process(start, end, after).unwrap();
        assert!(rope.is_consistent());
        assert_eq!(rope.len(), text.chars().count());
        rope.to_string()
    }

    #[test]
    fn build_round_trips() {
        assert_eq!(Rope::from("hlelowrold").to_string(), "hlelowrold");
        assert_eq!(Rope::new().to_string(), "");
        assert!(Rope::new().is_empty());
    }

    #[test]
    fn moves_substring_after_offset() {
        assert_eq!(processed("hlelowrold", 1, 2, 2), "hlleowrold");
    }

    #[test]
    fn edge_positions() {
        // cut includes start
        assert_eq!(processed("abcdef", 0, 1, 2), "cdabef");
        // paste at very beginning
        assert_eq!(processed("abcdef", 3, 4, 0), "deabcf");
        // cut includes end
        assert_eq!(processed("abcdef", 4, 5, 1), "aefbcd");
        // single character
        assert_eq!(processed("abcdef", 2, 2, 4), "abdecf");
        // paste at end of remainder
        assert_eq!(processed("abcdef", 0, 2, 3), "defabc");
        // whole document
        assert_eq!(processed("abcdef", 0, 5, 0), "abcdef");
        // pasting back where it was
        assert_eq!(processed("abcdef", 2, 3, 2), "abcdef");
    }

    #[test]
    fn sequence_of_operations() {
        let mut rope = Rope::from("abcdef");
        rope.apply(CutPaste::new(0, 1, 1)).unwrap();
        assert_eq!(rope.to_string(), "cabdef");
        rope.apply(CutPaste::new(4, 5, 0)).unwrap();
        assert_eq!(rope.to_string(), "efcabd");
    }

    #[test]
    fn rejects_bad_addresses_without_changing_anything() {
        let mut rope = Rope::from("abcdef");
        assert_eq!(rope.process(3, 2, 0), Err(RopeError::InvalidRange { start: 3, end: 2, len: 6 }));
        assert_eq!(rope.process(4, 6, 0), Err(RopeError::InvalidRange { start: 4, end: 6, len: 6 }));
        assert_eq!(rope.process(1, 2, 5), Err(RopeError::PasteOutOfBounds { offset: 5, len: 4 }));
        assert_eq!(rope.to_string(), "abcdef");
        assert!(rope.is_consistent());

        let mut empty = Rope::new();
        assert!(empty.process(0, 0, 0).is_err());
    }

    #[test]
    fn char_at_and_insert() {
        let mut rope = Rope::from("rpe");
        rope.insert(1, 'o').unwrap();
        assert_eq!(rope.to_string(), "rope");
        assert_eq!(rope.char_at(2), Ok('p'));
        assert_eq!(rope.char_at(4), Err(RopeError::RankOutOfBounds { rank: 4, len: 4 }));
        rope.insert(4, 's').unwrap();
        assert_eq!(rope.to_string(), "ropes");
    }

    #[test]
    fn level_order_covers_all_nodes() {
        let mut rope = Rope::from("abcdefg");
        rope.char_at(3).unwrap();
        let nodes = rope.level_order();
        assert_eq!(nodes.len(), 7);
        assert_eq!(Some(nodes[0]), rope.root());
        assert_eq!(*rope.node(nodes[0]).value(), 'd');
    }
}
