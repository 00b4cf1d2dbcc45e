use std::fmt;

/// Index of a node inside its [`Forest`](super::Forest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree vertex holding one value.
///
/// `size` counts the nodes of the subtree rooted here, this one included, and
/// must equal `size(left) + size(right) + 1` whenever the tree is at rest.
/// Ranks are never stored; they fall out of the sizes on descent.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) size: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value, parent: None, left: None, right: None, size: 1 }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_a_single_leaf() {
        let node = Node::new('a');
        assert_eq!(node.size(), 1);
        assert_eq!(node.parent(), None);
        assert_eq!((node.left(), node.right()), (None, None));
        assert_eq!(node.to_string(), "(a, 1)");
    }

    #[test]
    fn node_id_displays_its_index() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}
