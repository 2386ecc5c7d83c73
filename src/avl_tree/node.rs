use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// Nodes are only reachable through a tree; the accessors below expose them for inspection.
#[derive(Debug, Serialize)]
pub struct Node {
    pub(super) value: f32,
    pub(super) height: usize,
    pub(super) left: tree::Tree,
    pub(super) right: tree::Tree,
}

impl Node {
    pub(super) fn new(value: f32) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(super) fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub(super) fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }

    /// Returns the value held by the node.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the cached height of the subtree rooted at this node. A leaf has height one.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the left child, whose subtree holds only smaller values.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child, whose subtree holds only larger values.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_ref().map(|node| &**node)
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_leaf() {
        let node = Node::new(1.5);
        assert_eq!(node.value(), 1.5);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance(), 0);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_update() {
        let mut node = Node::new(2.0);
        let mut left = Node::new(1.0);
        left.left = Some(Box::new(Node::new(0.0)));
        left.update();
        node.left = Some(Box::new(left));
        node.update();

        assert_eq!(node.height(), 3);
        assert_eq!(node.balance(), 2);
    }
}
