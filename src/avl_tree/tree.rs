//! Free functions over a raw avl tree slot.
//!
//! These are the building blocks of [`AvlSet`](super::AvlSet). They operate on an
//! `Option<Box<Node>>` so that a caller holding the slot sees any new subtree root produced by a
//! rotation or a splice. Only the rotations can be used to break the balance invariant; every
//! other mutator restores it before returning.

use crate::avl_tree::node::Node;
use crate::avl_tree::{most_severe, Error, Result};
use std::cmp::{self, Ordering};
use std::error;
use std::fmt;
use std::result;

pub type Tree = Option<Box<Node>>;

/// Returns the cached height of a tree. An empty tree has height zero.
pub fn height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

/// Returns the height of a tree by walking every path, ignoring the cached heights.
pub fn measured_height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => cmp::max(measured_height(&node.left), measured_height(&node.right)) + 1,
    }
}

/// Returns the height of the left subtree of `node` minus the height of its right subtree.
pub fn balance(node: &Node) -> i32 {
    node.balance()
}

/// Returns the number of nodes in a tree.
pub fn len(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => len(&node.left) + len(&node.right) + 1,
    }
}

/// Promotes the right child of the subtree root. Fails with `InvalidRotation` and leaves the
/// tree untouched if there is no right child.
pub fn rotate_left(tree: &mut Tree) -> Result<()> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return Err(Error::InvalidRotation),
    };
    let mut child = match node.right.take() {
        Some(child) => child,
        None => {
            *tree = Some(node);
            return Err(Error::InvalidRotation);
        },
    };
    trace!("rotating left: {} replaces {}", child.value, node.value);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    *tree = Some(child);
    Ok(())
}

/// Promotes the left child of the subtree root. Fails with `InvalidRotation` and leaves the tree
/// untouched if there is no left child.
pub fn rotate_right(tree: &mut Tree) -> Result<()> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return Err(Error::InvalidRotation),
    };
    let mut child = match node.left.take() {
        Some(child) => child,
        None => {
            *tree = Some(node);
            return Err(Error::InvalidRotation);
        },
    };
    trace!("rotating right: {} replaces {}", child.value, node.value);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    *tree = Some(child);
    Ok(())
}

// Chooses the rotation by comparing the inserted value against the heavy child.
fn rebalance_after_insert(tree: &mut Tree, value: f32) -> Result<()> {
    let node = match tree.as_mut() {
        Some(node) => node,
        None => return Ok(()),
    };
    node.update();

    let balance = node.balance();
    if balance > 1 {
        let heavy = node.left.as_ref().map(|child| child.value);
        match heavy.and_then(|child_value| value.partial_cmp(&child_value)) {
            Some(Ordering::Less) => rotate_right(tree),
            Some(Ordering::Greater) => {
                let first = rotate_left(&mut node.left);
                let second = rotate_right(tree);
                most_severe(vec![first, second])
            },
            _ => Ok(()),
        }
    } else if balance < -1 {
        let heavy = node.right.as_ref().map(|child| child.value);
        match heavy.and_then(|child_value| value.partial_cmp(&child_value)) {
            Some(Ordering::Greater) => rotate_left(tree),
            Some(Ordering::Less) => {
                let first = rotate_right(&mut node.right);
                let second = rotate_left(tree);
                most_severe(vec![first, second])
            },
            _ => Ok(()),
        }
    } else {
        Ok(())
    }
}

// Chooses the rotation from the balance factor of the heavy child.
fn rebalance_after_remove(tree: &mut Tree) -> Result<()> {
    let node = match tree.as_mut() {
        Some(node) => node,
        None => return Ok(()),
    };
    node.update();

    let balance = node.balance();
    if balance > 1 {
        let child_balance = node.left.as_ref().map_or(0, |child| child.balance());
        if child_balance >= 0 {
            rotate_right(tree)
        } else {
            let first = rotate_left(&mut node.left);
            let second = rotate_right(tree);
            most_severe(vec![first, second])
        }
    } else if balance < -1 {
        let child_balance = node.right.as_ref().map_or(0, |child| child.balance());
        if child_balance <= 0 {
            rotate_left(tree)
        } else {
            let first = rotate_right(&mut node.right);
            let second = rotate_left(tree);
            most_severe(vec![first, second])
        }
    } else {
        Ok(())
    }
}

fn insert_value(tree: &mut Tree, value: f32) -> Result<bool> {
    let inserted = match tree {
        Some(ref mut node) => match value.partial_cmp(&node.value) {
            Some(Ordering::Less) => insert_value(&mut node.left, value)?,
            Some(Ordering::Greater) => insert_value(&mut node.right, value)?,
            _ => return Ok(false),
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return Ok(true);
        },
    };

    if inserted {
        rebalance_after_insert(tree, value)?;
    }
    Ok(inserted)
}

/// Inserts `value` into the tree and rebalances every ancestor of the new node. Returns `true`
/// if a node was created and `false` if the value was already present, in which case the tree is
/// left unchanged.
///
/// Fails with `InvalidParam` if `value` is `NaN`.
pub fn insert(tree: &mut Tree, value: f32) -> Result<bool> {
    if value.is_nan() {
        return Err(Error::InvalidParam);
    }
    insert_value(tree, value)
}

fn remove_value(tree: &mut Tree, value: f32) -> Result<()> {
    let status = match tree.take() {
        Some(mut node) => match value.partial_cmp(&node.value) {
            Some(Ordering::Less) => {
                let status = remove_value(&mut node.left, value);
                *tree = Some(node);
                status
            },
            Some(Ordering::Greater) => {
                let status = remove_value(&mut node.right, value);
                *tree = Some(node);
                status
            },
            Some(Ordering::Equal) => {
                if node.left.is_some() && node.right.is_some() {
                    let status = match minimum(&node.right).map(Node::value) {
                        Ok(successor) => {
                            debug!("replacing {} with its successor {}", node.value, successor);
                            node.value = successor;
                            remove_value(&mut node.right, successor)
                        },
                        Err(error) => Err(error),
                    };
                    *tree = Some(node);
                    status
                } else {
                    let Node { left, right, .. } = *node;
                    *tree = left.or(right);
                    Ok(())
                }
            },
            None => {
                *tree = Some(node);
                Err(Error::OutOfRange)
            },
        },
        None => return Err(Error::OutOfRange),
    };

    status?;
    rebalance_after_remove(tree)
}

/// Removes `value` from the tree and rebalances every ancestor of the spliced node.
///
/// Fails with `NotFound` if the tree is empty and with `OutOfRange` if the value is not present.
pub fn remove(tree: &mut Tree, value: f32) -> Result<()> {
    if tree.is_none() {
        return Err(Error::NotFound);
    }
    remove_value(tree, value)
}

fn find(tree: &Tree, value: f32) -> Result<&Node> {
    match tree {
        Some(ref node) => match value.partial_cmp(&node.value) {
            Some(Ordering::Less) => find(&node.left, value),
            Some(Ordering::Greater) => find(&node.right, value),
            Some(Ordering::Equal) => Ok(&**node),
            None => Err(Error::OutOfRange),
        },
        None => Err(Error::OutOfRange),
    }
}

/// Returns the node holding `value`.
///
/// Fails with `NotFound` if the tree is empty and with `OutOfRange` if the value is not present.
pub fn search(tree: &Tree, value: f32) -> Result<&Node> {
    if tree.is_none() {
        return Err(Error::NotFound);
    }
    find(tree, value)
}

/// Returns the node holding the smallest value. Fails with `OutOfRange` if the tree is empty.
pub fn minimum(tree: &Tree) -> Result<&Node> {
    tree.as_ref()
        .map(|node| {
            let mut curr = node;
            while let Some(ref left_node) = curr.left {
                curr = left_node;
            }
            &**curr
        })
        .ok_or(Error::OutOfRange)
}

/// Returns the node holding the largest value. Fails with `OutOfRange` if the tree is empty.
pub fn maximum(tree: &Tree) -> Result<&Node> {
    tree.as_ref()
        .map(|node| {
            let mut curr = node;
            while let Some(ref right_node) = curr.right {
                curr = right_node;
            }
            &**curr
        })
        .ok_or(Error::OutOfRange)
}

/// Inserts every value of `values` in order, stopping at the first failure. Values inserted
/// before the failure stay in the tree.
///
/// Fails with `InvalidParam` if `values` is empty.
pub fn build(tree: &mut Tree, values: &[f32]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::InvalidParam);
    }
    debug!("building avl tree from {} values", values.len());
    for value in values {
        insert(tree, *value)?;
    }
    debug!("built avl tree of height {}", height(tree));
    Ok(())
}

fn push_preorder(tree: &Tree, values: &mut Vec<f32>) {
    if let Some(ref node) = tree {
        values.push(node.value);
        push_preorder(&node.left, values);
        push_preorder(&node.right, values);
    }
}

fn push_inorder(tree: &Tree, values: &mut Vec<f32>) {
    if let Some(ref node) = tree {
        push_inorder(&node.left, values);
        values.push(node.value);
        push_inorder(&node.right, values);
    }
}

/// Returns the values of the tree in pre-order: each node, then its left subtree, then its right
/// subtree.
pub fn traverse(tree: &Tree) -> Vec<f32> {
    let mut values = Vec::new();
    push_preorder(tree, &mut values);
    values
}

/// Returns the values of the tree in ascending order.
pub fn inorder(tree: &Tree) -> Vec<f32> {
    let mut values = Vec::new();
    push_inorder(tree, &mut values);
    values
}

/// A broken invariant found by [`check_consistency`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// The value does not lie strictly between the bounds set by its ancestors.
    Order { value: f32 },
    /// The heights of the two subtrees of the node differ by more than one.
    Imbalance { value: f32, balance: i32 },
    /// The cached height of the node disagrees with its measured height.
    StaleHeight { value: f32, cached: usize, measured: usize },
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::Order { value } => write!(f, "{} is out of order", value),
            Violation::Imbalance { value, balance } => {
                write!(f, "{} has balance factor {}", value, balance)
            },
            Violation::StaleHeight { value, cached, measured } => write!(
                f,
                "{} caches height {} but has height {}",
                value, cached, measured,
            ),
        }
    }
}

fn check_subtree(
    tree: &Tree,
    lower: Option<f32>,
    upper: Option<f32>,
) -> result::Result<usize, Violation> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let above_lower = lower.map_or(true, |lower| node.value > lower);
    let below_upper = upper.map_or(true, |upper| node.value < upper);
    if node.value.is_nan() || !above_lower || !below_upper {
        return Err(Violation::Order { value: node.value });
    }

    let left_height = check_subtree(&node.left, lower, Some(node.value))?;
    let right_height = check_subtree(&node.right, Some(node.value), upper)?;

    let balance = left_height as i32 - right_height as i32;
    if balance.abs() > 1 {
        return Err(Violation::Imbalance { value: node.value, balance });
    }

    let measured = cmp::max(left_height, right_height) + 1;
    if node.height != measured {
        return Err(Violation::StaleHeight {
            value: node.value,
            cached: node.height,
            measured,
        });
    }
    Ok(measured)
}

/// Verifies that the tree is strictly ordered, balanced at every node, and that every cached
/// height matches the height measured by walking the tree.
pub fn check_consistency(tree: &Tree) -> result::Result<(), Violation> {
    check_subtree(tree, None, None).map(|_| ())
}
