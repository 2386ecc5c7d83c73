//! A self-balancing AVL binary search tree over `f32` keys.
//!
//! The tree supports ordered insertion, removal, exact-match search, minimum and maximum
//! retrieval, bulk construction from a slice, and a pre-order traversal that exposes its shape.
//! After every insertion and removal the heights of the two subtrees of any node differ by at
//! most one, which bounds the height of a tree of `n` values by `O(lg n)`.
//!
//! [`AvlSet`](avl_tree::AvlSet) is the entry point. The free functions of
//! [`avl_tree::tree`] operate on a bare root slot and include the rotation primitives.
//!
//! # Examples
//! ```
//! use float_avl::avl_tree::{AvlSet, Error};
//!
//! let mut set = AvlSet::from_values(&[40.0, 20.0, 10.0, 30.0]).unwrap();
//! assert_eq!(set.traverse(), vec![20.0, 10.0, 40.0, 30.0]);
//!
//! assert_eq!(set.remove(50.0), Err(Error::OutOfRange));
//! assert_eq!(set.maximum().map(|node| node.value()), Ok(40.0));
//! ```

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
