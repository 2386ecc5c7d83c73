use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, Violation};
use crate::avl_tree::Result;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::result;

/// An ordered set of `f32` values implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Values are unique: inserting
/// a value that is already present leaves the set unchanged. `NaN` is rejected.
///
/// # Examples
/// ```
/// use float_avl::avl_tree::{AvlSet, Error};
///
/// let mut set = AvlSet::new();
/// set.insert(0.0).unwrap();
/// set.insert(3.0).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.minimum().map(|node| node.value()), Ok(0.0));
///
/// assert_eq!(set.remove(0.0), Ok(()));
/// assert_eq!(set.remove(1.0), Err(Error::OutOfRange));
/// ```
pub struct AvlSet {
    tree: tree::Tree,
    len: usize,
}

impl AvlSet {
    /// Constructs a new, empty `AvlSet`.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::AvlSet;
    ///
    /// let set = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Constructs a set by inserting every value of `values` in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParam` if `values` is empty or holds a `NaN`.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::{AvlSet, Error};
    ///
    /// let set = AvlSet::from_values(&[3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(set.traverse(), vec![2.0, 1.0, 3.0]);
    ///
    /// assert!(matches!(AvlSet::from_values(&[]), Err(Error::InvalidParam)));
    /// ```
    pub fn from_values(values: &[f32]) -> Result<Self> {
        let mut set = AvlSet::new();
        set.build(values)?;
        Ok(set)
    }

    /// Inserts every value of `values` in order, stopping at the first failure. Values inserted
    /// before a failure remain in the set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParam` if `values` is empty or holds a `NaN`.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.build(&[1.0, f32::NAN, 2.0]), Err(Error::InvalidParam));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn build(&mut self, values: &[f32]) -> Result<()> {
        let status = tree::build(&mut self.tree, values);
        self.len = tree::len(&self.tree);
        status
    }

    /// Inserts a value into the set. Returns `true` if the value was added and `false` if it was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParam` if `value` is `NaN`.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1.0), Ok(true));
    /// assert_eq!(set.insert(1.0), Ok(false));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: f32) -> Result<bool> {
        let inserted = tree::insert(&mut self.tree, value)?;
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Removes a value from the set.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the set is empty and `OutOfRange` if the value is not present.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.remove(1.0), Err(Error::NotFound));
    ///
    /// set.insert(1.0).unwrap();
    /// assert_eq!(set.remove(1.0), Ok(()));
    /// assert_eq!(set.remove(1.0), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, value: f32) -> Result<()> {
        tree::remove(&mut self.tree, value)?;
        self.len -= 1;
        Ok(())
    }

    /// Returns the node holding `value`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the set is empty and `OutOfRange` if the value is not present.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::{AvlSet, Error};
    ///
    /// let set = AvlSet::from_values(&[1.0, 2.0]).unwrap();
    /// assert_eq!(set.search(2.0).map(|node| node.value()), Ok(2.0));
    /// assert_eq!(set.search(3.0).map(|node| node.value()), Err(Error::OutOfRange));
    /// ```
    pub fn search(&self, value: f32) -> Result<&Node> {
        tree::search(&self.tree, value)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1.0).unwrap();
    /// assert!(!set.contains(0.0));
    /// assert!(set.contains(1.0));
    /// ```
    pub fn contains(&self, value: f32) -> bool {
        self.search(value).is_ok()
    }

    /// Returns the node holding the smallest value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the set is empty.
    pub fn minimum(&self) -> Result<&Node> {
        tree::minimum(&self.tree)
    }

    /// Returns the node holding the largest value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the set is empty.
    pub fn maximum(&self) -> Result<&Node> {
        tree::maximum(&self.tree)
    }

    /// Returns the values of the set in pre-order, which exposes the shape of the tree.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::AvlSet;
    ///
    /// let values: Vec<f32> = (1..=10).map(|i| (i * 10) as f32).collect();
    /// let set = AvlSet::from_values(&values).unwrap();
    /// assert_eq!(
    ///     set.traverse(),
    ///     vec![40.0, 20.0, 10.0, 30.0, 80.0, 60.0, 50.0, 70.0, 90.0, 100.0],
    /// );
    /// ```
    pub fn traverse(&self) -> Vec<f32> {
        tree::traverse(&self.tree)
    }

    /// Returns the root node, or `None` if the set is empty.
    pub fn root(&self) -> Option<&Node> {
        self.tree.as_ref().map(|node| &**node)
    }

    /// Returns the height of the tree. An empty set has height zero.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::from_values(&[1.0, 2.0]).unwrap();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Verifies the ordering and balance invariants of the underlying tree along with its cached
    /// heights.
    pub fn check_consistency(&self) -> result::Result<(), Violation> {
        tree::check_consistency(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield values in ascending order.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::AvlSet;
    ///
    /// let set = AvlSet::from_values(&[2.0, 3.0, 1.0]).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(1.0));
    /// assert_eq!(iterator.next(), Some(2.0));
    /// assert_eq!(iterator.next(), Some(3.0));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
            remaining: self.len,
        }
    }
}

impl Default for AvlSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AvlSet {
    fn eq(&self, other: &AvlSet) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for AvlSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntoIterator for AvlSet {
    type IntoIter = AvlSetIntoIter;
    type Item = f32;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
            remaining: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a AvlSet {
    type IntoIter = AvlSetIter<'a>;
    type Item = f32;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet`.
///
/// This iterator traverses the elements of the set in ascending order.
pub struct AvlSetIntoIter {
    current: tree::Tree,
    stack: Vec<Node>,
    remaining: usize,
}

impl Iterator for AvlSetIntoIter {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AvlSetIntoIter {}

/// An iterator for `AvlSet`.
///
/// This iterator traverses the elements of the set in ascending order.
pub struct AvlSetIter<'a> {
    current: &'a tree::Tree,
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for AvlSetIter<'a> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for AvlSetIter<'a> {}

impl Serialize for AvlSet {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct AvlSetVisitor;

impl<'de> Visitor<'de> for AvlSetVisitor {
    type Value = AvlSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of distinct, non-NaN floats")
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<AvlSet, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = AvlSet::new();
        while let Some(value) = seq.next_element::<f32>()? {
            match set.insert(value) {
                Ok(true) => {},
                Ok(false) => return Err(de::Error::custom(format!("duplicate value {}", value))),
                Err(error) => return Err(de::Error::custom(error)),
            }
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for AvlSet {
    fn deserialize<D>(deserializer: D) -> result::Result<AvlSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlSetVisitor)
    }
}
