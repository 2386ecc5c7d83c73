//! Self-balancing binary search tree over `f32` keys where the heights of the two child subtrees
//! of any node differ by at most one.
//!
//! Every operation reports its outcome through [`Result`]. When a single step combines several
//! sub-results (a recursive insert followed by one or two rotations, for instance), the most
//! severe error wins. Severity follows the declaration order of [`Error`].

mod node;
mod set;
pub mod tree;

pub use self::node::Node;
pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};
pub use self::tree::Violation;

use std::error;
use std::fmt;
use std::result;

/// The ways an operation on an avl tree can fail.
///
/// Variants are ordered from most to least severe, so the derived `Ord` makes the most severe
/// error the minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// A rotation was attempted on a subtree that lacks the child it would promote.
    InvalidRotation,
    /// Reserved. No operation currently produces it.
    Timeout,
    /// The value is not present in a non-empty tree, or an extremum was requested of an empty
    /// subtree.
    OutOfRange,
    /// A search or removal was attempted on an empty tree.
    NotFound,
    /// A bulk build received no values, or a key was `NaN`.
    InvalidParam,
}

impl Error {
    /// Returns the numeric status code of the error. Success is `0` and every error is negative.
    ///
    /// # Examples
    /// ```
    /// use float_avl::avl_tree::Error;
    ///
    /// assert_eq!(Error::InvalidParam.code(), -1);
    /// assert_eq!(Error::InvalidRotation.code(), -5);
    /// ```
    pub fn code(self) -> i32 {
        match self {
            Error::InvalidParam => -1,
            Error::OutOfRange => -2,
            Error::Timeout => -3,
            Error::NotFound => -4,
            Error::InvalidRotation => -5,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Error::InvalidRotation => "rotation requires the promoted child to be present",
            Error::Timeout => "operation timed out",
            Error::OutOfRange => "value is not present in the tree",
            Error::NotFound => "tree is empty",
            Error::InvalidParam => "invalid parameter",
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (status {})", self.message(), self.code())
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Folds a sequence of statuses into the most severe one. Returns `Ok(())` only if every status
/// succeeded.
///
/// # Examples
/// ```
/// use float_avl::avl_tree::{most_severe, Error};
///
/// assert_eq!(most_severe(vec![Ok(()), Ok(())]), Ok(()));
/// assert_eq!(
///     most_severe(vec![Err(Error::OutOfRange), Ok(()), Err(Error::InvalidRotation)]),
///     Err(Error::InvalidRotation),
/// );
/// ```
pub fn most_severe<I>(statuses: I) -> Result<()>
where
    I: IntoIterator<Item = Result<()>>,
{
    match statuses.into_iter().filter_map(|status| status.err()).min() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
