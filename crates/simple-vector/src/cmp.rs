//! Equality, ordering, hashing and formatting for [`SimpleVector`].
//!
//! All of these look at the elements `[0, len)` only; capacity and growth
//! policy never take part.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::vector::SimpleVector;

impl<T: PartialEq<U>, U> PartialEq<SimpleVector<U>> for SimpleVector<T> {
    /// Equal lengths and pairwise-equal elements in order.
    fn eq(&self, other: &SimpleVector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    /// Lexicographic: the first differing element decides, and a proper
    /// prefix orders before the longer sequence.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
