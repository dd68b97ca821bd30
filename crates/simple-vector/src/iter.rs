//! Iteration over a [`SimpleVector`].
//!
//! Borrowing iteration goes through the slice (`iter`, `iter_mut`).
//! [`IntoIter`] consumes the vector: it takes over the storage and moves
//! elements out front to back (or back to front).

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::raw::RawBuffer;
use crate::vector::SimpleVector;

/// An owning iterator over the elements of a [`SimpleVector`].
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    /// First element not yet yielded.
    start: usize,
    /// One past the last element not yet yielded.
    end: usize,
}

impl<T> IntoIter<T> {
    /// The remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is initialized and not yet moved out.
        unsafe {
            slice::from_raw_parts(self.buf.slot(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: start < end, so the slot is initialized; advancing start
        // marks it as moved out.
        let item = unsafe { self.buf.slot(self.start).read() };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the slot at the new end was initialized and is now
        // outside [start, end).
        Some(unsafe { self.buf.slot(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: start <= end <= capacity.
            unsafe { self.buf.slot(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        // SAFETY: the remaining elements are initialized and dropped once.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_vector_test_utils::DropTracker;

    #[test]
    fn yields_in_order() {
        let v = SimpleVector::from(["a", "b", "c"].map(String::from));
        let collected: Vec<String> = v.into_iter().collect();
        assert_eq!(collected, ["a", "b", "c"]);
    }

    #[test]
    fn double_ended_and_exact_size() {
        let mut it = SimpleVector::from([1, 2, 3, 4]).into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn dropping_partially_consumed_iterator_drops_rest() {
        let tracker = DropTracker::new();
        let v = SimpleVector::from([tracker.make(0), tracker.make(1), tracker.make(2)]);
        let mut it = v.into_iter();
        let first = it.next().unwrap();
        assert_eq!(first.id(), 0);
        drop(it);
        assert_eq!(tracker.drops(), 2);
        drop(first);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn borrowed_iteration() {
        let mut v = SimpleVector::from([1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(sum, 60);
    }

    #[test]
    fn empty_vector_iterates_nothing() {
        let v = SimpleVector::<u8>::new();
        assert_eq!(v.into_iter().count(), 0);
    }
}
