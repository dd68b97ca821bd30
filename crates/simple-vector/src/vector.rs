//! The growable array.
//!
//! [`SimpleVector`] wraps one owning raw buffer plus a logical length. All
//! reallocation goes through [`SimpleVector::reserve`]: a new buffer is
//! allocated first, existing elements are moved into it bitwise, and only
//! then is ownership exchanged. A failed allocation therefore leaves the
//! vector untouched.

#![allow(unsafe_code)]

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use crate::config::GrowthPolicy;
use crate::error::VectorError;
use crate::raw::RawBuffer;

/// A contiguous, growable array with value semantics.
///
/// Capacity is managed independently of length: it only grows, either
/// explicitly through [`reserve`](Self::reserve) or by the configured
/// [`GrowthPolicy`] when an append or insertion needs room. Cloning
/// produces an independent copy whose capacity equals the source length.
pub struct SimpleVector<T> {
    buf: RawBuffer<T>,
    len: usize,
    policy: GrowthPolicy,
}

// Compile-time assertion: SimpleVector is Send + Sync when its elements are.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SimpleVector<String>>();
};

// ── Construction ──────────────────────────────────────────────────

impl<T> SimpleVector<T> {
    /// An empty vector: length 0, capacity 0, no storage.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
            policy: GrowthPolicy::doubling(),
        }
    }

    /// An empty vector with the given growth policy.
    pub const fn with_growth_policy(policy: GrowthPolicy) -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
            policy,
        }
    }

    /// An empty vector with storage for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::allocate(capacity),
            len: 0,
            policy: GrowthPolicy::doubling(),
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), reporting allocation
    /// failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, VectorError> {
        Ok(Self {
            buf: RawBuffer::try_allocate(capacity)?,
            len: 0,
            policy: GrowthPolicy::doubling(),
        })
    }

    /// `len` default-valued elements; capacity is exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::with_capacity(len);
        v.resize_with(len, T::default);
        v
    }

    /// `len` copies of `value`; capacity is exactly `len`.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(len);
        if len > 0 {
            for _ in 1..len {
                v.push_back(value.clone());
            }
            v.push_back(value);
        }
        v
    }

    /// Move the contents out, leaving `self` with length 0 and capacity 0.
    ///
    /// Constant time; no element is touched. The growth policy stays with
    /// `self` and is copied to the result.
    pub fn take(&mut self) -> Self {
        let len = self.len;
        self.len = 0;
        Self {
            buf: self.buf.take(),
            len,
            policy: self.policy,
        }
    }

    /// Replace the contents with `other`'s, dropping the previous ones.
    ///
    /// The new state is installed by a constant-time swap before the old
    /// elements are dropped.
    pub fn assign(&mut self, mut other: Self) {
        self.swap(&mut other);
    }

    /// Exchange contents (storage, length and policy) with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
        std::mem::swap(&mut self.policy, &mut other.policy);
    }
}

// ── Size and capacity ─────────────────────────────────────────────

impl<T> SimpleVector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots; always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// True if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The policy used when appends or insertions overflow capacity.
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Change the growth policy. Takes effect on the next overflow.
    pub fn set_growth_policy(&mut self, policy: GrowthPolicy) {
        self.policy = policy;
    }

    /// Ensure capacity is at least `new_capacity`.
    ///
    /// `new_capacity` is an absolute target, not an increment. When it
    /// exceeds the current capacity, exactly `new_capacity` slots are
    /// allocated and the elements moved over in order. Never shrinks.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            let fresh = RawBuffer::allocate(new_capacity);
            self.relocate(fresh);
        }
    }

    /// Like [`reserve`](Self::reserve), reporting failure. On error the
    /// vector is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        if new_capacity > self.capacity() {
            let fresh = RawBuffer::try_allocate(new_capacity)?;
            self.relocate(fresh);
        }
        Ok(())
    }

    /// Move every element into `fresh` and take ownership of it. The old
    /// storage is released without dropping anything.
    fn relocate(&mut self, mut fresh: RawBuffer<T>) {
        log::trace!(
            "relocating {} elements: capacity {} -> {}",
            self.len,
            self.capacity(),
            fresh.capacity()
        );
        // SAFETY: fresh holds at least `len` slots and is a distinct
        // allocation; `[0, len)` of the old buffer is initialized. After the
        // bitwise copy the old slots are treated as uninitialized.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buf.swap(&mut fresh);
    }

    /// Make room for `required` elements under the growth policy.
    fn grow_for(&mut self, required: usize) {
        let capacity = self.policy.next_capacity(self.capacity(), required);
        self.reserve(capacity);
    }

    /// Set the length to `new_len`.
    ///
    /// Shrinking drops the trailing elements and keeps the storage.
    /// Growing past capacity reserves exactly `new_len` first; the newly
    /// exposed positions `[len, new_len)` get default values.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Like [`resize`](Self::resize), producing new elements with `fill`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        while self.len < new_len {
            // SAFETY: len < new_len <= capacity, slot is uninitialized.
            // Length is bumped per element so a panicking `fill` leaks nothing.
            unsafe { self.buf.slot(self.len).write(fill()) };
            self.len += 1;
        }
    }

    /// Drop every element past `len`. No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(
            // SAFETY: len < self.len <= capacity.
            unsafe { self.buf.slot(len) },
            self.len - len,
        );
        // Length first: a panicking Drop must not expose dropped slots.
        self.len = len;
        // SAFETY: the tail was initialized and is now out of logical range.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drop all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}

// ── Insertion and removal ─────────────────────────────────────────

impl<T> SimpleVector<T> {
    /// Append `value`, growing by the policy when full. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        let required = self.len.checked_add(1).expect("capacity overflow");
        if required > self.capacity() {
            self.grow_for(required);
        }
        // SAFETY: len < capacity after growth; the slot is uninitialized.
        unsafe { self.buf.slot(self.len).write(value) };
        self.len = required;
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// Returns the index of the inserted element. O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        let required = len.checked_add(1).expect("capacity overflow");
        if required > self.capacity() {
            self.grow_for(required);
        }
        // SAFETY: capacity >= len + 1, so shifting [index, len) one slot
        // right stays in bounds; `ptr::copy` handles the overlap.
        unsafe {
            let at = self.buf.slot(index);
            ptr::copy(at, at.add(1), len - index);
            at.write(value);
        }
        self.len = required;
        index
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(!self.is_empty(), "pop_back called on an empty SimpleVector");
        self.len -= 1;
        // SAFETY: the slot at the old last index is initialized and now out
        // of logical range, so ownership moves to the caller.
        unsafe { self.buf.slot(self.len).read() }
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left. O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: index < len; after reading the element out, [index + 1, len)
        // moves one slot left over the vacated position.
        unsafe {
            let at = self.buf.slot(index);
            let value = at.read();
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drop the element at `index` and return the index now holding its
    /// successor (equal to `len()` if it was the last element).
    ///
    /// On an empty vector this does nothing and returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is non-empty and `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        if !self.is_empty() {
            drop(self.remove(index));
        }
        index
    }
}

// ── Element access ────────────────────────────────────────────────

impl<T> SimpleVector<T> {
    /// Bounds-checked access.
    ///
    /// Returns [`VectorError::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        self.as_slice().get(index).ok_or(VectorError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index < len()`. Checked only in debug builds.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        // SAFETY: the caller guarantees index < len, so the slot is initialized.
        unsafe { &*self.buf.slot(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index < len()`. Checked only in debug builds.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        // SAFETY: as above; `&mut self` guarantees exclusivity.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Pointer to the first element. Dangling (never null) when there is
    /// no storage; do not rely on its value for an empty vector.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// The elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned, and [0, len) is
        // initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), len) }
    }

    /// Take the storage and length for an owning iterator.
    pub(crate) fn into_raw_parts(mut self) -> (RawBuffer<T>, usize) {
        let len = std::mem::replace(&mut self.len, 0);
        (self.buf.take(), len)
    }
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is initialized and dropped exactly once here; the
        // buffer then releases the storage.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) };
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        out.policy = self.policy;
        for item in self.iter() {
            out.push_back(item.clone());
        }
        out
    }

    /// Build the copy completely, then swap it in. If an element's `clone`
    /// panics, `self` is left as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    /// Panics when the index or range falls outside `[0, len)`.
    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    /// Capacity is exactly `N`; values are moved in order.
    fn from(values: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for value in values {
            v.push_back(value);
        }
        v
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Capacity is exactly the vector's length.
    fn from(values: Vec<T>) -> Self {
        let mut v = Self::with_capacity(values.len());
        for value in values {
            v.push_back(value);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        let mut v = Self::with_capacity(values.len());
        for value in values {
            v.push_back(value.clone());
        }
        v
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.len.saturating_add(lower);
        if required > self.capacity() {
            self.grow_for(required);
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    /// Capacity equals the length for iterators with an exact size hint.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut v = Self::with_capacity(lower);
        v.extend(iter);
        v
    }
}
