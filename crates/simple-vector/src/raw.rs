//! Owning raw storage for a run of `T` slots.
//!
//! [`RawBuffer`] allocates, owns and releases memory. It never reads,
//! writes or drops elements: which slots are initialized is tracked by
//! the owner.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::VectorError;

/// Exclusively owned storage for `capacity` slots of `T`.
///
/// A zero capacity (or a zero-sized `T`) owns no memory and holds a
/// dangling, well-aligned pointer.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its allocation; sending or sharing it is
// as safe as sending or sharing the `T`s it stores.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// A buffer that owns nothing.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate `capacity` uninitialized slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) when the
    /// allocator fails.
    pub(crate) fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(buf) => buf,
            Err(VectorError::AllocationFailed { .. }) => {
                // try_allocate only reports AllocationFailed for a valid layout.
                match Layout::array::<T>(capacity) {
                    Ok(layout) => alloc::handle_alloc_error(layout),
                    Err(_) => panic!("capacity overflow"),
                }
            }
            Err(_) => panic!("capacity overflow"),
        }
    }

    /// Allocate `capacity` uninitialized slots, reporting failure.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, VectorError> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }
        let layout = Layout::array::<T>(capacity)
            .map_err(|_| VectorError::CapacityOverflow { requested: capacity })?;
        // SAFETY: layout has non-zero size (capacity > 0, T not zero-sized).
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or_else(|| {
            log::debug!(
                "allocation of {capacity} slots ({} bytes) failed",
                layout.size()
            );
            VectorError::AllocationFailed {
                capacity,
                bytes: layout.size(),
            }
        })?;
        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Number of slots owned.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`. No bounds check.
    ///
    /// # Safety
    ///
    /// `index <= capacity`. The slot is only readable if the owner
    /// initialized it.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY: the caller keeps index within the allocation (or one past it).
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Exchange storage with `other` in constant time.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Take the storage, leaving `self` empty.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || Self::IS_ZST {
            return;
        }
        // SAFETY: a non-empty, non-ZST buffer was allocated with exactly this
        // layout, and ownership is unique so this runs once.
        unsafe {
            let layout = Layout::array::<T>(self.capacity).unwrap_unchecked();
            alloc::dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}
