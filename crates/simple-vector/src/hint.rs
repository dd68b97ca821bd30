//! Capacity hint for constructing an empty, pre-sized vector.

use crate::vector::SimpleVector;

/// A requested capacity, converted into an empty [`SimpleVector`].
///
/// ```rust
/// use simple_vector::{reserve, SimpleVector};
///
/// let v: SimpleVector<u8> = reserve(16).into();
/// assert_eq!((v.len(), v.capacity()), (0, 16));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// Hint for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveHint::new`].
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}

impl<T> From<ReserveHint> for SimpleVector<T> {
    fn from(hint: ReserveHint) -> Self {
        SimpleVector::with_capacity(hint.capacity)
    }
}
