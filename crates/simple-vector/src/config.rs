//! Growth policy configuration.

use crate::error::VectorError;

/// Controls how far capacity grows when an append or insertion overflows it.
///
/// The computation is a pure function of the current capacity and the
/// required length, see [`next_capacity`](GrowthPolicy::next_capacity).
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    factor: usize,
}

impl GrowthPolicy {
    /// Default multiplier applied to a full, non-empty buffer.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Smallest factor that still amortizes appends to O(1).
    pub const MIN_FACTOR: usize = 2;

    /// Create a policy with the given multiplier.
    ///
    /// Returns [`VectorError::InvalidGrowthFactor`] for `factor < 2`.
    pub fn new(factor: usize) -> Result<Self, VectorError> {
        if factor < Self::MIN_FACTOR {
            return Err(VectorError::InvalidGrowthFactor { factor });
        }
        Ok(Self { factor })
    }

    /// The default doubling policy.
    pub const fn doubling() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
        }
    }

    /// The configured multiplier.
    pub const fn factor(&self) -> usize {
        self.factor
    }

    /// Capacity to allocate so that `required` elements fit.
    ///
    /// - `required <= capacity`: unchanged.
    /// - `capacity == 0`: exactly `required`.
    /// - otherwise: `capacity * factor`, raised to `required` if that is
    ///   still short. Saturates instead of overflowing; the allocation
    ///   itself reports the overflow.
    pub const fn next_capacity(&self, capacity: usize, required: usize) -> usize {
        if required <= capacity {
            return capacity;
        }
        if capacity == 0 {
            return required;
        }
        let grown = capacity.saturating_mul(self.factor);
        if grown < required {
            required
        } else {
            grown
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::doubling()
    }
}

/// [`GrowthPolicy::next_capacity`] under the default doubling policy.
pub const fn grown_capacity(capacity: usize, required: usize) -> usize {
    GrowthPolicy::doubling().next_capacity(capacity, required)
}
