//! Vector-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during vector operations.
///
/// Every variant is reported before any state is changed: a failed call
/// leaves the vector exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// A checked access named an index at or past the logical length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
    /// The requested capacity does not fit in the address space
    /// (its size in bytes exceeds `isize::MAX`).
    CapacityOverflow {
        /// Requested capacity in elements.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocationFailed {
        /// Requested capacity in elements.
        capacity: usize,
        /// Requested size in bytes.
        bytes: usize,
    },
    /// A growth factor that would not amortize appends.
    InvalidGrowthFactor {
        /// The rejected factor.
        factor: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: requested {requested} elements")
            }
            Self::AllocationFailed { capacity, bytes } => {
                write!(f, "allocation failed: {capacity} elements ({bytes} bytes)")
            }
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "growth factor must be at least 2, got {factor}")
            }
        }
    }
}

impl Error for VectorError {}
