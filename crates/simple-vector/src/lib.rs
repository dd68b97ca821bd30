//! A growable contiguous array with explicit capacity management.
//!
//! [`SimpleVector`] owns a single heap buffer, tracks a logical length
//! separately from the allocated capacity, and grows by a pure,
//! independently testable policy ([`GrowthPolicy`]). This crate is the
//! only one in the workspace that contains `unsafe` code.
//!
//! # Architecture
//!
//! ```text
//! SimpleVector<T> (length, growth policy, all mutation)
//! └── RawBuffer<T> (allocate N slots, release once, swap/take ownership)
//! ```
//!
//! The buffer knows nothing about which slots hold live values. Slots
//! `[0, len)` are initialized; `[len, capacity)` are not, and are never
//! exposed through the public API.
//!
//! # Access tiers
//!
//! - **Checked:** [`SimpleVector::at`] returns [`VectorError::OutOfRange`].
//! - **Unchecked:** [`SimpleVector::get_unchecked`] (`unsafe`).
//! - **Indexing:** `v[i]` panics when `i >= len`.
//!
//! # Example
//!
//! ```rust
//! use simple_vector::SimpleVector;
//!
//! let mut v = SimpleVector::from([1, 2, 3]);
//! assert_eq!((v.len(), v.capacity()), (3, 3));
//!
//! v.push_back(4);
//! assert_eq!(v.capacity(), 6);
//!
//! v.erase(1);
//! assert_eq!(v, [1, 3, 4]);
//! assert!(v.at(5).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod cmp;
pub mod config;
pub mod error;
pub mod hint;
pub mod iter;
mod raw;
pub mod vector;

// Public re-exports for the primary API surface.
pub use config::{grown_capacity, GrowthPolicy};
pub use error::VectorError;
pub use hint::{reserve, ReserveHint};
pub use iter::IntoIter;
pub use vector::SimpleVector;
