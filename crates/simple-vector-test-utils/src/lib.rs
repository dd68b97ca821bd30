//! Element fixtures for `simple-vector` tests.
//!
//! Provides element types that observe what a container does to them:
//! [`DropTracker`] counts drops and clones of the [`Tracked`] values it
//! hands out, [`MoveOnly`] cannot be cloned, and [`CloneBomb`] panics on
//! a chosen `clone` call.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counters {
    made: Cell<usize>,
    clones: Cell<usize>,
    drops: Cell<usize>,
}

/// Hands out [`Tracked`] values and counts what happens to them.
///
/// Every value made (or cloned) must eventually be dropped exactly once:
/// after the container under test is gone, [`live`](DropTracker::live)
/// should be zero.
#[derive(Clone, Debug, Default)]
pub struct DropTracker {
    counters: Rc<Counters>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value with the given id.
    pub fn make(&self, id: u32) -> Tracked {
        self.counters.made.set(self.counters.made.get() + 1);
        Tracked {
            id,
            counters: Rc::clone(&self.counters),
        }
    }

    pub fn drops(&self) -> usize {
        self.counters.drops.get()
    }

    pub fn clones(&self) -> usize {
        self.counters.clones.get()
    }

    /// Values made or cloned and not yet dropped.
    pub fn live(&self) -> usize {
        self.counters.made.get() + self.counters.clones.get() - self.counters.drops.get()
    }
}

/// A value that reports its clones and drops to a [`DropTracker`].
#[derive(Debug)]
pub struct Tracked {
    id: u32,
    counters: Rc<Counters>,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counters.clones.set(self.counters.clones.get() + 1);
        Self {
            id: self.id,
            counters: Rc::clone(&self.counters),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.drops.set(self.counters.drops.get() + 1);
    }
}

/// A value that can only be moved.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveOnly(pub u32);

/// A value whose `clone` panics once a shared budget of clones is used up.
///
/// ```rust
/// use std::panic::{catch_unwind, AssertUnwindSafe};
/// use simple_vector_test_utils::CloneBomb;
///
/// let fuse = CloneBomb::fuse(1);
/// let a = CloneBomb::new(7, &fuse);
/// let _b = a.clone(); // uses the only clone
/// assert!(catch_unwind(AssertUnwindSafe(|| a.clone())).is_err());
/// ```
#[derive(Debug)]
pub struct CloneBomb {
    value: u32,
    budget: Rc<Cell<usize>>,
}

impl CloneBomb {
    /// A shared clone budget for a group of values.
    pub fn fuse(clones_allowed: usize) -> Rc<Cell<usize>> {
        Rc::new(Cell::new(clones_allowed))
    }

    pub fn new(value: u32, fuse: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            budget: Rc::clone(fuse),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self {
            value: self.value,
            budget: Rc::clone(&self.budget),
        }
    }
}

impl PartialEq for CloneBomb {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
