//! Workload scripts for benchmarking [`SimpleVector`].
//!
//! Provides deterministic operation sequences and replay helpers:
//!
//! - [`op_script`]: seeded mix of appends, insertions, erasures and resizes
//! - [`replay_simple_vector`] / [`replay_vec`]: run a script and return the
//!   final contents, so the two containers can be checked for parity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use simple_vector::SimpleVector;

/// One mutation in a workload script.
///
/// Positions are stored raw and reduced modulo the current length at replay
/// time, so any script is valid against any starting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append a value.
    PushBack(u64),
    /// Insert a value at `position % (len + 1)`.
    Insert { position: usize, value: u64 },
    /// Erase at `position % len`; skipped when empty.
    Erase { position: usize },
    /// Remove the last element; skipped when empty.
    PopBack,
    /// Resize to the given length, filling with zeroes.
    Resize(usize),
}

/// Generate a deterministic script of `len` operations.
///
/// Roughly: 60% appends, 15% insertions, 15% erasures, 8% pops and 2%
/// resizes (up to 64 elements). Identical seeds produce identical scripts.
pub fn op_script(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ops = Vec::with_capacity(len);
    for _ in 0..len {
        let roll = rng.random_range(0..100u32);
        let op = match roll {
            0..=59 => Op::PushBack(rng.random()),
            60..=74 => Op::Insert {
                position: rng.random_range(0..1024),
                value: rng.random(),
            },
            75..=89 => Op::Erase {
                position: rng.random_range(0..1024),
            },
            90..=97 => Op::PopBack,
            _ => Op::Resize(rng.random_range(0..64)),
        };
        ops.push(op);
    }
    ops
}

/// Replay `ops` on a fresh [`SimpleVector`].
pub fn replay_simple_vector(ops: &[Op]) -> SimpleVector<u64> {
    let mut v = SimpleVector::new();
    for op in ops {
        match *op {
            Op::PushBack(value) => v.push_back(value),
            Op::Insert { position, value } => {
                v.insert(position % (v.len() + 1), value);
            }
            Op::Erase { position } => {
                if !v.is_empty() {
                    v.erase(position % v.len());
                }
            }
            Op::PopBack => {
                if !v.is_empty() {
                    v.pop_back();
                }
            }
            Op::Resize(len) => v.resize(len),
        }
    }
    v
}

/// Replay `ops` on a fresh `Vec`, the reference model.
pub fn replay_vec(ops: &[Op]) -> Vec<u64> {
    let mut v = Vec::new();
    for op in ops {
        match *op {
            Op::PushBack(value) => v.push(value),
            Op::Insert { position, value } => {
                let at = position % (v.len() + 1);
                v.insert(at, value);
            }
            Op::Erase { position } => {
                if !v.is_empty() {
                    let at = position % v.len();
                    v.remove(at);
                }
            }
            Op::PopBack => {
                v.pop();
            }
            Op::Resize(len) => v.resize(len, 0),
        }
    }
    v
}
