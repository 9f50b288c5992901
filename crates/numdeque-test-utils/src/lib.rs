//! Test utilities and mock types for numdeque development.
//!
//! Provides array builders over isolated registries, seeded value
//! generators, and mock implementations of the collaborator traits
//! ([`ScalarSink`], [`ScalarSource`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::rc::Rc;

use numdeque::{NumericDeque, Registry};
use numdeque_core::{ScalarSink, ScalarSource};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A fresh registry not shared with any other test.
pub fn isolated_registry() -> Rc<Registry> {
    Rc::new(Registry::new())
}

/// Build an array in `registry` holding `values`, pushed at the back.
pub fn deque_in(registry: &Rc<Registry>, values: &[f64]) -> NumericDeque {
    let mut deque = NumericDeque::new_in(registry);
    deque.extend(values.iter().copied());
    deque
}

/// Build an array in `registry` holding `0.0, 1.0, ..., (n-1) as f64`.
pub fn ascending_in(registry: &Rc<Registry>, n: usize) -> NumericDeque {
    let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
    deque_in(registry, &values)
}

/// `n` uniform values in `[lo, hi)` from a ChaCha8 stream seeded by `seed`.
///
/// Same seed, same values, on every platform.
pub fn seeded_values(seed: u64, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

/// `n` small integers in `[0, distinct)` as floats, for duplicate-heavy input.
pub fn seeded_integers(seed: u64, n: usize, distinct: u32) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| f64::from(rng.gen_range(0..distinct)))
        .collect()
}

/// Mock [`ScalarSink`] recording every pushed value.
#[derive(Debug, Default)]
pub struct RecordingSink {
    values: Vec<f64>,
    pushes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values received so far, in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of `push_scalar` calls observed.
    pub fn pushes(&self) -> usize {
        self.pushes
    }
}

impl ScalarSink for RecordingSink {
    fn push_scalar(&mut self, value: f64) {
        self.pushes += 1;
        self.values.push(value);
    }
}

/// Mock [`ScalarSource`] over a fixed list that can be switched off to
/// imitate a torn-down container.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    readable: bool,
}

impl FixedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            readable: true,
        }
    }

    /// Make every subsequent read report nothing.
    pub fn disable(&mut self) {
        self.readable = false;
    }
}

impl ScalarSource for FixedSource {
    fn scalar_count(&self) -> usize {
        if self.readable {
            self.values.len()
        } else {
            0
        }
    }

    fn scalar_at(&self, index: usize) -> Option<f64> {
        if self.readable {
            self.values.get(index).copied()
        } else {
            None
        }
    }
}
