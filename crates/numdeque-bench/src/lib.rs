//! Benchmark workloads for the numdeque array.
//!
//! Each profile drives a [`NumericDeque`] through a fixed, reproducible
//! sequence of operations:
//!
//! - [`push_back_profile`]: append-only growth from the default capacity
//! - [`alternating_ends_profile`]: seeded mix of front/back pushes and pops
//! - [`sparse_set_profile`]: strided writes past the end (zero-fill path)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use numdeque::NumericDeque;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Append `0.0..n` one value at a time.
pub fn push_back_profile(n: usize) -> NumericDeque {
    let mut deque = NumericDeque::new();
    for i in 0..n {
        deque.push_back(i as f64);
    }
    deque
}

/// Run `steps` operations chosen by a seeded RNG.
///
/// Pushes outnumber pops three to one, so the array keeps growing at both
/// ends. Pops are skipped while the array is empty.
pub fn alternating_ends_profile(seed: u64, steps: usize) -> NumericDeque {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deque = NumericDeque::new();
    for _ in 0..steps {
        let value: f64 = rng.gen_range(-1.0..1.0);
        match rng.gen_range(0..8u8) {
            0..=2 => deque.push_back(value),
            3..=5 => deque.push_front(value),
            6 if !deque.is_empty() => {
                deque.pop_back();
            }
            7 if !deque.is_empty() => {
                deque.pop_front();
            }
            _ => {}
        }
    }
    deque
}

/// Write `count` values at indices `0, stride, 2*stride, ...`.
///
/// Final size is `(count - 1) * stride + 1`; every untouched slot is zero.
pub fn sparse_set_profile(count: usize, stride: usize) -> NumericDeque {
    let mut deque = NumericDeque::new();
    for k in 0..count {
        deque.set(k * stride, k as f64 + 1.0);
    }
    deque
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_profile_holds_ascending_values() {
        let d = push_back_profile(100);
        assert_eq!(d.size(), 100);
        assert_eq!(d.first(), 0.0);
        assert_eq!(d.last(), 99.0);
    }

    #[test]
    fn alternating_ends_profile_deterministic() {
        let a = alternating_ends_profile(42, 1_000);
        let b = alternating_ends_profile(42, 1_000);
        assert_eq!(a, b);
        assert!(a.size() <= 1_000);
    }

    #[test]
    fn sparse_set_profile_zero_fills_gaps() {
        let d = sparse_set_profile(4, 10);
        assert_eq!(d.size(), 31);
        assert_eq!(d.get(0), 1.0);
        assert_eq!(d.get(5), 0.0);
        assert_eq!(d.get(30), 4.0);
        assert_eq!(d.sum(), 10.0);
    }

    #[test]
    fn sparse_set_profile_empty() {
        assert!(sparse_set_profile(0, 10).is_empty());
    }
}
