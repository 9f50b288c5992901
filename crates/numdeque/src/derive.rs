//! Algorithms that build new arrays from existing ones.
//!
//! Every function here leaves its inputs untouched and returns freshly
//! allocated arrays registered alongside the source. Results are sized
//! exactly to their contents.

use std::rc::Rc;

use numdeque_core::approx_eq;

use crate::config::DequeConfig;
use crate::deque::NumericDeque;
use crate::registry::Registry;

/// The result of [`NumericDeque::split`].
#[derive(Debug)]
pub struct Split {
    /// The chunks, in source order.
    pub chunks: Vec<NumericDeque>,
    /// Number of chunks produced: `min(n, size)`, or 0 for degenerate input.
    pub count: usize,
}

impl Split {
    fn empty() -> Self {
        Self {
            chunks: Vec::new(),
            count: 0,
        }
    }

    /// Sizes of each chunk, in order.
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.chunks.iter().map(NumericDeque::size).collect()
    }
}

impl NumericDeque {
    /// Apply `f` to every element, producing an array of the same size.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn map<F>(&self, mut f: F) -> NumericDeque
    where
        F: FnMut(f64) -> f64,
    {
        let values = self.live("map").window().iter().map(|&v| f(v)).collect();
        self.derived(values)
    }

    /// Keep the elements for which `predicate` holds, in order.
    ///
    /// Counts matches first, then allocates exactly that many slots.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn filter<P>(&self, mut predicate: P) -> NumericDeque
    where
        P: FnMut(f64) -> bool,
    {
        let buffer = self.live("filter");
        let window = buffer.window();
        let matches = window.iter().filter(|&&v| predicate(v)).count();

        let mut kept = Vec::with_capacity(matches);
        kept.extend(window.iter().copied().filter(|&v| predicate(v)));
        drop(buffer);
        self.derived(kept)
    }

    /// Drop elements within [`EPSILON`](numdeque_core::EPSILON) of an earlier
    /// element, keeping the first occurrence of each.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn unique(&self) -> NumericDeque {
        let buffer = self.live("unique");
        let mut seen: Vec<f64> = Vec::new();
        for &v in buffer.window() {
            if !seen.iter().any(|&u| approx_eq(u, v)) {
                seen.push(v);
            }
        }
        drop(buffer);
        self.derived(seen)
    }

    /// Divide the array into at most `n` contiguous chunks.
    ///
    /// With `s = size()` and `count = min(n, s)`, every chunk but the last
    /// holds `ceil(s / count)` elements and the last holds the rest, so the
    /// sizes always sum to `s`. When the ceiling exhausts the source early
    /// the trailing chunks are empty. `n == 0` or an empty source yields no
    /// chunks and `count == 0`.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn split(&self, n: usize) -> Split {
        let buffer = self.live("split");
        let window = buffer.window();
        let size = window.len();
        if n == 0 || size == 0 {
            return Split::empty();
        }

        let count = n.min(size);
        let chunk_len = size.div_ceil(count);
        let bounds: Vec<(usize, usize)> = (0..count)
            .map(|k| {
                let lo = (k * chunk_len).min(size);
                let hi = if k + 1 == count {
                    size
                } else {
                    (lo + chunk_len).min(size)
                };
                (lo, hi)
            })
            .collect();
        let pieces: Vec<Vec<f64>> = bounds
            .into_iter()
            .map(|(lo, hi)| window[lo..hi].to_vec())
            .collect();
        drop(buffer);

        let chunks = pieces
            .into_iter()
            .map(|piece| self.derived(piece))
            .collect();
        Split { chunks, count }
    }

    /// `a`'s elements followed by `b`'s, as a new array in `a`'s registry.
    ///
    /// # Panics
    ///
    /// Panics if either array has been destroyed.
    pub fn concat(a: &NumericDeque, b: &NumericDeque) -> NumericDeque {
        let (left, right) = (a.live("concat"), b.live("concat"));
        let mut values = Vec::with_capacity(left.len() + right.len());
        values.extend_from_slice(left.window());
        values.extend_from_slice(right.window());
        drop((left, right));
        a.derived(values)
    }

    /// `start, start + step, start + 2*step, ...` while strictly before
    /// `stop` in the direction of `step`, in the default registry.
    ///
    /// A step pointing away from `stop` yields an empty array.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero or any argument is not finite.
    pub fn range(start: f64, stop: f64, step: f64) -> NumericDeque {
        Self::range_in(start, stop, step, &Registry::global())
    }

    /// [`range`](Self::range) built in `registry`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero or any argument is not finite.
    pub fn range_in(start: f64, stop: f64, step: f64, registry: &Rc<Registry>) -> NumericDeque {
        assert!(
            start.is_finite() && stop.is_finite() && step.is_finite(),
            "range: arguments must be finite (start {start}, stop {stop}, step {step})"
        );
        assert!(step != 0.0, "range: step must be non-zero");

        // Multiply rather than accumulate so rounding error does not drift.
        let values = (0u32..)
            .map(|k| start + f64::from(k) * step)
            .take_while(|&v| if step > 0.0 { v < stop } else { v > stop })
            .collect();
        Self::derived_in(values, DequeConfig::default(), registry)
    }

    /// Deep copy with an independent buffer.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn copy(&self) -> NumericDeque {
        let values = self.live("copy").window().to_vec();
        self.derived(values)
    }

    /// Deep copy of the logical slice `[lo, hi)`.
    ///
    /// # Panics
    ///
    /// Panics unless `lo <= hi <= size()`, or if the array has been destroyed.
    pub fn subarray(&self, lo: usize, hi: usize) -> NumericDeque {
        let buffer = self.live("subarray");
        let size = buffer.len();
        assert!(
            lo <= hi && hi <= size,
            "subarray: range {lo}..{hi} invalid for array {} of size {size}",
            self.id()
        );
        let values = buffer.window()[lo..hi].to_vec();
        drop(buffer);
        self.derived(values)
    }

    /// Whether both arrays have the same size and every pair of elements is
    /// within [`EPSILON`](numdeque_core::EPSILON).
    ///
    /// # Panics
    ///
    /// Panics if either array has been destroyed.
    pub fn approx_eq(&self, other: &NumericDeque) -> bool {
        let (a, b) = (self.live("approx_eq"), other.live("approx_eq"));
        a.len() == b.len()
            && a
                .window()
                .iter()
                .zip(b.window())
                .all(|(&x, &y)| approx_eq(x, y))
    }
}
