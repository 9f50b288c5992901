//! Two-cursor backing storage with re-centring growth.
//!
//! A [`DequeBuffer`] is a contiguous `Vec<f64>` plus two plain indices,
//! `origin` and `end`, delimiting the logical window. Both ends have spare
//! slots so that append and prepend are O(1) amortized: when one side runs
//! out, the buffer is reallocated and the window is copied back into the
//! middle of the new storage.
//!
//! ```text
//!  0        origin               end        capacity
//!  |  slack  | v0 v1 v2 ... vk-1 |  slack  |
//! ```

use crate::config::DequeConfig;

/// Backing storage for one numeric deque.
///
/// Invariant while live: `origin <= end <= capacity`. Slots outside
/// `[origin, end)` hold unspecified values and are never read back; every
/// path that widens the window writes the new slots first.
#[derive(Debug)]
pub struct DequeBuffer {
    /// Backing storage. `None` once the buffer has been torn down.
    data: Option<Vec<f64>>,
    /// Storage index of logical position 0.
    origin: usize,
    /// Storage index one past the last logical element.
    end: usize,
    /// Multiplier applied on reallocation.
    growth_factor: usize,
}

impl DequeBuffer {
    /// Allocate `config.initial_capacity` slots with both cursors centred.
    pub fn new(config: &DequeConfig) -> Self {
        let centre = config.initial_capacity / 2;
        Self {
            data: Some(vec![0.0; config.initial_capacity]),
            origin: centre,
            end: centre,
            growth_factor: config.growth_factor,
        }
    }

    /// Wrap `values` as an exactly-sized window with no slack.
    ///
    /// Used for derived arrays whose final length is known up front.
    pub fn from_vec(values: Vec<f64>, config: &DequeConfig) -> Self {
        let len = values.len();
        Self {
            data: Some(values),
            origin: 0,
            end: len,
            growth_factor: config.growth_factor,
        }
    }

    /// Whether the storage is still allocated.
    pub fn is_live(&self) -> bool {
        self.data.is_some()
    }

    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.end - self.origin
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.origin == self.end
    }

    /// Total slots allocated (0 once torn down).
    pub fn capacity(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// Storage index of logical position 0.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Storage index one past the last element.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The logical window as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has been released.
    pub fn window(&self) -> &[f64] {
        &self.storage()[self.origin..self.end]
    }

    /// The logical window as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has been released.
    pub fn window_mut(&mut self) -> &mut [f64] {
        let (origin, end) = (self.origin, self.end);
        &mut self.storage_mut()[origin..end]
    }

    /// Read logical index `index`, or `None` if it is outside the window.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.window().get(index).copied()
    }

    /// Ensure at least `front` free slots before `origin` and `back` free
    /// slots after `end`, reallocating if either side is short.
    ///
    /// The new capacity is the larger of the current capacity and the
    /// required size, times the growth factor. The window lands after the
    /// requested front headroom plus half of the remaining spare slots, so
    /// both sides keep slack for further growth.
    pub fn reserve(&mut self, front: usize, back: usize) {
        let capacity = self.capacity();
        if self.origin >= front && capacity - self.end >= back {
            return;
        }

        let len = self.len();
        let required = len
            .checked_add(front)
            .and_then(|n| n.checked_add(back))
            .unwrap_or_else(|| panic!("deque capacity overflow"));
        let new_capacity = capacity
            .max(required)
            .checked_mul(self.growth_factor)
            .unwrap_or(required);
        let spare = new_capacity - required;
        let new_origin = front + spare / 2;

        let mut next = vec![0.0; new_capacity];
        next[new_origin..new_origin + len].copy_from_slice(self.window());

        log::trace!(
            "deque buffer grew {capacity} -> {new_capacity} slots (len {len}, origin {} -> {new_origin})",
            self.origin
        );

        self.data = Some(next);
        self.origin = new_origin;
        self.end = new_origin + len;
    }

    /// Grow the window at the back to `new_len`, zero-filling new slots.
    ///
    /// Does nothing if the window is already at least `new_len` long.
    pub fn extend_back_to(&mut self, new_len: usize) {
        let len = self.len();
        if new_len <= len {
            return;
        }
        self.reserve(0, new_len - len);
        let (old_end, new_end) = (self.end, self.origin + new_len);
        self.storage_mut()[old_end..new_end].fill(0.0);
        self.end = new_end;
    }

    /// Overwrite logical index `index`, extending the window if needed.
    pub fn set(&mut self, index: usize, value: f64) {
        let new_len = index
            .checked_add(1)
            .unwrap_or_else(|| panic!("deque capacity overflow"));
        self.extend_back_to(new_len);
        let slot = self.origin + index;
        self.storage_mut()[slot] = value;
    }

    /// Append one value after the last element.
    pub fn push_back(&mut self, value: f64) {
        self.reserve(0, 1);
        let slot = self.end;
        self.storage_mut()[slot] = value;
        self.end += 1;
    }

    /// Prepend one value before the first element.
    pub fn push_front(&mut self, value: f64) {
        self.reserve(1, 0);
        self.origin -= 1;
        let slot = self.origin;
        self.storage_mut()[slot] = value;
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        self.end -= 1;
        Some(self.storage()[self.end])
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let value = self.storage()[self.origin];
        self.origin += 1;
        Some(value)
    }

    /// Empty the window and re-centre both cursors without deallocating.
    pub fn clear(&mut self) {
        let centre = self.capacity() / 2;
        self.origin = centre;
        self.end = centre;
    }

    /// Drop the backing storage.
    ///
    /// Returns `true` if the buffer was live before the call.
    pub fn release(&mut self) -> bool {
        self.origin = 0;
        self.end = 0;
        self.data.take().is_some()
    }

    fn storage(&self) -> &[f64] {
        match &self.data {
            Some(data) => data,
            None => panic!("deque buffer accessed after teardown"),
        }
    }

    fn storage_mut(&mut self) -> &mut [f64] {
        match &mut self.data {
            Some(data) => data,
            None => panic!("deque buffer accessed after teardown"),
        }
    }
}
