//! Strongly-typed array identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArrayId`] allocation.
static ARRAY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a numeric array.
///
/// Allocated from a monotonic atomic counter via [`ArrayId::next`]. Two
/// distinct arrays always have different IDs, even when one is a copy of
/// the other. The registry keys its liveness table by this ID, so a
/// destroyed array and a freshly constructed one never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayId(u64);

impl ArrayId {
    /// Allocate a fresh, unique array ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process.
    pub fn next() -> Self {
        Self(ARRAY_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this ID.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArrayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
