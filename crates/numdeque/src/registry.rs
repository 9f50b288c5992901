//! Liveness registry for numeric arrays.
//!
//! Every [`NumericDeque`](crate::NumericDeque) registers its buffer with a
//! [`Registry`] on construction and deregisters on `destroy()` or drop. The
//! registry holds only `Weak` references, so it never keeps an array's
//! storage alive on its own, but it can still reach every live buffer to
//! tear it down in bulk.
//!
//! # Scope
//!
//! Arrays are `!Send`, so the default registry returned by
//! [`Registry::global`] is per thread. For a single-threaded program that
//! is the whole process; under the test harness each test thread starts
//! with an empty registry. Callers wanting tighter isolation can construct
//! their own `Registry` and build arrays with
//! [`NumericDeque::new_in`](crate::NumericDeque::new_in).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use numdeque_core::ArrayId;

use crate::buffer::DequeBuffer;

/// Shared handle to one array's backing storage.
pub(crate) type SharedBuffer = Rc<RefCell<DequeBuffer>>;

thread_local! {
    static GLOBAL: Rc<Registry> = Rc::new(Registry::new());
}

/// Bookkeeping of all live arrays built against it.
#[derive(Debug)]
pub struct Registry {
    /// ArrayId → buffer, in registration order.
    live: RefCell<IndexMap<ArrayId, Weak<RefCell<DequeBuffer>>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            live: RefCell::new(IndexMap::new()),
        }
    }

    /// The default registry for the current thread.
    pub fn global() -> Rc<Registry> {
        GLOBAL.with(Rc::clone)
    }

    pub(crate) fn register(&self, id: ArrayId, buffer: &SharedBuffer) {
        self.live.borrow_mut().insert(id, Rc::downgrade(buffer));
    }

    /// Forget `id` without touching its buffer.
    ///
    /// Returns `true` if `id` was registered.
    pub(crate) fn deregister(&self, id: ArrayId) -> bool {
        self.live.borrow_mut().shift_remove(&id).is_some()
    }

    /// Whether `id` is currently registered.
    pub fn contains(&self, id: ArrayId) -> bool {
        self.live.borrow().contains_key(&id)
    }

    /// Number of registered arrays.
    pub fn count(&self) -> usize {
        self.live.borrow().len()
    }

    /// Tear down every registered array's buffer and empty the registry.
    ///
    /// The arrays themselves stay addressable; any later indexed access or
    /// size query on them is a contract violation. Returns the number of
    /// buffers released.
    ///
    /// # Panics
    ///
    /// Panics if one of the registered arrays is borrowed at the time of
    /// the call, e.g. when invoked from inside a `map` or `filter` closure.
    pub fn clear(&self) -> usize {
        let entries = std::mem::take(&mut *self.live.borrow_mut());
        let mut released = 0;
        for (_, weak) in entries {
            if let Some(buffer) = weak.upgrade() {
                if buffer.borrow_mut().release() {
                    released += 1;
                }
            }
        }
        log::debug!("registry cleared: {released} array buffers released");
        released
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of live arrays in the current thread's default registry.
pub fn num_arrays() -> usize {
    Registry::global().count()
}

/// Destroy every array in the current thread's default registry.
///
/// Returns the number of arrays torn down.
pub fn destroy_all() -> usize {
    Registry::global().clear()
}
