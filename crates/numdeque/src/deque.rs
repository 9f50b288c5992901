//! The [`NumericDeque`] handle: lifecycle, indexed access, and end operations.
//!
//! Misuse (reading past the end, popping an empty array, touching a
//! destroyed array) is a contract violation and panics with a message
//! naming the operation and the array. The `try_*` accessors report the
//! same conditions as [`DequeError`] for callers that cannot pre-check.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use numdeque_core::{ArrayId, ConfigError, DequeError, ScalarSink, ScalarSource};

use crate::buffer::DequeBuffer;
use crate::config::DequeConfig;
use crate::registry::{Registry, SharedBuffer};

/// A growable, double-ended array of `f64`.
///
/// Append and prepend are O(1) amortized; `set` past the end zero-fills the
/// gap. Every array is registered with a [`Registry`] from construction until
/// it is destroyed or dropped. Derived arrays (`map`, `filter`, `split`, ...)
/// are new, independently owned instances in the same registry.
pub struct NumericDeque {
    id: ArrayId,
    config: DequeConfig,
    buffer: SharedBuffer,
    registry: Rc<Registry>,
}

impl NumericDeque {
    /// Create an empty array with the default config in the thread's
    /// default registry.
    pub fn new() -> Self {
        Self::new_in(&Registry::global())
    }

    /// Create an empty array with the default config in `registry`.
    pub fn new_in(registry: &Rc<Registry>) -> Self {
        let config = DequeConfig::default();
        Self::build(DequeBuffer::new(&config), config, registry)
    }

    /// Create an empty array with a custom config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_config(config: DequeConfig) -> Result<Self, ConfigError> {
        Self::with_config_in(config, &Registry::global())
    }

    /// Create an empty array with a custom config in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_config_in(
        config: DequeConfig,
        registry: &Rc<Registry>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(DequeBuffer::new(&config), config, registry))
    }

    /// Create an array holding a copy of `values`.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut deque = Self::new();
        deque.extend(values.iter().copied());
        deque
    }

    /// Build a sibling of `self` (same config and registry) over `values`,
    /// allocated to exactly `values.len()` slots.
    pub(crate) fn derived(&self, values: Vec<f64>) -> Self {
        Self::build(
            DequeBuffer::from_vec(values, &self.config),
            self.config,
            &self.registry,
        )
    }

    pub(crate) fn derived_in(
        values: Vec<f64>,
        config: DequeConfig,
        registry: &Rc<Registry>,
    ) -> Self {
        Self::build(DequeBuffer::from_vec(values, &config), config, registry)
    }

    fn build(buffer: DequeBuffer, config: DequeConfig, registry: &Rc<Registry>) -> Self {
        let id = ArrayId::next();
        let buffer = Rc::new(RefCell::new(buffer));
        registry.register(id, &buffer);
        Self {
            id,
            config,
            buffer,
            registry: Rc::clone(registry),
        }
    }

    /// This array's unique ID.
    pub fn id(&self) -> ArrayId {
        self.id
    }

    /// The config this array was built with.
    pub fn config(&self) -> DequeConfig {
        self.config
    }

    /// The registry this array is tracked by.
    pub fn registry(&self) -> &Rc<Registry> {
        &self.registry
    }

    /// Release the backing buffer and deregister this array.
    ///
    /// The handle stays usable for [`is_valid`](Self::is_valid); every
    /// other accessor panics afterwards. Destroying twice is a no-op.
    pub fn destroy(&mut self) {
        self.buffer.borrow_mut().release();
        self.registry.deregister(self.id);
    }

    /// Whether the backing buffer is still allocated.
    pub fn is_valid(&self) -> bool {
        self.buffer.borrow().is_live()
    }

    pub(crate) fn live(&self, op: &str) -> Ref<'_, DequeBuffer> {
        let buffer = self.buffer.borrow();
        assert!(buffer.is_live(), "{op}: array {} has been destroyed", self.id);
        buffer
    }

    fn live_mut(&mut self, op: &str) -> RefMut<'_, DequeBuffer> {
        let buffer = self.buffer.borrow_mut();
        assert!(buffer.is_live(), "{op}: array {} has been destroyed", self.id);
        buffer
    }

    fn checked(&self) -> Result<Ref<'_, DequeBuffer>, DequeError> {
        let buffer = self.buffer.borrow();
        if buffer.is_live() {
            Ok(buffer)
        } else {
            Err(DequeError::Destroyed { id: self.id })
        }
    }

    fn checked_mut(&mut self) -> Result<RefMut<'_, DequeBuffer>, DequeError> {
        let buffer = self.buffer.borrow_mut();
        if buffer.is_live() {
            Ok(buffer)
        } else {
            Err(DequeError::Destroyed { id: self.id })
        }
    }

    // ── Indexed access ─────────────────────────────────────────────

    /// Number of elements.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn size(&self) -> usize {
        self.live("size").len()
    }

    /// Whether the array holds no elements.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn is_empty(&self) -> bool {
        self.live("is_empty").is_empty()
    }

    /// Slots currently allocated in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.borrow().capacity()
    }

    /// Read the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()` or the array has been destroyed.
    pub fn get(&self, index: usize) -> f64 {
        let buffer = self.live("get");
        let size = buffer.len();
        assert!(
            index < size,
            "get: index {index} out of bounds for array {} of size {size}",
            self.id
        );
        buffer.window()[index]
    }

    /// Read the element at `index`, reporting misuse as an error.
    ///
    /// # Errors
    ///
    /// [`DequeError::IndexOutOfBounds`] or [`DequeError::Destroyed`].
    pub fn try_get(&self, index: usize) -> Result<f64, DequeError> {
        let buffer = self.checked()?;
        buffer.get(index).ok_or(DequeError::IndexOutOfBounds {
            index,
            size: buffer.len(),
        })
    }

    /// Write `value` at `index`.
    ///
    /// Writing at or past `size()` extends the array: slots between the old
    /// end and `index` become `0.0` and the size becomes `index + 1`.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn set(&mut self, index: usize, value: f64) {
        self.live_mut("set").set(index, value);
    }

    /// [`set`](Self::set) for callers holding a signed index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is negative or the array has been destroyed.
    pub fn set_signed(&mut self, index: i64, value: f64) {
        assert!(index >= 0, "set: negative index {index} for array {}", self.id);
        let index = usize::try_from(index)
            .unwrap_or_else(|_| panic!("set: index {index} exceeds the address space"));
        self.set(index, value);
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn first(&self) -> f64 {
        let buffer = self.live("first");
        match buffer.window().first() {
            Some(&v) => v,
            None => panic!("first: array {} is empty", self.id),
        }
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn last(&self) -> f64 {
        let buffer = self.live("last");
        match buffer.window().last() {
            Some(&v) => v,
            None => panic!("last: array {} is empty", self.id),
        }
    }

    /// Borrow the elements as a contiguous slice.
    ///
    /// The guard must be dropped before the array is mutated.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn as_slice(&self) -> Ref<'_, [f64]> {
        Ref::map(self.live("as_slice"), DequeBuffer::window)
    }

    /// Copy the elements into a `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn to_vec(&self) -> Vec<f64> {
        self.live("to_vec").window().to_vec()
    }

    // ── Deque operations ───────────────────────────────────────────

    /// Append `value` at the back. Equivalent to `set(size(), value)`.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn push_back(&mut self, value: f64) {
        self.live_mut("push_back").push_back(value);
    }

    /// Prepend `value` at the front.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn push_front(&mut self, value: f64) {
        self.live_mut("push_front").push_front(value);
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn pop_back(&mut self) -> f64 {
        let id = self.id;
        match self.live_mut("pop_back").pop_back() {
            Some(v) => v,
            None => panic!("pop_back: array {id} is empty"),
        }
    }

    /// Remove and return the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or has been destroyed.
    pub fn pop_front(&mut self) -> f64 {
        let id = self.id;
        match self.live_mut("pop_front").pop_front() {
            Some(v) => v,
            None => panic!("pop_front: array {id} is empty"),
        }
    }

    /// Remove and return the last element, reporting misuse as an error.
    ///
    /// # Errors
    ///
    /// [`DequeError::Empty`] or [`DequeError::Destroyed`].
    pub fn try_pop_back(&mut self) -> Result<f64, DequeError> {
        self.checked_mut()?.pop_back().ok_or(DequeError::Empty)
    }

    /// Remove and return the first element, reporting misuse as an error.
    ///
    /// # Errors
    ///
    /// [`DequeError::Empty`] or [`DequeError::Destroyed`].
    pub fn try_pop_front(&mut self) -> Result<f64, DequeError> {
        self.checked_mut()?.pop_front().ok_or(DequeError::Empty)
    }

    /// Remove every element, keeping the allocation.
    ///
    /// # Panics
    ///
    /// Panics if the array has been destroyed.
    pub fn clear(&mut self) {
        self.live_mut("clear").clear();
    }
}

impl Drop for NumericDeque {
    fn drop(&mut self) {
        self.registry.deregister(self.id);
    }
}

impl Default for NumericDeque {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for NumericDeque {
    /// Deep copy into a new, separately registered array.
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl PartialEq for NumericDeque {
    /// Exact element-wise equality. A destroyed array equals nothing.
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.buffer.borrow(), other.buffer.borrow());
        a.is_live() && b.is_live() && a.window() == b.window()
    }
}

impl fmt::Debug for NumericDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.borrow();
        f.debug_struct("NumericDeque")
            .field("id", &self.id)
            .field("valid", &buffer.is_live())
            .field("size", &buffer.len())
            .field("capacity", &buffer.capacity())
            .finish()
    }
}

impl Extend<f64> for NumericDeque {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        let mut buffer = self.live_mut("extend");
        for v in iter {
            buffer.push_back(v);
        }
    }
}

impl FromIterator<f64> for NumericDeque {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl From<&[f64]> for NumericDeque {
    fn from(values: &[f64]) -> Self {
        Self::from_slice(values)
    }
}

impl From<Vec<f64>> for NumericDeque {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }
}

impl ScalarSink for NumericDeque {
    fn push_scalar(&mut self, value: f64) {
        self.push_back(value);
    }
}

impl ScalarSource for NumericDeque {
    fn scalar_count(&self) -> usize {
        self.checked().map_or(0, |b| b.len())
    }

    fn scalar_at(&self, index: usize) -> Option<f64> {
        self.try_get(index).ok()
    }
}
