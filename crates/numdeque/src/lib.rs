//! A growable, double-ended `f64` array with sparse indexing.
//!
//! [`NumericDeque`] offers O(1) amortized append and prepend, direct
//! indexing that zero-fills when writing past the end, and a family of
//! derived-array algorithms (map, filter, unique, split, ...) that always
//! return new, independently owned arrays.
//!
//! # Architecture
//!
//! ```text
//! NumericDeque (handle)
//! ├── ArrayId (unique, from numdeque-core)
//! ├── DequeConfig (initial capacity, growth factor)
//! ├── Rc<RefCell<DequeBuffer>>  Vec<f64> + origin/end cursors
//! └── Rc<Registry>              Weak refs to every live buffer
//! ```
//!
//! Growth reallocates by the configured factor and re-centres the logical
//! window so both ends keep slack. The registry can tear down every live
//! buffer at once ([`destroy_all`]); handles survive but any further access
//! is a contract violation.
//!
//! # Contract violations
//!
//! Out-of-range `get`, pops on an empty array, aggregates of an empty
//! array, and any access after teardown panic. They are programmer errors,
//! not runtime conditions. The `try_*` accessors exist for callers that
//! want a [`DequeError`] instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod deque;
pub mod derive;
pub mod format;
pub mod registry;
pub mod stats;

/// Core identifiers, errors, and collaborator traits (`numdeque-core`).
pub use numdeque_core as types;

pub use config::DequeConfig;
pub use deque::NumericDeque;
pub use derive::Split;
pub use numdeque_core::{approx_eq, ArrayId, ConfigError, DequeError, ScalarSink, ScalarSource, EPSILON};
pub use registry::{destroy_all, num_arrays, Registry};
