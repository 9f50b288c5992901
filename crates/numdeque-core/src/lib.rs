//! Core types and traits for the numdeque workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the engine and its collaborators: array
//! identifiers, the epsilon comparison, error types, and the value-in /
//! value-out traits external code uses to talk to a numeric container.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod float;
pub mod id;
pub mod traits;

pub use error::{ConfigError, DequeError};
pub use float::{approx_eq, EPSILON};
pub use id::ArrayId;
pub use traits::{ScalarSink, ScalarSource};
