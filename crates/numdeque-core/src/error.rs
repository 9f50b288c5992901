//! Error types for numdeque.
//!
//! Only recoverable conditions live here. Contract violations (reading past
//! the end, popping an empty array, touching a destroyed array) panic at the
//! call site instead; the enums below back the checked `try_*` accessors and
//! configuration validation.

use std::error::Error;
use std::fmt;

use crate::id::ArrayId;

/// Errors returned by the checked accessors of a numeric array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DequeError {
    /// The requested logical index is not inside `[0, size)`.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The array size at the time of the request.
        size: usize,
    },
    /// A pop or peek was attempted on an empty array.
    Empty,
    /// The array's buffer has been torn down by `destroy` or `destroy_all`.
    Destroyed {
        /// The destroyed array.
        id: ArrayId,
    },
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "index {index} out of bounds for array of size {size}")
            }
            Self::Empty => write!(f, "array is empty"),
            Self::Destroyed { id } => write!(f, "array {id} has been destroyed"),
        }
    }
}

impl Error for DequeError {}

/// Errors from validating a deque configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial capacity must be at least one slot.
    ZeroCapacity,
    /// The growth factor must be at least 2 to keep growth amortized O(1).
    GrowthFactorTooSmall {
        /// The rejected factor.
        factor: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
            Self::GrowthFactorTooSmall { factor } => {
                write!(f, "growth factor must be at least 2, got {factor}")
            }
        }
    }
}

impl Error for ConfigError {}
