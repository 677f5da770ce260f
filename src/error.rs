// This file is part of fixed-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedStackVec`.
//!
//! Only the fallible API returns these. Contract violations (`push_back` on a
//! full vector, indexing past `len`) panic instead.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fallible operations on [`FixedStackVec`](crate::FixedStackVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index was outside the live range `0..len`.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::Full.to_string(), "capacity exceeded");
        assert_eq!(Error::OutOfBounds.to_string(), "index out of bounds");
    }
}
