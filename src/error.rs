// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types.

/// Errors returned by Bloom filter operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two filters with different `(bits, k)` were combined.
    #[error("parameter mismatch: expected bits={} k={}, found bits={} k={}", .expected.0, .expected.1, .found.0, .found.1)]
    ParameterMismatch {
        /// Parameters of the receiving filter.
        expected: (usize, u16),
        /// Parameters of the other filter.
        found: (usize, u16),
    },

    /// A byte buffer could not be decoded into a filter.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What was wrong with the buffer.
        reason: String,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
