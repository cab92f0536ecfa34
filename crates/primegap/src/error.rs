//! Error types for bound parsing and prime scans.

use thiserror::Error;

/// Errors raised by `primegap`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bound is not a positive integer.
    #[error("Invalid bound: {0}")]
    InvalidBound(String),

    /// The prime sequence could not grow any further.
    #[error("Resource exhausted after {primes_found} primes")]
    ResourceExhausted {
        /// Number of primes accumulated before the allocation failed.
        primes_found: usize,
    },
}

/// Result alias for `primegap` operations.
pub type Result<T> = std::result::Result<T, Error>;
