//! Error types for BloomSieve operations.
//!
//! The error surface is intentionally small: every runtime operation on a
//! validly constructed filter is infallible, so errors can only arise at
//! construction time.
//!
//! # Error Propagation
//!
//! ```
//! use bloomsieve::{BloomFilter, Result};
//!
//! fn build(size: usize) -> Result<BloomFilter> {
//!     let filter = BloomFilter::with_default_hashes(size)?;
//!     Ok(filter)
//! }
//! # assert!(build(1000).is_ok());
//! # assert!(build(0).is_err());
//! ```

use std::fmt;

/// Result type alias for BloomSieve operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BloomSieveError`].
pub type Result<T> = std::result::Result<T, BloomSieveError>;

/// Errors that can occur when constructing a Bloom filter.
///
/// A non-positive table size or an empty hash-strategy list must fail fast at
/// construction rather than silently degrade to a zero/empty filter.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Each variant includes sufficient context for debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloomSieveError {
    /// Bit table size is invalid.
    ///
    /// The size must be positive, and it must fit in the unsigned 32-bit
    /// domain used for the `hash mod size` reduction.
    InvalidFilterSize {
        /// The invalid size in bits.
        size: usize,
    },

    /// The hash-strategy list is empty.
    ///
    /// A filter with no hash functions would report every lookup as a hit,
    /// which is useless; construction rejects it outright.
    NoHashFunctions,
}

impl fmt::Display for BloomSieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Must be positive and fit in 32 bits.",
                    size
                )
            }
            Self::NoHashFunctions => {
                write!(f, "Bloom filter requires at least one hash function.")
            }
        }
    }
}

impl std::error::Error for BloomSieveError {}

impl BloomSieveError {
    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create a `NoHashFunctions` error.
    #[must_use]
    pub fn no_hash_functions() -> Self {
        Self::NoHashFunctions
    }
}
