//! BloomSieve: a string-keyed Bloom filter with pluggable 32-bit hash strategies.
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests
//! whether an element is a member of a set. It can produce:
//! - **False positives**: May indicate an element is in the set when it isn't
//! - **Zero false negatives**: If it says an element isn't in the set, it definitely isn't
//!
//! BloomSieve keeps the structure deliberately simple: one fixed-size bit table
//! plus an ordered list of interchangeable string-hash strategies. Each strategy
//! maps a string to a 32-bit value; insertion sets one bit per strategy, lookup
//! checks the same bits.
//!
//! # Quick Start
//!
//! ```
//! use bloomsieve::BloomFilter;
//!
//! // Standard, Murmur2, and SuperFastHash strategies, in that order
//! let mut filter = BloomFilter::with_default_hashes(100_003)?;
//!
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.lookup("hello"));    // definitely added
//! assert!(!filter.lookup("goodbye")); // almost certainly absent
//! # Ok::<(), bloomsieve::BloomSieveError>(())
//! ```
//!
//! # Choosing Hash Strategies
//!
//! Any value implementing [`StringHash`] can fill a hash slot, and the filter
//! never cares about concrete identity — only the `string -> u32` behavior:
//!
//! ```
//! use bloomsieve::BloomFilter;
//! use bloomsieve::hash::{MurmurHash2, StringHash, SuperFastHash};
//!
//! let hashes: Vec<Box<dyn StringHash>> = vec![
//!     Box::new(MurmurHash2),
//!     Box::new(SuperFastHash),
//! ];
//! let mut filter = BloomFilter::new(10_000, hashes)?;
//! filter.add("item");
//! assert!(filter.lookup("item"));
//! # Ok::<(), bloomsieve::BloomSieveError>(())
//! ```
//!
//! | Strategy | Algorithm | Notes |
//! |----------|-----------|-------|
//! | [`StandardHash`] | 32-bit FNV-1a | General-purpose baseline |
//! | [`MurmurHash2`] | Murmur2 (seed `0xc58f1a7b`) | Strong mixing, fast |
//! | [`SuperFastHash`] | Paul Hsieh's SuperFastHash | Strong avalanche |
//! | [`CryptoHash`] | Any `digest::Digest`, folded to 32 bits | Composability demo |
//!
//! # Saturation
//!
//! [`BloomFilter::occupancy`] reports the fraction of set bits, a proxy for how
//! false-positive-prone the filter has become. Bits are only ever set, never
//! cleared, so occupancy is monotone over the filter's lifetime — that
//! monotonicity is what guarantees no false negatives once an element has been
//! added.
//!
//! # Thread Safety
//!
//! The filter is single-threaded by design: `add` takes `&mut self` and the bit
//! table is plain (non-atomic) storage. For concurrent access, wrap the filter
//! in a `Mutex` or `RwLock`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]

/// Core data structures: the bit table and the filter itself
pub mod core;

/// Error types and result alias
pub mod error;

/// String-hash strategies
pub mod hash;

// Re-export commonly used types at crate root
pub use crate::core::{BitTable, BloomFilter};
pub use error::{BloomSieveError, Result};
pub use hash::{CryptoHash, MurmurHash2, StandardHash, StringHash, SuperFastHash};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomsieve::prelude::*;
///
/// let mut filter = BloomFilter::with_default_hashes(1_000)?;
/// filter.add("hello");
/// assert!(filter.lookup("hello"));
/// # Ok::<(), bloomsieve::BloomSieveError>(())
/// ```
pub mod prelude {
    pub use crate::core::{BitTable, BloomFilter};
    pub use crate::error::{BloomSieveError, Result};
    pub use crate::hash::{CryptoHash, MurmurHash2, StandardHash, StringHash, SuperFastHash};
}
