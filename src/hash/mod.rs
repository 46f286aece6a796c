//! String-hash strategies for the Bloom filter.
//!
//! Each strategy is a stateless, total, deterministic mapping from a string to
//! a 32-bit unsigned value, defined over the UTF-8 byte encoding of the input.
//! Strategies are interchangeable wherever a [`StringHash`] is expected; the
//! filter holds an ordered list of them and never cares about concrete
//! identity.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── standard.rs   - StandardHash (32-bit FNV-1a baseline)
//! ├── murmur2.rs    - MurmurHash2 (classic 32-bit Murmur2)
//! ├── superfast.rs  - SuperFastHash (Paul Hsieh's algorithm)
//! ├── crypto.rs     - CryptoHash (digest wrapper with 32-bit folding)
//! └── mod.rs        - This file (StringHash trait, public API)
//! ```
//!
//! # Choosing a Strategy
//!
//! | Strategy | Mixing quality | Cost | Use Case |
//! |----------|----------------|------|----------|
//! | [`StandardHash`] | Good | Cheapest | General-purpose baseline slot |
//! | [`MurmurHash2`] | Excellent | Cheap | Default mid slot |
//! | [`SuperFastHash`] | Excellent | Cheap | Default third slot |
//! | [`CryptoHash`] | Excellent | Expensive | Digest composability, not default |
//!
//! # Examples
//!
//! ```
//! use bloomsieve::hash::{MurmurHash2, StringHash};
//!
//! let hash = MurmurHash2.hash("hello");
//! assert_eq!(hash, 0x8d0c_86bc);
//! ```

pub mod crypto;
pub mod murmur2;
pub mod standard;
pub mod superfast;

pub use crypto::CryptoHash;
pub use murmur2::{murmur2, murmur2_seeded, MurmurHash2, MURMUR2_SEED};
pub use standard::StandardHash;
pub use superfast::{super_fast_hash, SuperFastHash};

/// A pure mapping from a string to a 32-bit unsigned hash value.
///
/// # Requirements
///
/// Implementations must be:
/// - **Total**: never fail, for any input including the empty string
/// - **Deterministic**: same input always yields the same output, in every
///   process
/// - **Byte-defined**: operate on the UTF-8 byte encoding of the input
///
/// Implementations carry no mutable state; a single instance may be shared
/// across any number of filters.
///
/// # Object Safety
///
/// The trait is object-safe so filters can hold heterogeneous strategy lists
/// as `Vec<Box<dyn StringHash>>`.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{StandardHash, StringHash};
///
/// let h1 = StandardHash.hash("input");
/// let h2 = StandardHash.hash("input");
/// assert_eq!(h1, h2);
/// ```
pub trait StringHash: Send + Sync {
    /// Hash a string to a 32-bit unsigned value.
    fn hash(&self, input: &str) -> u32;

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn StringHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
