//! Cryptographic-digest wrapper with 32-bit folding.
//!
//! Any algorithm implementing the RustCrypto [`digest::Digest`] trait can fill
//! a hash slot: the wrapper digests the UTF-8 bytes of the input, then folds
//! the wide digest down to 32 bits with the Murmur2 byte hash. This
//! demonstrates composability — the filter does not gain any cryptographic
//! guarantee from it, and it is not part of the default configuration.

use std::marker::PhantomData;

use digest::Digest;

use crate::hash::murmur2::murmur2;
use crate::hash::StringHash;

/// String-hash strategy backed by an injected cryptographic digest.
///
/// The digest capability is supplied as the type parameter `D`; the wrapper
/// holds no other state and produces a pure value per call.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{CryptoHash, StringHash};
/// use sha2::Sha256;
///
/// let strategy = CryptoHash::<Sha256>::new();
/// let h1 = strategy.hash("hello");
/// let h2 = strategy.hash("hello");
/// assert_eq!(h1, h2);
/// ```
///
/// Filling a filter slot works like any other strategy:
///
/// ```
/// use bloomsieve::BloomFilter;
/// use bloomsieve::hash::{CryptoHash, MurmurHash2, StringHash};
/// use md5::Md5;
///
/// let hashes: Vec<Box<dyn StringHash>> = vec![
///     Box::new(MurmurHash2),
///     Box::new(CryptoHash::<Md5>::new()),
/// ];
/// let mut filter = BloomFilter::new(10_000, hashes)?;
/// filter.add("item");
/// assert!(filter.lookup("item"));
/// # Ok::<(), bloomsieve::BloomSieveError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CryptoHash<D> {
    // fn() -> D keeps the wrapper Send + Sync regardless of D
    _digest: PhantomData<fn() -> D>,
}

impl<D> CryptoHash<D> {
    /// Create a wrapper over the digest algorithm `D`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> Default for CryptoHash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> StringHash for CryptoHash<D> {
    fn hash(&self, input: &str) -> u32 {
        let digest = D::digest(input.as_bytes());
        murmur2(&digest)
    }

    fn name(&self) -> &'static str {
        "CryptoHash"
    }
}
