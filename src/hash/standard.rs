//! Baseline general-purpose string hash.

use crate::hash::StringHash;

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

/// General-purpose baseline hash: 32-bit FNV-1a.
///
/// This slot stands in for a host-provided built-in string hash. Rust's
/// built-in hasher is 64-bit and randomly keyed per process, which breaks the
/// determinism requirement, so this strategy substitutes the well-known 32-bit
/// FNV-1a algorithm instead. Nothing depends on the exact output here — it is
/// one of three redundant default slots, not the sole determinant of
/// correctness.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{StandardHash, StringHash};
///
/// let hash = StandardHash.hash("hello");
/// assert_eq!(hash, 0x4f9f_2cab);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHash;

impl StringHash for StandardHash {
    #[inline]
    fn hash(&self, input: &str) -> u32 {
        let mut h = OFFSET_BASIS;
        for &byte in input.as_bytes() {
            h ^= u32::from(byte);
            h = h.wrapping_mul(PRIME);
        }
        h
    }

    #[inline]
    fn name(&self) -> &'static str {
        "StandardHash"
    }
}
