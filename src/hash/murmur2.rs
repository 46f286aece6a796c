//! Classic 32-bit MurmurHash2.
//!
//! Austin Appleby's Murmur2 over little-endian 4-byte blocks, with the
//! remainder-length-specific tail mix and the standard final avalanche. The
//! byte-slice form is exposed on its own because the cryptographic wrapper
//! reuses it to fold digest output down to 32 bits.
//!
//! # Algorithm
//!
//! ```text
//! h = seed ^ len
//! per 4-byte block k (little-endian):
//!     k *= m;  k ^= k >> r;  k *= m
//!     h *= m;  h ^= k
//! tail (1-3 bytes): remainder-specific xor, then h *= m
//! avalanche: h ^= h >> 13;  h *= m;  h ^= h >> 15
//! ```
//!
//! with `m = 0x5bd1e995` and `r = 24`. A zero-length input hashes to 0.

use crate::hash::StringHash;

/// Default seed for [`murmur2`].
pub const MURMUR2_SEED: u32 = 0xc58f_1a7b;

const M: u32 = 0x5bd1_e995;
const R: u32 = 24;

/// Hash a byte slice with the default seed.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::murmur2;
///
/// assert_eq!(murmur2(b""), 0);
/// assert_eq!(murmur2(b"hello"), 0x8d0c_86bc);
/// ```
#[must_use]
#[inline]
pub fn murmur2(data: &[u8]) -> u32 {
    murmur2_seeded(data, MURMUR2_SEED)
}

/// Hash a byte slice with an explicit seed.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{murmur2, murmur2_seeded, MURMUR2_SEED};
///
/// assert_eq!(murmur2_seeded(b"hello", MURMUR2_SEED), murmur2(b"hello"));
/// assert_ne!(murmur2_seeded(b"hello", 1), murmur2_seeded(b"hello", 2));
/// ```
#[must_use]
pub fn murmur2_seeded(data: &[u8], seed: u32) -> u32 {
    if data.is_empty() {
        return 0;
    }

    let mut h = seed ^ data.len() as u32;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let mut k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = blocks.remainder();
    match tail.len() {
        3 => {
            h ^= u32::from(u16::from_le_bytes([tail[0], tail[1]]));
            h ^= u32::from(tail[2]) << 16;
            h = h.wrapping_mul(M);
        }
        2 => {
            h ^= u32::from(u16::from_le_bytes([tail[0], tail[1]]));
            h = h.wrapping_mul(M);
        }
        1 => {
            h ^= u32::from(tail[0]);
            h = h.wrapping_mul(M);
        }
        _ => {}
    }

    // Final mixes so the last few bytes are well-incorporated
    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;

    h
}

/// Classic 32-bit Murmur2 string-hash strategy.
///
/// Hashes the UTF-8 bytes of the input with [`murmur2`].
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{MurmurHash2, StringHash};
///
/// assert_eq!(MurmurHash2.hash(""), 0);
/// assert_eq!(MurmurHash2.hash("hello"), 0x8d0c_86bc);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MurmurHash2;

impl StringHash for MurmurHash2 {
    #[inline]
    fn hash(&self, input: &str) -> u32 {
        murmur2(input.as_bytes())
    }

    #[inline]
    fn name(&self) -> &'static str {
        "MurmurHash2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(murmur2(b""), 0);
        assert_eq!(MurmurHash2.hash(""), 0);
    }

    #[test]
    fn test_known_vector_hello() {
        assert_eq!(murmur2(b"hello"), 0x8d0c_86bc);
    }

    #[test]
    fn test_known_vectors_all_tail_lengths() {
        // One vector per remainder length to pin the tail mixes
        assert_eq!(murmur2(b"a"), 0x3537_8052); // tail 1
        assert_eq!(murmur2(b"ab"), 0x0435_0a3b); // tail 2
        assert_eq!(murmur2(b"abc"), 0x727f_c2be); // tail 3
        assert_eq!(murmur2(b"abcd"), 0xe1c0_7f3e); // exact block
    }

    #[test]
    fn test_known_vectors_multi_block() {
        assert_eq!(murmur2(b"hello world"), 0xe43a_5837);
        assert_eq!(murmur2(b"The quick brown fox"), 0xe6c3_8a16);
    }

    #[test]
    fn test_seed_changes_output() {
        assert_ne!(murmur2_seeded(b"data", 1), murmur2_seeded(b"data", 2));
    }

    #[test]
    fn test_string_form_matches_byte_form() {
        assert_eq!(MurmurHash2.hash("hello world"), murmur2(b"hello world"));
    }

    #[test]
    fn test_avalanche_single_bit_flip() {
        let h1 = murmur2(b"test");
        let h2 = murmur2(b"uest"); // first byte differs by one bit

        let changed_bits = (h1 ^ h2).count_ones();
        assert!(
            changed_bits >= 8 && changed_bits <= 24,
            "Avalanche effect: {} bits changed (expected 8-24 of 32)",
            changed_bits
        );
    }
}
