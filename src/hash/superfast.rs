//! Paul Hsieh's SuperFastHash.
//!
//! Processes the input as 4-byte blocks read as two little-endian 16-bit
//! halves, with remainder-specific tail mixes and a six-step final avalanche.
//! A zero-length input hashes to 0.

use crate::hash::StringHash;

/// Hash a byte slice with SuperFastHash.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::super_fast_hash;
///
/// assert_eq!(super_fast_hash(b""), 0);
/// assert_eq!(super_fast_hash(b"hello"), 0xb09d_c87b);
/// ```
#[must_use]
pub fn super_fast_hash(data: &[u8]) -> u32 {
    if data.is_empty() {
        return 0;
    }

    let mut hash = data.len() as u32;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let a = u32::from(u16::from_le_bytes([block[0], block[1]]));
        let b = u32::from(u16::from_le_bytes([block[2], block[3]]));

        hash = hash.wrapping_add(a);
        let tmp = (b << 11) ^ hash;
        hash = (hash << 16) ^ tmp;
        hash = hash.wrapping_add(hash >> 11);
    }

    let tail = blocks.remainder();
    match tail.len() {
        3 => {
            hash = hash.wrapping_add(u32::from(u16::from_le_bytes([tail[0], tail[1]])));
            hash ^= hash << 16;
            hash ^= u32::from(tail[2]) << 18;
            hash = hash.wrapping_add(hash >> 11);
        }
        2 => {
            hash = hash.wrapping_add(u32::from(u16::from_le_bytes([tail[0], tail[1]])));
            hash ^= hash << 11;
            hash = hash.wrapping_add(hash >> 17);
        }
        1 => {
            hash = hash.wrapping_add(u32::from(tail[0]));
            hash ^= hash << 10;
            hash = hash.wrapping_add(hash >> 1);
        }
        _ => {}
    }

    // Force "avalanching" of the final bits
    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash = hash.wrapping_add(hash >> 6);

    hash
}

/// SuperFastHash string-hash strategy.
///
/// Hashes the UTF-8 bytes of the input with [`super_fast_hash`].
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{StringHash, SuperFastHash};
///
/// assert_eq!(SuperFastHash.hash(""), 0);
/// assert_eq!(SuperFastHash.hash("hello"), 0xb09d_c87b);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperFastHash;

impl StringHash for SuperFastHash {
    #[inline]
    fn hash(&self, input: &str) -> u32 {
        super_fast_hash(input.as_bytes())
    }

    #[inline]
    fn name(&self) -> &'static str {
        "SuperFastHash"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(super_fast_hash(b""), 0);
        assert_eq!(SuperFastHash.hash(""), 0);
    }

    #[test]
    fn test_known_vector_hello() {
        assert_eq!(super_fast_hash(b"hello"), 0xb09d_c87b);
    }

    #[test]
    fn test_known_vectors_all_tail_lengths() {
        assert_eq!(super_fast_hash(b"a"), 0x115e_a782); // tail 1
        assert_eq!(super_fast_hash(b"ab"), 0x516b_8b44); // tail 2
        assert_eq!(super_fast_hash(b"abc"), 0xd2be_198a); // tail 3
        assert_eq!(super_fast_hash(b"abcd"), 0xdad8_b8db); // exact block
    }

    #[test]
    fn test_known_vectors_multi_block() {
        assert_eq!(super_fast_hash(b"hello world"), 0xa68c_6882);
        assert_eq!(super_fast_hash(b"The quick brown fox"), 0x77d8_492b);
    }

    #[test]
    fn test_string_form_matches_byte_form() {
        assert_eq!(SuperFastHash.hash("hello world"), super_fast_hash(b"hello world"));
    }

    #[test]
    fn test_avalanche_single_bit_flip() {
        let h1 = super_fast_hash(b"test");
        let h2 = super_fast_hash(b"uest");

        let changed_bits = (h1 ^ h2).count_ones();
        assert!(
            changed_bits >= 8 && changed_bits <= 24,
            "Avalanche effect: {} bits changed (expected 8-24 of 32)",
            changed_bits
        );
    }
}
