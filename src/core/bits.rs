//! Fixed-size bit table backing the Bloom filter.
//!
//! `BitTable` is a fixed-length bit array packed into `u64` words. Storage is
//! plain (non-atomic): the filter is single-threaded by design, so a `Vec<u64>`
//! with ordinary loads and stores is all that is needed.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/64⌉ * 8` bytes for `n` bits
//! - `set` / `get`: O(1)
//! - `count_ones`: O(n/64), uses the CPU POPCNT instruction
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::BitTable;
//!
//! let mut table = BitTable::new(100)?;
//! table.set(42);
//! assert!(table.get(42));
//! assert!(!table.get(43));
//! assert_eq!(table.count_ones(), 1);
//! # Ok::<(), bloomsieve::BloomSieveError>(())
//! ```

use crate::error::{BloomSieveError, Result};

/// Fixed-size bit table with word-packed storage.
///
/// All bits start clear. The table length is fixed at construction and the
/// only mutation is setting individual bits, so the set-bit count is
/// monotonically non-decreasing over the table's lifetime.
#[derive(Debug, Clone)]
pub struct BitTable {
    /// Words, each storing 64 bits.
    words: Vec<u64>,

    /// Total number of bits in the table.
    len: usize,
}

impl BitTable {
    /// Create a new bit table with the given number of bits, all clear.
    ///
    /// # Arguments
    ///
    /// * `num_bits` - Number of bits in the table (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::InvalidFilterSize`] if `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::core::BitTable;
    ///
    /// let table = BitTable::new(1000)?;
    /// assert_eq!(table.len(), 1000);
    /// assert_eq!(table.count_ones(), 0);
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomSieveError::invalid_filter_size(num_bits));
        }

        let word_count = (num_bits + 63) / 64;

        Ok(Self {
            words: vec![0u64; word_count],
            len: num_bits,
        })
    }

    /// Number of bits in the table.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no bits are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Set the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(
            index < self.len,
            "Bit index {} out of bounds (len={})",
            index,
            self.len
        );

        let word_idx = index / 64;
        let bit_offset = index % 64;

        self.words[word_idx] |= 1u64 << bit_offset;
    }

    /// Test the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "Bit index {} out of bounds (len={})",
            index,
            self.len
        );

        let word_idx = index / 64;
        let bit_offset = index % 64;

        (self.words[word_idx] >> bit_offset) & 1 != 0
    }

    /// Count the number of set bits (population count).
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Fraction of bits set, in `[0.0, 1.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::core::BitTable;
    ///
    /// let mut table = BitTable::new(100)?;
    /// assert_eq!(table.fill_rate(), 0.0);
    ///
    /// table.set(0);
    /// assert_eq!(table.fill_rate(), 0.01);
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_ones() as f64 / self.len as f64
    }
}
