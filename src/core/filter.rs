//! The Bloom filter: a bit table composed with an ordered list of hash strategies.
//!
//! # Algorithm
//!
//! To insert a string, each strategy in order computes a 32-bit hash, reduced
//! `mod size` to a bit index, and that bit is set. To test membership, the same
//! indices are recomputed and checked; if any bit is clear the string was
//! definitely never added.
//!
//! Every operation runs in O(k) time for k hash strategies, except
//! [`BloomFilter::occupancy`] which is O(size).
//!
//! # Guarantees
//!
//! - **No false negatives**: once `add(s)` has run, `lookup(s)` is always true
//! - **Bounded false positives**: `lookup` may report true for a string never
//!   added; the rate grows with occupancy
//!
//! # Examples
//!
//! ```
//! use bloomsieve::BloomFilter;
//!
//! let mut filter = BloomFilter::with_default_hashes(10_000)?;
//!
//! filter.add("apple");
//! filter.add("banana");
//!
//! assert!(filter.lookup("apple"));
//! assert!(filter.lookup("banana"));
//! assert!(!filter.lookup("cherry"));
//! assert!(filter.occupancy() > 0.0);
//! # Ok::<(), bloomsieve::BloomSieveError>(())
//! ```

use crate::core::bits::BitTable;
use crate::error::{BloomSieveError, Result};
use crate::hash::{MurmurHash2, StandardHash, StringHash, SuperFastHash};

/// A string-keyed Bloom filter with a fixed bit table and fixed hash strategies.
///
/// The filter owns its strategies for its own lifetime but never cares about
/// their concrete identity — any [`StringHash`] value fills a slot. Strategies
/// are stateless, so the same types may back multiple filter instances.
///
/// # State
///
/// The filter is a monotone accumulator: the only mutation is [`add`], which
/// sets bits, so the set-bit count never decreases. There is no clear or reset
/// operation; that is what makes the no-false-negative guarantee unconditional.
///
/// [`add`]: BloomFilter::add
///
/// # Thread Safety
///
/// **Not thread-safe.** `add` requires `&mut self` and the table is plain
/// storage. Wrap in a `Mutex` or `RwLock` for concurrent access.
#[derive(Debug)]
pub struct BloomFilter {
    /// Bit table, length fixed at construction.
    table: BitTable,

    /// Ordered hash strategies, fixed at construction.
    hashes: Vec<Box<dyn StringHash>>,
}

impl BloomFilter {
    /// Create a filter with an explicit table size and hash-strategy list.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of bits in the table (must be > 0 and fit in 32 bits)
    /// * `hashes` - Ordered, non-empty list of hash strategies
    ///
    /// # Errors
    ///
    /// - [`BloomSieveError::InvalidFilterSize`] if `size` is 0 or exceeds
    ///   `u32::MAX` (the modulo reduction operates on unsigned 32-bit hashes)
    /// - [`BloomSieveError::NoHashFunctions`] if `hashes` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    /// use bloomsieve::hash::{MurmurHash2, StringHash};
    ///
    /// let hashes: Vec<Box<dyn StringHash>> = vec![Box::new(MurmurHash2)];
    /// let filter = BloomFilter::new(1_000, hashes)?;
    /// assert_eq!(filter.size(), 1_000);
    /// assert_eq!(filter.hash_count(), 1);
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    pub fn new(size: usize, hashes: Vec<Box<dyn StringHash>>) -> Result<Self> {
        // Reject before allocating: size must stay in the u32 modulo domain.
        if size == 0 || size as u64 > u64::from(u32::MAX) {
            return Err(BloomSieveError::invalid_filter_size(size));
        }
        if hashes.is_empty() {
            return Err(BloomSieveError::no_hash_functions());
        }

        Ok(Self {
            table: BitTable::new(size)?,
            hashes,
        })
    }

    /// Create a filter with the three default strategies: [`StandardHash`],
    /// [`MurmurHash2`], and [`SuperFastHash`], in that order.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::InvalidFilterSize`] for a size of 0 or one
    /// exceeding `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// let filter = BloomFilter::with_default_hashes(100_003)?;
    /// assert_eq!(filter.hash_count(), 3);
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    pub fn with_default_hashes(size: usize) -> Result<Self> {
        Self::new(
            size,
            vec![
                Box::new(StandardHash),
                Box::new(MurmurHash2),
                Box::new(SuperFastHash),
            ],
        )
    }

    /// Number of bits in the table.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Number of hash strategies.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.hashes.len()
    }

    /// Map one strategy's hash of `item` to a bit index.
    ///
    /// The reduction is performed in unsigned 32-bit arithmetic on the full
    /// hash value; construction guarantees the table length fits in a `u32`.
    #[inline]
    fn bit_index(&self, hash: &dyn StringHash, item: &str) -> usize {
        (hash.hash(item) % self.table.len() as u32) as usize
    }

    /// Add a string to the filter.
    ///
    /// Sets one bit per hash strategy. Infallible for any input string, and
    /// idempotent: re-adding an element changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// let mut filter = BloomFilter::with_default_hashes(1_000)?;
    /// filter.add("hello");
    /// assert!(filter.lookup("hello"));
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    pub fn add(&mut self, item: &str) {
        let len = self.table.len() as u32;
        for hash in &self.hashes {
            let index = (hash.hash(item) % len) as usize;
            self.table.set(index);
        }
    }

    /// Check whether a string might be in the filter.
    ///
    /// Returns `false` as soon as any strategy's bit is clear.
    ///
    /// # Returns
    ///
    /// - `true`: the string might be in the set (or is a false positive)
    /// - `false`: the string is definitely not in the set (guaranteed)
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// let mut filter = BloomFilter::with_default_hashes(1_000)?;
    /// filter.add("present");
    ///
    /// assert!(filter.lookup("present"));  // true positive, always
    /// assert!(!filter.lookup("absent"));  // true negative (probably)
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    #[must_use]
    pub fn lookup(&self, item: &str) -> bool {
        self.hashes
            .iter()
            .all(|hash| self.table.get(self.bit_index(hash.as_ref(), item)))
    }

    /// Fraction of bits currently set, in `[0.0, 1.0]`.
    ///
    /// A proxy for how saturated (and thus false-positive-prone) the filter
    /// has become. Non-decreasing across any sequence of [`add`] calls.
    ///
    /// [`add`]: BloomFilter::add
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// let mut filter = BloomFilter::with_default_hashes(1_000)?;
    /// assert_eq!(filter.occupancy(), 0.0);
    ///
    /// filter.add("x");
    /// assert!(filter.occupancy() > 0.0);
    /// # Ok::<(), bloomsieve::BloomSieveError>(())
    /// ```
    #[must_use]
    pub fn occupancy(&self) -> f64 {
        self.table.fill_rate()
    }

    /// Number of set bits in the table.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.table.count_ones()
    }

    /// `true` if nothing has been added (no bits set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
