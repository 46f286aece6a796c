//! Core building blocks: the bit table and the Bloom filter accumulator.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bits.rs    - Fixed-size bit table (plain Vec<u64> storage)
//! ├── filter.rs  - BloomFilter (bit table + ordered hash strategies)
//! └── mod.rs     - This file (public API)
//! ```
//!
//! # Design Principles
//!
//! 1. **Monotone accumulator**: bits are only ever set, never cleared
//! 2. **Fail-fast construction**: invalid parameters are rejected with an
//!    error, never degraded to an empty filter
//! 3. **Single-threaded**: no atomics, no locks; wrap in a `Mutex` if shared

pub mod bits;
pub mod filter;

pub use bits::BitTable;
pub use filter::BloomFilter;
