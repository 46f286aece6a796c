//! End-to-end membership scenario over fixed word lists.
//!
//! Mirrors the classic word-list exercise: partition a deterministic set of
//! strings into an inserted half and a held-out half, then measure lookup
//! accuracy and occupancy.

use bloomsieve::hash::{CryptoHash, MurmurHash2, StringHash, SuperFastHash};
use bloomsieve::BloomFilter;
use sha2::Sha256;

const FILTER_SIZE: usize = 1_000_003;
const WORDS: usize = 500;

fn inserted_words() -> Vec<String> {
    (0..WORDS).map(|i| format!("member-{i:05}")).collect()
}

fn held_out_words() -> Vec<String> {
    (0..WORDS).map(|i| format!("absent-{i:05}")).collect()
}

#[test]
fn test_no_false_negatives_end_to_end() {
    let mut filter = BloomFilter::with_default_hashes(FILTER_SIZE).unwrap();

    for word in inserted_words() {
        filter.add(&word);
    }

    for word in inserted_words() {
        assert!(filter.lookup(&word), "False negative for {word}");
    }
}

#[test]
fn test_false_positive_rate_is_small() {
    let mut filter = BloomFilter::with_default_hashes(FILTER_SIZE).unwrap();

    for word in inserted_words() {
        filter.add(&word);
    }

    let held_out = held_out_words();
    let false_positives = held_out.iter().filter(|w| filter.lookup(w)).count();
    let rate = false_positives as f64 / held_out.len() as f64;

    // 1500 set bits in a ~1M-bit table makes three simultaneous hits
    // vanishingly unlikely; 5% is a very loose ceiling
    assert!(rate < 0.05, "False positive rate too high: {rate:.4}");
}

#[test]
fn test_occupancy_accounting() {
    let mut filter = BloomFilter::with_default_hashes(FILTER_SIZE).unwrap();
    assert_eq!(filter.occupancy(), 0.0);

    let mut previous = 0.0;
    for word in inserted_words() {
        filter.add(&word);
        let current = filter.occupancy();
        assert!(current >= previous, "Occupancy decreased");
        previous = current;
    }

    // Loose sanity bound: at most k bits per insertion
    let k = filter.hash_count();
    let bound = (k * WORDS) as f64 / FILTER_SIZE as f64;
    assert!(filter.occupancy() <= bound.min(1.0));
    assert!(filter.occupancy() > 0.0);
}

#[test]
fn test_results_reproducible_across_filters() {
    let build = || {
        let mut filter = BloomFilter::with_default_hashes(FILTER_SIZE).unwrap();
        for word in inserted_words() {
            filter.add(&word);
        }
        filter
    };

    let a = build();
    let b = build();

    assert_eq!(a.count_set_bits(), b.count_set_bits());
    for word in held_out_words() {
        assert_eq!(a.lookup(&word), b.lookup(&word));
    }
}

#[test]
fn test_custom_strategy_list_with_digest_slot() {
    let hashes: Vec<Box<dyn StringHash>> = vec![
        Box::new(MurmurHash2),
        Box::new(SuperFastHash),
        Box::new(CryptoHash::<Sha256>::new()),
    ];
    let mut filter = BloomFilter::new(100_003, hashes).unwrap();

    for word in inserted_words() {
        filter.add(&word);
    }
    for word in inserted_words() {
        assert!(filter.lookup(&word), "False negative for {word}");
    }
}
