//! Property-based tests for the prime-gap pipeline.
//!
//! The batch generator is the reference; the chunked scan and the
//! aggregates are checked against it and against their invariants.

use primegap::{
    compute_distribution, compute_primes_sync, compute_stats, is_prime, Scan, Stats,
};
use proptest::prelude::*;

/// Primality by exhaustive trial division.
fn naive_is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

// =============================================================================
// Primality
// =============================================================================

#[test]
fn is_prime_matches_ground_truth_to_ten_thousand() {
    for n in 0..=10_000u64 {
        assert_eq!(is_prime(n), naive_is_prime(n), "disagreement at n = {n}");
    }
}

proptest! {
    #[test]
    fn prop_is_prime_matches_naive(n in 0u64..2_000_000) {
        prop_assert_eq!(is_prime(n), naive_is_prime(n));
    }

    /// A product of two factors ≥ 2 is never prime.
    #[test]
    fn prop_products_are_composite(a in 2u64..100_000, b in 2u64..100_000) {
        prop_assert!(!is_prime(a * b));
    }
}

// =============================================================================
// Incremental scan vs batch generator
// =============================================================================

proptest! {
    #[test]
    fn prop_scan_matches_batch(max in 0u64..20_000, chunk in 1u64..3_000) {
        let scan = Scan::with_chunk_size(max, chunk).run_to_end().unwrap();
        prop_assert_eq!(scan, compute_primes_sync(max));
    }

    #[test]
    fn prop_progress_monotonic_and_complete(max in 0u64..20_000, chunk in 1u64..3_000) {
        let mut scan = Scan::with_chunk_size(max, chunk);
        let mut progress = Vec::new();
        while !scan.is_finished() {
            progress.push(scan.step().unwrap());
        }
        prop_assert!(!progress.is_empty());
        prop_assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(progress.last().copied(), Some(100));
        prop_assert!(progress.iter().all(|&p| p <= 100));
    }
}

// =============================================================================
// Sequence invariants
// =============================================================================

proptest! {
    #[test]
    fn prop_distances_are_consecutive_differences(max in 0u64..20_000) {
        let seq = compute_primes_sync(max);
        if let Some(first) = seq.first() {
            prop_assert_eq!(first.distance, 0);
        }
        for pair in seq.as_slice().windows(2) {
            prop_assert!(pair[1].prime > pair[0].prime);
            prop_assert_eq!(pair[1].distance, pair[1].prime - pair[0].prime);
        }
        prop_assert!(seq.iter().all(|r| is_prime(r.prime) && r.prime <= max));
    }

    #[test]
    fn prop_no_prime_skipped(max in 0u64..5_000) {
        let seq = compute_primes_sync(max);
        let expected: Vec<u64> = (0..=max).filter(|&n| naive_is_prime(n)).collect();
        prop_assert_eq!(seq.primes().collect::<Vec<_>>(), expected);
    }
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn below_two_everything_is_empty() {
    for max in [0, 1] {
        let seq = compute_primes_sync(max);
        assert!(seq.is_empty());
        assert_eq!(compute_stats(&seq), Stats::default());
        assert!(compute_distribution(&seq).is_empty());
    }
}

#[test]
fn end_to_end_twenty() {
    let seq = compute_primes_sync(20);
    let dist = compute_distribution(&seq);
    let pairs: Vec<(u64, usize)> = dist.iter().map(|e| (e.distance, e.count)).collect();
    assert_eq!(pairs, [(2, 4), (4, 2), (0, 1), (1, 1)]);

    let stats = compute_stats(&seq);
    assert_eq!(stats.count, 8);
    assert_eq!(stats.max_distance, 4);
    // (19 − 2) / 7
    assert!((stats.avg_distance - 17.0 / 7.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn prop_distribution_counts_sum_to_length(max in 0u64..20_000) {
        let seq = compute_primes_sync(max);
        let dist = compute_distribution(&seq);
        prop_assert_eq!(dist.total(), seq.len());
        prop_assert!(dist.iter().all(|e| e.count >= 1));
    }

    #[test]
    fn prop_distribution_sorted_with_unique_distances(max in 2u64..20_000) {
        let seq = compute_primes_sync(max);
        let dist = compute_distribution(&seq);
        prop_assert!(dist.as_slice().windows(2).all(|w| w[0].count >= w[1].count));
        let mut distances: Vec<u64> = dist.iter().map(|e| e.distance).collect();
        distances.sort_unstable();
        distances.dedup();
        prop_assert_eq!(distances.len(), dist.len());
    }

    /// Among equal counts, the distance seen first in the sequence comes first.
    #[test]
    fn prop_ties_in_first_occurrence_order(max in 2u64..20_000) {
        let seq = compute_primes_sync(max);
        let dist = compute_distribution(&seq);
        let first_seen = |d: u64| seq.iter().position(|r| r.distance == d);
        for w in dist.as_slice().windows(2) {
            if w[0].count == w[1].count {
                prop_assert!(first_seen(w[0].distance) < first_seen(w[1].distance));
            }
        }
    }

    #[test]
    fn prop_stats_exclude_first_record(max in 3u64..20_000) {
        let seq = compute_primes_sync(max);
        let stats = compute_stats(&seq);
        let gaps: Vec<u64> = seq.distances().skip(1).collect();
        prop_assert_eq!(stats.count, seq.len());
        prop_assert_eq!(stats.max_distance, gaps.iter().copied().max().unwrap_or(0));
        let mean = gaps.iter().sum::<u64>() as f64 / gaps.len() as f64;
        prop_assert!((stats.avg_distance - mean).abs() < 1e-9);
    }

    #[test]
    fn prop_aggregates_idempotent(max in 0u64..10_000) {
        let seq = compute_primes_sync(max);
        prop_assert_eq!(compute_stats(&seq), compute_stats(&seq));
        prop_assert_eq!(compute_distribution(&seq), compute_distribution(&seq));
    }
}
