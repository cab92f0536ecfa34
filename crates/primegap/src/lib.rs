//! Prime gaps up to a bound.
//!
//! `primegap` walks the integers `2..=max`, records every prime together with
//! its distance from the previous prime, and aggregates the resulting gaps.
//!
//! # Pipeline
//!
//! ```text
//! Bound ──► Scan (chunked, yields between chunks) ──► PrimeSequence
//!                     │                                    │
//!                     └─► progress 0..=100                 ├─► Stats
//!                                                          └─► DistanceDistribution
//! ```
//!
//! | Stage | Entry point | Notes |
//! |-------|-------------|-------|
//! | Primality | [`is_prime`] | 6k±1 trial division |
//! | Batch walk | [`compute_primes_sync`] | reference semantics |
//! | Incremental walk | [`run_prime_computation`] | chunked, async, progress |
//! | Aggregation | [`compute_stats`], [`compute_distribution`] | pure |
//!
//! # Example
//!
//! ```
//! use primegap::{compute_distribution, compute_primes_sync, compute_stats};
//!
//! let primes = compute_primes_sync(5);
//! let stats = compute_stats(&primes);
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.max_distance, 2);
//! assert_eq!(stats.avg_distance, 1.5);
//!
//! let distribution = compute_distribution(&primes);
//! assert_eq!(distribution.total(), primes.len());
//! ```
//!
//! # Incremental Example
//!
//! ```
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! use primegap::run_prime_computation;
//!
//! let mut seen = Vec::new();
//! let primes = run_prime_computation(20, |p| seen.push(p)).await.unwrap();
//! assert_eq!(primes.len(), 8);
//! assert_eq!(seen.last(), Some(&100));
//! # });
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod analysis;
pub mod bound;
pub mod error;
pub mod notify;
pub mod primality;
pub mod scan;
pub mod scheduler;
pub mod sequence;
pub mod session;
pub mod stats;

pub use analysis::Analysis;
pub use bound::Bound;
pub use error::{Error, Result};
pub use notify::{Notifier, NullNotifier, TracingNotifier, LARGE_BOUND_THRESHOLD};
pub use primality::is_prime;
pub use scan::{Scan, DEFAULT_CHUNK_SIZE};
pub use scheduler::Scheduler;
pub use sequence::{PrimeRecord, PrimeSequence};
pub use session::Session;
pub use stats::{DistanceCount, DistanceDistribution, Stats};

/// Synchronous reference walk over `2..=max`.
///
/// Returns an empty sequence for `max < 2`.
pub fn compute_primes_sync(max: u64) -> PrimeSequence {
    sequence::generate(max)
}

/// Incremental walk over `2..=max` in chunks of [`DEFAULT_CHUNK_SIZE`].
///
/// `on_progress` receives a non-decreasing percentage after every chunk and
/// always ends with 100. Control is yielded to the runtime between chunks.
///
/// # Errors
///
/// Returns [`Error::ResourceExhausted`] if the accumulated sequence cannot
/// grow. No partial sequence is returned.
pub async fn run_prime_computation<F>(max: u64, on_progress: F) -> Result<PrimeSequence>
where
    F: FnMut(u8),
{
    Scheduler::new().run(max, on_progress).await
}

/// Count, maximum gap, and mean gap of a sequence.
pub fn compute_stats(sequence: &PrimeSequence) -> Stats {
    Stats::compute(sequence)
}

/// Gap frequencies ordered by descending count.
pub fn compute_distribution(sequence: &PrimeSequence) -> DistanceDistribution {
    DistanceDistribution::compute(sequence)
}
