//! Hooks through which a [`Session`](crate::Session) reports to its host.
//!
//! A host implements [`Notifier`] to drive a progress display and user
//! notifications. Every hook has an empty default, so an implementation
//! only overrides what it renders.

use tracing::{info, warn};

use crate::bound::Bound;
use crate::error::Error;
use crate::stats::Stats;

/// Bounds above this trigger the advisory "this may take a while" notice.
pub const LARGE_BOUND_THRESHOLD: u64 = 100_000;

/// Receives progress and lifecycle notices of a computation.
pub trait Notifier {
    /// A computation above the large-bound threshold is about to start.
    fn large_bound(&mut self, _bound: Bound) {}

    /// Percentage of the range scanned so far (0..=100, non-decreasing).
    fn progress(&mut self, _percent: u8) {}

    /// The computation finished.
    fn completed(&mut self, _stats: &Stats) {}

    /// The computation failed; no result was stored.
    fn failed(&mut self, _error: &Error) {}
}

/// Ignores every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {}

/// Forwards notices to `tracing`, for hosts without a display.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn large_bound(&mut self, bound: Bound) {
        info!(%bound, "large calculation, this may take some time");
    }

    fn completed(&mut self, stats: &Stats) {
        info!(
            count = stats.count,
            max_distance = stats.max_distance,
            "calculation complete: found {} primes with max distance {}",
            stats.count,
            stats.max_distance
        );
    }

    fn failed(&mut self, error: &Error) {
        warn!(%error, "calculation failed");
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn large_bound(&mut self, bound: Bound) {
        (**self).large_bound(bound);
    }

    fn progress(&mut self, percent: u8) {
        (**self).progress(percent);
    }

    fn completed(&mut self, stats: &Stats) {
        (**self).completed(stats);
    }

    fn failed(&mut self, error: &Error) {
        (**self).failed(error);
    }
}
