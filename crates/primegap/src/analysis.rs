//! A finished computation together with its derived aggregates.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bound::Bound;
use crate::sequence::PrimeSequence;
use crate::stats::{DistanceDistribution, Stats};

/// Result of one computation: the sequence plus its stats and distribution.
///
/// Built once per sequence; a new computation produces a new `Analysis`
/// instead of updating an old one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Analysis {
    /// Bound the sequence was computed for.
    pub bound: Bound,
    /// Summary statistics.
    pub stats: Stats,
    /// Gap frequencies.
    pub distribution: DistanceDistribution,
    /// The primes and their distances.
    pub primes: PrimeSequence,
}

impl Analysis {
    /// Derives stats and distribution from `primes`.
    pub fn new(bound: Bound, primes: PrimeSequence) -> Self {
        Self {
            bound,
            stats: Stats::compute(&primes),
            distribution: DistanceDistribution::compute(&primes),
            primes,
        }
    }
}
