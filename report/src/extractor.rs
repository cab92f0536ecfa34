//! Builds view models from an [`Analysis`](primegap::Analysis).

use primegap::{DistanceDistribution, PrimeSequence, Stats};

use crate::model::{Chart, ChartPoint, DistanceRow, StatCard};

/// x-axis extent when there is nothing to plot.
const EMPTY_MAX_X: u64 = 100;
/// y-axis extent when there is nothing to plot.
const EMPTY_MAX_Y: u64 = 10;

/// The three summary cards: total primes, max distance, average distance.
pub fn stat_cards(stats: &Stats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Primes".to_string(),
            value: stats.count.to_string(),
            description: "Number of primes found".to_string(),
        },
        StatCard {
            title: "Max Distance".to_string(),
            value: stats.max_distance.to_string(),
            description: "Largest gap between primes".to_string(),
        },
        StatCard {
            title: "Average Distance".to_string(),
            value: format!("{:.2}", stats.avg_distance),
            description: "Mean distance between primes".to_string(),
        },
    ]
}

/// The `limit` most frequent gaps with their share of all records.
pub fn distance_rows(distribution: &DistanceDistribution, limit: usize) -> Vec<DistanceRow> {
    distribution
        .top(limit)
        .iter()
        .map(|entry| DistanceRow {
            distance: entry.distance,
            count: entry.count,
            percentage: distribution.percentage(entry),
        })
        .collect()
}

/// Scatter points for every record, scaled against the largest prime and gap.
pub fn chart(sequence: &PrimeSequence) -> Chart {
    let max_x = sequence.last().map_or(EMPTY_MAX_X, |r| r.prime);
    let max_y = if sequence.is_empty() {
        EMPTY_MAX_Y
    } else {
        sequence.distances().max().unwrap_or(0)
    };

    let points = sequence
        .iter()
        .map(|r| ChartPoint {
            prime: r.prime,
            distance: r.distance,
            opacity: point_opacity(r.distance, max_y),
        })
        .collect();

    Chart {
        points,
        max_x,
        max_y,
    }
}

/// `0.3 + 0.7 · min(distance / max_y, 1)`.
pub fn point_opacity(distance: u64, max_y: u64) -> f64 {
    let normalized = if max_y == 0 {
        0.0
    } else {
        (distance as f64 / max_y as f64).min(1.0)
    };
    0.3 + normalized * 0.7
}

#[cfg(test)]
mod tests {
    use super::*;
    use primegap::compute_primes_sync;

    #[test]
    fn cards_format_average_with_two_decimals() {
        let stats = Stats::compute(&compute_primes_sync(20));
        let cards = stat_cards(&stats);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].value, "8");
        assert_eq!(cards[1].value, "4");
        assert_eq!(cards[2].value, "2.43");
    }

    #[test]
    fn rows_limited_and_percentaged() {
        let dist = DistanceDistribution::compute(&compute_primes_sync(20));
        let rows = distance_rows(&dist, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].distance, 2);
        assert!((rows[0].percentage - 50.0).abs() < 1e-12);
        assert!((rows[1].percentage - 25.0).abs() < 1e-12);
    }

    #[test]
    fn chart_extents() {
        let chart = chart(&compute_primes_sync(30));
        assert_eq!(chart.max_x, 29);
        assert_eq!(chart.max_y, 6);
        assert_eq!(chart.points.len(), 10);
        assert!((chart.points[0].opacity - 0.3).abs() < 1e-12);
        assert!((chart.points[9].opacity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_chart_uses_placeholder_axes() {
        let chart = chart(&PrimeSequence::new());
        assert!(chart.points.is_empty());
        assert_eq!((chart.max_x, chart.max_y), (100, 10));
    }

    #[test]
    fn single_prime_has_zero_height_axis() {
        let chart = chart(&compute_primes_sync(2));
        assert_eq!(chart.max_y, 0);
        assert!((chart.points[0].opacity - 0.3).abs() < 1e-12);
    }
}
