//! View-model types for the report page.

use serde::Serialize;

/// One of the summary cards under the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    /// Card heading.
    pub title: String,
    /// Formatted value.
    pub value: String,
    /// One-line explanation.
    pub description: String,
}

/// A row of the top distances table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    /// Gap value.
    pub distance: u64,
    /// Occurrences of the gap.
    pub count: usize,
    /// Share of all records, in percent.
    pub percentage: f64,
}

/// A scatter point: one prime and its gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// The prime (x axis).
    pub prime: u64,
    /// Distance from the previous prime (y axis).
    pub distance: u64,
    /// Fill opacity; larger gaps are drawn more intensely.
    pub opacity: f64,
}

/// Points plus the axis extents they are drawn against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Points in ascending prime order.
    pub points: Vec<ChartPoint>,
    /// Upper end of the x axis.
    pub max_x: u64,
    /// Upper end of the y axis.
    pub max_y: u64,
}

/// State of the bound input form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundForm {
    /// Currently selected bound.
    pub value: u64,
    /// Smallest selectable bound.
    pub min: u64,
    /// Largest selectable bound.
    pub max: u64,
    /// Increment between selectable bounds.
    pub step: u64,
    /// URL the form submits to.
    pub action: String,
}
