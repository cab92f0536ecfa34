//! Static report generator for prime gaps.
//!
//! Renders an [`Analysis`] as a self-contained HTML page (inline SVG scatter
//! chart, stat cards, top distance table) plus JSON exports of the data.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use primegap::{compute_primes_sync, Analysis, Bound};
//! use primegap_report::{generate, ReportOptions};
//!
//! let bound = Bound::new(1_000).unwrap();
//! let analysis = Analysis::new(bound, compute_primes_sync(bound.get()));
//! generate(&PathBuf::from("public"), &analysis, &ReportOptions::default())
//!     .expect("Report generation failed");
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html
//!   css/style.css
//!   data/
//!     primes.json         [[prime, distance], …]
//!     stats.json          {count, max_distance, avg_distance}
//!     distribution.json   [[distance, count], …] by descending count
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod extractor;
pub mod model;
pub mod renderer;
pub mod writer;

use std::path::Path;

use anyhow::Result;
use primegap::{Analysis, PrimeSequence};
use tracing::info;

use model::BoundForm;
use renderer::{
    render_about, render_calculator, render_chart, render_page, render_stat_cards,
    render_top_distances,
};

/// Layout and form settings of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Rows in the top distances table.
    pub top_distances: usize,
    /// Smallest bound offered by the form.
    pub min_bound: u64,
    /// Largest bound offered by the form.
    pub max_bound: u64,
    /// Slider increment.
    pub step: u64,
    /// URL the form submits to.
    pub form_action: String,
    /// URL of the stylesheet.
    pub css_url: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_distances: 10,
            min_bound: 100,
            max_bound: 50_000,
            step: 100,
            form_action: "/".to_string(),
            css_url: "css/style.css".to_string(),
        }
    }
}

/// Renders the full page for `analysis`, or the empty state before any
/// computation has finished.
pub fn render_index(analysis: Option<&Analysis>, bound: u64, options: &ReportOptions) -> String {
    let form = BoundForm {
        value: bound,
        min: options.min_bound,
        max: options.max_bound,
        step: options.step,
        action: options.form_action.clone(),
    };

    let mut body = String::new();
    body.push_str("<div class=\"layout\">\n");
    let found = analysis.map(|a| a.primes.len()).filter(|&n| n > 0);
    body.push_str(&render_calculator(&form, found));
    body.push_str("<div class=\"results\">\n");

    match analysis {
        Some(a) if !a.primes.is_empty() => {
            body.push_str(&render_chart(&extractor::chart(&a.primes)));
            body.push_str(&render_stat_cards(&extractor::stat_cards(&a.stats)));
            let rows = extractor::distance_rows(&a.distribution, options.top_distances);
            body.push_str(&render_top_distances(
                &rows,
                options.top_distances,
                a.distribution.len(),
            ));
        }
        _ => body.push_str(&render_chart(&extractor::chart(&PrimeSequence::new()))),
    }

    body.push_str("</div>\n</div>\n");
    body.push_str(&render_about());

    render_page("Prime Distance Plotter", &body, &options.css_url)
}

/// `[[prime, distance], …]`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn primes_json(analysis: &Analysis) -> Result<String> {
    let pairs: Vec<(u64, u64)> = analysis
        .primes
        .iter()
        .map(|r| (r.prime, r.distance))
        .collect();
    Ok(serde_json::to_string(&pairs)?)
}

/// `[[distance, count], …]` in distribution order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn distribution_json(analysis: &Analysis) -> Result<String> {
    let pairs: Vec<(u64, usize)> = analysis
        .distribution
        .iter()
        .map(|e| (e.distance, e.count))
        .collect();
    Ok(serde_json::to_string(&pairs)?)
}

/// Writes the page, stylesheet, and data exports into `out_dir`.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(out_dir: &Path, analysis: &Analysis, options: &ReportOptions) -> Result<()> {
    let html = render_index(Some(analysis), analysis.bound.get(), options);
    writer::write(&out_dir.join("index.html"), &html)?;

    writer::write(&out_dir.join("css").join("style.css"), style_css())?;

    let data = out_dir.join("data");
    writer::write(&data.join("primes.json"), &primes_json(analysis)?)?;
    writer::write(
        &data.join("stats.json"),
        &serde_json::to_string_pretty(&analysis.stats)?,
    )?;
    writer::write(&data.join("distribution.json"), &distribution_json(analysis)?)?;

    info!(
        out = %out_dir.display(),
        bound = analysis.bound.get(),
        primes = analysis.primes.len(),
        "report generated"
    );
    Ok(())
}

/// Returns the complete CSS stylesheet.
pub fn style_css() -> &'static str {
    include_str!("../static/css/style.css")
}
