//! Shared plumbing for the primegap binaries: logging, configuration
//! loading, and terminal output.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use primegap::{Analysis, Bound, Error, Notifier, Stats};
use primegap_server::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the `tracing` subscriber. `RUST_LOG` refines the default level.
///
/// Logs go to stderr so that stdout stays machine-readable.
pub fn init_logging(default: tracing::Level) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(default.into()))
        .init();
}

/// Loads `path`, or the defaults when no file is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Progress bar and coloured notices on the terminal.
pub struct TerminalNotifier {
    bar: ProgressBar,
}

impl TerminalNotifier {
    /// A visible progress bar, or a hidden one when `quiet`.
    ///
    /// # Errors
    ///
    /// Returns an error if the progress template is malformed.
    pub fn new(quiet: bool) -> Result<Self> {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(100)
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}%")?
                .progress_chars("#>-"),
        );
        Ok(Self { bar })
    }

    /// Last reported percentage.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Notifier for TerminalNotifier {
    fn large_bound(&mut self, bound: Bound) {
        self.bar.suspend(|| {
            eprintln!(
                "{} Large calculations may take some time (max {})",
                "⚠".yellow(),
                bound
            );
        });
    }

    fn progress(&mut self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }

    fn completed(&mut self, stats: &Stats) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} Calculation complete: Found {} primes with max distance {}",
            "✓".green(),
            stats.count,
            stats.max_distance
        );
    }

    fn failed(&mut self, error: &Error) {
        self.bar.abandon();
        eprintln!("{} Calculation failed: {}", "✗".red(), error);
    }
}

/// Stats and top distances as a terminal table.
pub fn render_summary(analysis: &Analysis, top: usize) -> String {
    let stats = &analysis.stats;
    let mut out = String::new();

    out.push_str(&format!("{}\n", format!("Primes up to {}", analysis.bound).bold()));
    out.push_str(&format!("  {:<18} {}\n", "Total Primes", stats.count.to_string().cyan()));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Max Distance",
        stats.max_distance.to_string().cyan()
    ));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Average Distance",
        format!("{:.2}", stats.avg_distance).cyan()
    ));

    let distribution = &analysis.distribution;
    if distribution.is_empty() {
        out.push_str("\nNo data available\n");
        return out;
    }

    out.push_str(&format!(
        "\n{:<10} {:<10} {}\n",
        "DISTANCE".bold(),
        "COUNT".bold(),
        "PERCENT".bold()
    ));
    let rows = distribution.top(top);
    for entry in rows {
        out.push_str(&format!(
            "{:<10} {:<10} {:.1}%\n",
            entry.distance,
            entry.count,
            distribution.percentage(entry)
        ));
    }
    out.push_str(&format!(
        "Showing top {} of {} different distances\n",
        rows.len(),
        distribution.len()
    ));
    out
}
