//! `primegap-report`: Generates the static prime distance report.
//!
//! **Outputs (`public/`):**
//! - `index.html`: Calculator form, scatter chart, stats, top distances
//! - `css/style.css`: Complete stylesheet
//! - `data/primes.json`: `[[prime, distance], …]`
//! - `data/stats.json`: `{count, max_distance, avg_distance}`
//! - `data/distribution.json`: `[[distance, count], …]`
//!
//! **Usage:**
//! ```
//! primegap-report [--max <n>] [--out <path>] [--config <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use primegap::{Bound, Session};
use primegap_clients::{init_logging, load_config, TerminalNotifier};
use primegap_report::{generate, ReportOptions};

/// Generate the static prime distance report.
#[derive(Parser)]
#[command(
    name = "primegap-report",
    about = "Generate the static prime distance report"
)]
struct Args {
    /// Inclusive upper bound, fitted to the configured range.
    #[arg(long)]
    max: Option<Bound>,

    /// Output directory for the generated report.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// JSON configuration file.
    #[arg(long, env = "PRIMEGAP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(tracing::Level::INFO);
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let bound = match args.max {
        Some(bound) => config.clamp_bound(bound),
        None => config.default_bound(),
    };

    let mut session =
        Session::new(bound).with_large_bound_threshold(config.calculator.large_bound_threshold);
    let analysis = session
        .calculate(bound, TerminalNotifier::new(false)?)
        .await?;

    let options = ReportOptions {
        css_url: "css/style.css".to_string(),
        ..config.report_options()
    };
    generate(&args.out, analysis, &options)?;

    println!("Report generated successfully.");
    println!("  Bound:  {}", bound);
    println!("  Output: {}", args.out.display());

    Ok(())
}
