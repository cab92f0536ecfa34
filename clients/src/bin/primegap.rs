//! `primegap`: Lists the primes up to a bound with the distance to each
//! predecessor, then prints summary statistics and the most frequent gaps.
//!
//! **Usage:**
//! ```
//! primegap [--max <n>] [--top <k>] [--json] [--quiet] [--config <path>]
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
use primegap_clients::{init_logging, load_config, render_summary, TerminalNotifier};

/// Compute the distances between consecutive primes.
#[derive(Parser)]
#[command(
    name = "primegap",
    about = "Compute the distances between consecutive primes"
)]
struct Args {
    /// Inclusive upper bound; `_` and `,` separators are accepted.
    #[arg(long)]
    max: Option<Bound>,

    /// Number of rows in the top distances table.
    #[arg(long)]
    top: Option<usize>,

    /// Print the full analysis as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Hide the progress bar.
    #[arg(long, short)]
    quiet: bool,

    /// JSON configuration file.
    #[arg(long, env = "PRIMEGAP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(tracing::Level::WARN);
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let bound = match args.max {
        Some(bound) => bound,
        None => Bound::new(config.calculator.default_bound)?,
    };
    let top = args.top.unwrap_or(config.calculator.top_distances);

    let mut session =
        Session::new(bound).with_large_bound_threshold(config.calculator.large_bound_threshold);
    let mut notifier = TerminalNotifier::new(args.quiet || args.json)?;
    let analysis = session.calculate(bound, &mut notifier).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
    } else {
        print!("{}", render_summary(analysis, top));
    }

    Ok(())
}
