//! `primegap-serve`: Serves the interactive calculator and JSON API.
//!
//! **Usage:**
//! ```
//! primegap-serve [--host <addr>] [--port <n>] [--config <path>]
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
use primegap_clients::{init_logging, load_config};

/// Serve the prime distance calculator over HTTP.
#[derive(Parser)]
#[command(
    name = "primegap-serve",
    about = "Serve the prime distance calculator over HTTP"
)]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "PRIMEGAP_HOST")]
    host: Option<String>,

    /// TCP port.
    #[arg(long, short, env = "PRIMEGAP_PORT")]
    port: Option<u16>,

    /// JSON configuration file.
    #[arg(long, env = "PRIMEGAP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(tracing::Level::INFO);
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    primegap_server::run(config).await?;
    Ok(())
}
