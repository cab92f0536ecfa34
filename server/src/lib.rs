//! HTTP front end for primegap.
//!
//! Serves the interactive calculator page and a JSON API over one shared
//! [`primegap::Session`]. A request that arrives while a calculation is
//! running is answered with `409 Conflict`.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /?max=N` | calculator page with chart, stats and top distances |
//! | `GET /api/primes?max=N` | `{bound, stats, distribution, primes}` |
//! | `GET /health` | plain text liveness check |
//! | `GET /css/style.css` | page stylesheet |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod handlers;
mod router;
mod state;

pub use config::{CalculatorConfig, Config, ServerConfig};
pub use error::{Error, Result};
pub use router::create_router;
pub use state::AppState;

/// Run the HTTP server until the listener fails.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;
    let addr = config.server_addr();
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("primegap server listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
