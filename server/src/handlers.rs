//! Request handlers.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
};
use primegap::{Analysis, Bound, TracingNotifier};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::state::AppState;

/// `?max=` as typed into the bound form.
#[derive(Debug, Default, Deserialize)]
pub struct BoundQuery {
    /// Raw upper bound; the configured default when absent.
    pub max: Option<String>,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "primegap is running"
}

/// GET / - calculator page for `?max=`, or the latest result when absent
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BoundQuery>,
) -> std::result::Result<Html<String>, (StatusCode, String)> {
    let analysis = analyze(&state, query.max.as_deref(), true)
        .await
        .map_err(reject)?;
    let html = primegap_report::render_index(
        Some(&analysis),
        analysis.bound.get(),
        &state.config().report_options(),
    );
    Ok(Html(html))
}

/// GET /api/primes - bound, stats, distribution and primes as JSON
pub async fn primes(
    State(state): State<AppState>,
    Query(query): Query<BoundQuery>,
) -> std::result::Result<Json<Analysis>, (StatusCode, String)> {
    let analysis = analyze(&state, query.max.as_deref(), false)
        .await
        .map_err(reject)?;
    Ok(Json(analysis))
}

/// GET /css/style.css
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        primegap_report::style_css(),
    )
}

fn reject(err: Error) -> (StatusCode, String) {
    warn!(%err, "request rejected");
    err.into()
}

/// Parses and fits `raw` to the configured range.
pub(crate) fn resolve_bound(config: &Config, raw: Option<&str>) -> Result<Bound> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(config.clamp_bound(raw.parse()?)),
        _ => Ok(config.default_bound()),
    }
}

/// Runs a calculation on the shared session.
///
/// With `reuse` and no explicit bound, the session's latest analysis is
/// returned as is.
async fn analyze(state: &AppState, raw: Option<&str>, reuse: bool) -> Result<Analysis> {
    let bound = resolve_bound(state.config(), raw)?;
    let mut session = state.session().try_lock().map_err(|_| Error::Busy)?;

    if reuse && raw.map_or(true, |r| r.trim().is_empty()) {
        if let Some(latest) = session.analysis() {
            return Ok(latest.clone());
        }
    }

    debug!(%bound, "calculating");
    let analysis = session.calculate(bound, TracingNotifier).await?;
    Ok(analysis.clone())
}
