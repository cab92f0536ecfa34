use std::sync::Arc;

use primegap::Session;
use tokio::sync::Mutex;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    session: Mutex<Session>,
}

impl AppState {
    /// Creates the state with a fresh session at the configured default bound.
    pub fn new(config: Config) -> Self {
        let session = Session::new(config.default_bound())
            .with_large_bound_threshold(config.calculator.large_bound_threshold);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                session: Mutex::new(session),
            }),
        }
    }

    /// The configuration the server was started with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// The exploration session; one calculation holds it at a time.
    pub fn session(&self) -> &Mutex<Session> {
        &self.inner.session
    }
}
