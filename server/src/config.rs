//! Server configuration, loaded from a JSON file.
//!
//! ```json
//! {
//!   "server": { "host": "127.0.0.1", "port": 8080 },
//!   "calculator": { "min_bound": 100, "max_bound": 50000, "step": 100,
//!                   "default_bound": 1000, "large_bound_threshold": 100000,
//!                   "top_distances": 10 }
//! }
//! ```
//!
//! Missing sections and fields fall back to their defaults.

use std::path::Path;

use primegap::{Bound, LARGE_BOUND_THRESHOLD};
use primegap_report::ReportOptions;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration for the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listening address.
    pub server: ServerConfig,

    /// Bound limits and report layout.
    pub calculator: CalculatorConfig,
}

/// Listening address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Bound limits and report layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Smallest accepted bound.
    pub min_bound: u64,
    /// Largest accepted bound.
    pub max_bound: u64,
    /// Bounds are snapped down to a multiple of this.
    pub step: u64,
    /// Bound used when a request names none.
    pub default_bound: u64,
    /// Bounds above this are logged as long-running.
    pub large_bound_threshold: u64,
    /// Rows in the top distances table.
    pub top_distances: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_bound: 100,
            max_bound: 50_000,
            step: 100,
            default_bound: primegap::session::DEFAULT_BOUND,
            large_bound_threshold: LARGE_BOUND_THRESHOLD,
            top_distances: 10,
        }
    }
}

impl Config {
    /// Load config from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an empty bound range.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks that the bound range is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `min_bound` is 0 or exceeds `max_bound`.
    pub fn validate(&self) -> Result<()> {
        let calc = &self.calculator;
        if calc.min_bound == 0 {
            return Err(Error::Config("min_bound must be positive".to_string()));
        }
        if calc.min_bound > calc.max_bound {
            return Err(Error::Config(format!(
                "min_bound {} exceeds max_bound {}",
                calc.min_bound, calc.max_bound
            )));
        }
        Ok(())
    }

    /// Get the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Fits a requested bound into the configured range and step.
    pub fn clamp_bound(&self, bound: Bound) -> Bound {
        let calc = &self.calculator;
        bound
            .snap(calc.step)
            .clamp(calc.min_bound, calc.max_bound)
    }

    /// The configured default bound, fitted like any request.
    pub fn default_bound(&self) -> Bound {
        let raw = Bound::new(self.calculator.default_bound).unwrap_or(Bound::MIN);
        self.clamp_bound(raw)
    }

    /// Report layout for pages served from the site root.
    pub fn report_options(&self) -> ReportOptions {
        let calc = &self.calculator;
        ReportOptions {
            top_distances: calc.top_distances,
            min_bound: calc.min_bound,
            max_bound: calc.max_bound,
            step: calc.step,
            form_action: "/".to_string(),
            css_url: "/css/style.css".to_string(),
        }
    }
}
