//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{catalog, chart, http, report};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Address of the Billboard Hot-100 page
    pub chart_url: String,
    /// Root of the lyrics catalog
    pub catalog_url: String,
    /// Per-request HTTP timeout
    pub timeout: Duration,
    /// How many words the most-used ranking shows
    pub top_words: usize,
    /// How many artists the most-verbose ranking shows
    pub top_artists: usize,
    /// Upper bound on disambiguation candidates followed per song
    pub max_candidates: usize,
    /// Where to write a JSON snapshot of the run, if anywhere
    pub report_path: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            chart_url: chart::DEFAULT_URL.to_string(),
            catalog_url: catalog::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            top_words: report::DEFAULT_TOP_WORDS,
            top_artists: report::DEFAULT_TOP_ARTISTS,
            max_candidates: catalog::DEFAULT_MAX_CANDIDATES,
            report_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = env::var("HOT100_CHART_URL") {
            config.chart_url = url;
        }

        if let Ok(url) = env::var("LYRICS_CATALOG_URL") {
            // Relative song links are joined onto this, so it has to read as a directory
            config.catalog_url = if url.ends_with('/') { url } else { format!("{url}/") };
        }

        if let Some(secs) = parse_var::<u64>("HTTP_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(n) = parse_var("TOP_WORDS")? {
            config.top_words = n;
        }

        if let Some(n) = parse_var("TOP_ARTISTS")? {
            config.top_artists = n;
        }

        if let Some(n) = parse_var("MAX_CANDIDATES")? {
            config.max_candidates = n;
        }

        config.report_path = env::var("REPORT_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(&p).to_string()));

        Ok(config)
    }
}

/// Read a numeric variable; unset is `None`, garbage is an error.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            Error::config(
                format!("{name} must be a non-negative integer, got {raw:?}"),
                "Fix or unset the variable in your environment or .env file",
            )
        }),
        Err(_) => Ok(None),
    }
}
