//! Page retrieval.
//!
//! Everything that talks to a website goes through [`PageFetcher`], so the
//! resolver and pipeline can run against canned pages in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::constants::http;
use crate::error::{Error, Result};

/// Source of raw page markup by address.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the markup at `url`.
    ///
    /// A non-success status must surface as [`Error::Fetch`].
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP(S)
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher honoring the configured timeout
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .user_agent(http::USER_AGENT)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {url}");
        let resp = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::fetch_status(url, status.as_u16()));
        }

        resp.text().await
            .map_err(|e| Error::Network(format!("Reading body of {url} failed: {e}")))
    }
}

/// Canned pages keyed by exact address; anything else is a 404.
#[derive(Debug, Clone, Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
}

impl StaticPages {
    /// Create an empty page set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `markup` under `url`.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert(url, markup);
        self
    }

    /// Register `markup` under `url`, replacing any earlier page.
    pub fn insert(&mut self, url: impl Into<String>, markup: impl Into<String>) {
        self.pages.insert(url.into(), markup.into());
    }
}

#[async_trait]
impl PageFetcher for StaticPages {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::fetch_status(url, 404))
    }
}
