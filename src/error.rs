//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog has no lyrics page for this song
    #[error("No lyrics page found for \"{title}\" by {artist}")]
    NotFound {
        /// Normalized song title that was searched for.
        title: String,
        /// Primary artist that was searched for.
        artist: String,
    },

    /// The server answered with a non-success status
    #[error("Request to {url} returned {status}{}", hint_suffix(.hint))]
    Fetch {
        /// Requested address.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// A fetched page lacks the element we extract from
    #[error("Could not extract {what} from {url}; the page layout may have changed")]
    Extraction {
        /// Description of the missing element.
        what: &'static str,
        /// Page the extraction ran against.
        url: String,
    },

    /// Two chart entries claim the same position
    #[error("Parsing error: rank {0} was already accounted for")]
    DuplicateRank(u32),

    /// Markup or value parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a fetch error with a hint derived from the HTTP status
    pub fn fetch_status(url: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            403 => Some("the site may be blocking automated requests"),
            404 => Some("the page does not exist"),
            429 => Some("rate limited - wait a moment and try again"),
            500..=599 => Some("server error - try again later"),
            _ => None,
        };
        Self::Fetch { url: url.into(), status, hint }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Whether this error only affects a single song and the run can carry on
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::NotFound { .. }
                | Self::Fetch { .. }
                | Self::Network(_)
                | Self::Extraction { .. }
        )
    }
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    hint.map(|h| format!(" ({h})")).unwrap_or_default()
}
