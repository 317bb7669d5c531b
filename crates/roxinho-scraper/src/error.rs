use thiserror::Error;

/// How a failure should be reported to whoever asked for the extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request itself was unusable; nothing upstream was contacted.
    BadRequest,
    /// Upstream fetch or parse failed.
    ServerError,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("URL is required")]
    MissingUrl,

    #[error("unsupported platform for URL \"{url}\"")]
    UnsupportedPlatform { url: String },

    #[error("Mercado Livre listing ID not found in URL \"{url}\"")]
    ListingIdNotFound { url: String },

    #[error("Mercado Livre item {item_id} not found (HTTP {status})")]
    ItemNotFound { item_id: String, status: u16 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ScraperError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ScraperError::MissingUrl | ScraperError::UnsupportedPlatform { .. } => {
                FailureKind::BadRequest
            }
            _ => FailureKind::ServerError,
        }
    }

    /// Upstream HTTP status behind the failure, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ScraperError::ItemNotFound { status, .. }
            | ScraperError::UnexpectedStatus { status, .. } => Some(*status),
            ScraperError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
