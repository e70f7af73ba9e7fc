use thiserror::Error;

/// Errors raised while talking to the upstream catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-2xx status
    #[error("Catalog responded with status {status}")]
    Upstream {
        /// HTTP status code returned by the catalog
        status: u16,
        /// Reason phrase for the status, when one is known
        status_text: Option<String>,
    },

    /// The catalog could not be reached, or the connection failed mid-response
    #[error("Catalog request failed: {0}")]
    Network(#[from] reqwest_middleware::Error),

    /// The configured catalog URL cannot carry item paths
    #[error("Invalid catalog base URL {url}: {reason}")]
    InvalidBaseUrl {
        /// URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The catalog body did not match the expected shape
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Builds an upstream error from a response status
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(ToString::to_string),
        }
    }
}
