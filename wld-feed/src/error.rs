use thiserror::Error;

/// Errors that can occur when fetching or decoding a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-2xx status.
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("malformed feed payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FeedError {
    /// True for both transport failures and non-2xx answers.
    pub fn is_network(&self) -> bool {
        matches!(self, FeedError::Network { .. } | FeedError::Status { .. })
    }
}

/// Treat anything outside 200..=299 as a failed fetch.
pub fn ensure_success(url: &str, status: u16) -> Result<(), FeedError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FeedError::Status {
            url: url.to_string(),
            status,
        })
    }
}
