/// Errors from the content-store layer.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Required configuration is missing or invalid. Not retryable.
    #[error("Content store configuration error: {0}")]
    Config(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-2xx status.
    #[error("Content store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode content: {0}")]
    Decode(#[from] serde_json::Error),
}
