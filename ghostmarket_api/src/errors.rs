//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API returned a non-2xx status. `message` is the classified,
    /// human-readable description; the status is embedded in both fields.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    /// A transport-level failure (DNS, connection refused, abort). Propagated
    /// from reqwest unmodified.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The constructed request URL was invalid.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// A 2xx response body could not be decoded as JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
