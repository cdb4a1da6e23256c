//! Gateway error taxonomy.
//!
//! The gateway reports failures with a typed error; service adapters
//! collapse these to `Option`/empty defaults before anything reaches the
//! view layer.

/// Result alias used throughout the gateway.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),

    #[error("missing API bearer token")]
    MissingToken,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// Whether the failure was an authorization rejection.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ClientError::Status(status) if *status == reqwest::StatusCode::UNAUTHORIZED
        )
    }
}
