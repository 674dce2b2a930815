use thiserror::Error;

/// Unified error type for gitlab-tags operations
#[derive(Error, Debug)]
pub enum TagListError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in gitlab-tags
pub type Result<T> = std::result::Result<T, TagListError>;

impl TagListError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagListError::Config(msg.into())
    }

    /// Create a response error with context
    pub fn response(msg: impl Into<String>) -> Self {
        TagListError::Response(msg.into())
    }
}
