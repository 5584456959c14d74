use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller supplied a request the engine cannot interpret.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every documentation tier failed for a single property.
    ///
    /// Raised per property; the engine never lets it abort a batch.
    #[error("Documentation unavailable for '{property}': {reason}")]
    DocumentationUnavailable { property: String, reason: String },

    /// A cached entry could not be deserialized. Treated as a cache miss.
    #[error("Cache entry '{key}' is corrupted: {reason}")]
    CacheCorruption { key: String, reason: String },

    /// An upstream documentation service answered with something unusable.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Reading requests or writing responses failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// True when the failure means the remote host could not be reached at all,
    /// as opposed to answering with an error.
    pub fn is_unreachable(&self) -> bool {
        match self {
            AppError::Http(e) => e.is_connect() || e.is_timeout(),
            AppError::Timeout(_) => true,
            _ => false,
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
