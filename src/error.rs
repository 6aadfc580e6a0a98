use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelsLabError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("API Error: {0}")]
    ApiError(String),
    #[error("Failed to fetch image: {0}")]
    FetchError(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ModelsLabError {
    /// Only network failures are worth another attempt; nothing in this
    /// crate retries them.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ModelsLabError::TransportError(_))
    }

    /// Backend-supplied message for `ApiError` / `FetchError`.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ModelsLabError::ApiError(msg) | ModelsLabError::FetchError(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ModelsLabError {
    fn from(e: reqwest::Error) -> Self {
        ModelsLabError::TransportError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelsLabError>;
