//! AI relay error types.

use thiserror::Error;

/// AI relay errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// No API key configured for the completion endpoint.
    #[error("AI service is not properly configured")]
    MissingApiKey,

    /// Transport failure or non-success status from the provider.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered without any usable content.
    #[error("No content in AI response")]
    EmptyResponse,
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::MissingApiKey => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::EmptyResponse => "EMPTY_RESPONSE",
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        AiError::Provider(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
