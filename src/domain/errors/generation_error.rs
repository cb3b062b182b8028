//! Errors from the generative AI collaborator.

use thiserror::Error;

#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum GenerationError {
    #[error("note is empty, nothing to summarize")]
    EmptyNote,

    #[error("network error while calling the AI service: {message}")]
    Network { message: String },

    #[error("AI service rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("AI service returned an unusable response: {message}")]
    InvalidResponse { message: String },

    #[error("AI client is not configured: {message}")]
    NotConfigured { message: String },
}

impl GenerationError {
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }
}
