//! Posts API-specific error types.

/// Errors that can occur during posts API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Failure of a create-post call, carrying the message shown on the form.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        SubmissionError {
            message: message.into(),
        }
    }
}

impl From<ApiError> for SubmissionError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Status { message, .. } if !message.trim().is_empty() => {
                SubmissionError::new(message)
            }
            other => SubmissionError::new(other.to_string()),
        }
    }
}
