use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call against the auth API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// A response body that should have been JSON was not
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            ApiError::Decode(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
