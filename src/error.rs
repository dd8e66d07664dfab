//! Error and outcome types for purge operations

use thiserror::Error;

/// Errors raised while configuring or talking to the Bunny API
#[derive(Debug, Error)]
pub enum PurgeError {
    /// A required setting is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The HTTP client failed before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// A header value could not be encoded (e.g. non-ASCII access key)
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl From<reqwest::Error> for PurgeError {
    fn from(err: reqwest::Error) -> Self {
        PurgeError::Transport(err.to_string())
    }
}

/// Result of a single call against the provider API.
///
/// Any HTTP response counts as `Success`, whatever its status code.
/// Callers that care about the status (only `test`) inspect it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    Success(u16),
    TransportFailure(String),
    NoResponse,
}

impl PurgeOutcome {
    /// Fold a transport result into an outcome, keeping the failure cause
    pub fn from_result(result: Result<PurgeOutcome, PurgeError>) -> Self {
        match result {
            Ok(outcome) => outcome,
            Err(e) => PurgeOutcome::TransportFailure(e.to_string()),
        }
    }

    /// HTTP status code, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            PurgeOutcome::Success(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_ok_200(&self) -> bool {
        self.status() == Some(200)
    }
}
