/*
[INPUT]:  Error sources (transport, API status, serialization, storage, session)
[OUTPUT]: Structured error type with user-facing messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing user-facing messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Message surfaced when the backend rejects the stored credential.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired";

/// Message surfaced when an authenticated call is made without a credential.
pub const NO_CREDENTIAL_MESSAGE: &str = "NO_TOKEN: sign in first";

/// Main error type for the Kettik client
#[derive(Error, Debug)]
pub enum KettikError {
    /// Request could not complete (connect, TLS, body read)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    ///
    /// `message` is already derived from the body (or the status phrase)
    /// and is meant to be shown verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Backend answered 401; the stored credential has been discarded
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,

    /// Authenticated call attempted with an empty token store
    #[error("{}", NO_CREDENTIAL_MESSAGE)]
    NoCredential,

    /// Successful response whose body does not match the expected record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token persistence failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl KettikError {
    /// HTTP status attached to the failure, if the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            KettikError::Api { status, .. } => Some(*status),
            KettikError::SessionExpired => Some(StatusCode::UNAUTHORIZED.as_u16()),
            KettikError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the failure ended the current session
    pub fn is_session_expired(&self) -> bool {
        matches!(self, KettikError::SessionExpired)
    }

    /// Check if error indicates the user has to sign in (again)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, KettikError::SessionExpired | KettikError::NoCredential)
    }

    /// Text the presentation layer renders for this failure
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        KettikError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for Kettik operations
pub type Result<T> = std::result::Result<T, KettikError>;
