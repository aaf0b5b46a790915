//! Error kinds for the REST boundary and their user-facing mapping.
//!
//! ERROR HANDLING
//! ==============
//! Transport and backend failures are caught at the call site, logged with
//! the original detail, and converted into one of these kinds. Views render
//! a short message and offer retry-by-user-action; nothing here is fatal.
//! `Unauthorized` is the one kind also handled globally, because it
//! invalidates the whole session rather than a single request.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single REST operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response arrived (connection refused, DNS, CORS, offline).
    #[error("request could not reach the server")]
    Network,
    /// The fixed per-request deadline elapsed before a response.
    #[error("request timed out")]
    Timeout,
    /// 401: the bearer token is missing, expired, or revoked.
    #[error("session is no longer valid")]
    Unauthorized,
    /// 403: the operation requires a role this session does not hold.
    #[error("administrator privileges required")]
    Forbidden,
    /// 404: the requested resource does not exist.
    #[error("resource not found")]
    NotFound,
    /// Other 4xx carrying a field-level message from the backend.
    #[error("request rejected: {0}")]
    Validation(String),
    /// 5xx, or a 4xx without a usable backend message.
    #[error("server error ({0})")]
    Server(u16),
    /// The response arrived but its body was not the expected shape.
    #[error("malformed response body")]
    Decode,
}

impl ApiError {
    /// Backend-provided message, when one was attached to the response.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Validation(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Map an HTTP status and optional backend message to an [`ApiError`].
pub fn classify_status(status: u16, message: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        400..=499 => match message {
            Some(message) if !message.is_empty() => ApiError::Validation(message),
            _ => ApiError::Server(status),
        },
        _ => ApiError::Server(status),
    }
}

/// Pick the message a form should display for an auth failure: the
/// backend's own message when present, otherwise the given fallback.
pub fn auth_failure_message(error: &ApiError, fallback: &str) -> String {
    error
        .backend_message()
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}
