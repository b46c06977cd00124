//! Failure taxonomy for backend calls.
//!
//! Every variant is absorbed by the caller and degraded to a default display
//! state; none is allowed to reach a panic.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by the backend client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("backend is only reachable from the browser")]
    Unavailable,
}

impl BackendError {
    /// HTTP status attached to the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the credentials (expired or revoked token).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
