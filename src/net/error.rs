//! Failure taxonomy for backend API calls.
//!
//! DESIGN
//! ======
//! Every request resolves to `Result<T, ApiError>` so the rendering layer
//! can show a defined state for each failure class instead of logging and
//! carrying on with absent data.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed backend API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, CORS rejection).
    #[error("request failed: {0}")]
    Transport(String),
    /// The request exceeded its time budget.
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Http(u16),
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether the failure is a credential/authorization rejection, as
    /// opposed to the server or the connection misbehaving.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Http(401 | 403))
    }
}
