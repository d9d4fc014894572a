//! Session state set by a successful login.
//!
//! The server owns authentication; this only records that a login call
//! succeeded in this browser session so the UI can greet the user. Nothing
//! is persisted.

use crate::net::types::Credentials;

/// Whether a login has succeeded this session, and for whom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl AuthState {
    /// State after the server accepted the given credentials.
    #[must_use]
    pub fn signed_in(credentials: &Credentials) -> Self {
        Self { authenticated: true, username: Some(credentials.username.clone()) }
    }
}
