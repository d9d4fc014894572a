//! API endpoint configuration.
//!
//! DESIGN
//! ======
//! The base URL is resolved exactly once and handed to consumers through
//! Leptos context, so pages and components never re-read the environment
//! themselves and tests can inject a mock endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the external backend API.
///
/// Resolved at compile time from the `APP_API_BASE` build environment
/// variable. An unset variable yields an empty base, which makes every
/// endpoint a same-origin relative path (`/login`, `/applications`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are
    /// stripped so `endpoint` joins with exactly one separator.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    /// Build the process-wide config from the compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("APP_API_BASE").unwrap_or(""))
    }

    /// Root URL of the backend, without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full URL for an API path, e.g. `endpoint("login")`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
