//! REST API operations against the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced
//! against a timeout budget so a hanging server cannot stall the UI
//! indefinitely.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics so every
//! failure class resolves to a visible UI state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::types::{Application, Credentials};

/// Time budget per request, both endpoints.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(config: &ApiConfig) -> String {
    config.endpoint("login")
}

#[cfg(any(test, feature = "hydrate"))]
fn applications_endpoint(config: &ApiConfig) -> String {
    config.endpoint("applications")
}

/// Submit credentials as a multipart form via `POST {base}/login`.
///
/// The payload goes out as browser `FormData` with no manual
/// `Content-Type` header, so the transport supplies the multipart boundary
/// itself. Cookies are included for cross-origin session support.
///
/// # Errors
///
/// Returns `ApiError::Http` for a non-2xx status, `ApiError::Timeout` when
/// the budget elapses, and `ApiError::Transport` when the request never
/// completes.
pub async fn login(config: &ApiConfig, credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_login_form(credentials)?;
        let request = gloo_net::http::Request::post(&login_endpoint(config))
            .credentials(web_sys::RequestCredentials::Include)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = with_timeout(request.send())
            .await
            .ok_or(ApiError::Timeout)?
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            leptos::logging::warn!("login rejected: status={}", resp.status());
            return Err(ApiError::Http(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the application list via `GET {base}/applications`.
///
/// # Errors
///
/// Returns `ApiError::Http` for a non-2xx status (after logging the body
/// for diagnostics), `ApiError::Parse` when the body is not a JSON array of
/// applications, `ApiError::Timeout` when the budget elapses, and
/// `ApiError::Transport` when the request never completes.
pub async fn fetch_applications(config: &ApiConfig) -> Result<Vec<Application>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&applications_endpoint(config));
        let resp = with_timeout(request.send())
            .await
            .ok_or(ApiError::Timeout)?
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            leptos::logging::warn!(
                "failed to fetch applications: status={} body={}",
                resp.status(),
                body
            );
            return Err(ApiError::Http(resp.status()));
        }
        resp.json::<Vec<Application>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn build_login_form(credentials: &Credentials) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("could not build form payload".to_owned()))?;
    form.append_with_str("username", &credentials.username)
        .and_then(|()| form.append_with_str("password", &credentials.password))
        .map_err(|_| ApiError::Transport("could not build form payload".to_owned()))?;
    Ok(form)
}

#[cfg(feature = "hydrate")]
async fn with_timeout<F>(request: F) -> Option<F::Output>
where
    F: std::future::Future,
{
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;

    futures::pin_mut!(request);
    match select(request, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}
