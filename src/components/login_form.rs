//! Credential form posting to the login endpoint.
//!
//! DESIGN
//! ======
//! This is the single source of truth for the login submission: one form,
//! one transport strategy (browser-set multipart boundary, cookies
//! included). Failures surface as a visible message, not just console
//! diagnostics.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;

/// Username/password form for `POST {base}/login`.
///
/// Submission is single-shot and disabled while a request is in flight.
/// Success records the session in [`AuthState`] and navigates to the
/// applications page; failure shows an error banner and stays put.
#[component]
pub fn LoginForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &credentials).await {
                    Ok(()) => {
                        auth.set(AuthState::signed_in(&credentials));
                        navigate("/applications", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(login_failed_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            let _ = &config;
            let _ = auth;
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-input"
                type="text"
                name="username"
                placeholder="Username"
                required=true
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="password"
                name="password"
                placeholder="Password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="login-button" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Login" }}
            </button>
            <Show when=move || !error.get().is_empty()>
                <p class="login-form__error" role="alert">{move || error.get()}</p>
            </Show>
        </form>
    }
}

/// Check both fields are present before any request goes out. The username
/// is trimmed; the password is taken verbatim.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(error: &ApiError) -> String {
    if error.is_auth_failure() {
        "Invalid username or password.".to_owned()
    } else {
        format!("Login failed: {error}")
    }
}
