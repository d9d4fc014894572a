//! Applications page listing tracked job applications.
//!
//! DESIGN
//! ======
//! One fetch per navigation, surfaced through a `LocalResource` so the
//! page shows a loading state until the request resolves. Every outcome of
//! the fetch — data, empty list, or any failure class — maps to a defined
//! render; a missing or malformed body can never crash the page.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::types::Application;
use crate::state::auth::AuthState;

/// Applications page — fetches the list on render and shows one item per
/// entry, in server order.
///
/// Failures render an error banner with a manual link to the login page;
/// no automatic redirect is wired up.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let applications = LocalResource::new(move || {
        let config = config.clone();
        async move { crate::net::api::fetch_applications(&config).await }
    });

    view! {
        <div class="applications-page">
            <header class="applications-page__header">
                <h1>"Applications"</h1>
                <Show when=move || auth.get().authenticated>
                    <p class="applications-page__user">
                        {move || signed_in_label(auth.get().username.as_deref())}
                    </p>
                </Show>
            </header>

            <Suspense fallback=move || {
                view! { <p class="applications-page__loading">"Loading applications..."</p> }
            }>
                {move || {
                    applications
                        .get()
                        .map(|result| match result {
                            Ok(apps) if apps.is_empty() => {
                                view! {
                                    <p class="applications-page__empty">"No applications tracked yet."</p>
                                }
                                    .into_any()
                            }
                            Ok(apps) => {
                                view! {
                                    <ul class="applications-page__list">
                                        {company_labels(&apps)
                                            .into_iter()
                                            .map(|company| {
                                                view! { <li class="applications-page__item">{company}</li> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(error) => {
                                view! {
                                    <div class="applications-page__error" role="alert">
                                        <p>{load_failed_message(&error)}</p>
                                        <a href="/login">"Go to login"</a>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Rendered list labels, one per application, preserving server order.
fn company_labels(applications: &[Application]) -> Vec<String> {
    applications.iter().map(|application| application.company.clone()).collect()
}

fn load_failed_message(error: &ApiError) -> String {
    format!("Could not load applications: {error}")
}

fn signed_in_label(username: Option<&str>) -> String {
    match username {
        Some(name) => format!("Signed in as {name}"),
        None => "Signed in".to_owned(),
    }
}
