//! Login page hosting the credential form.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;

/// Login page — a card wrapping the shared [`LoginForm`] component.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Application Tracker"</h1>
                <p class="login-card__subtitle">"Sign in to view your applications"</p>
                <LoginForm/>
            </div>
        </div>
    }
}
