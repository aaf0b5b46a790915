//! Sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::session::{self, SessionState};

/// Per-field validation messages for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the form and assemble the request sent to the auth endpoint.
fn validate_login(email: &str, password: &str) -> Result<LoginRequest, LoginErrors> {
    let mut errors = LoginErrors::default();

    let email = email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !email.contains('@') {
        errors.email = Some("Email is invalid");
    }

    if password.is_empty() {
        errors.password = Some("Password is required");
    }

    if errors.is_empty() {
        Ok(LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

/// Sign-in form. An already-authenticated visitor is sent to the
/// dashboard instead of seeing the form again.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());

    let busy = move || session.get().loading;
    let server_error = move || session.get().error;

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login(&email.get(), &password.get()) {
            Ok(request) => {
                errors.set(LoginErrors::default());
                session::spawn_login(session, request);
            }
            Err(found) => errors.set(found),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1 class="auth-page__title">"Sign In"</h1>

                {move || {
                    server_error().map(|message| view! { <p class="auth-page__error">{message}</p> })
                }}

                <form class="form" on:submit=submit>
                    <div class="form__field">
                        <label class="form__label" for="email">"Email"</label>
                        <input
                            id="email"
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                session::clear_error(session);
                            }
                        />
                        {move || {
                            errors.with(|e| e.email).map(|msg| view! { <p class="form__error">{msg}</p> })
                        }}
                    </div>

                    <div class="form__field">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            id="password"
                            class="form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                session::clear_error(session);
                            }
                        />
                        {move || {
                            errors
                                .with(|e| e.password)
                                .map(|msg| view! { <p class="form__error">{msg}</p> })
                        }}
                    </div>

                    <button class="btn btn--primary form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
