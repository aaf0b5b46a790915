//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::session::{self, SessionState};

const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validation messages for the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Validate the form and assemble the request sent to the auth endpoint.
/// The confirmation password is checked locally and never sent.
fn validate_register(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, RegisterErrors> {
    let mut errors = RegisterErrors::default();

    let first_name = first_name.trim();
    if first_name.is_empty() {
        errors.first_name = Some("First name is required");
    }

    let last_name = last_name.trim();
    if last_name.is_empty() {
        errors.last_name = Some("Last name is required");
    }

    let email = email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !email.contains('@') {
        errors.email = Some("Email is invalid");
    }

    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters");
    }

    if confirm_password != password {
        errors.confirm_password = Some("Passwords do not match");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let phone = phone.trim();
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
    })
}

/// Registration form. A successful registration signs the visitor in
/// immediately, so the same authenticated redirect as the login page
/// applies.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterErrors::default());

    let busy = move || session.get().loading;
    let server_error = move || session.get().error;

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_register(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &phone.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
            Ok(request) => {
                errors.set(RegisterErrors::default());
                session::spawn_register(session, request);
            }
            Err(found) => errors.set(found),
        }
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           value: RwSignal<String>,
                           pick: fn(&RegisterErrors) -> Option<&'static str>| {
        view! {
            <div class="form__field">
                <label class="form__label" for=id>{label}</label>
                <input
                    id=id
                    class="form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        session::clear_error(session);
                    }
                />
                {move || {
                    errors.with(|e| pick(e)).map(|msg| view! { <p class="form__error">{msg}</p> })
                }}
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1 class="auth-page__title">"Create Account"</h1>

                {move || {
                    server_error().map(|message| view! { <p class="auth-page__error">{message}</p> })
                }}

                <form class="form" on:submit=submit>
                    <div class="form__row">
                        {text_field("first-name", "First Name", "text", first_name, |e| e.first_name)}
                        {text_field("last-name", "Last Name", "text", last_name, |e| e.last_name)}
                    </div>
                    {text_field("email", "Email", "email", email, |e| e.email)}
                    {text_field("phone", "Phone (optional)", "tel", phone, |_| None)}
                    {text_field("password", "Password", "password", password, |e| e.password)}
                    {text_field(
                        "confirm-password",
                        "Confirm Password",
                        "password",
                        confirm_password,
                        |e| e.confirm_password,
                    )}

                    <button class="btn btn--primary form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Sign in here"</a>
                </p>
            </div>
        </div>
    }
}
