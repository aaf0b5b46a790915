//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Site-wide navigation. Reads the shared session signal from context and
/// switches between guest links and the signed-in menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let logout = move |_| {
        session::logout(session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Storefront"</a>

            <div class="navbar__links">
                <a href="/products" class="navbar__link">"Products"</a>
                {move || {
                    let state = session.get();
                    if state.is_authenticated() {
                        let display_name = state
                            .user
                            .as_ref()
                            .map(|user| user.first_name.clone())
                            .unwrap_or_default();
                        let admin = state.is_admin();
                        view! {
                            <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                            {admin
                                .then(|| view! {
                                    <a href="/admin/products" class="navbar__link">
                                        "Manage Products"
                                    </a>
                                })}
                            <span class="navbar__user">
                                {format!("Hi, {display_name}")}
                                {admin.then(|| view! { <span class="badge badge--admin">"Admin"</span> })}
                            </span>
                            <button class="btn btn--muted navbar__logout" on:click=logout.clone()>
                                "Logout"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href="/login" class="navbar__link">"Login"</a>
                            <a href="/register" class="btn btn--primary navbar__register">
                                "Register"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
