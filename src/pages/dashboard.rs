//! Account dashboard for signed-in users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::protected::RequireAuth;
use crate::state::session::{self, SessionState};

/// Identity card plus quick links. Wrapped in [`RequireAuth`], so an
/// anonymous visitor never sees the body.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardBody/>
        </RequireAuth>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let logout = move |_| {
        session::logout(session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="page dashboard">
            <h1 class="page__title">"My Account"</h1>

            {move || {
                let state = session.get();
                state.user.clone().map(|user| {
                    let full_name = format!("{} {}", user.first_name, user.last_name);
                    let phone = user.phone.unwrap_or_else(|| "Not provided".to_owned());
                    let admin = state.is_admin();
                    view! {
                        <div class="dashboard__card">
                            <h2 class="dashboard__name">
                                {full_name}
                                {admin
                                    .then(|| view! { <span class="badge badge--admin">"Admin"</span> })}
                            </h2>
                            <dl class="dashboard__details">
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Phone"</dt>
                                <dd>{phone}</dd>
                            </dl>
                        </div>
                    }
                })
            }}

            <div class="dashboard__actions">
                <a class="btn btn--primary" href="/products">"Browse Products"</a>
                {move || {
                    session.get().is_admin().then(|| view! {
                        <a class="btn btn--confirm" href="/admin/products">"Manage Products"</a>
                    })
                }}
                <button class="btn btn--muted" on:click=logout.clone()>"Logout"</button>
            </div>
        </div>
    }
}
