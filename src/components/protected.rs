//! Route guard wrapper for authenticated and admin-only pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{AccessDenied, access_for, install_unauth_redirect};

/// Gate for protected routes.
///
/// While the session restore is still running a spinner is shown. An
/// anonymous visitor is redirected to the login page; a signed-in
/// customer hitting an admin-only route sees an access-denied card
/// instead of being bounced.
#[component]
pub fn RequireAuth(
    #[prop(optional)] admin_only: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        {move || match access_for(&session.get(), admin_only) {
            Ok(()) => children().into_any(),
            Err(AccessDenied::CheckPending) => view! {
                <div class="guard guard--pending">
                    <div class="spinner"></div>
                    <p>{AccessDenied::CheckPending.message()}</p>
                </div>
            }
                .into_any(),
            Err(AccessDenied::NotAuthenticated) => view! {
                <div class="guard">
                    <p>{AccessDenied::NotAuthenticated.message()}</p>
                </div>
            }
                .into_any(),
            Err(AccessDenied::NotAdmin) => view! {
                <div class="guard guard--denied">
                    <h2>"Access Denied"</h2>
                    <p>{AccessDenied::NotAdmin.message()}</p>
                    <a class="btn btn--primary" href="/products">"Back to Products"</a>
                </div>
            }
                .into_any(),
        }}
    }
}
