//! Capability checks and shared route-gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens and admin mutations run the same explicit access
//! check before doing anything, instead of relying on component nesting
//! alone. A denied result is typed so callers can distinguish "still
//! checking" from "not signed in" from "wrong role".

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Why a protected operation was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDenied {
    /// The session is still restoring; identity is not known yet.
    CheckPending,
    /// No authenticated identity.
    NotAuthenticated,
    /// Authenticated, but the Admin role is required.
    NotAdmin,
}

impl AccessDenied {
    /// Short message suitable for inline display.
    pub fn message(self) -> &'static str {
        match self {
            Self::CheckPending => "Checking authentication...",
            Self::NotAuthenticated => "Please sign in to continue.",
            Self::NotAdmin => "You need administrator privileges to access this page.",
        }
    }
}

/// Check whether the session may perform a protected operation.
pub fn access_for(session: &SessionState, admin_only: bool) -> Result<(), AccessDenied> {
    if session.loading {
        return Err(AccessDenied::CheckPending);
    }
    if !session.is_authenticated() {
        return Err(AccessDenied::NotAuthenticated);
    }
    if admin_only && !session.is_admin() {
        return Err(AccessDenied::NotAdmin);
    }
    Ok(())
}

/// Redirect to `/login` whenever the session has settled anonymous.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
