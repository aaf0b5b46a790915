//! Session manager: authentication state and its lifecycle operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is constructed explicitly in `App`, provided
//! via context, and mutated only by the operations in this module (restore,
//! login, register, logout) plus the global 401 handler's page reload. Route
//! guards and identity-aware components read it; nothing else writes it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "csr")]
use crate::net::error::auth_failure_message;
use crate::net::types::{LoginRequest, RegisterRequest, Role, User};

#[cfg(feature = "csr")]
use leptos::prelude::{GetUntracked, RwSignal, Update};
#[cfg(not(feature = "csr"))]
use leptos::prelude::{RwSignal, Update};

/// Shown when login fails without a usable backend message.
pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
/// Shown when registration fails without a usable backend message.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// The client-held record of the current authenticated identity.
///
/// Starts in the uninitialized state (`loading = true`) and leaves it
/// exactly once, via [`restore`] settling. After that, `loading` is raised
/// only for the duration of a login or register attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    /// Derived invariant: authenticated iff both token and user are held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }

    /// Enter an auth attempt: raise `loading`, drop any previous error.
    pub fn begin_attempt(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle into the authenticated state after login/register/restore.
    pub fn apply_authenticated(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.error = None;
        self.loading = false;
    }

    /// Settle a failed login/register attempt with a displayable message.
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Reset to the anonymous state. Idempotent.
    pub fn apply_logout(&mut self) {
        self.user = None;
        self.token = None;
        self.error = None;
        self.loading = false;
    }

    /// Leave the initial loading state without changing identity.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Reset the error field without altering auth state.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Restore the session from persisted storage at startup.
///
/// With a persisted token present, the current user is fetched to verify
/// the token is still valid. Any failure degrades silently: the stale
/// token is removed and the session settles anonymous with no error
/// surfaced. Either way this is the only path out of the initial
/// `loading` state when no explicit login/register happens.
#[cfg(feature = "csr")]
pub fn spawn_restore(session: RwSignal<SessionState>) {
    leptos::task::spawn_local(async move {
        let Some(token) = crate::util::storage::load_token() else {
            session.update(SessionState::finish_loading);
            return;
        };
        match crate::net::api::fetch_current_user().await {
            Ok(user) => session.update(|state| state.apply_authenticated(token, user)),
            Err(err) => {
                log::warn!("session restore failed, clearing stale token: {err}");
                crate::util::storage::clear_credentials();
                session.update(SessionState::apply_logout);
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn spawn_restore(session: RwSignal<SessionState>) {
    session.update(SessionState::finish_loading);
}

/// Attempt a login; on success persist token + user together.
///
/// Concurrent attempts are rejected: while one attempt (or the initial
/// restore) is still in flight, further calls return without touching any
/// state, so the error/success fields can never interleave.
#[cfg(feature = "csr")]
pub fn spawn_login(session: RwSignal<SessionState>, request: LoginRequest) {
    if session.get_untracked().loading {
        return;
    }
    session.update(SessionState::begin_attempt);
    leptos::task::spawn_local(async move {
        match crate::net::api::login(&request).await {
            Ok(resp) => {
                let token = resp.token.clone();
                let user = resp.into_session_user();
                crate::util::storage::save_credentials(&token, &user);
                session.update(|state| state.apply_authenticated(token, user));
            }
            Err(err) => {
                log::error!("login failed: {err}");
                session.update(|state| state.apply_error(auth_failure_message(&err, LOGIN_FALLBACK)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn spawn_login(session: RwSignal<SessionState>, request: LoginRequest) {
    let _ = (session, request);
}

/// Attempt a registration; success logs the user in immediately with the
/// same token/user population as [`spawn_login`]. Same in-flight policy.
#[cfg(feature = "csr")]
pub fn spawn_register(session: RwSignal<SessionState>, request: RegisterRequest) {
    if session.get_untracked().loading {
        return;
    }
    session.update(SessionState::begin_attempt);
    leptos::task::spawn_local(async move {
        match crate::net::api::register(&request).await {
            Ok(resp) => {
                let token = resp.token.clone();
                let user = resp.into_session_user();
                crate::util::storage::save_credentials(&token, &user);
                session.update(|state| state.apply_authenticated(token, user));
            }
            Err(err) => {
                log::error!("registration failed: {err}");
                session
                    .update(|state| state.apply_error(auth_failure_message(&err, REGISTER_FALLBACK)));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn spawn_register(session: RwSignal<SessionState>, request: RegisterRequest) {
    let _ = (session, request);
}

/// Clear the in-memory and persisted session unconditionally.
///
/// No backend call is made; calling this twice in a row yields the same
/// anonymous state both times.
pub fn logout(session: RwSignal<SessionState>) {
    crate::util::storage::clear_credentials();
    session.update(SessionState::apply_logout);
}

/// Reset the session error without altering auth state.
pub fn clear_error(session: RwSignal<SessionState>) {
    session.update(SessionState::clear_error);
}
