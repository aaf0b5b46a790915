use super::*;
use leptos::prelude::{GetUntracked, RwSignal, Update};

fn user(role: Role) -> User {
    User {
        id: 1,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: None,
        role,
        active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

// =============================================================
// Defaults and derived flags
// =============================================================

#[test]
fn default_session_is_uninitialized() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_requires_both_token_and_user() {
    let mut state = SessionState::default();
    state.token = Some("tok".to_owned());
    assert!(!state.is_authenticated());

    state.token = None;
    state.user = Some(user(Role::Customer));
    assert!(!state.is_authenticated());

    state.token = Some("tok".to_owned());
    assert!(state.is_authenticated());
}

#[test]
fn is_admin_checks_role_and_authentication() {
    let mut state = SessionState::default();
    state.user = Some(user(Role::Admin));
    assert!(!state.is_admin());

    state.token = Some("tok".to_owned());
    assert!(state.is_admin());

    state.user = Some(user(Role::Customer));
    assert!(!state.is_admin());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_attempt_raises_loading_and_drops_error() {
    let mut state = SessionState {
        loading: false,
        error: Some("old".to_owned()),
        ..SessionState::default()
    };
    state.begin_attempt();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_authenticated_settles_with_identity() {
    let mut state = SessionState::default();
    state.apply_authenticated("tok".to_owned(), user(Role::Customer));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.token.as_deref(), Some("tok"));
}

#[test]
fn apply_error_settles_with_message_and_no_identity() {
    let mut state = SessionState::default();
    state.begin_attempt();
    state.apply_error("Invalid credentials".to_owned());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn apply_logout_resets_everything() {
    let mut state = SessionState::default();
    state.apply_authenticated("tok".to_owned(), user(Role::Admin));
    state.error = Some("stale".to_owned());
    state.apply_logout();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[test]
fn clear_error_keeps_auth_state() {
    let mut state = SessionState::default();
    state.apply_authenticated("tok".to_owned(), user(Role::Customer));
    state.error = Some("oops".to_owned());
    state.clear_error();
    assert!(state.error.is_none());
    assert!(state.is_authenticated());
}

#[test]
fn finish_loading_keeps_anonymous_identity() {
    let mut state = SessionState::default();
    state.finish_loading();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
}

// =============================================================
// Operations on the shared signal
// =============================================================

#[test]
fn logout_operation_is_idempotent() {
    let session = RwSignal::new(SessionState::default());
    session.update(|state| state.apply_authenticated("tok".to_owned(), user(Role::Customer)));

    logout(session);
    let first = session.get_untracked();
    logout(session);
    let second = session.get_untracked();

    assert_eq!(first, second);
    assert!(!first.is_authenticated());
}

#[test]
fn clear_error_operation_only_touches_error() {
    let session = RwSignal::new(SessionState::default());
    session.update(|state| {
        state.apply_authenticated("tok".to_owned(), user(Role::Customer));
        state.error = Some("oops".to_owned());
    });
    clear_error(session);
    let state = session.get_untracked();
    assert!(state.error.is_none());
    assert!(state.is_authenticated());
}
