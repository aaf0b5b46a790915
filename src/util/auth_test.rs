use super::*;
use crate::net::types::{Role, User};

fn session(loading: bool, token: Option<&str>, role: Option<Role>) -> SessionState {
    SessionState {
        user: role.map(|role| User {
            id: 1,
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: None,
            role,
            active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }),
        token: token.map(ToOwned::to_owned),
        loading,
        error: None,
    }
}

#[test]
fn pending_while_session_restores() {
    let state = session(true, None, None);
    assert_eq!(access_for(&state, false), Err(AccessDenied::CheckPending));
    assert_eq!(access_for(&state, true), Err(AccessDenied::CheckPending));
}

#[test]
fn anonymous_session_is_not_authenticated() {
    let state = session(false, None, None);
    assert_eq!(access_for(&state, false), Err(AccessDenied::NotAuthenticated));
}

#[test]
fn token_without_user_is_not_authenticated() {
    let state = session(false, Some("tok"), None);
    assert_eq!(access_for(&state, true), Err(AccessDenied::NotAuthenticated));
}

#[test]
fn customer_passes_plain_check_but_not_admin_check() {
    let state = session(false, Some("tok"), Some(Role::Customer));
    assert_eq!(access_for(&state, false), Ok(()));
    assert_eq!(access_for(&state, true), Err(AccessDenied::NotAdmin));
}

#[test]
fn admin_passes_both_checks() {
    let state = session(false, Some("tok"), Some(Role::Admin));
    assert_eq!(access_for(&state, false), Ok(()));
    assert_eq!(access_for(&state, true), Ok(()));
}

#[test]
fn denied_messages_are_nonempty() {
    for denied in [
        AccessDenied::CheckPending,
        AccessDenied::NotAuthenticated,
        AccessDenied::NotAdmin,
    ] {
        assert!(!denied.message().is_empty());
    }
}
