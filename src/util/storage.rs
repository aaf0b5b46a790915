//! Browser localStorage helpers for the persisted session pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly two keys are persisted: the opaque bearer token and a JSON
//! copy of the user record. They are written together on login/register
//! and removed together on logout or a 401, so storage never holds half
//! a session. Only the session manager writes them; the HTTP layer reads
//! the token for request signing. The user copy is never read back by the
//! app itself, which re-verifies identity against the backend on restore.

use serde::Serialize;

use crate::net::types::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// The persisted bearer token, if a session was saved.
pub fn load_token() -> Option<String> {
    load_string(TOKEN_KEY)
}

/// Persist the session pair. Always written together.
pub fn save_credentials(token: &str, user: &User) {
    save_string(TOKEN_KEY, token);
    save_json(USER_KEY, user);
}

/// Remove the session pair. Always removed together; idempotent.
pub fn clear_credentials() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}
