//! The stored bearer credential.
//!
//! A single token lives in `localStorage`; it is read on every request and
//! any component may clear it before sending the user to the login view.

use web_sys::Storage;

use crate::config::TOKEN_KEY;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

pub fn store_token(token: &str) -> bool {
    storage().is_some_and(|storage| storage.set_item(TOKEN_KEY, token.trim()).is_ok())
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

pub fn is_signed_in() -> bool {
    token().is_some()
}
