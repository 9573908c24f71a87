//! Durable session storage.
//!
//! The session persists `token` and `user` so a page reload does not log
//! the user out. Browser builds back this with `localStorage`; native
//! tests substitute an in-memory map. Only the session store writes these
//! keys — the HTTP gateway reads the token, nothing else touches them.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Key-value storage surviving page reloads.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persist an authenticated session. Both keys are written together.
pub fn persist_session(storage: &dyn SessionStorage, token: &str, user: &User) {
    storage.set(TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        storage.set(USER_KEY, &json);
    }
}

/// Remove both persisted keys. Safe to call when nothing is stored.
pub fn clear_session(storage: &dyn SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// Load a previously persisted session.
///
/// Returns `None` unless both keys are present and the user record parses;
/// a half-written session is treated as logged out.
pub fn load_session(storage: &dyn SessionStorage) -> Option<(String, User)> {
    let token = storage.get(TOKEN_KEY)?;
    let user = serde_json::from_str(&storage.get(USER_KEY)?).ok()?;
    Some((token, user))
}
