//! Authentication session state machine.
//!
//! Single source of truth for the bearer token and user identity. Only
//! this module mutates `token`/`user`, and `is_authenticated` is always
//! derived from the token so the two cannot disagree. The credential pair
//! persists to durable storage and is rehydrated once at startup; no
//! access-control decision happens before that.
//!
//! The transition methods on [`SessionState`] are pure; the free functions
//! below combine them with a storage handle so tests can run the whole
//! flow against an in-memory store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::http::ApiError;
use crate::net::types::{TokenResponse, User};
use crate::storage::{self, SessionStorage};

/// Fallback error for rejected credentials without a backend detail.
const INVALID_CREDENTIALS: &str = "Invalid username or password";
/// Fallback error for any other login failure.
const LOGIN_FAILED: &str = "Login failed";

/// Authentication session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// Always equal to `token.is_some()`; kept in lockstep by the setters.
    pub is_authenticated: bool,
    /// True only while one login call is in flight.
    pub is_loading: bool,
    /// Last login failure, cleared explicitly or on the next attempt.
    pub error: Option<String>,
    /// True once the startup rehydration has run, successfully or not.
    pub is_hydrated: bool,
}

impl SessionState {
    /// Set or clear the token, keeping `is_authenticated` in lockstep.
    pub fn set_token(&mut self, token: Option<String>) {
        self.is_authenticated = token.is_some();
        self.token = token;
    }

    /// Set or clear the user record.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Start a login attempt: loading on, previous error cleared.
    pub fn begin_login(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Apply a successful login.
    pub fn complete_login(&mut self, token: String, user: User) {
        self.set_token(Some(token));
        self.set_user(Some(user));
        self.is_loading = false;
        self.error = None;
    }

    /// Record a failed login. Token and user are left untouched.
    pub fn fail_login(&mut self, message: String) {
        self.error = Some(message);
        self.is_loading = false;
    }

    /// Drop credentials and the last error. Hydration is unaffected.
    pub fn reset(&mut self) {
        self.set_token(None);
        self.set_user(None);
        self.error = None;
    }

    /// Clear the last login error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// One-way transition marking the startup rehydration as done.
    pub fn set_hydrated(&mut self) {
        self.is_hydrated = true;
    }
}

/// Load any persisted session into `state`, then mark it hydrated.
///
/// Runs once at startup, before the router makes its first access-control
/// decision. A missing or corrupt persisted session leaves the state
/// logged out; hydration is marked done either way.
pub fn hydrate_session(state: &mut SessionState, storage: &dyn SessionStorage) {
    if let Some((token, user)) = storage::load_session(storage) {
        state.set_token(Some(token));
        state.set_user(Some(user));
    }
    state.set_hydrated();
}

/// Log out: clear in-memory credentials and both persisted keys.
/// Idempotent — calling it while logged out changes nothing.
pub fn logout(state: &mut SessionState, storage: &dyn SessionStorage) {
    state.reset();
    storage::clear_session(storage);
}

/// Fold the result of the login HTTP call into the session.
///
/// On success the credential pair is persisted before the in-memory state
/// flips to authenticated. On failure the message prefers the backend
/// detail, then distinguishes rejected credentials from everything else,
/// and the error is returned so the login form can branch on it.
pub fn apply_login_outcome(
    state: &mut SessionState,
    storage: &dyn SessionStorage,
    username: &str,
    outcome: Result<TokenResponse, ApiError>,
) -> Result<(), ApiError> {
    match outcome {
        Ok(response) => {
            let user = User { username: username.to_owned() };
            storage::persist_session(storage, &response.access_token, &user);
            state.complete_login(response.access_token, user);
            Ok(())
        }
        Err(err) => {
            let message = err.detail().map_or_else(
                || {
                    if err.status() == Some(401) {
                        INVALID_CREDENTIALS.to_owned()
                    } else {
                        LOGIN_FAILED.to_owned()
                    }
                },
                ToOwned::to_owned,
            );
            state.fail_login(message);
            Err(err)
        }
    }
}

/// Run a full login against the backend, updating `session` through every
/// phase and persisting the result to browser storage.
///
/// Concurrent calls are not serialized here; the login form keeps its
/// submit control disabled while `is_loading` is set.
///
/// # Errors
///
/// The gateway error, after it has been folded into `error`.
pub async fn login(
    session: leptos::prelude::RwSignal<SessionState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    use leptos::prelude::Update;

    session.update(SessionState::begin_login);
    let outcome = crate::net::api::login(&username, &password).await;

    let mut result = Ok(());
    session.update(|state| {
        result = apply_login_outcome(state, &storage::BrowserStorage, &username, outcome);
    });
    result
}
