use super::*;
use crate::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};

fn user(name: &str) -> User {
    User { username: name.to_owned() }
}

fn token_response(token: &str) -> TokenResponse {
    TokenResponse { access_token: token.to_owned(), token_type: "bearer".to_owned() }
}

fn assert_invariant(state: &SessionState) {
    assert_eq!(state.is_authenticated, state.token.is_some());
    assert_eq!(state.token.is_some(), state.user.is_some());
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_logged_out_and_unhydrated() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert!(!state.is_hydrated);
}

#[test]
fn set_token_keeps_is_authenticated_in_lockstep() {
    let mut state = SessionState::default();

    state.set_token(Some("tok-1".to_owned()));
    assert!(state.is_authenticated);

    state.set_token(None);
    assert!(!state.is_authenticated);
}

#[test]
fn begin_login_sets_loading_and_clears_previous_error() {
    let mut state = SessionState::default();
    state.error = Some("old failure".to_owned());

    state.begin_login();
    assert!(state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn complete_login_establishes_the_full_session() {
    let mut state = SessionState::default();
    state.begin_login();

    state.complete_login("tok-1".to_owned(), user("admin"));
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(user("admin")));
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_invariant(&state);
}

#[test]
fn fail_login_records_error_and_stops_loading() {
    let mut state = SessionState::default();
    state.begin_login();

    state.fail_login("Login failed".to_owned());
    assert_eq!(state.error.as_deref(), Some("Login failed"));
    assert!(!state.is_loading);
    assert!(state.token.is_none());
    assert_invariant(&state);
}

#[test]
fn reset_clears_credentials_but_not_hydration() {
    let mut state = SessionState::default();
    state.set_hydrated();
    state.complete_login("tok-1".to_owned(), user("admin"));
    state.error = Some("stale".to_owned());

    state.reset();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(state.error.is_none());
    assert!(state.is_hydrated);
    assert_invariant(&state);
}

#[test]
fn clear_error_has_no_other_effect() {
    let mut state = SessionState::default();
    state.complete_login("tok-1".to_owned(), user("admin"));
    state.error = Some("oops".to_owned());

    state.clear_error();
    assert!(state.error.is_none());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_invariant(&state);
}

#[test]
fn set_hydrated_is_one_way() {
    let mut state = SessionState::default();
    state.set_hydrated();
    state.set_hydrated();
    assert!(state.is_hydrated);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_restores_a_persisted_session_without_network() {
    let storage = MemoryStorage::default();
    crate::storage::persist_session(&storage, "tok-1", &user("admin"));

    let mut state = SessionState::default();
    hydrate_session(&mut state, &storage);

    assert!(state.is_hydrated);
    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(user("admin")));
    assert_invariant(&state);
}

#[test]
fn hydrate_with_empty_storage_still_marks_hydrated() {
    let mut state = SessionState::default();
    hydrate_session(&mut state, &MemoryStorage::default());

    assert!(state.is_hydrated);
    assert!(!state.is_authenticated);
    assert_invariant(&state);
}

#[test]
fn hydrate_ignores_a_token_without_a_user() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");

    let mut state = SessionState::default();
    hydrate_session(&mut state, &storage);

    assert!(state.is_hydrated);
    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
    assert_invariant(&state);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_state_and_both_storage_keys() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.set_hydrated();
    apply_login_outcome(&mut state, &storage, "admin", Ok(token_response("tok-1")))
        .expect("login should succeed");

    logout(&mut state, &storage);
    assert!(!state.is_authenticated);
    assert!(state.token.is_none());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
    assert_invariant(&state);
}

#[test]
fn logout_is_idempotent() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.set_hydrated();

    logout(&mut state, &storage);
    let once = state.clone();
    logout(&mut state, &storage);

    assert_eq!(state, once);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// Login outcome
// =============================================================

#[test]
fn successful_login_persists_and_authenticates() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.begin_login();

    let result =
        apply_login_outcome(&mut state, &storage, "admin", Ok(token_response("tok-1")));

    assert!(result.is_ok());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(user("admin")));
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(storage.get(TOKEN_KEY), Some("tok-1".to_owned()));
    assert_invariant(&state);
}

#[test]
fn rejected_login_surfaces_backend_detail_and_resignals() {
    let storage = MemoryStorage::default();
    let mut state = SessionState::default();
    state.begin_login();

    let err = ApiError::Status {
        status: 401,
        detail: Some("Incorrect username or password".to_owned()),
    };
    let result = apply_login_outcome(&mut state, &storage, "admin", Err(err.clone()));

    assert_eq!(result, Err(err));
    assert!(state.token.is_none());
    assert_eq!(state.error.as_deref(), Some("Incorrect username or password"));
    assert!(!state.is_loading);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_invariant(&state);
}

#[test]
fn rejected_login_without_detail_uses_credentials_fallback() {
    let mut state = SessionState::default();
    state.begin_login();

    let outcome = Err(ApiError::Status { status: 401, detail: None });
    let _ = apply_login_outcome(&mut state, &MemoryStorage::default(), "admin", outcome);

    assert_eq!(state.error.as_deref(), Some("Invalid username or password"));
}

#[test]
fn transport_failure_uses_generic_fallback() {
    let mut state = SessionState::default();
    state.begin_login();

    let outcome = Err(ApiError::Network("connection refused".to_owned()));
    let _ = apply_login_outcome(&mut state, &MemoryStorage::default(), "admin", outcome);

    assert_eq!(state.error.as_deref(), Some("Login failed"));
    assert!(!state.is_loading);
}

// =============================================================
// Persist → rehydrate round trip
// =============================================================

#[test]
fn round_trip_reproduces_the_authenticated_state() {
    let storage = MemoryStorage::default();
    let mut first = SessionState::default();
    first.begin_login();
    apply_login_outcome(&mut first, &storage, "admin", Ok(token_response("tok-1")))
        .expect("login should succeed");

    // Fresh process start against the same durable storage.
    let mut second = SessionState::default();
    hydrate_session(&mut second, &storage);

    assert!(second.is_authenticated);
    assert_eq!(second.token, first.token);
    assert_eq!(second.user, first.user);
    assert_invariant(&second);
}
