use super::*;
use crate::net::types::User;

fn session(hydrated: bool, token: Option<&str>) -> SessionState {
    let mut state = SessionState::default();
    state.set_token(token.map(ToOwned::to_owned));
    state.set_user(token.map(|_| User { username: "admin".to_owned() }));
    if hydrated {
        state.set_hydrated();
    }
    state
}

#[test]
fn unhydrated_session_is_pending() {
    assert_eq!(evaluate(&session(false, None)), RouteDecision::Pending);
}

#[test]
fn hydration_is_checked_before_authentication() {
    // An authenticated-looking session must still wait for hydration,
    // otherwise a refresh flashes the login page at a logged-in user.
    assert_eq!(evaluate(&session(false, Some("tok-1"))), RouteDecision::Pending);
}

#[test]
fn hydrated_unauthenticated_session_redirects() {
    assert_eq!(evaluate(&session(true, None)), RouteDecision::RedirectToLogin);
}

#[test]
fn hydrated_authenticated_session_is_admitted() {
    assert_eq!(evaluate(&session(true, Some("tok-1"))), RouteDecision::Admit);
}

#[test]
fn after_hydration_the_guard_never_returns_pending() {
    for token in [None, Some("tok-1")] {
        assert_ne!(evaluate(&session(true, token)), RouteDecision::Pending);
    }
}
