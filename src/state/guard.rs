//! Route guard for token-gated views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Outcome of evaluating the guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Rehydration has not finished; render nothing and do not redirect.
    Pending,
    /// Hydrated but unauthenticated; send the user to the login view.
    RedirectToLogin,
    /// Hydrated and authenticated; render the protected view.
    Admit,
}

/// Decide whether a protected view may render.
///
/// Hydration is checked before authentication. Deciding on a not-yet
/// rehydrated session would bounce an actually-authenticated user to the
/// login page on every refresh.
pub fn evaluate(session: &SessionState) -> RouteDecision {
    if !session.is_hydrated {
        RouteDecision::Pending
    } else if !session.is_authenticated {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Admit
    }
}
