//! Route guard wrapper for protected views.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::guard::{self, RouteDecision};
use crate::state::session::SessionState;

/// Gate for token-protected views.
///
/// Renders nothing until the session has rehydrated, redirects
/// unauthenticated visitors to the login page, and otherwise renders the
/// wrapped view.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match guard::evaluate(&session.get()) {
        RouteDecision::Pending => ().into_any(),
        RouteDecision::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
        RouteDecision::Admit => children().into_any(),
    }
}
