//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::ProtectedRoute;
use crate::pages::{
    confirm::ConfirmSignupPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    signup::SignupPage,
};
use crate::state::session::{self, SessionState};
use crate::storage::BrowserStorage;

/// Root application component.
///
/// Provides the shared session context, rehydrates any persisted session
/// before the router makes its first access-control decision, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // localStorage is synchronous, so the session is fully rehydrated
    // before the first route evaluation.
    session.update(|state| session::hydrate_session(state, &BrowserStorage));

    view! {
        <Title text="Starter"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("confirm") view=ConfirmSignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <DashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
