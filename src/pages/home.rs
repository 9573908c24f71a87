//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Home page — a short welcome, login/signup links, and the backend
/// liveness indicator.
#[component]
pub fn HomePage() -> impl IntoView {
    let health = LocalResource::new(|| async {
        crate::net::api::fetch_health()
            .await
            .map(|h| h.status)
            .unwrap_or_else(|_| "unreachable".to_owned())
    });

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <p>"Sign in to manage your items."</p>
            <nav class="home-page__links">
                <A href="/login">"Log in"</A>
                <A href="/signup">"Sign up"</A>
            </nav>
            <Suspense fallback=|| ()>
                <p class="home-page__health">
                    {move || health.get().map(|status| format!("Backend: {status}"))}
                </p>
            </Suspense>
        </div>
    }
}
