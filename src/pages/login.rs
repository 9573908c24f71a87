//! Login page with the credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{self, SessionState};

/// Login page.
///
/// Shows a success banner after email confirmation (`?confirmed=true`),
/// forwards already-authenticated visitors to the dashboard, and renders
/// inline errors from the session store. The submit control is disabled
/// while a login is in flight, which is what keeps logins serialized.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let confirmed = move || query.read().get("confirmed").as_deref() == Some("true");

    // A logged-in user has no business on the login page.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if state.is_hydrated && state.is_authenticated {
                navigate(
                    "/dashboard",
                    NavigateOptions { replace: true, ..Default::default() },
                );
            }
        });
    }

    let submit = Callback::new(move |()| {
        if session.get_untracked().is_loading {
            return;
        }
        session.update(SessionState::clear_error);

        let navigate = navigate.clone();
        let username = username.get_untracked();
        let password = password.get_untracked();
        leptos::task::spawn_local(async move {
            // Failures land in `session.error`; only success navigates.
            if session::login(session, username, password).await.is_ok() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="login-page">
            <Show when=move || session.get().is_hydrated>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <h2>"Login"</h2>

                    <Show when=confirmed>
                        <div class="banner banner--success">
                            "Your account has been confirmed. You can now log in."
                        </div>
                    </Show>

                    {move || {
                        session
                            .get()
                            .error
                            .map(|message| view! { <div class="error-message">{message}</div> })
                    }}

                    <label class="form-group">
                        "Username"
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" disabled=move || session.get().is_loading>
                        {move || if session.get().is_loading { "Logging in..." } else { "Login" }}
                    </button>

                    <p class="login-form__footer">
                        "No account yet? " <A href="/signup">"Sign up"</A>
                    </p>
                </form>
            </Show>
        </div>
    }
}
