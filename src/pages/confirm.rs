//! Email-confirmation landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::confirm::{ConfirmState, ConfirmStatus};

/// Confirmation page — reads `?token=...` from the emailed link, fires the
/// single confirmation call, and either forwards to the login page with a
/// success flag or shows the failure with a path back to signup.
#[component]
pub fn ConfirmSignupPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let confirm = RwSignal::new(ConfirmState::default());

    Effect::new(move || {
        let Some(token) = query.read_untracked().get("token") else {
            confirm.update(ConfirmState::invalid_link);
            return;
        };

        // At most one call per page load, however often this re-runs.
        let mut claimed = false;
        confirm.update(|state| claimed = state.try_dispatch());
        if !claimed {
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::confirm(&token).await {
                Ok(()) => {
                    confirm.update(ConfirmState::succeed);
                    navigate("/login?confirmed=true", NavigateOptions::default());
                }
                Err(err) => confirm.update(|state| {
                    state.fail(err.detail().map(ToOwned::to_owned));
                }),
            }
        });
    });

    move || match confirm.get().status {
        ConfirmStatus::Loading => view! {
            <div class="confirm-page">
                <h2>"Confirming..."</h2>
                <p>"Please wait while we confirm your account."</p>
            </div>
        }
        .into_any(),
        ConfirmStatus::Success => view! {
            <div class="confirm-page">
                <h2>"Account Confirmed!"</h2>
                <p>"Your account has been successfully confirmed. You can now log in."</p>
                <A href="/login?confirmed=true">"Go to login"</A>
            </div>
        }
        .into_any(),
        ConfirmStatus::Error => view! {
            <div class="confirm-page confirm-page--error">
                <h2>"Confirmation Failed"</h2>
                <p>{confirm.get().message}</p>
                <A href="/signup">"Sign up again"</A>
            </div>
        }
        .into_any(),
    }
}
