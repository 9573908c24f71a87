//! Signup page with client-side validation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::SignupRequest;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Validate the password fields. Runs before any network call; a failure
/// here never reaches the backend.
fn validate_passwords(password: &str, confirm: &str) -> Option<&'static str> {
    if password != confirm {
        return Some("Passwords do not match");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 6 characters");
    }
    None
}

/// Signup page — collects username, email, and password, validates
/// client-side, and shows the backend acknowledgement asking the user to
/// confirm via email.
#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        error.set(None);

        if let Some(message) =
            validate_passwords(&password.get_untracked(), &confirm.get_untracked())
        {
            error.set(Some(message.to_owned()));
            return;
        }

        submitting.set(true);
        let request = SignupRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(response) => notice.set(Some(response.message)),
                Err(err) => error.set(Some(
                    err.detail()
                        .map_or_else(|| "Signup failed".to_owned(), ToOwned::to_owned),
                )),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="signup-page">
            <Show
                when=move || notice.get().is_none()
                fallback=move || {
                    view! {
                        <div class="signup-page__notice">
                            <h2>"Check your email"</h2>
                            <p>{move || notice.get()}</p>
                            <A href="/login">"Go to login"</A>
                        </div>
                    }
                }
            >
                <form class="signup-form" on:submit=on_submit>
                    <h2>"Sign up"</h2>

                    {move || {
                        error
                            .get()
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
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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
                    <label class="form-group">
                        "Confirm Password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing up..." } else { "Sign up" }}
                    </button>

                    <p class="signup-form__footer">
                        "Already registered? " <A href="/login">"Log in"</A>
                    </p>
                </form>
            </Show>
        </div>
    }
}
