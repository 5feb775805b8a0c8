//! Login page: email + password sign-in that completes the session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::{HOME_PATH, should_skip_login};

const MISSING_CREDENTIALS: &str = "Enter both email and password.";

/// Require both fields. The email is trimmed; the password is kept verbatim.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(reason: &str) -> String {
    format!("Sign in failed: {reason}")
}

/// Outcome of `try_update` on the session signal. `None` means the signal was
/// disposed and nothing was stored.
#[cfg(any(test, feature = "hydrate"))]
fn session_write_outcome(update: Option<Result<(), crate::state::session::SessionError>>) -> Result<(), String> {
    match update {
        Some(result) => result.map_err(|e| e.to_string()),
        None => Err("session unavailable".to_owned()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Signed in, either just now or through a rehydrated session: go to the app.
    Effect::new(move || {
        if session.with(should_skip_login) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::login(&email_value, &password_value).await {
                Ok(payload) => session_write_outcome(session.try_update(|s| s.set_session(payload))),
                Err(e) => Err(e.to_string()),
            };
            // On success the redirect effect above takes over.
            match outcome {
                Ok(()) => log::info!("signed in"),
                Err(reason) => {
                    log::warn!("sign in failed: {reason}");
                    info.set(sign_in_failed_message(&reason));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Ledgerly"</h1>
                <p class="login-card__subtitle">"Sign in to your organization"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@company.in"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
