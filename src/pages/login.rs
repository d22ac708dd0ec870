//! Login page; restores the pre-login destination after sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::hint;
use crate::state::auth::AuthState;

/// Destination after login: the stored return path, falling back to home.
fn post_login_destination(stored: Option<String>) -> String {
    stored.unwrap_or_else(|| "/".to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page — email/password form; on success seeds the session and
/// navigates to the stored return path.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Already signed in: skip the form and restore the original route.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.session.is_logged {
            let target = post_login_destination(hint::take());
            navigate_signed_in(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok((email, password)) => {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::login(&email, &password).await {
                            Ok(user) => {
                                auth.update(|state| {
                                    state.session = crate::state::auth::Session::logged_in(user);
                                    state.loading = false;
                                });
                                let target = post_login_destination(hint::take());
                                navigate(&target, NavigateOptions::default());
                            }
                            Err(message) => error.set(Some(message)),
                        }
                    });
                }
                Err(message) => error.set(Some(message.to_owned())),
            }
        }
    };

    view! {
        <div class="login-page">
            <h1>"Milk Tea House"</h1>
            <p>"Sign in to your account"</p>
            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
