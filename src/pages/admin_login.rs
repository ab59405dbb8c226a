//! Admin login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthHandle, sign_in};

/// Login page — signs in against the identity provider and navigates to
/// `/admin` on success. Failures are shown inline and never navigate.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth_handle = expect_context::<AuthHandle>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let handle = auth_handle.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = sign_in(&handle, &email.get_untracked(), &password.get_untracked()).await;
            pending.set(false);
            match result {
                Ok(()) => navigate("/admin", NavigateOptions::default()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"NextUp"</h1>
            <p>"Admin sign-in"</p>

            <form class="login-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" prop:disabled=pending>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="login-form__error">{message}</p> })
            }}
        </div>
    }
}
