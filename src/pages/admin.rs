//! Admin dashboard behind the route guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthHandle, AuthState, guard_target, sign_out};
use crate::state::settings::SettingsState;

/// Admin page — guarded by the auth state.
///
/// The guard acts only once `loading` has cleared, then redirects
/// unauthenticated visitors to `/admin/login` and authenticated
/// non-admins to `/`. While auth is still settling it renders a
/// placeholder instead of redirecting.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let auth_handle = expect_context::<AuthHandle>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = guard_target(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let sign_out_navigate = use_navigate();
    let on_sign_out = move |_| {
        sign_out(&auth_handle);
        sign_out_navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="admin-page">
            {move || {
                let state = auth.get();
                if state.loading {
                    view! { <p class="admin-page__status">"Checking access..."</p> }.into_any()
                } else if state.user.is_none() || !state.is_admin {
                    // The guard effect is navigating away.
                    view! { <p class="admin-page__status">"Redirecting..."</p> }.into_any()
                } else {
                    let email = state
                        .user
                        .as_ref()
                        .and_then(|u| u.email.clone())
                        .unwrap_or_else(|| "admin".to_owned());
                    let bounds = settings.get();
                    view! {
                        <div class="admin-page__body">
                        <header class="admin-page__header">
                            <h1>"Admin"</h1>
                            <span class="admin-page__who">{email}</span>
                            <button class="btn" on:click=on_sign_out.clone()>
                                "Sign out"
                            </button>
                        </header>
                        <section class="admin-page__settings">
                            <h2>"Bid settings"</h2>
                            <p>"Minimum increment: " {bounds.min_increment}</p>
                            <p>"Maximum increment: " {bounds.max_bid_increment}</p>
                        </section>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
