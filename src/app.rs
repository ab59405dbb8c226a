//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, admin_login::AdminLoginPage, home::HomePage};
use crate::state::auth::{AuthState, spawn_auth_listener};
use crate::state::bid::BidState;
use crate::state::settings::SettingsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, starts the auth listener, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let bid = RwSignal::new(BidState::default());
    let settings = RwSignal::new(SettingsState::default());

    provide_context(auth);
    provide_context(bid);
    provide_context(settings);

    // The listener replays the persisted session, then consumes sign-in
    // and sign-out events from the pages.
    let auth_handle = spawn_auth_listener(auth);
    provide_context(auth_handle);

    view! {
        <Stylesheet id="leptos" href="/pkg/nextup-ui.css"/>
        <Title text="NextUp"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
            </Routes>
        </Router>
    }
}
