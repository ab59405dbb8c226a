#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{Update, WithUntracked};

use crate::net::types::User;

/// Authentication state tracking the current user and their admin flag.
///
/// `loading` is true while the session is still settling: from startup
/// until the first auth event, and from a sign-in until the admin lookup
/// for that session lands. Route guards must not redirect while it is
/// set. `epoch` counts applied auth events and sequences in-flight admin
/// lookups: a lookup result is published only when its epoch is still
/// current, so a slow lookup for a stale user cannot overwrite newer
/// state.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_admin: bool,
    pub loading: bool,
    pub(crate) epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_admin: false,
            loading: true,
            epoch: 0,
        }
    }
}

/// A change in the provider's session, delivered to the listener task.
#[derive(Clone, Debug)]
pub enum AuthEvent {
    SignedIn(User),
    SignedOut,
}

/// Handle for emitting auth events from pages (login form, sign-out).
/// Cloneable; all clones feed the same listener task.
#[derive(Clone)]
pub struct AuthHandle {
    #[cfg(feature = "hydrate")]
    tx: futures::channel::mpsc::UnboundedSender<AuthEvent>,
}

impl AuthHandle {
    /// Queue an event for the listener task. Returns `false` when no
    /// listener is running (server side, or the task has stopped).
    pub fn emit(&self, event: AuthEvent) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx.unbounded_send(event).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// Apply one auth event: publish the user (or none) and reset the admin
/// flag until a lookup for the new session completes.
///
/// A sign-in keeps `loading` set; it clears when the current-epoch
/// lookup result lands, so guards never observe an admin session in its
/// pre-lookup `is_admin = false` window. A sign-out settles immediately.
pub fn apply_event(state: &mut AuthState, event: &AuthEvent) {
    state.epoch += 1;
    state.is_admin = false;
    match event {
        AuthEvent::SignedIn(user) => {
            state.user = Some(user.clone());
            state.loading = true;
        }
        AuthEvent::SignedOut => {
            state.user = None;
            state.loading = false;
        }
    }
}

/// Publish an admin lookup result and mark the session settled, unless a
/// newer auth event has already been applied. A stale result leaves
/// `loading` alone as well: the newer event owns the settling.
pub fn apply_admin_result(state: &mut AuthState, lookup_epoch: u64, is_admin: bool) {
    if state.epoch == lookup_epoch {
        state.is_admin = is_admin;
        state.loading = false;
    }
}

/// Route-guard decision for admin pages: the path to redirect to, or
/// `None` when the visitor may stay (or while the session is still
/// settling, during which guards render a placeholder instead).
pub fn guard_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if state.user.is_none() {
        return Some("/admin/login");
    }
    if !state.is_admin {
        return Some("/");
    }
    None
}

/// `true` only when the document exists and its `admin` field is
/// strictly boolean `true`.
pub(crate) fn admin_flag(doc: Option<&crate::net::types::FsDocument>) -> bool {
    doc.is_some_and(|d| d.bool_field("admin") == Some(true))
}

/// Look up `users/{uid}` and resolve the admin flag. Missing documents
/// and fetch failures both resolve to `false`.
pub async fn check_admin_status(uid: &str) -> bool {
    admin_flag(crate::net::api::fetch_document("users", uid).await.as_ref())
}

/// Spawn the auth listener as a local async task and return the handle
/// used to emit session events into it.
///
/// On spawn the persisted session (if any) is verified with the provider
/// and replayed as the initial event, so `AuthState.loading` clears once
/// the session question is settled either way.
pub fn spawn_auth_listener(auth: RwSignal<AuthState>) -> AuthHandle {
    #[cfg(feature = "hydrate")]
    {
        let (tx, rx) = futures::channel::mpsc::unbounded::<AuthEvent>();
        leptos::task::spawn_local(auth_listener_loop(auth, rx));
        leptos::task::spawn_local(replay_persisted_session(tx.clone()));
        AuthHandle { tx }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        AuthHandle {}
    }
}

/// Sign in with email/password, persist the session token, and emit the
/// signed-in event.
///
/// # Errors
///
/// Returns the provider's error message on rejected credentials or a
/// transport error string.
pub async fn sign_in(handle: &AuthHandle, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let session = crate::net::api::sign_in_with_password(email, password).await?;
        write_session(&session.id_token);
        let user = User {
            uid: session.local_id,
            email: session.email,
            display_name: session.display_name,
        };
        handle.emit(AuthEvent::SignedIn(user));
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (handle, email, password);
        Err("not available on server".to_owned())
    }
}

/// Clear the persisted session and emit the signed-out event.
pub fn sign_out(handle: &AuthHandle) {
    #[cfg(feature = "hydrate")]
    clear_session();
    handle.emit(AuthEvent::SignedOut);
}

/// Consume auth events: publish each state change, then sequence an
/// admin lookup for signed-in users.
#[cfg(feature = "hydrate")]
async fn auth_listener_loop(
    auth: RwSignal<AuthState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<AuthEvent>,
) {
    use futures::StreamExt;

    while let Some(event) = rx.next().await {
        auth.update(|s| apply_event(s, &event));

        if let AuthEvent::SignedIn(user) = event {
            let lookup_epoch = auth.with_untracked(|s| s.epoch);
            leptos::task::spawn_local(async move {
                let is_admin = check_admin_status(&user.uid).await;
                auth.update(|s| apply_admin_result(s, lookup_epoch, is_admin));
            });
        }
    }
}

/// Verify the persisted session with the provider and replay the result
/// as the initial auth event.
#[cfg(feature = "hydrate")]
async fn replay_persisted_session(tx: futures::channel::mpsc::UnboundedSender<AuthEvent>) {
    let event = match read_session() {
        Some(token) => match crate::net::api::lookup_user(&token).await {
            Some(user) => AuthEvent::SignedIn(user),
            None => {
                clear_session();
                AuthEvent::SignedOut
            }
        },
        None => AuthEvent::SignedOut,
    };
    let _ = tx.unbounded_send(event);
}

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "nextup_id_token";

#[cfg(feature = "hydrate")]
fn read_session() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_KEY).ok()?
}

#[cfg(feature = "hydrate")]
fn write_session(id_token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(SESSION_KEY, id_token);
        }
    }
}

#[cfg(feature = "hydrate")]
fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
