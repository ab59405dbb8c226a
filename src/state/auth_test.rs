use super::*;
use crate::net::types::FsDocument;

fn user(uid: &str) -> User {
    User {
        uid: uid.to_owned(),
        email: Some(format!("{uid}@example.com")),
        display_name: None,
    }
}

fn users_doc(json: serde_json::Value) -> FsDocument {
    serde_json::from_value(json).expect("document decodes")
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_admin);
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// apply_event
// =============================================================

#[test]
fn signed_in_publishes_user_and_keeps_loading() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));
    assert_eq!(state.user.as_ref().map(|u| u.uid.as_str()), Some("u1"));
    // The session is not settled until the admin lookup lands.
    assert!(state.loading);
}

#[test]
fn signed_in_resets_admin_until_lookup_completes() {
    let mut state = AuthState {
        is_admin: true,
        ..AuthState::default()
    };
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));
    assert!(!state.is_admin);
}

#[test]
fn signed_out_clears_user_and_admin() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));
    state.is_admin = true;
    apply_event(&mut state, &AuthEvent::SignedOut);
    assert!(state.user.is_none());
    assert!(!state.is_admin);
    assert!(!state.loading);
}

// =============================================================
// apply_admin_result sequencing
// =============================================================

#[test]
fn current_epoch_lookup_is_applied_and_settles() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));
    let lookup_epoch = state.epoch;
    apply_admin_result(&mut state, lookup_epoch, true);
    assert!(state.is_admin);
    assert!(!state.loading);
}

#[test]
fn stale_epoch_lookup_is_discarded() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));
    let stale_epoch = state.epoch;

    // u1's lookup is still in flight when u1 signs out and u2 signs in.
    apply_event(&mut state, &AuthEvent::SignedOut);
    apply_event(&mut state, &AuthEvent::SignedIn(user("u2")));

    apply_admin_result(&mut state, stale_epoch, true);
    assert!(!state.is_admin);
    // u2's session is still settling; the stale result must not end it.
    assert!(state.loading);

    let current_epoch = state.epoch;
    apply_admin_result(&mut state, current_epoch, true);
    assert!(state.is_admin);
    assert!(!state.loading);
}

// =============================================================
// guard_target
// =============================================================

#[test]
fn guard_waits_while_session_settles() {
    let state = AuthState::default();
    assert_eq!(guard_target(&state), None);
}

#[test]
fn guard_redirects_unauthenticated_to_login() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedOut);
    assert_eq!(guard_target(&state), Some("/admin/login"));
}

#[test]
fn guard_redirects_non_admin_home() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));
    let lookup_epoch = state.epoch;
    apply_admin_result(&mut state, lookup_epoch, false);
    assert_eq!(guard_target(&state), Some("/"));
}

#[test]
fn guard_never_redirects_admin_during_lookup() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("u1")));

    // Between the sign-in and the lookup result the admin flag is still
    // false; the guard must keep waiting instead of sending the admin
    // home.
    assert!(state.user.is_some());
    assert!(!state.is_admin);
    assert_eq!(guard_target(&state), None);

    let lookup_epoch = state.epoch;
    apply_admin_result(&mut state, lookup_epoch, true);
    assert_eq!(guard_target(&state), None);
}

// =============================================================
// admin_flag
// =============================================================

#[test]
fn admin_flag_true_requires_strict_true() {
    let doc = users_doc(serde_json::json!({
        "fields": {"admin": {"booleanValue": true}}
    }));
    assert!(admin_flag(Some(&doc)));
}

#[test]
fn admin_flag_false_when_field_false() {
    let doc = users_doc(serde_json::json!({
        "fields": {"admin": {"booleanValue": false}}
    }));
    assert!(!admin_flag(Some(&doc)));
}

#[test]
fn admin_flag_false_when_field_missing() {
    let doc = users_doc(serde_json::json!({"fields": {}}));
    assert!(!admin_flag(Some(&doc)));
}

#[test]
fn admin_flag_false_when_field_not_boolean() {
    let doc = users_doc(serde_json::json!({
        "fields": {"admin": {"stringValue": "true"}}
    }));
    assert!(!admin_flag(Some(&doc)));
}

#[test]
fn admin_flag_false_when_document_absent() {
    assert!(!admin_flag(None));
}
