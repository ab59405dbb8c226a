#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::FsDocument;

/// Bid increment bounds, sourced from the remote `settings/bid` document.
///
/// Defaults apply at load and are kept whenever the document is absent
/// or the fetch fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettingsState {
    pub min_increment: f64,
    pub max_bid_increment: f64,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            min_increment: 1.0,
            max_bid_increment: 5.0,
        }
    }
}

/// Overwrite the bounds from a settings document. Each field is taken
/// only when it decodes as a number, so a partial document cannot blank
/// the other bound.
pub(crate) fn apply_bid_settings(state: &mut SettingsState, doc: &FsDocument) {
    if let Some(min) = doc.number_field("min_inc") {
        state.min_increment = min;
    }
    if let Some(max) = doc.number_field("max_bid") {
        state.max_bid_increment = max;
    }
}

/// Fetch `settings/bid` and publish its bounds. On absence or failure
/// the previous values stay in place.
pub async fn load_settings(settings: RwSignal<SettingsState>) {
    match crate::net::api::fetch_document("settings", "bid").await {
        Some(doc) => settings.update(|s| apply_bid_settings(s, &doc)),
        None => leptos::logging::warn!("bid settings unavailable, keeping current values"),
    }
}
