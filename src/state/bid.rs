#[cfg(test)]
#[path = "bid_test.rs"]
mod bid_test;

use crate::net::types::Song;
use crate::state::settings::SettingsState;

/// Static floor for bid increments, independent of the remotely
/// configured bounds.
pub const MINIMUM_BID_INCREMENT: f64 = 1.0;

/// State for the bid dialog: which song is selected and whether the
/// modal is open. In-memory only, nothing here is persisted.
#[derive(Clone, Debug, Default)]
pub struct BidState {
    pub current_song: Option<Song>,
    pub modal_open: bool,
}

impl BidState {
    /// Select a song and open the bid modal.
    pub fn open_for(&mut self, song: Song) {
        self.current_song = Some(song);
        self.modal_open = true;
    }

    /// Close the modal, keeping the selection for re-open.
    pub fn close(&mut self) {
        self.modal_open = false;
    }
}

/// Clamp a requested increment to the configured bounds and the static
/// floor.
pub fn clamp_increment(amount: f64, settings: &SettingsState) -> f64 {
    amount
        .max(MINIMUM_BID_INCREMENT)
        .max(settings.min_increment)
        .min(settings.max_bid_increment)
}
