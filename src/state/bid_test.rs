use super::*;

fn song() -> Song {
    Song {
        id: "s-1".to_owned(),
        title: "Song One".to_owned(),
        artist: "Artist".to_owned(),
        current_bid: 10.0,
    }
}

// =============================================================
// BidState defaults and transitions
// =============================================================

#[test]
fn bid_state_default_no_song_modal_closed() {
    let state = BidState::default();
    assert!(state.current_song.is_none());
    assert!(!state.modal_open);
}

#[test]
fn open_for_selects_song_and_opens_modal() {
    let mut state = BidState::default();
    state.open_for(song());
    assert_eq!(state.current_song.as_ref().map(|s| s.id.as_str()), Some("s-1"));
    assert!(state.modal_open);
}

#[test]
fn close_keeps_selection() {
    let mut state = BidState::default();
    state.open_for(song());
    state.close();
    assert!(!state.modal_open);
    assert!(state.current_song.is_some());
}

// =============================================================
// Increment clamping
// =============================================================

#[test]
fn clamp_respects_static_floor() {
    let settings = SettingsState::default();
    assert_eq!(clamp_increment(0.0, &settings), MINIMUM_BID_INCREMENT);
}

#[test]
fn clamp_respects_remote_bounds() {
    let settings = SettingsState {
        min_increment: 2.0,
        max_bid_increment: 4.0,
    };
    assert_eq!(clamp_increment(1.0, &settings), 2.0);
    assert_eq!(clamp_increment(3.0, &settings), 3.0);
    assert_eq!(clamp_increment(9.0, &settings), 4.0);
}
