//! Card component for one song in the bidding queue.

use leptos::prelude::*;

use crate::net::types::Song;
use crate::state::bid::BidState;

/// A clickable card representing a song. Clicking selects it as the
/// current song and opens the bid modal.
#[component]
pub fn SongCard(song: Song) -> impl IntoView {
    let bid = expect_context::<RwSignal<BidState>>();

    let title = song.title.clone();
    let artist = song.artist.clone();
    let current = song.current_bid;

    let on_click = move |_| {
        bid.update(|b| b.open_for(song.clone()));
    };

    view! {
        <button class="song-card" on:click=on_click>
            <span class="song-card__title">{title}</span>
            <span class="song-card__artist">{artist}</span>
            <span class="song-card__bid">{format!("${current:.2}")}</span>
        </button>
    }
}
