//! Public bidding page: song list plus the bid modal.

use leptos::prelude::*;

use crate::components::bid_modal::BidModal;
use crate::components::song_card::SongCard;
use crate::net::types::Song;
use crate::state::settings::{SettingsState, load_settings};

/// Home page — lists the songs up for bidding and hosts the bid modal.
/// Loads the remote bid settings on mount.
#[component]
pub fn HomePage() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();

    Effect::new(move || {
        leptos::task::spawn_local(load_settings(settings));
    });

    // No song feed is wired up yet; show the demo queue.
    let songs = demo_queue();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"NextUp"</h1>
                <p>"Bid on the next song"</p>
            </header>

            <div class="home-page__queue">
                {songs
                    .into_iter()
                    .map(|song| view! { <SongCard song=song/> })
                    .collect_view()}
            </div>

            <BidModal/>
        </div>
    }
}

fn demo_queue() -> Vec<Song> {
    vec![
        Song {
            id: "s-1".to_owned(),
            title: "Midnight City".to_owned(),
            artist: "M83".to_owned(),
            current_bid: 12.0,
        },
        Song {
            id: "s-2".to_owned(),
            title: "Dreams".to_owned(),
            artist: "Fleetwood Mac".to_owned(),
            current_bid: 8.0,
        },
        Song {
            id: "s-3".to_owned(),
            title: "Nightcall".to_owned(),
            artist: "Kavinsky".to_owned(),
            current_bid: 5.0,
        },
    ]
}
