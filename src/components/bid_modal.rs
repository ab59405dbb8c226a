//! Bid entry dialog for the currently selected song.

use leptos::prelude::*;

use crate::state::bid::{BidState, MINIMUM_BID_INCREMENT, clamp_increment};
use crate::state::settings::SettingsState;

/// Modal dialog shown while `BidState.modal_open` is set.
///
/// The increment starts at the configured minimum and is clamped to the
/// remote bounds on every step. There is no bid write path; confirming
/// just closes the dialog.
#[component]
pub fn BidModal() -> impl IntoView {
    let bid = expect_context::<RwSignal<BidState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();

    let increment = RwSignal::new(MINIMUM_BID_INCREMENT);

    let step = move |delta: f64| {
        let bounds = settings.get_untracked();
        increment.update(|amount| *amount = clamp_increment(*amount + delta, &bounds));
    };

    let on_close = move |_| bid.update(BidState::close);

    view! {
        {move || {
            let state = bid.get();
            if !state.modal_open {
                return ().into_any();
            }
            let Some(song) = state.current_song else {
                return ().into_any();
            };
            let bounds = settings.get();
            let amount = clamp_increment(increment.get(), &bounds);
            let total = song.current_bid + amount;
            view! {
                <div class="bid-modal">
                    <div class="bid-modal__card">
                        <header class="bid-modal__header">
                            <h2>{song.title.clone()}</h2>
                            <span class="bid-modal__artist">{song.artist.clone()}</span>
                        </header>

                        <p class="bid-modal__current">
                            {format!("Current bid: ${:.2}", song.current_bid)}
                        </p>

                        <div class="bid-modal__increment">
                            <button class="btn" on:click=move |_| step(-1.0)>"-"</button>
                            <span>{format!("+${amount:.2}")}</span>
                            <button class="btn" on:click=move |_| step(1.0)>"+"</button>
                        </div>

                        <p class="bid-modal__total">{format!("Your bid: ${total:.2}")}</p>

                        <footer class="bid-modal__actions">
                            <button class="btn" on:click=on_close>"Cancel"</button>
                            <button class="btn btn--primary" on:click=on_close>
                                "Place bid"
                            </button>
                        </footer>
                    </div>
                </div>
            }
                .into_any()
        }}
    }
}
