//! Reusable UI components.

pub mod bid_modal;
pub mod song_card;
