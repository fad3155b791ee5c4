//! # Actions
//!
//! Everything that can happen to a flashcard session becomes an `Action`.
//! User presses Space? That's `Action::ToggleAnswer`.
//! Lookups finish? That's `Action::DeckLoaded(deck)`.
//!
//! `update()` applies an action to the session and returns an `Effect` for
//! the event loop to carry out. No I/O here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::{debug, info};

use crate::core::card::Deck;
use crate::core::state::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    TogglePlay,
    ToggleHint,
    ToggleAnswer,
    ToggleFavorite,
    Prev,
    Next,
    Shuffle,
    /// Periodic advance from the autoplay timer, tagged with its run.
    AutoplayTick(u64),
    /// All lookups settled.
    DeckLoaded(Deck),
    /// The terminal reported a fullscreen change.
    FullscreenChanged(bool),
    RequestFullscreenToggle,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    EnterFullscreen,
    ExitFullscreen,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::TogglePlay => {
            session.toggle_play();
            session.status_message = if session.is_playing {
                "Playing".to_string()
            } else {
                "Paused".to_string()
            };
        }
        Action::ToggleHint => session.toggle_hint(),
        Action::ToggleAnswer => session.toggle_answer(),
        Action::ToggleFavorite => session.toggle_favorite(),
        Action::Prev => session.go_prev(),
        Action::Next => session.go_next(),
        Action::Shuffle => session.shuffle(),
        Action::AutoplayTick(generation) => {
            // A tick can still be queued after playback was switched off
            if session.wants_autoplay() {
                debug!("Autoplay tick (run {})", generation);
                session.go_next();
            } else {
                debug!("Dropping autoplay tick (run {}): not playing", generation);
            }
        }
        Action::DeckLoaded(deck) => {
            info!("Deck ready: {} cards", deck.len());
            session.status_message = format!("{} cards", deck.len());
            session.set_deck(deck);
        }
        Action::FullscreenChanged(is_fullscreen) => {
            debug!("Fullscreen changed: {}", is_fullscreen);
            session.set_fullscreen(is_fullscreen);
        }
        Action::RequestFullscreenToggle => {
            return if session.is_fullscreen {
                Effect::ExitFullscreen
            } else {
                Effect::EnterFullscreen
            };
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
