//! # Session State
//!
//! Everything the flashcard view shows, in one place. Domain only, no
//! terminal types.
//!
//! ```text
//! Session
//! ├── deck: Deck              // immutable once loaded
//! ├── current_index: usize    // always < deck.len() when non-empty
//! ├── is_playing: bool        // autoplay on/off
//! ├── is_favorite: bool       // one flag for the whole session
//! ├── show_hint: bool         // reset on every navigation
//! ├── show_answer: bool       // reset on every navigation
//! ├── is_fullscreen: bool     // mirror of the terminal, not authoritative
//! ├── is_loading: bool        // lookups still in flight
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use rand::Rng;

use crate::core::card::{CardView, Deck};

/// Characters of the answer shown as a hint.
pub const HINT_LENGTH: usize = 50;

/// Appended to the hint when the answer was cut.
pub const HINT_MARKER: char = '…';

#[derive(Debug)]
pub struct Session {
    pub(crate) deck: Deck,
    pub(crate) current_index: usize,
    pub(crate) is_playing: bool,
    pub(crate) is_favorite: bool,
    pub(crate) show_hint: bool,
    pub(crate) show_answer: bool,
    pub(crate) is_fullscreen: bool,
    pub(crate) is_loading: bool,
    pub(crate) status_message: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            deck: Deck::default(),
            current_index: 0,
            is_playing: false,
            is_favorite: false,
            show_hint: false,
            show_answer: false,
            is_fullscreen: false,
            is_loading: true,
            status_message: String::from("Loading definitions…"),
        }
    }

    // ------------------------------------------------------------------
    // Read model
    // ------------------------------------------------------------------

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.deck.len()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the autoplay timer should be running right now.
    pub fn wants_autoplay(&self) -> bool {
        self.is_playing && !self.deck.is_empty()
    }

    pub fn current_card(&self) -> CardView<'_> {
        match self.deck.get(self.current_index) {
            Some(card) => CardView::Card(card),
            None => CardView::Loading,
        }
    }

    /// Hint for the current card: the first [`HINT_LENGTH`] characters of
    /// the answer, with [`HINT_MARKER`] appended when the answer was longer.
    pub fn hint_text(&self) -> Option<String> {
        match self.current_card() {
            CardView::Card(card) => Some(truncate_hint(&card.answer)),
            CardView::Loading => None,
        }
    }

    /// `"3 / 8"`, or `"0 / 0"` while the deck is empty.
    pub fn position_label(&self) -> String {
        if self.deck.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.current_index + 1, self.deck.len())
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.is_loading = false;
        self.current_index = 0;
        self.reset_card_flags();
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    pub fn go_prev(&mut self) {
        let total = self.deck.len();
        if total == 0 {
            return;
        }
        self.current_index = (self.current_index + total - 1) % total;
        self.reset_card_flags();
    }

    pub fn go_next(&mut self) {
        let total = self.deck.len();
        if total == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % total;
        self.reset_card_flags();
    }

    /// Jumps to a uniformly random card. May land on the current one.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let total = self.deck.len();
        if total == 0 {
            return;
        }
        self.current_index = rng.random_range(0..total);
        self.reset_card_flags();
    }

    pub fn set_fullscreen(&mut self, is_fullscreen: bool) {
        self.is_fullscreen = is_fullscreen;
    }

    fn reset_card_flags(&mut self) {
        self.show_answer = false;
        self.show_hint = false;
    }
}

fn truncate_hint(answer: &str) -> String {
    let mut chars = answer.chars();
    let mut hint: String = chars.by_ref().take(HINT_LENGTH).collect();
    if chars.next().is_some() {
        hint.push(HINT_MARKER);
    }
    hint
}
