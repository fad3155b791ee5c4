//! # Deck Loader
//!
//! Resolves every configured term concurrently and joins the results into a
//! deck, in term order. A failed lookup never fails the deck: it becomes a
//! card with a fallback answer.

use futures::future::join_all;
use log::{debug, info};

use crate::core::card::{Card, Deck};
use crate::lookup::{DefinitionLookup, DictionaryEntry};

/// Answer used when the lookup succeeded but carried no definition.
pub const NO_DEFINITION: &str = "No definition found.";

/// Answer used when the lookup itself failed.
pub const DEFINITION_UNAVAILABLE: &str = "Definition unavailable.";

/// Default deck terms.
pub const DEFAULT_TERMS: [&str; 8] = [
    "Information",
    "Apple",
    "Computer",
    "Program",
    "Nature",
    "Science",
    "Music",
    "Travel",
];

/// Looks up all `terms` and returns the finished deck.
///
/// Waits for every lookup to settle; order follows `terms`, not completion.
pub async fn load_deck(lookup: &dyn DefinitionLookup, terms: &[String]) -> Deck {
    info!("Loading {} terms via {}", terms.len(), lookup.name());
    let cards = join_all(terms.iter().map(|term| resolve_card(lookup, term))).await;
    Deck::new(cards)
}

async fn resolve_card(lookup: &dyn DefinitionLookup, term: &str) -> Card {
    match lookup.lookup(term).await {
        Ok(entries) => Card::new(term, answer_from_entries(&entries)),
        Err(e) => {
            debug!("Lookup for '{}' failed: {}", term, e);
            Card::new(term, DEFINITION_UNAVAILABLE)
        }
    }
}

/// First entry's first meaning's first definition, or [`NO_DEFINITION`].
fn answer_from_entries(entries: &[DictionaryEntry]) -> String {
    entries
        .first()
        .and_then(DictionaryEntry::first_definition)
        .unwrap_or(NO_DEFINITION)
        .to_string()
}
