//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::card::{Card, Deck};
use crate::core::state::Session;
use crate::lookup::{Definition, DefinitionLookup, DictionaryEntry, LookupError, Meaning};

type Scripted = Result<Vec<DictionaryEntry>, String>;

/// A lookup with canned responses and optional per-term latency.
///
/// Unscripted terms resolve to an empty entry list, or to a network error
/// when built with [`StubLookup::failing`].
#[derive(Default)]
pub struct StubLookup {
    responses: HashMap<String, Scripted>,
    delays: HashMap<String, Duration>,
    fail_unscripted: bool,
    completed: Mutex<Vec<String>>,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_unscripted: true,
            ..Self::default()
        }
    }

    pub fn respond(mut self, term: &str, response: Result<Vec<DictionaryEntry>, LookupError>) -> Self {
        self.responses
            .insert(term.to_string(), response.map_err(|e| e.to_string()));
        self
    }

    pub fn delay(mut self, term: &str, delay: Duration) -> Self {
        self.delays.insert(term.to_string(), delay);
        self
    }

    /// Terms in the order their lookups finished.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefinitionLookup for StubLookup {
    fn name(&self) -> &str {
        "stub"
    }

    async fn lookup(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        if let Some(delay) = self.delays.get(term) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(term.to_string());

        match self.responses.get(term) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(msg)) => Err(LookupError::Network(msg.clone())),
            None if self.fail_unscripted => Err(LookupError::Network("unreachable".to_string())),
            None => Ok(Vec::new()),
        }
    }
}

/// A single entry whose first meaning has `definition`.
pub fn entry_with(definition: &str) -> DictionaryEntry {
    DictionaryEntry {
        word: String::new(),
        meanings: vec![Meaning {
            part_of_speech: Some("noun".to_string()),
            definitions: vec![Definition {
                definition: Some(definition.to_string()),
                example: None,
            }],
        }],
    }
}

/// A deck with one card per term; answers are `"<term> answer"`.
pub fn deck_of(terms: &[&str]) -> Deck {
    Deck::new(
        terms
            .iter()
            .map(|t| Card::new(t, format!("{t} answer")))
            .collect(),
    )
}

/// A loaded session with `n` cards.
pub fn test_session(n: usize) -> Session {
    let terms: Vec<String> = (0..n).map(|i| format!("term{i}")).collect();
    let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
    let mut session = Session::new();
    session.set_deck(deck_of(&refs));
    session
}
