//! Cards and the deck they live in.

/// One question/answer unit: a term and its resolved definition.
///
/// `id` and `question` are both the source term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(term: &str, answer: impl Into<String>) -> Self {
        Self {
            id: term.to_string(),
            question: term.to_string(),
            answer: answer.into(),
        }
    }
}

/// The fixed, ordered collection of cards for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// What the presentation layer gets when it asks for the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView<'a> {
    /// Deck not ready (or empty): show a placeholder.
    Loading,
    Card(&'a Card),
}
