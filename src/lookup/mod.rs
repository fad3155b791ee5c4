//! # Definition Lookup
//!
//! Resolves a term to its dictionary entries. The deck loader only sees the
//! [`DefinitionLookup`] trait; the HTTP client lives in [`free_dictionary`].

pub mod free_dictionary;
pub mod provider;
pub mod types;

pub use free_dictionary::FreeDictionaryLookup;
pub use provider::{DefinitionLookup, LookupError};
pub use types::{Definition, DictionaryEntry, Meaning};
