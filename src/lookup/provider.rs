use std::fmt;

use async_trait::async_trait;

use super::types::DictionaryEntry;

/// Errors that can occur while looking up a term.
///
/// The deck loader collapses every variant into the same fallback answer,
/// but the variants are kept apart so the log says what actually went wrong.
#[derive(Debug)]
pub enum LookupError {
    /// Lookup misconfigured (unusable base URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not the JSON shape we expect.
    Parse(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Config(msg) => write!(f, "config error: {msg}"),
            LookupError::Network(msg) => write!(f, "network error: {msg}"),
            LookupError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            LookupError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

#[async_trait]
pub trait DefinitionLookup: Send + Sync {
    /// Returns the name of the lookup backend.
    fn name(&self) -> &str;

    /// Fetches every dictionary entry the backend knows for `term`.
    async fn lookup(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError>;
}
