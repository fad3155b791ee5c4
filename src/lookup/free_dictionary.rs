//! Free Dictionary API client (`https://dictionaryapi.dev`).
//!
//! `GET {base_url}/entries/en/{term}` answers with a JSON array of entries on
//! success and a JSON object with a `title` on a miss (HTTP 404).

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;

use super::{DefinitionLookup, DictionaryEntry, LookupError};

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Entries are always requested in English.
const LANGUAGE: &str = "en";

pub struct FreeDictionaryLookup {
    base_url: String,
    client: reqwest::Client,
}

impl FreeDictionaryLookup {
    /// A zero `timeout` falls back to [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        let timeout = if timeout.is_zero() {
            warn!("Lookup timeout of zero ignored, using {:?}", DEFAULT_TIMEOUT);
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }

    /// Builds the entry URL, percent-encoding the term as one path segment.
    fn entry_url(&self, term: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Config(format!("bad base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Config(format!("base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["entries", LANGUAGE, term]);
        Ok(url)
    }
}

#[async_trait]
impl DefinitionLookup for FreeDictionaryLookup {
    fn name(&self) -> &str {
        "free-dictionary"
    }

    async fn lookup(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.entry_url(term)?;
        debug!("Dictionary request: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Dictionary response for '{}': {}", term, status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        serde_json::from_str::<Vec<DictionaryEntry>>(&body)
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}
