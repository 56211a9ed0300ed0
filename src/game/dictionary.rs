use std::time::Duration;

use log::{trace, warn};

use crate::error::GameError;

use super::settings::Settings;

/// The external "is this a real word" oracle. Implementations may fail;
/// the engine resolves every failure as "not a word" so play never blocks
/// on connectivity.
pub trait WordValidator {
    fn is_valid_word(&self, word: &str) -> Result<bool, GameError>;
}

/// Looks words up against a dictionary HTTP API. The endpoint answers a
/// word query with a JSON array of entries; an empty or missing array (404)
/// means the word is not in the dictionary.
pub struct DictionaryApiValidator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl DictionaryApiValidator {
    pub fn new(settings: &Settings) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.lookup_timeout_secs))
            .build()
            .expect("HTTP client construction only fails on broken TLS setup");
        Self {
            client,
            endpoint: settings.dictionary_endpoint.clone(),
        }
    }
}

impl WordValidator for DictionaryApiValidator {
    fn is_valid_word(&self, word: &str) -> Result<bool, GameError> {
        let url = format!("{}/{}", self.endpoint, word.to_ascii_lowercase());
        trace!(target: "dictionary", "Looking up {:?}", word);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| GameError::ValidationUnavailable {
                reason: err.to_string(),
            })?;

        // The API answers 404 for unknown words.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(GameError::ValidationUnavailable {
                reason: format!("lookup answered {}", response.status()),
            });
        }

        let entries: serde_json::Value =
            response
                .json()
                .map_err(|err| GameError::ValidationUnavailable {
                    reason: err.to_string(),
                })?;
        let valid = entries.as_array().is_some_and(|entries| !entries.is_empty());
        if !valid {
            warn!(target: "dictionary", "Lookup for {:?} answered success without entries", word);
        }
        Ok(valid)
    }
}

/// Accepts every word; backs offline play when lookups are disabled.
pub struct AcceptAllValidator;

impl WordValidator for AcceptAllValidator {
    fn is_valid_word(&self, _word: &str) -> Result<bool, GameError> {
        Ok(true)
    }
}
