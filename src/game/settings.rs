use log::warn;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const SETTINGS_KEY: &str = "settings";

const DEFAULT_DICTIONARY_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    /// When off, every completed row is accepted without a lookup.
    #[serde(default = "default_true")]
    pub dictionary_lookup_enabled: bool,

    #[serde(default = "default_endpoint")]
    pub dictionary_endpoint: String,

    #[serde(default = "default_timeout")]
    pub lookup_timeout_secs: u64,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_endpoint() -> String {
    DEFAULT_DICTIONARY_ENDPOINT.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            dictionary_lookup_enabled: true,
            dictionary_endpoint: default_endpoint(),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(contents) = store.get(SETTINGS_KEY) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => {
                    warn!(target: "storage", "Stored settings unreadable, using defaults: {}", err);
                }
            }
        }
        let default = Settings::default();
        let _ = default.save(store);
        default
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), crate::error::GameError> {
        let contents = serde_json::to_string(self).map_err(std::io::Error::from)?;
        store.set(SETTINGS_KEY, &contents)
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn load_without_stored_settings_writes_defaults() {
        let store = MemoryStore::new();
        let settings = Settings::load(&store);

        assert_eq!(settings, Settings::default());
        assert!(store.get(SETTINGS_KEY).is_some());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let settings = Settings {
            dictionary_lookup_enabled: false,
            lookup_timeout_secs: 2,
            ..Settings::default()
        };
        settings.save(&store).unwrap();

        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{broken").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, r#"{"version":0}"#).unwrap();
        let settings = Settings::load(&store);

        assert!(settings.dictionary_lookup_enabled);
        assert_eq!(settings.lookup_timeout_secs, DEFAULT_LOOKUP_TIMEOUT_SECS);
    }
}
