use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::storage::StorageConfig;
use self::study::StudyConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod storage;
pub mod study;
pub mod ui;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub storage: StorageConfig,
    pub study: StudyConfig,
    pub ui: UiConfig,

    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Capacity of the UI <-> app channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            storage: StorageConfig::default(),
            study: StudyConfig::default(),
            ui: UiConfig::default(),
            log_level: default_log_level(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level());

        Config {
            dictionary: DictionaryConfig::new(),
            storage: StorageConfig::new(),
            study: StudyConfig::default(),
            ui: UiConfig::default(),

            log_level,
            channel_capacity: default_channel_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use lexis_types::StudyMode;

    use super::*;

    #[test]
    fn test_partial_profile_fills_defaults() {
        let json = r#"{
            "dictionary": { "timeout_ms": 1500 },
            "study": { "mode": "fill" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.dictionary.timeout_ms, 1500);
        assert_eq!(config.dictionary.retries, 3);
        assert_eq!(
            config.dictionary.api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
        assert_eq!(config.study.mode, StudyMode::Fill);
        assert_eq!(config.study.history_limit, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_store_path() {
        let config = Config::default();
        assert!(config.storage.store_path().ends_with("vocabulary.json"));
    }
}
