use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_max_meanings() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL, the term is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Total attempts per lookup, including the first one
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_max_meanings")]
    pub max_meanings: usize,
    /// Candidate terms for new random words, empty uses the built-in list
    #[serde(default)]
    pub word_list: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            max_meanings: default_max_meanings(),
            word_list: vec![],
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let api_url = env::var("LEXIS_API_URL").unwrap_or(defaults.api_url);

        let timeout_ms = env::var("LOOKUP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_ms);

        let retries = env::var("LOOKUP_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retries);

        let retry_delay_ms = env::var("LOOKUP_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry_delay_ms);

        Self {
            api_url,
            timeout_ms,
            retries,
            retry_delay_ms,
            ..defaults
        }
    }
}
