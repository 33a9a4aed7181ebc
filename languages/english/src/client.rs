use std::time::Duration;

use async_trait::async_trait;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::{LookupError, WordLookup};
use lexis_types::WordRecord;
use rand::seq::IndexedRandom;
use reqwest::{StatusCode, Url};

use crate::parse::parse_response;
use crate::words::default_word_list;

/// Client for the Free Dictionary API (dictionaryapi.dev)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
    word_list: Vec<String>,
    max_meanings: usize,
}

impl FreeDictionaryClient {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url,
            timeout,
            word_list: default_word_list(),
            max_meanings: 3,
        })
    }

    /// Replace the candidate list used by `random_word`; empty keeps the built-in list
    pub fn with_word_list(mut self, words: Vec<String>) -> Self {
        let words: Vec<String> = words
            .iter()
            .map(|w| DefaultPreprocessor.process(w))
            .filter(|w| !w.is_empty())
            .collect();
        if !words.is_empty() {
            self.word_list = words;
        }
        self
    }

    pub fn with_max_meanings(mut self, max_meanings: usize) -> Self {
        self.max_meanings = max_meanings.max(1);
        self
    }

    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    fn entry_url(&self, term: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| LookupError::Network(format!("Invalid API url {}: {e}", self.api_url)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Network(format!("API url cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .push(term);
        Ok(url)
    }

    fn map_request_error(&self, e: reqwest::Error) -> LookupError {
        if e.is_timeout() {
            LookupError::Timeout(self.timeout)
        } else {
            LookupError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl WordLookup for FreeDictionaryClient {
    async fn lookup_word(&self, term: &str) -> Result<WordRecord, LookupError> {
        let term = DefaultPreprocessor.process(term);
        if term.is_empty() {
            return Err(LookupError::NotFound("empty term".to_string()));
        }

        let url = self.entry_url(&term)?;
        tracing::debug!("Looking up '{}' at {}", term, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(term));
        }

        if !response.status().is_success() {
            return Err(LookupError::Network(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let record = parse_response(&body, self.max_meanings)?;
        tracing::info!(
            "Fetched '{}' with {} meanings",
            record.word,
            record.meanings.len()
        );
        Ok(record)
    }

    async fn random_word(&self) -> Result<WordRecord, LookupError> {
        let term = {
            let mut rng = rand::rng();
            self.word_list.choose(&mut rng).cloned()
        };

        let term = term.ok_or_else(|| LookupError::NotFound("word list is empty".to_string()))?;
        tracing::debug!("Random candidate: {}", term);

        self.lookup_word(&term).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FreeDictionaryClient {
        FreeDictionaryClient::new(
            "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_entry_url() {
        let url = client().entry_url("ocean").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ocean"
        );
    }

    #[test]
    fn test_entry_url_trailing_slash_and_escaping() {
        let client = FreeDictionaryClient::new(
            "http://localhost:9000/entries/en/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        let url = client.entry_url("ice cream").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/entries/en/ice%20cream");
    }

    #[test]
    fn test_custom_word_list_normalized() {
        let client = client().with_word_list(vec![" Tide ".into(), "".into(), "GLOW".into()]);
        assert_eq!(client.word_list(), ["tide", "glow"]);

        let client = client.with_word_list(vec![]);
        assert_eq!(client.word_list().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_term_not_found() {
        let err = client().lookup_word("   ").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // port 9 (discard) on localhost refuses connections
        let client = FreeDictionaryClient::new(
            "http://127.0.0.1:9/entries/en".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        let err = client.lookup_word("ocean").await.unwrap_err();
        assert!(err.is_retryable());
    }
}
