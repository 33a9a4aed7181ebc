use std::time::Duration;

use async_trait::async_trait;
use lexis_core::{LookupError, WordLookup};
use lexis_types::WordRecord;

/// Retries transient lookup failures a fixed number of times
pub struct RetryingLookup<L> {
    inner: L,
    attempts: u32,
    delay: Duration,
}

impl<L: WordLookup> RetryingLookup<L> {
    /// `attempts` counts the first try; 0 is treated as 1
    pub fn new(inner: L, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay,
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// `None` asks the inner lookup for a random word
    async fn run(&self, term: Option<&str>) -> Result<WordRecord, LookupError> {
        let what = term.unwrap_or("random word");
        let mut attempt = 1;
        loop {
            let result = match term {
                Some(term) => self.inner.lookup_word(term).await,
                None => self.inner.random_word().await,
            };

            match result {
                Ok(record) => return Ok(record),
                Err(e) if e.is_retryable() && attempt < self.attempts => {
                    tracing::warn!(
                        "Lookup of {} failed (attempt {}/{}): {}",
                        what,
                        attempt,
                        self.attempts,
                        e
                    );
                    attempt += 1;
                    tokio::time::sleep(self.delay).await;
                }
                Err(e) => {
                    tracing::error!("Lookup of {} failed: {}", what, e);
                    return Err(e);
                }
            }
        }
    }
}

#[async_trait]
impl<L: WordLookup> WordLookup for RetryingLookup<L> {
    async fn lookup_word(&self, term: &str) -> Result<WordRecord, LookupError> {
        self.run(Some(term)).await
    }

    async fn random_word(&self) -> Result<WordRecord, LookupError> {
        self.run(None).await
    }
}
