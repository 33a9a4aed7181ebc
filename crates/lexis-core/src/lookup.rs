use std::sync::Arc;

use lexis_types::WordRecord;

use crate::error::LookupError;

/// Dictionary lookup collaborator
#[async_trait::async_trait]
pub trait WordLookup: Send + Sync {
    /// Fetch a fully populated record for `term`
    async fn lookup_word(&self, term: &str) -> Result<WordRecord, LookupError>;

    /// Fetch a record for a term picked from the candidate word list
    async fn random_word(&self) -> Result<WordRecord, LookupError>;
}

#[async_trait::async_trait]
impl<T: WordLookup + ?Sized> WordLookup for Arc<T> {
    async fn lookup_word(&self, term: &str) -> Result<WordRecord, LookupError> {
        (**self).lookup_word(term).await
    }

    async fn random_word(&self) -> Result<WordRecord, LookupError> {
        (**self).random_word().await
    }
}
