use std::time::Duration;

/// Failures of the dictionary lookup collaborator
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),
}

impl LookupError {
    /// Transient failures worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, LookupError::Network(_) | LookupError::Timeout(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("Word lookup failed: {0}")]
    LookupFailed(#[from] LookupError),

    #[error("Record {id} ('{word}') has no meanings")]
    DataIntegrity { id: String, word: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
