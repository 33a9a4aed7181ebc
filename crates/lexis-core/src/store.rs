use std::sync::Arc;

use lexis_types::{StudyStats, WordRecord};

use crate::error::StoreError;

/// Persistence boundary for word records and statistics
#[async_trait::async_trait]
pub trait WordStore: Send + Sync {
    /// Every stored record, in insertion order
    async fn load_history(&self) -> Result<Vec<WordRecord>, StoreError>;

    /// Insert or replace by `id`
    async fn save_word(&self, record: &WordRecord) -> Result<(), StoreError>;

    /// `None` until stats were saved once
    async fn load_stats(&self) -> Result<Option<StudyStats>, StoreError>;

    async fn save_stats(&self, stats: &StudyStats) -> Result<(), StoreError>;

    /// Load stats, writing zeroed stats first if none exist
    async fn init_stats(&self) -> Result<StudyStats, StoreError> {
        match self.load_stats().await? {
            Some(stats) => Ok(stats),
            None => {
                let stats = StudyStats::default();
                self.save_stats(&stats).await?;
                tracing::info!("Initialized study stats");
                Ok(stats)
            }
        }
    }
}

#[async_trait::async_trait]
impl<T: WordStore + ?Sized> WordStore for Arc<T> {
    async fn load_history(&self) -> Result<Vec<WordRecord>, StoreError> {
        (**self).load_history().await
    }

    async fn save_word(&self, record: &WordRecord) -> Result<(), StoreError> {
        (**self).save_word(record).await
    }

    async fn load_stats(&self) -> Result<Option<StudyStats>, StoreError> {
        (**self).load_stats().await
    }

    async fn save_stats(&self, stats: &StudyStats) -> Result<(), StoreError> {
        (**self).save_stats(stats).await
    }
}
