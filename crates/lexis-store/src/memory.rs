use lexis_core::{StoreError, WordStore};
use lexis_types::{StudyStats, WordRecord};
use tokio::sync::RwLock;

/// Process-local store, nothing survives a restart
#[derive(Default)]
pub struct MemoryStore {
    words: RwLock<Vec<WordRecord>>,
    stats: RwLock<Option<StudyStats>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(words: Vec<WordRecord>) -> Self {
        Self {
            words: RwLock::new(words),
            stats: RwLock::new(None),
        }
    }
}

#[async_trait::async_trait]
impl WordStore for MemoryStore {
    async fn load_history(&self) -> Result<Vec<WordRecord>, StoreError> {
        Ok(self.words.read().await.clone())
    }

    async fn save_word(&self, record: &WordRecord) -> Result<(), StoreError> {
        let mut words = self.words.write().await;
        match words.iter_mut().find(|w| w.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => words.push(record.clone()),
        }
        Ok(())
    }

    async fn load_stats(&self) -> Result<Option<StudyStats>, StoreError> {
        Ok(self.stats.read().await.clone())
    }

    async fn save_stats(&self, stats: &StudyStats) -> Result<(), StoreError> {
        *self.stats.write().await = Some(stats.clone());
        Ok(())
    }
}
