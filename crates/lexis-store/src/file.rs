use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lexis_core::{StoreError, WordStore};
use lexis_types::{StudyStats, WordRecord};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

/// On-disk layout, one key per collection
#[derive(Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    vocabulary_words: Vec<WordRecord>,
    #[serde(default)]
    vocabulary_stats: Option<StudyStats>,
}

/// Words and stats in a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(data) if data.trim().is_empty() => Ok(Document::default()),
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No store at {}, starting empty", self.path.display());
                Ok(Document::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a sibling temp file, then rename over the target
    async fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl WordStore for JsonFileStore {
    async fn load_history(&self) -> Result<Vec<WordRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.vocabulary_words)
    }

    async fn save_word(&self, record: &WordRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;

        match document
            .vocabulary_words
            .iter_mut()
            .find(|w| w.id == record.id)
        {
            Some(existing) => *existing = record.clone(),
            None => {
                tracing::info!("Storing new word '{}'", record.word);
                document.vocabulary_words.push(record.clone());
            }
        }

        self.write_document(&document).await
    }

    async fn load_stats(&self) -> Result<Option<StudyStats>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.vocabulary_stats)
    }

    async fn save_stats(&self, stats: &StudyStats) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.vocabulary_stats = Some(stats.clone());
        self.write_document(&document).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use lexis_types::{Difficulty, Meaning};

    use super::*;

    fn word(text: &str) -> WordRecord {
        WordRecord::new(
            text,
            Some("/wɜːd/".to_string()),
            vec![Meaning::new("noun", "A unit of language.").with_example("Say a word.")],
        )
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("vocabulary.json"));

        assert!(store.load_history().await.unwrap().is_empty());
        assert!(store.load_stats().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_word_upserts_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("vocabulary.json");
        let store = JsonFileStore::new(&path);

        let mut first = word("memory");
        let second = word("voice");
        store.save_word(&first).await.unwrap();
        store.save_word(&second).await.unwrap();

        first.review_count = 3;
        first.difficulty = Difficulty::Hard;
        first.last_reviewed = Some(Utc::now());
        store.save_word(&first).await.unwrap();

        // a second handle sees the same data
        let reopened = JsonFileStore::new(&path);
        let history = reopened.load_history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], first);
        assert_eq!(history[1].word, "voice");
    }

    #[tokio::test]
    async fn test_stats_keep_words_intact() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("vocabulary.json"));
        store.save_word(&word("energy")).await.unwrap();

        let stats = StudyStats {
            total_words: 1,
            total_reviews: 4,
            correct_answers: 3,
            accuracy: 75,
            ..StudyStats::default()
        };
        store.save_stats(&stats).await.unwrap();

        assert_eq!(store.load_stats().await.unwrap(), Some(stats));
        assert_eq!(store.load_history().await.unwrap().len(), 1);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["vocabulary_stats"]["totalReviews"], 4);
        assert_eq!(value["vocabulary_words"][0]["word"], "energy");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_history().await,
            Err(StoreError::Serde(_))
        ));
    }
}
