use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use lexis_config::Config;
use lexis_config::dictionary::DictionaryConfig;
use lexis_config::storage::StorageConfig;
use lexis_core::session::SessionHistory;
use lexis_core::{WordLookup, WordSelector, WordStore};
use lexis_lang_english::{FreeDictionaryClient, RetryingLookup};
use lexis_store::{JsonFileStore, MemoryStore};
use lexis_types::{CardView, StudyMode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::RwLock;

/// Shared, long-lived collaborators
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub store: Arc<dyn WordStore>,
    pub selector: WordSelector<Arc<dyn WordLookup>>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn WordStore>, lookup: Arc<dyn WordLookup>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            selector: WordSelector::new(lookup),
        }
    }

    /// Wire the dictionary client and the store described by `config`
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let store = build_store(&config.storage);
        let lookup = build_lookup(&config.dictionary)?;
        Ok(Self::new(config, store, lookup))
    }
}

fn build_store(storage: &StorageConfig) -> Arc<dyn WordStore> {
    if storage.ephemeral {
        tracing::info!("Ephemeral run, words are kept in memory");
        Arc::new(MemoryStore::new())
    } else {
        let path = storage.store_path();
        tracing::info!("Using word store at {}", path.display());
        Arc::new(JsonFileStore::new(path))
    }
}

fn build_lookup(dictionary: &DictionaryConfig) -> anyhow::Result<Arc<dyn WordLookup>> {
    let client = FreeDictionaryClient::new(
        dictionary.api_url.clone(),
        Duration::from_millis(dictionary.timeout_ms),
    )?
    .with_word_list(dictionary.word_list.clone())
    .with_max_meanings(dictionary.max_meanings);

    tracing::debug!(
        "Dictionary at {} ({} candidate words)",
        dictionary.api_url,
        client.word_list().len()
    );

    let lookup = RetryingLookup::new(
        client,
        dictionary.retries,
        Duration::from_millis(dictionary.retry_delay_ms),
    );
    Ok(Arc::new(lookup))
}

/// Per-session state, owned by the event loop alone
pub struct SessionState {
    pub history: SessionHistory,
    pub mode: StudyMode,
    pub rng: StdRng,
    /// Ids of stored records that failed validation, skipped by selection
    pub quarantine: HashSet<String>,
}

impl SessionState {
    pub fn new(mode: StudyMode, history_limit: usize) -> Self {
        Self::with_rng(mode, history_limit, StdRng::from_os_rng())
    }

    pub fn with_rng(mode: StudyMode, history_limit: usize, rng: StdRng) -> Self {
        Self {
            history: SessionHistory::new(history_limit),
            mode,
            rng,
            quarantine: HashSet::new(),
        }
    }

    /// Card for the word under the cursor
    pub fn current_card(&self) -> Option<CardView> {
        self.history.current().map(|record| CardView {
            mode: self.mode,
            record: record.clone(),
            position: self.history.position(),
            total: self.history.len(),
        })
    }
}
