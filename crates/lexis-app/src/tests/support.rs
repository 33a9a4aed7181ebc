use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use lexis_config::Config;
use lexis_core::{LookupError, StoreError, WordLookup, WordStore};
use lexis_store::MemoryStore;
use lexis_types::{AppEvent, CardView, Meaning, StudyMode, StudyStats, WordRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::run_session;
use crate::state::{AppState, SessionState};

pub fn word(text: &str) -> WordRecord {
    WordRecord::new(
        text,
        Some(format!("/{text}/")),
        vec![Meaning::new("noun", format!("Definition of {text}.")).with_example(format!("A {text} here."))],
    )
}

/// Lookup serving fixed entries and a queue of random results
#[derive(Default)]
pub struct ScriptedLookup {
    entries: HashMap<String, WordRecord>,
    random: Mutex<VecDeque<Result<WordRecord, LookupError>>>,
    calls: AtomicUsize,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, record: WordRecord) -> Self {
        self.entries.insert(record.word.clone(), record);
        self
    }

    pub fn with_random(self, result: Result<WordRecord, LookupError>) -> Self {
        self.random.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordLookup for ScriptedLookup {
    async fn lookup_word(&self, term: &str) -> Result<WordRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(term)
            .map(|r| WordRecord::new(r.word.clone(), r.pronunciation.clone(), r.meanings.clone()))
            .ok_or_else(|| LookupError::NotFound(term.to_string()))
    }

    async fn random_word(&self) -> Result<WordRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.random
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LookupError::Network("no scripted word".into())))
    }
}

/// Memory store whose stats writes fail once `fail_stats` is set
pub struct FlakyStatsStore {
    inner: Arc<MemoryStore>,
    pub fail_stats: AtomicBool,
}

impl FlakyStatsStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            fail_stats: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl WordStore for FlakyStatsStore {
    async fn load_history(&self) -> Result<Vec<WordRecord>, StoreError> {
        self.inner.load_history().await
    }

    async fn save_word(&self, record: &WordRecord) -> Result<(), StoreError> {
        self.inner.save_word(record).await
    }

    async fn load_stats(&self) -> Result<Option<StudyStats>, StoreError> {
        self.inner.load_stats().await
    }

    async fn save_stats(&self, stats: &StudyStats) -> Result<(), StoreError> {
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save_stats(stats).await
    }
}

/// An event loop running against in-memory collaborators
pub struct Harness {
    pub to_app: AsyncSender<AppEvent>,
    pub from_app: AsyncReceiver<AppEvent>,
    pub store: Arc<MemoryStore>,
    pub lookup: Arc<ScriptedLookup>,
    pub cancel: CancellationToken,
    pub task: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    pub fn start(store: MemoryStore, lookup: ScriptedLookup, mode: StudyMode) -> Self {
        let store = Arc::new(store);
        Self::start_with(store.clone(), store, lookup, mode)
    }

    /// Run the loop against `backend`, asserting on `store` behind it
    pub fn start_with(
        store: Arc<MemoryStore>,
        backend: Arc<dyn WordStore>,
        lookup: ScriptedLookup,
        mode: StudyMode,
    ) -> Self {
        let lookup = Arc::new(lookup);
        let state = AppState::new(Config::default(), backend, lookup.clone());

        let (to_app, app_rx) = kanal::bounded_async(64);
        let (app_tx, from_app) = kanal::bounded_async(64);
        let cancel = CancellationToken::new();

        let token = cancel.clone();
        let task = tokio::spawn(async move {
            let mut session = SessionState::with_rng(mode, 50, StdRng::seed_from_u64(7));
            run_session(&state, &mut session, app_rx, app_tx, token).await
        });

        Self {
            to_app,
            from_app,
            store,
            lookup,
            cancel,
            task,
        }
    }

    pub async fn send(&self, event: AppEvent) {
        self.to_app.send(event).await.unwrap();
    }

    pub async fn next_event(&self) -> AppEvent {
        timeout(Duration::from_secs(2), self.from_app.recv())
            .await
            .expect("timed out waiting for the event loop")
            .expect("event channel closed")
    }

    pub async fn expect_ready(&self) {
        match self.next_event().await {
            AppEvent::BackendReady => {}
            other => panic!("expected BackendReady, got {other:?}"),
        }
    }

    pub async fn expect_card(&self) -> CardView {
        match self.next_event().await {
            AppEvent::ShowCard(card) => card,
            other => panic!("expected a card, got {other:?}"),
        }
    }

    pub async fn expect_error(&self) -> String {
        match self.next_event().await {
            AppEvent::ShowError(message) => message,
            other => panic!("expected an error, got {other:?}"),
        }
    }

    pub async fn stored(&self, text: &str) -> WordRecord {
        self.store
            .load_history()
            .await
            .unwrap()
            .into_iter()
            .find(|w| w.word == text)
            .unwrap_or_else(|| panic!("'{text}' is not stored"))
    }
}
