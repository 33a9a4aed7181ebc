use kanal::AsyncSender;
use lexis_core::{SelectError, WordLookup, WordStore};
use lexis_types::{AppEvent, WordRecord};

use crate::events::show_current;
use crate::events::stats::sync_total_words;
use crate::state::{AppState, SessionState};

/// Fetch `term` (or a random word) and present it.
///
/// A word that is already stored is presented as stored, keeping its counters.
/// A stored copy without meanings takes the fetched ones and becomes selectable again.
pub async fn handle_lookup_word(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    term: Option<String>,
) -> anyhow::Result<()> {
    let lookup = state.selector.lookup();
    let fetched = match term.as_deref() {
        Some(term) => lookup.lookup_word(term).await?,
        None => lookup.random_word().await?,
    };

    if fetched.meanings.is_empty() {
        return Err(SelectError::DataIntegrity {
            id: fetched.id,
            word: fetched.word,
        }
        .into());
    }

    let history = state.store.load_history().await?;
    let record = match history
        .into_iter()
        .find(|w| w.word.eq_ignore_ascii_case(&fetched.word))
    {
        Some(mut existing) if existing.meanings.is_empty() => {
            existing.meanings = fetched.meanings;
            existing.pronunciation = existing.pronunciation.or(fetched.pronunciation);
            state.store.save_word(&existing).await?;
            session.quarantine.remove(&existing.id);
            tracing::info!("Repaired '{}' with fetched meanings", existing.word);
            existing
        }
        Some(existing) => {
            tracing::info!("'{}' is already in the store", existing.word);
            existing
        }
        None => {
            store_new_word(state, &fetched).await?;
            fetched
        }
    };

    session.history.push(record);
    show_current(session, app_to_ui_tx).await
}

/// Persist a freshly fetched record and refresh the word count
pub(crate) async fn store_new_word(state: &AppState, record: &WordRecord) -> anyhow::Result<()> {
    state.store.save_word(record).await?;
    tracing::info!("Added '{}' to the store", record.word);
    sync_total_words(state).await
}
