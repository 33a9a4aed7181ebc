use kanal::AsyncSender;
use lexis_core::{SelectError, WordStore};
use lexis_types::{AppEvent, StudyMode, WordRecord};

use crate::events::lookup_word::store_new_word;
use crate::events::show_current;
use crate::state::{AppState, SessionState};

/// Step forward in the session, or select a word once at its end
pub async fn handle_next_word(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if session.history.advance().is_some() {
        return show_current(session, app_to_ui_tx).await;
    }

    let stored = state.store.load_history().await?;
    let record = select_skipping_broken(state, session, app_to_ui_tx, &stored).await?;

    if !stored.iter().any(|w| w.id == record.id) {
        store_new_word(state, &record).await?;
    }

    session.history.push(record);
    show_current(session, app_to_ui_tx).await
}

/// Each broken record is reported once, quarantined for the session, and
/// selection runs again without it
async fn select_skipping_broken(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    stored: &[WordRecord],
) -> anyhow::Result<WordRecord> {
    loop {
        let candidates: Vec<WordRecord> = stored
            .iter()
            .filter(|w| !session.quarantine.contains(&w.id))
            .cloned()
            .collect();

        match state.selector.select_next(&candidates, &mut session.rng).await {
            Ok(record) => return Ok(record),
            // Only stored records can be skipped; a broken lookup result just fails
            Err(SelectError::DataIntegrity { id, word }) if candidates.iter().any(|w| w.id == id) => {
                let e = SelectError::DataIntegrity {
                    id: id.clone(),
                    word,
                };
                tracing::warn!("Skipping {} for this session: {}", id, e);
                session.quarantine.insert(id);
                app_to_ui_tx.send(AppEvent::ShowError(e.to_string())).await?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

pub async fn handle_previous_word(
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if session.history.previous().is_none() {
        anyhow::bail!("Already at the first word");
    }
    show_current(session, app_to_ui_tx).await
}

/// Re-renders the current word in the new mode
pub async fn handle_switch_mode(
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    mode: StudyMode,
) -> anyhow::Result<()> {
    tracing::info!("Switching to {} mode", mode);
    session.mode = mode;
    show_current(session, app_to_ui_tx).await
}
