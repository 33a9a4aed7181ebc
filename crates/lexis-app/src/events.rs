use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::{AppState, SessionState};

pub mod answer;
pub mod lookup_word;
pub mod navigate;
pub mod stats;
pub mod verdict;

use answer::{handle_check_answer, handle_reveal_answer};
use lookup_word::handle_lookup_word;
use navigate::{handle_next_word, handle_previous_word, handle_switch_mode};
use stats::{handle_show_stats, sync_total_words};
use verdict::handle_verdict;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        SessionState::new(config.study.mode, config.study.history_limit)
    };

    run_session(&state, &mut session, ui_to_app_rx, app_to_ui_tx, cancel).await
}

/// Present the first word, then serve UI requests one at a time until
/// shutdown or cancellation
pub async fn run_session(
    state: &AppState,
    session: &mut SessionState,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    report(sync_total_words(state).await, &app_to_ui_tx).await?;
    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    report(handle_next_word(state, session, &app_to_ui_tx).await, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            break;
        }

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        let result = handle_events(state, session, &app_to_ui_tx, event).await;
        report(result, &app_to_ui_tx).await?;
    }

    Ok(())
}

/// Handler failures are shown to the learner; the loop keeps running
async fn report(
    result: anyhow::Result<()>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Err(e) = result {
        tracing::error!("{e:#}");
        app_to_ui_tx.send(AppEvent::ShowError(format!("{e:#}"))).await?;
    }
    Ok(())
}

async fn handle_events(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::NextWord => handle_next_word(state, session, app_to_ui_tx).await?,
        AppEvent::PreviousWord => handle_previous_word(session, app_to_ui_tx).await?,
        AppEvent::LookupWord(term) => {
            handle_lookup_word(state, session, app_to_ui_tx, term).await?
        }
        AppEvent::Verdict(verdict) => {
            handle_verdict(state, session, app_to_ui_tx, verdict).await?
        }
        AppEvent::SwitchMode(mode) => handle_switch_mode(session, app_to_ui_tx, mode).await?,
        AppEvent::CheckAnswer(answer) => {
            handle_check_answer(state, session, app_to_ui_tx, answer).await?
        }
        AppEvent::RevealAnswer => handle_reveal_answer(state, session, app_to_ui_tx).await?,
        AppEvent::ShowStats => handle_show_stats(state, app_to_ui_tx).await?,
        AppEvent::Shutdown => {}
        // UI-only events, ignore in backend
        AppEvent::BackendReady
        | AppEvent::ShowCard(_)
        | AppEvent::ShowAnswer { .. }
        | AppEvent::ShowStatsResult(_)
        | AppEvent::ShowError(_) => {}
    }

    Ok(())
}

/// Send the card under the cursor, if any
pub(crate) async fn show_current(
    session: &SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(card) = session.current_card() {
        tracing::debug!("Showing '{}' ({}/{})", card.record.word, card.position, card.total);
        app_to_ui_tx.send(AppEvent::ShowCard(card)).await?;
    }
    Ok(())
}
