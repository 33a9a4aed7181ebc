use anyhow::Context;
use chrono::Utc;
use kanal::AsyncSender;
use lexis_core::WordStore;
use lexis_core::verdict::apply_verdict;
use lexis_types::{AppEvent, Verdict};

use crate::events::navigate::handle_next_word;
use crate::events::stats::record_stats;
use crate::state::{AppState, SessionState};

/// Update the current word's counters, persist it, then move on
pub async fn handle_verdict(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    verdict: Verdict,
) -> anyhow::Result<()> {
    let Some(current) = session.history.current() else {
        anyhow::bail!("No word on screen yet");
    };

    let mut record = current.clone();
    apply_verdict(&mut record, verdict, Utc::now());
    state.store.save_word(&record).await?;
    session.history.replace(&record);

    tracing::info!(
        "'{}' marked {:?} (difficulty {}, reviews {}, passes {})",
        record.word,
        verdict,
        record.difficulty.level(),
        record.review_count,
        record.pass_count
    );

    // Passing is not a review
    let stats = if verdict != Verdict::Passed {
        record_stats(state, verdict == Verdict::Known).await
    } else {
        Ok(())
    };

    // Leave the saved word even when the stats write failed
    handle_next_word(state, session, app_to_ui_tx).await?;
    stats.context("Verdict saved but statistics were not updated")
}
