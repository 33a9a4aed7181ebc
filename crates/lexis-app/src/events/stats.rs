use chrono::Local;
use kanal::AsyncSender;
use lexis_core::WordStore;
use lexis_core::stats::record_review;
use lexis_types::AppEvent;

use crate::state::AppState;

pub async fn handle_show_stats(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let stats = state.store.init_stats().await?;
    app_to_ui_tx.send(AppEvent::ShowStatsResult(stats)).await?;
    Ok(())
}

/// Count one evaluated review on today's local date
pub(crate) async fn record_stats(state: &AppState, correct: bool) -> anyhow::Result<()> {
    let mut stats = state.store.init_stats().await?;
    record_review(&mut stats, correct, Local::now().date_naive());
    state.store.save_stats(&stats).await?;

    tracing::debug!(
        "Stats: {} reviews, {}% accuracy, {} day streak",
        stats.total_reviews,
        stats.accuracy,
        stats.streak_days
    );
    Ok(())
}

/// Keep `total_words` equal to the number of stored records
pub(crate) async fn sync_total_words(state: &AppState) -> anyhow::Result<()> {
    let count = state.store.load_history().await?.len() as u32;
    let mut stats = state.store.init_stats().await?;
    if stats.total_words != count {
        stats.total_words = count;
        state.store.save_stats(&stats).await?;
    }
    Ok(())
}
