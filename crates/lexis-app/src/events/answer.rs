use kanal::AsyncSender;
use lexis_core::study::check_answer;
use lexis_types::{AnswerOutcome, AppEvent, StudyMode, Verdict};

use crate::events::verdict::handle_verdict;
use crate::state::{AppState, SessionState};

fn fill_word(session: &SessionState) -> anyhow::Result<String> {
    let Some(record) = session.history.current() else {
        anyhow::bail!("No word on screen yet");
    };
    if session.mode != StudyMode::Fill {
        anyhow::bail!("Answers are checked in fill mode, switch with 'm fill'");
    }
    Ok(record.word.clone())
}

/// A correct answer counts as known; a wrong one may be retried
pub async fn handle_check_answer(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    answer: String,
) -> anyhow::Result<()> {
    let word = fill_word(session)?;

    if !check_answer(&answer, &word) {
        tracing::debug!("Wrong answer for '{}'", word);
        app_to_ui_tx
            .send(AppEvent::ShowAnswer {
                outcome: AnswerOutcome::Wrong,
                word: answer.trim().to_string(),
            })
            .await?;
        return Ok(());
    }

    app_to_ui_tx
        .send(AppEvent::ShowAnswer {
            outcome: AnswerOutcome::Correct,
            word,
        })
        .await?;
    handle_verdict(state, session, app_to_ui_tx, Verdict::Known).await
}

/// Revealing counts as unknown
pub async fn handle_reveal_answer(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = fill_word(session)?;

    app_to_ui_tx
        .send(AppEvent::ShowAnswer {
            outcome: AnswerOutcome::Revealed,
            word,
        })
        .await?;
    handle_verdict(state, session, app_to_ui_tx, Verdict::Unknown).await
}
