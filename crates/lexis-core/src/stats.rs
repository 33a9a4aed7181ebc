use chrono::NaiveDate;
use lexis_types::StudyStats;

/// Count one evaluated review made on `today`
pub fn record_review(stats: &mut StudyStats, correct: bool, today: NaiveDate) {
    stats.total_reviews += 1;
    if correct {
        stats.correct_answers += 1;
    }
    stats.accuracy = accuracy(stats.correct_answers, stats.total_reviews);

    stats.streak_days = match stats.last_study_date {
        Some(last) if last == today => stats.streak_days.max(1),
        Some(last) if today.pred_opt() == Some(last) => stats.streak_days + 1,
        _ => 1,
    };
    stats.last_study_date = Some(today);
}

/// Whole percent, 0 when nothing was reviewed
pub fn accuracy(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}
