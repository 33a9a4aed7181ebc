use chrono::{DateTime, Utc};
use lexis_types::{MIN_FREQUENCY, Verdict, WordRecord};

const FREQUENCY_STEP: f64 = 0.1;

/// Update a record's counters after the learner answered.
///
/// Only the controller calls this, once per verdict.
pub fn apply_verdict(record: &mut WordRecord, verdict: Verdict, now: DateTime<Utc>) {
    match verdict {
        Verdict::Known => {
            record.review_count += 1;
            record.last_reviewed = Some(now);
            record.difficulty = record.difficulty.easier();
            record.frequency = (record.frequency - FREQUENCY_STEP).max(MIN_FREQUENCY);
        }
        Verdict::Unknown => {
            record.review_count += 1;
            record.last_reviewed = Some(now);
            record.difficulty = record.difficulty.harder();
        }
        Verdict::Passed => {
            record.pass_count += 1;
        }
    }
}
