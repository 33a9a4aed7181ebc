//! Selection weights for previously seen words.
//!
//! `weight = difficulty_factor * time_factor * pass_penalty`. Every factor is
//! strictly positive, so every record keeps a non-zero chance of being drawn.

use chrono::{DateTime, Utc};
use lexis_types::{Difficulty, WordRecord};

/// Time factor for never-reviewed words and the cap for everything else
pub const MAX_TIME_FACTOR: f64 = 4.0;

/// Elapsed hours that add 1.0 to the time factor
const HOURS_PER_STEP: f64 = 24.0;

pub const MIN_PASS_PENALTY: f64 = 0.1;
const PASS_PENALTY_STEP: f64 = 0.1;

/// Easy words weigh the most: 0 -> 3.0, 1 -> 1.5, 2 -> 0.5
pub fn difficulty_factor(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 3.0,
        Difficulty::Medium => 1.5,
        Difficulty::Hard => 0.5,
    }
}

/// Grows with time since the last review, in [1.0, MAX_TIME_FACTOR]
pub fn time_factor(last_reviewed: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(last) = last_reviewed else {
        return MAX_TIME_FACTOR;
    };

    // Clock skew can put `last` in the future
    let elapsed_secs = (now - last).num_seconds().max(0) as f64;
    let elapsed_hours = elapsed_secs / 3600.0;

    (1.0 + elapsed_hours / HOURS_PER_STEP).min(MAX_TIME_FACTOR)
}

/// Shrinks by 0.1 per pass, never below MIN_PASS_PENALTY
pub fn pass_penalty(pass_count: u32) -> f64 {
    (1.0 - PASS_PENALTY_STEP * pass_count as f64).max(MIN_PASS_PENALTY)
}

pub fn weight(record: &WordRecord, now: DateTime<Utc>) -> f64 {
    difficulty_factor(record.difficulty)
        * time_factor(record.last_reviewed, now)
        * pass_penalty(record.pass_count)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use lexis_types::Meaning;

    use super::*;

    fn record(difficulty: Difficulty, pass_count: u32, last: Option<DateTime<Utc>>) -> WordRecord {
        let mut record = WordRecord::new("time", None, vec![Meaning::new("noun", "A measure.")]);
        record.difficulty = difficulty;
        record.pass_count = pass_count;
        record.last_reviewed = last;
        record
    }

    #[test]
    fn test_pass_penalty_floor() {
        assert_eq!(pass_penalty(0), 1.0);
        assert!((pass_penalty(5) - 0.5).abs() < 1e-9);
        for passes in 0..200 {
            assert!(pass_penalty(passes) >= MIN_PASS_PENALTY);
        }
        assert_eq!(pass_penalty(9), MIN_PASS_PENALTY);
        assert_eq!(pass_penalty(u32::MAX), MIN_PASS_PENALTY);
    }

    #[test]
    fn test_pass_penalty_monotonic() {
        let now = Utc::now();
        for passes in 0..20 {
            let before = weight(&record(Difficulty::Medium, passes, None), now);
            let after = weight(&record(Difficulty::Medium, passes + 1, None), now);
            if pass_penalty(passes) > MIN_PASS_PENALTY {
                assert!(after < before, "passes={passes}");
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_time_factor() {
        let now = Utc::now();
        assert_eq!(time_factor(None, now), MAX_TIME_FACTOR);
        assert_eq!(time_factor(Some(now), now), 1.0);
        assert!((time_factor(Some(now - Duration::hours(12)), now) - 1.5).abs() < 1e-9);
        assert_eq!(time_factor(Some(now - Duration::days(30)), now), MAX_TIME_FACTOR);
        // future timestamps behave like "just now"
        assert_eq!(time_factor(Some(now + Duration::hours(5)), now), 1.0);

        let mut previous = 0.0;
        for hours in 0..200 {
            let factor = time_factor(Some(now - Duration::hours(hours)), now);
            assert!(factor >= previous);
            previous = factor;
        }
    }

    #[test]
    fn test_weight_always_positive() {
        let now = Utc::now();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for passes in [0, 1, 9, 10, 1000] {
                for last in [None, Some(now), Some(now - Duration::days(2))] {
                    assert!(weight(&record(difficulty, passes, last), now) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_unseen_easy_outweighs_recent_hard() {
        let now = Utc::now();
        let a = record(Difficulty::Easy, 0, None);
        let b = record(Difficulty::Hard, 5, Some(now - Duration::minutes(1)));

        assert!((weight(&a, now) - 12.0).abs() < 1e-9);
        assert!(weight(&b, now) < 0.3);
    }
}
