use chrono::{DateTime, Utc};
use lexis_types::WordRecord;
use rand::Rng;

use crate::error::SelectError;
use crate::lookup::WordLookup;
use crate::weight::weight;

/// Picks the next word to present.
///
/// Stateless apart from its lookup collaborator: the history and the random
/// source are passed on every call, and records are never mutated here.
pub struct WordSelector<L> {
    lookup: L,
}

impl<L: WordLookup> WordSelector<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Weighted draw over `history`, or one fresh lookup when it is empty
    pub async fn select_next<R>(
        &self,
        history: &[WordRecord],
        rng: &mut R,
    ) -> Result<WordRecord, SelectError>
    where
        R: Rng,
    {
        match pick_weighted(history, Utc::now(), rng)? {
            Some(record) => {
                tracing::debug!("Selected '{}' from {} words", record.word, history.len());
                Ok(record.clone())
            }
            None => {
                tracing::debug!("History empty, requesting a new word");
                let record = self.lookup.random_word().await?;
                ensure_meanings(&record)?;
                tracing::debug!("Lookup produced '{}'", record.word);
                Ok(record)
            }
        }
    }
}

/// Cumulative-subtraction weighted draw.
///
/// Every record is validated before drawing, so one broken record fails the
/// whole call. Returns `None` only for an empty history.
pub fn pick_weighted<'a, R>(
    history: &'a [WordRecord],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Option<&'a WordRecord>, SelectError>
where
    R: Rng,
{
    for record in history {
        ensure_meanings(record)?;
    }

    let Some(last) = history.last() else {
        return Ok(None);
    };

    let weights: Vec<f64> = history.iter().map(|r| weight(r, now)).collect();
    let total: f64 = weights.iter().sum();

    // [0, total)
    let mut remaining = rng.random::<f64>() * total;
    for (record, w) in history.iter().zip(&weights) {
        remaining -= w;
        if remaining <= 0.0 {
            return Ok(Some(record));
        }
    }

    // Rounding can leave a sliver above zero
    Ok(Some(last))
}

fn ensure_meanings(record: &WordRecord) -> Result<(), SelectError> {
    if record.meanings.is_empty() {
        tracing::warn!("Record {} ('{}') has no meanings", record.id, record.word);
        return Err(SelectError::DataIntegrity {
            id: record.id.clone(),
            word: record.word.clone(),
        });
    }
    Ok(())
}
