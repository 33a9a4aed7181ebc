use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> app
    NextWord,
    PreviousWord,
    /// Fetch a specific term, or a random one for `None`
    LookupWord(Option<String>),
    Verdict(Verdict),
    SwitchMode(StudyMode),
    CheckAnswer(String),
    RevealAnswer,
    ShowStats,
    Shutdown,

    // app -> UI
    BackendReady,
    ShowCard(CardView),
    ShowAnswer { outcome: AnswerOutcome, word: String },
    ShowStatsResult(StudyStats),
    ShowError(String),
}

/// What the UI needs to draw one card
#[derive(Debug, Clone)]
pub struct CardView {
    pub mode: StudyMode,
    pub record: WordRecord,
    /// 1-based position in the session history
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    Revealed,
}

/// One sense of a word, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definition: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<String>,
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Learner-assigned difficulty, stored as 0..=2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// One step harder, saturating at `Hard`
    pub fn harder(self) -> Self {
        Self::from(self.level() as i64 + 1)
    }

    /// One step easier, saturating at `Easy`
    pub fn easier(self) -> Self {
        Self::from(self.level() as i64 - 1)
    }
}

impl From<i64> for Difficulty {
    /// Out-of-range levels are clamped
    fn from(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

pub const MIN_FREQUENCY: f64 = 0.1;
pub const MAX_FREQUENCY: f64 = 1.0;

fn default_frequency() -> f64 {
    MAX_FREQUENCY
}

/// A learned vocabulary entry together with its review counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    #[serde(
        default,
        alias = "phonetic",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub pronunciation: Option<String>,
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Kept in `MIN_FREQUENCY..=MAX_FREQUENCY`, hand-edited values are clamped on load
    #[serde(default = "default_frequency", deserialize_with = "clamp_frequency")]
    pub frequency: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub pass_count: u32,
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
    pub added_date: DateTime<Utc>,
}

impl WordRecord {
    /// Fresh record with a new id and zeroed counters
    pub fn new(word: impl Into<String>, pronunciation: Option<String>, meanings: Vec<Meaning>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            word: word.into(),
            pronunciation,
            meanings,
            difficulty: Difficulty::Easy,
            frequency: default_frequency(),
            review_count: 0,
            pass_count: 0,
            last_reviewed: None,
            added_date: Utc::now(),
        }
    }

    /// The meaning shown in compact modes
    pub fn primary_meaning(&self) -> Option<&Meaning> {
        self.meanings.first()
    }
}

/// Learner outcome for a presented word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Known,
    Unknown,
    /// Skipped without a known/unknown answer
    Passed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    #[default]
    Quick,
    Fill,
    Example,
}

impl StudyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyMode::Quick => "quick",
            StudyMode::Fill => "fill",
            StudyMode::Example => "example",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" | "q" => Ok(StudyMode::Quick),
            "fill" | "f" => Ok(StudyMode::Fill),
            "example" | "e" => Ok(StudyMode::Example),
            other => Err(format!("unknown study mode: {other}")),
        }
    }
}

/// Aggregate review statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyStats {
    pub total_words: u32,
    pub streak_days: u32,
    pub last_study_date: Option<NaiveDate>,
    pub total_reviews: u32,
    pub correct_answers: u32,
    /// Whole percent
    pub accuracy: u32,
}

/// Older records stored missing fields as ""
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn clamp_frequency<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value.clamp(MIN_FREQUENCY, MAX_FREQUENCY))
    } else {
        Ok(default_frequency())
    }
}
