use std::fmt::Write;

use crossterm::style::{ContentStyle, StyledContent, Stylize};
use lexis_config::ui::UiConfig;
use lexis_core::study::blank_word;
use lexis_types::{AnswerOutcome, CardView, Meaning, StudyMode, StudyStats, WordRecord};

/// Applies terminal styles, or nothing when color is off
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color from the config, else only when stdout is a terminal
    pub fn from_config(ui: &UiConfig) -> Self {
        Self::new(ui.color.unwrap_or_else(|| atty::is(atty::Stream::Stdout)))
    }

    fn paint<F>(&self, text: &str, style: F) -> String
    where
        F: FnOnce(StyledContent<&str>) -> StyledContent<&str>,
    {
        if self.color {
            style(StyledContent::new(ContentStyle::new(), text)).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render_card(card: &CardView, ui: &UiConfig, painter: &Painter) -> String {
    let record = &card.record;
    let mut out = String::new();

    let header = format!("[{}/{}] {}", card.position, card.total, card.mode);
    let _ = writeln!(out, "{}", painter.paint(&header, |s| s.dim()));

    match card.mode {
        StudyMode::Quick => {
            let _ = writeln!(out, "{}", headword(record, painter));
            if let Some(meaning) = record.primary_meaning() {
                let _ = writeln!(out, "  {}", definition_line(meaning, painter));
                if ui.show_examples
                    && let Some(example) = &meaning.example
                {
                    let _ = writeln!(out, "  {}", painter.paint(&format!("e.g. {example}"), |s| s.italic()));
                }
            }
        }
        StudyMode::Fill => {
            let _ = writeln!(out, "{}", painter.paint(&blank_word(&record.word), |s| s.bold()));
            if let Some(meaning) = record.primary_meaning() {
                let _ = writeln!(out, "  {}", definition_line(meaning, painter));
            }
            let _ = writeln!(out, "{}", painter.paint("a <answer> to check, r to reveal", |s| s.dim()));
        }
        StudyMode::Example => {
            let _ = writeln!(out, "{}", headword(record, painter));
            for (i, meaning) in record.meanings.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, definition_line(meaning, painter));
                match &meaning.example {
                    Some(example) => {
                        let _ = writeln!(out, "     {}", painter.paint(&format!("\"{example}\""), |s| s.italic()));
                    }
                    None => {
                        let _ = writeln!(out, "     {}", painter.paint("(no example)", |s| s.dim()));
                    }
                }
            }
        }
    }

    let footer = format!(
        "difficulty {}  reviews {}  passes {}",
        record.difficulty.level(),
        record.review_count,
        record.pass_count
    );
    let _ = write!(out, "{}", painter.paint(&footer, |s| s.dim()));
    out
}

fn headword(record: &WordRecord, painter: &Painter) -> String {
    let word = painter.paint(&record.word, |s| s.bold().cyan());
    match &record.pronunciation {
        Some(pronunciation) => format!("{word}  {}", painter.paint(pronunciation, |s| s.dim())),
        None => word,
    }
}

fn definition_line(meaning: &Meaning, painter: &Painter) -> String {
    let pos = painter.paint(&format!("({})", meaning.part_of_speech), |s| s.yellow());
    format!("{pos} {}", meaning.definition)
}

pub fn render_answer(outcome: AnswerOutcome, word: &str, painter: &Painter) -> String {
    match outcome {
        AnswerOutcome::Correct => painter.paint(&format!("Correct! The word is {word}"), |s| s.green()),
        AnswerOutcome::Wrong => painter.paint(&format!("'{word}' is not it, try again"), |s| s.red()),
        AnswerOutcome::Revealed => painter.paint(&format!("Answer: {word}"), |s| s.blue()),
    }
}

pub fn render_stats(stats: &StudyStats, painter: &Painter) -> String {
    let last = stats
        .last_study_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "{}\n  words      {}\n  streak     {} day(s)\n  reviews    {}\n  correct    {}\n  accuracy   {}%\n  last study {}",
        painter.paint("statistics", |s| s.bold()),
        stats.total_words,
        stats.streak_days,
        stats.total_reviews,
        stats.correct_answers,
        stats.accuracy,
        last
    )
}

pub fn render_error(message: &str, painter: &Painter) -> String {
    painter.paint(&format!("error: {message}"), |s| s.red())
}
