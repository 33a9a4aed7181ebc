//! Adapter from the Free Dictionary API response to `WordRecord`.

use lexis_core::LookupError;
use lexis_types::{Meaning, WordRecord};
use serde::Deserialize;

// JSON structures for the dictionaryapi.dev v2 format
#[derive(Debug, Deserialize)]
pub struct ApiEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    pub meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMeaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct ApiDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Parse a successful response body, using its first entry
pub fn parse_response(body: &str, max_meanings: usize) -> Result<WordRecord, LookupError> {
    let entries: Vec<ApiEntry> = serde_json::from_str(body)
        .map_err(|e| LookupError::Malformed(format!("Failed to parse response: {e}")))?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound("No word data found".to_string()))?;

    entry_to_record(entry, max_meanings)
}

pub fn entry_to_record(entry: ApiEntry, max_meanings: usize) -> Result<WordRecord, LookupError> {
    let word = entry.word.trim().to_lowercase();
    if word.is_empty() {
        return Err(LookupError::Malformed("Entry has no word".to_string()));
    }

    let pronunciation = pick_pronunciation(&entry);

    // First definition of each part of speech, entries without text dropped
    let meanings: Vec<Meaning> = entry
        .meanings
        .iter()
        .take(max_meanings)
        .filter_map(|m| {
            let first = m.definitions.first()?;
            let definition = first.definition.trim();
            if definition.is_empty() {
                return None;
            }
            Some(Meaning {
                part_of_speech: m
                    .part_of_speech
                    .clone()
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| "unknown".to_string()),
                definition: definition.to_string(),
                example: non_empty(first.example.as_deref()),
            })
        })
        .collect();

    if meanings.is_empty() {
        return Err(LookupError::Malformed(format!(
            "No valid meanings found for '{word}'"
        )));
    }

    Ok(WordRecord::new(word, pronunciation, meanings))
}

/// `phonetic`, else a transcription that has audio, else any transcription
fn pick_pronunciation(entry: &ApiEntry) -> Option<String> {
    if let Some(phonetic) = non_empty(entry.phonetic.as_deref()) {
        return Some(phonetic);
    }

    let with_audio = entry.phonetics.iter().find(|p| {
        non_empty(p.text.as_deref()).is_some() && non_empty(p.audio.as_deref()).is_some()
    });
    let with_text = entry
        .phonetics
        .iter()
        .find(|p| non_empty(p.text.as_deref()).is_some());

    with_audio
        .or(with_text)
        .and_then(|p| non_empty(p.text.as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
