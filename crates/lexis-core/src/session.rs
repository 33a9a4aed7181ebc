use std::collections::VecDeque;

use lexis_types::WordRecord;

/// Words presented during the current session, with a navigation cursor
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: VecDeque<WordRecord>,
    cursor: Option<usize>,
    limit: usize,
}

impl SessionHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Append and move the cursor onto the new word, evicting the oldest past the limit
    pub fn push(&mut self, record: WordRecord) -> &WordRecord {
        self.entries.push_back(record);
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        let last = self.entries.len() - 1;
        self.cursor = Some(last);
        &self.entries[last]
    }

    pub fn current(&self) -> Option<&WordRecord> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// Step back; `None` at the first word
    pub fn previous(&mut self) -> Option<&WordRecord> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1)
            }
            _ => None,
        }
    }

    /// Step forward; `None` at the end, where the caller fetches a new word
    pub fn advance(&mut self) -> Option<&WordRecord> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries.get(i + 1)
            }
            _ => None,
        }
    }

    /// Refresh every session copy of `record` after it was updated
    pub fn replace(&mut self, record: &WordRecord) {
        for entry in self.entries.iter_mut().filter(|e| e.id == record.id) {
            *entry = record.clone();
        }
    }

    /// 1-based position of the cursor, 0 when empty
    pub fn position(&self) -> usize {
        self.cursor.map_or(0, |i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
