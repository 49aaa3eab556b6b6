use std::collections::HashSet;

/// Mutable accumulation for one fuzzing run.
///
/// Keywords are only ever added; [`crate::update`] is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    words_processed: usize,
    requests_sent: usize,
    keywords: HashSet<String>,
    halted_on: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub words_processed: usize,
    pub requests_sent: usize,
    pub unique_keywords: usize,
    pub halted_on: Option<u16>,
}

impl RunState {
    /// `word_count` is the length of the loaded word list.
    pub fn new(word_count: usize) -> Self {
        Self {
            words_processed: word_count,
            ..Self::default()
        }
    }

    pub fn requests_sent(&self) -> usize {
        self.requests_sent
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_halted(&self) -> bool {
        self.halted_on.is_some()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            words_processed: self.words_processed,
            requests_sent: self.requests_sent,
            unique_keywords: self.keywords.len(),
            halted_on: self.halted_on,
        }
    }

    pub(crate) fn record_request(&mut self) {
        self.requests_sent += 1;
    }

    /// Returns `true` when the keyword was not seen before.
    pub(crate) fn absorb(&mut self, keyword: &str) -> bool {
        if self.keywords.contains(keyword) {
            return false;
        }
        self.keywords.insert(keyword.to_string())
    }

    pub(crate) fn halt(&mut self, status: u16) {
        self.halted_on.get_or_insert(status);
    }
}
