use std::slice::Chunks;

use crate::ConfigError;

const DEFAULT_BATCH_SIZE: usize = 200;

/// Number of words sent per request. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(DEFAULT_BATCH_SIZE)
    }
}

impl TryFrom<i64> for BatchSize {
    type Error = ConfigError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        match usize::try_from(count) {
            Ok(size) if size > 0 => Ok(Self(size)),
            _ => Err(ConfigError::NonPositiveBatchSize(count)),
        }
    }
}

/// Splits a word list into contiguous batches of at most `size` words.
///
/// Batches are borrowed slices produced lazily; calling [`WordBatcher::batches`]
/// again restarts from the first word.
#[derive(Debug, Clone, Copy)]
pub struct WordBatcher<'a> {
    words: &'a [String],
    size: BatchSize,
}

impl<'a> WordBatcher<'a> {
    pub fn new(words: &'a [String], size: BatchSize) -> Self {
        Self { words, size }
    }

    pub fn batches(&self) -> Chunks<'a, String> {
        self.words.chunks(self.size.get())
    }

    /// Number of batches a full pass yields.
    pub fn batch_count(&self) -> usize {
        self.words.len().div_ceil(self.size.get())
    }
}
