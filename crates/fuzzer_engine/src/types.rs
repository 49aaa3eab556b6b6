use fuzzer_core::{StatusExplanation, Warning};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuzzEvent {
    BatchDispatched {
        /// Zero-based batch index.
        index: usize,
        total: usize,
        words: usize,
    },
    Warning(Warning),
    KeywordDiscovered(String),
    Halted(StatusExplanation),
}

/// Receives session progress. Implementations decide how (or whether) to show it.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: FuzzEvent);
}
