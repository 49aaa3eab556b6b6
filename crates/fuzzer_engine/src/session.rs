use fuzzer_core::{
    build_query, explain_status, update, BatchSize, Effect, Msg, RunState, WordBatcher,
};
use fuzzer_logging::{fuzz_debug, fuzz_info, fuzz_warn};
use thiserror::Error;

use crate::{EventSink, FuzzEvent, KeywordSink, SinkError, Transport};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write keyword {keyword:?} to output: {source}")]
    Sink {
        keyword: String,
        #[source]
        source: SinkError,
    },
}

/// Sequential fuzzing loop: one batch, one request, one response at a time.
pub struct Session<'a> {
    transport: &'a dyn Transport,
    events: &'a dyn EventSink,
    batch_size: BatchSize,
}

impl<'a> Session<'a> {
    pub fn new(transport: &'a dyn Transport, events: &'a dyn EventSink, batch_size: BatchSize) -> Self {
        Self {
            transport,
            events,
            batch_size,
        }
    }

    /// Probes every batch of `words` until the list is exhausted or a
    /// non-200 status halts the run.
    ///
    /// `state` and `sink` stay with the caller, so both survive this future
    /// being dropped mid-request.
    pub async fn run(
        &self,
        words: &[String],
        state: &mut RunState,
        mut sink: Option<&mut dyn KeywordSink>,
    ) -> Result<(), SessionError> {
        let batcher = WordBatcher::new(words, self.batch_size);
        let total = batcher.batch_count();
        fuzz_info!(
            "Starting session: {} words in {} batches of up to {}",
            words.len(),
            total,
            self.batch_size.get()
        );

        for (index, batch) in batcher.batches().enumerate() {
            let query = build_query(batch);
            self.apply(state, Msg::RequestDispatched, &mut sink)?;
            self.events.emit(FuzzEvent::BatchDispatched {
                index,
                total,
                words: batch.len(),
            });
            fuzz_debug!("Dispatching batch {}/{} ({} words)", index + 1, total, batch.len());

            let outcome = self.transport.send(&query).await;
            self.apply(state, Msg::ResponseReceived(outcome), &mut sink)?;

            if state.is_halted() {
                fuzz_warn!(
                    "Halting after batch {}/{}; {} batches left undispatched",
                    index + 1,
                    total,
                    total - index - 1
                );
                break;
            }
        }

        fuzz_info!(
            "Session finished: {} requests, {} unique keywords",
            state.requests_sent(),
            state.keyword_count()
        );
        Ok(())
    }

    fn apply(
        &self,
        state: &mut RunState,
        msg: Msg,
        sink: &mut Option<&mut dyn KeywordSink>,
    ) -> Result<(), SessionError> {
        let (next, effects) = update(std::mem::take(state), msg);
        *state = next;

        for effect in effects {
            match effect {
                Effect::Warn(warning) => {
                    fuzz_warn!("Recoverable request failure: {:?}", warning);
                    self.events.emit(FuzzEvent::Warning(warning));
                }
                Effect::KeywordDiscovered(keyword) => {
                    if let Some(sink) = sink.as_deref_mut() {
                        sink.append(&keyword)
                            .map_err(|source| SessionError::Sink {
                                keyword: keyword.clone(),
                                source,
                            })?;
                    }
                    self.events.emit(FuzzEvent::KeywordDiscovered(keyword));
                }
                Effect::Halt { status } => {
                    self.events.emit(FuzzEvent::Halted(explain_status(status)));
                }
            }
        }
        Ok(())
    }
}
