//! Fuzzer core: pure pipeline pieces and the run-state machine.
mod batch;
mod classify;
mod effect;
mod error;
mod extract;
mod header;
mod msg;
mod query;
mod state;
mod status;
mod update;

pub use batch::{BatchSize, WordBatcher};
pub use classify::{classify, Classification, ResponseOutcome};
pub use effect::{Effect, Warning};
pub use error::ConfigError;
pub use extract::{extract_keywords, has_trigger};
pub use header::parse_header;
pub use msg::Msg;
pub use query::{build_query, QueryPayload};
pub use state::{RunState, RunSummary};
pub use status::{explain_status, Severity, StatusExplanation};
pub use update::update;
