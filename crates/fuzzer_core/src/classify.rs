use serde_json::Value;

use crate::extract::has_trigger;

/// Result of a single probe request. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Success(Value),
    HttpError(u16),
    TransportError(String),
    InvalidJson,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Network-level failure; the run moves on to the next batch.
    TransportFailed(String),
    /// A 200 response whose body was not JSON; the run moves on.
    InvalidJson,
    /// Any status other than 200; the run stops dispatching batches.
    Halt(u16),
    /// Error messages carrying a trigger phrase, in response order.
    /// Empty when the body has no `errors` array or nothing matched.
    Messages(Vec<String>),
}

pub fn classify(outcome: ResponseOutcome) -> Classification {
    match outcome {
        ResponseOutcome::TransportError(cause) => Classification::TransportFailed(cause),
        ResponseOutcome::HttpError(status) => Classification::Halt(status),
        ResponseOutcome::InvalidJson => Classification::InvalidJson,
        ResponseOutcome::Success(body) => Classification::Messages(trigger_messages(&body)),
    }
}

fn trigger_messages(body: &Value) -> Vec<String> {
    let Some(errors) = body.get("errors").and_then(Value::as_array) else {
        return Vec::new();
    };
    errors
        .iter()
        .map(|entry| {
            entry
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
        })
        .filter(|message| has_trigger(message))
        .map(ToOwned::to_owned)
        .collect()
}
