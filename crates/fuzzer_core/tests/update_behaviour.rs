use std::sync::Once;

use fuzzer_core::{
    classify, explain_status, update, Classification, Effect, Msg, ResponseOutcome, RunState,
    RunSummary, Severity, Warning,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(fuzzer_logging::initialize_for_tests);
}

fn respond(state: RunState, body: serde_json::Value) -> (RunState, Vec<Effect>) {
    update(state, Msg::ResponseReceived(ResponseOutcome::Success(body)))
}

#[test]
fn did_you_mean_message_yields_first_backtick_name() {
    init_logging();
    let body = json!({
        "errors": [
            { "message": "Cannot query field `users` on type `Query`. Did you mean `user`?" }
        ]
    });

    let (state, effects) = respond(RunState::new(1), body);

    assert_eq!(effects, vec![Effect::KeywordDiscovered("users".to_string())]);
    assert_eq!(state.keyword_count(), 1);
}

#[test]
fn messages_without_trigger_are_ignored() {
    init_logging();
    let body = json!({
        "errors": [
            { "message": "Cannot query field `secret` on type `Query`." },
            { "locations": [{ "line": 1, "column": 2 }] }
        ]
    });

    let (state, effects) = respond(RunState::new(1), body);

    assert!(effects.is_empty());
    assert_eq!(state.keyword_count(), 0);
}

#[test]
fn body_without_errors_is_a_no_op() {
    init_logging();
    let (state, effects) = respond(RunState::new(3), json!({ "data": { "a": 1 } }));
    assert!(effects.is_empty());
    assert_eq!(state, RunState::new(3));

    let (_, effects) = respond(RunState::new(3), json!({ "errors": "not a list" }));
    assert!(effects.is_empty());
}

#[test]
fn both_patterns_fire_on_one_message() {
    init_logging();
    let body = json!({
        "errors": [
            { "message": "Did you mean `email`? Unknown field 'mail' on type User." }
        ]
    });

    let (_, effects) = respond(RunState::new(1), body);

    assert_eq!(
        effects,
        vec![
            Effect::KeywordDiscovered("email".to_string()),
            Effect::KeywordDiscovered("mail".to_string()),
        ]
    );
}

#[test]
fn duplicate_keyword_is_discovered_once() {
    init_logging();
    let state = RunState::new(10);
    let body = json!({ "errors": [{ "message": "Did you mean `foo`?" }] });

    let (state, first) = respond(state, body.clone());
    let (state, second) = respond(state, body);

    assert_eq!(first, vec![Effect::KeywordDiscovered("foo".to_string())]);
    assert!(second.is_empty());
    assert_eq!(state.summary().unique_keywords, 1);
}

#[test]
fn duplicates_within_one_response_collapse() {
    init_logging();
    let body = json!({
        "errors": [
            { "message": "Field must have selections: `node`" },
            { "message": "Did you mean `node`?" },
            { "message": "Did you mean `edge`?" }
        ]
    });

    let (state, effects) = respond(RunState::new(2), body);

    assert_eq!(
        effects,
        vec![
            Effect::KeywordDiscovered("node".to_string()),
            Effect::KeywordDiscovered("edge".to_string()),
        ]
    );
    assert_eq!(state.keyword_count(), 2);
}

#[test]
fn recoverable_outcomes_warn_and_continue() {
    init_logging();
    let (state, effects) = update(
        RunState::new(1),
        Msg::ResponseReceived(ResponseOutcome::TransportError("connection refused".into())),
    );
    assert_eq!(
        effects,
        vec![Effect::Warn(Warning::Transport("connection refused".into()))]
    );
    assert!(!state.is_halted());

    let (state, effects) = update(state, Msg::ResponseReceived(ResponseOutcome::InvalidJson));
    assert_eq!(effects, vec![Effect::Warn(Warning::InvalidJson)]);
    assert!(!state.is_halted());
}

#[test]
fn http_error_halts_but_keeps_counts() {
    init_logging();
    let state = RunState::new(5);
    let (state, _) = update(state, Msg::RequestDispatched);
    let (state, _) = respond(state, json!({ "errors": [{ "message": "Did you mean `a`?" }] }));
    let (state, _) = update(state, Msg::RequestDispatched);
    let (state, effects) = update(state, Msg::ResponseReceived(ResponseOutcome::HttpError(500)));

    assert_eq!(effects, vec![Effect::Halt { status: 500 }]);
    assert!(state.is_halted());
    assert_eq!(
        state.summary(),
        RunSummary {
            words_processed: 5,
            requests_sent: 2,
            unique_keywords: 1,
            halted_on: Some(500),
        }
    );
}

#[test]
fn classify_maps_every_outcome() {
    assert_eq!(
        classify(ResponseOutcome::HttpError(429)),
        Classification::Halt(429)
    );
    assert_eq!(
        classify(ResponseOutcome::InvalidJson),
        Classification::InvalidJson
    );
    assert_eq!(
        classify(ResponseOutcome::Success(json!({
            "errors": [{ "message": "Field 'assume' doesn't exist on type 'Query'" }]
        }))),
        Classification::Messages(vec![
            "Field 'assume' doesn't exist on type 'Query'".to_string()
        ])
    );
}

#[test]
fn status_explanations() {
    let forbidden = explain_status(403);
    assert_eq!(forbidden.to_string(), "Forbidden - Access denied");
    assert_eq!(forbidden.severity, Severity::Critical);

    assert_eq!(explain_status(500).to_string(), "Internal Server Error");
    assert_eq!(explain_status(429).severity, Severity::Warning);
    assert_eq!(explain_status(404).severity, Severity::Notice);
    assert_eq!(
        explain_status(418).to_string(),
        "Unknown error with code 418"
    );
}
