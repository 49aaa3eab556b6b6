use fuzzer_logging::{fuzz_debug, fuzz_trace};

use crate::{classify, extract_keywords, Classification, Effect, Msg, RunState, Warning};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: RunState, msg: Msg) -> (RunState, Vec<Effect>) {
    let effects = match msg {
        Msg::RequestDispatched => {
            state.record_request();
            Vec::new()
        }
        Msg::ResponseReceived(outcome) => match classify(outcome) {
            Classification::TransportFailed(cause) => vec![Effect::Warn(Warning::Transport(cause))],
            Classification::InvalidJson => vec![Effect::Warn(Warning::InvalidJson)],
            Classification::Halt(status) => {
                state.halt(status);
                vec![Effect::Halt { status }]
            }
            Classification::Messages(messages) => {
                fuzz_trace!("{} error message(s) carry a trigger phrase", messages.len());
                let keywords = messages
                    .iter()
                    .flat_map(|message| extract_keywords(message))
                    .collect::<Vec<_>>();
                absorb_all(&mut state, keywords)
            }
        },
    };

    (state, effects)
}

fn absorb_all(state: &mut RunState, keywords: Vec<String>) -> Vec<Effect> {
    keywords
        .into_iter()
        .filter(|keyword| {
            let fresh = state.absorb(keyword);
            if !fresh {
                fuzz_debug!("Dropping already seen keyword {keyword:?}");
            }
            fresh
        })
        .map(Effect::KeywordDiscovered)
        .collect()
}
