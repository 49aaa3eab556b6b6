use std::sync::LazyLock;

use regex::Regex;

/// Phrases that mark an error message as worth mining for field names.
const TRIGGER_PHRASES: [&str; 3] = [
    "Field must have selections",
    "Field 'assume' doesn't exist on type 'Query'",
    "Did you mean",
];

static BACKTICK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid backtick pattern"));
static QUOTED_FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"field '(.+?)'").expect("valid quoted field pattern"));

pub fn has_trigger(message: &str) -> bool {
    TRIGGER_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
}

/// Pulls candidate field names out of a server error message.
///
/// Two independent rules, first match each:
/// - the first backtick-quoted name;
/// - the first name following `field '` up to the closing quote.
///
/// The backtick candidate comes first. Both may fire and may be equal.
pub fn extract_keywords(message: &str) -> Vec<String> {
    [&*BACKTICK_NAME, &*QUOTED_FIELD_NAME]
        .into_iter()
        .filter_map(|pattern| pattern.captures(message))
        .filter_map(|caps| caps.get(1))
        .map(|found| found.as_str().to_string())
        .collect()
}
