use serde::Serialize;

/// Renders a batch as a bare selection set: `{word1 word2 ...}`.
///
/// Words are not escaped; malformed queries are expected and useful.
pub fn build_query(batch: &[String]) -> String {
    format!("{{{}}}", batch.join(" "))
}

/// JSON request body for a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPayload<'a> {
    pub query: &'a str,
}

impl<'a> QueryPayload<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }
}
