#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A recoverable per-request problem to report.
    Warn(Warning),
    /// A keyword seen for the first time: announce it and persist it.
    KeywordDiscovered(String),
    /// Stop dispatching batches; the summary is still produced.
    Halt { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    Transport(String),
    InvalidJson,
}
