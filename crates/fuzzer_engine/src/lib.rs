//! Fuzzer engine: wordlist and output IO, HTTP transport and the session loop.
mod session;
mod sink;
mod transport;
mod types;
mod wordlist;

pub use session::{Session, SessionError};
pub use sink::{FileKeywordSink, KeywordSink, SinkError};
pub use transport::{ProbeSettings, ReqwestTransport, Transport, TransportSetupError};
pub use types::{EventSink, FuzzEvent};
pub use wordlist::{load_wordlist, WordlistError};
