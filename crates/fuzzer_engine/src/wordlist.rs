use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fuzzer_logging::fuzz_info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("wordlist file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read wordlist {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a newline-delimited word list. Lines are trimmed; blank lines are dropped.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>, WordlistError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WordlistError::NotFound {
            path: path.to_path_buf(),
        },
        _ => WordlistError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let words = parse_wordlist(&String::from_utf8_lossy(&bytes));
    fuzz_info!("Loaded {} words from {:?}", words.len(), path);
    Ok(words)
}

fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
