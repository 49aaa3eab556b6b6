use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("error creating output file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Destination for newly discovered keywords, one per call.
pub trait KeywordSink: Send {
    fn append(&mut self, keyword: &str) -> Result<(), SinkError>;
}

/// Newline-delimited keyword file, truncated on open.
///
/// Every keyword reaches the file as soon as it is appended, so an abrupt
/// exit never loses earlier discoveries.
#[derive(Debug)]
pub struct FileKeywordSink {
    path: PathBuf,
    writer: LineWriter<File>,
}

impl FileKeywordSink {
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = File::create(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: LineWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and syncs the file, then releases it.
    pub fn close(mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(())
    }
}

impl KeywordSink for FileKeywordSink {
    fn append(&mut self, keyword: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{keyword}")?;
        self.writer.flush()?;
        Ok(())
    }
}
