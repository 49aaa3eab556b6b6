use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("batch size must be a positive integer, got {0}")]
    NonPositiveBatchSize(i64),
    #[error("invalid header format: {0:?}. Use 'Header-Name: value' format")]
    MalformedHeader(String),
}
