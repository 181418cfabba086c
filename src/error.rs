use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures at the edges: configuration and batch input. Extraction itself
/// never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid infobox row: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
