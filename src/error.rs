//! Error types surfaced by the engine and its configuration layer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageViewError {
    #[error("title count ({titles}) must match page count ({pages})")]
    CountMismatch { titles: usize, pages: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no config directory could be resolved")]
    NoConfigDir,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
