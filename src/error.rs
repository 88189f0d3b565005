//! Error types shared across the crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// The scan root itself could not be read. Anything below the root that
    /// fails to read is skipped instead of reported.
    #[error("failed to read {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed glob pattern, rejected before any scanning starts.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("config error: {0}")]
    Config(String),

    /// Terminal or other I/O failure outside the scan.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;
