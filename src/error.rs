use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors of a single run. Nothing here is recovered from: the binary
/// reports the error and exits non-zero.
#[derive(Debug, Error)]
pub enum GaitError {
    #[error("unknown channel name: {0}")]
    UnknownChannel(String),

    #[error("trial {0} is not in the data folder")]
    TrialNotFound(String),

    #[error("data folder does not exist: {}", .0.display())]
    MissingDataDir(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid metadata: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Signal {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("failed to render {}: {message}", .path.display())]
    Plot { path: PathBuf, message: String },
}
