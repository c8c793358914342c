use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::state::CodecError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Terminating failures. Any of these aborts the running workflow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("state file {}: {source}", path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("cannot {op} {}: {source}", path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("another store/restore run holds {}", path.display())]
    Locked { path: PathBuf },
}

impl Error {
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            url: url.into(),
            source,
        }
    }

    pub fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// What was being done to a file when an [`Error::Io`] happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Read,
    Write,
    Chown,
    Remove,
    Lock,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOp::Read => write!(f, "read"),
            IoOp::Write => write!(f, "write"),
            IoOp::Chown => write!(f, "set ownership of"),
            IoOp::Remove => write!(f, "remove"),
            IoOp::Lock => write!(f, "lock"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no queue items found")]
    EmptyQueue,

    #[error("queue item {item_id} plays from live input {path}, refusing to store")]
    UnsafeSource { path: String, item_id: u32 },

    #[error("playlist '{name}' not found in library, nothing to restore from")]
    OwnPlaylistMissing { name: String },
}

/// Non-fatal conditions collected by best-effort steps.
#[derive(Debug, Error)]
pub enum Warning {
    #[error("cannot pause playback after loading the playlist: {0}")]
    PauseFailed(#[source] Error),

    #[error("current item {item_id} is not in the queue, no track position recorded")]
    UnresolvedPosition { item_id: u32 },

    #[error("file {} does not exist", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("cannot delete file {}: {source}", path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path_and_operation() {
        let err = Error::io(
            IoOp::Chown,
            "/var/lib/queue.m3u",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("cannot set ownership of /var/lib/queue.m3u"));
    }

    #[test]
    fn test_validation_converts_into_error() {
        let err: Error = ValidationError::EmptyQueue.into();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyQueue)));
        assert_eq!(err.to_string(), "no queue items found");
    }
}
