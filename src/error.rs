//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user, already phrased for the `ls: ` prefix
/// the entry point prepends.
#[derive(Debug, Error)]
pub enum LsError {
    /// A malformed flag token. Fatal: reported before any listing happens.
    #[error("invalid option -- '{0}'")]
    InvalidOption(String),

    /// A path that could not be opened, read, or stat'ed. Recoverable at
    /// the per-path level; fatal to a recursive walk.
    #[error("cannot access '{}': {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output buffering failed. In-memory rendering makes this practically
    /// unreachable, but it is propagated rather than unwrapped.
    #[error("write error: {0}")]
    Write(#[from] io::Error),
}

impl LsError {
    /// Wrap an I/O failure with the path it occurred on.
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LsError>;
