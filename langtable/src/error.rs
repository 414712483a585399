//! All error types for the langtable crate.
//!
//! Every variant is a construction-time failure. Resolving a key never fails.

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::Format;

/// Boxed decoder error, as produced by the format dispatch table.
pub type DecodeError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid translations directory `{}`: {reason}", .path.display())]
    Configuration { path: PathBuf, reason: &'static str },

    #[error("failed to parse `{}` as {format}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        #[source]
        source: DecodeError,
    },

    #[error("I/O error at `{}`: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate key `{key}` for language `{language}` in `{}`", .path.display())]
    DuplicateKey {
        language: String,
        key: String,
        path: PathBuf,
    },

    #[error("unknown format `{0}`")]
    UnknownFormat(String),
}

impl Error {
    /// Creates a filesystem error for `path`.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    /// Returns `true` for [`Error::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
