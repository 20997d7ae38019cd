//! Shell-level errors: reading input and interpreting flags.
//!
//! Engine failures are not here. They are reported per token and never
//! stop the session.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("cannot find file '{path}'")]
    FileNotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidFlagValue { flag: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Classify a failure to read `path`.
    pub(crate) fn reading(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Read { path, source },
        }
    }
}
