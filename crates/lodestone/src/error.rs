use std::path::PathBuf;
use thiserror::Error;

/// Error type for lookup failures.
///
/// An unresolvable partial is not an error; lookups report it as
/// `Ok(None)`. Errors are reserved for broken inputs a lookup cannot
/// work around, such as an unreadable or malformed config file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("{0}")]
    Other(String),
}

impl Error {
    #[must_use]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
