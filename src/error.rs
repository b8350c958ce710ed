use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a graph or rendering it to an image.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be read or output file could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, missing or mistyped fields, out-of-range values.
    #[error("data error: {0}")]
    Data(String),

    /// Canvas or export failure, including unsupported output formats.
    #[error("render error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
