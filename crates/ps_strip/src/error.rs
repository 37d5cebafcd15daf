use std::io;
use std::path::PathBuf;

use ps_parser::ParseError;

/// Why a file could not be stripped.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    /// Unreadable or unwritable file, including non-UTF-8 content.
    #[error("error opening {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid Python.
    #[error("invalid source: {0}")]
    Parse(#[from] ParseError),

    /// The stripped output no longer parses. Always a bug in the transform.
    #[error("error parsing cleaned source: {0}")]
    Validation(#[source] ParseError),

    /// The top-level path is neither a file nor a directory.
    #[error("the path {} does not exist", .0.display())]
    PathNotFound(PathBuf),
}

impl StripError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StripError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable tag, used in JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            StripError::Io { .. } => "io",
            StripError::Parse(_) => "parse",
            StripError::Validation(_) => "validation",
            StripError::PathNotFound(_) => "path_not_found",
        }
    }
}
