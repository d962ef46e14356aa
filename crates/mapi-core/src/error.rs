#![deny(unsafe_code)]

use std::path::PathBuf;

/// Failures of a source collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl SourceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("source {name}: {source}")]
    Source {
        name: String,
        #[source]
        source: SourceError,
    },
}

impl CoreError {
    pub(crate) fn from_source(name: &str, source: SourceError) -> Self {
        Self::Source {
            name: name.to_string(),
            source,
        }
    }
}
