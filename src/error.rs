use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("You need at least two files to compare. Got {found}")]
    InsufficientInput { found: usize },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = DiffError> = std::result::Result<T, E>;

impl DiffError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DiffError::Io {
            path: path.into(),
            source,
        }
    }
}
