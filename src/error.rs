use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure confined to a single input file; the run continues past it.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path:?}: {source:#}")]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to persist {path:?} as table '{table}': {source:#}")]
    Persist {
        path: PathBuf,
        table: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ConvertError {
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::Read { path, .. } | ConvertError::Persist { path, .. } => path.as_path(),
        }
    }
}
