use std::path::PathBuf;
use thiserror::Error;

/// Failures that skip a file or abandon one glob walk but never stop the run.
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error walking directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

#[cfg(test)]
impl CombineError {
    pub fn path(&self) -> &PathBuf {
        match self {
            CombineError::Read { path, .. } | CombineError::Walk { path, .. } => path,
        }
    }
}
