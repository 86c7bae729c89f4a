//! File-backed persistence for the movie collection.
//!
//! The whole collection is one pretty-printed JSON array. Saves go to a
//! sibling temporary file that is then renamed over the target, so readers
//! never observe a half-written document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use watchlist_core::movie::Movie;

/// Errors reading or writing the data file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and writes the movie collection at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection. A missing file is an empty collection.
    pub async fn load(&self) -> Result<Vec<Movie>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Overwrite the file with the full collection.
    pub async fn save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let mut body = serde_json::to_vec_pretty(movies)?;
        body.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(count = movies.len(), path = %self.path.display(), "Saved movies");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
