use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{Error, Result};

/// One saved HTML page, read fully into memory and immutable for the run.
///
/// The raw text is held behind an `Arc` so the parse pass can take it onto
/// the blocking pool without copying the page.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    raw: Arc<String>,
}

impl Document {
    /// Reads the whole file. A missing or unreadable file is fatal.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            raw: Arc::new(raw),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Cheap handle for `spawn_blocking` closures.
    pub fn share(&self) -> Arc<String> {
        Arc::clone(&self.raw)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
