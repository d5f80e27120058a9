use crate::dependency_resolution::domain::SourceLocator;
use crate::ports::outbound::IndexFetcher;
use crate::shared::error::DepsError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_INDEX_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

/// FileSystemFetcher adapter for reading package indexes and test graphs from disk
///
/// Reads are guarded: symbolic links and non-regular files are rejected and
/// files above the size limit are refused before being read.
pub struct FileSystemFetcher {
    max_size: u64,
}

impl FileSystemFetcher {
    pub fn new() -> Self {
        Self {
            max_size: MAX_INDEX_SIZE,
        }
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    fn safe_read(&self, path: &Path) -> Result<Vec<u8>> {
        let size = validate_regular_file(path, "package index")?;
        validate_file_size(size, path, self.max_size)?;
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

impl Default for FileSystemFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexFetcher for FileSystemFetcher {
    fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>> {
        let Some(path) = locator.local_path() else {
            anyhow::bail!("{} is a URL, not a local path", locator);
        };

        if !path.exists() {
            return Err(DepsError::SourceUnavailable {
                locator: locator.to_string(),
                details: "file does not exist".to_string(),
            }
            .into());
        }

        let bytes = self
            .safe_read(path)
            .map_err(|e| DepsError::SourceUnavailable {
                locator: locator.to_string(),
                details: e.to_string(),
            })?;

        info!(path = %path.display(), bytes = bytes.len(), "read index");
        Ok(bytes)
    }
}
