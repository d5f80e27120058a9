use crate::shared::error::DepsError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a local package index or test graph (256 MB).
///
/// An uncompressed `Packages` file for a full Debian suite is well below this.
pub const MAX_INDEX_SIZE: u64 = 256 * 1024 * 1024;

/// Rejects `path` when it is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point to the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that `path` exists, is not a symlink and is a regular file.
///
/// Returns the file size so callers can apply [`validate_file_size`].
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point to the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Rejects files larger than `max_size` bytes.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "file is too large ({} bytes, maximum is {} bytes)",
                file_size, max_size
            ),
            hint: "Use a per-suite, per-architecture Packages index".to_string(),
        }
        .into());
    }
    Ok(())
}
