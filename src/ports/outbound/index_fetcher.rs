use crate::dependency_resolution::domain::SourceLocator;
use crate::shared::Result;

/// IndexFetcher port for obtaining the raw bytes of a package index
///
/// This port abstracts where the index lives (HTTP mirror, local disk).
/// Implementations return the payload untouched; decompression and text
/// decoding happen in the domain.
pub trait IndexFetcher {
    /// Fetches the full payload behind `locator`
    ///
    /// # Errors
    /// Returns `DepsError::SourceUnavailable` if:
    /// - The network request fails or returns a non-success status
    /// - The local file does not exist or cannot be read
    fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>>;
}
