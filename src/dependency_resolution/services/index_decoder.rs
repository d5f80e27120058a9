use crate::dependency_resolution::domain::SourceLocator;
use crate::shared::error::DepsError;
use crate::shared::Result;
use flate2::read::MultiGzDecoder;
use std::borrow::Cow;
use std::io::Read;
use tracing::{debug, warn};

/// Leading bytes of every gzip member (RFC 1952)
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Turns raw index bytes into text.
///
/// Bytes starting with the gzip magic are inflated (all members). A `.gz`
/// locator whose payload lacks the magic is decoded as plain text, since the
/// magic number is the authoritative signal. Invalid UTF-8 is replaced with
/// U+FFFD rather than failing the decode.
///
/// # Errors
/// Returns [`DepsError::IndexDecode`] when gzip-framed bytes cannot be inflated.
pub fn decode_index(locator: &SourceLocator, bytes: &[u8]) -> Result<String> {
    let payload: Cow<'_, [u8]> = if bytes.starts_with(&GZIP_MAGIC) {
        let inflated = inflate(bytes).map_err(|e| DepsError::IndexDecode {
            locator: locator.to_string(),
            details: e.to_string(),
        })?;
        debug!(
            compressed = bytes.len(),
            inflated = inflated.len(),
            "inflated gzip index"
        );
        Cow::Owned(inflated)
    } else {
        if locator.has_gzip_extension() {
            warn!(
                "{} has a .gz extension but is not gzip-compressed; reading it as plain text",
                locator
            );
        } else if let Some(ext @ ("xz" | "bz2" | "lzma" | "zst")) = locator.extension().as_deref() {
            warn!(
                "{} looks {}-compressed, which is not supported; use the .gz or uncompressed index",
                locator, ext
            );
        }
        Cow::Borrowed(bytes)
    };

    Ok(String::from_utf8_lossy(&payload).into_owned())
}

fn inflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() * 4);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
