use std::fmt;
use std::path::{Path, PathBuf};

/// Where a package index (or test graph) is read from
///
/// Anything with a `scheme://` prefix is remote, except `file://` URLs which
/// name a local path. Everything else is a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Remote(String),
    Local(PathBuf),
}

impl SourceLocator {
    pub fn parse(locator: &str) -> Self {
        let locator = locator.trim();
        match locator.split_once("://") {
            Some((scheme, rest)) if is_scheme(scheme) => {
                if scheme.eq_ignore_ascii_case("file") {
                    SourceLocator::Local(PathBuf::from(rest))
                } else {
                    SourceLocator::Remote(locator.to_string())
                }
            }
            _ => SourceLocator::Local(PathBuf::from(locator)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SourceLocator::Remote(_))
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            SourceLocator::Local(path) => Some(path),
            SourceLocator::Remote(_) => None,
        }
    }

    /// Final path component's extension, lowercased, ignoring any URL query.
    pub fn extension(&self) -> Option<String> {
        let path = match self {
            SourceLocator::Remote(url) => url.split(['?', '#']).next().unwrap_or(url.as_str()),
            SourceLocator::Local(path) => path.to_str()?,
        };
        let file_name = path.rsplit(['/', '\\']).next()?;
        let (_, ext) = file_name.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }

    pub fn has_gzip_extension(&self) -> bool {
        self.extension().is_some_and(|ext| ext == "gz")
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocator::Remote(url) => write!(f, "{}", url),
            SourceLocator::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url_is_remote() {
        let locator = SourceLocator::parse("http://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz");
        assert!(locator.is_remote());
        assert!(locator.has_gzip_extension());
    }

    #[test]
    fn test_parse_plain_path_is_local() {
        let locator = SourceLocator::parse("/var/lib/apt/lists/Packages");
        assert_eq!(
            locator.local_path(),
            Some(Path::new("/var/lib/apt/lists/Packages"))
        );
        assert!(!locator.has_gzip_extension());
    }

    #[test]
    fn test_parse_file_url_is_local() {
        let locator = SourceLocator::parse("file:///srv/mirror/Packages.GZ");
        assert_eq!(locator.local_path(), Some(Path::new("/srv/mirror/Packages.GZ")));
        assert!(locator.has_gzip_extension());
    }

    #[test]
    fn test_extension_ignores_query_string() {
        let locator = SourceLocator::parse("https://mirror.example/Packages.gz?raw=1");
        assert_eq!(locator.extension().as_deref(), Some("gz"));
    }

    #[test]
    fn test_extension_of_directory_with_dot() {
        let locator = SourceLocator::parse("https://mirror.example/debian.d/Packages");
        assert_eq!(locator.extension(), None);
    }

    #[test]
    fn test_invalid_scheme_is_local() {
        let locator = SourceLocator::parse("./1bad://Packages");
        assert!(!locator.is_remote());
    }

    #[test]
    fn test_display() {
        let locator = SourceLocator::parse("https://mirror.example/Packages");
        assert_eq!(locator.to_string(), "https://mirror.example/Packages");
    }
}
