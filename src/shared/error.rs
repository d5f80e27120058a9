use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish configuration mistakes from
/// runtime failures such as an unreachable package index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the dependency graph was resolved and presented
    Success = 0,
    /// The configuration file or merged settings failed validation
    InvalidConfig = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, decode error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidConfig => write!(f, "Invalid Configuration (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each failure.
#[derive(Debug, Error)]
pub enum DepsError {
    #[error("Package index unavailable: {locator}\nDetails: {details}\n\n💡 Hint: Check the repository URL or path and your network connection")]
    SourceUnavailable { locator: String, details: String },

    #[error("Failed to decode package index: {locator}\nDetails: {details}\n\n💡 Hint: The file looks gzip-compressed but is corrupt or truncated. Try downloading it again")]
    IndexDecode { locator: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidConfig.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidConfig),
            "Invalid Configuration (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_source_unavailable_display() {
        let error = DepsError::SourceUnavailable {
            locator: "http://deb.example.org/Packages.gz".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package index unavailable"));
        assert!(display.contains("http://deb.example.org/Packages.gz"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_index_decode_display() {
        let error = DepsError::IndexDecode {
            locator: "Packages.gz".to_string(),
            details: "invalid gzip header".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to decode package index"));
        assert!(display.contains("invalid gzip header"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DepsError::FileWriteError {
            path: PathBuf::from("/test/graph.d2"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/graph.d2"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DepsError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
