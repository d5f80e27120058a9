//! Configuration support for deb-deps.
//!
//! Settings come from an optional YAML file (`deb-deps.config.yml`) and from
//! command-line flags, which override the file field by field. The merged
//! [`RawSettings`] go through a single validation pass that yields either a
//! [`ResolvedConfig`] or a typed [`ConfigError`].

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::application::dto::{DependencySource, OutputFormat, ResolveRequest};
use crate::dependency_resolution::domain::{PackageName, SourceLocator};

pub const CONFIG_FILENAME: &str = "deb-deps.config.yml";

/// Depth used when neither the file nor the command line sets one
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Configuration errors, each carrying a hint for the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    FileParse { path: PathBuf, details: String },

    #[error("Invalid config: 'package' is required\n\n💡 Hint: Pass --package <NAME> or set 'package' in {CONFIG_FILENAME}")]
    MissingPackage,

    #[error("Invalid config: package name '{name}' is not valid: {reason}")]
    InvalidPackage { name: String, reason: String },

    #[error("Invalid config: 'repo_url' is required unless test mode is enabled\n\n💡 Hint: Point it at a Packages or Packages.gz index, e.g. http://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz")]
    MissingRepoUrl,

    #[error("Invalid config: repo_url '{url}' {reason}\n\n💡 Hint: Use an http(s):// URL or the path of an existing file")]
    InvalidRepoUrl { url: String, reason: String },

    #[error("Invalid config: 'test_repo_path' is required when test mode is enabled")]
    MissingTestRepoPath,

    #[error("Invalid config: max_depth must be an integer >= 0, got {value}")]
    NegativeMaxDepth { value: i64 },

    #[error("Invalid config: '{field}' must be yes/no (or true/false), got '{value}'")]
    InvalidToggle { field: &'static str, value: String },

    #[error("Invalid config: {message}")]
    InvalidFormat { message: String },
}

/// A yes/no switch; YAML 1.2 reads `yes` as a string, so both forms are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Toggle {
    Bool(bool),
    Word(String),
}

impl Toggle {
    fn resolve(&self, field: &'static str) -> Result<bool, ConfigError> {
        match self {
            Toggle::Bool(value) => Ok(*value),
            Toggle::Word(word) => match word.trim().to_lowercase().as_str() {
                "yes" | "true" | "on" => Ok(true),
                "no" | "false" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidToggle {
                    field,
                    value: word.clone(),
                }),
            },
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package: Option<String>,
    pub repo_url: Option<String>,
    pub test_repo_path: Option<String>,
    pub test_mode: Option<Toggle>,
    pub max_depth: Option<i64>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Converts the file schema into mergeable settings.
    pub fn into_settings(self) -> Result<RawSettings, ConfigError> {
        let test_mode = self
            .test_mode
            .map(|toggle| toggle.resolve("test_mode"))
            .transpose()?;

        Ok(RawSettings {
            package: self.package,
            repo_url: self.repo_url,
            test_repo_path: self.test_repo_path,
            test_mode,
            max_depth: self.max_depth,
            format: self.format,
            output: self.output,
        })
    }
}

/// Unvalidated settings from one layer (file or command line)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSettings {
    pub package: Option<String>,
    pub repo_url: Option<String>,
    pub test_repo_path: Option<String>,
    pub test_mode: Option<bool>,
    pub max_depth: Option<i64>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}

impl RawSettings {
    /// Layers `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn overlay(self, overrides: RawSettings) -> RawSettings {
        RawSettings {
            package: overrides.package.or(self.package),
            repo_url: overrides.repo_url.or(self.repo_url),
            test_repo_path: overrides.test_repo_path.or(self.test_repo_path),
            test_mode: overrides.test_mode.or(self.test_mode),
            max_depth: overrides.max_depth.or(self.max_depth),
            format: overrides.format.or(self.format),
            output: overrides.output.or(self.output),
        }
    }
}

/// Fully validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub package: PackageName,
    pub source: DependencySource,
    pub max_depth: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn to_request(&self) -> ResolveRequest {
        ResolveRequest::new(self.package.clone(), self.source.clone(), self.max_depth)
    }

    /// `(name, value)` pairs for `--show-config`
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let (test_mode, source) = match &self.source {
            DependencySource::PackageIndex(locator) => ("no", locator.to_string()),
            DependencySource::TestGraph(path) => ("yes", path.display().to_string()),
        };
        vec![
            ("package", self.package.to_string()),
            ("test_mode", test_mode.to_string()),
            ("source", source),
            ("max_depth", self.max_depth.to_string()),
            ("format", self.format.to_string()),
            (
                "output",
                self.output
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stdout".to_string()),
            ),
        ]
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validates merged settings in one pass.
pub fn validate(settings: RawSettings) -> Result<ResolvedConfig, ConfigError> {
    let package = non_empty(settings.package).ok_or(ConfigError::MissingPackage)?;
    let package = PackageName::new(package.clone()).map_err(|e| ConfigError::InvalidPackage {
        name: package,
        reason: e.to_string(),
    })?;

    let max_depth = match settings.max_depth {
        None => DEFAULT_MAX_DEPTH,
        Some(value) => {
            usize::try_from(value).map_err(|_| ConfigError::NegativeMaxDepth { value })?
        }
    };

    let format = match non_empty(settings.format) {
        None => OutputFormat::default(),
        Some(value) => value
            .parse::<OutputFormat>()
            .map_err(|message| ConfigError::InvalidFormat { message })?,
    };

    let source = if settings.test_mode.unwrap_or(false) {
        let path = non_empty(settings.test_repo_path).ok_or(ConfigError::MissingTestRepoPath)?;
        DependencySource::TestGraph(PathBuf::from(path))
    } else {
        let url = non_empty(settings.repo_url).ok_or(ConfigError::MissingRepoUrl)?;
        DependencySource::PackageIndex(validate_repo_url(&url)?)
    };

    Ok(ResolvedConfig {
        package,
        source,
        max_depth,
        format,
        output: settings.output,
    })
}

fn validate_repo_url(url: &str) -> Result<SourceLocator, ConfigError> {
    let locator = SourceLocator::parse(url);
    match &locator {
        SourceLocator::Remote(remote) => {
            if !(remote.starts_with("http://") || remote.starts_with("https://")) {
                return Err(ConfigError::InvalidRepoUrl {
                    url: url.to_string(),
                    reason: "uses an unsupported scheme".to_string(),
                });
            }
        }
        SourceLocator::Local(path) => {
            if !path.exists() {
                return Err(ConfigError::InvalidRepoUrl {
                    url: url.to_string(),
                    reason: "is neither a URL nor an existing file".to_string(),
                });
            }
        }
    }
    Ok(locator)
}
