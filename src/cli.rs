use clap::Parser;
use std::path::PathBuf;

use crate::config::RawSettings;

/// Resolve the dependency graph of a Debian package
#[derive(Parser, Debug)]
#[command(name = "deb-deps")]
#[command(version)]
#[command(
    about = "Resolve the dependency graph of a Debian package from a Packages index",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./deb-deps.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package whose dependencies are resolved
    #[arg(short, long)]
    pub package: Option<String>,

    /// Packages or Packages.gz index: http(s) URL or local path
    #[arg(short, long, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Read the flat test-graph file instead of a package index
    #[arg(long)]
    pub test_mode: bool,

    /// Test-graph file with `name: dep1, dep2` lines
    #[arg(short, long, value_name = "FILE")]
    pub test_repo_path: Option<String>,

    /// Maximum traversal depth, inclusive (default: 5)
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Output format: text, tree, json or d2
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line layer of the settings; unset flags stay `None`.
    pub fn to_settings(&self) -> RawSettings {
        RawSettings {
            package: self.package.clone(),
            repo_url: self.repo_url.clone(),
            test_repo_path: self.test_repo_path.clone(),
            test_mode: self.test_mode.then_some(true),
            max_depth: self.max_depth,
            format: self.format.clone(),
            output: self.output.clone(),
        }
    }

    /// Log filter matching the `-v` count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("deb-deps").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_minimal_args() {
        let args = parse(&["--package", "bash", "--repo-url", "https://mirror/Packages.gz"]);
        assert_eq!(args.package.as_deref(), Some("bash"));
        assert_eq!(args.repo_url.as_deref(), Some("https://mirror/Packages.gz"));
        assert!(!args.test_mode);
        assert!(args.max_depth.is_none());
        assert!(!args.show_config);
    }

    #[test]
    fn test_parse_short_flags() {
        let args = parse(&["-p", "A", "-t", "graph.txt", "--test-mode", "-d", "2", "-f", "tree"]);
        assert_eq!(args.package.as_deref(), Some("A"));
        assert_eq!(args.test_repo_path.as_deref(), Some("graph.txt"));
        assert!(args.test_mode);
        assert_eq!(args.max_depth, Some(2));
        assert_eq!(args.format.as_deref(), Some("tree"));
    }

    #[test]
    fn test_negative_depth_reaches_validation() {
        let args = parse(&["-p", "A", "--max-depth", "-3"]);
        assert_eq!(args.max_depth, Some(-3));
    }

    #[test]
    fn test_non_numeric_depth_is_rejected_by_clap() {
        let result = Args::try_parse_from(["deb-deps", "--max-depth", "deep"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_settings_leaves_unset_flags_empty() {
        let settings = parse(&["-p", "A"]).to_settings();
        assert_eq!(settings.package.as_deref(), Some("A"));
        assert_eq!(settings.test_mode, None);
        assert_eq!(settings.format, None);
        assert_eq!(settings.output, None);
    }

    #[test]
    fn test_to_settings_sets_test_mode() {
        let settings = parse(&["--test-mode"]).to_settings();
        assert_eq!(settings.test_mode, Some(true));
    }

    #[test]
    fn test_log_filter_follows_verbosity() {
        assert_eq!(parse(&[]).log_filter(), "warn");
        assert_eq!(parse(&["-v"]).log_filter(), "info");
        assert_eq!(parse(&["-vv"]).log_filter(), "debug");
        assert_eq!(parse(&["-vvvv"]).log_filter(), "trace");
    }
}
