//! deb-deps - dependency graph resolver for Debian package indexes
//!
//! This library reads a Debian `Packages` index (plain or gzip-compressed,
//! from a mirror or a local file) or a flat test-graph file, and resolves the
//! dependencies of one package breadth-first up to a maximum depth.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Package names, the dependency
//!   map, the result graph and the pure parsing/traversal services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deb_deps::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let fetcher = SourceRouter::new(HttpIndexFetcher::new()?, FileSystemFetcher::new());
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveDependenciesUseCase::new(fetcher, progress_reporter);
//!
//! // Execute
//! let locator = SourceLocator::parse(
//!     "http://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz",
//! );
//! let request = ResolveRequest::new(
//!     PackageName::new("bash")?,
//!     DependencySource::PackageIndex(locator),
//!     2,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = AsciiTreeFormatter::new().format(&response.graph)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemFetcher, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        AsciiTreeFormatter, D2Formatter, JsonFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::HttpIndexFetcher;
    pub use crate::adapters::outbound::SourceRouter;
    pub use crate::application::dto::{
        DependencySource, OutputFormat, ResolveRequest, ResolveResponse,
    };
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        DependencyMap, PackageName, ResolvedNode, ResultGraph, SourceLocator,
    };
    pub use crate::dependency_resolution::services::{
        build_dependency_graph, decode_index, parse_control_text, parse_test_graph_text,
    };
    pub use crate::ports::outbound::{
        GraphFormatter, IndexFetcher, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
