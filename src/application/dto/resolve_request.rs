use crate::dependency_resolution::domain::{PackageName, SourceLocator};
use std::path::PathBuf;

/// Where dependency data comes from for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencySource {
    /// A Debian `Packages` index, remote or local, optionally gzip-compressed
    PackageIndex(SourceLocator),
    /// A local file in the flat `name: dep1, dep2` notation
    TestGraph(PathBuf),
}

impl DependencySource {
    pub fn locator(&self) -> SourceLocator {
        match self {
            DependencySource::PackageIndex(locator) => locator.clone(),
            DependencySource::TestGraph(path) => SourceLocator::Local(path.clone()),
        }
    }

    pub fn is_test_graph(&self) -> bool {
        matches!(self, DependencySource::TestGraph(_))
    }
}

/// ResolveRequest - request DTO for the dependency resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package whose dependencies are resolved
    pub package: PackageName,
    /// Index or test graph to read
    pub source: DependencySource,
    /// Inclusive bound on breadth-first expansion levels
    pub max_depth: usize,
}

impl ResolveRequest {
    pub fn new(package: PackageName, source: DependencySource, max_depth: usize) -> Self {
        Self {
            package,
            source,
            max_depth,
        }
    }
}
