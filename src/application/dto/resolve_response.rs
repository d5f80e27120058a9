use crate::dependency_resolution::domain::ResultGraph;

/// ResolveResponse - response DTO from the dependency resolution use case
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    /// Sub-graph reachable from the requested package
    pub graph: ResultGraph,
    /// Number of packages the source declared
    pub indexed_packages: usize,
    /// Whether the requested package was declared by the source at all
    pub package_found: bool,
}

impl ResolveResponse {
    pub fn new(graph: ResultGraph, indexed_packages: usize, package_found: bool) -> Self {
        Self {
            graph,
            indexed_packages,
            package_found,
        }
    }
}
