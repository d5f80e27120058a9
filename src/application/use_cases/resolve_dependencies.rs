use crate::application::dto::{DependencySource, ResolveRequest, ResolveResponse};
use crate::dependency_resolution::services::{
    build_dependency_graph, decode_index, parse_control_text, parse_test_graph_text,
};
use crate::ports::outbound::{IndexFetcher, ProgressReporter};
use crate::shared::Result;
use tracing::info;

/// ResolveDependenciesUseCase - core use case of the tool
///
/// Orchestrates one run: fetch the source once, decode it, parse it into a
/// dependency map and walk it breadth-first from the requested package.
///
/// # Type Parameters
/// * `F` - IndexFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<F, PR> {
    fetcher: F,
    progress_reporter: PR,
}

impl<F, PR> ResolveDependenciesUseCase<F, PR>
where
    F: IndexFetcher,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(fetcher: F, progress_reporter: PR) -> Self {
        Self {
            fetcher,
            progress_reporter,
        }
    }

    /// Executes the dependency resolution use case
    ///
    /// # Errors
    /// Returns an error if the source cannot be fetched (`SourceUnavailable`)
    /// or a gzip-framed payload is corrupt (`IndexDecode`). Parsing and
    /// traversal themselves never fail.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let locator = request.source.locator();

        // Step 1: Fetch raw bytes
        self.progress_reporter
            .report(&format!("📥 Fetching {}", locator));
        let bytes = self.fetcher.fetch(&locator)?;

        // Step 2: Decode (gzip sniffing, lossy UTF-8)
        self.progress_reporter
            .report(&format!("📖 Decoding {} byte(s)", bytes.len()));
        let text = decode_index(&locator, &bytes)?;

        // Step 3: Build the dependency map
        let dependency_map = match &request.source {
            DependencySource::PackageIndex(_) => {
                self.progress_reporter.report("🔍 Parsing package index...");
                parse_control_text(&text)
            }
            DependencySource::TestGraph(_) => {
                self.progress_reporter.report("🔍 Parsing test graph...");
                parse_test_graph_text(&text)
            }
        };
        info!(
            packages = dependency_map.len(),
            edges = dependency_map.edge_count(),
            "dependency map ready"
        );

        let package_found = dependency_map.contains(request.package.as_str());
        if !package_found {
            self.progress_reporter.report_error(&format!(
                "Warning: package '{}' is not declared in {}; it will be shown without dependencies.",
                request.package, locator
            ));
        }

        // Step 4: Breadth-first traversal
        self.progress_reporter.report(&format!(
            "📊 Resolving dependencies of {} (max depth {})...",
            request.package, request.max_depth
        ));
        let graph = build_dependency_graph(&request.package, &dependency_map, request.max_depth);

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} package(s) across {} level(s) out of {} indexed",
            graph.len(),
            graph.deepest_level() + 1,
            dependency_map.len()
        ));

        Ok(ResolveResponse::new(
            graph,
            dependency_map.len(),
            package_found,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::{PackageName, SourceLocator};
    use crate::shared::error::DepsError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    // Mock implementations for testing
    struct MockFetcher {
        bytes: Vec<u8>,
        requested: RefCell<Vec<SourceLocator>>,
    }

    impl MockFetcher {
        fn new(content: &str) -> Self {
            Self {
                bytes: content.as_bytes().to_vec(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl IndexFetcher for MockFetcher {
        fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>> {
            self.requested.borrow_mut().push(locator.clone());
            Ok(self.bytes.clone())
        }
    }

    struct FailingFetcher;

    impl IndexFetcher for FailingFetcher {
        fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>> {
            Err(DepsError::SourceUnavailable {
                locator: locator.to_string(),
                details: "mock outage".to_string(),
            }
            .into())
        }
    }

    #[derive(Default)]
    struct MockProgressReporter {
        warnings: RefCell<Vec<String>>,
    }

    impl ProgressReporter for MockProgressReporter {
        fn report(&self, _message: &str) {}
        fn report_error(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    fn name(s: &str) -> PackageName {
        PackageName::new(s).unwrap()
    }

    #[test]
    fn test_execute_with_package_index() {
        let index = "\
Package: app
Depends: libfoo (>= 1.2), libbar | libbaz

Package: libfoo
Depends: libc6

Package: libc6
";
        let use_case =
            ResolveDependenciesUseCase::new(MockFetcher::new(index), MockProgressReporter::default());
        let request = ResolveRequest::new(
            name("app"),
            DependencySource::PackageIndex(SourceLocator::parse("https://mirror.example/Packages")),
            3,
        );

        let response = use_case.execute(request).unwrap();

        assert!(response.package_found);
        assert_eq!(response.indexed_packages, 3);
        let order: Vec<&str> = response
            .graph
            .nodes()
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(order, vec!["app", "libfoo", "libbar", "libbaz", "libc6"]);
    }

    #[test]
    fn test_execute_with_test_graph_reads_local_path() {
        let fetcher = MockFetcher::new("A: B, C\nB: C\n");
        let use_case = ResolveDependenciesUseCase::new(fetcher, MockProgressReporter::default());
        let request = ResolveRequest::new(
            name("A"),
            DependencySource::TestGraph(PathBuf::from("graph.txt")),
            0,
        );

        let response = use_case.execute(request).unwrap();

        assert_eq!(response.graph.len(), 1);
        assert_eq!(response.graph.get("A").unwrap().len(), 2);
        assert_eq!(
            use_case.fetcher.requested.borrow().as_slice(),
            &[SourceLocator::Local(PathBuf::from("graph.txt"))]
        );
    }

    #[test]
    fn test_execute_warns_when_package_missing() {
        let use_case = ResolveDependenciesUseCase::new(
            MockFetcher::new("A: B\n"),
            MockProgressReporter::default(),
        );
        let request = ResolveRequest::new(
            name("Z"),
            DependencySource::TestGraph(PathBuf::from("graph.txt")),
            2,
        );

        let response = use_case.execute(request).unwrap();

        assert!(!response.package_found);
        assert_eq!(response.graph.len(), 1);
        let warnings = use_case.progress_reporter.warnings.borrow();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'Z' is not declared"));
    }

    #[test]
    fn test_execute_propagates_source_unavailable() {
        let use_case = ResolveDependenciesUseCase::new(FailingFetcher, MockProgressReporter::default());
        let request = ResolveRequest::new(
            name("A"),
            DependencySource::PackageIndex(SourceLocator::parse("https://mirror.example/Packages")),
            1,
        );

        let err = use_case.execute(request).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepsError>(),
            Some(DepsError::SourceUnavailable { .. })
        ));
    }
}
