use crate::dependency_resolution::domain::{DependencyMap, PackageName};
use tracing::{debug, trace};

/// Parses the flat test-graph notation into a [`DependencyMap`].
///
/// Each line reads `name: dep1, dep2 dep3`; commas and whitespace both
/// separate names. Lines without a colon or with an unusable name are
/// skipped, and a repeated name replaces the earlier line.
pub fn parse_test_graph_text(text: &str) -> DependencyMap {
    let mut map = DependencyMap::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        let Some((name, deps)) = line.split_once(':') else {
            if !line.is_empty() {
                trace!(line = line_no + 1, "no colon, skipping");
            }
            continue;
        };

        let Ok(package) = PackageName::new(name.trim()) else {
            trace!(line = line_no + 1, "invalid package name, skipping");
            continue;
        };

        let dependencies = deps
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .filter_map(|token| PackageName::new(token).ok())
            .collect();

        map.insert(package, dependencies);
    }

    debug!(packages = map.len(), "parsed test graph");
    map
}
