use crate::dependency_resolution::domain::{DependencyMap, PackageName, ResultGraph};
use std::collections::HashSet;
use tracing::debug;

/// Builds the dependency graph reachable from `start` within `max_depth` levels.
///
/// Traversal is breadth-first, one level at a time; level 0 is `start` and a
/// level is expanded while its index is `<= max_depth`. A package's
/// dependencies are recorded once, at the depth of its first visit, so cycles
/// and diamonds collapse. Packages missing from `dependency_map` are recorded
/// with an empty dependency list.
///
/// This is a pure algorithm: deterministic for the same inputs, no I/O.
pub fn build_dependency_graph(
    start: &PackageName,
    dependency_map: &DependencyMap,
    max_depth: usize,
) -> ResultGraph {
    let mut graph = ResultGraph::new(start.clone(), max_depth);
    let mut visited: HashSet<PackageName> = HashSet::new();
    let mut level: Vec<PackageName> = vec![start.clone()];
    let mut depth = 0usize;

    while !level.is_empty() && depth <= max_depth {
        let mut next_level = Vec::new();

        for package in level {
            if visited.contains(&package) {
                continue;
            }
            visited.insert(package.clone());

            let dependencies = dependency_map.dependencies_of(package.as_str()).to_vec();
            // Duplicates may pass; the visited check above collapses them.
            next_level.extend(
                dependencies
                    .iter()
                    .filter(|dep| !visited.contains(*dep))
                    .cloned(),
            );
            graph.record(package, depth, dependencies);
        }

        debug!(depth, expanded = graph.len(), frontier = next_level.len(), "level done");
        level = next_level;
        depth += 1;
    }

    graph
}
