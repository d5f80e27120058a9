use crate::dependency_resolution::domain::ResultGraph;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GraphDocument<'a> {
    root: &'a str,
    max_depth: usize,
    package_count: usize,
    packages: Vec<PackageEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct PackageEntry<'a> {
    name: &'a str,
    depth: usize,
    dependencies: Vec<&'a str>,
}

/// JsonFormatter adapter: the resolved graph as a pretty-printed JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, graph: &ResultGraph) -> Result<String> {
        let document = GraphDocument {
            root: graph.root().as_str(),
            max_depth: graph.max_depth(),
            package_count: graph.len(),
            packages: graph
                .nodes()
                .iter()
                .map(|node| PackageEntry {
                    name: node.name.as_str(),
                    depth: node.depth,
                    dependencies: node.dependencies.iter().map(|d| d.as_str()).collect(),
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
