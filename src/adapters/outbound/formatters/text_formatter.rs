use crate::dependency_resolution::domain::ResultGraph;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter: one `name: dep1, dep2` line per visited package
///
/// Lines follow visit order. The notation is the same one the test-graph
/// parser reads, so the output can be fed back in test mode.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, graph: &ResultGraph) -> Result<String> {
        let mut out = String::new();
        for node in graph.nodes() {
            let deps: Vec<&str> = node.dependencies.iter().map(|d| d.as_str()).collect();
            if deps.is_empty() {
                writeln!(out, "{}:", node.name)?;
            } else {
                writeln!(out, "{}: {}", node.name, deps.join(", "))?;
            }
        }
        Ok(out)
    }
}
