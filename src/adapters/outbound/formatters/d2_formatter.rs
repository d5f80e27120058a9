use crate::dependency_resolution::domain::ResultGraph;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt::Write;

/// D2Formatter adapter: emits D2 diagram source for the resolved graph
///
/// Every distinct edge is written once as `"from" -> "to"`. Names are always
/// quoted because D2 reads an unquoted `.` as container nesting
/// (`python3.11` would otherwise become `python3` > `11`).
pub struct D2Formatter;

impl D2Formatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for D2Formatter {
    fn default() -> Self {
        Self::new()
    }
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl GraphFormatter for D2Formatter {
    fn format(&self, graph: &ResultGraph) -> Result<String> {
        let mut out = String::new();
        writeln!(
            out,
            "# dependencies of {} (max depth {})",
            graph.root(),
            graph.max_depth()
        )?;
        writeln!(out, "direction: down")?;

        let mut edges: HashSet<(&str, &str)> = HashSet::new();
        for node in graph.nodes() {
            if node.dependencies.is_empty() && node.depth == 0 {
                writeln!(out, "{}", quote(node.name.as_str()))?;
            }
            for dep in &node.dependencies {
                if edges.insert((node.name.as_str(), dep.as_str())) {
                    writeln!(out, "{} -> {}", quote(node.name.as_str()), quote(dep.as_str()))?;
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::PackageName;
    use crate::dependency_resolution::services::{build_dependency_graph, parse_test_graph_text};

    fn render(text: &str, root: &str) -> String {
        let map = parse_test_graph_text(text);
        let graph = build_dependency_graph(&PackageName::new(root).unwrap(), &map, 5);
        D2Formatter::new().format(&graph).unwrap()
    }

    #[test]
    fn test_d2_edges_are_deduplicated() {
        let output = render("A: B, B, python3.11\nB: A\n", "A");
        let edges: Vec<&str> = output.lines().filter(|l| l.contains("->")).collect();
        assert_eq!(
            edges,
            vec![
                "\"A\" -> \"B\"",
                "\"A\" -> \"python3.11\"",
                "\"B\" -> \"A\""
            ]
        );
    }

    #[test]
    fn test_d2_isolated_root() {
        let output = render("", "lonely");
        assert!(output.lines().any(|l| l == "\"lonely\""));
        assert!(!output.contains("->"));
    }

    #[test]
    fn test_d2_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
