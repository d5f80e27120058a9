use crate::dependency_resolution::domain::ResultGraph;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt::Write;

/// AsciiTreeFormatter adapter: renders the graph as an indented tree from the root
///
/// A package's subtree is printed once; later occurrences (diamonds and
/// cycles) are marked `(*)`. Packages that were listed but not expanded
/// (beyond the depth bound, or unknown to the index) appear as leaves.
pub struct AsciiTreeFormatter;

impl AsciiTreeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AsciiTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct Frame<'a> {
    name: &'a str,
    prefix: String,
    /// `None` for the root, otherwise whether this is the last sibling
    last: Option<bool>,
}

impl GraphFormatter for AsciiTreeFormatter {
    fn format(&self, graph: &ResultGraph) -> Result<String> {
        let mut out = String::new();
        let mut expanded: HashSet<&str> = HashSet::new();
        let mut stack = vec![Frame {
            name: graph.root().as_str(),
            prefix: String::new(),
            last: None,
        }];

        // Explicit stack: a long dependency chain must not grow the call stack.
        while let Some(frame) = stack.pop() {
            let connector = match frame.last {
                None => "",
                Some(true) => "└── ",
                Some(false) => "├── ",
            };
            let children = graph.get(frame.name).filter(|deps| !deps.is_empty());
            let first_expansion = children.is_some() && expanded.insert(frame.name);
            let marker = if children.is_some() && !first_expansion {
                " (*)"
            } else {
                ""
            };
            writeln!(out, "{}{}{}{}", frame.prefix, connector, frame.name, marker)?;

            let Some(children) = children.filter(|_| first_expansion) else {
                continue;
            };
            let child_prefix = match frame.last {
                None => String::new(),
                Some(true) => format!("{}    ", frame.prefix),
                Some(false) => format!("{}│   ", frame.prefix),
            };
            let last_index = children.len() - 1;
            for (i, child) in children.iter().enumerate().rev() {
                stack.push(Frame {
                    name: child.as_str(),
                    prefix: child_prefix.clone(),
                    last: Some(i == last_index),
                });
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

    fn render(text: &str, root: &str, depth: usize) -> String {
        let map = parse_test_graph_text(text);
        let graph = build_dependency_graph(&PackageName::new(root).unwrap(), &map, depth);
        AsciiTreeFormatter::new().format(&graph).unwrap()
    }

    #[test]
    fn test_tree_simple() {
        let output = render("A: B, C\nB: D\n", "A", 5);
        assert_eq!(output, "A\n├── B\n│   └── D\n└── C\n");
    }

    #[test]
    fn test_tree_marks_repeated_subtree() {
        let output = render("A: B, C\nB: D\nC: B\nD:\n", "A", 5);
        assert_eq!(output, "A\n├── B\n│   └── D\n└── C\n    └── B (*)\n");
    }

    #[test]
    fn test_tree_marks_cycle() {
        let output = render("A: B\nB: A\n", "A", 5);
        assert_eq!(output, "A\n└── B\n    └── A (*)\n");
    }

    #[test]
    fn test_tree_depth_bound_leaves() {
        let output = render("A: B\nB: C\nC: D\n", "A", 1);
        assert_eq!(output, "A\n└── B\n    └── C\n");
    }

    #[test]
    fn test_tree_root_only() {
        let output = render("", "lonely", 3);
        assert_eq!(output, "lonely\n");
    }
}
