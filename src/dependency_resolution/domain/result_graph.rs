use super::{DependencyList, PackageName};
use std::collections::HashMap;

/// A package expanded during traversal, with the depth of its first visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub name: PackageName,
    pub depth: usize,
    pub dependencies: DependencyList,
}

/// ResultGraph aggregate: the sub-graph reachable from the root within the depth bound
///
/// Nodes are kept in visit order (breadth-first), so iteration is deterministic.
/// Each package appears at most once.
#[derive(Debug, Clone)]
pub struct ResultGraph {
    root: PackageName,
    max_depth: usize,
    nodes: Vec<ResolvedNode>,
    index: HashMap<PackageName, usize>,
}

impl ResultGraph {
    pub fn new(root: PackageName, max_depth: usize) -> Self {
        Self {
            root,
            max_depth,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Records the first visit of `name`. A repeated visit is ignored and
    /// returns `false`.
    pub(crate) fn record(
        &mut self,
        name: PackageName,
        depth: usize,
        dependencies: DependencyList,
    ) -> bool {
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.nodes.len());
        self.nodes.push(ResolvedNode {
            name,
            depth,
            dependencies,
        });
        true
    }

    pub fn root(&self) -> &PackageName {
        &self.root
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn get(&self, name: &str) -> Option<&DependencyList> {
        self.node(name).map(|node| &node.dependencies)
    }

    pub fn node(&self, name: &str) -> Option<&ResolvedNode> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Nodes in visit order.
    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest level at which a node was expanded.
    pub fn deepest_level(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Plain mapping view, mostly useful for comparisons.
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.nodes
            .iter()
            .map(|node| {
                (
                    node.name.to_string(),
                    node.dependencies.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect()
    }
}
