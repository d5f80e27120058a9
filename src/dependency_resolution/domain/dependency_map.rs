use super::{DependencyList, PackageName};
use std::collections::HashMap;

/// DependencyMap aggregate: package name to its direct dependency list
///
/// Built once from parser output. Inserting a name that is already present
/// replaces the previous list (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: HashMap<PackageName, DependencyList>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `dependencies` for `package`, returning the list it replaced.
    pub fn insert(
        &mut self,
        package: PackageName,
        dependencies: DependencyList,
    ) -> Option<DependencyList> {
        self.entries.insert(package, dependencies)
    }

    /// Direct dependencies of `package`; an unknown package has none.
    pub fn dependencies_of(&self, package: &str) -> &[PackageName] {
        self.entries
            .get(package)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get(&self, package: &str) -> Option<&DependencyList> {
        self.entries.get(package)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &DependencyList)> {
        self.entries.iter()
    }

    /// Total number of dependency edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl FromIterator<(PackageName, DependencyList)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (PackageName, DependencyList)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (package, dependencies) in iter {
            map.insert(package, dependencies);
        }
        map
    }
}
