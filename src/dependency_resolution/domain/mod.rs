pub mod dependency_map;
pub mod package;
pub mod result_graph;
pub mod source_locator;

pub use dependency_map::DependencyMap;
pub use package::{DependencyList, PackageName};
pub use result_graph::{ResolvedNode, ResultGraph};
pub use source_locator::SourceLocator;
