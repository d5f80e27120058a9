use crate::dependency_resolution::domain::ResultGraph;
use crate::shared::Result;

/// GraphFormatter port for rendering a resolved dependency graph
///
/// This port abstracts the output notation (plain listing, ASCII tree,
/// JSON, D2 diagram source).
pub trait GraphFormatter {
    /// Renders `graph` as a string ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &ResultGraph) -> Result<String>;
}
