use crate::adapters::outbound::formatters::{
    AsciiTreeFormatter, D2Formatter, JsonFormatter, TextFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// This factory selects the formatter adapter for an output format. It
/// belongs in the application layer because it maps an application-level
/// choice onto infrastructure adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deb_deps::application::dto::OutputFormat;
    /// use deb_deps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Tree => Box::new(AsciiTreeFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::D2 => Box::new(D2Formatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deb_deps::application::dto::OutputFormat;
    /// use deb_deps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::D2);
    /// assert_eq!(message, "📝 Rendering D2 diagram source...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering dependency list...",
            OutputFormat::Tree => "📝 Rendering ASCII dependency tree...",
            OutputFormat::Json => "📝 Rendering JSON output...",
            OutputFormat::D2 => "📝 Rendering D2 diagram source...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::PackageName;
    use crate::dependency_resolution::services::{build_dependency_graph, parse_test_graph_text};

    #[test]
    fn test_each_format_renders_root() {
        let map = parse_test_graph_text("root: leaf\n");
        let graph = build_dependency_graph(&PackageName::new("root").unwrap(), &map, 1);

        for format in [
            OutputFormat::Text,
            OutputFormat::Tree,
            OutputFormat::Json,
            OutputFormat::D2,
        ] {
            let output = FormatterFactory::create(format).format(&graph).unwrap();
            assert!(output.contains("root"), "{} output lacks root", format);
            assert!(output.contains("leaf"), "{} output lacks leaf", format);
        }
    }

    #[test]
    fn test_progress_message_tree() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Tree),
            "📝 Rendering ASCII dependency tree..."
        );
    }
}
