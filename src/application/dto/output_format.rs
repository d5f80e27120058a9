/// Output format enumeration for the resolved dependency graph
///
/// This enum belongs in the application layer because both the CLI/config
/// (inbound side) and the formatters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `name: dep1, dep2` lines (default)
    #[default]
    Text,
    /// ASCII tree rooted at the target package
    Tree,
    /// JSON document
    Json,
    /// D2 diagram source
    D2,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "tree" | "ascii" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            "d2" => Ok(OutputFormat::D2),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'tree', 'json' or 'd2'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::D2 => write!(f, "d2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("tree").unwrap(), OutputFormat::Tree);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("d2").unwrap(), OutputFormat::D2);
    }

    #[test]
    fn test_output_format_aliases_and_case() {
        assert_eq!(OutputFormat::from_str("ASCII").unwrap(), OutputFormat::Tree);
        assert_eq!(OutputFormat::from_str(" Json ").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("markdown").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("markdown"));
        assert!(error.contains("d2"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Tree,
            OutputFormat::Json,
            OutputFormat::D2,
        ] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
