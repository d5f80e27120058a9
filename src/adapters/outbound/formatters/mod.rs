/// Formatter adapters for the supported graph output formats
mod d2_formatter;
mod json_formatter;
mod text_formatter;
mod tree_formatter;

pub use d2_formatter::D2Formatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
pub use tree_formatter::AsciiTreeFormatter;
