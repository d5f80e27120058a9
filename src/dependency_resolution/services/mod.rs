mod control_parser;
mod graph_builder;
mod index_decoder;
mod test_graph_parser;

pub use control_parser::parse_control_text;
pub use graph_builder::build_dependency_graph;
pub use index_decoder::decode_index;
pub use test_graph_parser::parse_test_graph_text;
