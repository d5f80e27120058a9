/// Dependency resolution domain - pure logic with no I/O
///
/// `domain` holds the value objects and aggregates, `services` the parsers,
/// the index decoder and the breadth-first graph builder.
pub mod domain;
pub mod services;
