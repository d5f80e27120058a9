/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the adapters,
/// keeping the domain layer isolated.
mod output_format;
mod resolve_request;
mod resolve_response;

pub use output_format::OutputFormat;
pub use resolve_request::{DependencySource, ResolveRequest};
pub use resolve_response::ResolveResponse;
