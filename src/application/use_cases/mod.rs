/// Use cases module containing application orchestration
mod resolve_dependencies;

pub use resolve_dependencies::ResolveDependenciesUseCase;
