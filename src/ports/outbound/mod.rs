/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod graph_formatter;
pub mod index_fetcher;
pub mod output_presenter;
pub mod progress_reporter;

pub use graph_formatter::GraphFormatter;
pub use index_fetcher::IndexFetcher;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
