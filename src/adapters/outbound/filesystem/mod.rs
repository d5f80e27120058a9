/// Filesystem adapters for file I/O operations
mod file_fetcher;
mod file_writer;

pub use file_fetcher::FileSystemFetcher;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
