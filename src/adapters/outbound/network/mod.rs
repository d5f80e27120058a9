/// Network adapters for package mirrors
mod http_fetcher;

pub use http_fetcher::HttpIndexFetcher;
