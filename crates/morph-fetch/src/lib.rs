//! Morph Page Fetching
//!
//! The transport seam for the navigation interceptor. `PageFetcher` is
//! dyn-usable so hosts and tests can substitute transports; `HttpFetcher`
//! is the shipped reqwest-backed implementation.

mod error;
mod fetcher;
mod http;

pub use error::FetchError;
pub use fetcher::PageFetcher;
pub use http::HttpFetcher;

pub type Result<T> = std::result::Result<T, FetchError>;
