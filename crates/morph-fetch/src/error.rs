//! Fetch error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Page unavailable: {0}")]
    Unavailable(String),
}
