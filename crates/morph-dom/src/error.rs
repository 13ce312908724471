//! Document error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid href: {0}")]
    InvalidHref(String),
}
