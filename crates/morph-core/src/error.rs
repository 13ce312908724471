//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Document error: {0}")]
    Dom(#[from] morph_dom::DomError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] morph_nav::NavigationError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] morph_fetch::FetchError),
}
