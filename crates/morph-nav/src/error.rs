//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("History traversal out of range: {delta} from index {index}")]
    OutOfRange { delta: isize, index: usize },

    #[error("Document error: {0}")]
    Dom(#[from] morph_dom::DomError),
}
