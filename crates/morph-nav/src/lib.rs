//! Morph Navigation
//!
//! Session history and the link qualification filter. A click anywhere in
//! the document resolves to either an intercepted same-origin navigation or
//! a pass-through to default browser behavior; committed navigations are
//! appended to an in-memory session history stack that back/forward
//! traversal revisits.

mod error;
mod filter;
mod history;

pub use error::NavigationError;
pub use filter::{ClickResolution, LinkFilter, PassReason};
pub use history::{HistoryEntry, SessionHistory};

pub type Result<T> = std::result::Result<T, NavigationError>;
