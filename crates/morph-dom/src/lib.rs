//! Morph Document Model
//!
//! Transient page state for the navigation interceptor. There are no durable
//! entities: a `Document` is the current title, body markup, URL and scroll
//! position, mutated in place on each committed navigation. Fetched pages are
//! parsed into a `PageSnapshot` before being swapped in wholesale.

mod document;
mod error;
mod snapshot;

pub use document::{Anchor, Document, ScrollPosition};
pub use error::DomError;
pub use snapshot::PageSnapshot;

pub type Result<T> = std::result::Result<T, DomError>;
