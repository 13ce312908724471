//! Morph Core
//!
//! Coordination layer for the navigation interceptor: the capability gate,
//! listener lifecycle, click interception and the transition-orchestrating
//! navigation task. The embedding shell owns event delivery and the native
//! transition primitive; Morph owns the page state that flows through them.

mod config;
mod error;
mod navigator;
mod task;
mod transition;

pub use config::Config;
pub use error::CoreError;
pub use navigator::{ClickAction, Navigator};
pub use task::{NavigationOrigin, NavigationOutcome, NavigationTask};
pub use transition::{DisabledTransitions, InstantTransitions, TransitionBackend};

// Re-export core components
pub use morph_dom::{Anchor, Document, DomError, PageSnapshot, ScrollPosition};
pub use morph_fetch::{FetchError, HttpFetcher, PageFetcher};
pub use morph_nav::{
    ClickResolution, HistoryEntry, LinkFilter, NavigationError, PassReason, SessionHistory,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
