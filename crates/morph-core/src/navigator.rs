//! Navigation interceptor
//!
//! Central state container for the interceptor: the shared document, the
//! session history, the armed-listener state and the seams the host plugs
//! into (page fetcher, transition backend). The host delivers click and
//! traversal events; the navigator answers with either a default-navigation
//! verdict or a runnable `NavigationTask`.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use url::Url;

use morph_dom::Document;
use morph_fetch::{HttpFetcher, PageFetcher};
use morph_nav::{ClickResolution, HistoryEntry, LinkFilter, SessionHistory};

use crate::config::Config;
use crate::task::{NavigationOrigin, NavigationTask};
use crate::transition::TransitionBackend;
use crate::Result;

/// Armed listener state. Click delegation and history traversal are modeled
/// as two independently armed document-level listeners.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Listeners {
    pub(crate) click: bool,
    pub(crate) popstate: bool,
}

impl Listeners {
    pub(crate) fn rearm_click(&mut self) {
        self.click = true;
    }
}

/// Verdict on a delivered click.
pub enum ClickAction {
    /// Default browser navigation proceeds; this component did nothing
    Default,
    /// Default navigation is prevented; drive the task to swap the page
    Intercepted(NavigationTask),
}

pub struct Navigator {
    config: Config,
    fetcher: Arc<dyn PageFetcher>,
    backend: Arc<dyn TransitionBackend>,
    filter: LinkFilter,
    document: Arc<RwLock<Document>>,
    history: Arc<RwLock<SessionHistory>>,
    listeners: Arc<RwLock<Listeners>>,
}

impl Navigator {
    /// Create an interceptor for an empty document at the given location.
    pub fn new(
        config: Config,
        fetcher: Arc<dyn PageFetcher>,
        backend: Arc<dyn TransitionBackend>,
        initial_url: Url,
    ) -> Self {
        Self::with_document(config, fetcher, backend, Document::new(initial_url))
    }

    /// Create an interceptor over an already-loaded document.
    pub fn with_document(
        config: Config,
        fetcher: Arc<dyn PageFetcher>,
        backend: Arc<dyn TransitionBackend>,
        document: Document,
    ) -> Self {
        let mut history = SessionHistory::with_limit(config.max_history_entries);
        history.push(document.url.clone(), document.title.clone());

        Self {
            config,
            fetcher,
            backend,
            filter: LinkFilter::new(),
            document: Arc::new(RwLock::new(document)),
            history: Arc::new(RwLock::new(history)),
            listeners: Arc::new(RwLock::new(Listeners::default())),
        }
    }

    /// Create an interceptor wired to the HTTP fetcher from the config.
    pub fn with_http(
        config: Config,
        backend: Arc<dyn TransitionBackend>,
        initial_url: Url,
    ) -> Result<Self> {
        let fetcher = HttpFetcher::with_options(
            &config.user_agent,
            Duration::from_secs(config.request_timeout_secs),
            config.max_redirects,
        )?;

        Ok(Self::new(config, Arc::new(fetcher), backend, initial_url))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Lifecycle ===

    /// Arm the delegated click and history-traversal listeners.
    ///
    /// Returns false and arms nothing when the environment lacks the
    /// transition primitive; every link then keeps default navigation.
    pub fn install(&self) -> bool {
        if !self.backend.is_supported() {
            tracing::info!("View transitions unsupported; interception disabled");
            return false;
        }

        let mut listeners = self.listeners.write();
        listeners.click = true;
        listeners.popstate = true;

        tracing::info!("Navigation interception installed");
        true
    }

    /// Disarm both listeners.
    pub fn uninstall(&self) {
        let mut listeners = self.listeners.write();
        listeners.click = false;
        listeners.popstate = false;

        tracing::info!("Navigation interception uninstalled");
    }

    pub fn is_installed(&self) -> bool {
        let listeners = self.listeners.read();
        listeners.click && listeners.popstate
    }

    // === Click interception ===

    /// Qualify a click delivered by the host's delegated listener.
    ///
    /// `ClickAction::Intercepted` means default navigation was prevented and
    /// the returned task carries the whole fetch-and-swap orchestration;
    /// `ClickAction::Default` means this component stays out of the way.
    pub fn on_click(&self, target_selector: &str) -> Result<ClickAction> {
        if !self.listeners.read().click {
            return Ok(ClickAction::Default);
        }

        let resolution = {
            let document = self.document.read();
            self.filter.resolve(&document, target_selector)?
        };

        match resolution {
            ClickResolution::Intercept(url) => {
                tracing::debug!(url = %url, "Click intercepted");
                Ok(ClickAction::Intercepted(
                    self.task(url, NavigationOrigin::LinkClick),
                ))
            }
            ClickResolution::PassThrough(reason) => {
                tracing::trace!(reason = ?reason, "Click passed through");
                Ok(ClickAction::Default)
            }
        }
    }

    // === History traversal ===

    /// Move one entry back and return the swap task for it.
    pub fn back(&self) -> Option<NavigationTask> {
        if !self.listeners.read().popstate {
            return None;
        }

        let url = self.history.write().back()?.url.clone();
        Some(self.task(url, NavigationOrigin::HistoryTraversal))
    }

    /// Move one entry forward and return the swap task for it.
    pub fn forward(&self) -> Option<NavigationTask> {
        if !self.listeners.read().popstate {
            return None;
        }

        let url = self.history.write().forward()?.url.clone();
        Some(self.task(url, NavigationOrigin::HistoryTraversal))
    }

    /// Re-run the swap against the current entry without moving the cursor,
    /// for hosts that manage traversal themselves and only deliver the
    /// after-the-fact popstate event.
    pub fn on_popstate(&self) -> Option<NavigationTask> {
        if !self.listeners.read().popstate {
            return None;
        }

        let url = self.history.read().current()?.url.clone();
        Some(self.task(url, NavigationOrigin::HistoryTraversal))
    }

    // === State accessors ===

    pub fn document(&self) -> Document {
        self.document.read().clone()
    }

    pub fn current_url(&self) -> Url {
        self.document.read().url.clone()
    }

    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history.read().entries().to_vec()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.read().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.read().can_go_forward()
    }

    fn task(&self, url: Url, origin: NavigationOrigin) -> NavigationTask {
        NavigationTask::new(
            url,
            origin,
            Arc::clone(&self.fetcher),
            Arc::clone(&self.backend),
            Arc::clone(&self.document),
            Arc::clone(&self.history),
            Arc::clone(&self.listeners),
        )
    }
}
