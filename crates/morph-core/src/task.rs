//! Transition-orchestrating navigation task
//!
//! One task per qualified click or history traversal. The task suspends at
//! the fetch; further tasks may be created while it is in flight, and
//! overlapping tasks interleave their document writes with the last write
//! winning. The cancellation token is host surface only: the engine never
//! cancels a task itself.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use url::Url;
use uuid::Uuid;

use morph_dom::{Document, PageSnapshot};
use morph_fetch::PageFetcher;
use morph_nav::SessionHistory;

use crate::navigator::Listeners;
use crate::transition::TransitionBackend;
use crate::Result;

/// What started a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOrigin {
    /// A qualified link click; pushes a history entry on commit
    LinkClick,
    /// Back/forward traversal; the history cursor already moved
    HistoryTraversal,
}

/// Result of driving a navigation task to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOutcome {
    Completed {
        url: Url,
        title: String,
        pushed_history: bool,
    },
    Cancelled,
}

pub struct NavigationTask {
    id: Uuid,
    url: Url,
    origin: NavigationOrigin,
    cancel: CancellationToken,
    fetcher: Arc<dyn PageFetcher>,
    backend: Arc<dyn TransitionBackend>,
    document: Arc<RwLock<Document>>,
    history: Arc<RwLock<SessionHistory>>,
    listeners: Arc<RwLock<Listeners>>,
}

impl NavigationTask {
    pub(crate) fn new(
        url: Url,
        origin: NavigationOrigin,
        fetcher: Arc<dyn PageFetcher>,
        backend: Arc<dyn TransitionBackend>,
        document: Arc<RwLock<Document>>,
        history: Arc<RwLock<SessionHistory>>,
        listeners: Arc<RwLock<Listeners>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            origin,
            cancel: CancellationToken::new(),
            fetcher,
            backend,
            document,
            history,
            listeners,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn origin(&self) -> NavigationOrigin {
        self.origin
    }

    /// Token a host can use to abandon this task between its suspension
    /// points. A cancelled task leaves document and history untouched.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drive the transition: fetch, parse, swap, record history, re-arm the
    /// click listener and reset scroll, bracketed by the backend's
    /// before/after captures.
    pub async fn run(self) -> Result<NavigationOutcome> {
        tracing::debug!(
            task_id = %self.id,
            url = %self.url,
            origin = ?self.origin,
            "Navigation started"
        );

        if self.cancel.is_cancelled() {
            tracing::debug!(task_id = %self.id, "Navigation cancelled before fetch");
            return Ok(NavigationOutcome::Cancelled);
        }

        self.backend.capture_before(&self.document.read());

        let html = self.fetcher.fetch(&self.url).await?;

        if self.cancel.is_cancelled() {
            tracing::debug!(task_id = %self.id, "Navigation cancelled after fetch");
            return Ok(NavigationOutcome::Cancelled);
        }

        let snapshot = PageSnapshot::parse(&html);
        let title = snapshot.title.clone();

        {
            let mut document = self.document.write();
            document.apply_snapshot(self.url.clone(), &snapshot);
            document.reset_scroll();
        }

        let pushed_history = match self.origin {
            NavigationOrigin::LinkClick => {
                self.history.write().push(self.url.clone(), title.clone());
                true
            }
            NavigationOrigin::HistoryTraversal => {
                self.history.write().set_current_title(&title);
                false
            }
        };

        // Idempotent re-registration after the wholesale body swap.
        self.listeners.write().rearm_click();

        self.backend.capture_after(&self.document.read());

        tracing::info!(task_id = %self.id, url = %self.url, "Navigation committed");

        Ok(NavigationOutcome::Completed {
            url: self.url,
            title,
            pushed_history,
        })
    }
}

impl fmt::Debug for NavigationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationTask")
            .field("id", &self.id)
            .field("url", &self.url.as_str())
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
