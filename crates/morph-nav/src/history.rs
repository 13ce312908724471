//! Session history management
//!
//! An in-memory stack of visited entries with a traversal cursor. Pushing a
//! new entry truncates any forward entries (a branch taken after going back
//! replaces the abandoned future), and the stack length is bounded by
//! dropping the oldest entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigationError;
use crate::Result;

const DEFAULT_MAX_ENTRIES: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: Url,
    pub title: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(url: Url, title: String) -> Self {
        Self {
            url,
            title,
            visited_at: Utc::now(),
        }
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            self.url.as_str()
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    index: Option<usize>,
    max_entries: usize,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_ENTRIES)
    }

    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: None,
            max_entries: max_entries.max(1),
        }
    }

    /// Append an entry at the cursor, discarding any forward entries.
    pub fn push(&mut self, url: Url, title: String) {
        if let Some(index) = self.index {
            self.entries.truncate(index + 1);
        }

        self.entries.push(HistoryEntry::new(url, title));

        if self.entries.len() > self.max_entries {
            let overflow = self.entries.len() - self.max_entries;
            self.entries.drain(0..overflow);
        }

        self.index = Some(self.entries.len() - 1);

        tracing::debug!(
            index = self.entries.len() - 1,
            len = self.entries.len(),
            "History push"
        );
    }

    /// Move the cursor one entry back.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        match self.index {
            Some(index) if index > 0 => {
                self.index = Some(index - 1);
                self.entries.get(index - 1)
            }
            _ => None,
        }
    }

    /// Move the cursor one entry forward.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        match self.index {
            Some(index) if index + 1 < self.entries.len() => {
                self.index = Some(index + 1);
                self.entries.get(index + 1)
            }
            _ => None,
        }
    }

    /// Move the cursor by a signed offset.
    pub fn go(&mut self, delta: isize) -> Result<&HistoryEntry> {
        let index = self.index.unwrap_or(0);
        let target = index as isize + delta;

        if self.index.is_none() || target < 0 || target as usize >= self.entries.len() {
            return Err(NavigationError::OutOfRange { delta, index });
        }

        self.index = Some(target as usize);
        Ok(&self.entries[target as usize])
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.index.and_then(|index| self.entries.get(index))
    }

    /// Update the current entry's title without adding a visit.
    pub fn set_current_title(&mut self, title: &str) {
        if title.trim().is_empty() {
            return;
        }

        if let Some(index) = self.index {
            if let Some(entry) = self.entries.get_mut(index) {
                entry.title = title.to_string();
            }
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(index) if index > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 < self.entries.len())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://example.com{}", path)).unwrap()
    }

    #[test]
    fn test_push_and_traverse() {
        let mut history = SessionHistory::new();
        history.push(url("/a"), "A".to_string());
        history.push(url("/b"), "B".to_string());
        history.push(url("/c"), "C".to_string());

        assert_eq!(history.len(), 3);
        assert_eq!(history.current().unwrap().url, url("/c"));
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());

        assert_eq!(history.back().unwrap().url, url("/b"));
        assert_eq!(history.back().unwrap().url, url("/a"));
        assert!(history.back().is_none());

        assert_eq!(history.forward().unwrap().url, url("/b"));
        assert_eq!(history.forward().unwrap().url, url("/c"));
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = SessionHistory::new();
        history.push(url("/a"), "A".to_string());
        history.push(url("/b"), "B".to_string());
        history.push(url("/c"), "C".to_string());

        history.back();
        history.back();
        history.push(url("/d"), "D".to_string());

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].url, url("/a"));
        assert_eq!(history.entries()[1].url, url("/d"));
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_length_bound_drops_oldest() {
        let mut history = SessionHistory::with_limit(3);
        for path in ["/a", "/b", "/c", "/d"] {
            history.push(url(path), String::new());
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0].url, url("/b"));
        assert_eq!(history.current().unwrap().url, url("/d"));
    }

    #[test]
    fn test_go_out_of_range() {
        let mut history = SessionHistory::new();
        assert!(history.go(-1).is_err());

        history.push(url("/a"), String::new());
        history.push(url("/b"), String::new());

        assert_eq!(history.go(-1).unwrap().url, url("/a"));
        assert!(matches!(
            history.go(-1),
            Err(NavigationError::OutOfRange { delta: -1, index: 0 })
        ));
        assert_eq!(history.go(1).unwrap().url, url("/b"));
    }

    #[test]
    fn test_set_current_title_skips_empty() {
        let mut history = SessionHistory::new();
        history.push(url("/a"), String::new());

        assert_eq!(history.current().unwrap().display_title(), "https://example.com/a");

        history.set_current_title("  ");
        assert_eq!(history.current().unwrap().title, "");

        history.set_current_title("Page A");
        assert_eq!(history.current().unwrap().title, "Page A");
        assert_eq!(history.current().unwrap().display_title(), "Page A");
    }
}
