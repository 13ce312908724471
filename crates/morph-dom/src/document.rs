//! Current page state
//!
//! One `Document` models the page an embedding shell is displaying. The body
//! is kept as markup and re-parsed on demand for click-target resolution;
//! delegation happens at the document level, so a wholesale body swap never
//! invalidates listener state.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DomError;
use crate::snapshot::PageSnapshot;
use crate::Result;

/// Viewport scroll offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub x: i32,
    pub y: i32,
}

/// Nearest ancestor anchor resolved from a click target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Raw `href` attribute, unresolved
    pub href: Option<String>,
    /// Explicit `target` attribute (frame/window name)
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Location of the displayed page
    pub url: Url,
    /// Current document title
    pub title: String,
    /// Inner markup of the document body
    pub body_html: String,
    /// Current viewport scroll offset
    pub scroll: ScrollPosition,
}

impl Document {
    /// Create an empty document at the given location.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: String::new(),
            body_html: String::new(),
            scroll: ScrollPosition::default(),
        }
    }

    /// Create a document with body markup already in place.
    pub fn with_body(url: Url, body_html: impl Into<String>) -> Self {
        Self {
            url,
            title: String::new(),
            body_html: body_html.into(),
            scroll: ScrollPosition::default(),
        }
    }

    /// Swap in a fetched page wholesale: location, title and body markup.
    pub fn apply_snapshot(&mut self, url: Url, snapshot: &PageSnapshot) {
        tracing::debug!(from = %self.url, to = %url, "Document swap");

        self.url = url;
        self.title = snapshot.title.clone();
        self.body_html = snapshot.body_html.clone();
    }

    /// Reset the viewport to the top of the page.
    pub fn reset_scroll(&mut self) {
        self.scroll = ScrollPosition::default();
    }

    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.scroll = ScrollPosition { x, y };
    }

    /// Resolve an href against the document location.
    pub fn resolve_href(&self, href: &str) -> Result<Url> {
        self.url
            .join(href)
            .map_err(|e| DomError::InvalidHref(format!("{}: {}", href, e)))
    }

    /// Resolve the nearest ancestor anchor (the target itself counts) from a
    /// click target identified by a CSS selector.
    ///
    /// Returns `Ok(None)` when the selector matches nothing or no anchor
    /// encloses the match. A malformed selector is an error.
    pub fn anchor_at(&self, target_selector: &str) -> Result<Option<Anchor>> {
        let selector = Selector::parse(target_selector)
            .map_err(|e| DomError::Selector(e.to_string()))?;

        let fragment = Html::parse_fragment(&self.body_html);
        let Some(target) = fragment.select(&selector).next() else {
            return Ok(None);
        };

        let anchor = std::iter::once(target)
            .chain(target.ancestors().filter_map(ElementRef::wrap))
            .find(|el| el.value().name().eq_ignore_ascii_case("a"));

        Ok(anchor.map(|a| Anchor {
            href: a.value().attr("href").map(str::to_string),
            target: a.value().attr("target").map(str::to_string),
        }))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::with_body(
            Url::parse("https://example.com/a").unwrap(),
            "<main>\
               <a id=\"go\" href=\"/b\"><span id=\"inner\">next</span></a>\
               <a id=\"tab\" href=\"/b\" target=\"_blank\">tab</a>\
               <a id=\"bare\">no href</a>\
               <span id=\"plain\">text</span>\
             </main>",
        )
    }

    #[test]
    fn test_anchor_from_nested_target() {
        let anchor = doc().anchor_at("#inner").unwrap().unwrap();
        assert_eq!(anchor.href.as_deref(), Some("/b"));
        assert_eq!(anchor.target, None);
    }

    #[test]
    fn test_anchor_is_target_itself() {
        let anchor = doc().anchor_at("#tab").unwrap().unwrap();
        assert_eq!(anchor.href.as_deref(), Some("/b"));
        assert_eq!(anchor.target.as_deref(), Some("_blank"));
    }

    #[test]
    fn test_no_enclosing_anchor() {
        assert_eq!(doc().anchor_at("#plain").unwrap(), None);
    }

    #[test]
    fn test_anchor_without_href() {
        let anchor = doc().anchor_at("#bare").unwrap().unwrap();
        assert_eq!(anchor.href, None);
    }

    #[test]
    fn test_selector_matching_nothing() {
        assert_eq!(doc().anchor_at("#missing").unwrap(), None);
    }

    #[test]
    fn test_malformed_selector_is_error() {
        assert!(matches!(
            doc().anchor_at("###"),
            Err(DomError::Selector(_))
        ));
    }

    #[test]
    fn test_apply_snapshot_swaps_wholesale() {
        let mut document = doc();
        document.set_scroll(0, 400);

        let snapshot = PageSnapshot {
            title: "Page B".to_string(),
            body_html: "<p>b</p>".to_string(),
        };
        let target = Url::parse("https://example.com/b").unwrap();
        document.apply_snapshot(target.clone(), &snapshot);
        document.reset_scroll();

        assert_eq!(document.url, target);
        assert_eq!(document.title, "Page B");
        assert_eq!(document.body_html, "<p>b</p>");
        assert_eq!(document.scroll, ScrollPosition::default());
    }

    #[test]
    fn test_resolve_href() {
        let document = doc();
        assert_eq!(
            document.resolve_href("/b").unwrap().as_str(),
            "https://example.com/b"
        );
        assert_eq!(
            document.resolve_href("#section").unwrap().as_str(),
            "https://example.com/a#section"
        );
        assert!(document.resolve_href("http://[").is_err());
    }

    #[test]
    fn test_display_title_falls_back_to_url() {
        let mut document = doc();
        assert_eq!(document.display_title(), "https://example.com/a");
        document.title = "A".to_string();
        assert_eq!(document.display_title(), "A");
    }
}
