//! Parsed form of a fetched HTML document

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Title and body markup extracted from a fetched page.
///
/// Parsing is infallible: the HTML parser recovers from any input, and a
/// missing `<title>` or `<body>` yields an empty string for that field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Whitespace-normalized text of the first `<title>` element
    pub title: String,
    /// Inner markup of the `<body>` element
    pub body_html: String,
}

impl PageSnapshot {
    /// Parse a full HTML document into its swappable parts.
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);

        let title = Selector::parse("title")
            .ok()
            .and_then(|sel| doc.select(&sel).next())
            .map(|el| normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
            .unwrap_or_default();

        let body_html = Selector::parse("body")
            .ok()
            .and_then(|sel| doc.select(&sel).next())
            .map(|el| el.inner_html())
            .unwrap_or_default();

        Self { title, body_html }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body_html.trim().is_empty()
    }
}

fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
