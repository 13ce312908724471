//! Link qualification filter
//!
//! Decides whether a click anywhere in the document is intercepted as an
//! in-place navigation or passed through to default browser behavior. Only
//! same-origin http(s) links to a different path qualify; everything else
//! (external links, same-page fragments, anchors with an explicit target
//! frame, unresolvable hrefs) keeps its default handling.

use serde::{Deserialize, Serialize};
use url::Url;

use morph_dom::Document;

use crate::Result;

const INTERCEPTABLE_SCHEMES: &[&str] = &["http", "https"];

/// Why a click was not intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassReason {
    /// No anchor element encloses the click target
    NoAnchor,
    /// The anchor has no `href` attribute
    MissingHref,
    /// The href does not resolve against the document URL
    UnresolvableHref,
    /// The resolved URL is not http(s)
    UnsupportedScheme,
    /// The anchor declares an explicit target frame/window
    ExplicitTarget,
    /// The resolved origin differs from the document origin
    CrossOrigin,
    /// The resolved path equals the document path (same-page link)
    SamePath,
}

/// Outcome of qualifying a click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickResolution {
    /// Prevent default navigation and orchestrate a transition to this URL
    Intercept(Url),
    /// Let default browser navigation proceed
    PassThrough(PassReason),
}

pub struct LinkFilter;

impl LinkFilter {
    pub fn new() -> Self {
        Self
    }

    /// Qualify a click identified by its target selector against the
    /// current document.
    pub fn resolve(&self, document: &Document, target_selector: &str) -> Result<ClickResolution> {
        let Some(anchor) = document.anchor_at(target_selector)? else {
            return Ok(ClickResolution::PassThrough(PassReason::NoAnchor));
        };

        let Some(href) = anchor.href.as_deref() else {
            return Ok(ClickResolution::PassThrough(PassReason::MissingHref));
        };

        if anchor.target.is_some() {
            return Ok(ClickResolution::PassThrough(PassReason::ExplicitTarget));
        }

        let Ok(resolved) = document.resolve_href(href) else {
            return Ok(ClickResolution::PassThrough(PassReason::UnresolvableHref));
        };

        if !INTERCEPTABLE_SCHEMES.contains(&resolved.scheme()) {
            return Ok(ClickResolution::PassThrough(PassReason::UnsupportedScheme));
        }

        if resolved.origin() != document.url.origin() {
            return Ok(ClickResolution::PassThrough(PassReason::CrossOrigin));
        }

        if resolved.path() == document.url.path() {
            return Ok(ClickResolution::PassThrough(PassReason::SamePath));
        }

        Ok(ClickResolution::Intercept(resolved))
    }
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self::new()
    }
}
