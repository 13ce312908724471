//! View-transition capability seam
//!
//! The host supplies the native transition primitive: a capability probe and
//! the before/after snapshot capture that brackets the document swap so the
//! two visual states can be cross-faded.

use morph_dom::Document;

pub trait TransitionBackend: Send + Sync {
    /// Whether the native transition primitive exists in this environment.
    fn is_supported(&self) -> bool;

    /// Capture the visual state before the document mutates.
    fn capture_before(&self, document: &Document);

    /// Capture the visual state after the document mutates.
    fn capture_after(&self, document: &Document);
}

/// Environment without the transition primitive. Installing against this
/// backend arms nothing; every link keeps default browser navigation.
pub struct DisabledTransitions;

impl TransitionBackend for DisabledTransitions {
    fn is_supported(&self) -> bool {
        false
    }

    fn capture_before(&self, _document: &Document) {}

    fn capture_after(&self, _document: &Document) {}
}

/// Capability present but no animation wiring: swaps commit instantly.
pub struct InstantTransitions;

impl TransitionBackend for InstantTransitions {
    fn is_supported(&self) -> bool {
        true
    }

    fn capture_before(&self, document: &Document) {
        tracing::trace!(url = %document.url, "Transition capture (before)");
    }

    fn capture_after(&self, document: &Document) {
        tracing::trace!(url = %document.url, "Transition capture (after)");
    }
}
