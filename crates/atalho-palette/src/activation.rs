#![forbid(unsafe_code)]

//! Turning a committed result into a navigation effect.
//!
//! All scroll/navigation mutation flows through the [`Navigator`] seam —
//! upstream components only ever produce a *candidate* result. The shell
//! closes the palette and clears the query first, then hands the chosen
//! document to [`dispatch`], which picks between an in-page scroll and a
//! full navigation.

use tracing::debug;

use atalho_search::document::SearchDocument;

/// The host's navigation surface.
///
/// Implementations mutate real scroll/navigation state; tests record
/// calls instead. Nothing else in the palette is allowed to cause either
/// effect.
pub trait Navigator {
    /// Smooth-scroll to the in-page landmark for `fragment`.
    ///
    /// Returns `false` when no matching landmark exists — a silent no-op
    /// upstream, not an error.
    fn scroll_to_fragment(&mut self, fragment: &str) -> bool;

    /// Perform a full navigation to an absolute route path.
    fn navigate(&mut self, path: &str);
}

/// Dispatch the navigation effect for a chosen document.
///
/// Anchor urls scroll (absent landmarks are ignored); everything else
/// navigates. The caller has already closed the palette and cleared the
/// query — this function is the last step of the activation sequence.
pub fn dispatch(document: &SearchDocument, navigator: &mut dyn Navigator) {
    if let Some(fragment) = document.anchor_fragment() {
        let found = navigator.scroll_to_fragment(fragment);
        debug!(id = %document.id, fragment, found, "activated anchor result");
    } else {
        navigator.navigate(&document.url);
        debug!(id = %document.id, url = %document.url, "activated route result");
    }
}
