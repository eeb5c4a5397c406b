#![forbid(unsafe_code)]

//! Debounced query ownership.
//!
//! The [`QueryController`] owns the raw query string. Edits restart a
//! debounce deadline; the match itself runs synchronously inside
//! [`QueryController::tick`] once the quiet period elapses, and only the
//! most recently scheduled match may publish — anything scheduled against
//! a superseded query is cancelled before it fires.
//!
//! Blank queries bypass the debounce entirely: the pending deadline is
//! cancelled and the caller is told to clear results synchronously, so an
//! emptied search box never shows stale hits.

use std::time::Duration;

use tracing::{debug, trace};

use atalho_core::debounce::Debounce;
use atalho_search::document::ResolvedDocument;
use atalho_search::matcher::{Matcher, SearchHit};

/// Quiet period between the last keystroke and match execution.
pub const DEBOUNCE_MS: u64 = 200;

/// Outcome of a query edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEdit {
    /// Query is non-empty; a match was scheduled behind the debounce.
    Scheduled,
    /// Query became empty; results must be cleared synchronously.
    Cleared,
}

/// Owns the query string and the single live match slot.
#[derive(Debug)]
pub struct QueryController {
    query: String,
    debounce: Debounce,
    /// Generation allowed to publish; `None` while nothing is in flight.
    live: Option<u64>,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryController {
    /// Controller with the standard debounce delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEBOUNCE_MS))
    }

    /// Controller with a custom debounce delay (tests use short delays).
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            query: String::new(),
            debounce: Debounce::new(delay),
            live: None,
        }
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a match is scheduled but not yet published.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.live.is_some()
    }

    /// Replace the whole query (keystroke or programmatic change).
    pub fn set_query(&mut self, query: impl Into<String>) -> QueryEdit {
        self.query = query.into();
        self.after_edit()
    }

    /// Append one typed character.
    pub fn push_char(&mut self, ch: char) -> QueryEdit {
        self.query.push(ch);
        self.after_edit()
    }

    /// Remove the last typed character.
    pub fn pop_char(&mut self) -> QueryEdit {
        self.query.pop();
        self.after_edit()
    }

    /// Clear the query. Equivalent to setting it to `""`.
    pub fn clear(&mut self) -> QueryEdit {
        self.query.clear();
        self.after_edit()
    }

    /// Restart the debounce for the current (non-empty) query, e.g. after
    /// a locale change invalidated the text the last match ran against.
    pub fn reschedule(&mut self) -> QueryEdit {
        self.after_edit()
    }

    fn after_edit(&mut self) -> QueryEdit {
        if self.query.trim().is_empty() {
            // Blank queries clear instantly; nothing may fire later.
            self.debounce.cancel();
            self.live = None;
            trace!("query blank, pending match cancelled");
            QueryEdit::Cleared
        } else {
            let generation = self.debounce.schedule();
            self.live = Some(generation);
            trace!(query = %self.query, generation, "match scheduled");
            QueryEdit::Scheduled
        }
    }

    /// Advance time. When the debounce elapses, the match for the current
    /// query runs synchronously and its hits are returned for publication.
    ///
    /// Returns `None` while the quiet period is still running, and forever
    /// after for deadlines that were superseded or cancelled.
    pub fn tick(
        &mut self,
        delta: Duration,
        matcher: &Matcher,
        documents: &[ResolvedDocument],
    ) -> Option<Vec<SearchHit>> {
        let generation = self.debounce.tick(delta)?;
        if self.live != Some(generation) {
            return None;
        }
        self.live = None;
        let hits = matcher.rank(&self.query, documents);
        debug!(query = %self.query, hits = hits.len(), "match published");
        Some(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atalho_search::document::{DocType, SearchDocument};

    const STEP: Duration = Duration::from_millis(50);
    const FULL: Duration = Duration::from_millis(DEBOUNCE_MS);

    fn documents() -> Vec<ResolvedDocument> {
        ["Contact", "Guides", "Tools"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let doc = SearchDocument::new(
                    format!("doc-{i}"),
                    format!("doc.{i}.title"),
                    format!("doc.{i}.description"),
                    DocType::Page,
                    format!("/doc-{i}"),
                );
                ResolvedDocument::new(doc, *title, "")
            })
            .collect()
    }

    #[test]
    fn match_fires_once_after_quiet_period() {
        let mut controller = QueryController::new();
        let matcher = Matcher::new();
        let docs = documents();

        assert_eq!(controller.set_query("contact"), QueryEdit::Scheduled);
        assert!(controller.is_searching());

        assert!(controller.tick(STEP, &matcher, &docs).is_none());
        let hits = controller
            .tick(FULL, &matcher, &docs)
            .expect("deadline elapsed");
        assert_eq!(hits.len(), 1);
        assert!(!controller.is_searching());

        // Nothing further fires.
        assert!(controller.tick(FULL, &matcher, &docs).is_none());
    }

    #[test]
    fn rapid_keystrokes_collapse_to_one_match_on_final_query() {
        let mut controller = QueryController::new();
        let matcher = Matcher::new();
        let docs = documents();
        let mut published = Vec::new();

        for ch in "contact".chars() {
            controller.push_char(ch);
            if let Some(hits) = controller.tick(STEP, &matcher, &docs) {
                published.push(hits);
            }
        }
        assert!(published.is_empty(), "nothing may fire mid-burst");

        let hits = controller
            .tick(FULL, &matcher, &docs)
            .expect("one match after the burst");
        assert_eq!(controller.query(), "contact");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn blank_query_clears_synchronously() {
        let mut controller = QueryController::new();
        controller.set_query("cont");
        assert!(controller.is_searching());

        assert_eq!(controller.clear(), QueryEdit::Cleared);
        assert!(!controller.is_searching());

        // The previously scheduled match never fires.
        let matcher = Matcher::new();
        let docs = documents();
        assert!(controller.tick(FULL, &matcher, &docs).is_none());
    }

    #[test]
    fn backspace_to_empty_clears() {
        let mut controller = QueryController::new();
        controller.set_query("a");
        assert_eq!(controller.pop_char(), QueryEdit::Cleared);
        assert_eq!(controller.query(), "");
        assert!(!controller.is_searching());
    }

    #[test]
    fn whitespace_only_query_counts_as_blank() {
        let mut controller = QueryController::new();
        assert_eq!(controller.set_query("   "), QueryEdit::Cleared);
        assert!(!controller.is_searching());
    }

    #[test]
    fn superseded_query_never_publishes() {
        let mut controller = QueryController::new();
        let matcher = Matcher::new();
        let docs = documents();

        controller.set_query("guides");
        controller.tick(Duration::from_millis(150), &matcher, &docs);
        controller.set_query("tools");

        // 200ms from the *second* edit, not the first.
        assert!(
            controller
                .tick(Duration::from_millis(60), &matcher, &docs)
                .is_none()
        );
        let hits = controller
            .tick(Duration::from_millis(140), &matcher, &docs)
            .expect("final query fires");
        assert_eq!(controller.query(), "tools");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn reschedule_reruns_current_query() {
        let mut controller = QueryController::new();
        let matcher = Matcher::new();
        let docs = documents();

        controller.set_query("contact");
        controller.tick(FULL, &matcher, &docs).expect("first run");

        assert_eq!(controller.reschedule(), QueryEdit::Scheduled);
        assert!(controller.is_searching());
        let hits = controller.tick(FULL, &matcher, &docs).expect("second run");
        assert_eq!(hits.len(), 1);
    }
}
