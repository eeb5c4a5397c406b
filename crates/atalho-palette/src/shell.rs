#![forbid(unsafe_code)]

//! The palette shell: visibility, shortcuts, and state ownership.
//!
//! [`PaletteShell`] owns the whole interaction surface — the global
//! Ctrl/Super+K shortcut (suppressed while an editable control has
//! focus), the programmatic open signal, the debounced query pipeline,
//! keyboard selection, popular-term fallback, and activation. Everything
//! downstream sees read-only [`PaletteState`] snapshots; nothing outside
//! the shell mutates palette state.

use std::time::Duration;

use tracing::debug;

use atalho_core::event::{Event, KeyCode, KeyEvent};
use atalho_core::signal::{SignalHub, SignalSubscription};
use atalho_i18n::{Locale, StringCatalog};
use atalho_search::catalog::Catalog;
use atalho_search::document::ResolvedDocument;
use atalho_search::matcher::{Matcher, SearchHit};
use atalho_search::resolve::TextResolver;

use crate::activation::{self, Navigator};
use crate::query::{QueryController, QueryEdit};
use crate::selection::SelectionController;

/// Name of the in-process signal that opens the palette programmatically.
pub const OPEN_SIGNAL: &str = "atalho:open";

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Read-only snapshot of the palette's interaction state.
#[derive(Debug, Clone)]
pub struct PaletteState {
    /// Whether the overlay is visible.
    pub open: bool,
    /// Current query text.
    pub query: String,
    /// Current published result list (ephemeral, one query's lifetime).
    pub results: Vec<SearchHit>,
    /// Explicitly selected row, if any.
    pub selected: Option<usize>,
    /// Whether a match is scheduled but not yet published.
    pub is_searching: bool,
}

/// What the overlay should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalettePhase {
    /// Overlay hidden.
    Closed,
    /// Query empty: show the curated popular terms.
    Popular,
    /// Match pending for the current query: neutral loading placeholder,
    /// never a premature "no results".
    Searching,
    /// Published result list is empty.
    NoResults,
    /// Published results to display.
    Results,
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// Owns palette visibility, input routing, and the result pipeline.
#[derive(Debug)]
pub struct PaletteShell {
    open: bool,
    editable_focus: bool,
    query: QueryController,
    selection: SelectionController,
    matcher: Matcher,
    catalog: Catalog,
    strings: StringCatalog,
    locale: Locale,
    resolved: Vec<ResolvedDocument>,
    results: Vec<SearchHit>,
    /// Whether `results` corresponds to the current query text.
    published: bool,
    popular_terms: Vec<String>,
    open_signal: Option<SignalSubscription>,
}

impl PaletteShell {
    /// Build a shell over a validated catalog.
    #[must_use]
    pub fn new(catalog: Catalog, strings: StringCatalog, locale: impl Into<Locale>) -> Self {
        let locale = locale.into();
        let resolved = TextResolver::new(&strings, locale.clone()).resolve_catalog(&catalog);
        Self {
            open: false,
            editable_focus: false,
            query: QueryController::new(),
            selection: SelectionController::new(),
            matcher: Matcher::new(),
            catalog,
            strings,
            locale,
            resolved,
            results: Vec::new(),
            published: false,
            popular_terms: Vec::new(),
            open_signal: None,
        }
    }

    /// Replace the matcher (builder).
    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Set the popular-term fallback list (builder).
    #[must_use]
    pub fn with_popular_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Use a custom debounce delay (builder; tests use short delays).
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.query = QueryController::with_delay(delay);
        self
    }

    /// Subscribe to the programmatic open signal on `hub` (builder).
    ///
    /// The subscription is released when the shell is dropped.
    #[must_use]
    pub fn connected_to(mut self, hub: &SignalHub) -> Self {
        self.open_signal = Some(hub.subscribe(OPEN_SIGNAL));
        self
    }

    // --- Visibility ---

    /// Open the overlay, resetting query, results, and selection.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.results.clear();
        self.published = false;
        self.selection.clear();
        debug!("palette opened");
    }

    /// Close the overlay and drop all ephemeral state. Cancels any
    /// pending match.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.results.clear();
        self.published = false;
        self.selection.clear();
        debug!("palette closed");
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    // --- Accessors ---

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.query()
    }

    /// Published results for the current query.
    #[must_use]
    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Resolved document behind a hit.
    #[must_use]
    pub fn document(&self, hit: &SearchHit) -> &ResolvedDocument {
        &self.resolved[hit.doc_index]
    }

    /// Currently selected result, if any.
    #[must_use]
    pub fn selected_document(&self) -> Option<&ResolvedDocument> {
        let index = self.selection.commit(self.results.len())?;
        Some(self.document(&self.results[index]))
    }

    /// The curated popular terms shown while the query is empty.
    #[must_use]
    pub fn popular_terms(&self) -> &[String] {
        &self.popular_terms
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Read-only snapshot of the interaction state.
    #[must_use]
    pub fn state(&self) -> PaletteState {
        PaletteState {
            open: self.open,
            query: self.query.query().to_string(),
            results: self.results.clone(),
            selected: self.selection.index(),
            is_searching: self.query.is_searching(),
        }
    }

    /// What the overlay should render right now.
    #[must_use]
    pub fn phase(&self) -> PalettePhase {
        if !self.open {
            PalettePhase::Closed
        } else if self.query.query().trim().is_empty() {
            PalettePhase::Popular
        } else if !self.published {
            PalettePhase::Searching
        } else if self.results.is_empty() {
            PalettePhase::NoResults
        } else {
            PalettePhase::Results
        }
    }

    // --- Locale ---

    /// Switch the active locale. Resolved text from the old locale is
    /// discarded; a non-empty query is rescheduled against the new text.
    pub fn set_locale(&mut self, locale: impl Into<Locale>) {
        let locale = locale.into();
        if locale == self.locale {
            return;
        }
        self.locale = locale;
        self.resolved =
            TextResolver::new(&self.strings, self.locale.clone()).resolve_catalog(&self.catalog);
        self.results.clear();
        self.published = false;
        self.selection.clear();
        if !self.query.query().trim().is_empty() {
            self.query.reschedule();
        }
        debug!(locale = %self.locale, "locale switched, resolved text rebuilt");
    }

    // --- Query ---

    /// Set the query programmatically (popular-term selection re-enters
    /// the normal debounce/match pipeline through here).
    pub fn set_query(&mut self, text: impl Into<String>) {
        let edit = self.query.set_query(text);
        self.apply_edit(edit);
    }

    /// Feed the popular term at `index` into the query pipeline.
    ///
    /// Returns `false` (and does nothing) for an out-of-range index.
    pub fn apply_popular_term(&mut self, index: usize) -> bool {
        let Some(term) = self.popular_terms.get(index).cloned() else {
            return false;
        };
        self.set_query(term);
        true
    }

    fn apply_edit(&mut self, edit: QueryEdit) {
        // Any query change invalidates both results and selection.
        self.selection.clear();
        self.published = false;
        if edit == QueryEdit::Cleared {
            self.results.clear();
        }
    }

    // --- Events & time ---

    /// Advance time: drain the open signal, then fire the debounce if it
    /// elapses, publishing results for the current query.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(signal) = &self.open_signal
            && signal.take()
            && !self.open
        {
            debug!("palette opened via signal");
            self.open();
        }
        if !self.open {
            return;
        }
        if let Some(hits) = self.query.tick(delta, &self.matcher, &self.resolved) {
            self.results = hits;
            self.published = true;
        }
    }

    /// Route one input event. Returns `true` when the event was consumed
    /// by the palette.
    pub fn handle_event(&mut self, event: &Event, navigator: &mut dyn Navigator) -> bool {
        match event {
            Event::FocusChanged { editable } => {
                self.editable_focus = *editable;
                false
            }
            Event::Key(key) => {
                if !key.is_press() {
                    return false;
                }
                if self.open {
                    self.handle_open_key(*key, navigator)
                } else {
                    self.handle_closed_key(*key)
                }
            }
        }
    }

    /// The global shortcut, honored only while no editable control has
    /// focus — typing into a form must never summon the overlay.
    fn handle_closed_key(&mut self, key: KeyEvent) -> bool {
        let is_chord = matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
            && (key.ctrl() || key.super_key());
        if is_chord && !self.editable_focus {
            self.open();
            return true;
        }
        false
    }

    fn handle_open_key(&mut self, key: KeyEvent, navigator: &mut dyn Navigator) -> bool {
        match key.code {
            KeyCode::Escape => {
                // First Escape backs out of the selection, the next one
                // dismisses the overlay.
                if self.selection.index().is_some() {
                    self.selection.clear();
                } else {
                    self.close();
                }
                true
            }
            KeyCode::Enter => {
                if let Some(index) = self.selection.commit(self.results.len()) {
                    self.activate(index, navigator);
                }
                true
            }
            KeyCode::Down => {
                self.selection.select_next(self.results.len());
                true
            }
            KeyCode::Up => {
                self.selection.select_prev(self.results.len());
                true
            }
            KeyCode::Backspace => {
                let edit = self.query.pop_char();
                self.apply_edit(edit);
                true
            }
            KeyCode::Char(c) => {
                if key.ctrl() {
                    if c == 'u' {
                        let edit = self.query.clear();
                        self.apply_edit(edit);
                    }
                    return true;
                }
                if key.alt() || key.super_key() {
                    return false;
                }
                let edit = self.query.push_char(c);
                self.apply_edit(edit);
                true
            }
        }
    }

    /// The activation sequence, in its required order: close the overlay,
    /// clear the query, then scroll or navigate.
    fn activate(&mut self, index: usize, navigator: &mut dyn Navigator) {
        let document = self.resolved[self.results[index].doc_index].document.clone();
        self.close();
        activation::dispatch(&document, navigator);
    }
}
