#![forbid(unsafe_code)]

//! Searchable documents.
//!
//! A [`SearchDocument`] is locale-independent: it carries i18n *keys*, not
//! display text. Display text materializes in a [`ResolvedDocument`] when
//! the resolver expands the catalog for the active locale, and is thrown
//! away whenever the locale changes.

use crate::normalize::fold;

// ---------------------------------------------------------------------------
// Document Type
// ---------------------------------------------------------------------------

/// Kind of searchable entity.
///
/// Each variant maps to presentation hints (icon, label key, accent color)
/// and carries no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DocType {
    /// A top-level page.
    Page,
    /// An in-page section reachable by anchor.
    Section,
    /// An implementation write-up.
    Implementation,
    /// A guide / article.
    Guide,
    /// An interactive tool.
    Tool,
}

impl DocType {
    /// Icon name for the result row.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Page => "file",
            Self::Section => "hash",
            Self::Implementation => "code",
            Self::Guide => "book",
            Self::Tool => "wrench",
        }
    }

    /// i18n key for the type badge label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Page => "search.type.page",
            Self::Section => "search.type.section",
            Self::Implementation => "search.type.implementation",
            Self::Guide => "search.type.guide",
            Self::Tool => "search.type.tool",
        }
    }

    /// Accent color for the type badge.
    #[must_use]
    pub const fn accent_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Page => (100, 180, 255),
            Self::Section => (140, 140, 160),
            Self::Implementation => (255, 210, 60),
            Self::Guide => (120, 220, 150),
            Self::Tool => (220, 130, 255),
        }
    }
}

// ---------------------------------------------------------------------------
// Search Document
// ---------------------------------------------------------------------------

/// A single searchable entry, locale-independent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchDocument {
    /// Stable unique identifier.
    pub id: String,
    /// i18n key for the display title.
    pub title_key: String,
    /// i18n key for the display description.
    pub description_key: String,
    /// Kind of entity (presentation hint only).
    pub doc_type: DocType,
    /// In-page anchor (`"/#contact"`) or absolute route (`"/dicas/ai-tips"`).
    pub url: String,
    /// Keywords widening the matchable surface; never displayed.
    pub tags: Vec<String>,
}

impl SearchDocument {
    /// Create a document with no tags.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title_key: impl Into<String>,
        description_key: impl Into<String>,
        doc_type: DocType,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title_key: title_key.into(),
            description_key: description_key.into(),
            doc_type,
            url: url.into(),
            tags: Vec::new(),
        }
    }

    /// Set tags (builder).
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Fragment identifier when the url targets an in-page anchor.
    ///
    /// `"/#contact"` → `Some("contact")`; `"/dicas/ai-tips"` → `None`.
    #[must_use]
    pub fn anchor_fragment(&self) -> Option<&str> {
        self.url
            .split_once('#')
            .map(|(_, fragment)| fragment)
            .filter(|fragment| !fragment.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Resolved Document
// ---------------------------------------------------------------------------

/// A [`SearchDocument`] with display text resolved for one locale.
///
/// Holds pre-folded copies of every matchable field so the matcher never
/// re-normalizes per keystroke. Ephemeral: rebuilt whenever the locale or
/// catalog changes, never persisted.
#[derive(Debug, Clone)]
pub struct ResolvedDocument {
    /// The underlying locale-independent document.
    pub document: SearchDocument,
    /// Display title in the active locale (may be `""` for a missing key).
    pub title: String,
    /// Display description in the active locale.
    pub description: String,
    pub(crate) folded_title: String,
    pub(crate) folded_description: String,
    pub(crate) folded_tags: Vec<String>,
}

impl ResolvedDocument {
    /// Bind resolved display text to a document, pre-folding all
    /// matchable fields.
    #[must_use]
    pub fn new(
        document: SearchDocument,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let folded_title = fold(&title);
        let folded_description = fold(&description);
        let folded_tags = document.tags.iter().map(|tag| fold(tag)).collect();
        Self {
            document,
            title,
            description,
            folded_title,
            folded_description,
            folded_tags,
        }
    }
}
