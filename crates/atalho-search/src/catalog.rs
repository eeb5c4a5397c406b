#![forbid(unsafe_code)]

//! Catalog assembly and validation.
//!
//! The catalog is a build-time concern: static entries (home-page anchors)
//! concatenated with entries derived from a content registry, validated
//! once, then frozen. There is no runtime mutation — a malformed table is
//! a programmer error surfaced by [`CatalogBuilder::build`], not something
//! the palette defends against while running.

use std::error::Error;
use std::fmt;

use crate::document::{DocType, SearchDocument};

// ---------------------------------------------------------------------------
// Content Registry
// ---------------------------------------------------------------------------

/// Category of a content-registry item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContentCategory {
    /// Implementation write-up.
    Implementation,
    /// Guide / article.
    Guide,
    /// Interactive tool.
    Tool,
}

impl ContentCategory {
    /// Document type this category maps to.
    #[must_use]
    pub const fn doc_type(self) -> DocType {
        match self {
            Self::Implementation => DocType::Implementation,
            Self::Guide => DocType::Guide,
            Self::Tool => DocType::Tool,
        }
    }

    /// Route prefix this category's items live under.
    #[must_use]
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::Implementation => "/implementacoes",
            Self::Guide => "/dicas",
            Self::Tool => "/ferramentas",
        }
    }

    /// Namespace used when deriving ids and i18n keys.
    #[must_use]
    pub const fn key_namespace(self) -> &'static str {
        match self {
            Self::Implementation => "implementations",
            Self::Guide => "guides",
            Self::Tool => "tools",
        }
    }
}

/// One item exposed by the external content registry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentEntry {
    /// URL slug of the content item.
    pub slug: String,
    /// Registry category.
    pub category: ContentCategory,
}

impl ContentEntry {
    /// Create a registry entry.
    #[must_use]
    pub fn new(slug: impl Into<String>, category: ContentCategory) -> Self {
        Self {
            slug: slug.into(),
            category,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog Error
// ---------------------------------------------------------------------------

/// Validation failure while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two documents share the same id.
    DuplicateId(String),
    /// A document has an empty url.
    EmptyUrl {
        /// Id of the offending document.
        id: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate document id: {id}"),
            Self::EmptyUrl { id } => write!(f, "document {id} has an empty url"),
        }
    }
}

impl Error for CatalogError {}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable ordered sequence of searchable documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    documents: Vec<SearchDocument>,
}

impl Catalog {
    /// The documents, in catalog order.
    #[must_use]
    pub fn documents(&self) -> &[SearchDocument] {
        &self.documents
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SearchDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }
}

// ---------------------------------------------------------------------------
// Catalog Builder
// ---------------------------------------------------------------------------

/// Assembles and validates a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    documents: Vec<SearchDocument>,
}

impl CatalogBuilder {
    /// Start an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a static document.
    pub fn push_document(&mut self, document: SearchDocument) -> &mut Self {
        self.documents.push(document);
        self
    }

    /// Append one document per registry entry.
    ///
    /// Id, url, type, and i18n keys derive deterministically from
    /// `{slug, category}`. Tags come from the per-slug `keywords` table;
    /// a slug without a table entry falls back to `[slug]` as its only
    /// tag.
    pub fn extend_from_registry(
        &mut self,
        entries: &[ContentEntry],
        keywords: &[(&str, &[&str])],
    ) -> &mut Self {
        for entry in entries {
            let namespace = entry.category.key_namespace();
            let tags: Vec<String> = keywords
                .iter()
                .find(|(slug, _)| *slug == entry.slug)
                .map(|(_, words)| words.iter().map(|w| (*w).to_string()).collect())
                .unwrap_or_else(|| vec![entry.slug.clone()]);

            let document = SearchDocument::new(
                format!("{namespace}-{}", entry.slug),
                format!("search.{namespace}.{}.title", entry.slug),
                format!("search.{namespace}.{}.description", entry.slug),
                entry.category.doc_type(),
                format!("{}/{}", entry.category.url_prefix(), entry.slug),
            )
            .with_tags(tags);
            self.documents.push(document);
        }
        self
    }

    /// Validate and freeze the catalog.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateId`] when two documents share an id;
    /// [`CatalogError::EmptyUrl`] when a document's url is empty.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.documents.len());
        for doc in &self.documents {
            if doc.url.is_empty() {
                return Err(CatalogError::EmptyUrl { id: doc.id.clone() });
            }
            if seen.contains(&doc.id.as_str()) {
                return Err(CatalogError::DuplicateId(doc.id.clone()));
            }
            seen.push(&doc.id);
        }
        Ok(Catalog {
            documents: self.documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> SearchDocument {
        SearchDocument::new(
            id,
            format!("search.{id}.title"),
            format!("search.{id}.description"),
            DocType::Section,
            format!("/#{id}"),
        )
    }

    #[test]
    fn static_and_registry_entries_concatenate_in_order() {
        let mut builder = CatalogBuilder::new();
        builder.push_document(section("contact"));
        builder.extend_from_registry(
            &[
                ContentEntry::new("ai-tips", ContentCategory::Guide),
                ContentEntry::new("json-formatter", ContentCategory::Tool),
            ],
            &[("ai-tips", &["ai", "inteligencia"])],
        );
        let catalog = builder.build().expect("valid catalog");

        let ids: Vec<&str> = catalog.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["contact", "guides-ai-tips", "tools-json-formatter"]);
    }

    #[test]
    fn registry_mapping_is_deterministic() {
        let mut builder = CatalogBuilder::new();
        builder.extend_from_registry(
            &[ContentEntry::new("rust-cli", ContentCategory::Implementation)],
            &[],
        );
        let catalog = builder.build().expect("valid catalog");
        let doc = &catalog.documents()[0];

        assert_eq!(doc.id, "implementations-rust-cli");
        assert_eq!(doc.url, "/implementacoes/rust-cli");
        assert_eq!(doc.doc_type, DocType::Implementation);
        assert_eq!(doc.title_key, "search.implementations.rust-cli.title");
    }

    #[test]
    fn missing_keyword_entry_falls_back_to_slug_tag() {
        let mut builder = CatalogBuilder::new();
        builder.extend_from_registry(
            &[ContentEntry::new("regex-tester", ContentCategory::Tool)],
            &[("other-slug", &["x"])],
        );
        let catalog = builder.build().expect("valid catalog");
        assert_eq!(catalog.documents()[0].tags, vec!["regex-tester"]);
    }

    #[test]
    fn keyword_table_overrides_fallback() {
        let mut builder = CatalogBuilder::new();
        builder.extend_from_registry(
            &[ContentEntry::new("json-formatter", ContentCategory::Tool)],
            &[("json-formatter", &["json", "formatador"])],
        );
        let catalog = builder.build().expect("valid catalog");
        assert_eq!(catalog.documents()[0].tags, vec!["json", "formatador"]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut builder = CatalogBuilder::new();
        builder.push_document(section("contact"));
        builder.push_document(section("contact"));
        assert_eq!(
            builder.build(),
            Err(CatalogError::DuplicateId("contact".into()))
        );
    }

    #[test]
    fn empty_url_rejected() {
        let mut builder = CatalogBuilder::new();
        builder.push_document(SearchDocument::new("x", "t", "d", DocType::Page, ""));
        assert_eq!(
            builder.build(),
            Err(CatalogError::EmptyUrl { id: "x".into() })
        );
    }

    #[test]
    fn lookup_by_id() {
        let mut builder = CatalogBuilder::new();
        builder.push_document(section("contact"));
        let catalog = builder.build().expect("valid catalog");
        assert!(catalog.get("contact").is_some());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn error_display_is_informative() {
        let err = CatalogError::DuplicateId("home".into());
        assert_eq!(err.to_string(), "duplicate document id: home");
    }
}
