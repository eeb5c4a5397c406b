#![forbid(unsafe_code)]

//! Locale expansion of the document catalog.
//!
//! A [`TextResolver`] binds a [`StringCatalog`] to one active locale and
//! expands [`Catalog`] entries into [`ResolvedDocument`]s. Resolution is
//! synchronous and total: missing keys come back as `""` (the catalog
//! logs them), so the matcher downstream never sees a null field.
//!
//! Resolved text is only valid for the locale it was produced with. The
//! palette shell memoizes one expansion per locale and discards it when
//! the locale changes.

use atalho_i18n::{Locale, StringCatalog};

use crate::catalog::Catalog;
use crate::document::ResolvedDocument;

/// Resolves i18n keys for one active locale.
#[derive(Debug, Clone)]
pub struct TextResolver<'a> {
    strings: &'a StringCatalog,
    locale: Locale,
}

impl<'a> TextResolver<'a> {
    /// Bind a string catalog to an active locale.
    #[must_use]
    pub fn new(strings: &'a StringCatalog, locale: impl Into<Locale>) -> Self {
        Self {
            strings,
            locale: locale.into(),
        }
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resolve a single key. Never fails; missing keys resolve to `""`.
    #[must_use]
    pub fn resolve(&self, key: &str) -> &'a str {
        self.strings.resolve(&self.locale, key)
    }

    /// Expand every catalog entry into a [`ResolvedDocument`] for the
    /// active locale, preserving catalog order.
    #[must_use]
    pub fn resolve_catalog(&self, catalog: &Catalog) -> Vec<ResolvedDocument> {
        catalog
            .documents()
            .iter()
            .map(|doc| {
                ResolvedDocument::new(
                    doc.clone(),
                    self.resolve(&doc.title_key),
                    self.resolve(&doc.description_key),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::document::{DocType, SearchDocument};
    use atalho_i18n::LocaleStrings;

    fn strings() -> StringCatalog {
        let mut catalog = StringCatalog::new("en");
        let en: LocaleStrings = [
            ("search.contact.title", "Contact"),
            ("search.contact.description", "Get in touch"),
        ]
        .into_iter()
        .collect();
        catalog.set_locale_strings("en", en);

        let pt_br: LocaleStrings = [
            ("search.contact.title", "Contato"),
            ("search.contact.description", "Entre em contato"),
        ]
        .into_iter()
        .collect();
        catalog.set_locale_strings("pt-BR", pt_br);
        catalog
    }

    fn catalog() -> Catalog {
        let mut builder = CatalogBuilder::new();
        builder.push_document(SearchDocument::new(
            "home-contact",
            "search.contact.title",
            "search.contact.description",
            DocType::Section,
            "/#contact",
        ));
        builder.build().expect("valid catalog")
    }

    #[test]
    fn resolves_for_active_locale() {
        let strings = strings();
        let resolver = TextResolver::new(&strings, "pt-BR");
        let resolved = resolver.resolve_catalog(&catalog());
        assert_eq!(resolved[0].title, "Contato");
        assert_eq!(resolved[0].description, "Entre em contato");
    }

    #[test]
    fn locale_switch_changes_resolved_text() {
        let strings = strings();
        let catalog = catalog();

        let pt = TextResolver::new(&strings, "pt-BR").resolve_catalog(&catalog);
        let en = TextResolver::new(&strings, "en").resolve_catalog(&catalog);
        assert_eq!(pt[0].title, "Contato");
        assert_eq!(en[0].title, "Contact");
    }

    #[test]
    fn missing_key_resolves_to_empty_not_null() {
        let strings = StringCatalog::new("en");
        let resolver = TextResolver::new(&strings, "en");
        let resolved = resolver.resolve_catalog(&catalog());
        assert_eq!(resolved[0].title, "");
        assert_eq!(resolved[0].description, "");
    }
}
