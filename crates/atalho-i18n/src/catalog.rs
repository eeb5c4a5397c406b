#![forbid(unsafe_code)]

//! Locale tags and the string catalog.
//!
//! A [`Locale`] is a normalized BCP-47-ish tag (`"pt-BR"`, `"en"`). A
//! [`StringCatalog`] maps locales to [`LocaleStrings`] tables and resolves
//! keys with a fallback chain:
//!
//! 1. the requested locale (`pt-BR`)
//! 2. its parent language (`pt`)
//! 3. the catalog's default locale
//!
//! The chain is walked exactly once per lookup and always terminates.
//! Resolution never fails: a key absent from every table logs a warning
//! and resolves to `""` — a non-null value the matcher can safely fold.

use rustc_hash::FxHashMap;
use std::fmt;
use tracing::warn;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// A normalized locale tag.
///
/// Language subtags are lowercased and region subtags uppercased on
/// construction, so `"PT-br"` and `"pt-BR"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag, normalizing case.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        let mut normalized = String::with_capacity(tag.as_ref().len());
        for (i, part) in tag.as_ref().split('-').enumerate() {
            if i > 0 {
                normalized.push('-');
            }
            if i == 0 {
                normalized.extend(part.chars().flat_map(char::to_lowercase));
            } else {
                normalized.extend(part.chars().flat_map(char::to_uppercase));
            }
        }
        Self(normalized)
    }

    /// The normalized tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Parent locale in the fallback chain: `pt-BR` → `pt`. The bare
    /// language tag has no parent.
    #[must_use]
    pub fn parent(&self) -> Option<Locale> {
        self.0.rsplit_once('-').map(|(head, _)| Locale(head.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

// ---------------------------------------------------------------------------
// Locale Strings
// ---------------------------------------------------------------------------

/// Key→string table for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    entries: FxHashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up a key in this table only (no fallback).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut strings = Self::new();
        for (key, value) in iter {
            strings.insert(key, value);
        }
        strings
    }
}

// ---------------------------------------------------------------------------
// String Catalog
// ---------------------------------------------------------------------------

/// Multi-locale string catalog with fallback resolution.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    tables: FxHashMap<Locale, LocaleStrings>,
    default_locale: Locale,
}

impl StringCatalog {
    /// Create a catalog whose final fallback is `default_locale`.
    #[must_use]
    pub fn new(default_locale: impl Into<Locale>) -> Self {
        Self {
            tables: FxHashMap::default(),
            default_locale: default_locale.into(),
        }
    }

    /// The catalog's final-fallback locale.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Install (or replace) the table for a locale.
    pub fn set_locale_strings(
        &mut self,
        locale: impl Into<Locale>,
        strings: LocaleStrings,
    ) -> &mut Self {
        self.tables.insert(locale.into(), strings);
        self
    }

    /// Locales with an installed table.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.tables.keys()
    }

    /// Resolve `key` for `locale`, walking the fallback chain.
    ///
    /// Never fails: a key missing from the requested locale, its parent,
    /// and the default locale logs a warning and resolves to `""`.
    #[must_use]
    pub fn resolve(&self, locale: &Locale, key: &str) -> &str {
        if let Some(value) = self.lookup(locale, key) {
            return value;
        }
        if let Some(parent) = locale.parent()
            && let Some(value) = self.lookup(&parent, key)
        {
            return value;
        }
        if *locale != self.default_locale
            && let Some(value) = self.lookup(&self.default_locale, key)
        {
            return value;
        }
        warn!(key, locale = %locale, "missing translation key");
        ""
    }

    fn lookup(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.tables.get(locale).and_then(|table| table.get(key))
    }
}
