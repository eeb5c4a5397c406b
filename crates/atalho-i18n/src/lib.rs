#![forbid(unsafe_code)]

//! String localization for the atalho command palette.
//!
//! The palette stores locale-independent keys and resolves them to display
//! text at query time. This crate provides the catalog that backs those
//! lookups: per-locale string tables with a fallback chain, and a resolve
//! path that never fails — a missing key degrades to `""` so downstream
//! matching stays total.

pub mod catalog;

pub use catalog::{Locale, LocaleStrings, StringCatalog};
