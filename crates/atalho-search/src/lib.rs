#![forbid(unsafe_code)]

//! Search engine for the atalho command palette.
//!
//! This crate turns a static document catalog plus a locale into a ranked
//! result list for a free-text query:
//!
//! - [`document`]: the locale-independent [`SearchDocument`] and its
//!   locale-resolved counterpart
//! - [`catalog`]: catalog assembly and build-time validation
//! - [`resolve`]: expansion of i18n keys into display text per locale
//! - [`normalize`]: the case/diacritics fold applied to every matched string
//! - [`scorer`]: the bounded-distance fuzzy scoring strategy
//! - [`matcher`]: field-priority ranking over resolved documents
//!
//! Ranking is deterministic: identical catalog, locale, and query always
//! produce the identical ordered result list.

pub mod catalog;
pub mod document;
pub mod matcher;
pub mod normalize;
pub mod resolve;
pub mod scorer;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, ContentCategory, ContentEntry};
pub use document::{DocType, ResolvedDocument, SearchDocument};
pub use matcher::{FieldKind, Matcher, SearchHit};
pub use resolve::TextResolver;
pub use scorer::{DistanceLimit, FuzzyScore, SubstringDistance};
