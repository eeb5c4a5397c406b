#![forbid(unsafe_code)]

//! Public facade for the atalho command-palette engine.
//!
//! Re-exports the user-facing API of the workspace crates. A typical host
//! builds a [`Catalog`], installs a [`StringCatalog`], wires a
//! [`PaletteShell`] to its event loop and [`Navigator`], and renders from
//! [`PaletteState`] snapshots:
//!
//! ```
//! use std::time::Duration;
//! use atalho::{
//!     CatalogBuilder, ContentCategory, ContentEntry, DocType, PaletteShell,
//!     SearchDocument, StringCatalog,
//! };
//!
//! let mut builder = CatalogBuilder::new();
//! builder.push_document(SearchDocument::new(
//!     "home-contact",
//!     "search.contact.title",
//!     "search.contact.description",
//!     DocType::Section,
//!     "/#contact",
//! ));
//! builder.extend_from_registry(
//!     &[ContentEntry::new("ai-tips", ContentCategory::Guide)],
//!     &[("ai-tips", &["ai", "inteligencia"])],
//! );
//! let catalog = builder.build().expect("static catalog is well-formed");
//!
//! let mut shell = PaletteShell::new(catalog, StringCatalog::new("en"), "en")
//!     .with_popular_terms(["contact", "ai"]);
//! shell.open();
//! shell.tick(Duration::from_millis(16));
//! assert!(shell.is_open());
//! ```

pub use atalho_core::debounce::Debounce;
pub use atalho_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use atalho_core::signal::{SignalHub, SignalSubscription};
pub use atalho_i18n::{Locale, LocaleStrings, StringCatalog};
pub use atalho_palette::{
    DEBOUNCE_MS, Navigator, OPEN_SIGNAL, PalettePhase, PaletteShell, PaletteState,
    QueryController, SelectionController,
};
pub use atalho_search::{
    Catalog, CatalogBuilder, CatalogError, ContentCategory, ContentEntry, DistanceLimit,
    DocType, FieldKind, FuzzyScore, Matcher, ResolvedDocument, SearchDocument, SearchHit,
    SubstringDistance, TextResolver,
};
