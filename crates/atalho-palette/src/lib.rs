#![forbid(unsafe_code)]

//! Interaction machinery for the atalho command palette.
//!
//! The palette is a small state machine layered over the search engine:
//!
//! - [`query`]: debounced query ownership — one live match at a time,
//!   blank queries clear synchronously
//! - [`selection`]: the keyboard cursor over the current result list
//! - [`activation`]: committing a result into a scroll or navigation
//!   effect through the [`Navigator`] seam
//! - [`shell`]: visibility, the global shortcut, the programmatic open
//!   signal, popular-term fallback, and the owning [`PaletteState`]
//!
//! Everything is single-threaded and tick-driven; the host feeds events
//! and advances time, the shell hands back read-only state snapshots.

pub mod activation;
pub mod query;
pub mod selection;
pub mod shell;

pub use activation::Navigator;
pub use query::{DEBOUNCE_MS, QueryController, QueryEdit};
pub use selection::SelectionController;
pub use shell::{OPEN_SIGNAL, PalettePhase, PaletteShell, PaletteState};
