#![forbid(unsafe_code)]

//! Core primitives for the atalho command palette.
//!
//! This crate holds the pieces every other atalho crate leans on:
//!
//! - [`event`]: canonical input events (keys, editable-focus changes)
//! - [`debounce`]: a cancellable, tick-driven debounce deadline
//! - [`signal`]: an in-process named signal hub with scoped subscriptions
//!
//! Time never comes from a wall clock here. Components advance via explicit
//! `tick(Duration)` calls from the host loop, which keeps every timing
//! behavior deterministic and unit-testable.

pub mod debounce;
pub mod event;
pub mod signal;

pub use debounce::Debounce;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use signal::{SignalHub, SignalSubscription};
