#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The palette consumes a narrow slice of the host surface: key presses and
//! focus changes. Everything derives `Clone`, `PartialEq`, and `Eq` for use
//! in tests and pattern matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press`; hosts that auto-repeat keys report
//!   `Repeat`, which the palette treats like a press for text entry.
//! - `Modifiers` use bitflags for easy combination.
//! - `FocusChanged` carries whether focus landed in an editable control
//!   (input, textarea, content-editable); the global shortcut is suppressed
//!   while that is true.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Focus moved to (`editable: true`) or away from (`false`) an
    /// editable control.
    FocusChanged {
        /// Whether the newly focused element accepts text input.
        editable: bool,
    },
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Super/Meta/Cmd modifier is held.
    #[must_use]
    pub const fn super_key(&self) -> bool {
        self.modifiers.contains(Modifiers::SUPER)
    }

    /// Whether this event should be treated as text/command input.
    ///
    /// Releases are ignored; presses and auto-repeats both count.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Up arrow.
    Up,

    /// Down arrow.
    Down,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    /// Key was pressed.
    #[default]
    Press,

    /// Key is auto-repeating while held.
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CTRL  = 0b0010;
        /// Alt/Option key.
        const ALT   = 0b0100;
        /// Super/Meta/Cmd key.
        const SUPER = 0b1000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_builder() {
        let event = KeyEvent::new(KeyCode::Char('k'))
            .with_modifiers(Modifiers::CTRL)
            .with_kind(KeyEventKind::Repeat);
        assert!(event.ctrl());
        assert!(!event.super_key());
        assert!(event.is_char('k'));
        assert!(!event.is_char('j'));
        assert!(event.is_press());
    }

    #[test]
    fn release_is_not_a_press() {
        let event = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert!(!event.is_press());
    }

    #[test]
    fn modifier_combinations() {
        let both = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(both.contains(Modifiers::CTRL));
        assert!(both.contains(Modifiers::SHIFT));
        assert!(!both.contains(Modifiers::SUPER));
    }

    #[test]
    fn focus_event_equality() {
        assert_eq!(
            Event::FocusChanged { editable: true },
            Event::FocusChanged { editable: true }
        );
        assert_ne!(
            Event::FocusChanged { editable: true },
            Event::FocusChanged { editable: false }
        );
    }
}
