#![forbid(unsafe_code)]

//! Keyboard cursor over the result list.
//!
//! The cursor is `Option<usize>`: `None` means no explicit selection (the
//! palette just opened, or the query changed under the user). Arrow keys
//! wrap around; Enter only commits an explicit selection, so a stray Enter
//! right after opening cannot activate anything.

/// Finite-state cursor over the current results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    index: Option<usize>,
}

impl SelectionController {
    /// Cursor with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// ArrowDown: advance with wrap-around. No-op on an empty list; from
    /// no selection the cursor lands on the first row.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            None => 0,
            Some(i) => (i + 1) % len,
        });
    }

    /// ArrowUp: step back with wrap-around. No-op on an empty list; from
    /// no selection the cursor lands on the last row.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            None => len - 1,
            Some(i) => (i + len - 1) % len,
        });
    }

    /// Escape / reset: back to no selection. Also applied whenever the
    /// palette reopens or the query changes.
    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Enter gate: the index to commit, only when a row is explicitly
    /// selected and still within bounds.
    #[must_use]
    pub fn commit(&self, len: usize) -> Option<usize> {
        self.index.filter(|&i| i < len)
    }
}
