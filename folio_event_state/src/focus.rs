// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving keyboard focus within one legend.
//!
//! Entries are addressed by index. Moving past either end wraps around, and
//! shrinking the entry count clamps the focus to the new last entry.

/// Focus position over `len` entries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RovingFocus {
    len: usize,
    focused: Option<usize>,
}

impl RovingFocus {
    /// Creates focus state over `len` entries, with nothing focused.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, focused: None }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the focused index, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focuses `idx` if it is in range. Returns the resulting focus.
    pub fn focus(&mut self, idx: usize) -> Option<usize> {
        if idx < self.len {
            self.focused = Some(idx);
        }
        self.focused
    }

    /// Clears focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Moves to the next entry, wrapping to the first.
    ///
    /// With nothing focused, the first entry receives focus.
    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let idx = match self.focused {
            Some(idx) => (idx + 1) % self.len,
            None => 0,
        };
        self.focused = Some(idx);
        self.focused
    }

    /// Moves to the previous entry, wrapping to the last.
    ///
    /// With nothing focused, the last entry receives focus.
    pub fn prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let idx = match self.focused {
            Some(0) | None => self.len - 1,
            Some(idx) => idx - 1,
        };
        self.focused = Some(idx);
        self.focused
    }

    /// Changes the entry count, clamping or clearing focus as needed.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.focused = match self.focused {
            _ if len == 0 => None,
            Some(idx) if idx >= len => Some(len - 1),
            other => other,
        };
    }
}
