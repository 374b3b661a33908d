// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for a flat set of targets such as plot points.
//!
//! Feed the target under the pointer (or `None`) on every pointer move; the
//! state reports only actual transitions.

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered a target from empty space.
    Enter(K),
    /// The pointer moved directly from one target to another.
    Move {
        /// Previously hovered target.
        from: K,
        /// Newly hovered target.
        to: K,
    },
    /// The pointer left a target for empty space.
    Leave(K),
}

/// Remembers the currently hovered target.
#[derive(Clone, Debug, Default)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the hovered target, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

impl<K> HoverState<K>
where
    K: Clone + PartialEq,
{
    /// Updates the hovered target, returning the transition if it changed.
    pub fn update(&mut self, target: Option<K>) -> Option<HoverEvent<K>> {
        if self.current == target {
            return None;
        }
        let previous = core::mem::replace(&mut self.current, target.clone());
        match (previous, target) {
            (None, Some(to)) => Some(HoverEvent::Enter(to)),
            (Some(from), Some(to)) => Some(HoverEvent::Move { from, to }),
            (Some(from), None) => Some(HoverEvent::Leave(from)),
            (None, None) => None,
        }
    }
}
