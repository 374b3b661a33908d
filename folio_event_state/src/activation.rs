// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation recognition: pointer and keyboard input collapse into one signal.
//!
//! ## Usage
//!
//! 1) Call [`ActivationState::on_pointer_down`] when a press lands on a target.
//! 2) Call [`ActivationState::on_pointer_up`] with the target under the pointer
//!    at release (if any). The press target is activated when the release is on
//!    the same target, or within the distance tolerance of the press.
//! 3) Call [`ActivationState::on_key`] for key presses on the focused target;
//!    `Enter` and `Space` activate it.
//!
//! A second press before release replaces the pending one. [`ActivationState::cancel`]
//! drops a pending press, for example when the pointer leaves the window.

use kurbo::Point;

/// Keys relevant to activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Return / Enter.
    Enter,
    /// Space bar.
    Space,
    /// Any other key; never activates.
    Other,
}

impl Key {
    /// Returns `true` if this key activates the focused target.
    #[must_use]
    pub const fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[derive(Copy, Clone, Debug)]
struct Press<K> {
    target: K,
    pos: Point,
}

/// Tracks a pending pointer press and recognises activations.
#[derive(Clone, Debug)]
pub struct ActivationState<K> {
    pending: Option<Press<K>>,
    tolerance: f64,
}

impl<K> ActivationState<K> {
    /// Creates a recogniser with the given release distance tolerance.
    ///
    /// Negative tolerances are treated as zero.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            pending: None,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Returns the release distance tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Records a press on `target` at `pos`, replacing any pending press.
    pub fn on_pointer_down(&mut self, target: K, pos: Point) {
        self.pending = Some(Press { target, pos });
    }

    /// Drops any pending press.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a press is awaiting its release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<K> ActivationState<K>
where
    K: PartialEq,
{
    /// Completes a press. Returns the activated target, if any.
    ///
    /// `target` is whatever lies under the pointer at release. The pending
    /// press is consumed either way.
    pub fn on_pointer_up(&mut self, target: Option<&K>, pos: Point) -> Option<K> {
        let press = self.pending.take()?;
        let same_target = target == Some(&press.target);
        let within = (pos - press.pos).hypot2() <= self.tolerance * self.tolerance;
        (same_target || within).then_some(press.target)
    }

    /// Handles a key press while `focused` holds keyboard focus.
    ///
    /// Activation keys return the focused target; everything else is ignored.
    pub fn on_key(&mut self, key: Key, focused: Option<K>) -> Option<K> {
        if key.activates() { focused } else { None }
    }
}

impl<K> Default for ActivationState<K> {
    fn default() -> Self {
        Self::new(4.0)
    }
}
