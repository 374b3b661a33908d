// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::Hash;

use crate::Domain;

/// Maps domain values to range entries by position.
///
/// Value `i` of the domain maps to `range[i % range.len()]`. A domain longer
/// than the range therefore reuses markers; [`OrdinalScale::wraps`] reports
/// when that happens.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale<T, R>
where
    T: Hash + Eq,
{
    domain: Domain<T>,
    range: Vec<R>,
}

impl<T, R> OrdinalScale<T, R>
where
    T: Hash + Eq,
{
    /// Creates a scale over `domain` with the given marker range.
    ///
    /// An empty range yields a scale whose lookups always return `None`.
    #[must_use]
    pub fn new(domain: Domain<T>, range: Vec<R>) -> Self {
        debug_assert!(!range.is_empty(), "ordinal scale needs a non-empty range");
        Self { domain, range }
    }

    /// Returns the marker for `value`, or `None` if it is outside the domain.
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<&R>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.domain
            .index_of(value)
            .and_then(|idx| self.get_index(idx))
    }

    /// Returns the marker assigned to domain position `idx`.
    #[must_use]
    pub fn get_index(&self, idx: usize) -> Option<&R> {
        if idx >= self.domain.len() || self.range.is_empty() {
            return None;
        }
        self.range.get(idx % self.range.len())
    }

    /// Returns the scale's domain.
    #[must_use]
    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    /// Returns the marker range.
    #[must_use]
    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// Returns `true` if at least two domain values share a marker.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.domain.len() > self.range.len()
    }
}
