// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Filter: the visibility state behind interactive plot legends.
//!
//! This crate focuses on the _bookkeeping_ of legend filters: which author
//! groups and which categories are currently switched on. It does **not** know
//! anything about records, markers or rendering; callers decide how to map
//! legend input (click, key press, reset button) onto the transitions here and
//! then re-evaluate the visibility predicate for every point.
//!
//! Two types carry the state:
//!
//! - [`ActiveSet`]: a fixed, ordered domain plus an on/off flag per entry and a
//!   monotonically increasing **revision** counter that bumps when membership
//!   changes.
//! - [`FilterState`]: one [`ActiveSet`] per [`Facet`] (authors and categories)
//!   and the predicate `visible = author active AND category active`.
//!
//! Every operation is total: toggling a value outside the domain is ignored.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_filter::{Facet, FilterState};
//!
//! let mut filter = FilterState::new(["behn", "Other"], ["Poetry", "Drama"]);
//! assert!(filter.is_visible(&"behn", &"Drama"));
//!
//! // Legend click on "Drama": hide every drama.
//! filter.toggle(Facet::Category, &"Drama");
//! assert!(!filter.is_visible(&"behn", &"Drama"));
//! assert!(filter.is_visible(&"behn", &"Poetry"));
//!
//! // Reset button: everything is visible again.
//! filter.reset();
//! assert!(filter.is_visible(&"behn", &"Drama"));
//! ```
//!
//! ## Switching the category field
//!
//! Replacing the category domain (for example going from genres to centuries)
//! resets **both** facets to fully active. Any partial author filter is
//! discarded along with the old categories:
//!
//! ```rust
//! use folio_filter::{Facet, FilterState};
//!
//! let mut filter = FilterState::new(["a", "b"], ["Poetry"]);
//! filter.toggle(Facet::Author, &"a");
//! filter.switch_categories(["17th", "18th"]);
//! assert!(filter.authors().is_full());
//! assert_eq!(filter.categories().domain(), &["17th", "18th"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Which legend a filter transition applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    /// The author-group (colour) legend.
    Author,
    /// The category (shape) legend.
    Category,
}

impl Facet {
    /// Both facets, author first.
    pub const ALL: [Self; 2] = [Self::Author, Self::Category];
}

/// An ordered domain with a per-entry active flag.
///
/// The domain is fixed at construction (or by [`ActiveSet::replace_domain`]);
/// only flags change afterwards. Values are matched by equality, so `T` needs
/// no hashing or ordering.
#[derive(Clone, Debug, Default)]
pub struct ActiveSet<T> {
    domain: Vec<T>,
    active: Vec<bool>,
    revision: u64,
}

impl<T> ActiveSet<T> {
    /// Creates a fully active set over `domain`.
    ///
    /// The caller is expected to pass distinct values; for duplicates only
    /// the first entry is ever matched.
    #[must_use]
    pub fn new<I>(domain: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let domain: Vec<T> = domain.into_iter().collect();
        let active = alloc::vec![true; domain.len()];
        Self {
            domain,
            active,
            revision: 0,
        }
    }

    /// Returns the domain in order.
    #[must_use]
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Returns the number of domain entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Returns `true` if the domain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Returns whether the entry at `idx` is active.
    ///
    /// Out-of-range indices are reported inactive.
    #[must_use]
    pub fn is_active_at(&self, idx: usize) -> bool {
        self.active.get(idx).copied().unwrap_or(false)
    }

    /// Returns the number of active entries.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&on| on).count()
    }

    /// Returns `true` if every entry is active.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.active.iter().all(|&on| on)
    }

    /// Iterates over the active values in domain order.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> + '_ {
        self.domain
            .iter()
            .zip(&self.active)
            .filter_map(|(value, &on)| on.then_some(value))
    }

    /// Iterates over `(value, active)` pairs in domain order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&T, bool)> + '_ {
        self.domain.iter().zip(self.active.iter().copied())
    }

    /// Returns the current revision counter.
    ///
    /// The revision bumps only when membership actually changes. Resetting an
    /// already full set, or toggling an unknown value, leaves it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Flips the entry at `idx`. Returns `true` if `idx` was in range.
    pub fn toggle_at(&mut self, idx: usize) -> bool {
        let Some(flag) = self.active.get_mut(idx) else {
            return false;
        };
        *flag = !*flag;
        self.bump_revision();
        true
    }

    /// Marks every entry active.
    pub fn reset(&mut self) {
        if self.is_full() {
            return;
        }
        self.active.iter_mut().for_each(|on| *on = true);
        self.bump_revision();
    }

    /// Replaces the domain; every new entry starts active.
    pub fn replace_domain<I>(&mut self, domain: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.domain = domain.into_iter().collect();
        self.active = alloc::vec![true; self.domain.len()];
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> ActiveSet<T>
where
    T: PartialEq,
{
    /// Returns the domain position of `value`, if known.
    #[must_use]
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.domain.iter().position(|v| v == value)
    }

    /// Returns `true` if `value` is in the domain and active.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value)
            .is_some_and(|idx| self.is_active_at(idx))
    }

    /// Flips `value` between active and inactive.
    ///
    /// Values outside the domain are ignored. Returns `true` if the state
    /// changed.
    pub fn toggle(&mut self, value: &T) -> bool {
        match self.position_of(value) {
            Some(idx) => self.toggle_at(idx),
            None => false,
        }
    }

    /// Sets the flag of `value`. Returns `true` if the state changed.
    pub fn set_active(&mut self, value: &T, active: bool) -> bool {
        let Some(idx) = self.position_of(value) else {
            return false;
        };
        if self.active[idx] == active {
            return false;
        }
        self.active[idx] = active;
        self.bump_revision();
        true
    }
}

/// The pair of active sets that decides which points are visible.
///
/// A point is visible iff its author group **and** its category are both
/// active. The state is owned by a single presentation layer and mutated only
/// through the transitions below.
#[derive(Clone, Debug, Default)]
pub struct FilterState<T> {
    authors: ActiveSet<T>,
    categories: ActiveSet<T>,
}

impl<T> FilterState<T> {
    /// Creates a fully active filter over the two domains.
    #[must_use]
    pub fn new<A, C>(authors: A, categories: C) -> Self
    where
        A: IntoIterator<Item = T>,
        C: IntoIterator<Item = T>,
    {
        Self {
            authors: ActiveSet::new(authors),
            categories: ActiveSet::new(categories),
        }
    }

    /// Returns the author-group set.
    #[must_use]
    pub fn authors(&self) -> &ActiveSet<T> {
        &self.authors
    }

    /// Returns the category set.
    #[must_use]
    pub fn categories(&self) -> &ActiveSet<T> {
        &self.categories
    }

    /// Returns the set for `facet`.
    #[must_use]
    pub fn facet(&self, facet: Facet) -> &ActiveSet<T> {
        match facet {
            Facet::Author => &self.authors,
            Facet::Category => &self.categories,
        }
    }

    fn facet_mut(&mut self, facet: Facet) -> &mut ActiveSet<T> {
        match facet {
            Facet::Author => &mut self.authors,
            Facet::Category => &mut self.categories,
        }
    }

    /// Flips the entry at `idx` of `facet`. Returns `true` if it changed.
    pub fn toggle_at(&mut self, facet: Facet, idx: usize) -> bool {
        self.facet_mut(facet).toggle_at(idx)
    }

    /// Restores both sets to their full domains.
    ///
    /// Idempotent: calling it on a full filter changes nothing.
    pub fn reset(&mut self) {
        self.authors.reset();
        self.categories.reset();
    }

    /// Installs a new category domain and resets both sets.
    ///
    /// This mirrors switching the shape field: prior author and category
    /// filters are dropped.
    pub fn switch_categories<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.categories.replace_domain(categories);
        self.authors.reset();
    }

    /// Visibility by domain position, for callers that pre-resolved indices.
    #[must_use]
    pub fn is_visible_at(&self, author_idx: usize, category_idx: usize) -> bool {
        self.authors.is_active_at(author_idx) && self.categories.is_active_at(category_idx)
    }

    /// Combined revision of both sets; changes whenever either changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.authors
            .revision()
            .wrapping_add(self.categories.revision())
    }
}

impl<T> FilterState<T>
where
    T: PartialEq,
{
    /// Flips `value` in the set for `facet`.
    ///
    /// Unknown values are a silent no-op. Returns `true` if the state changed.
    pub fn toggle(&mut self, facet: Facet, value: &T) -> bool {
        self.facet_mut(facet).toggle(value)
    }

    /// Sets the flag of `value` in `facet`. Returns `true` if it changed.
    pub fn set_active(&mut self, facet: Facet, value: &T, active: bool) -> bool {
        self.facet_mut(facet).set_active(value, active)
    }

    /// The visibility predicate: author active AND category active.
    #[must_use]
    pub fn is_visible(&self, author: &T, category: &T) -> bool {
        self.authors.contains(author) && self.categories.contains(category)
    }
}
