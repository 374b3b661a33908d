// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::HashMap;

/// Ordered set of distinct values, kept in first-occurrence order.
///
/// Duplicates in the input are dropped; the first time a value is seen fixes
/// its position. Lookups by value go through a hash index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<T>
where
    T: Hash + Eq,
{
    values: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T> Domain<T>
where
    T: Hash + Eq + Clone,
{
    /// Builds a domain from a sequence, keeping first occurrences.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = values.into_iter();
        let (lower, _) = iter.size_hint();
        let mut domain = Self {
            values: Vec::new(),
            index: HashMap::with_capacity(lower.min(64)),
        };
        for value in iter {
            domain.insert(value);
        }
        domain
    }

    /// Appends `value` if it is not already present and returns its position.
    pub fn insert(&mut self, value: T) -> usize {
        if let Some(&idx) = self.index.get(&value) {
            return idx;
        }
        let idx = self.values.len();
        self.index.insert(value.clone(), idx);
        self.values.push(value);
        idx
    }
}

impl<T> Domain<T>
where
    T: Hash + Eq,
{
    /// Returns the values in domain order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the position of `value`, if present.
    #[must_use]
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// Returns `true` if `value` is part of the domain.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Returns the value at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.values.get(idx)
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the domain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the values in domain order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> Default for Domain<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> FromIterator<T> for Domain<T>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a, T> IntoIterator for &'a Domain<T>
where
    T: Hash + Eq,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn keeps_first_occurrence_order() {
        let domain = Domain::from_values(["b", "a", "b", "c", "a"]);
        assert_eq!(domain.values(), &["b", "a", "c"]);
        assert_eq!(domain.index_of("c"), Some(2));
        assert_eq!(domain.index_of("z"), None);
    }

    #[test]
    fn borrowed_lookup_on_owned_values() {
        let domain: Domain<String> = ["Poetry", "Drama"].into_iter().map(String::from).collect();
        assert!(domain.contains("Drama"));
        assert_eq!(domain.index_of("Poetry"), Some(0));
    }

    #[test]
    fn insert_returns_existing_position() {
        let mut domain = Domain::from_values([1, 2]);
        assert_eq!(domain.insert(2), 1);
        assert_eq!(domain.insert(3), 2);
        assert_eq!(domain.len(), 3);
    }
}
