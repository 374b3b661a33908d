// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use tracing::debug;

use crate::{Dataset, RecordId};

/// Catch-all group for authors that do not qualify for their own colour.
pub const OTHER_GROUP: &str = "Other";

/// Default publication-count threshold.
pub const DEFAULT_THRESHOLD: usize = 5;

/// Frequency-threshold author grouping.
///
/// An author keeps their own identifier as group label only when they have
/// strictly more than `threshold` works in the dataset; everyone else is
/// folded into [`OTHER_GROUP`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AuthorGrouping {
    /// Works an author must exceed to form their own group.
    pub threshold: usize,
}

impl AuthorGrouping {
    /// Creates a grouping with the given threshold.
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Returns the group label for `author` given its work count.
    #[must_use]
    pub fn group_for<'a>(&self, author: &'a str, count: usize) -> &'a str {
        if count > self.threshold {
            author
        } else {
            OTHER_GROUP
        }
    }
}

impl Default for AuthorGrouping {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Author group per record, derived once from a [`Dataset`].
///
/// This is a parallel lookup: the dataset itself is left untouched. Group
/// labels are interned so that every record refers to one of a small set of
/// distinct strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorGroups {
    labels: Vec<String>,
    by_record: Vec<usize>,
    counts: HashMap<String, usize>,
    grouping: AuthorGrouping,
}

impl AuthorGroups {
    /// Derives the group of every record in `dataset`.
    #[must_use]
    pub fn derive(dataset: &Dataset, grouping: AuthorGrouping) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in dataset.records() {
            *counts.entry_ref(record.author.as_str()).or_insert(0) += 1;
        }

        let mut labels: Vec<String> = Vec::new();
        let mut label_index: HashMap<String, usize> = HashMap::new();
        let mut by_record = Vec::with_capacity(dataset.len());
        for record in dataset.records() {
            let count = counts.get(record.author.as_str()).copied().unwrap_or(0);
            let label = grouping.group_for(&record.author, count);
            let idx = *label_index.entry_ref(label).or_insert_with(|| {
                labels.push(label.to_owned());
                labels.len() - 1
            });
            by_record.push(idx);
        }

        debug!(
            authors = counts.len(),
            groups = labels.len(),
            threshold = grouping.threshold,
            "derived author groups"
        );
        Self {
            labels,
            by_record,
            counts,
            grouping,
        }
    }

    /// Returns the group of record `id`.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&str> {
        self.by_record
            .get(id.0)
            .map(|&label| self.labels[label].as_str())
    }

    /// Iterates over the group of every record, in record order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.by_record
            .iter()
            .map(|&label| self.labels[label].as_str())
    }

    /// Returns the distinct group labels in first-occurrence order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of records covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_record.len()
    }

    /// Returns `true` if no records are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_record.is_empty()
    }

    /// Returns how many works `author` has in the dataset.
    #[must_use]
    pub fn count_of(&self, author: &str) -> usize {
        self.counts.get(author).copied().unwrap_or(0)
    }

    /// Returns the grouping rule these groups were derived with.
    #[must_use]
    pub fn grouping(&self) -> AuthorGrouping {
        self.grouping
    }
}
