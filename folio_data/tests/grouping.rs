// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for author grouping over loaded datasets.

use folio_data::{AuthorGrouping, AuthorGroups, Dataset, OTHER_GROUP, RecordId, WorkRecord};

fn work(author: &str) -> WorkRecord {
    WorkRecord {
        pc1: 0.0,
        pc2: 0.0,
        author: author.into(),
        full_author: format!("{author} (full)"),
        genre: "Poetry".into(),
        century: "17th".into(),
        title: format!("A work by {author}"),
    }
}

fn dataset(authors: &[(&str, usize)]) -> Dataset {
    let mut records = Vec::new();
    for &(author, count) in authors {
        for _ in 0..count {
            records.push(work(author));
        }
    }
    Dataset::from_records(records)
}

#[test]
fn frequent_author_keeps_identifier_and_rare_author_is_other() {
    let data = dataset(&[("a", 6), ("b", 2)]);
    let groups = AuthorGroups::derive(&data, AuthorGrouping::new(5));

    for (id, record) in data.iter() {
        let expected = if record.author == "a" { "a" } else { OTHER_GROUP };
        assert_eq!(groups.get(id), Some(expected));
    }
    assert_eq!(groups.labels(), &["a".to_owned(), OTHER_GROUP.to_owned()]);
}

#[test]
fn threshold_is_strict() {
    let data = dataset(&[("a", 5), ("b", 6)]);
    let groups = AuthorGroups::derive(&data, AuthorGrouping::default());
    assert_eq!(groups.get(RecordId(0)), Some(OTHER_GROUP));
    assert_eq!(groups.get(RecordId(5)), Some("b"));
}

#[test]
fn lower_threshold_admits_more_authors() {
    let data = dataset(&[("a", 4), ("b", 2)]);
    let groups = AuthorGroups::derive(&data, AuthorGrouping::new(3));
    assert_eq!(groups.get(RecordId(0)), Some("a"));
    assert_eq!(groups.get(RecordId(4)), Some(OTHER_GROUP));
}

#[test]
fn every_record_has_exactly_one_group() {
    let data = dataset(&[("a", 7), ("b", 1), ("c", 9), ("d", 3)]);
    let groups = AuthorGroups::derive(&data, AuthorGrouping::default());
    assert_eq!(groups.len(), data.len());
    assert_eq!(groups.iter().count(), data.len());
    assert!(groups.get(RecordId(data.len())).is_none());
}

#[test]
fn derivation_leaves_dataset_untouched() {
    let data = dataset(&[("a", 6), ("b", 2)]);
    let before = data.clone();
    let _groups = AuthorGroups::derive(&data, AuthorGrouping::default());
    assert_eq!(data, before);
}

#[test]
fn counts_are_reported_per_author() {
    let data = dataset(&[("a", 6), ("b", 2)]);
    let groups = AuthorGroups::derive(&data, AuthorGrouping::default());
    assert_eq!(groups.count_of("a"), 6);
    assert_eq!(groups.count_of("b"), 2);
    assert_eq!(groups.count_of("zz"), 0);
}
