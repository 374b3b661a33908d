// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for loading datasets from disk.

use std::io::Write as _;

use folio_data::{CategoryField, Dataset, LoadError, RecordId};

#[test]
fn loads_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "PC1,PC2,Author,Full Author,Simple Genre,Century,WWO Title\n\
         0.01,-0.02,behn,Aphra Behn,Drama,17th,The Rover\n\
         0.03,0.00,\"cavendish\",\"Margaret Cavendish, Duchess\",Fiction,17th,\"The Blazing World\""
    )
    .unwrap();

    let dataset = Dataset::from_csv_path(file.path()).unwrap();
    assert_eq!(dataset.len(), 2);
    let second = &dataset[RecordId(1)];
    assert_eq!(second.full_author, "Margaret Cavendish, Duchess");
    assert_eq!(CategoryField::Century.value_of(second), "17th");
    assert_eq!(CategoryField::Genre.value_of(second), "Fiction");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let err = Dataset::from_csv_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("absent.csv"));
}
