// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io;
use std::ops::Index;
use std::path::Path;

use tracing::{debug, info};

use crate::{LoadError, WorkRecord};

/// Index of a record within its [`Dataset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub usize);

impl RecordId {
    /// Returns the position of the record in load order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable, fully loaded set of works.
///
/// Records keep their load order; every derived attribute is computed from
/// this order and addressed by [`RecordId`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<WorkRecord>,
}

impl Dataset {
    /// Wraps already-parsed records.
    #[must_use]
    pub fn from_records(records: Vec<WorkRecord>) -> Self {
        Self { records }
    }

    /// Reads a CSV table with a header row.
    ///
    /// Fails on the first unreadable row, on non-finite coordinates, and on a
    /// table without data rows.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (idx, row) in csv.deserialize::<WorkRecord>().enumerate() {
            let record = row?;
            if !record.pc1.is_finite() || !record.pc2.is_finite() {
                return Err(LoadError::NonFinite { row: idx + 1 });
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(LoadError::Empty);
        }
        info!(rows = records.len(), "loaded dataset");
        Ok(Self { records })
    }

    /// Opens and reads a CSV file. See [`Dataset::from_csv_reader`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dataset");
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(io::BufReader::new(file))
    }

    /// Returns all records in load order.
    #[must_use]
    pub fn records(&self) -> &[WorkRecord] {
        &self.records
    }

    /// Returns the record for `id`, if present.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&WorkRecord> {
        self.records.get(id.0)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records together with their ids.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (RecordId, &WorkRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| (RecordId(idx), record))
    }

    /// Iterates over all record ids.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = RecordId> + use<> {
        (0..self.records.len()).map(RecordId)
    }
}

impl Index<RecordId> for Dataset {
    type Output = WorkRecord;

    fn index(&self, id: RecordId) -> &WorkRecord {
        &self.records[id.0]
    }
}
