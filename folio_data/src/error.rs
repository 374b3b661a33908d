// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

/// Error returned when a dataset cannot be loaded.
///
/// Loading is all-or-nothing: when any row is unusable no [`Dataset`] is
/// produced.
///
/// [`Dataset`]: crate::Dataset
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A row could not be read or did not match the expected columns.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    /// A coordinate parsed as NaN or infinity.
    #[error("row {row} has a non-finite coordinate")]
    NonFinite {
        /// One-based data row (the header is row zero).
        row: usize,
    },
    /// The table has a header but no data rows.
    #[error("dataset has no rows")]
    Empty,
}

/// Error returned when parsing an unknown [`CategoryField`] name.
///
/// [`CategoryField`]: crate::CategoryField
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category field `{0}` (expected `genre` or `century`)")]
pub struct ParseFieldError(pub String);
