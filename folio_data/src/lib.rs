// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Data: the literary-works dataset behind a Folio scatter plot.
//!
//! A [`Dataset`] is an immutable sequence of [`WorkRecord`]s, one per written
//! work, each carrying two principal-component coordinates plus the textual
//! attributes used for colouring, shaping and tooltips.
//!
//! Derived attributes never touch the loaded records:
//!
//! - [`AuthorGroups`] is a parallel lookup from [`RecordId`] to an author group,
//!   collapsing infrequent authors into [`OTHER_GROUP`].
//! - [`CategoryField`] selects which attribute (genre or century) drives the
//!   shape of each point.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_data::{AuthorGrouping, AuthorGroups, CategoryField, Dataset, RecordId};
//!
//! let csv = "\
//! PC1,PC2,Author,Full Author,Simple Genre,Century,WWO Title
//! 0.01,0.02,behn,Aphra Behn,Drama,17th,The Rover
//! -0.02,0.01,finch,Anne Finch,Poetry,18th,Miscellany Poems
//! ";
//! let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
//! assert_eq!(dataset.len(), 2);
//!
//! let groups = AuthorGroups::derive(&dataset, AuthorGrouping::new(0));
//! assert_eq!(groups.get(RecordId(0)), Some("behn"));
//!
//! let genre = CategoryField::Genre.value_of(&dataset[RecordId(1)]);
//! assert_eq!(genre, "Poetry");
//! ```

mod dataset;
mod error;
mod field;
mod grouping;
mod record;

pub use dataset::{Dataset, RecordId};
pub use error::{LoadError, ParseFieldError};
pub use field::CategoryField;
pub use grouping::{AuthorGrouping, AuthorGroups, DEFAULT_THRESHOLD, OTHER_GROUP};
pub use record::WorkRecord;
