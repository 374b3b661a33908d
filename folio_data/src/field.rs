// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

use crate::{ParseFieldError, WorkRecord};

/// The attribute that currently drives point shapes.
///
/// Exactly two fields exist; switching between them is a closed choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryField {
    /// The `Simple Genre` column.
    #[default]
    Genre,
    /// The `Century` column.
    Century,
}

impl CategoryField {
    /// Both fields, in selector order.
    pub const ALL: [Self; 2] = [Self::Genre, Self::Century];

    /// Column name in the source table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Genre => "Simple Genre",
            Self::Century => "Century",
        }
    }

    /// Human-readable label, used as the shape legend heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Genre => "Genre",
            Self::Century => "Century",
        }
    }

    /// Returns this field's value for `record`.
    #[must_use]
    pub fn value_of(self, record: &WorkRecord) -> &str {
        match self {
            Self::Genre => &record.genre,
            Self::Century => &record.century,
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| {
                trimmed.eq_ignore_ascii_case(field.label())
                    || trimmed.eq_ignore_ascii_case(field.column())
            })
            .ok_or_else(|| ParseFieldError(trimmed.to_owned()))
    }
}
