// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_filter::Facet;
use folio_scale::Symbol;
use peniko::Color;

/// Addresses one entry of one legend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LegendKey {
    /// Which legend.
    pub facet: Facet,
    /// Position of the entry in that legend's domain.
    pub index: usize,
}

impl LegendKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(facet: Facet, index: usize) -> Self {
        Self { facet, index }
    }
}

/// A legend row: marker, label and toggle state.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Where this entry lives.
    pub key: LegendKey,
    /// Display label (author group or category value).
    pub label: String,
    /// Marker shape shown next to the label.
    pub symbol: Symbol,
    /// Marker fill.
    pub color: Color,
    /// Whether the toggle is on.
    pub active: bool,
}
