// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_data::{CategoryField, RecordId};
use folio_event_state::activation::Key;
use folio_event_state::hover::HoverEvent;
use folio_filter::Facet;
use kurbo::Point;

use crate::LegendKey;

/// Input delivered to [`ScatterView::handle`](crate::ScatterView::handle).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// Pointer pressed on a legend entry.
    LegendPointerDown {
        /// Entry under the pointer.
        key: LegendKey,
        /// Pointer position.
        pos: Point,
    },
    /// Pointer released; `key` is the legend entry under it, if any.
    LegendPointerUp {
        /// Entry under the pointer at release.
        key: Option<LegendKey>,
        /// Pointer position.
        pos: Point,
    },
    /// Key pressed while a legend entry of `facet` holds focus.
    LegendKeyPress {
        /// Legend holding keyboard focus.
        facet: Facet,
        /// The key.
        key: Key,
    },
    /// Move keyboard focus to the next entry of a legend.
    FocusNext(Facet),
    /// Move keyboard focus to the previous entry of a legend.
    FocusPrev(Facet),
    /// Pointer moved; carries the point under it, if any.
    PointHover(Option<RecordId>),
    /// The reset control was activated.
    Reset,
    /// The category field selector changed.
    SelectField(CategoryField),
}

/// What changed as a result of a [`ViewEvent`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ViewResponse {
    /// The filter (and therefore point visibility) changed.
    pub filter_changed: bool,
    /// The legends were rebuilt for a new category field.
    pub legends_rebuilt: bool,
    /// Keyboard focus moved to this legend entry.
    pub focus: Option<LegendKey>,
    /// Hover transition, driving the tooltip.
    pub hover: Option<HoverEvent<RecordId>>,
}
