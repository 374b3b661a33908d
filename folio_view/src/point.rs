// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use folio_data::RecordId;
use folio_scale::Symbol;
use kurbo::Point;
use peniko::Color;

/// Everything a renderer needs to draw one record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointView {
    /// The record this point shows.
    pub id: RecordId,
    /// Marker centre in canvas coordinates.
    pub position: Point,
    /// Marker shape, from the current category.
    pub symbol: Symbol,
    /// Marker fill, from the author group.
    pub color: Color,
    /// Whether the filter currently admits this point.
    pub visible: bool,
    /// Opacity to draw with: `1.0` when visible, dimmed otherwise.
    pub opacity: f64,
}

/// One `label: value` row of a tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipLine {
    /// Field label.
    pub label: &'static str,
    /// Field value as displayed.
    pub value: String,
}

/// Hover text for a record, read straight from its current field values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    /// The record described.
    pub id: RecordId,
    /// Rows in display order.
    pub lines: Vec<TooltipLine>,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}
