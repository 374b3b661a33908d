// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use peniko::Color;

use crate::{Domain, OrdinalScale};

/// Author colours, in assignment order.
///
/// Seven entries: an eighth author group reuses the first colour.
pub const AUTHOR_PALETTE: [Color; 7] = [
    Color::from_rgb8(0x32, 0x59, 0x81),
    Color::from_rgb8(0xee, 0x66, 0x77),
    Color::from_rgb8(0x22, 0x88, 0x33),
    Color::from_rgb8(0xa1, 0x94, 0x36),
    Color::from_rgb8(0x43, 0xa1, 0xb1),
    Color::from_rgb8(0xaa, 0x33, 0x77),
    Color::from_rgb8(0x88, 0x88, 0x88),
];

/// Fill used for category legend markers, which carry no author colour.
pub const CATEGORY_FILL: Color = Color::BLACK;

/// Builds a colour scale cycling through [`AUTHOR_PALETTE`].
#[must_use]
pub fn color_scale<T>(domain: Domain<T>) -> OrdinalScale<T, Color>
where
    T: Hash + Eq,
{
    OrdinalScale::new(domain, AUTHOR_PALETTE.to_vec())
}
