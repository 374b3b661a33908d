// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Scale: headless scale primitives for categorical scatter plots.
//!
//! - [`Domain`]: the distinct values of a field, in **first-occurrence** order.
//!   Order is never sorted, so marker assignment is reproducible from the
//!   input sequence alone.
//! - [`OrdinalScale`]: maps each domain value to a marker by position. When
//!   the domain is longer than the range, assignment wraps around.
//! - [`Symbol`]: the seven area-sized marker shapes, as [`kurbo::BezPath`]s.
//! - [`AUTHOR_PALETTE`]: the seven author colours.
//! - [`LinearScale`]: continuous mapping with "nice" tick generation.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_scale::{Domain, Symbol, shape_scale};
//!
//! let genres = ["Poetry", "Drama", "Poetry", "Fiction"];
//! let domain: Domain<&str> = genres.into_iter().collect();
//! assert_eq!(domain.values(), &["Poetry", "Drama", "Fiction"]);
//!
//! let shapes = shape_scale(domain);
//! assert_eq!(shapes.get("Drama"), Some(&Symbol::Cross));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod domain;
mod linear;
mod ordinal;
mod palette;
mod symbol;

pub use domain::Domain;
pub use linear::{LinearScale, MAX_TICKS};
pub use ordinal::OrdinalScale;
pub use palette::{AUTHOR_PALETTE, CATEGORY_FILL, color_scale};
pub use symbol::{Symbol, shape_scale};
