// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area-sized marker shapes.
//!
//! Sizes are given as an **area** in square pixels, so a circle and a square
//! of the same size carry roughly the same visual weight.

use alloc::vec::Vec;
use core::f64::consts::PI;
use core::hash::Hash;

use kurbo::{BezPath, Circle, Point, Rect, Shape};

use crate::{Domain, OrdinalScale};

const CIRCLE_TOLERANCE: f64 = 0.05;

/// A categorical marker shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Filled circle.
    Circle,
    /// Greek cross.
    Cross,
    /// Rhombus, taller than wide.
    Diamond,
    /// Axis-aligned square.
    Square,
    /// Five-pointed star.
    Star,
    /// Upward-pointing triangle.
    Triangle,
    /// Three-armed "Y".
    Wye,
}

impl Symbol {
    /// All symbols in assignment order.
    pub const ALL: [Self; 7] = [
        Self::Circle,
        Self::Cross,
        Self::Diamond,
        Self::Square,
        Self::Star,
        Self::Triangle,
        Self::Wye,
    ];

    /// Lowercase name of the symbol.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Cross => "cross",
            Self::Diamond => "diamond",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::Wye => "wye",
        }
    }

    /// Builds the outline of this symbol centred at the origin.
    ///
    /// `area` is the approximate filled area; non-positive areas produce an
    /// empty path.
    #[must_use]
    pub fn path(self, area: f64) -> BezPath {
        if area <= 0.0 || !area.is_finite() {
            return BezPath::new();
        }
        match self {
            Self::Circle => {
                let r = libm::sqrt(area / PI);
                Circle::new(Point::ORIGIN, r).to_path(CIRCLE_TOLERANCE)
            }
            Self::Cross => {
                let r = libm::sqrt(area / 5.0) / 2.0;
                polygon(&[
                    (-3.0 * r, -r),
                    (-r, -r),
                    (-r, -3.0 * r),
                    (r, -3.0 * r),
                    (r, -r),
                    (3.0 * r, -r),
                    (3.0 * r, r),
                    (r, r),
                    (r, 3.0 * r),
                    (-r, 3.0 * r),
                    (-r, r),
                    (-3.0 * r, r),
                ])
            }
            Self::Diamond => {
                let tan30 = libm::sqrt(1.0 / 3.0);
                let y = libm::sqrt(area / (tan30 * 2.0));
                let x = y * tan30;
                polygon(&[(0.0, -y), (x, 0.0), (0.0, y), (-x, 0.0)])
            }
            Self::Square => {
                let w = libm::sqrt(area);
                Rect::new(-w / 2.0, -w / 2.0, w / 2.0, w / 2.0).to_path(0.0)
            }
            Self::Star => star(area),
            Self::Triangle => {
                let sqrt3 = libm::sqrt(3.0);
                let y = -libm::sqrt(area / (sqrt3 * 3.0));
                polygon(&[(0.0, y * 2.0), (-sqrt3 * y, -y), (sqrt3 * y, -y)])
            }
            Self::Wye => wye(area),
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        path.move_to(first);
        for p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

fn star(area: f64) -> BezPath {
    // Ratio of the star's area to r^2, and the inner/outer radius ratio.
    const KA: f64 = 0.890_813_091_529_285_2;
    let kr = libm::sin(PI / 10.0) / libm::sin(7.0 * PI / 10.0);
    let kx = libm::sin(2.0 * PI / 10.0) * kr;
    let ky = -libm::cos(2.0 * PI / 10.0) * kr;

    let r = libm::sqrt(area * KA);
    let x = kx * r;
    let y = ky * r;

    let mut points = Vec::with_capacity(10);
    points.push((0.0, -r));
    points.push((x, y));
    for i in 1..5 {
        let a = 2.0 * PI * f64::from(i) / 5.0;
        let (s, c) = (libm::sin(a), libm::cos(a));
        points.push((s * r, -c * r));
        points.push((c * x - s * y, s * x + c * y));
    }
    polygon(&points)
}

fn wye(area: f64) -> BezPath {
    let c = -0.5;
    let s = libm::sqrt(3.0) / 2.0;
    let k = 1.0 / libm::sqrt(12.0);
    let a = (k / 2.0 + 1.0) * 3.0;

    let r = libm::sqrt(area / a);
    let (x0, y0) = (r / 2.0, r * k);
    let (x1, y1) = (x0, r * k + r);
    let (x2, y2) = (-x1, y1);
    polygon(&[
        (x0, y0),
        (x1, y1),
        (x2, y2),
        (c * x0 - s * y0, s * x0 + c * y0),
        (c * x1 - s * y1, s * x1 + c * y1),
        (c * x2 - s * y2, s * x2 + c * y2),
        (c * x0 + s * y0, c * y0 - s * x0),
        (c * x1 + s * y1, c * y1 - s * x1),
        (c * x2 + s * y2, c * y2 - s * x2),
    ])
}

/// Builds a shape scale cycling through [`Symbol::ALL`].
#[must_use]
pub fn shape_scale<T>(domain: Domain<T>) -> OrdinalScale<T, Symbol>
where
    T: Hash + Eq,
{
    OrdinalScale::new(domain, Symbol::ALL.to_vec())
}
