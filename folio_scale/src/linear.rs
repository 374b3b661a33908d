// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Upper bound on the tick count passed to [`LinearScale::ticks`].
pub const MAX_TICKS: usize = 100;

/// A continuous linear mapping from a data domain to a pixel range.
///
/// Ranges may be inverted (for example `height..0` for a y axis that grows
/// upwards). Values outside the domain extrapolate linearly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale mapping `domain.0 -> range.0` and `domain.1 -> range.1`.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the data domain.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the output range.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value into the range.
    ///
    /// A degenerate domain maps every value to the middle of the range.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Maps a range value back into the domain.
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        Self::new(self.range, self.domain).map(value)
    }

    /// Returns roughly `count` evenly spaced ticks on 1-2-5 multiples of a
    /// power of ten, all inside the domain, in domain order.
    ///
    /// `count` is clamped to [`MAX_TICKS`].
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tick indices are bounded by the requested count"
    )]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return Vec::from([start]);
        }
        let reverse = stop < start;
        if reverse {
            core::mem::swap(&mut start, &mut stop);
        }

        let mut ticks = Vec::new();
        let Some(step) = tick_step(start, stop, count.min(MAX_TICKS)) else {
            return ticks;
        };
        match step {
            TickStep::Multiple(inc) => {
                let i0 = libm::ceil(start / inc) as i64;
                let i1 = libm::floor(stop / inc) as i64;
                ticks.extend((i0..=i1).map(|i| i as f64 * inc));
            }
            TickStep::Fraction(inv) => {
                let i0 = libm::ceil(start * inv) as i64;
                let i1 = libm::floor(stop * inv) as i64;
                ticks.extend((i0..=i1).map(|i| i as f64 / inv));
            }
        }
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Tick spacing: either a whole multiple (`>= 1`) or the reciprocal of a
/// spacing below one, which keeps decimal ticks exact after division.
#[derive(Copy, Clone, Debug, PartialEq)]
enum TickStep {
    Multiple(f64),
    Fraction(f64),
}

fn tick_step(start: f64, stop: f64, count: usize) -> Option<TickStep> {
    let step = (stop - start) / count as f64;
    if step <= 0.0 || !step.is_finite() {
        return None;
    }
    let power = libm::floor(libm::log10(step));
    let error = step / libm::pow(10.0, power);
    let factor = if error >= libm::sqrt(50.0) {
        10.0
    } else if error >= libm::sqrt(10.0) {
        5.0
    } else if error >= libm::sqrt(2.0) {
        2.0
    } else {
        1.0
    };
    Some(if power >= 0.0 {
        TickStep::Multiple(factor * libm::pow(10.0, power))
    } else {
        TickStep::Fraction(libm::pow(10.0, -power) / factor)
    })
}
