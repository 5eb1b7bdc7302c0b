// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-to-radius scale.

/// A linear mapping from a continuous domain to a continuous range.
///
/// An empty domain (`d0 == d1`) maps every input to the start of the range, so a chart whose
/// values are all zero collapses to its center instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// The radial scale of a radar: `[0, max_total]` onto `[0, radius]`.
    pub fn radial(max_total: f64, radius: f64) -> Self {
        Self::new((0.0, max_total.max(0.0)), (0.0, radius.max(0.0)))
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
