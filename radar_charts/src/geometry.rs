// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar geometry shared by rings, axes and series.
//!
//! Every layer goes through [`point_on_axis`] so they line up exactly. The mapping is
//! `(r * sin(i * step), r * cos(i * step))` in a y-up frame: index 0 points up and indices
//! increase clockwise. [`RadarFrame::to_scene`] flips into the y-down scene frame.

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Vec2};

use crate::layout::RadarLayout;
use crate::scale::ScaleLinear;

/// Angle between neighbouring axes for `category_count` axes.
///
/// Returns `0.0` for zero categories.
pub fn angular_step(category_count: usize) -> f64 {
    if category_count == 0 {
        return 0.0;
    }
    TAU / category_count as f64
}

/// Point at `radial_distance` along axis `category_index`, in the y-up polar frame.
pub fn point_on_axis(angular_step: f64, category_index: usize, radial_distance: f64) -> Point {
    let angle = category_index as f64 * angular_step;
    Point::new(radial_distance * angle.sin(), radial_distance * angle.cos())
}

/// Unit direction of axis `category_index`, in the y-up polar frame.
pub fn axis_direction(angular_step: f64, category_index: usize) -> Vec2 {
    point_on_axis(angular_step, category_index, 1.0).to_vec2()
}

/// Layout parameters of one update cycle.
///
/// A frame is derived from the data and viewport of a single update and handed to every
/// layer of that update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarFrame {
    /// Center of the radar in scene coordinates.
    pub center: Point,
    /// Outer radius in scene units.
    pub radius: f64,
    /// Number of categories (axes).
    pub category_count: usize,
    /// `2π / category_count`.
    pub angular_step: f64,
    /// Maps stacked values onto `[0, radius]`.
    pub value_scale: ScaleLinear,
}

impl RadarFrame {
    /// Creates a frame for `category_count` axes whose stacked values peak at `max_total`.
    pub fn new(center: Point, radius: f64, category_count: usize, max_total: f64) -> Self {
        let radius = radius.max(0.0);
        Self {
            center,
            radius,
            category_count,
            angular_step: angular_step(category_count),
            value_scale: ScaleLinear::radial(max_total, radius),
        }
    }

    /// Creates a frame from an arranged layout.
    pub fn from_layout(layout: &RadarLayout, category_count: usize, max_total: f64) -> Self {
        Self::new(layout.center, layout.radius, category_count, max_total)
    }

    /// Point at `radial_distance` on axis `category_index`, in the y-up polar frame.
    pub fn polar(&self, category_index: usize, radial_distance: f64) -> Point {
        point_on_axis(self.angular_step, category_index, radial_distance)
    }

    /// Moves a y-up polar point into scene coordinates around [`RadarFrame::center`].
    pub fn to_scene(&self, polar: Point) -> Point {
        Point::new(self.center.x + polar.x, self.center.y - polar.y)
    }

    /// Scene point at `radial_distance` on axis `category_index`.
    pub fn scene_point(&self, category_index: usize, radial_distance: f64) -> Point {
        self.to_scene(self.polar(category_index, radial_distance))
    }

    /// Scene point for a stacked data value on axis `category_index`.
    pub fn value_point(&self, category_index: usize, value: f64) -> Point {
        self.scene_point(category_index, self.value_scale.map(value))
    }
}
