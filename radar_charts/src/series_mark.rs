// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked series polygons and point markers.
//!
//! Each series becomes one closed polygon through the tops of its stacked points, plus one
//! circular marker per point. Polygons are keyed by series ordinal and markers by
//! `(series, category)`, so a new update with the same shape only updates geometry.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Shape};
use radar_core::{Mark, MarkId};

use crate::convert::{Series, SeriesCollection};
use crate::geometry::RadarFrame;
use crate::z_order;

/// Curve flattening tolerance for marker circles.
const MARKER_TOLERANCE: f64 = 0.1;

/// Stacked series mark generator.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedSeriesSpec {
    /// Stable-id namespace.
    pub id_base: u64,
    /// Polygon outline width.
    pub stroke_width: f64,
    /// Marker radius; `0.0` disables markers.
    pub dot_radius: f64,
}

impl StackedSeriesSpec {
    /// Creates a spec with a 2px outline and 5px markers.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            stroke_width: 2.0,
            dot_radius: 5.0,
        }
    }

    /// Sets the polygon outline width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the marker radius.
    pub fn with_dot_radius(mut self, dot_radius: f64) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    /// Scene-space vertices of a series polygon, one per category.
    pub fn vertices(&self, frame: &RadarFrame, series: &Series) -> Vec<Point> {
        series
            .points
            .iter()
            .map(|p| frame.value_point(p.category_index, p.stacked_top()))
            .collect()
    }

    /// Closed polygon path through `vertices`.
    pub fn polygon(vertices: &[Point]) -> BezPath {
        let mut path = BezPath::new();
        let mut it = vertices.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }

    /// Generates polygon and marker marks.
    ///
    /// `opacity` returns the current polygon opacity for a series index.
    pub fn marks(
        &self,
        frame: &RadarFrame,
        collection: &SeriesCollection,
        opacity: impl Fn(usize) -> f64,
    ) -> Vec<Mark> {
        let mut out = Vec::new();
        for (index, series) in collection.series().iter().enumerate() {
            let vertices = self.vertices(frame, series);
            // Outer (later) series sit below inner ones so every layer stays visible.
            let depth = i32::try_from(index).unwrap_or(i32::MAX);
            out.push(
                Mark::path(self.polygon_id(index), Self::polygon(&vertices))
                    .with_z_index(z_order::SERIES_FILL.saturating_sub(depth))
                    .with_fill(series.color)
                    .with_stroke(series.color, self.stroke_width)
                    .with_opacity(opacity(index)),
            );
            if self.dot_radius > 0.0 {
                for (category, center) in vertices.into_iter().enumerate() {
                    let dot = Circle::new(center, self.dot_radius)
                        .path_elements(MARKER_TOLERANCE)
                        .collect();
                    out.push(
                        Mark::path(self.marker_id(index, category), dot)
                            .with_z_index(z_order::SERIES_POINTS)
                            .with_fill(series.color),
                    );
                }
            }
        }
        out
    }

    /// Mark id of a series polygon.
    pub fn polygon_id(&self, series: usize) -> MarkId {
        MarkId::for_key(self.id_base, &(0_u8, series))
    }

    /// Mark id of a point marker.
    pub fn marker_id(&self, series: usize, category: usize) -> MarkId {
        MarkId::for_key(self.id_base, &(1_u8, series, category))
    }
}
