// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use peniko::Brush;
use peniko::color::palette::css;

use crate::layout::Margins;

/// A paint + width pair for stroked paths (ring segments, spokes, polygon outlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::GRAY, 1.0)
    }
}

/// Immutable configuration of one radar chart instance.
///
/// Build with [`RadarConfig::default`] and the `with_*` methods; hand the result to
/// [`RadarChart::new`](crate::RadarChart::new).
#[derive(Clone, Debug, PartialEq)]
pub struct RadarConfig {
    /// Space reserved around the plot area.
    pub margins: Margins,
    /// Number of guide levels; `segment_levels - 1` rings are drawn.
    pub segment_levels: usize,
    /// Polygon opacity when not hovered.
    pub base_opacity: f64,
    /// Polygon opacity while hovered.
    pub highlight_opacity: f64,
    /// Radius of the per-point markers.
    pub dot_radius: f64,
    /// Outline width of the series polygons.
    pub series_stroke_width: f64,
    /// Gap between a spoke end and its label.
    pub label_offset: f64,
    /// Font size of axis labels.
    pub label_font_size: f64,
    /// Fill paint of axis labels.
    pub label_fill: Brush,
    /// Stroke of guide ring segments.
    pub ring_stroke: StrokeStyle,
    /// Stroke of axis spokes.
    pub axis_stroke: StrokeStyle,
    /// Namespace for mark ids, so several charts can share one renderer.
    pub id_base: u64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            segment_levels: 6,
            base_opacity: 0.5,
            highlight_opacity: 1.0,
            dot_radius: 5.0,
            series_stroke_width: 2.0,
            label_offset: 10.0,
            label_font_size: 12.0,
            label_fill: css::DIM_GRAY.into(),
            ring_stroke: StrokeStyle::solid(css::LIGHT_GRAY, 1.0),
            axis_stroke: StrokeStyle::solid(css::GRAY, 1.0),
            id_base: 0,
        }
    }
}

impl RadarConfig {
    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the number of guide levels (at least 1).
    pub fn with_segment_levels(mut self, levels: usize) -> Self {
        self.segment_levels = levels.max(1);
        self
    }

    /// Sets the idle polygon opacity, clamped to `[0, 1]`.
    pub fn with_base_opacity(mut self, opacity: f64) -> Self {
        self.base_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the hovered polygon opacity, clamped to `[0, 1]`.
    pub fn with_highlight_opacity(mut self, opacity: f64) -> Self {
        self.highlight_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the marker radius.
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius.max(0.0);
        self
    }

    /// Sets the polygon outline width.
    pub fn with_series_stroke_width(mut self, width: f64) -> Self {
        self.series_stroke_width = width.max(0.0);
        self
    }

    /// Sets the gap between spoke ends and labels.
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    /// Sets the axis label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the axis label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Sets the guide ring stroke.
    pub fn with_ring_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.ring_stroke = stroke;
        self
    }

    /// Sets the axis spoke stroke.
    pub fn with_axis_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.axis_stroke = stroke;
        self
    }

    /// Sets the mark id namespace.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }
}
