// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis spokes and labels.
//!
//! One spoke per category runs from the center to the outer radius, with the category label
//! just past its end. Marks are keyed by `(category index, label)`, so renaming or reordering
//! categories exits the old spoke/label and enters a new one, while a pure resize updates in
//! place.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;
use peniko::color::palette::css;
use radar_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::config::StrokeStyle;
use crate::geometry::{RadarFrame, axis_direction};
use crate::z_order;

/// Directions closer than this to vertical/horizontal get centered text alignment.
const ALIGN_EPSILON: f64 = 1e-6;

/// A computed spoke and its label placement, in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLine {
    /// Category index.
    pub index: usize,
    /// Category label.
    pub label: String,
    /// Spoke start (the radar center).
    pub from: Point,
    /// Spoke end, on the outer radius.
    pub to: Point,
    /// Label anchor position.
    pub label_pos: Point,
    /// Horizontal label alignment.
    pub anchor: TextAnchor,
    /// Vertical label alignment.
    pub baseline: TextBaseline,
}

/// Axis generator.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Stable-id namespace.
    pub id_base: u64,
    /// Spoke stroke.
    pub stroke: StrokeStyle,
    /// Gap between the spoke end and the label anchor.
    pub label_offset: f64,
    /// Label font size.
    pub label_font_size: f64,
    /// Label paint.
    pub label_fill: Brush,
}

impl AxisSpec {
    /// Creates an axis spec with default styling.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            stroke: StrokeStyle::default(),
            label_offset: 10.0,
            label_font_size: 12.0,
            label_fill: css::BLACK.into(),
        }
    }

    /// Sets the spoke stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label gap.
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    /// Sets the label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Computes spokes and label placements for `categories`.
    pub fn lines(&self, frame: &RadarFrame, categories: &[String]) -> Vec<AxisLine> {
        categories
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let dir = axis_direction(frame.angular_step, index);
                let anchor = if dir.x > ALIGN_EPSILON {
                    TextAnchor::Start
                } else if dir.x < -ALIGN_EPSILON {
                    TextAnchor::End
                } else {
                    TextAnchor::Middle
                };
                // Upward spokes put text above the anchor, downward ones below it.
                let baseline = if dir.y > ALIGN_EPSILON {
                    TextBaseline::Alphabetic
                } else if dir.y < -ALIGN_EPSILON {
                    TextBaseline::Hanging
                } else {
                    TextBaseline::Middle
                };
                AxisLine {
                    index,
                    label: label.clone(),
                    from: frame.center,
                    to: frame.scene_point(index, frame.radius),
                    label_pos: frame.scene_point(index, frame.radius + self.label_offset),
                    anchor,
                    baseline,
                }
            })
            .collect()
    }

    /// Generates one spoke and one label mark per category.
    pub fn marks(&self, frame: &RadarFrame, categories: &[String]) -> Vec<Mark> {
        let mut out = Vec::with_capacity(categories.len() * 2);
        for line in self.lines(frame, categories) {
            let mut p = BezPath::new();
            p.move_to(line.from);
            p.line_to(line.to);
            out.push(
                Mark::path(self.spoke_id(line.index, &line.label), p)
                    .with_z_index(z_order::AXIS_RULES)
                    .with_stroke(self.stroke.brush.clone(), self.stroke.stroke_width),
            );
            out.push(
                Mark::text(
                    self.label_id(line.index, &line.label),
                    line.label_pos,
                    line.label,
                )
                .with_z_index(z_order::AXIS_LABELS)
                .with_font_size(self.label_font_size)
                .with_fill(self.label_fill.clone())
                .with_text_align(line.anchor, line.baseline),
            );
        }
        out
    }

    /// Mark id of the spoke for a category.
    pub fn spoke_id(&self, index: usize, label: &str) -> MarkId {
        MarkId::for_key(self.id_base, &(0_u8, index, label))
    }

    /// Mark id of the label for a category.
    pub fn label_id(&self, index: usize, label: &str) -> MarkId {
        MarkId::for_key(self.id_base, &(1_u8, index, label))
    }
}
