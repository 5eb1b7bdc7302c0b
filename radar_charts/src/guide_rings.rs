// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background guide rings.
//!
//! Rings are concentric polygons made of one straight segment per category. They carry no
//! data, so their mark ids are purely positional: `(level, segment)`.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use radar_core::{Mark, MarkId};

use crate::config::StrokeStyle;
use crate::geometry::RadarFrame;
use crate::z_order;

/// One straight piece of a guide ring, in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSegment {
    /// Ring index, innermost first.
    pub level: usize,
    /// Segment index; segment `i` joins axis `i` to axis `i + 1`.
    pub index: usize,
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// Guide ring generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideRingsSpec {
    /// Stable-id namespace.
    pub id_base: u64,
    /// Number of levels; `levels - 1` rings are drawn.
    pub levels: usize,
    /// Segment stroke.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl GuideRingsSpec {
    /// Creates a spec with the given level count and default stroke.
    pub fn new(id_base: u64, levels: usize) -> Self {
        Self {
            id_base,
            levels: levels.max(1),
            stroke: StrokeStyle::default(),
            z_index: z_order::GUIDE_RINGS,
        }
    }

    /// Sets the segment stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Number of rings drawn.
    pub fn ring_count(&self) -> usize {
        self.levels.saturating_sub(1)
    }

    /// Radius of ring `level`: `radius * (level + 1) / levels`.
    pub fn level_radius(&self, frame: &RadarFrame, level: usize) -> f64 {
        frame.radius * (level + 1) as f64 / self.levels as f64
    }

    /// Computes every ring segment for `frame`.
    pub fn segments(&self, frame: &RadarFrame) -> Vec<RingSegment> {
        let c = frame.category_count;
        let mut out = Vec::with_capacity(self.ring_count() * c);
        for level in 0..self.ring_count() {
            let r = self.level_radius(frame, level);
            for index in 0..c {
                out.push(RingSegment {
                    level,
                    index,
                    from: frame.scene_point(index, r),
                    to: frame.scene_point(index + 1, r),
                });
            }
        }
        out
    }

    /// Generates one stroked path mark per segment.
    pub fn marks(&self, frame: &RadarFrame) -> Vec<Mark> {
        self.segments(frame)
            .into_iter()
            .map(|s| {
                let mut p = BezPath::new();
                p.move_to(s.from);
                p.line_to(s.to);
                Mark::path(MarkId::for_key(self.id_base, &(s.level, s.index)), p)
                    .with_z_index(self.z_index)
                    .with_stroke(self.stroke.brush.clone(), self.stroke.stroke_width)
            })
            .collect()
    }
}
