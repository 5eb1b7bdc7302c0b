// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identity and payload types.
//!
//! A mark is one drawable element of the scene: a path (guide ring segment, spoke, series
//! polygon, point marker, legend swatch) or a text run (axis label, legend label). Marks
//! are matched across updates purely by [`MarkId`], so ids must be derived from whatever
//! gives the element its identity (a position, a category, a series ordinal).

extern crate alloc;

use alloc::string::String;
use core::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;
use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// Seed for [`MarkId::for_key`]; fixed so ids are reproducible across runs.
const MARK_ID_SEED: u64 = 0x7261_6461_725f_6964;

/// Stable identity of a mark across updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id from a namespace and any hashable key.
    ///
    /// The same `(namespace, key)` pair always yields the same id.
    pub fn for_key<K: Hash + ?Sized>(namespace: u64, key: &K) -> Self {
        Self(FixedState::with_seed(MARK_ID_SEED).hash_one((namespace, key)))
    }
}

/// The kind of payload a mark carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A filled and/or stroked path.
    Path,
    /// A single line of unshaped text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is the start of the text run.
    #[default]
    Start,
    /// The anchor point is the horizontal middle of the text run.
    Middle,
    /// The anchor point is the end of the text run.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is the vertical middle of the text.
    #[default]
    Middle,
    /// The anchor point is on the alphabetic baseline.
    Alphabetic,
    /// The anchor point is at the top of the text.
    Hanging,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables the stroke.
    pub stroke_width: f64,
    /// Group opacity applied to fill and stroke, in `[0, 1]`.
    pub opacity: f64,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// What a mark draws.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A path.
    Path(PathPayload),
    /// A text run.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, if they are known without text measurement.
    ///
    /// Text marks return `None`: their extent depends on the renderer's font metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A drawable element with a stable id and a paint-order hint.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint-order hint; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a path mark with a transparent fill, no stroke and full opacity.
    pub fn path(id: MarkId, path: BezPath) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Path(PathPayload {
                path,
                fill: Brush::Solid(peniko::Color::TRANSPARENT),
                stroke: Brush::default(),
                stroke_width: 0.0,
                opacity: 1.0,
            }),
        }
    }

    /// Creates a text mark with default styling.
    pub fn text(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Text(TextPayload {
                pos,
                text: text.into(),
                font_size: 12.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: Brush::default(),
            }),
        }
    }

    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint (paths and text).
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        match &mut self.payload {
            MarkPayload::Path(p) => p.fill = fill,
            MarkPayload::Text(t) => t.fill = fill,
        }
        self
    }

    /// Sets the stroke paint and width. No effect on text marks.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        if let MarkPayload::Path(p) = &mut self.payload {
            p.stroke = stroke.into();
            p.stroke_width = stroke_width;
        }
        self
    }

    /// Sets the opacity, clamped to `[0, 1]`. No effect on text marks.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        if let MarkPayload::Path(p) = &mut self.payload {
            p.opacity = opacity.clamp(0.0, 1.0);
        }
        self
    }

    /// Sets the font size. No effect on path marks.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.font_size = font_size;
        }
        self
    }

    /// Sets text anchor and baseline. No effect on path marks.
    pub fn with_text_align(mut self, anchor: TextAnchor, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.anchor = anchor;
            t.baseline = baseline;
        }
        self
    }
}
