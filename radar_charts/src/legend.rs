// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend model and swatch legend marks.
//!
//! The chart does not draw its legend. After each update it hands a [`LegendData`] to a
//! [`LegendHost`]; hosts that want the legend inside the same scene can turn it into marks
//! with [`LegendSwatchesSpec`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use radar_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::convert::SelectionId;
use crate::layout::Size;
use crate::z_order;

/// One legend row: a series label, its color and its selection identity.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Series display name.
    pub label: String,
    /// Series color.
    pub color: Color,
    /// Series identity.
    pub selection_id: SelectionId,
}

/// Everything a legend needs to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendData {
    /// Legend title (the category column's display name).
    pub title: String,
    /// Entries in series order.
    pub entries: Vec<LegendEntry>,
}

/// The legend-drawing collaborator.
pub trait LegendHost {
    /// Draws `legend` for a chart occupying `viewport`.
    ///
    /// Called once per update; a cleared chart passes an empty entry list.
    fn draw(&mut self, legend: &LegendData, viewport: Size);
}

/// A host that ignores legends.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLegend;

impl LegendHost for NoLegend {
    fn draw(&mut self, _legend: &LegendData, _viewport: Size) {}
}

/// A vertical list of color swatches with labels, under an optional title.
#[derive(Clone, Debug)]
pub struct LegendSwatchesSpec {
    /// Stable-id namespace.
    pub id_base: u64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
}

impl LegendSwatchesSpec {
    /// Creates a legend spec with defaults.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
        }
    }

    /// Sets the label text paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    /// Generates legend marks with the top-left corner at `(x, y)`.
    pub fn marks(&self, legend: &LegendData, x: f64, y: f64) -> Vec<Mark> {
        let mut out = Vec::with_capacity(legend.entries.len() * 2 + 1);
        let row_height = self.row_height();
        let mut top = y;

        if !legend.title.is_empty() {
            out.push(
                Mark::text(
                    MarkId::for_key(self.id_base, &(0_u8, 0_usize)),
                    Point::new(x, top + row_height * 0.5),
                    legend.title.clone(),
                )
                .with_z_index(z_order::LEGEND_LABELS)
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_text_align(TextAnchor::Start, TextBaseline::Middle),
            );
            top += row_height + self.row_gap;
        }

        for (i, entry) in legend.entries.iter().enumerate() {
            let row_y = top + i as f64 * (row_height + self.row_gap);
            let swatch_y = row_y + (row_height - self.swatch_size) * 0.5;
            let swatch = Rect::new(x, swatch_y, x + self.swatch_size, swatch_y + self.swatch_size);

            out.push(
                Mark::path(
                    MarkId::for_key(self.id_base, &(1_u8, i)),
                    swatch.to_path(0.1),
                )
                .with_z_index(z_order::LEGEND_SWATCHES)
                .with_fill(entry.color),
            );
            out.push(
                Mark::text(
                    MarkId::for_key(self.id_base, &(2_u8, i)),
                    Point::new(x + self.swatch_size + self.label_dx, row_y + row_height * 0.5),
                    entry.label.clone(),
                )
                .with_z_index(z_order::LEGEND_LABELS)
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_text_align(TextAnchor::Start, TextBaseline::Middle),
            );
        }
        out
    }
}
