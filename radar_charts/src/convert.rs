// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from a tabular snapshot into per-series point arrays.
//!
//! The host resolves its data query into a [`TableSnapshot`]: one category axis plus any
//! number of value series of the same length. [`convert`] validates the shape and produces a
//! rectangular [`SeriesCollection`] (baselines still zero) and the matching legend.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;
use peniko::Color;
use peniko::color::palette::css;

use crate::error::ConvertError;
use crate::legend::{LegendData, LegendEntry};

/// Seed for selection identities; fixed so identities are reproducible.
const SELECTION_SEED: u64 = 0x7365_6c65_6374_696f;

/// Opaque identity used to correlate highlights with the host's selection system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(pub u64);

impl SelectionId {
    /// Identity of a whole series, derived from its source name.
    pub fn for_series(source: &str) -> Self {
        Self::hash(&(0_u8, source))
    }

    /// Identity of one point, derived from its series source and the value at `category`.
    pub fn for_point(source: &str, category: usize, value: f64) -> Self {
        Self::hash(&(1_u8, source, category, value.to_bits()))
    }

    fn hash<T: Hash>(key: &T) -> Self {
        Self(FixedState::with_seed(SELECTION_SEED).hash_one(key))
    }
}

/// One value column of a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesColumn {
    /// Stable name of the query column this series comes from.
    pub source: String,
    /// Human-readable series name (legend label).
    pub display_name: String,
    /// One value per category.
    pub values: Vec<f64>,
}

impl SeriesColumn {
    /// Creates a column whose display name equals its source name.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        let source = name.into();
        Self {
            display_name: source.clone(),
            source,
            values,
        }
    }

    /// Overrides the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}

/// A fully resolved tabular input for one update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableSnapshot {
    /// Display name of the category column (used as legend title).
    pub category_display_name: String,
    /// Category labels, one per axis.
    pub categories: Vec<String>,
    /// Value series, bottom of the stack first.
    pub series: Vec<SeriesColumn>,
}

impl TableSnapshot {
    /// Creates a snapshot from category labels.
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            category_display_name: String::new(),
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    /// Sets the category column display name.
    pub fn with_category_display_name(mut self, name: impl Into<String>) -> Self {
        self.category_display_name = name.into();
        self
    }

    /// Appends a series on top of the stack.
    pub fn with_series(mut self, series: SeriesColumn) -> Self {
        self.series.push(series);
        self
    }
}

/// Assigns colors to series (the host's palette).
pub trait ColorPalette {
    /// Color of the series at `series_index`.
    fn color_for(&self, series_index: usize) -> Color;
}

/// A fixed categorical palette that cycles.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalPalette {
    colors: Vec<Color>,
}

impl CategoricalPalette {
    /// Creates a palette from explicit colors. An empty list falls back to the default colors.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }
}

impl Default for CategoricalPalette {
    fn default() -> Self {
        Self {
            colors: alloc::vec![
                css::STEEL_BLUE,
                css::DARK_ORANGE,
                css::SEA_GREEN,
                css::CRIMSON,
                css::MEDIUM_PURPLE,
                css::SIENNA,
                css::HOT_PINK,
                css::OLIVE,
            ],
        }
    }
}

impl ColorPalette for CategoricalPalette {
    fn color_for(&self, series_index: usize) -> Color {
        self.colors[series_index % self.colors.len()]
    }
}

/// One series value at one category.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    /// Axis index in `[0, category_count)`.
    pub category_index: usize,
    /// The series value.
    pub raw_value: f64,
    /// Sum of the values of every series below this one, at the same category.
    pub stacked_baseline: f64,
    /// Series color.
    pub color: Color,
    /// Identity of this point.
    pub selection_id: SelectionId,
    /// Category label.
    pub label: Option<String>,
}

impl SeriesPoint {
    /// Radial value of the top of this point (`stacked_baseline + raw_value`).
    pub fn stacked_top(&self) -> f64 {
        self.stacked_baseline + self.raw_value
    }
}

/// One stacked layer of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend label.
    pub display_name: String,
    /// Identity of the whole series.
    pub selection_id: SelectionId,
    /// Series color.
    pub color: Color,
    /// Exactly one point per category, in category order.
    pub points: Vec<SeriesPoint>,
}

/// A rectangular `series x categories` grid of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesCollection {
    categories: Vec<String>,
    series: Vec<Series>,
}

impl SeriesCollection {
    /// Category labels.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Series, bottom of the stack first.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Mutable access for the stacking pass. The shape cannot change through this.
    pub(crate) fn series_mut(&mut self) -> &mut [Series] {
        &mut self.series
    }

    /// Number of series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

/// Output of [`convert`].
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedData {
    /// The point grid, baselines still zero.
    pub collection: SeriesCollection,
    /// Legend model, one entry per series.
    pub legend: LegendData,
}

/// Validates a snapshot and turns it into series points and legend entries.
pub fn convert(
    snapshot: &TableSnapshot,
    palette: &dyn ColorPalette,
) -> Result<ConvertedData, ConvertError> {
    let category_count = snapshot.categories.len();
    if category_count == 0
        || snapshot.series.is_empty()
        || snapshot.series.iter().any(|s| s.values.is_empty())
    {
        return Err(ConvertError::EmptyInput);
    }

    for (series, column) in snapshot.series.iter().enumerate() {
        if column.values.len() != category_count {
            return Err(ConvertError::ShapeMismatch {
                series,
                expected: category_count,
                actual: column.values.len(),
            });
        }
        if let Some((category, &value)) = column
            .values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ConvertError::InvalidValue {
                series,
                category,
                value,
            });
        }
    }

    let mut series = Vec::with_capacity(snapshot.series.len());
    let mut entries = Vec::with_capacity(snapshot.series.len());
    for (index, column) in snapshot.series.iter().enumerate() {
        let color = palette.color_for(index);
        let selection_id = SelectionId::for_series(&column.source);
        let points = column
            .values
            .iter()
            .zip(&snapshot.categories)
            .enumerate()
            .map(|(category_index, (&raw_value, label))| SeriesPoint {
                category_index,
                raw_value,
                stacked_baseline: 0.0,
                color,
                selection_id: SelectionId::for_point(&column.source, category_index, raw_value),
                label: Some(label.clone()),
            })
            .collect();
        series.push(Series {
            display_name: column.display_name.clone(),
            selection_id,
            color,
            points,
        });
        entries.push(LegendEntry {
            label: column.display_name.clone(),
            color,
            selection_id,
        });
    }

    Ok(ConvertedData {
        collection: SeriesCollection {
            categories: snapshot.categories.clone(),
            series,
        },
        legend: LegendData {
            title: snapshot.category_display_name.clone(),
            entries,
        },
    })
}
