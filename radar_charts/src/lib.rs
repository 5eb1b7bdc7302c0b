// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked radar (spider) charts on top of `radar_core`.
//!
//! The crate is the layout and data-transformation engine of a radar chart:
//! - **Conversion** turns a resolved [`TableSnapshot`] into a rectangular grid of
//!   [`SeriesPoint`]s plus legend entries.
//! - **Stacking** accumulates series bottom-up per category.
//! - **Geometry** maps `(category, value)` to scene points through a [`RadarFrame`].
//! - **Guides and series** ([`GuideRingsSpec`], [`AxisSpec`], [`StackedSeriesSpec`]) generate
//!   stable-identity marks.
//! - [`RadarChart`] runs one update cycle and reconciles each layer of the scene, and
//!   sequences hover highlighting behind the host's selection requests.
//!
//! Colors, legends, selection and animation timing are supplied by the host through
//! [`ColorPalette`], [`LegendHost`], [`SelectionManager`] and [`AnimationPolicy`].
//!
//! Text shaping is out of scope; text marks store unshaped strings with alignment hints.

#![no_std]

extern crate alloc;

mod axis;
mod chart;
mod config;
mod convert;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod guide_rings;
mod hover;
mod layout;
mod legend;
#[cfg(test)]
mod radar_tests;
mod scale;
mod series_mark;
mod stack;
mod z_order;

pub use axis::{AxisLine, AxisSpec};
pub use chart::{
    AXES_LAYER, ClearReason, HoverUpdate, RINGS_LAYER, RadarChart, RenderStatus, SERIES_LAYER,
    SceneHandle, UpdateReport,
};
pub use config::{RadarConfig, StrokeStyle};
pub use convert::{
    CategoricalPalette, ColorPalette, ConvertedData, SelectionId, Series, SeriesCollection,
    SeriesColumn, SeriesPoint, TableSnapshot, convert,
};
pub use error::{ConvertError, RadarError};
pub use geometry::{RadarFrame, angular_step, axis_direction, point_on_axis};
pub use guide_rings::{GuideRingsSpec, RingSegment};
pub use hover::{
    AnimationPolicy, FixedDuration, HoverController, HoverState, OpacityTransition,
    SelectionIntent, SelectionManager, SelectionOutcome, SelectionTicket,
};
pub use layout::{Margins, RadarLayout, Size};
pub use legend::{LegendData, LegendEntry, LegendHost, LegendSwatchesSpec, NoLegend};
pub use scale::ScaleLinear;
pub use series_mark::StackedSeriesSpec;
pub use stack::{StackSummary, stack};
pub use z_order::*;
