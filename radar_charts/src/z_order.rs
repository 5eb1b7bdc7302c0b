// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for radar marks.
//!
//! Each scene layer is painted in order (rings, axes, series); within a layer, renderers
//! sort by `(z_index, MarkId)`.

/// Background guide ring segments.
pub const GUIDE_RINGS: i32 = -50;

/// Axis spokes.
pub const AXIS_RULES: i32 = 30;
/// Axis labels.
pub const AXIS_LABELS: i32 = 40;

/// Filled series polygons. Series `i` sits at `SERIES_FILL - i`, so outer series paint below
/// inner ones and every polygon stays below the markers.
pub const SERIES_FILL: i32 = 0;
/// Per-point markers, drawn above every polygon.
pub const SERIES_POINTS: i32 = 20;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels and title.
pub const LEGEND_LABELS: i32 = 70;
