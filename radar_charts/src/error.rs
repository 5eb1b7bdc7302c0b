// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use radar_core::SceneError;

/// Errors produced while converting a [`TableSnapshot`](crate::TableSnapshot).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// There are no categories, no series, or a series has no values.
    #[error("snapshot has no categories or no series")]
    EmptyInput,
    /// A series does not have exactly one value per category.
    #[error("series {series} has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Series index.
        series: usize,
        /// Category count.
        expected: usize,
        /// Value count of the series.
        actual: usize,
    },
    /// A value is negative, infinite or NaN.
    #[error("series {series} has invalid value {value} at category {category}")]
    InvalidValue {
        /// Series index.
        series: usize,
        /// Category index.
        category: usize,
        /// The offending value.
        value: f64,
    },
}

/// Errors reported to the caller of [`RadarChart`](crate::RadarChart).
///
/// Empty input and viewports too small to draw in are not errors: the chart clears its
/// scene and reports that through [`RenderStatus`](crate::RenderStatus).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RadarError {
    /// A series does not have exactly one value per category.
    #[error("series {series} has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Series index.
        series: usize,
        /// Category count.
        expected: usize,
        /// Value count of the series.
        actual: usize,
    },
    /// A value is negative, infinite or NaN.
    #[error("series {series} has invalid value {value} at category {category}")]
    InvalidValue {
        /// Series index.
        series: usize,
        /// Category index.
        category: usize,
        /// The offending value.
        value: f64,
    },
    /// Finite values whose stacked sum at a category is not finite.
    #[error("stacked total at category {category} overflows")]
    Overflow {
        /// Category index.
        category: usize,
    },
    /// A hover call referenced a series that is not rendered.
    #[error("series {index} is not rendered")]
    UnknownSeries {
        /// The requested series index.
        index: usize,
    },
    /// The scene rejected the generated marks.
    #[error(transparent)]
    Scene(#[from] SceneError),
}
