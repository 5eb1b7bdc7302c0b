// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport layout: margins in, plot center and radius out.

use kurbo::{Point, Rect};

/// A width/height pair in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
    /// Right margin.
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            bottom: 50.0,
            left: 100.0,
            right: 100.0,
        }
    }
}

impl Margins {
    /// The same margin on every side.
    pub const fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

/// Result of arranging a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarLayout {
    /// The usable drawing area (viewport minus margins).
    pub plot: Rect,
    /// Center of the radar in scene coordinates.
    pub center: Point,
    /// Outer radius: half the smaller side of `plot`.
    pub radius: f64,
}

impl RadarLayout {
    /// Arranges the radar inside `viewport`.
    ///
    /// Returns `None` when the margins leave no positive drawing area (or the viewport is not
    /// finite); there is nothing sensible to draw then.
    pub fn arrange(viewport: Size, margins: &Margins) -> Option<Self> {
        let width = viewport.width - margins.left - margins.right;
        let height = viewport.height - margins.top - margins.bottom;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let plot = Rect::new(
            margins.left,
            margins.top,
            margins.left + width,
            margins.top + height,
        );
        Some(Self {
            plot,
            center: plot.center(),
            radius: width.min(height) * 0.5,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margins_on_square_viewport() {
        let layout = RadarLayout::arrange(Size::new(400.0, 400.0), &Margins::default()).unwrap();
        assert_eq!(layout.plot, Rect::new(100.0, 50.0, 300.0, 350.0));
        assert_eq!(layout.center, Point::new(200.0, 200.0));
        assert_eq!(layout.radius, 100.0);
    }

    #[test]
    fn margins_that_swallow_the_viewport_yield_nothing() {
        let margins = Margins::default();
        assert!(RadarLayout::arrange(Size::new(200.0, 400.0), &margins).is_none());
        assert!(RadarLayout::arrange(Size::new(400.0, 100.0), &margins).is_none());
        assert!(RadarLayout::arrange(Size::new(f64::NAN, 400.0), &margins).is_none());
        assert!(RadarLayout::arrange(Size::new(201.0, 101.0), &margins).is_some());
    }
}
