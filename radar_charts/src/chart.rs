// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radar chart: one update cycle from snapshot to reconciled scene.
//!
//! [`RadarChart`] owns configuration and hover state only. The drawing surface lives in a
//! [`SceneHandle`] returned by [`RadarChart::attach`] and passed into every call, so the chart
//! never holds a reference to it.
//!
//! An update runs the full pipeline (convert, stack, lay out, then rings, axes and series in
//! that order) against geometry computed for that update alone.

extern crate alloc;

use alloc::vec::Vec;

use radar_core::{LayerId, MarkDiff, MarkId, Scene};

use crate::axis::AxisSpec;
use crate::config::RadarConfig;
use crate::convert::{ColorPalette, ConvertedData, SeriesCollection, TableSnapshot, convert};
use crate::error::{ConvertError, RadarError};
use crate::geometry::RadarFrame;
use crate::guide_rings::GuideRingsSpec;
use crate::hover::{
    AnimationPolicy, HoverController, HoverState, OpacityTransition, SelectionIntent,
    SelectionManager, SelectionOutcome, SelectionTicket,
};
use crate::layout::{RadarLayout, Size};
use crate::legend::{LegendData, LegendHost};
use crate::series_mark::StackedSeriesSpec;
use crate::stack::stack;

/// Background guide rings.
pub const RINGS_LAYER: LayerId = LayerId(0);
/// Axis spokes and labels.
pub const AXES_LAYER: LayerId = LayerId(1);
/// Stacked polygons and point markers.
pub const SERIES_LAYER: LayerId = LayerId(2);

/// The drawing surface of one attached chart.
#[derive(Clone, Debug)]
pub struct SceneHandle {
    scene: Scene,
}

impl SceneHandle {
    /// The reconciled scene as of the last call.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

/// Why an update rendered nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearReason {
    /// The snapshot had no categories, no series, or an empty series.
    EmptyInput,
    /// The margins leave no drawing area.
    ViewportTooSmall,
}

/// Outcome of a successful update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// Every layer was rendered.
    Rendered,
    /// The scene was cleared.
    Cleared(ClearReason),
}

/// What one update did.
#[derive(Clone, Debug)]
pub struct UpdateReport {
    /// Whether the chart rendered or cleared.
    pub status: RenderStatus,
    /// Scene changes, in layer order.
    pub diffs: Vec<MarkDiff>,
    /// Geometry used for this update; `None` when cleared.
    pub frame: Option<RadarFrame>,
    /// Largest per-category stacked total; `0.0` when cleared.
    pub max_stacked_total: f64,
}

/// Result of applying an acknowledged hover transition.
#[derive(Clone, Debug)]
pub struct HoverUpdate {
    /// The fade to animate.
    pub transition: OpacityTransition,
    /// Series-layer changes carrying the new target opacity.
    pub diffs: Vec<MarkDiff>,
}

#[derive(Clone, Debug)]
struct Rendered {
    frame: RadarFrame,
    collection: SeriesCollection,
}

/// A stacked radar chart bound to one configuration.
#[derive(Clone, Debug)]
pub struct RadarChart {
    config: RadarConfig,
    hover: HoverController,
    rendered: Option<Rendered>,
}

impl RadarChart {
    /// Creates a chart.
    pub fn new(config: RadarConfig) -> Self {
        let hover = HoverController::new(config.base_opacity, config.highlight_opacity);
        Self {
            config,
            hover,
            rendered: None,
        }
    }

    /// The chart configuration.
    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Creates an empty drawing surface with the chart's layers.
    pub fn attach(&self) -> SceneHandle {
        SceneHandle {
            scene: Scene::with_layers([RINGS_LAYER, AXES_LAYER, SERIES_LAYER]),
        }
    }

    /// Runs one update cycle.
    ///
    /// Shape, value and overflow errors are reported before the scene is touched. Empty input and
    /// viewports too small to draw in clear the scene instead.
    pub fn update(
        &mut self,
        handle: &mut SceneHandle,
        snapshot: &TableSnapshot,
        viewport: Size,
        palette: &dyn ColorPalette,
        legend: &mut dyn LegendHost,
    ) -> Result<UpdateReport, RadarError> {
        tracing::debug!(
            categories = snapshot.categories.len(),
            series = snapshot.series.len(),
            width = viewport.width,
            height = viewport.height,
            "radar update"
        );

        let ConvertedData {
            mut collection,
            legend: legend_data,
        } = match convert(snapshot, palette) {
            Ok(converted) => converted,
            Err(ConvertError::EmptyInput) => {
                return Ok(self.clear(handle, ClearReason::EmptyInput, snapshot, viewport, legend));
            }
            Err(ConvertError::ShapeMismatch {
                series,
                expected,
                actual,
            }) => {
                return Err(RadarError::ShapeMismatch {
                    series,
                    expected,
                    actual,
                });
            }
            Err(ConvertError::InvalidValue {
                series,
                category,
                value,
            }) => {
                return Err(RadarError::InvalidValue {
                    series,
                    category,
                    value,
                });
            }
        };

        let summary = stack(&mut collection);
        if let Some(category) = summary.overflowing_category() {
            return Err(RadarError::Overflow { category });
        }

        let Some(layout) = RadarLayout::arrange(viewport, &self.config.margins) else {
            return Ok(self.clear(
                handle,
                ClearReason::ViewportTooSmall,
                snapshot,
                viewport,
                legend,
            ));
        };

        let frame = RadarFrame::from_layout(
            &layout,
            collection.category_count(),
            summary.max_stacked_total,
        );
        self.hover.resize(collection.series_count());

        let mut diffs = Vec::new();
        let rings = handle
            .scene
            .tick_layer(RINGS_LAYER, self.rings_spec().marks(&frame))?;
        tracing::trace!(diffs = rings.len(), "guide rings");
        diffs.extend(rings);

        let axes = handle.scene.tick_layer(
            AXES_LAYER,
            self.axis_spec().marks(&frame, collection.categories()),
        )?;
        tracing::trace!(diffs = axes.len(), "axes");
        diffs.extend(axes);

        let hover = &self.hover;
        let series = handle.scene.tick_layer(
            SERIES_LAYER,
            self.series_spec()
                .marks(&frame, &collection, |i| hover.opacity(i)),
        )?;
        tracing::trace!(diffs = series.len(), "series");
        diffs.extend(series);

        legend.draw(&legend_data, viewport);
        self.rendered = Some(Rendered { frame, collection });

        tracing::debug!(
            diffs = diffs.len(),
            marks = handle.scene.mark_count(),
            max_stacked_total = summary.max_stacked_total,
            "radar rendered"
        );
        Ok(UpdateReport {
            status: RenderStatus::Rendered,
            diffs,
            frame: Some(frame),
            max_stacked_total: summary.max_stacked_total,
        })
    }

    /// Pointer entered a series polygon: requests selection of the series.
    ///
    /// The polygon stays at its current opacity until [`RadarChart::acknowledge`] is called
    /// with the returned ticket.
    pub fn pointer_enter(
        &mut self,
        series: usize,
        selection: &mut dyn SelectionManager,
        animation: &dyn AnimationPolicy,
    ) -> Result<SelectionTicket, RadarError> {
        let selection_id = self
            .rendered
            .as_ref()
            .and_then(|r| r.collection.series().get(series))
            .map(|s| s.selection_id)
            .ok_or(RadarError::UnknownSeries { index: series })?;
        self.hover
            .request(
                series,
                HoverState::Highlighted,
                SelectionIntent::Select(selection_id),
                selection,
                animation,
            )
            .ok_or(RadarError::UnknownSeries { index: series })
    }

    /// Pointer left a series polygon: requests that the selection be cleared.
    pub fn pointer_leave(
        &mut self,
        series: usize,
        selection: &mut dyn SelectionManager,
        animation: &dyn AnimationPolicy,
    ) -> Result<SelectionTicket, RadarError> {
        if self.rendered.is_none() {
            return Err(RadarError::UnknownSeries { index: series });
        }
        self.hover
            .request(
                series,
                HoverState::Idle,
                SelectionIntent::Clear,
                selection,
                animation,
            )
            .ok_or(RadarError::UnknownSeries { index: series })
    }

    /// The selection request behind `ticket` resolved; applies its opacity transition.
    ///
    /// Returns `Ok(None)` for unknown or superseded tickets.
    pub fn acknowledge(
        &mut self,
        handle: &mut SceneHandle,
        ticket: SelectionTicket,
        outcome: SelectionOutcome,
    ) -> Result<Option<HoverUpdate>, RadarError> {
        let Some(transition) = self.hover.acknowledge(ticket, outcome) else {
            return Ok(None);
        };
        let diffs = match &self.rendered {
            Some(r) => {
                let hover = &self.hover;
                handle.scene.tick_layer(
                    SERIES_LAYER,
                    self.series_spec()
                        .marks(&r.frame, &r.collection, |i| hover.opacity(i)),
                )?
            }
            None => Vec::new(),
        };
        Ok(Some(HoverUpdate { transition, diffs }))
    }

    /// Hover state of a rendered polygon.
    pub fn hover_state(&self, series: usize) -> Option<HoverState> {
        self.hover.state(series)
    }

    /// Current target opacity of a polygon.
    pub fn opacity(&self, series: usize) -> f64 {
        self.hover.opacity(series)
    }

    /// Geometry of the last rendered update.
    pub fn frame(&self) -> Option<&RadarFrame> {
        self.rendered.as_ref().map(|r| &r.frame)
    }

    /// Stacked series of the last rendered update.
    pub fn series(&self) -> Option<&SeriesCollection> {
        self.rendered.as_ref().map(|r| &r.collection)
    }

    /// Mark id of a series polygon, for hosts mapping pointer hits back to series.
    pub fn polygon_id(&self, series: usize) -> MarkId {
        self.series_spec().polygon_id(series)
    }

    fn clear(
        &mut self,
        handle: &mut SceneHandle,
        reason: ClearReason,
        snapshot: &TableSnapshot,
        viewport: Size,
        legend: &mut dyn LegendHost,
    ) -> UpdateReport {
        let diffs = handle.scene.clear();
        self.rendered = None;
        self.hover.resize(0);
        legend.draw(
            &LegendData {
                title: snapshot.category_display_name.clone(),
                entries: Vec::new(),
            },
            viewport,
        );
        tracing::debug!(?reason, exits = diffs.len(), "radar cleared");
        UpdateReport {
            status: RenderStatus::Cleared(reason),
            diffs,
            frame: None,
            max_stacked_total: 0.0,
        }
    }

    fn namespace(&self, component: &str) -> u64 {
        MarkId::for_key(self.config.id_base, component).0
    }

    fn rings_spec(&self) -> GuideRingsSpec {
        GuideRingsSpec::new(self.namespace("rings"), self.config.segment_levels)
            .with_stroke(self.config.ring_stroke.clone())
    }

    fn axis_spec(&self) -> AxisSpec {
        AxisSpec::new(self.namespace("axes"))
            .with_stroke(self.config.axis_stroke.clone())
            .with_label_offset(self.config.label_offset)
            .with_label_font_size(self.config.label_font_size)
            .with_label_fill(self.config.label_fill.clone())
    }

    fn series_spec(&self) -> StackedSeriesSpec {
        StackedSeriesSpec::new(self.namespace("series"))
            .with_stroke_width(self.config.series_stroke_width)
            .with_dot_radius(self.config.dot_radius)
    }
}
