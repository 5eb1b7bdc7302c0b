// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::time::Duration;

use kurbo::{PathEl, Point};
use radar_core::{MarkDiff, MarkId, MarkPayload, Scene};

use crate::{
    AXES_LAYER, CategoricalPalette, ClearReason, FixedDuration, HoverState, LegendData,
    LegendHost, Margins, RINGS_LAYER, RadarChart, RadarConfig, RadarError, RenderStatus,
    SERIES_LAYER, SceneHandle, SelectionId, SelectionIntent, SelectionManager, SelectionOutcome,
    SelectionTicket, SeriesColumn, Size, TableSnapshot, UpdateReport,
};

const VIEWPORT: Size = Size::new(400.0, 400.0);
const FADE: FixedDuration = FixedDuration(Duration::from_millis(250));

#[derive(Default)]
struct RecordingLegend {
    draws: Vec<(LegendData, Size)>,
}

impl LegendHost for RecordingLegend {
    fn draw(&mut self, legend: &LegendData, viewport: Size) {
        self.draws.push((legend.clone(), viewport));
    }
}

#[derive(Default)]
struct RecordingSelection {
    calls: Vec<(SelectionTicket, SelectionIntent)>,
}

impl SelectionManager for RecordingSelection {
    fn request(&mut self, ticket: SelectionTicket, intent: SelectionIntent) {
        self.calls.push((ticket, intent));
    }
}

fn snapshot(categories: &[&str], series: &[&[f64]]) -> TableSnapshot {
    let mut s = TableSnapshot::new(categories.iter().copied()).with_category_display_name("Skill");
    for (i, values) in series.iter().enumerate() {
        s = s.with_series(
            SeriesColumn::new(alloc::format!("q{i}"), values.to_vec())
                .with_display_name(alloc::format!("Quarter {i}")),
        );
    }
    s
}

fn render(
    chart: &mut RadarChart,
    handle: &mut SceneHandle,
    snapshot: &TableSnapshot,
    legend: &mut RecordingLegend,
) -> UpdateReport {
    chart
        .update(
            handle,
            snapshot,
            VIEWPORT,
            &CategoricalPalette::default(),
            legend,
        )
        .expect("valid snapshot renders")
}

fn polygon_vertices(scene: &Scene, id: MarkId) -> Vec<Point> {
    let Some((_, MarkPayload::Path(p))) = scene.get(SERIES_LAYER, id) else {
        panic!("missing polygon {id:?}");
    };
    p.path
        .elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

fn polygon_opacity(scene: &Scene, id: MarkId) -> f64 {
    let Some((_, MarkPayload::Path(p))) = scene.get(SERIES_LAYER, id) else {
        panic!("missing polygon {id:?}");
    };
    p.opacity
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

fn count(diffs: &[MarkDiff], pred: impl Fn(&MarkDiff) -> bool) -> usize {
    diffs.iter().filter(|d| pred(d)).count()
}

#[test]
fn two_series_two_categories_end_to_end() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let data = snapshot(&["A", "B"], &[&[1.0, 2.0], &[3.0, 4.0]]);

    let report = render(&mut chart, &mut handle, &data, &mut legend);
    assert_eq!(report.status, RenderStatus::Rendered);
    assert_eq!(report.max_stacked_total, 6.0);
    let frame = report.frame.expect("rendered update has a frame");
    assert_eq!(frame.angular_step, PI);
    assert_eq!(frame.center, Point::new(200.0, 200.0));
    assert_eq!(frame.radius, 100.0);

    let series = chart.series().expect("rendered series");
    let baselines: Vec<Vec<f64>> = series
        .series()
        .iter()
        .map(|s| s.points.iter().map(|p| p.stacked_baseline).collect())
        .collect();
    let tops: Vec<Vec<f64>> = series
        .series()
        .iter()
        .map(|s| s.points.iter().map(|p| p.stacked_top()).collect())
        .collect();
    assert_eq!(baselines, vec![vec![0.0, 0.0], vec![1.0, 2.0]]);
    assert_eq!(tops, vec![vec![1.0, 2.0], vec![4.0, 6.0]]);
    assert_eq!(series.series()[1].selection_id, SelectionId::for_series("q1"));

    let scene = handle.scene();
    assert_eq!(scene.layer_len(RINGS_LAYER), 5 * 2, "five rings of two segments");
    assert_eq!(scene.layer_len(AXES_LAYER), 2 * 2, "two spokes with labels");
    assert_eq!(scene.layer_len(SERIES_LAYER), 2 * (1 + 2), "polygons plus markers");
    assert!(
        report
            .diffs
            .iter()
            .all(|d| matches!(d, MarkDiff::Enter { .. })),
        "first render only enters"
    );
    assert_eq!(report.diffs.len(), scene.mark_count());

    // Spokes at angle 0 (up) and π (down).
    let outer = polygon_vertices(scene, chart.polygon_id(1));
    assert_eq!(outer.len(), 2);
    assert!((outer[0] - Point::new(200.0, 200.0 - 100.0 * 4.0 / 6.0)).hypot() < 1e-9);
    assert!((outer[1] - Point::new(200.0, 300.0)).hypot() < 1e-9);

    let [(drawn, viewport)] = &legend.draws[..] else {
        panic!("legend should be drawn once, got {:?}", legend.draws.len());
    };
    assert_eq!(*viewport, VIEWPORT);
    assert_eq!(drawn.title, "Skill");
    let labels: Vec<&str> = drawn.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Quarter 0", "Quarter 1"]);
    assert_eq!(drawn.entries[0].selection_id, series.series()[0].selection_id);
}

#[test]
fn all_zero_series_collapses_to_center() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();

    let report = render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "B", "C"], &[&[0.0, 0.0, 0.0]]),
        &mut legend,
    );
    assert_eq!(report.status, RenderStatus::Rendered);
    assert_eq!(report.max_stacked_total, 0.0);

    let center = Point::new(200.0, 200.0);
    let vertices = polygon_vertices(handle.scene(), chart.polygon_id(0));
    assert_eq!(vertices.len(), 3);
    for v in vertices {
        assert!(v.x.is_finite() && v.y.is_finite(), "NaN vertex {v:?}");
        assert!((v - center).hypot() < 1e-12, "{v:?} is not the center");
    }
}

#[test]
fn identical_updates_are_idempotent() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let data = snapshot(&["A", "B", "C", "D"], &[&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 2.0, 2.0]]);

    render(&mut chart, &mut handle, &data, &mut legend);
    let before: Vec<MarkId> = handle
        .scene()
        .marks_in_paint_order()
        .into_iter()
        .map(|(_, id, _, _)| id)
        .collect();

    let again = render(&mut chart, &mut handle, &data, &mut legend);
    assert!(again.diffs.is_empty(), "unexpected diffs: {:?}", again.diffs.len());
    let after: Vec<MarkId> = handle
        .scene()
        .marks_in_paint_order()
        .into_iter()
        .map(|(_, id, _, _)| id)
        .collect();
    assert_eq!(before, after);
    assert_eq!(legend.draws.len(), 2, "legend is redrawn every update");
}

#[test]
fn category_count_changes_enter_update_and_exit() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();

    render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "B"], &[&[1.0, 2.0], &[3.0, 4.0]]),
        &mut legend,
    );

    let grown = render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "B", "C"], &[&[1.0, 2.0, 3.0], &[3.0, 4.0, 5.0]]),
        &mut legend,
    );
    let axes: Vec<&MarkDiff> = grown.diffs.iter().filter(|d| d.layer() == AXES_LAYER).collect();
    let enters = axes
        .iter()
        .filter(|d| matches!(d, MarkDiff::Enter { .. }))
        .count();
    let updates = axes
        .iter()
        .filter(|d| matches!(d, MarkDiff::Update { .. }))
        .count();
    assert_eq!(enters, 2, "spoke and label for C");
    assert_eq!(updates, 2, "spoke and label for B move");
    assert!(!axes.iter().any(|d| matches!(d, MarkDiff::Exit { .. })));
    assert_eq!(
        count(&grown.diffs, |d| d.layer() == RINGS_LAYER
            && matches!(d, MarkDiff::Enter { .. })),
        5,
        "one new segment per ring"
    );
    assert_eq!(handle.scene().layer_len(RINGS_LAYER), 15);
    assert_eq!(handle.scene().layer_len(SERIES_LAYER), 2 * (1 + 3));

    let shrunk = render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "C"], &[&[1.0, 2.0]]),
        &mut legend,
    );
    assert_eq!(handle.scene().layer_len(AXES_LAYER), 4);
    assert_eq!(handle.scene().layer_len(RINGS_LAYER), 10);
    assert_eq!(handle.scene().layer_len(SERIES_LAYER), 1 + 2);
    assert!(
        shrunk
            .diffs
            .iter()
            .any(|d| matches!(d, MarkDiff::Exit { id, .. } if *id == chart.polygon_id(1))),
        "the removed series polygon exits"
    );
    // B at index 1 is replaced by C at index 1; C at index 2 is gone.
    assert_eq!(
        count(&shrunk.diffs, |d| d.layer() == AXES_LAYER
            && matches!(d, MarkDiff::Exit { .. })),
        4
    );
    assert_eq!(
        count(&shrunk.diffs, |d| d.layer() == AXES_LAYER
            && matches!(d, MarkDiff::Enter { .. })),
        2
    );
}

#[test]
fn polygon_vertices_stay_within_radius() {
    let datasets: [&[&[f64]]; 4] = [
        &[&[1.0, 5.0, 2.0, 0.0, 3.0]],
        &[&[0.5, 0.5, 0.5, 0.5, 0.5], &[10.0, 0.0, 0.0, 0.0, 1.0]],
        &[
            &[3.0, 1.0, 4.0, 1.0, 5.0],
            &[9.0, 2.0, 6.0, 5.0, 3.0],
            &[5.0, 8.0, 9.0, 7.0, 9.0],
        ],
        &[&[1e-9, 2e-9, 0.0, 0.0, 1e-9]],
    ];
    for data in datasets {
        let mut chart =
            RadarChart::new(RadarConfig::default().with_margins(Margins::uniform(20.0)));
        let mut handle = chart.attach();
        let mut legend = RecordingLegend::default();
        let report = render(
            &mut chart,
            &mut handle,
            &snapshot(&["a", "b", "c", "d", "e"], data),
            &mut legend,
        );
        let frame = report.frame.expect("rendered");
        let mut farthest = 0.0_f64;
        for s in 0..data.len() {
            for v in polygon_vertices(handle.scene(), chart.polygon_id(s)) {
                let d = (v - frame.center).hypot();
                assert!(d <= frame.radius + 1e-9, "vertex {v:?} beyond radius");
                farthest = farthest.max(d);
            }
        }
        assert_close(farthest, frame.radius);
    }
}

#[test]
fn hover_waits_for_acknowledgment_and_latest_target_wins() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let mut selection = RecordingSelection::default();
    render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "B", "C"], &[&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]]),
        &mut legend,
    );
    let target = chart.polygon_id(1);
    let series_id = chart.series().expect("rendered").series()[1].selection_id;

    let enter = chart
        .pointer_enter(1, &mut selection, &FADE)
        .expect("series 1 is rendered");
    assert_eq!(
        selection.calls,
        vec![(enter, SelectionIntent::Select(series_id))]
    );
    assert_eq!(chart.opacity(1), 0.5, "unchanged until acknowledged");
    assert_eq!(polygon_opacity(handle.scene(), target), 0.5);

    let update = chart
        .acknowledge(&mut handle, enter, SelectionOutcome::Failed)
        .expect("scene accepts marks")
        .expect("fresh ticket applies");
    assert_eq!((update.transition.from, update.transition.to), (0.5, 1.0));
    assert_eq!(update.transition.duration, Duration::from_millis(250));
    let [MarkDiff::Update { id, .. }] = &update.diffs[..] else {
        panic!("expected one polygon update, got {:?}", update.diffs.len());
    };
    assert_eq!(*id, target);
    assert_eq!(polygon_opacity(handle.scene(), target), 1.0);
    assert_eq!(chart.hover_state(1), Some(HoverState::Highlighted));

    let leave = chart
        .pointer_leave(1, &mut selection, &FADE)
        .expect("series 1 is rendered");
    assert_eq!(selection.calls.len(), 2);
    assert_eq!(selection.calls[1], (leave, SelectionIntent::Clear));
    let update = chart
        .acknowledge(&mut handle, leave, SelectionOutcome::Applied)
        .expect("scene accepts marks")
        .expect("fresh ticket applies");
    assert_eq!((update.transition.from, update.transition.to), (1.0, 0.5));
    assert_eq!(chart.hover_state(1), Some(HoverState::Idle));

    // Rapid enter/leave/enter with acknowledgments arriving out of order.
    let e1 = chart.pointer_enter(0, &mut selection, &FADE).expect("rendered");
    let l1 = chart.pointer_leave(0, &mut selection, &FADE).expect("rendered");
    let e2 = chart.pointer_enter(0, &mut selection, &FADE).expect("rendered");
    assert_eq!(selection.calls.len(), 5);
    assert!(
        chart
            .acknowledge(&mut handle, e2, SelectionOutcome::Applied)
            .expect("scene accepts marks")
            .is_some()
    );
    for stale in [l1, e1] {
        assert!(
            chart
                .acknowledge(&mut handle, stale, SelectionOutcome::Applied)
                .expect("scene accepts marks")
                .is_none(),
            "stale acknowledgment must not apply"
        );
    }
    assert_eq!(chart.hover_state(0), Some(HoverState::Highlighted));
    assert_eq!(polygon_opacity(handle.scene(), chart.polygon_id(0)), 1.0);
}

#[test]
fn hover_state_survives_rerender() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let mut selection = RecordingSelection::default();
    let data = snapshot(&["A", "B"], &[&[1.0, 2.0]]);
    render(&mut chart, &mut handle, &data, &mut legend);

    let ticket = chart.pointer_enter(0, &mut selection, &FADE).expect("rendered");
    chart
        .acknowledge(&mut handle, ticket, SelectionOutcome::Applied)
        .expect("scene accepts marks");
    let again = render(&mut chart, &mut handle, &data, &mut legend);
    assert!(again.diffs.is_empty(), "highlight is kept across updates");
    assert_eq!(polygon_opacity(handle.scene(), chart.polygon_id(0)), 1.0);
}

#[test]
fn hover_on_unknown_series_is_an_error() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let mut selection = RecordingSelection::default();

    assert_eq!(
        chart.pointer_enter(0, &mut selection, &FADE),
        Err(RadarError::UnknownSeries { index: 0 })
    );
    render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "B"], &[&[1.0, 2.0]]),
        &mut legend,
    );
    assert_eq!(
        chart.pointer_leave(3, &mut selection, &FADE),
        Err(RadarError::UnknownSeries { index: 3 })
    );
    assert!(selection.calls.is_empty());
}

#[test]
fn shape_mismatch_fails_without_touching_the_scene() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    render(
        &mut chart,
        &mut handle,
        &snapshot(&["A", "B"], &[&[1.0, 2.0]]),
        &mut legend,
    );
    let marks = handle.scene().mark_count();

    let err = chart
        .update(
            &mut handle,
            &snapshot(&["A", "B"], &[&[1.0, 2.0], &[3.0]]),
            VIEWPORT,
            &CategoricalPalette::default(),
            &mut legend,
        )
        .unwrap_err();
    assert_eq!(
        err,
        RadarError::ShapeMismatch {
            series: 1,
            expected: 2,
            actual: 1
        }
    );
    assert_eq!(handle.scene().mark_count(), marks);
    assert_eq!(legend.draws.len(), 1, "no legend draw on failure");

    let err = chart
        .update(
            &mut handle,
            &snapshot(&["A", "B"], &[&[1.0, -2.0]]),
            VIEWPORT,
            &CategoricalPalette::default(),
            &mut legend,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RadarError::InvalidValue {
            series: 0,
            category: 1,
            ..
        }
    ));
    assert_eq!(handle.scene().mark_count(), marks);
}

#[test]
fn overflowing_stacked_totals_fail_without_touching_the_scene() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let valid = snapshot(&["A", "B", "C"], &[&[1.0, 2.0, 3.0]]);
    render(&mut chart, &mut handle, &valid, &mut legend);
    let before: Vec<MarkId> = handle
        .scene()
        .marks_in_paint_order()
        .into_iter()
        .map(|(_, id, _, _)| id)
        .collect();

    let err = chart
        .update(
            &mut handle,
            &snapshot(&["A", "B", "C"], &[&[1e308, 1.0, 1.0], &[1e308, 1.0, 1.0]]),
            VIEWPORT,
            &CategoricalPalette::default(),
            &mut legend,
        )
        .unwrap_err();
    assert_eq!(err, RadarError::Overflow { category: 0 });

    let after: Vec<MarkId> = handle
        .scene()
        .marks_in_paint_order()
        .into_iter()
        .map(|(_, id, _, _)| id)
        .collect();
    assert_eq!(before, after, "scene is unchanged");
    assert_eq!(legend.draws.len(), 1, "no legend draw on failure");
    assert_eq!(chart.series().map(|s| s.series_count()), Some(1));
    for v in polygon_vertices(handle.scene(), chart.polygon_id(0)) {
        assert!(v.x.is_finite() && v.y.is_finite(), "NaN vertex {v:?}");
    }
}

#[test]
fn empty_input_and_tiny_viewports_clear_the_scene() {
    let mut chart = RadarChart::new(RadarConfig::default());
    let mut handle = chart.attach();
    let mut legend = RecordingLegend::default();
    let data = snapshot(&["A", "B"], &[&[1.0, 2.0]]);
    render(&mut chart, &mut handle, &data, &mut legend);
    let marks = handle.scene().mark_count();

    let report = render(&mut chart, &mut handle, &snapshot(&[], &[]), &mut legend);
    assert_eq!(report.status, RenderStatus::Cleared(ClearReason::EmptyInput));
    assert_eq!(report.diffs.len(), marks);
    assert!(
        report
            .diffs
            .iter()
            .all(|d| matches!(d, MarkDiff::Exit { .. }))
    );
    assert_eq!(handle.scene().mark_count(), 0);
    assert!(report.frame.is_none());
    assert!(chart.series().is_none());
    let (cleared, _) = legend.draws.last().expect("legend drawn on clear");
    assert!(cleared.entries.is_empty());

    // Clearing an already empty scene is a no-op.
    let report = render(&mut chart, &mut handle, &snapshot(&["A"], &[]), &mut legend);
    assert!(report.diffs.is_empty());

    render(&mut chart, &mut handle, &data, &mut legend);
    let report = chart
        .update(
            &mut handle,
            &data,
            Size::new(150.0, 400.0),
            &CategoricalPalette::default(),
            &mut legend,
        )
        .expect("tiny viewport is not an error");
    assert_eq!(
        report.status,
        RenderStatus::Cleared(ClearReason::ViewportTooSmall)
    );
    assert_eq!(handle.scene().mark_count(), 0);
}
