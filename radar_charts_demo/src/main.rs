// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar chart demo.
//!
//! Runs a sequence of update cycles through one [`RadarChart`] and writes an SVG snapshot of
//! the retained surface after each step. The surface only ever sees [`MarkDiff`]s, so the
//! snapshots show exactly what incremental reconciliation produced.
//!
//! Output goes to the directory given as the first argument (default `radar_charts_demo_out`).
//! Set `RUST_LOG=radar_charts=trace` to see per-layer diff counts.

mod svg;

use std::collections::VecDeque;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use kurbo::Rect;
use radar_charts::{
    CategoricalPalette, FixedDuration, LegendData, LegendHost, LegendSwatchesSpec, RadarChart,
    RadarConfig, SceneHandle, SelectionIntent, SelectionManager, SelectionOutcome,
    SelectionTicket, SeriesColumn, Size, TableSnapshot,
};
use radar_core::{LayerId, MarkDiff, Scene};
use tracing_subscriber::EnvFilter;

const VIEWPORT: Size = Size::new(520.0, 420.0);
const LEGEND_LAYER: LayerId = LayerId(3);

/// Draws the legend as swatch marks into its own scene.
#[derive(Debug)]
struct SwatchLegend {
    scene: Scene,
    spec: LegendSwatchesSpec,
    diffs: Vec<MarkDiff>,
}

impl SwatchLegend {
    fn new() -> Self {
        Self {
            scene: Scene::with_layers([LEGEND_LAYER]),
            spec: LegendSwatchesSpec::new(0x1e6e),
            diffs: Vec::new(),
        }
    }

    fn take_diffs(&mut self) -> Vec<MarkDiff> {
        std::mem::take(&mut self.diffs)
    }
}

impl LegendHost for SwatchLegend {
    fn draw(&mut self, legend: &LegendData, viewport: Size) {
        let marks = self.spec.marks(legend, viewport.width - 90.0, 20.0);
        match self.scene.tick_layer(LEGEND_LAYER, marks) {
            Ok(diffs) => self.diffs.extend(diffs),
            Err(err) => tracing::warn!(%err, "legend marks rejected"),
        }
    }
}

/// Queues selection requests so the demo can resolve them in any order.
#[derive(Debug, Default)]
struct QueuedSelection {
    pending: VecDeque<(SelectionTicket, SelectionIntent)>,
}

impl SelectionManager for QueuedSelection {
    fn request(&mut self, ticket: SelectionTicket, intent: SelectionIntent) {
        tracing::info!(ticket = ticket.0, ?intent, "selection requested");
        self.pending.push_back((ticket, intent));
    }
}

struct Demo {
    chart: RadarChart,
    handle: SceneHandle,
    legend: SwatchLegend,
    selection: QueuedSelection,
    palette: CategoricalPalette,
    surface: svg::SvgScene,
    out_dir: PathBuf,
    step: usize,
}

impl Demo {
    fn new(out_dir: PathBuf) -> Self {
        let chart = RadarChart::new(RadarConfig::default().with_base_opacity(0.45));
        let handle = chart.attach();
        Self {
            chart,
            handle,
            legend: SwatchLegend::new(),
            selection: QueuedSelection::default(),
            palette: CategoricalPalette::default(),
            surface: svg::SvgScene::new(Rect::new(0.0, 0.0, VIEWPORT.width, VIEWPORT.height)),
            out_dir,
            step: 0,
        }
    }

    fn update(&mut self, name: &str, snapshot: &TableSnapshot) -> Result<(), Box<dyn Error>> {
        let report = self.chart.update(
            &mut self.handle,
            snapshot,
            VIEWPORT,
            &self.palette,
            &mut self.legend,
        )?;
        tracing::info!(
            step = name,
            status = ?report.status,
            diffs = report.diffs.len(),
            max_stacked_total = report.max_stacked_total,
            "update"
        );
        self.surface.apply_diffs(&report.diffs);
        self.surface.apply_diffs(&self.legend.take_diffs());
        self.write(name)
    }

    /// Resolves queued selection requests, newest first when `reversed`.
    fn resolve_selections(&mut self, name: &str, reversed: bool) -> Result<(), Box<dyn Error>> {
        let mut pending: Vec<_> = self.selection.pending.drain(..).collect();
        if reversed {
            pending.reverse();
        }
        for (ticket, intent) in pending {
            match self
                .chart
                .acknowledge(&mut self.handle, ticket, SelectionOutcome::Applied)?
            {
                Some(update) => {
                    tracing::info!(
                        ticket = ticket.0,
                        ?intent,
                        series = update.transition.series,
                        from = update.transition.from,
                        to = update.transition.to,
                        "hover transition applied"
                    );
                    self.surface.apply_diffs(&update.diffs);
                }
                None => tracing::info!(ticket = ticket.0, ?intent, "superseded acknowledgment"),
            }
        }
        self.write(name)
    }

    fn write(&mut self, name: &str) -> Result<(), Box<dyn Error>> {
        self.step += 1;
        let path = self.out_dir.join(format!("{:02}_{name}.svg", self.step));
        std::fs::write(&path, self.surface.to_svg_string())?;
        tracing::info!(path = %path.display(), marks = self.surface.len(), "wrote snapshot");
        Ok(())
    }
}

fn skills(categories: &[&str], series: &[(&str, &[f64])]) -> TableSnapshot {
    let mut snapshot =
        TableSnapshot::new(categories.iter().copied()).with_category_display_name("Skill");
    for (name, values) in series {
        snapshot = snapshot.with_series(SeriesColumn::new(*name, values.to_vec()));
    }
    snapshot
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("radar_charts_demo_out"), PathBuf::from);
    std::fs::create_dir_all(Path::new(&out_dir))?;
    let mut demo = Demo::new(out_dir);
    let fade = FixedDuration(Duration::from_millis(200));

    let categories = ["Rust", "Go", "Python", "SQL", "Ops"];
    let quarters: [(&str, &[f64]); 3] = [
        ("Q1", &[3.0, 1.0, 4.0, 2.0, 1.0]),
        ("Q2", &[2.0, 2.0, 1.0, 3.0, 2.0]),
        ("Q3", &[4.0, 1.0, 2.0, 1.0, 3.0]),
    ];
    let initial = skills(&categories, &quarters);
    demo.update("initial", &initial)?;
    demo.update("identical", &initial)?;

    let grown = skills(
        &["Rust", "Go", "Python", "SQL", "Ops", "Web"],
        &[
            ("Q1", &[3.0, 1.0, 4.0, 2.0, 1.0, 2.0]),
            ("Q2", &[2.0, 2.0, 1.0, 3.0, 2.0, 1.0]),
            ("Q3", &[4.0, 1.0, 2.0, 1.0, 3.0, 2.0]),
        ],
    );
    demo.update("added_category", &grown)?;

    demo.chart.pointer_enter(1, &mut demo.selection, &fade)?;
    demo.resolve_selections("hover_q2", false)?;
    demo.chart.pointer_leave(1, &mut demo.selection, &fade)?;
    demo.resolve_selections("leave_q2", false)?;

    // Enter/leave/enter whose acknowledgments arrive newest first: the last enter wins.
    demo.chart.pointer_enter(0, &mut demo.selection, &fade)?;
    demo.chart.pointer_leave(0, &mut demo.selection, &fade)?;
    demo.chart.pointer_enter(0, &mut demo.selection, &fade)?;
    demo.resolve_selections("rapid_hover_q1", true)?;

    demo.update("degenerate", &skills(&["A", "B", "C"], &[("zero", &[0.0, 0.0, 0.0])]))?;
    demo.update("empty", &skills(&[], &[]))?;

    let mismatched = skills(&["A", "B"], &[("short", &[1.0])]);
    if let Err(err) = demo.update("mismatched", &mismatched) {
        tracing::info!(%err, "shape mismatch rejected");
    }
    Ok(())
}
