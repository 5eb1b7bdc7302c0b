// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover highlighting sequenced behind selection requests.
//!
//! Hovering a polygon is a two-stage operation:
//! 1. [`HoverController::request`] sends a [`SelectionIntent`] to the host's
//!    [`SelectionManager`] and records a pending transition under a fresh [`SelectionTicket`].
//! 2. When the host reports that the request resolved, [`HoverController::acknowledge`]
//!    applies the opacity transition, whether the selection succeeded or failed.
//!
//! Tickets carry a generation. An acknowledgment older than the last one applied to the
//! same polygon is dropped, so the latest pointer state always wins.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use crate::convert::SelectionId;

/// Identifies one selection request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionTicket(pub u64);

/// What the chart asks the selection system to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionIntent {
    /// Select the identified series.
    Select(SelectionId),
    /// Clear the current selection.
    Clear,
}

/// How a selection request resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection system applied the intent.
    Applied,
    /// The selection system rejected or failed the intent.
    Failed,
}

/// The selection-management collaborator.
///
/// Requests resolve asynchronously; the host reports resolution through
/// [`RadarChart::acknowledge`](crate::RadarChart::acknowledge) with the same ticket.
pub trait SelectionManager {
    /// Starts a selection request.
    fn request(&mut self, ticket: SelectionTicket, intent: SelectionIntent);
}

/// The animation-duration collaborator.
pub trait AnimationPolicy {
    /// Duration of the hover opacity fade.
    fn hover_duration(&self) -> Duration;
}

/// An [`AnimationPolicy`] with a constant duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedDuration(pub Duration);

impl AnimationPolicy for FixedDuration {
    fn hover_duration(&self) -> Duration {
        self.0
    }
}

/// Visual state of one polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    /// Drawn at the base opacity.
    #[default]
    Idle,
    /// Drawn at the highlight opacity.
    Highlighted,
}

/// An opacity fade the host should animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityTransition {
    /// Series index of the polygon.
    pub series: usize,
    /// Opacity at the start of the fade.
    pub from: f64,
    /// Opacity at the end of the fade.
    pub to: f64,
    /// Fade duration.
    pub duration: Duration,
}

impl OpacityTransition {
    /// Linearly interpolated opacity after `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct PolygonHover {
    state: HoverState,
    applied_generation: u64,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    ticket: SelectionTicket,
    series: usize,
    target: HoverState,
    duration: Duration,
}

/// Per-polygon hover state plus the queue of unacknowledged selection requests.
#[derive(Clone, Debug)]
pub struct HoverController {
    base_opacity: f64,
    highlight_opacity: f64,
    next_ticket: u64,
    polygons: Vec<PolygonHover>,
    pending: Vec<Pending>,
}

impl HoverController {
    /// Creates a controller with no polygons.
    pub fn new(base_opacity: f64, highlight_opacity: f64) -> Self {
        Self {
            base_opacity,
            highlight_opacity,
            next_ticket: 1,
            polygons: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Matches the polygon count of a new render.
    ///
    /// Surviving polygons (by ordinal) keep their state; new ones start idle; pending requests
    /// for removed polygons are dropped.
    pub fn resize(&mut self, series_count: usize) {
        self.polygons.resize_with(series_count, PolygonHover::default);
        self.pending.retain(|p| p.series < series_count);
    }

    /// Number of tracked polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if no polygons are tracked.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Current state of a polygon.
    pub fn state(&self, series: usize) -> Option<HoverState> {
        self.polygons.get(series).map(|p| p.state)
    }

    /// Current opacity target of a polygon (base opacity for unknown polygons).
    pub fn opacity(&self, series: usize) -> f64 {
        match self.state(series) {
            Some(HoverState::Highlighted) => self.highlight_opacity,
            _ => self.base_opacity,
        }
    }

    /// Number of requests still waiting for acknowledgment.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Issues a selection request for a polygon heading to `target`.
    ///
    /// The polygon's visual state is unchanged until [`HoverController::acknowledge`].
    /// Returns `None` for unknown polygons.
    pub fn request(
        &mut self,
        series: usize,
        target: HoverState,
        intent: SelectionIntent,
        selection: &mut dyn SelectionManager,
        animation: &dyn AnimationPolicy,
    ) -> Option<SelectionTicket> {
        if series >= self.polygons.len() {
            return None;
        }
        let ticket = SelectionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push(Pending {
            ticket,
            series,
            target,
            duration: animation.hover_duration(),
        });
        selection.request(ticket, intent);
        Some(ticket)
    }

    /// Applies the transition recorded for `ticket`.
    ///
    /// The outcome does not matter; only ordering does. Returns `None` for unknown tickets
    /// and for acknowledgments superseded by a newer one on the same polygon.
    pub fn acknowledge(
        &mut self,
        ticket: SelectionTicket,
        outcome: SelectionOutcome,
    ) -> Option<OpacityTransition> {
        let index = self.pending.iter().position(|p| p.ticket == ticket)?;
        let pending = self.pending.remove(index);
        let from = self.opacity(pending.series);
        let polygon = self.polygons.get_mut(pending.series)?;
        if ticket.0 < polygon.applied_generation {
            tracing::debug!(
                ticket = ticket.0,
                series = pending.series,
                ?outcome,
                "dropping stale hover acknowledgment"
            );
            return None;
        }
        polygon.applied_generation = ticket.0;
        polygon.state = pending.target;
        self.pending.retain(|p| p.series != pending.series || p.ticket.0 > ticket.0);
        Some(OpacityTransition {
            series: pending.series,
            from,
            to: self.opacity(pending.series),
            duration: pending.duration,
        })
    }
}
