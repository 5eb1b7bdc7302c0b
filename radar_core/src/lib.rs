// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained scene graph for radial charts.
//!
//! `radar_core` knows nothing about charts. It provides:
//! - **Marks**: stable-identity drawable elements (paths and text runs).
//! - **Reconciliation**: a single keyed enter/update/exit diff ([`KeyedSet`]).
//! - **Scenes**: ordered layers of marks, each reconciled independently, producing
//!   [`MarkDiff`]s a renderer can apply to its own retained surface.
//!
//! Chart layers above this crate rebuild their full mark list on every update; the scene
//! turns that into the minimal set of changes.

#![no_std]

extern crate alloc;

mod mark;
mod reconcile;
mod scene;

pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathPayload, TextAnchor, TextBaseline, TextPayload,
};
pub use reconcile::{Change, KeyedSet, ReconcileError};
pub use scene::{LayerId, MarkDiff, Scene, SceneError};
