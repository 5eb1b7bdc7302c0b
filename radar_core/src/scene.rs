// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered scene state and mark diffs.
//!
//! A [`Scene`] is an ordered list of layers (nested groups such as background rings, axes and
//! series). Each layer is reconciled independently with [`Scene::tick_layer`], which returns
//! the [`MarkDiff`]s a renderer needs to bring its own retained surface up to date.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};
use crate::reconcile::{Change, KeyedSet, ReconcileError};

/// Identifies a layer (group) of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u16);

/// Errors returned by [`Scene`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The layer was never added to the scene.
    #[error("unknown scene layer {0:?}")]
    UnknownLayer(LayerId),
    /// The marks could not be reconciled.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// A single retained-mode change.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A new mark.
    Enter {
        /// Layer the mark lives in.
        layer: LayerId,
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Paint-order hint.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Bounds of the new payload, if known.
        bounds: Option<Rect>,
    },
    /// A mark whose payload or z-index changed.
    Update {
        /// Layer the mark lives in.
        layer: LayerId,
        /// Mark id.
        id: MarkId,
        /// Payload kind after the update.
        kind: MarkKind,
        /// Previous paint-order hint.
        old_z_index: i32,
        /// New paint-order hint.
        new_z_index: i32,
        /// The previous payload.
        old: Box<MarkPayload>,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Bounds of the previous payload, if known.
        old_bounds: Option<Rect>,
        /// Bounds of the new payload, if known.
        new_bounds: Option<Rect>,
    },
    /// A removed mark.
    Exit {
        /// Layer the mark lived in.
        layer: LayerId,
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Paint-order hint.
        z_index: i32,
        /// The removed payload.
        old: Box<MarkPayload>,
        /// Bounds of the removed payload, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// The id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    /// The layer of the affected mark.
    pub fn layer(&self) -> LayerId {
        match self {
            Self::Enter { layer, .. } | Self::Update { layer, .. } | Self::Exit { layer, .. } => {
                *layer
            }
        }
    }

    fn from_change(layer: LayerId, change: Change<MarkId, (i32, MarkPayload)>) -> Self {
        match change {
            Change::Enter {
                key,
                new: (z_index, new),
            } => Self::Enter {
                layer,
                id: key,
                kind: new.kind(),
                z_index,
                bounds: new.bounds(),
                new: Box::new(new),
            },
            Change::Update {
                key,
                old: (old_z_index, old),
                new: (new_z_index, new),
            } => Self::Update {
                layer,
                id: key,
                kind: new.kind(),
                old_z_index,
                new_z_index,
                old_bounds: old.bounds(),
                new_bounds: new.bounds(),
                old: Box::new(old),
                new: Box::new(new),
            },
            Change::Exit {
                key,
                old: (z_index, old),
            } => Self::Exit {
                layer,
                id: key,
                kind: old.kind(),
                z_index,
                bounds: old.bounds(),
                old: Box::new(old),
            },
        }
    }
}

#[derive(Clone, Debug)]
struct Layer {
    id: LayerId,
    marks: KeyedSet<MarkId, (i32, MarkPayload)>,
}

/// Retained scene state: ordered layers of keyed marks.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    layers: SmallVec<[Layer; 4]>,
}

impl Scene {
    /// Creates an empty scene with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene with the given layers, first layer painted first.
    pub fn with_layers(layers: impl IntoIterator<Item = LayerId>) -> Self {
        let mut scene = Self::new();
        for layer in layers {
            scene.add_layer(layer);
        }
        scene
    }

    /// Appends a layer on top of the existing ones. Adding an existing layer is a no-op.
    pub fn add_layer(&mut self, id: LayerId) {
        if self.layer_index(id).is_none() {
            self.layers.push(Layer {
                id,
                marks: KeyedSet::new(),
            });
        }
    }

    /// Layer ids in paint order.
    pub fn layer_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.iter().map(|l| l.id)
    }

    /// Reconciles one layer against a new list of marks.
    ///
    /// Marks are matched by [`MarkId`]. Unchanged marks produce no diff, so ticking the same
    /// marks twice returns an empty list the second time.
    pub fn tick_layer(
        &mut self,
        layer: LayerId,
        marks: impl IntoIterator<Item = Mark>,
    ) -> Result<Vec<MarkDiff>, SceneError> {
        let index = self
            .layer_index(layer)
            .ok_or(SceneError::UnknownLayer(layer))?;
        let changes = self.layers[index]
            .marks
            .reconcile(marks.into_iter().map(|m| (m.id, (m.z_index, m.payload))))?;
        Ok(changes
            .into_iter()
            .map(|c| MarkDiff::from_change(layer, c))
            .collect())
    }

    /// Removes every mark from one layer.
    pub fn clear_layer(&mut self, layer: LayerId) -> Result<Vec<MarkDiff>, SceneError> {
        let index = self
            .layer_index(layer)
            .ok_or(SceneError::UnknownLayer(layer))?;
        Ok(self.layers[index]
            .marks
            .clear()
            .into_iter()
            .map(|c| MarkDiff::from_change(layer, c))
            .collect())
    }

    /// Removes every mark from every layer. Layers themselves are kept.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let mut out = Vec::new();
        for layer in &mut self.layers {
            let id = layer.id;
            out.extend(
                layer
                    .marks
                    .clear()
                    .into_iter()
                    .map(|c| MarkDiff::from_change(id, c)),
            );
        }
        out
    }

    /// Total number of marks across all layers.
    pub fn mark_count(&self) -> usize {
        self.layers.iter().map(|l| l.marks.len()).sum()
    }

    /// Number of marks in one layer (`0` for unknown layers).
    pub fn layer_len(&self, layer: LayerId) -> usize {
        self.layer_index(layer)
            .map_or(0, |i| self.layers[i].marks.len())
    }

    /// Looks up a mark's z-index and payload.
    pub fn get(&self, layer: LayerId, id: MarkId) -> Option<(i32, &MarkPayload)> {
        let index = self.layer_index(layer)?;
        self.layers[index].marks.get(&id).map(|(z, p)| (*z, p))
    }

    /// All marks in paint order: by layer, then `(z_index, id)` within a layer.
    pub fn marks_in_paint_order(&self) -> Vec<(LayerId, MarkId, i32, &MarkPayload)> {
        let mut out = Vec::with_capacity(self.mark_count());
        for layer in &self.layers {
            let start = out.len();
            out.extend(layer.marks.iter().map(|(id, (z, p))| (layer.id, id, *z, p)));
            out[start..].sort_by_key(|(_, id, z, _)| (*z, *id));
        }
        out
    }

    fn layer_index(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }
}
