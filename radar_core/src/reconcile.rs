// Copyright 2025 the Radar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed reconciliation.
//!
//! Every scene layer is reconciled the same way: the previous render is a keyed set, the
//! next render is an ordered list of keyed items, and the difference is reported as
//! enter/update/exit changes. [`KeyedSet`] implements that once for any key and value type.

extern crate alloc;

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Errors returned by [`KeyedSet::reconcile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// Two items in the next render share a key.
    ///
    /// `index` is the position of the second occurrence.
    #[error("duplicate key at position {index} of the next render")]
    DuplicateKey {
        /// Position of the repeated key in the input list.
        index: usize,
    },
}

/// One change produced by reconciliation.
#[derive(Clone, Debug, PartialEq)]
pub enum Change<K, V> {
    /// A key that was not present before.
    Enter {
        /// The key.
        key: K,
        /// The value now stored.
        new: V,
    },
    /// A key present before and after, whose value changed.
    Update {
        /// The key.
        key: K,
        /// The previous value.
        old: V,
        /// The value now stored.
        new: V,
    },
    /// A key that is no longer present.
    Exit {
        /// The key.
        key: K,
        /// The value that was removed.
        old: V,
    },
}

impl<K: Copy, V> Change<K, V> {
    /// Returns the key this change refers to.
    pub fn key(&self) -> K {
        match self {
            Self::Enter { key, .. } | Self::Update { key, .. } | Self::Exit { key, .. } => *key,
        }
    }
}

/// An ordered, keyed collection that can be reconciled against a new item list.
#[derive(Clone, Debug)]
pub struct KeyedSet<K, V> {
    order: Vec<K>,
    items: HashMap<K, V>,
}

impl<K, V> Default for KeyedSet<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<K, V> KeyedSet<K, V>
where
    K: Copy + Eq + Hash,
    V: Clone + PartialEq,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a stored value.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.items.get(key)
    }

    /// Iterates stored items in the order of the last reconciliation.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.order
            .iter()
            .filter_map(|k| self.items.get(k).map(|v| (*k, v)))
    }

    /// Replaces the stored items with `next`, returning what changed.
    ///
    /// Changes are ordered: enters and updates follow `next`, then exits follow the previous
    /// order. Items whose value is unchanged produce no change. On error the set is left
    /// untouched.
    pub fn reconcile(
        &mut self,
        next: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Vec<Change<K, V>>, ReconcileError> {
        let next: Vec<(K, V)> = next.into_iter().collect();

        let mut seen: HashSet<K> = HashSet::with_capacity(next.len());
        for (index, (key, _)) in next.iter().enumerate() {
            if !seen.insert(*key) {
                return Err(ReconcileError::DuplicateKey { index });
            }
        }

        let mut previous = core::mem::take(&mut self.items);
        let previous_order = core::mem::take(&mut self.order);
        let mut changes = Vec::new();

        self.order.reserve(next.len());
        self.items.reserve(next.len());
        for (key, value) in next {
            match previous.remove(&key) {
                Some(old) if old == value => {}
                Some(old) => changes.push(Change::Update {
                    key,
                    old,
                    new: value.clone(),
                }),
                None => changes.push(Change::Enter {
                    key,
                    new: value.clone(),
                }),
            }
            self.order.push(key);
            self.items.insert(key, value);
        }

        for key in previous_order {
            if let Some(old) = previous.remove(&key) {
                changes.push(Change::Exit { key, old });
            }
        }

        Ok(changes)
    }

    /// Removes everything, returning one exit per stored item.
    pub fn clear(&mut self) -> Vec<Change<K, V>> {
        let mut items = core::mem::take(&mut self.items);
        core::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|key| items.remove(&key).map(|old| Change::Exit { key, old }))
            .collect()
    }
}
