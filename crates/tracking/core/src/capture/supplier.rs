//! Capture containers.
//!
//! A capture buffers side effects observed during a phase so they can be
//! validated, attributed, and replayed once the phase completes. Empty
//! containers do not allocate, so a declared-but-unused capture costs nothing.
use std::collections::BTreeMap;
use std::mem;

use uuid::Uuid;

use crate::model::{BlockPos, BlockSnapshot, Entity, ItemDropData, ItemEntity};

/// Ordered list capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedSupplier<T> {
    captured: Vec<T>,
}

impl<T> CapturedSupplier<T> {
    pub fn new() -> Self {
        Self {
            captured: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.captured.push(value);
    }

    /// Captured values in the order they were observed.
    pub fn get(&self) -> &[T] {
        &self.captured
    }

    pub fn get_mut(&mut self) -> &mut Vec<T> {
        &mut self.captured
    }

    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }

    pub fn len(&self) -> usize {
        self.captured.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.captured.iter()
    }

    /// Removes and returns everything captured so far.
    pub fn take(&mut self) -> Vec<T> {
        mem::take(&mut self.captured)
    }

    /// Hands the captured values to `consumer` and clears the capture, but
    /// only if something was captured. Returns whether `consumer` ran.
    pub fn accept_and_clear_if_not_empty(&mut self, consumer: impl FnOnce(Vec<T>)) -> bool {
        if self.captured.is_empty() {
            return false;
        }
        consumer(self.take());
        true
    }
}

impl<T> Default for CapturedSupplier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CapturedSupplier<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.captured.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a CapturedSupplier<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.captured.iter()
    }
}

/// Key to ordered-list capture.
///
/// Keys iterate in ascending order so replay is deterministic; values under
/// one key keep the order they were observed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedMultiMapSupplier<K, V> {
    captured: BTreeMap<K, Vec<V>>,
}

impl<K: Ord, V> CapturedMultiMapSupplier<K, V> {
    pub fn new() -> Self {
        Self {
            captured: BTreeMap::new(),
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        self.captured.entry(key).or_default().push(value);
    }

    pub fn put_all(&mut self, key: K, values: impl IntoIterator<Item = V>) {
        self.captured.entry(key).or_default().extend(values);
    }

    /// Values captured under `key`; empty if none were.
    pub fn get(&self, key: &K) -> &[V] {
        self.captured.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.captured.contains_key(key)
    }

    pub fn as_map(&self) -> &BTreeMap<K, Vec<V>> {
        &self.captured
    }

    pub fn get_mut(&mut self) -> &mut BTreeMap<K, Vec<V>> {
        &mut self.captured
    }

    pub fn remove_all(&mut self, key: &K) -> Vec<V> {
        self.captured.remove(key).unwrap_or_default()
    }

    /// True if no value is captured under any key.
    pub fn is_empty(&self) -> bool {
        self.captured.values().all(Vec::is_empty)
    }

    /// Total number of captured values across all keys.
    pub fn len(&self) -> usize {
        self.captured.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.captured
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }

    pub fn take(&mut self) -> BTreeMap<K, Vec<V>> {
        mem::take(&mut self.captured)
    }

    /// Multimap counterpart of [`CapturedSupplier::accept_and_clear_if_not_empty`].
    pub fn accept_and_clear_if_not_empty(
        &mut self,
        consumer: impl FnOnce(BTreeMap<K, Vec<V>>),
    ) -> bool {
        if self.is_empty() {
            return false;
        }
        consumer(self.take());
        true
    }
}

impl<K: Ord, V> Default for CapturedMultiMapSupplier<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

pub type CapturedBlocksSupplier = CapturedSupplier<BlockSnapshot>;
pub type CapturedEntitiesSupplier = CapturedSupplier<Entity>;
pub type CapturedItemsSupplier = CapturedSupplier<ItemEntity>;
pub type CapturedItemStackSupplier = CapturedSupplier<ItemDropData>;
pub type BlockItemDropsSupplier = CapturedMultiMapSupplier<BlockPos, ItemDropData>;
pub type BlockItemEntityDropsSupplier = CapturedMultiMapSupplier<BlockPos, ItemEntity>;
pub type EntityItemDropsSupplier = CapturedMultiMapSupplier<Uuid, ItemDropData>;
pub type EntityItemEntityDropsSupplier = CapturedMultiMapSupplier<Uuid, ItemEntity>;
