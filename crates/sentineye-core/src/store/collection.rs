// ── Generic reactive entity collection ──
//
// Lock-free concurrent storage keyed by canonical ids, with push-based
// change notification via `watch` channels. Snapshots are rebuilt on
// every mutation and kept sorted by key so capped previews derived from
// them are deterministic.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::watch;

use crate::stream::Snapshot;

pub(crate) struct EntityCollection<K, T>
where
    K: Eq + Ord + std::hash::Hash + Clone,
    T: Send + Sync + 'static,
{
    entries: DashMap<K, Arc<T>>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Full snapshot, sorted by key, rebuilt on mutation.
    snapshot: watch::Sender<Snapshot<T>>,
}

impl<K, T> EntityCollection<K, T>
where
    K: Eq + Ord + std::hash::Hash + Clone,
    T: Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            entries: DashMap::new(),
            version,
            snapshot,
        }
    }

    /// Insert or replace an entity. Returns `true` if the key was new.
    pub(crate) fn upsert(&self, key: K, entity: T) -> bool {
        let is_new = self.entries.insert(key, Arc::new(entity)).is_none();
        self.publish();
        is_new
    }

    /// Remove an entity. Returns the removed entity if it existed.
    pub(crate) fn remove(&self, key: &K) -> Option<Arc<T>> {
        let removed = self.entries.remove(key).map(|(_, v)| v);
        if removed.is_some() {
            self.publish();
        }
        removed
    }

    pub(crate) fn get(&self, key: &K) -> Option<Arc<T>> {
        self.entries.get(key).map(|r| Arc::clone(r.value()))
    }

    /// Replace the entity under `key` with `f`'s result. `f` returning
    /// `None` means "no transition applies" and leaves the entry alone.
    /// Returns whether a replacement happened.
    pub(crate) fn update<F>(&self, key: &K, f: F) -> bool
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let Some(mut entry) = self.entries.get_mut(key) else {
            return false;
        };
        let Some(next) = f(entry.value()) else {
            return false;
        };
        *entry.value_mut() = Arc::new(next);
        // Release the shard lock before rebuilding the snapshot.
        drop(entry);
        self.publish();
        true
    }

    /// Apply `f` to every entry, replacing those where it yields a value.
    /// Returns how many entries changed.
    pub(crate) fn update_all<F>(&self, f: F) -> usize
    where
        F: Fn(&T) -> Option<T>,
    {
        let mut changed = 0;
        for mut entry in self.entries.iter_mut() {
            if let Some(next) = f(entry.value()) {
                *entry.value_mut() = Arc::new(next);
                changed += 1;
            }
        }
        if changed > 0 {
            self.publish();
        }
        changed
    }

    /// Current snapshot (cheap `Arc` clone), sorted by key.
    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn version(&self) -> u64 {
        *self.version.borrow()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Rebuild the sorted snapshot and bump the version counter.
    fn publish(&self) {
        let mut pairs: Vec<(K, Arc<T>)> = self
            .entries
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let values: Vec<Arc<T>> = pairs.into_iter().map(|(_, v)| v).collect();

        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
        self.version.send_modify(|v| *v += 1);
    }
}
