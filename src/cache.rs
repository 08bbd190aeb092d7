//! Snapshot cache keyed by search-path configuration.
//!
//! Snapshots are built on first request and kept for the life of the cache.
//! They are never checked against the filesystem again: changes on disk show
//! up only after [`CatalogCache::clear`] for that key. Slots are only ever
//! appended, so a slot number handed out stays valid.
//!
//! The cache is not synchronized; share it behind a `Mutex` when needed.

use crate::catalog::CatalogSnapshot;
use crate::config::{CatalogConfig, SearchDirs};
use crate::error::Result;
use tracing::debug;

/// Remembers which slot a caller used last so a repeat lookup with the same
/// configuration skips the linear search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheHint {
    slot: Option<usize>,
}

impl CacheHint {
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }
}

#[derive(Debug, Default)]
pub struct CatalogCache {
    snapshots: Vec<CatalogSnapshot>,
    builds: usize,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for `dirs`, building it if it holds no data.
    pub fn get(&mut self, dirs: &SearchDirs) -> Result<&CatalogSnapshot> {
        let mut hint = CacheHint::default();
        self.get_with_hint(dirs, &mut hint)
    }

    /// Snapshot for the search dirs of `config`.
    pub fn get_for(
        &mut self,
        config: &CatalogConfig,
        hint: &mut CacheHint,
    ) -> Result<&CatalogSnapshot> {
        self.get_with_hint(&config.search_dirs(), hint)
    }

    /// Like [`CatalogCache::get`], trying the slot in `hint` first and
    /// updating it afterwards.
    ///
    /// A failed build leaves the slot empty and returns the error; other
    /// slots are untouched.
    pub fn get_with_hint(
        &mut self,
        dirs: &SearchDirs,
        hint: &mut CacheHint,
    ) -> Result<&CatalogSnapshot> {
        let hinted = hint.slot.filter(|&slot| {
            self.snapshots
                .get(slot)
                .is_some_and(|snapshot| snapshot.source_dirs() == dirs)
        });
        let slot = match hinted.or_else(|| self.find(dirs)) {
            Some(slot) => slot,
            None => {
                let slot = self.snapshots.len();
                self.snapshots.push(CatalogSnapshot::empty(slot, dirs.clone()));
                slot
            }
        };
        hint.slot = Some(slot);

        let snapshot = &mut self.snapshots[slot];
        if snapshot.is_empty() {
            debug!(slot, dirs = ?dirs.as_slice(), "building catalog snapshot");
            self.builds += 1;
            snapshot.fill()?;
        }
        Ok(&self.snapshots[slot])
    }

    /// Reset the snapshot for `dirs` so the next `get` rebuilds it. Returns
    /// whether a snapshot for `dirs` existed.
    pub fn clear(&mut self, dirs: &SearchDirs) -> bool {
        match self.find(dirs) {
            Some(slot) => {
                debug!(slot, "clearing catalog snapshot");
                self.snapshots[slot].clear();
                true
            }
            None => false,
        }
    }

    /// Slot holding the snapshot for exactly `dirs`.
    pub fn find(&self, dirs: &SearchDirs) -> Option<usize> {
        self.snapshots
            .iter()
            .position(|snapshot| snapshot.source_dirs() == dirs)
    }

    pub fn snapshot(&self, slot: usize) -> Option<&CatalogSnapshot> {
        self.snapshots.get(slot)
    }

    /// Number of slots, including cleared ones.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// How many full filesystem builds this cache has run.
    pub fn build_count(&self) -> usize {
        self.builds
    }
}
