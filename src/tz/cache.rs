use std::sync::RwLock;

/// A single-slot memo of the most recent zone lookup for a location.
///
/// The slot holds an immutable snapshot. A reader takes the read lock and
/// copies the snapshot out, while a writer replaces the whole snapshot under
/// the write lock, so a reader never observes a partially written entry.
///
/// The cache is never required for correctness. A poisoned lock is treated
/// as a miss, and a failed store is dropped.
#[derive(Debug)]
pub(crate) struct ZoneCache {
    slot: RwLock<Option<CachedZone>>,
}

/// The zone in effect over the half-open range `start..end` of Unix seconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CachedZone {
    pub(crate) zone: usize,
    pub(crate) start: i64,
    pub(crate) end: i64,
}

impl CachedZone {
    fn contains(&self, unix_seconds: i64) -> bool {
        self.start <= unix_seconds && unix_seconds < self.end
    }
}

impl ZoneCache {
    pub(crate) fn new() -> ZoneCache {
        ZoneCache { slot: RwLock::new(None) }
    }

    /// Returns the cached zone when its range contains `unix_seconds`.
    pub(crate) fn get(&self, unix_seconds: i64) -> Option<CachedZone> {
        let slot = match self.slot.read() {
            Ok(slot) => slot,
            Err(_) => {
                warn!("zone cache lock is poisoned, treating as a miss");
                return None;
            }
        };
        (*slot).filter(|cached| cached.contains(unix_seconds))
    }

    /// Replaces the cached zone.
    pub(crate) fn set(&self, cached: CachedZone) {
        match self.slot.write() {
            Ok(mut slot) => *slot = Some(cached),
            Err(_) => {
                warn!("zone cache lock is poisoned, dropping {cached:?}");
            }
        }
    }
}
