//! Region name to zone identifier cache

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::models::Zone;

/// Region display name -> active zone
///
/// Entries are only ever added or overwritten, never evicted. Readers share the
/// lock; a refresh takes it exclusively for the duration of the merge only.
#[derive(Debug, Default)]
pub struct RegionCache {
    zones: RwLock<HashMap<String, Zone>>,
}

impl RegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone identifier for a region name, if cached
    pub fn lookup(&self, region: &str) -> Option<String> {
        self.read().get(region).map(|zone| zone.uuid.clone())
    }

    /// Merge a zone listing into the cache, skipping inactive zones
    ///
    /// Returns the number of zones stored.
    pub fn absorb(&self, zones: &[Zone]) -> usize {
        let mut map = self.write();
        let mut stored = 0;
        for zone in zones.iter().filter(|z| z.is_active) {
            map.insert(zone.name.clone(), zone.clone());
            stored += 1;
        }
        stored
    }

    /// Every cached region name, sorted
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored: every insert leaves the map consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Zone>> {
        self.zones.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Zone>> {
        self.zones.write().unwrap_or_else(PoisonError::into_inner)
    }
}
