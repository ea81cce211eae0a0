//! Shared cache of generated systems.
//!
//! Systems are handed out as `Arc<StarSystem>`. The cache holds one strong
//! reference itself, so a system is unused exactly when its strong count is
//! one, and only then can [`SystemCache::shrink_cache`] drop it.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use star_system::{SectorSource, StarSystem, SysgenError, SystemPath};
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::generation::generate;

pub struct SystemCache {
    systems: DashMap<SystemPath, Arc<StarSystem>>,
    sectors: Arc<dyn SectorSource>,
    config: GeneratorConfig,
}

impl SystemCache {
    pub fn new(sectors: Arc<dyn SectorSource>, config: GeneratorConfig) -> Self {
        Self {
            systems: DashMap::new(),
            sectors,
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The system at `path` (any body selector is ignored), generated on
    /// first use. Every call returns a new reference to the same system
    /// while it stays cached.
    pub fn get_cached(&self, path: &SystemPath) -> Result<Arc<StarSystem>, SysgenError> {
        let key = path.system_only();
        if let Some(system) = self.systems.get(&key) {
            trace!(path = %key, "cache hit");
            return Ok(Arc::clone(system.value()));
        }

        let sector = self
            .sectors
            .system(&key)
            .ok_or(SysgenError::UnknownSystem(key))?;

        // Another caller may have generated it since the lookup above
        match self.systems.entry(key) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let system = Arc::new(generate(&key, &sector, &self.config)?);
                entry.insert(Arc::clone(&system));
                debug!(path = %key, name = %system.name, "cached system");
                Ok(system)
            }
        }
    }

    /// Drops every system nobody outside the cache holds, unless it lies
    /// within the survivor box around `origin`. `clear` ignores the box.
    /// Returns how many systems were dropped.
    pub fn shrink_cache(&self, origin: &SystemPath, clear: bool) -> usize {
        let radius = self.config.survivor_radius;
        let mut evicted = 0;
        self.systems.retain(|path, system| {
            let unused = Arc::strong_count(system) == 1;
            let far = clear || !path.within_box(origin, radius);
            if unused && far {
                evicted += 1;
                false
            } else {
                true
            }
        });
        if evicted > 0 {
            debug!(evicted, remaining = self.systems.len(), "shrank system cache");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn contains(&self, path: &SystemPath) -> bool {
        self.systems.contains_key(&path.system_only())
    }
}
