//! Sector metadata: what the galaxy knows about a system before it is
//! generated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stellar::BodyType;
use tracing::debug;

use crate::custom::CustomSystem;
use crate::error::SysgenError;
use crate::path::SystemPath;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSystem {
    pub name: String,
    pub seed: u32,
    pub num_stars: usize,
    /// One entry per star; missing entries are drawn at random
    #[serde(default)]
    pub star_types: Vec<BodyType>,
    #[serde(default)]
    pub custom: Option<Arc<CustomSystem>>,
    #[serde(default = "explored_default")]
    pub explored: bool,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub is_home_system: bool,
}

fn explored_default() -> bool {
    true
}

impl SectorSystem {
    pub fn new(name: impl Into<String>, seed: u32, star_types: Vec<BodyType>) -> Self {
        Self {
            name: name.into(),
            seed,
            num_stars: star_types.len(),
            star_types,
            custom: None,
            explored: true,
            faction: None,
            is_home_system: false,
        }
    }
}

/// Source of per-system sector metadata.
pub trait SectorSource: Send + Sync {
    fn system(&self, path: &SystemPath) -> Option<SectorSystem>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectorEntry {
    path: SystemPath,
    system: SectorSystem,
}

/// An in-memory sector source keyed by system path.
#[derive(Debug, Clone, Default)]
pub struct SectorTable {
    systems: HashMap<SystemPath, SectorSystem>,
}

impl SectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: SystemPath, system: SectorSystem) {
        self.systems.insert(path.system_only(), system);
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Parses a JSON array of `{ "path": ..., "system": ... }` entries.
    pub fn from_json(json: &str) -> Result<Self, SysgenError> {
        let entries: Vec<SectorEntry> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.path, entry.system);
        }
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SysgenError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        debug!(file = %path.display(), systems = table.len(), "loaded sector table");
        Ok(table)
    }
}

impl SectorSource for SectorTable {
    fn system(&self, path: &SystemPath) -> Option<SectorSystem> {
        self.systems.get(&path.system_only()).cloned()
    }
}
