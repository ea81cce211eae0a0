//! Generator configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use star_system::SysgenError;
use units::DEFAULT_UNIVERSE_SEED;

/// Tunables shared by every system a generator builds.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Mixed into every random stream; changing it yields a different galaxy
    pub universe_seed: u32,
    /// Half-width, in sectors, of the box around the current system inside
    /// which unreferenced cached systems are kept
    pub survivor_radius: i32,
    /// Largest trade level after renormalization, in percent
    pub max_trade_adjustment: i32,
    /// Trade levels are jittered by up to this many percent either way
    pub trade_jitter: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            universe_seed: DEFAULT_UNIVERSE_SEED,
            survivor_radius: 30,
            max_trade_adjustment: 25,
            trade_jitter: 5,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, SysgenError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reads a [`GeneratorConfig`] from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<GeneratorConfig, SysgenError> {
    let json = fs::read_to_string(path)?;
    GeneratorConfig::from_json(&json)
}
