//! Deterministic star system generation
//!
//! Builds a complete [`StarSystem`] (stars, planets, moons, stations,
//! population, economy and permanent hyperspace clouds) from nothing but a
//! [`SystemPath`] and the sector's metadata for it. The same inputs always
//! produce the same system, so only the path ever needs storing.
//!
//! [`SystemCache`] keeps generated systems alive while something still holds
//! them and evicts them once they are both unreferenced and far away.

pub mod binary;
pub mod cache;
pub mod config;
pub mod context;
pub mod custom;
pub mod disc;
pub mod generation;
pub mod hypercloud;
pub mod naming;
pub mod planet;
pub mod population;
pub mod stars;
pub mod stations;

pub use cache::SystemCache;
pub use config::{load_config, GeneratorConfig};
pub use context::GenContext;
pub use generation::generate;
pub use naming::NameGenerator;

// Re-export the data model for convenience
pub use star_system::{
    BodyId, SectorSource, SectorSystem, SectorTable, StarSystem, SysgenError, SystemBody,
    SystemPath,
};

#[cfg(test)]
mod binary_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod disc_test;
#[cfg(test)]
mod planet_test;
#[cfg(test)]
mod stars_test;
