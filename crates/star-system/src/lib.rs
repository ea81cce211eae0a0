//! Star system data model
//!
//! A generated system is a tree of [`SystemBody`] nodes stored in a
//! [`StarSystem`] arena, addressed from outside by [`SystemPath`]. This crate
//! also holds the per-body derivations that only need the body itself
//! (atmosphere, rings, descriptions) and the seeded [`Random`] stream every
//! generation step draws from.

pub mod atmosphere;
pub mod body;
pub mod commodity;
pub mod custom;
pub mod description;
pub mod error;
pub mod orbit;
pub mod path;
pub mod polit;
pub mod random;
pub mod rings;
pub mod sector;
pub mod system;

pub use atmosphere::pick_atmosphere;
pub use body::{BodyId, Color, RingStyle, SystemBody};
pub use commodity::{Commodity, EconType};
pub use custom::{CustomSystem, CustomSystemBody, RingRequest};
pub use description::astro_description;
pub use error::SysgenError;
pub use orbit::{rotate_x, rotate_y, rotate_z, Orbit};
pub use path::SystemPath;
pub use polit::{GovType, SysPolit};
pub use random::Random;
pub use rings::pick_rings;
pub use sector::{SectorSource, SectorSystem, SectorTable};
pub use system::StarSystem;

#[cfg(test)]
mod custom_test;
#[cfg(test)]
mod description_test;
#[cfg(test)]
mod orbit_test;
#[cfg(test)]
mod sector_test;
