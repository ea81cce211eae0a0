//! Galaxy addressing.
//!
//! A [`SystemPath`] names a sector cell, a system inside it, and optionally
//! one body of that system. The path is all that needs persisting: the
//! system itself is regenerated from it.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPath {
    pub sector_x: i32,
    pub sector_y: i32,
    pub sector_z: i32,
    pub system_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_index: Option<u32>,
}

impl SystemPath {
    pub fn new(sector_x: i32, sector_y: i32, sector_z: i32, system_index: u32) -> Self {
        Self {
            sector_x,
            sector_y,
            sector_z,
            system_index,
            body_index: None,
        }
    }

    pub fn with_body(self, body_index: u32) -> Self {
        Self {
            body_index: Some(body_index),
            ..self
        }
    }

    /// The same path with any body selector dropped.
    pub fn system_only(self) -> Self {
        Self {
            body_index: None,
            ..self
        }
    }

    pub fn is_system_path(&self) -> bool {
        self.body_index.is_none()
    }

    pub fn is_body_path(&self) -> bool {
        self.body_index.is_some()
    }

    pub fn is_same_sector(&self, other: &SystemPath) -> bool {
        self.sector_x == other.sector_x
            && self.sector_y == other.sector_y
            && self.sector_z == other.sector_z
    }

    pub fn is_same_system(&self, other: &SystemPath) -> bool {
        self.is_same_sector(other) && self.system_index == other.system_index
    }

    /// True when this path's sector lies inside the axis-aligned cube of
    /// half-width `radius` sectors centred on `origin`'s sector.
    pub fn within_box(&self, origin: &SystemPath, radius: i32) -> bool {
        let within = |a: i32, b: i32| (a as i64 - b as i64).abs() <= radius as i64;
        within(self.sector_x, origin.sector_x)
            && within(self.sector_y, origin.sector_y)
            && within(self.sector_z, origin.sector_z)
    }

    /// The path as seed words for a random stream:
    /// `[system_index, x, y, z]`.
    pub fn seed_words(&self) -> [u32; 4] {
        [
            self.system_index,
            self.sector_x as u32,
            self.sector_y as u32,
            self.sector_z as u32,
        ]
    }

    /// Squared distance of the sector cell from the galactic origin cell.
    pub fn sector_distance_squared(&self) -> i64 {
        let (x, y, z) = (
            self.sector_x as i64,
            self.sector_y as i64,
            self.sector_z as i64,
        );
        x * x + y * y + z * z
    }
}

impl fmt::Display for SystemPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({},{},{}):{}",
            self.sector_x, self.sector_y, self.sector_z, self.system_index
        )?;
        if let Some(body) = self.body_index {
            write!(f, "/{}", body)?;
        }
        Ok(())
    }
}
