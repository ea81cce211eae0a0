//! Hand-authored system definitions.
//!
//! A [`CustomSystem`] overrides procedural generation for one system. With
//! no body tree it only supplies names and descriptions; with one, the tree
//! is built exactly as written. Definitions deserialize from JSON, and
//! optional fields left out are drawn from the system's random stream.

use serde::{Deserialize, Serialize};
use stellar::BodyType;
use units::Fixed;

use crate::body::Color;
use crate::polit::GovType;

/// What a custom body asks for in terms of rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RingRequest {
    None,
    /// Always rings, with random style
    Forced,
    /// The usual even chance
    #[default]
    Random,
    #[serde(rename_all = "camelCase")]
    Custom {
        min_radius: Fixed,
        max_radius: Fixed,
        color: Color,
    },
}

fn one() -> Fixed {
    Fixed::ONE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSystemBody {
    pub name: String,
    pub body_type: BodyType,
    /// `None` draws a seed from the system stream
    #[serde(default)]
    pub seed: Option<u32>,
    /// Solar radii for stars, earth radii otherwise
    #[serde(default)]
    pub radius: Fixed,
    #[serde(default = "one")]
    pub aspect_ratio: Fixed,
    /// Solar masses for stars, earth masses otherwise. Ignored for grav
    /// points, whose mass is the sum of their children.
    #[serde(default)]
    pub mass: Fixed,
    #[serde(default)]
    pub average_temp: i32,
    /// AU
    #[serde(default)]
    pub semi_major_axis: Fixed,
    #[serde(default)]
    pub eccentricity: Fixed,
    /// `None` draws a random offset
    #[serde(default)]
    pub orbital_offset: Option<Fixed>,
    #[serde(default)]
    pub orbital_phase_at_start: Fixed,
    /// Days
    #[serde(default)]
    pub rotation_period: Fixed,
    #[serde(default)]
    pub rotational_phase_at_start: Fixed,
    #[serde(default)]
    pub axial_tilt: Fixed,
    /// Radians. Orbital inclination, or settlement latitude for surface
    /// starports.
    #[serde(default)]
    pub latitude: Fixed,
    /// Radians, settlement longitude for surface starports
    #[serde(default)]
    pub longitude: Fixed,
    #[serde(default)]
    pub metallicity: Fixed,
    #[serde(default)]
    pub volatile_gas: Fixed,
    #[serde(default)]
    pub volatile_liquid: Fixed,
    #[serde(default)]
    pub volatile_ices: Fixed,
    #[serde(default)]
    pub volcanicity: Fixed,
    #[serde(default)]
    pub atmos_oxidizing: Fixed,
    #[serde(default)]
    pub life: Fixed,
    #[serde(default)]
    pub rings: RingRequest,
    #[serde(default)]
    pub children: Vec<CustomSystemBody>,
}

impl CustomSystemBody {
    /// A body of the given kind with every numeric field zeroed.
    pub fn new(name: impl Into<String>, body_type: BodyType) -> Self {
        Self {
            name: name.into(),
            body_type,
            seed: None,
            radius: Fixed::ZERO,
            aspect_ratio: Fixed::ONE,
            mass: Fixed::ZERO,
            average_temp: 0,
            semi_major_axis: Fixed::ZERO,
            eccentricity: Fixed::ZERO,
            orbital_offset: None,
            orbital_phase_at_start: Fixed::ZERO,
            rotation_period: Fixed::ZERO,
            rotational_phase_at_start: Fixed::ZERO,
            axial_tilt: Fixed::ZERO,
            latitude: Fixed::ZERO,
            longitude: Fixed::ZERO,
            metallicity: Fixed::ZERO,
            volatile_gas: Fixed::ZERO,
            volatile_liquid: Fixed::ZERO,
            volatile_ices: Fixed::ZERO,
            volcanicity: Fixed::ZERO,
            atmos_oxidizing: Fixed::ZERO,
            life: Fixed::ZERO,
            rings: RingRequest::Random,
            children: Vec::new(),
        }
    }

    /// True when nothing in this subtree is left to the random stream.
    pub fn is_fully_specified(&self) -> bool {
        self.seed.is_some()
            && self.orbital_offset.is_some()
            && self.children.iter().all(CustomSystemBody::is_fully_specified)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSystem {
    pub name: String,
    pub num_stars: usize,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub long_desc: String,
    #[serde(default)]
    pub gov_type: Option<GovType>,
    /// `None` keeps procedural bodies
    #[serde(default)]
    pub bodies: Option<CustomSystemBody>,
}

impl CustomSystem {
    pub fn is_random(&self) -> bool {
        self.bodies.is_none()
    }
}
